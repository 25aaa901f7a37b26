use serde_json::Value;
use crate::storage::types::Document;
use crate::viewhub::structs::response_body::ResponseBody;

impl ResponseBody {
    pub fn ok() -> ResponseBody {
        ResponseBody {
            success: true,
            result: None,
            model: None,
            error: None,
        }
    }

    pub fn with_result(result: Value) -> ResponseBody {
        ResponseBody {
            result: Some(result),
            ..Self::ok()
        }
    }

    pub fn with_model(model: Document) -> ResponseBody {
        ResponseBody {
            model: Some(model),
            ..Self::ok()
        }
    }

    pub fn error(message: &str) -> ResponseBody {
        ResponseBody {
            success: false,
            error: Some(message.to_string()),
            ..Self::ok()
        }
    }
}
