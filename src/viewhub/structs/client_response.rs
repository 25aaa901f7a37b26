use serde::{Deserialize, Serialize};
use crate::viewhub::structs::client_request::ClientRequest;
use crate::viewhub::structs::response_body::ResponseBody;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub request_id: String,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_name: Option<String>,
    pub response_body: ResponseBody,
    /// The normalized request this answers.
    pub request: ClientRequest,
}
