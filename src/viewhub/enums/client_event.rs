use serde::{Deserialize, Serialize};
use crate::viewhub::structs::client_response::ClientResponse;
use crate::viewhub::structs::new_value::NewValue;
use crate::viewhub::structs::response_body::ResponseBody;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    ModelResponse(ClientResponse),
    EditResponse(ClientResponse),
    InvokeResponse(ClientResponse),
    SubscribeResponse(ClientResponse),
    UnsubscribeResponse(ClientResponse),
    NewValue(NewValue),
    /// The inbound frame could not be understood.
    Error(ResponseBody),
}
