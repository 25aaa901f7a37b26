use crate::viewhub::enums::client_event::ClientEvent;
use crate::viewhub::enums::hub_request_kind::HubRequestKind;
use crate::viewhub::structs::client_response::ClientResponse;

impl HubRequestKind {
    pub fn response_event(&self, response: ClientResponse) -> ClientEvent {
        match self {
            HubRequestKind::ModelRequest => ClientEvent::ModelResponse(response),
            HubRequestKind::EditRequest => ClientEvent::EditResponse(response),
            HubRequestKind::InvokeRequest => ClientEvent::InvokeResponse(response),
            HubRequestKind::SubscribeRequest => ClientEvent::SubscribeResponse(response),
            HubRequestKind::UnsubscribeRequest => ClientEvent::UnsubscribeResponse(response),
        }
    }
}
