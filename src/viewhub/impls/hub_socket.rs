use std::sync::Arc;
use actix::prelude::*;
use actix_web_actors::ws;
use log::{debug, error, warn};
use crate::viewhub::enums::client_event::ClientEvent;
use crate::viewhub::structs::hub_frame::HubFrame;
use crate::viewhub::structs::hub_socket::HubSocket;
use crate::viewhub::structs::response_body::ResponseBody;
use crate::viewhub::structs::view_hub::ViewHub;

impl HubSocket {
    pub fn new(hub: Arc<ViewHub>) -> Self {
        Self {
            hub,
            connection_id: None,
        }
    }

    fn send_event(ctx: &mut ws::WebsocketContext<Self>, event: &ClientEvent) {
        match serde_json::to_string(event) {
            Ok(text) => ctx.text(text),
            Err(e) => error!("[VIEWHUB] Failed to encode event: {}", e),
        }
    }

    fn send_error(ctx: &mut ws::WebsocketContext<Self>, message: &str) {
        Self::send_event(ctx, &ClientEvent::Error(ResponseBody::error(message)));
    }

    pub fn handle_text_message(&mut self, ctx: &mut ws::WebsocketContext<Self>, text: &str) {
        let frame: HubFrame = match serde_json::from_str(text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("[VIEWHUB] Failed to parse frame: {}", e);
                Self::send_error(ctx, &format!("Invalid message format: {}", e));
                return;
            }
        };
        let Some(connection_id) = self.connection_id else {
            return;
        };
        let hub = self.hub.clone();
        ctx.spawn(
            async move { hub.handle_request(connection_id, frame.event, frame.data).await }
                .into_actor(self)
                .map(|result, _act, ctx| {
                    if let Err(e) = result {
                        warn!("[VIEWHUB] Request rejected: {}", e);
                        Self::send_error(ctx, &e.to_string());
                    }
                })
        );
    }
}

impl Actor for HubSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let (connection_id, events) = self.hub.connect();
        self.connection_id = Some(connection_id);
        ctx.add_stream(futures_util::stream::unfold(events, |mut events| async move {
            events.recv().await.map(|event| (event, events))
        }));
        debug!("[VIEWHUB] WebSocket connection {} started", connection_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(connection_id) = self.connection_id.take() {
            self.hub.disconnect(connection_id);
            debug!("[VIEWHUB] WebSocket connection {} stopped", connection_id);
        }
    }
}

impl StreamHandler<ClientEvent> for HubSocket {
    fn handle(&mut self, event: ClientEvent, ctx: &mut Self::Context) {
        Self::send_event(ctx, &event);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for HubSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(text)) => {
                self.handle_text_message(ctx, &text);
            }
            Ok(ws::Message::Binary(data)) => match std::str::from_utf8(&data) {
                Ok(text) => self.handle_text_message(ctx, text),
                Err(_) => Self::send_error(ctx, "Binary frames must be UTF-8 JSON"),
            },
            Ok(ws::Message::Close(reason)) => {
                debug!("[VIEWHUB] Close received: {:?}", reason);
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                error!("[VIEWHUB] WebSocket error: {}", e);
                ctx.stop();
            }
            _ => {}
        }
    }
}
