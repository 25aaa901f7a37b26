mod view_hub_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use serde_json::json;
    use tokio::sync::mpsc;
    use crate::sessions::structs::session_manager::SessionManager;
    use crate::storage::structs::memory_collection::MemoryCollection;
    use crate::viewhub::enums::client_event::ClientEvent;
    use crate::viewhub::enums::hub_error::HubError;
    use crate::viewhub::enums::hub_request::HubRequest;
    use crate::viewhub::enums::hub_request_kind::HubRequestKind;
    use crate::viewhub::impls::view_hub::REQUEST_TIMED_OUT;
    use crate::viewhub::structs::client_request::ClientRequest;
    use crate::viewhub::structs::response_body::ResponseBody;
    use crate::viewhub::structs::view_hub::ViewHub;

    fn hub(timeout: Duration) -> (Arc<ViewHub>, mpsc::UnboundedReceiver<HubRequest>) {
        let sessions = Arc::new(SessionManager::new(Arc::new(MemoryCollection::new("sessions")), Duration::from_secs(60)));
        ViewHub::new(sessions, timeout)
    }

    fn model_request(id: Option<&str>, session_id: Option<&str>) -> ClientRequest {
        ClientRequest {
            id: id.map(str::to_string),
            session_id: session_id.map(str::to_string),
            view_name: Some("counter".to_string()),
            ..Default::default()
        }
    }

    async fn next_view_request(requests: &mut mpsc::UnboundedReceiver<HubRequest>) -> (HubRequestKind, ClientRequest) {
        loop {
            match requests.recv().await.unwrap() {
                HubRequest::View(kind, request) => return (kind, request),
                _ => continue,
            }
        }
    }

    #[tokio::test]
    async fn test_connect_and_disconnect_are_forwarded() {
        let (hub, mut requests) = hub(Duration::ZERO);
        let (id, _events) = hub.connect();
        assert_eq!(hub.connection_count(), 1);
        assert_eq!(requests.recv().await.unwrap(), HubRequest::ClientConnected(id));

        hub.disconnect(id);
        hub.disconnect(id);
        assert_eq!(hub.connection_count(), 0);
        assert_eq!(requests.recv().await.unwrap(), HubRequest::ClientDisconnected(id));
        assert!(requests.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_request_normalization_creates_session_and_id() {
        let (hub, mut requests) = hub(Duration::ZERO);
        let (id, _events) = hub.connect();

        let request_id = hub.handle_request(id, HubRequestKind::ModelRequest, model_request(None, Some("stale"))).await.unwrap();
        let (kind, request) = next_view_request(&mut requests).await;
        assert_eq!(kind, HubRequestKind::ModelRequest);
        assert_eq!(request.id.as_deref(), Some(request_id.as_str()));
        let session_id = request.session_id.unwrap();
        assert_ne!(session_id, "stale");
        assert!(hub.sessions().get(&session_id).await.unwrap().is_some());
        assert_eq!(hub.connection_sessions(id), vec![session_id.clone()]);

        // A live session is kept as given.
        hub.handle_request(id, HubRequestKind::ModelRequest, model_request(Some("r2"), Some(session_id.as_str()))).await.unwrap();
        let (_, request) = next_view_request(&mut requests).await;
        assert_eq!(request.session_id.as_deref(), Some(session_id.as_str()));
        assert_eq!(hub.pending_count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_correlated() {
        let (hub, mut requests) = hub(Duration::ZERO);
        let (id, mut events) = hub.connect();

        for n in 0..10 {
            hub.handle_request(id, HubRequestKind::InvokeRequest, model_request(Some(&format!("req-{}", n)), None)).await.unwrap();
        }
        let mut received = Vec::new();
        for _ in 0..10 {
            received.push(next_view_request(&mut requests).await.1);
        }
        for request in received.iter().rev() {
            let request_id = request.id.clone().unwrap();
            let body = ResponseBody::with_result(json!(request_id));
            assert!(hub.send_response(None, body, request.session_id.as_deref().unwrap(), &request_id));
        }

        for _ in 0..10 {
            match events.recv().await.unwrap() {
                ClientEvent::InvokeResponse(response) => {
                    assert_eq!(response.response_body.result, Some(json!(response.request_id)));
                    assert_eq!(response.request.id.as_deref(), Some(response.request_id.as_str()));
                    assert_eq!(response.view_name.as_deref(), Some("counter"));
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(hub.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_response_is_delivered_once_to_requesting_socket() {
        let (hub, mut requests) = hub(Duration::ZERO);
        let (first, mut first_events) = hub.connect();
        let (_second, mut second_events) = hub.connect();

        hub.handle_request(first, HubRequestKind::EditRequest, model_request(Some("edit"), None)).await.unwrap();
        let (_, request) = next_view_request(&mut requests).await;
        let session_id = request.session_id.unwrap();

        assert!(hub.send_response(None, ResponseBody::ok(), &session_id, "edit"));
        assert!(!hub.send_response(None, ResponseBody::ok(), &session_id, "edit"));
        assert!(matches!(first_events.recv().await.unwrap(), ClientEvent::EditResponse(_)));
        assert!(first_events.try_recv().is_err());
        assert!(second_events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_duplicate_pending_id_is_replaced() {
        let (hub, _requests) = hub(Duration::ZERO);
        let (id, _events) = hub.connect();

        let first = hub.handle_request(id, HubRequestKind::ModelRequest, model_request(Some("same"), None)).await.unwrap();
        let second = hub.handle_request(id, HubRequestKind::ModelRequest, model_request(Some("same"), None)).await.unwrap();
        assert_eq!(first, "same");
        assert_ne!(second, "same");
        assert_eq!(hub.pending_count(), 2);
    }

    #[tokio::test]
    async fn test_request_times_out() {
        let (hub, _requests) = hub(Duration::from_millis(50));
        let (id, mut events) = hub.connect();

        hub.handle_request(id, HubRequestKind::ModelRequest, model_request(Some("slow"), None)).await.unwrap();
        let event = tokio::time::timeout(Duration::from_secs(2), events.recv()).await.unwrap().unwrap();
        match event {
            ClientEvent::ModelResponse(response) => {
                assert_eq!(response.request_id, "slow");
                assert!(!response.response_body.success);
                assert_eq!(response.response_body.error.as_deref(), Some(REQUEST_TIMED_OUT));
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(hub.pending_count(), 0);
        assert!(!hub.send_response(None, ResponseBody::ok(), "any", "slow"));
    }

    #[tokio::test]
    async fn test_request_without_application_is_rejected() {
        let (hub, requests) = hub(Duration::ZERO);
        drop(requests);
        let (id, mut events) = hub.connect();

        hub.handle_request(id, HubRequestKind::ModelRequest, model_request(Some("orphan"), None)).await.unwrap();
        match events.recv().await.unwrap() {
            ClientEvent::ModelResponse(response) => assert!(!response.response_body.success),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(hub.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_request_on_closed_connection_fails() {
        let (hub, _requests) = hub(Duration::ZERO);
        let (id, _events) = hub.connect();
        hub.disconnect(id);
        let result = hub.handle_request(id, HubRequestKind::ModelRequest, model_request(None, None)).await;
        assert!(matches!(result, Err(HubError::ConnectionClosed(closed)) if closed == id));
    }

    #[tokio::test]
    async fn test_new_value_goes_only_to_session_sockets() {
        let (hub, mut requests) = hub(Duration::ZERO);
        let (first, mut first_events) = hub.connect();
        let (second, mut second_events) = hub.connect();

        hub.handle_request(first, HubRequestKind::SubscribeRequest, model_request(Some("a"), None)).await.unwrap();
        let session_a = next_view_request(&mut requests).await.1.session_id.unwrap();
        hub.handle_request(second, HubRequestKind::SubscribeRequest, model_request(Some("b"), None)).await.unwrap();
        let session_b = next_view_request(&mut requests).await.1.session_id.unwrap();
        assert_ne!(session_a, session_b);

        assert_eq!(hub.send_new_value("counter", "value", json!(1), json!(2), &session_a), 1);
        match first_events.recv().await.unwrap() {
            ClientEvent::NewValue(value) => {
                assert_eq!(value.view_name, "counter");
                assert_eq!(value.property_name, "value");
                assert_eq!(value.old_value, json!(1));
                assert_eq!(value.new_value, json!(2));
                assert_eq!(value.session_id, session_a);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(second_events.try_recv().is_err());
        assert_eq!(hub.send_new_value("counter", "value", json!(1), json!(2), "nobody"), 0);
    }

    #[tokio::test]
    async fn test_subscriptions() {
        let (hub, _requests) = hub(Duration::ZERO);
        assert!(hub.subscribe("counter", "s1"));
        assert!(!hub.subscribe("counter", "s1"));
        hub.subscribe("counter", "s2");
        hub.subscribe("chat", "s1");
        assert_eq!(hub.subscribers("counter"), vec!["s1".to_string(), "s2".to_string()]);

        assert_eq!(hub.unsubscribe("counter", "s2"), 1);
        assert_eq!(hub.unsubscribe("*", "s1"), 2);
        assert!(hub.subscribers("counter").is_empty());
        assert!(hub.subscribers("chat").is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_cleans_pending_and_orphaned_subscriptions() {
        let (hub, mut requests) = hub(Duration::ZERO);
        let (first, _first_events) = hub.connect();
        let (second, _second_events) = hub.connect();

        hub.handle_request(first, HubRequestKind::SubscribeRequest, model_request(Some("solo"), None)).await.unwrap();
        let solo = next_view_request(&mut requests).await.1.session_id.unwrap();
        hub.handle_request(first, HubRequestKind::SubscribeRequest, model_request(Some("shared-1"), None)).await.unwrap();
        let shared = next_view_request(&mut requests).await.1.session_id.unwrap();
        hub.handle_request(second, HubRequestKind::SubscribeRequest, model_request(Some("shared-2"), Some(shared.as_str()))).await.unwrap();
        next_view_request(&mut requests).await;

        hub.subscribe("counter", &solo);
        hub.subscribe("counter", &shared);
        hub.subscribe("chat", &solo);

        hub.disconnect(first);
        assert_eq!(hub.pending_count(), 1);
        assert_eq!(hub.subscribers("counter"), vec![shared.clone()]);
        assert!(hub.subscribers("chat").is_empty());
        assert!(!hub.send_response(None, ResponseBody::ok(), &solo, "solo"));
        assert!(hub.send_response(None, ResponseBody::ok(), &shared, "shared-2"));
    }
}

mod protocol_tests {
    use serde_json::json;
    use crate::storage::types::Document;
    use crate::viewhub::enums::client_event::ClientEvent;
    use crate::viewhub::enums::hub_request_kind::HubRequestKind;
    use crate::viewhub::structs::client_request::ClientRequest;
    use crate::viewhub::structs::client_response::ClientResponse;
    use crate::viewhub::structs::hub_frame::HubFrame;
    use crate::viewhub::structs::response_body::ResponseBody;

    #[test]
    fn test_frame_parsing() {
        let frame: HubFrame = serde_json::from_value(json!({
            "event": "editRequest",
            "data": {"id": "1", "sessionId": "s", "viewName": "counter", "propertyName": "value", "newValue": 5}
        })).unwrap();
        assert_eq!(frame.event, HubRequestKind::EditRequest);
        assert_eq!(frame.data.property_name.as_deref(), Some("value"));
        assert_eq!(frame.data.new_value, Some(json!(5)));

        let frame: HubFrame = serde_json::from_value(json!({"event": "modelRequest"})).unwrap();
        assert_eq!(frame.data, ClientRequest::default());

        assert!(serde_json::from_value::<HubFrame>(json!({"event": "dance"})).is_err());
    }

    #[test]
    fn test_response_event_shape() {
        let mut model = Document::new();
        model.insert("value".to_string(), json!(1));
        let response = ClientResponse {
            request_id: "1".to_string(),
            session_id: "s".to_string(),
            view_name: Some("counter".to_string()),
            response_body: ResponseBody::with_model(model),
            request: ClientRequest::default(),
        };
        let event = HubRequestKind::ModelRequest.response_event(response);
        let encoded = serde_json::to_value(&event).unwrap();
        assert_eq!(encoded["event"], json!("modelResponse"));
        assert_eq!(encoded["data"]["requestId"], json!("1"));
        assert_eq!(encoded["data"]["responseBody"], json!({"success": true, "model": {"value": 1}}));

        let error = serde_json::to_value(ClientEvent::Error(ResponseBody::error("bad"))).unwrap();
        assert_eq!(error, json!({"event": "error", "data": {"success": false, "error": "bad"}}));
    }
}
