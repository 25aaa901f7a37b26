mod frame_buffer_tests {
    use crate::cluster::encoding::encoder::{decode_record, encode_frame};
    use crate::cluster::enums::encoding_error::EncodingError;
    use crate::cluster::enums::message_type::MessageType;
    use crate::cluster::structs::cluster_message::ClusterMessage;
    use crate::cluster::structs::frame_buffer::FrameBuffer;

    #[test]
    fn test_split_across_chunks() {
        let mut frames = FrameBuffer::new(1024);
        assert!(frames.push(b"{\"type\":\"lo").unwrap().is_empty());
        assert!(frames.push(b"ad\",\"value\":3}\r").unwrap().is_empty());
        let records = frames.push(b"\n").unwrap();
        assert_eq!(records, vec![b"{\"type\":\"load\",\"value\":3}".to_vec()]);
        assert!(frames.push(b"\r\n").unwrap().is_empty());
    }

    #[test]
    fn test_multiple_records_in_one_chunk() {
        let mut frames = FrameBuffer::new(1024);
        let records = frames.push(b"a\r\nb\r\n\r\nc").unwrap();
        assert_eq!(records, vec![b"a".to_vec(), b"b".to_vec()]);
        assert_eq!(frames.push(b"\r\n").unwrap(), vec![b"c".to_vec()]);
    }

    #[test]
    fn test_oversized_record_is_rejected() {
        let mut frames = FrameBuffer::new(8);
        match frames.push(b"0123456789\r\n") {
            Err(EncodingError::FrameTooLarge(8)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        let mut frames = FrameBuffer::new(8);
        assert!(frames.push(b"0123456789abcdef").is_err());
    }

    #[test]
    fn test_encoded_frame_decodes() {
        let message = ClusterMessage::load(7).with_sender("w1").stamped("secret");
        let frame = encode_frame(&message).unwrap();
        assert!(frame.ends_with(b"\r\n"));
        let mut frames = FrameBuffer::new(1024);
        let records = frames.push(&frame).unwrap();
        let decoded = decode_record(&records[0]).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(decoded.message_type, MessageType::Load);
    }

    #[test]
    fn test_delimiter_inside_string_is_escaped() {
        let message = ClusterMessage::new(MessageType::Data, serde_json::json!({"data": "line\r\nbreak"}));
        let frame = encode_frame(&message).unwrap();
        let mut frames = FrameBuffer::new(1024);
        let records = frames.push(&frame).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(decode_record(&records[0]).unwrap().value["data"], "line\r\nbreak");
    }
}

mod cluster_message_tests {
    use serde_json::json;
    use crate::cluster::enums::message_type::MessageType;
    use crate::cluster::structs::cluster_message::ClusterMessage;
    use crate::cluster::structs::sync_envelope::SyncEnvelope;
    use crate::cluster::structs::worker_address::WorkerAddress;

    #[test]
    fn test_wire_shape() {
        let envelope = SyncEnvelope {
            model_name: "test".to_string(),
            target: None,
            data: json!({"propertyName": "test"}),
        };
        let message = ClusterMessage::sync("w1", &envelope).unwrap().stamped("s");
        assert_eq!(serde_json::to_value(&message).unwrap(), json!({
            "type": "sync",
            "sender": "w1",
            "value": {"modelName": "test", "data": {"propertyName": "test"}},
            "secret": "s"
        }));
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let message: ClusterMessage = serde_json::from_str(r#"{"type":"reboot","secret":"s"}"#).unwrap();
        assert_eq!(message.message_type, MessageType::Unknown);
        let message: ClusterMessage = serde_json::from_str(r#"{"secret":"s"}"#).unwrap();
        assert_eq!(message.message_type, MessageType::Unknown);
        assert!(message.sender.is_none());
    }

    #[test]
    fn test_secret_check() {
        let message = ClusterMessage::load(1);
        assert!(!message.has_secret(""));
        assert!(!message.has_secret("worker"));
        let message = message.stamped("worker");
        assert!(message.has_secret("worker"));
        assert!(!message.has_secret("master"));
    }

    #[test]
    fn test_address_display() {
        let address = WorkerAddress { host: "10.0.0.2".to_string(), port: 8090, secure: true };
        assert_eq!(address.to_string(), "wss://10.0.0.2:8090");
        let message = ClusterMessage::address(&address).unwrap();
        assert_eq!(message.value, json!({"host": "10.0.0.2", "port": 8090, "secure": true}));
    }
}

mod balancer_tests {
    use proptest::prelude::*;
    use crate::cluster::structs::balancer::Balancer;

    #[test]
    fn test_empty_balancer() {
        let balancer = Balancer::new();
        assert!(balancer.is_empty());
        assert_eq!(balancer.get_worker(), None);
    }

    #[test]
    fn test_lightest_worker_wins() {
        let mut balancer = Balancer::new();
        balancer.add_worker("a");
        balancer.add_worker("b");
        balancer.add_worker("c");
        balancer.set_weight("a", 5);
        balancer.set_weight("b", 2);
        balancer.set_weight("c", 9);
        assert_eq!(balancer.get_worker().as_deref(), Some("b"));
    }

    #[test]
    fn test_ties_resolve_by_insertion_order() {
        let mut balancer = Balancer::new();
        balancer.add_worker("first");
        balancer.add_worker("second");
        assert_eq!(balancer.get_worker().as_deref(), Some("first"));
        balancer.set_weight("first", 1);
        assert_eq!(balancer.get_worker().as_deref(), Some("second"));
        balancer.set_weight("second", 1);
        assert_eq!(balancer.get_worker().as_deref(), Some("first"));
    }

    #[test]
    fn test_unknown_and_duplicate_workers() {
        let mut balancer = Balancer::new();
        assert!(!balancer.set_weight("ghost", 3));
        assert!(!balancer.remove_worker("ghost"));
        balancer.add_worker("a");
        balancer.set_weight("a", 4);
        balancer.add_worker("a");
        assert_eq!(balancer.len(), 1);
        assert_eq!(balancer.weight("a"), Some(4));
        assert!(balancer.remove_worker("a"));
        assert!(!balancer.remove_worker("a"));
        assert_eq!(balancer.get_worker(), None);
    }

    proptest! {
        #[test]
        fn prop_selected_worker_has_minimum_weight(weights in proptest::collection::vec(0u64..100, 1..20)) {
            let mut balancer = Balancer::new();
            for (index, weight) in weights.iter().enumerate() {
                let id = format!("w{index}");
                balancer.add_worker(&id);
                balancer.set_weight(&id, *weight);
            }
            let minimum = *weights.iter().min().unwrap();
            let first_minimum = weights.iter().position(|weight| *weight == minimum).unwrap();
            prop_assert_eq!(balancer.get_worker(), Some(format!("w{first_minimum}")));
        }

        #[test]
        fn prop_removed_workers_are_never_selected(count in 1usize..15, removed in proptest::collection::vec(any::<prop::sample::Index>(), 0..15)) {
            let mut balancer = Balancer::new();
            for index in 0..count {
                balancer.add_worker(&format!("w{index}"));
            }
            let mut gone = std::collections::HashSet::new();
            for index in removed {
                let id = format!("w{}", index.index(count));
                balancer.remove_worker(&id);
                gone.insert(id);
            }
            match balancer.get_worker() {
                None => prop_assert_eq!(gone.len(), count),
                Some(id) => prop_assert!(!gone.contains(&id)),
            }
        }
    }
}

mod master_tests {
    use std::sync::Arc;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use tokio::sync::mpsc;
    use crate::cluster::encoding::encoder::decode_record;
    use crate::cluster::enums::master_event::MasterEvent;
    use crate::cluster::enums::message_type::MessageType;
    use crate::cluster::structs::cluster_message::ClusterMessage;
    use crate::cluster::structs::data_envelope::DataEnvelope;
    use crate::cluster::structs::master::Master;
    use crate::cluster::structs::sync_envelope::SyncEnvelope;
    use crate::cluster::structs::worker_address::WorkerAddress;
    use crate::cluster::traits::event_service::EventService;
    use crate::config::structs::configuration::Configuration;

    struct RecordingService {
        received: Mutex<Vec<(String, Option<String>, Value)>>,
    }

    #[async_trait]
    impl EventService for RecordingService {
        fn name(&self) -> &str {
            "test"
        }

        async fn handle_data(&self, sender: &str, model_name: Option<String>, data: Value) {
            self.received.lock().push((sender.to_string(), model_name, data));
        }
    }

    fn master() -> Arc<Master> {
        Master::new(Arc::new(Configuration::init())).unwrap()
    }

    fn connect(master: &Master, id: &str) -> mpsc::UnboundedReceiver<Vec<u8>> {
        let (sender, receiver) = mpsc::unbounded_channel();
        master.add_connection(id, sender);
        master.authorize(id);
        receiver
    }

    fn next_record(receiver: &mut mpsc::UnboundedReceiver<Vec<u8>>) -> Option<ClusterMessage> {
        receiver.try_recv().ok().map(|frame| decode_record(&frame[..frame.len() - 2]).unwrap())
    }

    #[tokio::test]
    async fn test_membership_events() {
        let master = master();
        let mut events = master.subscribe_events();
        let (sender, _receiver) = mpsc::unbounded_channel();
        master.add_connection("w1", sender);
        assert!(master.authorized_workers().is_empty());
        master.authorize("w1");
        master.authorize("w1");
        assert_eq!(events.recv().await.unwrap(), MasterEvent::WorkerConnected("w1".to_string()));
        master.remove_worker("w1");
        assert_eq!(events.recv().await.unwrap(), MasterEvent::WorkerDisconnected("w1".to_string()));
        assert_eq!(master.worker_count(), 0);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unauthorized_disconnect_is_silent() {
        let master = master();
        let mut events = master.subscribe_events();
        let (sender, _receiver) = mpsc::unbounded_channel();
        master.add_connection("w1", sender);
        master.remove_worker("w1");
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_address_and_load_drive_discovery() {
        let master = master();
        let _a = connect(&master, "a");
        let _b = connect(&master, "b");
        assert_eq!(master.free_worker(), None);

        let address_a = WorkerAddress { host: "a.local".to_string(), port: 1, secure: false };
        let address_b = WorkerAddress { host: "b.local".to_string(), port: 2, secure: true };
        master.handle_message("a", ClusterMessage::address(&address_a).unwrap()).await;
        master.handle_message("b", ClusterMessage::address(&address_b).unwrap()).await;
        assert_eq!(master.free_worker(), Some(address_a.clone()));

        master.handle_message("a", ClusterMessage::load(10)).await;
        master.handle_message("b", ClusterMessage::new(MessageType::Load, json!(2.4))).await;
        assert_eq!(master.worker_weight("b"), Some(2));
        assert_eq!(master.free_worker(), Some(address_b));

        master.remove_worker("b");
        assert_eq!(master.free_worker(), Some(address_a));
    }

    #[tokio::test]
    async fn test_invalid_payloads_are_dropped() {
        let master = master();
        let _a = connect(&master, "a");
        master.handle_message("a", ClusterMessage::new(MessageType::Address, json!("nowhere"))).await;
        master.handle_message("a", ClusterMessage::new(MessageType::Load, json!("heavy"))).await;
        master.handle_message("a", ClusterMessage::new(MessageType::Unknown, json!({}))).await;
        assert_eq!(master.worker_address("a"), None);
        assert_eq!(master.worker_weight("a"), Some(0));
    }

    #[tokio::test]
    async fn test_sync_is_relayed_to_everyone_but_origin() {
        let master = master();
        let mut a = connect(&master, "a");
        let mut b = connect(&master, "b");
        let mut c = connect(&master, "c");
        let (pending_sender, mut pending) = mpsc::unbounded_channel();
        master.add_connection("pending", pending_sender);

        let envelope = SyncEnvelope { model_name: "test".to_string(), target: None, data: json!({"newValue": "v2"}) };
        let message = ClusterMessage::sync("worker-a", &envelope).unwrap().stamped("worker secret");
        master.handle_message("a", message).await;

        assert!(next_record(&mut a).is_none());
        assert!(pending.try_recv().is_err());
        for receiver in [&mut b, &mut c] {
            let relayed = next_record(receiver).unwrap();
            assert_eq!(relayed.message_type, MessageType::Sync);
            assert_eq!(relayed.sender.as_deref(), Some("worker-a"));
            assert_eq!(relayed.secret, master.config.event_bus.master_secret);
            assert_eq!(relayed.value["data"]["newValue"], "v2");
        }
    }

    #[tokio::test]
    async fn test_targeted_sync_reaches_only_named_worker() {
        let master = master();
        let mut a = connect(&master, "a");
        let mut b = connect(&master, "b");
        let mut c = connect(&master, "c");

        let envelope = SyncEnvelope { model_name: "test".to_string(), target: Some("c".to_string()), data: json!({"newValue": "v3"}) };
        let message = ClusterMessage::sync("worker-a", &envelope).unwrap().stamped("worker secret");
        master.handle_message("a", message).await;

        assert!(next_record(&mut a).is_none());
        assert!(next_record(&mut b).is_none());
        let relayed = next_record(&mut c).unwrap();
        assert_eq!(relayed.message_type, MessageType::Sync);
        assert_eq!(relayed.value["target"], "c");
        assert_eq!(relayed.value["data"]["newValue"], "v3");

        let envelope = SyncEnvelope { model_name: "test".to_string(), target: Some("gone".to_string()), data: json!({}) };
        master.handle_message("a", ClusterMessage::sync("worker-a", &envelope).unwrap()).await;
        assert!(next_record(&mut b).is_none());
        assert!(next_record(&mut c).is_none());
    }

    #[tokio::test]
    async fn test_data_reaches_named_service() {
        let master = master();
        let _a = connect(&master, "a");
        let service = Arc::new(RecordingService { received: Mutex::new(Vec::new()) });
        master.register_service(service.clone());

        let envelope = DataEnvelope { model_name: Some("test".to_string()), service_name: Some("test".to_string()), data: json!({"message": "hi"}) };
        master.handle_message("a", ClusterMessage::data("worker-a", &envelope).unwrap()).await;
        let unknown = DataEnvelope { model_name: None, service_name: Some("missing".to_string()), data: json!(1) };
        master.handle_message("a", ClusterMessage::data("worker-a", &unknown).unwrap()).await;

        let received = service.received.lock().clone();
        assert_eq!(received, vec![("worker-a".to_string(), Some("test".to_string()), json!({"message": "hi"}))]);
    }

    #[tokio::test]
    async fn test_publish_service_data_targets_least_loaded() {
        let master = master();
        assert!(!master.publish_service_data("test", None, json!({})).unwrap());

        let mut a = connect(&master, "a");
        let mut b = connect(&master, "b");
        master.handle_message("a", ClusterMessage::load(3)).await;
        assert!(master.publish_service_data("test", Some("test".to_string()), json!({"message": "testMessage"})).unwrap());

        assert!(next_record(&mut a).is_none());
        let record = next_record(&mut b).unwrap();
        assert_eq!(record.message_type, MessageType::Data);
        assert_eq!(record.sender.as_deref(), Some("test"));
        assert_eq!(record.value, json!({"modelName": "test", "data": {"message": "testMessage"}}));
    }

    #[tokio::test]
    async fn test_send_to_worker() {
        let master = master();
        let mut a = connect(&master, "a");
        let mut b = connect(&master, "b");
        assert_eq!(master.send_to_worker(ClusterMessage::load(1), None).unwrap(), 2);
        assert!(next_record(&mut a).is_some());
        assert!(next_record(&mut b).is_some());
        assert_eq!(master.send_to_worker(ClusterMessage::load(1), Some("b")).unwrap(), 1);
        assert!(next_record(&mut a).is_none());
        assert_eq!(master.send_to_worker(ClusterMessage::load(1), Some("ghost")).unwrap(), 0);
    }
}

mod worker_tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::cluster::enums::message_type::MessageType;
    use crate::cluster::structs::cluster_message::ClusterMessage;
    use crate::cluster::structs::data_envelope::DataEnvelope;
    use crate::cluster::structs::sync_envelope::SyncEnvelope;
    use crate::cluster::structs::worker::Worker;
    use crate::cluster::structs::worker_address::WorkerAddress;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_worker_id_shape() {
        let id = Worker::generate_id();
        let parts: Vec<&str> = id.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], std::process::id().to_string());
        assert!(parts[1].parse::<i64>().is_ok());
        assert_ne!(Worker::generate_id(), id);
    }

    #[tokio::test]
    async fn test_inbound_filtering() {
        let (worker, mut inbound) = Worker::new(Arc::new(Configuration::init())).unwrap();
        let envelope = SyncEnvelope { model_name: "test".to_string(), target: None, data: json!({"newValue": 1}) };

        worker.handle_message(ClusterMessage::sync(&worker.id, &envelope).unwrap());
        worker.handle_message(ClusterMessage::new(MessageType::Sync, json!({})));
        worker.handle_message(ClusterMessage::load(4).with_sender("other"));
        worker.handle_message(ClusterMessage::new(MessageType::Sync, json!("broken")).with_sender("other"));
        assert!(inbound.try_recv().is_err());

        worker.handle_message(ClusterMessage::sync("other", &envelope).unwrap());
        let forwarded = inbound.try_recv().unwrap();
        assert_eq!(forwarded.message_type, MessageType::Sync);
        assert_eq!(forwarded.model_name.as_deref(), Some("test"));
        assert_eq!(forwarded.data, json!({"newValue": 1}));

        let broadcast = DataEnvelope { model_name: None, service_name: None, data: json!("ping") };
        worker.handle_message(ClusterMessage::data("test", &broadcast).unwrap());
        let forwarded = inbound.try_recv().unwrap();
        assert_eq!(forwarded.message_type, MessageType::Data);
        assert_eq!(forwarded.model_name, None);
        assert_eq!(forwarded.sender, "test");
    }

    #[tokio::test]
    async fn test_offline_records_are_queued() {
        let (worker, _inbound) = Worker::new(Arc::new(Configuration::init())).unwrap();
        assert!(!worker.is_connected());
        worker.send_sync_message("test", json!({"newValue": "v2"})).unwrap();
        worker.send_data_message(None, Some("test".to_string()), json!({})).unwrap();
        worker.set_current_address(WorkerAddress { host: "h".to_string(), port: 9, secure: false });
        assert_eq!(worker.link().queued(), 2);
        assert_eq!(worker.current_address().port, 9);
    }

    #[tokio::test]
    async fn test_load_counter() {
        let (worker, _inbound) = Worker::new(Arc::new(Configuration::init())).unwrap();
        assert_eq!(worker.client_connected(), 1);
        assert_eq!(worker.client_connected(), 2);
        assert_eq!(worker.client_disconnected(), 1);
        assert_eq!(worker.client_disconnected(), 0);
        assert_eq!(worker.client_disconnected(), 0);
        assert_eq!(worker.load(), 0);
    }
}

mod transport_link_tests {
    use serde_json::{json, Value};
    use tokio::sync::mpsc;
    use crate::cluster::structs::cluster_message::ClusterMessage;
    use crate::cluster::structs::transport_link::TransportLink;
    use crate::config::structs::configuration::Configuration;

    #[tokio::test]
    async fn test_unwritten_records_are_requeued_in_order() {
        let config = Configuration::init();
        let (link, _events) = TransportLink::new(&config.event_bus).unwrap();
        let (writer, outbound) = mpsc::unbounded_channel();
        {
            let mut state = link.state.lock();
            state.writer = Some(writer);
            state.connected = true;
        }
        link.send(ClusterMessage::load(1)).unwrap();
        link.send(ClusterMessage::load(2)).unwrap();
        assert_eq!(link.queued(), 0);

        link.requeue(outbound, Some(ClusterMessage::load(0).stamped(&config.event_bus.worker_secret)));
        assert!(!link.is_connected());
        link.send(ClusterMessage::load(3)).unwrap();

        let state = link.state.lock();
        let values: Vec<Value> = state.queue.iter().map(|message| message.value.clone()).collect();
        assert_eq!(values, vec![json!(0), json!(1), json!(2), json!(3)]);
        assert!(state.queue.iter().all(|message| message.has_secret(&config.event_bus.worker_secret)));
        assert!(state.writer.is_none());
    }

    #[tokio::test]
    async fn test_requeue_without_pending_records() {
        let config = Configuration::init();
        let (link, _events) = TransportLink::new(&config.event_bus).unwrap();
        let (_writer, outbound) = mpsc::unbounded_channel();
        link.send(ClusterMessage::load(7)).unwrap();
        link.requeue(outbound, None);
        assert_eq!(link.queued(), 1);
    }
}
