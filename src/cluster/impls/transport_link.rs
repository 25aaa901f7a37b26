use std::collections::VecDeque;
use std::sync::Arc;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_rustls::TlsConnector;
use crate::cluster::encoding::encoder::{decode_record, encode_frame};
use crate::cluster::enums::link_error::LinkError;
use crate::cluster::enums::link_event::LinkEvent;
use crate::cluster::structs::cluster_message::ClusterMessage;
use crate::cluster::structs::frame_buffer::FrameBuffer;
use crate::cluster::structs::link_state::LinkState;
use crate::cluster::structs::transport_link::TransportLink;
use crate::config::structs::event_bus_config::EventBusConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

const READ_BUFFER_SIZE: usize = 16 * 1024;

impl TransportLink {
    pub fn new(config: &EventBusConfig) -> Result<(Arc<TransportLink>, mpsc::UnboundedReceiver<LinkEvent>), LinkError> {
        let connector = if config.ssl {
            let client_config = CertificateBundle::client_config(&config.ssl_ca)?;
            let server_name = CertificateBundle::server_name(config.server_name())?;
            Some((TlsConnector::from(Arc::new(client_config)), server_name))
        } else {
            None
        };
        let (events, receiver) = mpsc::unbounded_channel();

        Ok((Arc::new(TransportLink {
            config: config.clone(),
            connector,
            state: Mutex::new(LinkState::default()),
            events,
        }), receiver))
    }

    pub fn is_connected(&self) -> bool {
        self.state.lock().connected
    }

    pub fn queued(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Stamps the worker secret and hands the record to the writer, or queues it until
    /// the next connection.
    pub fn send(&self, message: ClusterMessage) -> Result<(), LinkError> {
        let message = message.stamped(&self.config.worker_secret);
        let mut state = self.state.lock();
        let message = match state.writer.as_ref() {
            Some(writer) if state.connected => match writer.send(message) {
                Ok(()) => return Ok(()),
                Err(mpsc::error::SendError(message)) => message,
            },
            _ => message,
        };
        state.queue.push_back(message);
        Ok(())
    }

    /// Connects and reconnects with a fixed delay until a fatal error occurs.
    pub async fn run(self: Arc<Self>) -> Result<(), LinkError> {
        info!("[EVENTBUS CLIENT] Connecting to master at {}", self.config.address());
        loop {
            match self.connect_once().await {
                Ok(()) => info!("[EVENTBUS CLIENT] Disconnected from master"),
                Err(e) if e.is_fatal() => {
                    error!("[EVENTBUS CLIENT] Giving up on master link: {}", e);
                    return Err(e);
                }
                Err(e) => warn!("[EVENTBUS CLIENT] Connection error: {}", e),
            }
            tokio::time::sleep(self.config.reconnect_delay()).await;
            debug!("[EVENTBUS CLIENT] Reconnecting to {}", self.config.address());
        }
    }

    pub async fn connect_once(&self) -> Result<(), LinkError> {
        let stream = TcpStream::connect(self.config.address()).await?;
        let _ = stream.set_nodelay(true);
        match &self.connector {
            None => self.drive(stream).await,
            Some((connector, server_name)) => {
                let tls_stream = connector.connect(server_name.clone(), stream).await.map_err(|e| match e.kind() {
                    std::io::ErrorKind::InvalidData => LinkError::Tls(CertificateError::HandshakeRejected(e.to_string())),
                    _ => LinkError::Io(e),
                })?;
                self.drive(tls_stream).await
            }
        }
    }

    async fn drive<S>(&self, stream: S) -> Result<(), LinkError>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut reader, mut writer) = tokio::io::split(stream);
        let (sender, mut receiver) = mpsc::unbounded_channel::<ClusterMessage>();

        {
            let mut state = self.state.lock();
            let flushed = state.queue.len();
            for message in state.queue.drain(..) {
                let _ = sender.send(message);
            }
            state.writer = Some(sender);
            state.connected = true;
            if flushed > 0 {
                debug!("[EVENTBUS CLIENT] Flushed {} queued record(s)", flushed);
            }
        }
        info!("[EVENTBUS CLIENT] Connected to master at {}", self.config.address());
        let _ = self.events.send(LinkEvent::Connected);

        let mut unsent = None;
        let result = self.pump(&mut reader, &mut writer, &mut receiver, &mut unsent).await;

        self.requeue(receiver, unsent);
        let _ = writer.shutdown().await;
        let _ = self.events.send(LinkEvent::Disconnected);
        result
    }

    /// Marks the link down and puts every record that never reached the socket back at
    /// the front of the queue, in send order.
    pub(crate) fn requeue(&self, mut outbound: mpsc::UnboundedReceiver<ClusterMessage>, unsent: Option<ClusterMessage>) {
        let mut state = self.state.lock();
        state.connected = false;
        state.writer = None;

        let mut pending: VecDeque<ClusterMessage> = unsent.into_iter().collect();
        while let Ok(message) = outbound.try_recv() {
            pending.push_back(message);
        }
        if pending.is_empty() {
            return;
        }
        debug!("[EVENTBUS CLIENT] Requeued {} unwritten record(s)", pending.len());
        pending.append(&mut state.queue);
        state.queue = pending;
    }

    /// Reads records from the master and writes outbound records until either side
    /// closes. A record whose write failed is left in `unsent`.
    async fn pump<S>(
        &self,
        reader: &mut ReadHalf<S>,
        writer: &mut WriteHalf<S>,
        outbound: &mut mpsc::UnboundedReceiver<ClusterMessage>,
        unsent: &mut Option<ClusterMessage>,
    ) -> Result<(), LinkError>
    where
        S: AsyncRead + AsyncWrite,
    {
        let mut frames = FrameBuffer::new(self.config.max_frame_size);
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        loop {
            tokio::select! {
                read = reader.read(&mut buffer) => {
                    let read = read?;
                    if read == 0 {
                        return Ok(());
                    }
                    for record in frames.push(&buffer[..read])? {
                        let message = decode_record(&record)?;
                        if !message.has_secret(&self.config.master_secret) {
                            return Err(LinkError::AuthenticationFailed(self.config.address()));
                        }
                        let _ = self.events.send(LinkEvent::Message(message));
                    }
                }
                message = outbound.recv() => {
                    let Some(message) = message else {
                        return Ok(());
                    };
                    let frame = match encode_frame(&message) {
                        Ok(frame) => frame,
                        Err(e) => {
                            error!("[EVENTBUS CLIENT] Dropping unencodable {:?} record: {}", message.message_type, e);
                            continue;
                        }
                    };
                    if let Err(e) = writer.write_all(&frame).await {
                        *unsent = Some(message);
                        return Err(e.into());
                    }
                }
            }
        }
    }
}
