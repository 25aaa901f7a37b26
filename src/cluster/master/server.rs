use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadHalf};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use crate::cluster::encoding::encoder::decode_record;
use crate::cluster::enums::link_error::LinkError;
use crate::cluster::structs::frame_buffer::FrameBuffer;
use crate::cluster::structs::master::Master;

const READ_BUFFER_SIZE: usize = 16 * 1024;

pub async fn event_bus_service(master: Arc<Master>, listener: TcpListener) {
    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("[EVENTBUS SERVER] Accept failed: {}", e);
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            }
        };
        let _ = stream.set_nodelay(true);
        let master = master.clone();
        tokio::spawn(async move {
            let worker_id = remote_addr.to_string();
            let result = match master.tls_acceptor.clone() {
                None => handle_connection(master.clone(), stream, worker_id.clone()).await,
                Some(acceptor) => match acceptor.accept(stream).await {
                    Ok(tls_stream) => handle_connection(master.clone(), tls_stream, worker_id.clone()).await,
                    Err(e) => Err(LinkError::Io(e)),
                },
            };
            match result {
                Ok(()) => debug!("[EVENTBUS SERVER] Link closed by {}", worker_id),
                Err(e) => warn!("[EVENTBUS SERVER] Link with {} dropped: {}", worker_id, e),
            }
        });
    }
}

/// Serves one worker link until it closes or sends an invalid record.
pub async fn handle_connection<S>(master: Arc<Master>, stream: S, worker_id: String) -> Result<(), LinkError>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut reader, mut writer) = tokio::io::split(stream);
    let (sender, mut receiver) = mpsc::unbounded_channel::<Vec<u8>>();
    master.add_connection(&worker_id, sender);

    let writer_task = tokio::spawn(async move {
        while let Some(frame) = receiver.recv().await {
            if writer.write_all(&frame).await.is_err() {
                break;
            }
        }
        let _ = writer.shutdown().await;
    });

    let result = read_records(&master, &mut reader, &worker_id).await;
    master.remove_worker(&worker_id);
    writer_task.abort();
    result
}

async fn read_records<S>(master: &Arc<Master>, reader: &mut ReadHalf<S>, worker_id: &str) -> Result<(), LinkError>
where
    S: AsyncRead + AsyncWrite,
{
    let mut frames = FrameBuffer::new(master.config.event_bus.max_frame_size);
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            return Ok(());
        }
        for record in frames.push(&buffer[..read])? {
            let message = decode_record(&record)?;
            if !message.has_secret(&master.config.event_bus.worker_secret) {
                return Err(LinkError::AuthenticationFailed(worker_id.to_string()));
            }
            master.authorize(worker_id);
            master.handle_message(worker_id, message).await;
        }
    }
}
