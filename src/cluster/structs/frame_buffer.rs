#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub(crate) buffer: Vec<u8>,
    pub(crate) max_frame_size: usize,
}
