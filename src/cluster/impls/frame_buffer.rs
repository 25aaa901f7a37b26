use crate::cluster::encoding::encoder::{find_delimiter, FRAME_DELIMITER};
use crate::cluster::enums::encoding_error::EncodingError;
use crate::cluster::structs::frame_buffer::FrameBuffer;

impl FrameBuffer {
    pub fn new(max_frame_size: usize) -> FrameBuffer {
        FrameBuffer {
            buffer: Vec::new(),
            max_frame_size,
        }
    }

    /// Appends a chunk and returns every record it completed, in order.
    ///
    /// Empty records are skipped. A trailing partial record is kept for the
    /// next call. A record (or partial remainder) longer than
    /// `max_frame_size` is an error and leaves the buffer unusable.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<Vec<u8>>, EncodingError> {
        self.buffer.extend_from_slice(chunk);

        let mut records = Vec::new();
        let mut start = 0;
        while let Some(offset) = find_delimiter(&self.buffer[start..]) {
            if offset > self.max_frame_size {
                return Err(EncodingError::FrameTooLarge(self.max_frame_size));
            }
            if offset > 0 {
                records.push(self.buffer[start..start + offset].to_vec());
            }
            start += offset + FRAME_DELIMITER.len();
        }
        self.buffer.drain(..start);

        if self.buffer.len() > self.max_frame_size + FRAME_DELIMITER.len() {
            return Err(EncodingError::FrameTooLarge(self.max_frame_size));
        }
        Ok(records)
    }
}
