use crate::cluster::enums::encoding_error::EncodingError;
use crate::cluster::structs::cluster_message::ClusterMessage;

pub const FRAME_DELIMITER: &[u8] = b"\r\n";

/// JSON never emits a raw CR or LF inside a value, so the delimiter is unambiguous.
pub fn encode_frame(message: &ClusterMessage) -> Result<Vec<u8>, EncodingError> {
    let mut data = serde_json::to_vec(message)?;
    data.extend_from_slice(FRAME_DELIMITER);
    Ok(data)
}

pub fn decode_record(record: &[u8]) -> Result<ClusterMessage, EncodingError> {
    Ok(serde_json::from_slice(record)?)
}

pub(crate) fn find_delimiter(data: &[u8]) -> Option<usize> {
    data.windows(FRAME_DELIMITER.len()).position(|window| window == FRAME_DELIMITER)
}
