use serde_json::Value;
use crate::sessions::enums::session_error::SessionError;
use crate::sessions::structs::session::Session;
use crate::storage::types::Document;

impl Session {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expired <= now
    }

    pub fn to_document(&self) -> Result<Document, SessionError> {
        match serde_json::to_value(self)? {
            Value::Object(document) => Ok(document),
            _ => Ok(Document::new()),
        }
    }

    pub fn from_document(document: Document) -> Result<Session, SessionError> {
        Ok(serde_json::from_value(Value::Object(document))?)
    }
}
