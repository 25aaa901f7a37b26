use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::common::common::current_time_millis;
use crate::config::structs::sessions_config::SessionsConfig;
use crate::sessions::enums::session_error::SessionError;
use crate::sessions::structs::session::Session;
use crate::sessions::structs::session_manager::SessionManager;
use crate::storage::storage::filter_by;
use crate::storage::traits::document_collection::DocumentCollection;
use crate::storage::traits::storage_provider::StorageProvider;
use crate::storage::types::Document;

impl SessionManager {
    pub fn new(collection: Arc<dyn DocumentCollection>, lifetime: Duration) -> SessionManager {
        SessionManager {
            collection,
            lifetime,
        }
    }

    pub async fn open(storage: &dyn StorageProvider, config: &SessionsConfig) -> Result<Arc<SessionManager>, SessionError> {
        let collection = storage.collection(&config.collection).await?;
        Ok(Arc::new(Self::new(collection, Duration::from_secs(config.lifetime))))
    }

    fn expires_at(&self, now: i64) -> i64 {
        now.saturating_add(self.lifetime.as_millis() as i64)
    }

    /// A live session; expired or unknown ids yield `None`.
    pub async fn get(&self, sid: &str) -> Result<Option<Session>, SessionError> {
        let Some(document) = self.collection.find_one(&filter_by("sid", sid)).await? else {
            return Ok(None);
        };
        let session = Session::from_document(document)?;
        if session.is_expired(current_time_millis()) {
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Merges `payload` into a live session and extends its lifetime.
    pub async fn set(&self, sid: Option<&str>, payload: Document) -> Result<Option<Session>, SessionError> {
        let Some(sid) = sid else {
            return Ok(None);
        };
        let Some(mut session) = self.get(sid).await? else {
            return Ok(None);
        };
        let now = current_time_millis();
        session.payload.extend(payload);
        session.last_access = now;
        session.expired = self.expires_at(now);
        if !self.collection.update(&filter_by("sid", sid), &session.to_document()?).await? {
            return Ok(None);
        }
        Ok(Some(session))
    }

    pub async fn create(&self, payload: Document) -> Result<Session, SessionError> {
        let now = current_time_millis();
        let session = Session {
            sid: Uuid::new_v4().simple().to_string(),
            last_access: now,
            expired: self.expires_at(now),
            payload,
        };
        self.collection.insert(session.to_document()?).await?;
        debug!("[SESSIONS] Created session {}", session.sid);
        Ok(session)
    }

    pub async fn remove(&self, sid: &str) -> Result<bool, SessionError> {
        Ok(self.collection.remove(&filter_by("sid", sid)).await? > 0)
    }

    /// Deletes every expired session and returns how many were removed.
    pub async fn check_expired(&self) -> Result<u64, SessionError> {
        let now = current_time_millis();
        let mut removed = 0;
        for document in self.collection.find(&Document::new()).await? {
            let session = match Session::from_document(document) {
                Ok(session) => session,
                Err(e) => {
                    warn!("[SESSIONS] Skipping malformed session document: {}", e);
                    continue;
                }
            };
            if session.is_expired(now) {
                removed += self.collection.remove(&filter_by("sid", session.sid.as_str())).await?;
            }
        }
        if removed > 0 {
            info!("[SESSIONS] Removed {} expired session(s)", removed);
        }
        Ok(removed)
    }

    pub fn start_expiry_task(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let manager = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(sessions) = manager.upgrade() else { break; };
                if let Err(e) = sessions.check_expired().await {
                    warn!("[SESSIONS] Expiry sweep failed: {}", e);
                }
            }
        })
    }
}
