use chrono::{DateTime, Duration, Utc};
use dot_render::RasterImage;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Length of a session id in hex characters
pub const SESSION_ID_LEN: usize = 16;

/// An uploaded image kept for repeated renders
#[derive(Clone)]
pub struct ImageSession {
    pub id: String,
    /// Working raster of the upload; the original bytes are not kept
    pub image: Arc<RasterImage>,
    pub uploaded_at: DateTime<Utc>,
    pub last_access: DateTime<Utc>,
}

/// Uploaded images, keyed by a hash of the uploaded bytes
///
/// Sessions end when the client replaces or deletes them, when they sit
/// idle longer than the TTL, or when the store is full and they are the
/// least recently used.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, ImageSession>>>,
    ttl: Duration,
    max_sessions: usize,
}

/// Session id for an upload: first 16 hex chars of its SHA-256
pub fn session_id(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut id = hex::encode(digest);
    id.truncate(SESSION_ID_LEN);
    id
}

impl SessionStore {
    pub fn new(ttl_secs: u64, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(ttl_secs.min(u32::MAX as u64) as i64),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Store the working raster of an upload and return its session
    ///
    /// `replaces` names the client's previous session, which is released
    /// unless it is the same image again.
    pub async fn insert(
        &self,
        upload: &[u8],
        image: RasterImage,
        replaces: Option<&str>,
    ) -> ImageSession {
        self.insert_at(upload, image, replaces, Utc::now()).await
    }

    pub(crate) async fn insert_at(
        &self,
        upload: &[u8],
        image: RasterImage,
        replaces: Option<&str>,
        now: DateTime<Utc>,
    ) -> ImageSession {
        let id = session_id(upload);
        let session = ImageSession {
            id: id.clone(),
            image: Arc::new(image),
            uploaded_at: now,
            last_access: now,
        };

        let mut sessions = self.sessions.write().await;

        if let Some(old) = replaces.filter(|old| *old != id) {
            if sessions.remove(old).is_some() {
                tracing::debug!(session = old, "Released replaced session");
            }
        }

        self.purge_locked(&mut sessions, now);
        sessions.insert(id.clone(), session.clone());

        while sessions.len() > self.max_sessions {
            let Some(oldest) = sessions
                .values()
                .filter(|s| s.id != id)
                .min_by_key(|s| s.last_access)
                .map(|s| s.id.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
            tracing::info!(session = %oldest, "Evicted least recently used session");
        }

        tracing::info!(
            session = %id,
            width = session.image.width(),
            height = session.image.height(),
            active = sessions.len(),
            "Stored image session"
        );

        session
    }

    /// Look up a session and mark it as used
    pub async fn get(&self, id: &str) -> Option<ImageSession> {
        self.get_at(id, Utc::now()).await
    }

    pub(crate) async fn get_at(&self, id: &str, now: DateTime<Utc>) -> Option<ImageSession> {
        let mut sessions = self.sessions.write().await;

        if sessions.get(id).is_some_and(|s| self.is_expired(s, now)) {
            sessions.remove(id);
            tracing::debug!(session = id, "Session expired");
            return None;
        }

        let session = sessions.get_mut(id)?;
        session.last_access = now;
        Some(session.clone())
    }

    /// Release a session, returning whether it existed
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::debug!(session = id, "Released session");
        }
        removed
    }

    /// Drop every session idle longer than the TTL
    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }

    pub(crate) async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        self.purge_locked(&mut sessions, now)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn is_expired(&self, session: &ImageSession, now: DateTime<Utc>) -> bool {
        now - session.last_access > self.ttl
    }

    fn purge_locked(&self, sessions: &mut HashMap<String, ImageSession>, now: DateTime<Utc>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!(purged, remaining = sessions.len(), "Purged expired sessions");
        }
        purged
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(1800, 64)
    }
}
