use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::session::QuestionnaireSession;

/// The transport's stable per-conversation identifier.
pub type ChatId = i64;

/// In-memory map from conversation to its active session. Cheap to clone
/// and share; all handles observe the same map. Operations for a given id
/// see a single consistent session value at any instant. Nothing is
/// persisted; abandoned sessions stay here until the user restarts.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<ChatId, QuestionnaireSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session for `id`, if any.
    pub async fn get(&self, id: ChatId) -> Option<QuestionnaireSession> {
        self.inner.lock().await.get(&id).cloned()
    }

    /// The session for `id`, creating a fresh intro-phase session if none
    /// exists.
    pub async fn get_or_create(&self, id: ChatId) -> QuestionnaireSession {
        self.inner
            .lock()
            .await
            .entry(id)
            .or_insert_with(QuestionnaireSession::new)
            .clone()
    }

    /// Replace the session for `id`.
    pub async fn replace(&self, id: ChatId, session: QuestionnaireSession) {
        self.inner.lock().await.insert(id, session);
    }

    /// Drop the session for `id`.
    pub async fn clear(&self, id: ChatId) {
        self.inner.lock().await.remove(&id);
    }

    /// Number of sessions currently held. Diagnostic only.
    pub async fn active_count(&self) -> usize {
        self.inner.lock().await.len()
    }
}
