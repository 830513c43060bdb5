use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::schedule::core::session::ScheduleSession;

/// Open edit sessions keyed by a v7 id. Each call holds the lock only for the
/// synchronous transition, never across a store round trip.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, ScheduleSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: ScheduleSession) -> String {
        let id = Uuid::now_v7().to_string();
        self.sessions.lock().await.insert(id.clone(), session);
        id
    }

    /// Runs `f` against the session, `None` when the id is unknown.
    pub async fn update<R>(&self, id: &str, f: impl FnOnce(&mut ScheduleSession) -> R) -> Option<R> {
        self.sessions.lock().await.get_mut(id).map(f)
    }

    pub async fn remove(&self, id: &str) -> Option<ScheduleSession> {
        self.sessions.lock().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
