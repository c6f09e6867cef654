use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::application::domain::document::ContentDocument;

use super::domain::commands::EditCommand;
use super::domain::session::EditorSession;

/// Outcome of applying a batch of commands to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedEdits {
    pub applied: usize,
    pub skipped: usize,
    pub dirty: bool,
}

/// Registry of open editing sessions, one per admin.
///
/// Opening a second session for the same admin replaces the first, so a
/// dashboard reload starts from a clean working copy instead of resurrecting
/// stale edits.
#[derive(Debug, Default)]
pub struct EditorSessions {
    inner: RwLock<HashMap<Uuid, EditorSession>>,
}

impl EditorSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, admin_id: Uuid, document: ContentDocument) -> EditorSession {
        let session = EditorSession::open(document);
        self.inner.write().await.insert(admin_id, session.clone());
        session
    }

    pub async fn get(&self, admin_id: Uuid) -> Option<EditorSession> {
        self.inner.read().await.get(&admin_id).cloned()
    }

    /// Applies commands to the admin's session, `None` when no session is open.
    pub async fn apply(&self, admin_id: Uuid, commands: &[EditCommand]) -> Option<AppliedEdits> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&admin_id)?;

        let applied = session.apply_all(commands);
        Some(AppliedEdits {
            applied,
            skipped: commands.len() - applied,
            dirty: session.dirty,
        })
    }

    /// Resets the admin's session onto a fresh document, `None` when no session is open.
    pub async fn reset(&self, admin_id: Uuid, document: ContentDocument) -> Option<EditorSession> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&admin_id)?;
        session.reset(document);
        Some(session.clone())
    }

    /// Discards the admin's session. Idempotent.
    pub async fn close(&self, admin_id: Uuid) {
        self.inner.write().await.remove(&admin_id);
    }
}
