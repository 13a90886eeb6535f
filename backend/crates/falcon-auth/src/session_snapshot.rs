use falcon_core::{AuthEvent, Identity, Session};

/// Where the current snapshot's session came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Nothing has resolved yet
    Pending,
    /// The one-shot "current session" fetch made on mount
    InitialFetch,
    /// A change-stream event
    ChangeEvent(AuthEvent),
}

/// Authoritative view of the session state. Each one replaces the last.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub session: Option<Session>,
    pub source: SnapshotSource,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            loading: true,
            session: None,
            source: SnapshotSource::Pending,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(Session::identity)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}
