use super::Identity;

/// Source of the current identity.
pub trait Session: Send + Sync {
    /// `None` when nobody is signed in.
    fn current(&self) -> Option<Identity>;

    /// Name of this session kind
    fn kind(&self) -> &'static str;
}

/// Nobody signed in.
pub struct AnonymousSession;

impl AnonymousSession {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnonymousSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for AnonymousSession {
    fn current(&self) -> Option<Identity> {
        None
    }

    fn kind(&self) -> &'static str {
        "anonymous"
    }
}

/// A fixed identity, e.g. from configuration.
pub struct StaticSession {
    identity: Identity,
}

impl StaticSession {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl Session for StaticSession {
    fn current(&self) -> Option<Identity> {
        Some(self.identity.clone())
    }

    fn kind(&self) -> &'static str {
        "static"
    }
}
