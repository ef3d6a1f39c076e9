use log::{debug, warn};

use super::decision::ConsentDecision;
use super::error::ConsentError;
use super::storage::ConsentStorage;

/// Holds the current consent decision and is the only writer of its
/// persisted copy. Storage failures are logged and swallowed; the in-memory
/// decision stays authoritative for the session either way.
pub struct ConsentStore<S> {
    storage: S,
    key: String,
    decision: ConsentDecision,
}

impl<S: ConsentStorage> ConsentStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            decision: ConsentDecision::essential_only(),
        }
    }

    pub fn decision(&self) -> ConsentDecision {
        self.decision
    }

    /// Reads the persisted decision. Absent, malformed and unreadable records
    /// all come back as `None` and leave the in-memory decision untouched.
    pub fn load(&mut self) -> Option<ConsentDecision> {
        match self.read() {
            Ok(Some(decision)) => {
                self.decision = decision.normalized();
                debug!("Loaded stored consent decision: {:?}", self.decision);
                Some(self.decision)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Ignoring stored consent decision: {}", e);
                None
            }
        }
    }

    fn read(&self) -> Result<Option<ConsentDecision>, ConsentError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        let decision: ConsentDecision = serde_json::from_str(&raw)?;
        Ok(Some(decision))
    }

    pub fn set(&mut self, decision: ConsentDecision) {
        self.decision = decision.normalized();
    }

    /// Writes `decision` under the storage key. Returns whether the write
    /// succeeded; a failure changes nothing that was already persisted.
    pub fn persist(&mut self, decision: ConsentDecision) -> bool {
        let result = serde_json::to_string(&decision.normalized())
            .map_err(ConsentError::from)
            .and_then(|json| self.storage.set_item(&self.key, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not persist consent decision: {}", e);
                false
            }
        }
    }

    /// Forgets the persisted decision and returns to essential-only.
    pub fn reset(&mut self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            warn!("Could not remove stored consent decision: {}", e);
        }
        self.decision = ConsentDecision::essential_only();
    }
}
