use log::Level;

/// localStorage key holding the persisted consent decision.
pub const CONSENT_STORAGE_KEY: &str = "cookie-consent";

/// How long the tag manager holds tags for a consent update before treating
/// the default-deny state as final.
pub const WAIT_FOR_UPDATE_MS: u32 = 500;

/// Name of the global signal queue read by the tag manager.
pub const DATA_LAYER: &str = "dataLayer";

/// Property set on `window` once the tag manager script has been injected.
pub const TAG_LOADED_FLAG: &str = "__tagManagerLoaded";

#[cfg(debug_assertions)]
pub fn tag_manager_container_id() -> &'static str {
    "GTM-DEVXXXX"  // Development container, tags never reach production properties
}

#[cfg(not(debug_assertions))]
pub fn tag_manager_container_id() -> &'static str {
    "GTM-K7QH2W9"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Settings for the consent subsystem, passed to [`crate::consent::bootstrap`].
#[derive(Clone, Debug, PartialEq)]
pub struct ConsentConfig {
    pub storage_key: String,
    pub container_id: String,
    pub wait_for_update_ms: u32,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            storage_key: CONSENT_STORAGE_KEY.to_string(),
            container_id: tag_manager_container_id().to_string(),
            wait_for_update_ms: WAIT_FOR_UPDATE_MS,
        }
    }
}
