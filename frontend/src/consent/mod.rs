//! Cookie consent: the stored decision, the tag manager consent signals,
//! the tag manager loader and the banner/settings state machine.

pub mod bridge;
pub mod controller;
pub mod decision;
pub mod error;
pub mod storage;
pub mod store;
pub mod tag_loader;

pub use bridge::{ChannelState, ConsentModeBridge, ConsentSignal, DataLayer, SignalQueue};
pub use controller::{
    ConsentAction, ConsentController, ConsentPhase, ConsentState, ReturnTo, Subscription,
};
pub use decision::{ConsentCategory, ConsentDecision};
pub use error::ConsentError;
pub use storage::{BrowserStorage, ConsentStorage};
pub use store::ConsentStore;
pub use tag_loader::{DocumentHost, TagHost, TagLoader};

use crate::config::ConsentConfig;

/// Startup sequence: deny-by-default signal, then the tag manager script,
/// then the stored decision (if any) is restored and re-signalled.
pub fn bootstrap<S, Q, H>(
    storage: S,
    queue: Q,
    host: &mut H,
    config: &ConsentConfig,
) -> ConsentController<S, Q>
where
    S: ConsentStorage,
    Q: SignalQueue,
    H: TagHost,
{
    let mut bridge = ConsentModeBridge::new(queue, config.wait_for_update_ms);
    bridge.init_default();
    TagLoader::new(config.container_id.clone()).load(host, bridge.queue_mut());

    let store = ConsentStore::new(storage, config.storage_key.clone());
    let mut controller = ConsentController::new(store, bridge);
    controller.start();
    controller
}
