use js_sys::{Array, Reflect};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};

use super::decision::ConsentDecision;
use super::error::{describe_js, ConsentError};
use crate::config::DATA_LAYER;

/// Append-only queue read by the tag manager container.
pub trait SignalQueue {
    fn push(&mut self, message: Value) -> Result<(), ConsentError>;
}

/// `window.dataLayer`, created as an empty array when the page has none yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataLayer;

impl DataLayer {
    fn array(&self) -> Result<Array, ConsentError> {
        let window = web_sys::window()
            .ok_or_else(|| ConsentError::Signal("no window".to_string()))?;
        let key = JsValue::from_str(DATA_LAYER);
        let existing = Reflect::get(&window, &key)
            .map_err(|e| ConsentError::Signal(describe_js(&e)))?;
        if let Ok(array) = existing.dyn_into::<Array>() {
            return Ok(array);
        }
        let array = Array::new();
        Reflect::set(&window, &key, &array)
            .map_err(|e| ConsentError::Signal(describe_js(&e)))?;
        Ok(array)
    }
}

impl SignalQueue for DataLayer {
    fn push(&mut self, message: Value) -> Result<(), ConsentError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = message
            .serialize(&serializer)
            .map_err(|e| ConsentError::Signal(e.to_string()))?;
        self.array()?.push(&value);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelState {
    Granted,
    Denied,
}

impl From<bool> for ChannelState {
    fn from(granted: bool) -> Self {
        if granted {
            ChannelState::Granted
        } else {
            ChannelState::Denied
        }
    }
}

/// Payload of a `consent` command. `security_storage` is always granted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConsentSignal {
    pub ad_storage: ChannelState,
    pub analytics_storage: ChannelState,
    pub functionality_storage: ChannelState,
    pub personalization_storage: ChannelState,
    pub security_storage: ChannelState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_update: Option<u32>,
}

impl ConsentSignal {
    pub fn denied(wait_for_update_ms: u32) -> Self {
        Self {
            ad_storage: ChannelState::Denied,
            analytics_storage: ChannelState::Denied,
            functionality_storage: ChannelState::Denied,
            personalization_storage: ChannelState::Denied,
            security_storage: ChannelState::Granted,
            wait_for_update: Some(wait_for_update_ms),
        }
    }

    // preferences drives both functionality and personalization
    pub fn from_decision(decision: &ConsentDecision) -> Self {
        Self {
            ad_storage: decision.marketing.into(),
            analytics_storage: decision.analytics.into(),
            functionality_storage: decision.preferences.into(),
            personalization_storage: decision.preferences.into(),
            security_storage: ChannelState::Granted,
            wait_for_update: None,
        }
    }
}

/// Translates consent decisions into tag manager `consent` commands.
pub struct ConsentModeBridge<Q> {
    queue: Q,
    wait_for_update_ms: u32,
    defaults_sent: bool,
}

impl<Q: SignalQueue> ConsentModeBridge<Q> {
    pub fn new(queue: Q, wait_for_update_ms: u32) -> Self {
        Self {
            queue,
            wait_for_update_ms,
            defaults_sent: false,
        }
    }

    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }

    /// Emits the all-denied default. Only the first call emits anything.
    pub fn init_default(&mut self) {
        if self.defaults_sent {
            return;
        }
        self.defaults_sent = true;
        let signal = ConsentSignal::denied(self.wait_for_update_ms);
        self.emit("default", &signal);
    }

    /// Emits an update for `decision`, preceded by the default if that was
    /// never sent, so the container never sees an update first.
    pub fn update(&mut self, decision: &ConsentDecision) {
        if !self.defaults_sent {
            warn!("Consent update requested before defaults, sending defaults first");
            self.init_default();
        }
        let signal = ConsentSignal::from_decision(decision);
        self.emit("update", &signal);
    }

    fn emit(&mut self, command: &str, signal: &ConsentSignal) {
        let message = json!(["consent", command, signal]);
        debug!("Consent signal: {}", message);
        if let Err(e) = self.queue.push(message) {
            warn!("Could not emit consent {}: {}", command, e);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every pushed message; clones share the same log.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingQueue {
        pub(crate) messages: Rc<RefCell<Vec<Value>>>,
    }

    impl SignalQueue for RecordingQueue {
        fn push(&mut self, message: Value) -> Result<(), ConsentError> {
            self.messages.borrow_mut().push(message);
            Ok(())
        }
    }

    #[test]
    fn test_default_message() {
        let queue = RecordingQueue::default();
        let mut bridge = ConsentModeBridge::new(queue.clone(), 500);
        bridge.init_default();
        bridge.init_default();

        let messages = queue.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            json!(["consent", "default", {
                "ad_storage": "denied",
                "analytics_storage": "denied",
                "functionality_storage": "denied",
                "personalization_storage": "denied",
                "security_storage": "granted",
                "wait_for_update": 500
            }])
        );
    }

    #[test]
    fn test_update_maps_categories() {
        let queue = RecordingQueue::default();
        let mut bridge = ConsentModeBridge::new(queue.clone(), 500);
        bridge.init_default();
        bridge.update(&ConsentDecision {
            essential: true,
            analytics: false,
            marketing: true,
            preferences: true,
        });

        let messages = queue.messages.borrow();
        assert_eq!(
            messages[1],
            json!(["consent", "update", {
                "ad_storage": "granted",
                "analytics_storage": "denied",
                "functionality_storage": "granted",
                "personalization_storage": "granted",
                "security_storage": "granted"
            }])
        );
    }

    #[test]
    fn test_update_before_default_sends_default_first() {
        let queue = RecordingQueue::default();
        let mut bridge = ConsentModeBridge::new(queue.clone(), 250);
        bridge.update(&ConsentDecision::all_granted());
        bridge.init_default();

        let messages = queue.messages.borrow();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0][1], "default");
        assert_eq!(messages[0][2]["wait_for_update"], 250);
        assert_eq!(messages[1][1], "update");
    }

    #[test]
    fn test_queue_failure_is_swallowed() {
        struct BrokenQueue;
        impl SignalQueue for BrokenQueue {
            fn push(&mut self, _message: Value) -> Result<(), ConsentError> {
                Err(ConsentError::Signal("dataLayer is frozen".to_string()))
            }
        }

        let mut bridge = ConsentModeBridge::new(BrokenQueue, 500);
        bridge.init_default();
        bridge.update(&ConsentDecision::all_granted());
    }
}
