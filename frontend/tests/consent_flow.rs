use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use clinic_frontend::config::ConsentConfig;
use clinic_frontend::consent::{
    bootstrap, ConsentCategory, ConsentDecision, ConsentError, ConsentStorage, ConsentStore,
    SignalQueue, TagHost,
};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Storage {
    items: Rc<RefCell<HashMap<String, String>>>,
    restricted: bool,
}

impl ConsentStorage for Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConsentError> {
        if self.restricted {
            return Err(ConsentError::StorageUnavailable("The operation is insecure.".into()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConsentError> {
        if self.restricted {
            return Err(ConsentError::StorageUnavailable("The operation is insecure.".into()));
        }
        self.items.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ConsentError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Queue(Rc<RefCell<Vec<Value>>>);

impl SignalQueue for Queue {
    fn push(&mut self, message: Value) -> Result<(), ConsentError> {
        self.0.borrow_mut().push(message);
        Ok(())
    }
}

#[derive(Default)]
struct Page {
    loaded: bool,
    scripts: usize,
    frames: usize,
}

impl TagHost for Page {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    fn now_ms(&self) -> f64 {
        0.0
    }

    fn insert_script(&mut self, _src: &str) -> Result<(), ConsentError> {
        self.scripts += 1;
        Ok(())
    }

    fn insert_noscript_frame(&mut self, _src: &str) -> Result<(), ConsentError> {
        self.frames += 1;
        Ok(())
    }
}

fn config() -> ConsentConfig {
    ConsentConfig {
        storage_key: "consent-test".to_string(),
        container_id: "GTM-TEST".to_string(),
        wait_for_update_ms: 500,
    }
}

fn persisted(storage: &Storage) -> Option<Value> {
    storage
        .items
        .borrow()
        .get("consent-test")
        .map(|raw| serde_json::from_str(raw).unwrap())
}

fn updates(queue: &Queue) -> Vec<Value> {
    queue
        .0
        .borrow()
        .iter()
        .filter(|m| m[0] == "consent" && m[1] == "update")
        .cloned()
        .collect()
}

#[test]
fn fresh_visit_accept_all() {
    let storage = Storage::default();
    let queue = Queue::default();
    let mut page = Page::default();

    let mut controller = bootstrap(storage.clone(), queue.clone(), &mut page, &config());
    assert!(controller.state().banner_visible);

    controller.accept_all();
    assert_eq!(
        persisted(&storage),
        Some(json!({"essential": true, "analytics": true, "marketing": true, "preferences": true}))
    );
    let updates = updates(&queue);
    assert_eq!(updates.len(), 1);
    for channel in ["ad_storage", "analytics_storage", "functionality_storage", "personalization_storage"] {
        assert_eq!(updates[0][2][channel], "granted");
    }
    assert!(!controller.state().banner_visible);
}

#[test]
fn fresh_visit_save_analytics_only() {
    let storage = Storage::default();
    let queue = Queue::default();
    let mut page = Page::default();

    let mut controller = bootstrap(storage.clone(), queue.clone(), &mut page, &config());
    controller.open_settings();
    assert!(controller.state().settings_visible);
    controller.toggle_category(ConsentCategory::Analytics, true);
    controller.save();

    assert_eq!(
        persisted(&storage),
        Some(json!({"essential": true, "analytics": true, "marketing": false, "preferences": false}))
    );
    let update = &updates(&queue)[0][2];
    assert_eq!(update["analytics_storage"], "granted");
    assert_eq!(update["ad_storage"], "denied");
    assert_eq!(update["functionality_storage"], "denied");
    assert_eq!(update["personalization_storage"], "denied");
    assert_eq!(update["security_storage"], "granted");
    assert!(!controller.state().settings_visible);
}

#[test]
fn returning_visit_restores_decision() {
    let storage = Storage::default();
    storage.items.borrow_mut().insert(
        "consent-test".to_string(),
        r#"{"essential":true,"analytics":true,"marketing":false,"preferences":false}"#.to_string(),
    );
    let queue = Queue::default();
    let mut page = Page::default();

    let controller = bootstrap(storage, queue.clone(), &mut page, &config());
    let state = controller.state();
    assert!(!state.banner_visible);
    assert!(state.decision.analytics && !state.decision.marketing);

    let updates = updates(&queue);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0][2]["analytics_storage"], "granted");
    assert_eq!(updates[0][2]["ad_storage"], "denied");
}

#[test]
fn restricted_storage_falls_back_to_banner() {
    let storage = Storage {
        restricted: true,
        ..Storage::default()
    };
    let queue = Queue::default();
    let mut page = Page::default();

    let mut controller = bootstrap(storage.clone(), queue, &mut page, &config());
    let state = controller.state();
    assert!(state.banner_visible);
    assert_eq!(state.decision, ConsentDecision::essential_only());

    // choices still apply for this session
    controller.accept_all();
    assert!(controller.state().decision.marketing);
    assert!(storage.items.borrow().is_empty());
}

#[test]
fn default_signal_comes_first() {
    let storage = Storage::default();
    let queue = Queue::default();
    let mut page = Page::default();

    let mut controller = bootstrap(storage, queue.clone(), &mut page, &config());
    controller.accept_all();
    controller.reset();
    controller.accept_selected();

    let messages = queue.0.borrow();
    assert_eq!(messages[0][1], "default");
    assert_eq!(messages[0][2]["wait_for_update"], 500);
    assert_eq!(messages.iter().filter(|m| m[1] == "default").count(), 1);
}

#[test]
fn reset_clears_persistence() {
    let storage = Storage::default();
    let queue = Queue::default();
    let mut page = Page::default();

    let mut controller = bootstrap(storage.clone(), queue, &mut page, &config());
    controller.accept_all();
    controller.reset();

    assert!(controller.state().banner_visible);
    let mut store = ConsentStore::new(storage, "consent-test");
    assert_eq!(store.load(), None);
}

#[test]
fn tag_manager_injected_once() {
    let mut page = Page::default();
    for _ in 0..3 {
        bootstrap(Storage::default(), Queue::default(), &mut page, &config());
    }
    assert_eq!(page.scripts, 1);
    assert_eq!(page.frames, 1);
}

#[test]
fn essential_stays_granted() {
    let storage = Storage::default();
    let queue = Queue::default();
    let mut page = Page::default();

    let mut controller = bootstrap(storage, queue, &mut page, &config());
    controller.open_settings();
    controller.toggle_category(ConsentCategory::Essential, false);
    assert!(controller.state().draft.essential);
    controller.accept_selected();
    assert!(controller.state().decision.essential);
    controller.reset();
    assert!(controller.state().decision.essential);
}
