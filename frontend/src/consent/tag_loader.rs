use js_sys::{Date, Reflect};
use log::{info, warn};
use serde_json::json;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Node};

use super::bridge::SignalQueue;
use super::error::{describe_js, ConsentError};
use crate::config::TAG_LOADED_FLAG;

const TAG_MANAGER_ORIGIN: &str = "https://www.googletagmanager.com";

/// The page the tag manager script is injected into.
pub trait TagHost {
    fn is_loaded(&self) -> bool;
    fn mark_loaded(&mut self);
    fn now_ms(&self) -> f64;
    fn insert_script(&mut self, src: &str) -> Result<(), ConsentError>;
    fn insert_noscript_frame(&mut self, src: &str) -> Result<(), ConsentError>;
}

/// The live document. The loaded flag lives on `window` so it survives
/// component remounts for the rest of the page life.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHost;

impl DocumentHost {
    fn document(&self) -> Result<Document, ConsentError> {
        window()
            .and_then(|w| w.document())
            .ok_or_else(|| ConsentError::Signal("no document".to_string()))
    }
}

impl TagHost for DocumentHost {
    fn is_loaded(&self) -> bool {
        window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str(TAG_LOADED_FLAG)).ok())
            .map(|flag| flag.is_truthy())
            .unwrap_or(false)
    }

    fn mark_loaded(&mut self) {
        if let Some(w) = window() {
            let _ = Reflect::set(&w, &JsValue::from_str(TAG_LOADED_FLAG), &JsValue::TRUE);
        }
    }

    fn now_ms(&self) -> f64 {
        Date::now()
    }

    fn insert_script(&mut self, src: &str) -> Result<(), ConsentError> {
        let document = self.document()?;
        let script = document
            .create_element("script")
            .map_err(|e| ConsentError::Signal(describe_js(&e)))?;
        script
            .set_attribute("async", "")
            .and_then(|_| script.set_attribute("src", src))
            .map_err(|e| ConsentError::Signal(describe_js(&e)))?;

        let first_script = document.get_elements_by_tag_name("script").item(0);
        let inserted = match first_script.and_then(|s| s.parent_node().map(|p| (s, p))) {
            Some((first, parent)) => {
                let first: &Node = &first;
                parent.insert_before(&script, Some(first))
            }
            None => match document.head() {
                Some(head) => head.append_child(&script),
                None => return Err(ConsentError::Signal("document has no <head>".to_string())),
            },
        };
        inserted
            .map(|_| ())
            .map_err(|e| ConsentError::Signal(describe_js(&e)))
    }

    fn insert_noscript_frame(&mut self, src: &str) -> Result<(), ConsentError> {
        let document = self.document()?;
        let body = document
            .body()
            .ok_or_else(|| ConsentError::Signal("document has no <body>".to_string()))?;
        let noscript = document
            .create_element("noscript")
            .map_err(|e| ConsentError::Signal(describe_js(&e)))?;
        noscript.set_inner_html(&format!(
            r#"<iframe src="{}" height="0" width="0" style="display:none;visibility:hidden"></iframe>"#,
            src
        ));
        body.insert_before(&noscript, body.first_child().as_ref())
            .map(|_| ())
            .map_err(|e| ConsentError::Signal(describe_js(&e)))
    }
}

/// Injects the tag manager container once per page life. Consent gating is
/// left to the container, which reads the signals the bridge already queued.
#[derive(Clone, Debug)]
pub struct TagLoader {
    container_id: String,
}

impl TagLoader {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn script_src(&self) -> String {
        format!("{}/gtm.js?id={}", TAG_MANAGER_ORIGIN, self.container_id)
    }

    pub fn frame_src(&self) -> String {
        format!("{}/ns.html?id={}", TAG_MANAGER_ORIGIN, self.container_id)
    }

    /// Returns true if this call did the injection, false if it was already done.
    pub fn load<H: TagHost, Q: SignalQueue>(&self, host: &mut H, queue: &mut Q) -> bool {
        if host.is_loaded() {
            return false;
        }
        host.mark_loaded();

        let marker = json!({ "gtm.start": host.now_ms(), "event": "gtm.js" });
        if let Err(e) = queue.push(marker) {
            warn!("Could not queue tag manager start marker: {}", e);
        }
        if let Err(e) = host.insert_script(&self.script_src()) {
            warn!("Could not insert tag manager script: {}", e);
        }
        if let Err(e) = host.insert_noscript_frame(&self.frame_src()) {
            warn!("Could not insert tag manager fallback frame: {}", e);
        }
        info!("Tag manager container {} loaded", self.container_id);
        true
    }
}
