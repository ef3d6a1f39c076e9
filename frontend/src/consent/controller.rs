use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::bridge::{ConsentModeBridge, SignalQueue};
use super::decision::{ConsentCategory, ConsentDecision};
use super::storage::ConsentStorage;
use super::store::ConsentStore;

/// Where the consent UI is. `SettingsOpen` remembers what to go back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentPhase {
    Init,
    BannerVisible,
    SettingsOpen { return_to: ReturnTo },
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnTo {
    Banner,
    Dismissed,
}

/// What the rendering layer reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentState {
    /// The committed decision.
    pub decision: ConsentDecision,
    /// Provisional decision edited in the settings dialog.
    pub draft: ConsentDecision,
    pub banner_visible: bool,
    pub settings_visible: bool,
}

/// Every user intent the UI can send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentAction {
    OpenSettings,
    CloseSettings,
    Toggle(ConsentCategory, bool),
    AcceptAll,
    AcceptSelected,
    Reset,
}

type Listener = Rc<dyn Fn(&ConsentState)>;
type Listeners = Rc<RefCell<Vec<(usize, Listener)>>>;

/// Handle returned by [`ConsentController::subscribe`]. The listener stays
/// registered until this is dropped or `unsubscribe` is called.
pub struct Subscription {
    id: usize,
    listeners: Weak<RefCell<Vec<(usize, Listener)>>>,
}

impl Subscription {
    /// Consumes the handle; its `Drop` removes the listener.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Cookie banner / settings state machine.
///
/// Every transition writes the store first, then signals the bridge, then
/// flips visibility, so the UI never shows a choice that is not yet recorded.
pub struct ConsentController<S, Q> {
    store: ConsentStore<S>,
    bridge: ConsentModeBridge<Q>,
    phase: ConsentPhase,
    draft: ConsentDecision,
    listeners: Listeners,
    next_listener_id: usize,
}

impl<S: ConsentStorage, Q: SignalQueue> ConsentController<S, Q> {
    pub fn new(store: ConsentStore<S>, bridge: ConsentModeBridge<Q>) -> Self {
        let draft = store.decision();
        Self {
            store,
            bridge,
            phase: ConsentPhase::Init,
            draft,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: 0,
        }
    }

    pub fn phase(&self) -> ConsentPhase {
        self.phase
    }

    pub fn state(&self) -> ConsentState {
        ConsentState {
            decision: self.store.decision(),
            draft: self.draft,
            banner_visible: self.phase == ConsentPhase::BannerVisible,
            settings_visible: matches!(self.phase, ConsentPhase::SettingsOpen { .. }),
        }
    }

    pub fn get_state(&self) -> ConsentState {
        self.state()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&ConsentState) + 'static) -> Subscription {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn notify(&self) {
        let state = self.state();
        // Listeners may subscribe or drop handles while being called.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&state);
        }
    }

    fn transition(&mut self, phase: ConsentPhase) {
        debug!("Consent UI {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.notify();
    }

    /// Restores a stored decision if there is one; otherwise shows the banner.
    /// Expects the bridge defaults to have been sent already.
    pub fn start(&mut self) {
        if self.phase != ConsentPhase::Init {
            return;
        }
        match self.store.load() {
            Some(decision) => {
                self.draft = decision;
                self.bridge.update(&decision);
                self.transition(ConsentPhase::Dismissed);
            }
            None => {
                self.draft = self.store.decision();
                self.transition(ConsentPhase::BannerVisible);
            }
        }
    }

    pub fn open_settings(&mut self) {
        let return_to = match self.phase {
            ConsentPhase::BannerVisible => ReturnTo::Banner,
            ConsentPhase::Dismissed => ReturnTo::Dismissed,
            _ => {
                debug!("Ignoring open_settings in {:?}", self.phase);
                return;
            }
        };
        self.draft = self.store.decision();
        self.transition(ConsentPhase::SettingsOpen { return_to });
    }

    /// Leaves the dialog, discarding unsaved toggles.
    pub fn close_settings(&mut self) {
        let ConsentPhase::SettingsOpen { return_to } = self.phase else {
            return;
        };
        self.draft = self.store.decision();
        let phase = match return_to {
            ReturnTo::Banner => ConsentPhase::BannerVisible,
            ReturnTo::Dismissed => ConsentPhase::Dismissed,
        };
        self.transition(phase);
    }

    pub fn toggle_category(&mut self, category: ConsentCategory, value: bool) {
        if self.draft.get(category) == value {
            return;
        }
        if self.draft.set(category, value) {
            self.notify();
        }
    }

    pub fn accept_all(&mut self) {
        self.commit(ConsentDecision::all_granted());
    }

    /// Commits the provisional decision as it stands.
    pub fn accept_selected(&mut self) {
        self.commit(self.draft);
    }

    pub fn save(&mut self) {
        self.accept_selected();
    }

    fn commit(&mut self, decision: ConsentDecision) {
        if self.phase == ConsentPhase::Init {
            debug!("Ignoring consent decision before start");
            return;
        }
        self.store.set(decision);
        let decision = self.store.decision();
        self.store.persist(decision);
        self.bridge.update(&decision);
        self.draft = decision;
        self.transition(ConsentPhase::Dismissed);
    }

    /// Withdraws consent: forgets the stored decision and shows the banner again.
    pub fn reset(&mut self) {
        self.store.reset();
        let decision = self.store.decision();
        self.bridge.update(&decision);
        self.draft = decision;
        self.transition(ConsentPhase::BannerVisible);
    }

    pub fn dispatch(&mut self, action: ConsentAction) {
        match action {
            ConsentAction::OpenSettings => self.open_settings(),
            ConsentAction::CloseSettings => self.close_settings(),
            ConsentAction::Toggle(category, value) => self.toggle_category(category, value),
            ConsentAction::AcceptAll => self.accept_all(),
            ConsentAction::AcceptSelected => self.accept_selected(),
            ConsentAction::Reset => self.reset(),
        }
    }
}
