use std::cell::RefCell;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ConsentConfig;
use crate::consent::{
    self, BrowserStorage, ConsentAction, ConsentController, ConsentState, DataLayer, DocumentHost,
};

type BrowserController = ConsentController<BrowserStorage, DataLayer>;

// Buttons shared by the banner, the settings dialog, the footer and the policy page
pub(crate) const CONSENT_BUTTON_CSS: &str = r#"
    .cookie-button {
        border-radius: 8px;
        padding: 0.7rem 1.2rem;
        font-size: 0.95rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .cookie-button.primary {
        background: #C4A470;
        border: 1px solid #C4A470;
        color: #1a1a1a;
    }
    .cookie-button.primary:hover {
        background: #d6b985;
    }
    .cookie-button.secondary {
        background: transparent;
        border: 1px solid rgba(196, 164, 112, 0.5);
        color: #eee;
    }
    .cookie-button.secondary:hover {
        background: rgba(196, 164, 112, 0.12);
    }
    .as-link {
        background: none;
        border: none;
        padding: 0;
        font: inherit;
        cursor: pointer;
    }
"#;

/// What components get from [`use_consent`]: the latest state plus a way to
/// send actions to the controller.
#[derive(Clone)]
pub struct ConsentHandle {
    controller: Rc<RefCell<BrowserController>>,
    pub state: ConsentState,
}

impl PartialEq for ConsentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl ConsentHandle {
    pub fn dispatch(&self, action: ConsentAction) {
        self.controller.borrow_mut().dispatch(action);
    }

    pub fn on_click(&self, action: ConsentAction) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.borrow_mut().dispatch(action);
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsentProviderProps {
    pub children: Children,
}

#[function_component(ConsentProvider)]
pub fn consent_provider(props: &ConsentProviderProps) -> Html {
    let controller = use_mut_ref(|| {
        consent::bootstrap(
            BrowserStorage,
            DataLayer,
            &mut DocumentHost,
            &ConsentConfig::default(),
        )
    });
    let state = use_state(|| controller.borrow().state());

    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with_deps(move |_| {
            let setter = state.setter();
            let subscription = controller
                .borrow_mut()
                .subscribe(move |s: &ConsentState| setter.set(*s));
            state.set(controller.borrow().state());
            move || drop(subscription)
        }, ());
    }

    let handle = ConsentHandle {
        controller,
        state: *state,
    };

    html! {
        <ContextProvider<ConsentHandle> context={handle}>
            <style>{CONSENT_BUTTON_CSS}</style>
            { for props.children.iter() }
        </ContextProvider<ConsentHandle>>
    }
}

#[hook]
pub fn use_consent() -> Option<ConsentHandle> {
    use_context::<ConsentHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_styles_cover_markup_classes() {
        for selector in [".cookie-button {", ".cookie-button.primary {", ".cookie-button.secondary {", ".as-link {"] {
            assert!(CONSENT_BUTTON_CSS.contains(selector), "missing {}", selector);
        }
    }
}
