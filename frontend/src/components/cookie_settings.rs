use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::consent_provider::{use_consent, ConsentHandle};
use crate::consent::{ConsentAction, ConsentCategory};

#[derive(Properties, PartialEq)]
struct CategoryRowProps {
    category: ConsentCategory,
    checked: bool,
    consent: ConsentHandle,
}

#[function_component(CategoryRow)]
fn category_row(props: &CategoryRowProps) -> Html {
    let category = props.category;
    let onchange = {
        let consent = props.consent.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            consent.dispatch(ConsentAction::Toggle(category, input.checked()));
        })
    };
    let id = format!("cookie-{}", category.label().to_lowercase());

    html! {
        <div class={classes!("cookie-category", (!category.is_toggleable()).then(|| "locked"))}>
            <label for={id.clone()}>
                <input
                    type="checkbox"
                    id={id}
                    checked={props.checked}
                    disabled={!category.is_toggleable()}
                    {onchange}
                />
                <span class="category-name">{category.label()}</span>
            </label>
            <p class="category-description">{category.description()}</p>
        </div>
    }
}

#[function_component(CookieSettings)]
pub fn cookie_settings() -> Html {
    let consent = use_consent();
    let Some(consent) = consent else {
        return html! {};
    };
    if !consent.state.settings_visible {
        return html! {};
    }
    let draft = consent.state.draft;

    html! {
        <div class="cookie-settings-overlay">
            <style>
                {r#"
                    .cookie-settings-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1001;
                    }
                    .cookie-settings {
                        background: #1a1a1a;
                        border: 1px solid rgba(196, 164, 112, 0.25);
                        border-radius: 16px;
                        padding: 2rem;
                        max-width: 560px;
                        width: calc(100% - 2rem);
                        max-height: 90vh;
                        overflow-y: auto;
                        color: #eee;
                    }
                    .cookie-settings h2 {
                        color: #C4A470;
                        margin-top: 0;
                    }
                    .cookie-category {
                        background: rgba(0, 0, 0, 0.2);
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        margin-bottom: 0.75rem;
                    }
                    .cookie-category label {
                        display: flex;
                        gap: 0.75rem;
                        align-items: center;
                        font-weight: 600;
                    }
                    .cookie-category.locked label {
                        opacity: 0.7;
                    }
                    .category-description {
                        color: #999;
                        margin: 0.5rem 0 0 0;
                        line-height: 1.5;
                    }
                    .cookie-settings-actions {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                "#}
            </style>
            <div class="cookie-settings" role="dialog" aria-modal="true" aria-label="Cookie settings">
                <h2>{"Cookie settings"}</h2>
                <p>{"Choose which cookies we may use. You can change this at any time from the link in the footer."}</p>
                {
                    ConsentCategory::ALL.iter().map(|category| html! {
                        <CategoryRow
                            category={*category}
                            checked={draft.get(*category)}
                            consent={consent.clone()}
                        />
                    }).collect::<Html>()
                }
                <div class="cookie-settings-actions">
                    <button class="cookie-button secondary" onclick={consent.on_click(ConsentAction::CloseSettings)}>
                        {"Cancel"}
                    </button>
                    <button class="cookie-button secondary" onclick={consent.on_click(ConsentAction::AcceptSelected)}>
                        {"Save selection"}
                    </button>
                    <button class="cookie-button primary" onclick={consent.on_click(ConsentAction::AcceptAll)}>
                        {"Accept all"}
                    </button>
                </div>
            </div>
        </div>
    }
}
