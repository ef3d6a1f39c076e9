use yew::prelude::*;

use crate::components::consent_provider::use_consent;
use crate::consent::{ConsentAction, ConsentCategory};

/// Layout for text pages. Also used by the not-found page.
pub const LEGAL_CSS: &str = r#"
    .legal-content {
        min-height: 100vh;
        background: #1a1a1a;
        padding: 6rem 2rem 4rem 2rem;
        color: #fff;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .legal-content > div {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(196, 164, 112, 0.1);
        border-radius: 16px;
        padding: 3rem;
        max-width: 800px;
        width: 100%;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
    }
    .legal-content h1 {
        font-size: 2rem;
        color: #C4A470;
        margin-bottom: 2rem;
        text-align: center;
    }
    .legal-content section {
        background: rgba(0, 0, 0, 0.2);
        border-radius: 12px;
        padding: 2rem;
        margin: 1.5rem auto;
    }
    .legal-content h2 {
        color: #C4A470;
        font-size: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .legal-content h3 {
        color: #C4A470;
        font-size: 1.1rem;
        margin: 1rem 0 0.5rem 0;
    }
    .legal-content p, .legal-content li {
        color: #999;
        line-height: 1.6;
    }
    .legal-content a {
        color: #C4A470;
    }
    .current-choice {
        list-style-type: none;
        padding: 0;
    }
    .policy-actions {
        display: flex;
        gap: 0.75rem;
        flex-wrap: wrap;
        margin-top: 1.5rem;
    }
    @media (max-width: 768px) {
        .legal-content > div {
            padding: 1.5rem;
        }
    }
"#;

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    let consent = use_consent();

    let current = match &consent {
        Some(handle) => {
            let decision = handle.state.decision;
            html! {
                <ul class="current-choice">
                    {
                        ConsentCategory::ALL.iter().map(|category| html! {
                            <li>
                                <strong>{category.label()}</strong>
                                {if decision.get(*category) { ": allowed" } else { ": not allowed" }}
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            }
        }
        None => html! {},
    };

    html! {
        <div class="legal-content">
            <style>{LEGAL_CSS}</style>
            <div>
                <h1>{"Cookie Policy"}</h1>

                <section>
                    <h2>{"What we use"}</h2>
                    {
                        ConsentCategory::ALL.iter().map(|category| html! {
                            <>
                                <h3>{category.label()}</h3>
                                <p>{category.description()}</p>
                            </>
                        }).collect::<Html>()
                    }
                </section>

                <section>
                    <h2>{"Your current choice"}</h2>
                    {current}
                    {
                        if let Some(handle) = &consent {
                            html! {
                                <div class="policy-actions">
                                    <button class="cookie-button secondary" onclick={handle.on_click(ConsentAction::OpenSettings)}>
                                        {"Change cookie settings"}
                                    </button>
                                    <button class="cookie-button secondary" onclick={handle.on_click(ConsentAction::Reset)}>
                                        {"Withdraw consent"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section>
                    <h2>{"Third parties"}</h2>
                    <p>
                        {"Analytics and advertising tags are managed through Google Tag Manager. Until you make a choice every tag that needs consent stays blocked; only strictly necessary storage is used."}
                    </p>
                </section>
            </div>
        </div>
    }
}
