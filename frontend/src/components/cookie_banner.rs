use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::consent_provider::use_consent;
use crate::consent::ConsentAction;
use crate::Route;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let consent = use_consent();
    let Some(consent) = consent else {
        return html! {};
    };
    if !consent.state.banner_visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-live="polite" aria-label="Cookie consent">
            <style>
                {r#"
                    .cookie-banner {
                        position: fixed;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        max-width: 960px;
                        margin: 0 auto;
                        background: rgba(26, 26, 26, 0.97);
                        border: 1px solid rgba(196, 164, 112, 0.25);
                        border-radius: 16px;
                        padding: 1.5rem 2rem;
                        color: #eee;
                        z-index: 1000;
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.3);
                    }
                    .cookie-banner p {
                        margin: 0;
                        line-height: 1.5;
                        color: #bbb;
                    }
                    .cookie-banner a {
                        color: #C4A470;
                    }
                    .cookie-actions {
                        display: flex;
                        gap: 0.75rem;
                        flex-shrink: 0;
                    }
                    @media (max-width: 768px) {
                        .cookie-banner {
                            flex-direction: column;
                            padding: 1.25rem;
                        }
                        .cookie-actions {
                            width: 100%;
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <p>
                {"We use cookies to run this site and, with your permission, to understand how it is used and to measure our advertising. "}
                <Link<Route> to={Route::CookiePolicy}>{"Read our cookie policy"}</Link<Route>>
            </p>
            <div class="cookie-actions">
                <button class="cookie-button secondary" onclick={consent.on_click(ConsentAction::OpenSettings)}>
                    {"Settings"}
                </button>
                <button class="cookie-button secondary" onclick={consent.on_click(ConsentAction::AcceptSelected)}>
                    {"Only essential"}
                </button>
                <button class="cookie-button primary" onclick={consent.on_click(ConsentAction::AcceptAll)}>
                    {"Accept all"}
                </button>
            </div>
        </div>
    }
}
