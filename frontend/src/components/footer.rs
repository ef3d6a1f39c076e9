use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::consent_provider::use_consent;
use crate::consent::ConsentAction;
use crate::Route;

pub(crate) const FOOTER_CSS: &str = r#"
    .site-footer {
        position: relative;
        z-index: 2;
        background: #111;
        border-top: 1px solid rgba(196, 164, 112, 0.15);
        padding: 2rem;
        color: #999;
    }
    .footer-content {
        max-width: 1200px;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .footer-brand {
        color: #C4A470;
        font-weight: 600;
    }
    .footer-links {
        display: flex;
        gap: 1.5rem;
    }
    .footer-link {
        color: #999;
        text-decoration: none;
        font-size: 0.95rem;
    }
    .footer-link:hover {
        color: #fff;
    }
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    let consent = use_consent();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-content">
                <span class="footer-brand">{"Aurea Hair Clinic"}</span>
                <div class="footer-links">
                    <Link<Route> to={Route::CookiePolicy} classes="footer-link">
                        {"Cookie policy"}
                    </Link<Route>>
                    {
                        if let Some(consent) = consent {
                            html! {
                                <button class="footer-link as-link" onclick={consent.on_click(ConsentAction::OpenSettings)}>
                                    {"Cookie settings"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_styles_cover_markup() {
        for selector in [".site-footer {", ".footer-content {", ".footer-links {", ".footer-link {"] {
            assert!(FOOTER_CSS.contains(selector), "missing {}", selector);
        }
    }
}
