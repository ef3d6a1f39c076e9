use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use clinic_frontend::config;
use clinic_frontend::Route;
use clinic_frontend::components::{
    consent_provider::ConsentProvider,
    cookie_banner::CookieBanner,
    cookie_settings::CookieSettings,
    footer::Footer,
};
use clinic_frontend::pages::{
    cookie_policy::{CookiePolicy, LEGAL_CSS},
    home::Home,
};

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(26, 26, 26, 0.95);
        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.3);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        color: #fff;
        font-size: 1.4rem;
        font-weight: 600;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 2rem;
        align-items: center;
    }
    .nav-link {
        color: #ddd;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #C4A470;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        background: #fff;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 1rem;
            padding: 1.5rem;
            background: rgba(26, 26, 26, 0.98);
        }
        .nav-right.mobile-menu-open {
            display: flex;
        }
    }
"#;


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::CookiePolicy => {
            info!("Rendering Cookie Policy page");
            html! { <CookiePolicy /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="legal-content">
                    <style>{LEGAL_CSS}</style>
                    <div>
                        <h1>{"Page not found"}</h1>
                        <Link<Route> to={Route::Home}>{"Back to the front page"}</Link<Route>>
                    </div>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|e| e.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > 600); // Past the hero image
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Aurea Hair Clinic"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Treatments"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::CookiePolicy} classes="nav-link">
                            {"Cookies"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <ConsentProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
                <CookieBanner />
                <CookieSettings />
            </BrowserRouter>
        </ConsentProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_styles_cover_scroll_and_menu_states() {
        for selector in [".top-nav {", ".top-nav.scrolled {", ".nav-right.mobile-menu-open {", ".burger-menu {"] {
            assert!(NAV_CSS.contains(selector), "missing {}", selector);
        }
    }
}
