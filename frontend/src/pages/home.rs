use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::Route;

pub(crate) const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-background {
        position: fixed;
        inset: 0;
        background-image: url('/assets/clinic-hero.webp');
        background-size: cover;
        background-position: center;
        z-index: 0;
    }
    .hero-overlay {
        position: fixed;
        inset: 0;
        background: #000;
        pointer-events: none;
        z-index: 1;
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 720px;
        padding: 0 2rem;
        text-align: center;
        color: #fff;
    }
    .hero-title {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .hero-subtitle {
        font-size: 1.2rem;
        color: #ddd;
        line-height: 1.6;
        margin-bottom: 2rem;
    }
    .hero-cta {
        display: inline-block;
        background: #C4A470;
        color: #1a1a1a;
        padding: 1rem 2rem;
        border-radius: 8px;
        font-weight: 600;
        text-decoration: none;
    }
    .feature-list {
        position: relative;
        z-index: 2;
        background: #1a1a1a;
        padding: 4rem 2rem;
        max-width: 800px;
        margin: 0 auto;
        color: #ddd;
    }
    .feature-list h2 {
        color: #C4A470;
        text-align: center;
        font-size: 2.2rem;
    }
    .feature-list li {
        font-size: 1.15rem;
        margin-bottom: 1rem;
    }
    .legal-note a {
        color: #C4A470;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2rem;
        }
        .feature-list {
            padding: 2rem 1rem;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let dim_opacity = use_state(|| 0.0);

    // Dim the hero image as the visitor scrolls past it
    {
        let dim_opacity = dim_opacity.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dim_opacity = dim_opacity.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    dim_opacity.set((scroll_y / 500.0).min(1.0) * 0.6);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{HERO_CSS}</style>
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-overlay" style={format!("opacity: {};", *dim_opacity)}></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Natural results, done by specialists"}</h1>
                    <p class="hero-subtitle">
                        {"FUE and DHI hair transplantation with a personal plan from your first consultation to your final result."}
                    </p>
                    <a class="hero-cta" href="#consultation">{"Book a free consultation"}</a>
                </div>
            </header>

            <section class="feature-list">
                <h2>{"Why patients choose us"}</h2>
                <ul>
                    <li>{"One surgeon follows your treatment from start to finish"}</li>
                    <li>{"Transparent pricing agreed before the procedure"}</li>
                    <li>{"Twelve months of aftercare check-ins included"}</li>
                </ul>
                <p class="legal-note">
                    {"How we handle cookies is described in our "}
                    <Link<Route> to={Route::CookiePolicy}>{"cookie policy"}</Link<Route>>
                    {"."}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_styles_define_scroll_overlay() {
        for selector in [".hero-background {", ".hero-overlay {", ".hero-content {", ".feature-list {"] {
            assert!(HERO_CSS.contains(selector), "missing {}", selector);
        }
    }
}
