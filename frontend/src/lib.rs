use yew_router::prelude::*;

pub mod config;
pub mod consent;

pub mod components {
    pub mod consent_provider;
    pub mod cookie_banner;
    pub mod cookie_settings;
    pub mod footer;
}

pub mod pages {
    pub mod cookie_policy;
    pub mod home;
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cookie-policy")]
    CookiePolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}
