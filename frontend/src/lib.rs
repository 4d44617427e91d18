//! Codentra Innovations marketing site: landing page, scroll effects and the
//! FAQ chatbot, rendered with Yew.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod chatbot;
pub mod components;
pub mod config;
pub mod pages;
pub mod presentation;
pub mod utils;

use components::accessibility::KeyboardNavigation;
use pages::landing::Landing;
use pages::not_found::NotFound;
use utils::dom;

const SITE_CSS: &str = include_str!("../styles/site.css");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, mobile: bool) -> Html {
    match routes {
        Route::Home => html! { <Landing touch={mobile} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let mobile = use_state(presentation::detect_mobile_device);

    use_effect_with_deps(
        move |mobile: &bool| {
            if *mobile {
                match dom::set_body_class("mobile-device", true) {
                    Ok(()) => log::debug!("mobile device detected"),
                    Err(e) => log::warn!("device class not applied: {}", e),
                }
            }
            || ()
        },
        *mobile,
    );

    let mobile = *mobile;
    let render = Callback::from(move |routes: Route| switch(routes, mobile));
    html! {
        <>
            <style>{SITE_CSS}</style>
            <KeyboardNavigation />
            <BrowserRouter>
                <Switch<Route> render={render} />
            </BrowserRouter>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::SITE_CSS;

    #[test]
    fn mobile_devices_get_slower_float_and_touch_friendly_cards() {
        assert!(SITE_CSS.contains(".mobile-device .floating-elements .element {\n    animation-duration: 8s !important;"));
        for selector in [
            ".mobile-device .feature-card",
            ".mobile-device .service-card",
            ".mobile-device .value-card",
            ".mobile-device .vision-card",
            ".mobile-device .mission-card",
            ".mobile-device .nav-menu a",
        ] {
            assert!(SITE_CSS.contains(selector), "missing {selector}");
        }
        assert!(SITE_CSS.contains("touch-action: manipulation;"));
        assert!(SITE_CSS.contains("-webkit-tap-highlight-color: transparent;"));
    }

    #[test]
    fn contact_items_are_not_hidden_until_revealed() {
        // the block that hides cards until `fade-in-up` arrives
        let offset = SITE_CSS
            .find("transform: translateY(30px);")
            .unwrap_or_else(|| panic!("reveal start state missing"));
        let block = SITE_CSS[..offset].rsplit('}').next().unwrap_or_default();
        assert!(block.contains(".feature-card"));
        assert!(!block.contains(".contact-item"));
    }
}
