use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::config::COMPANY_NAME;
use crate::presentation::HeaderStyle;
use crate::utils::dom;

pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("values", "Values"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct SectionLinkProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onnavigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page `#section` link that scrolls smoothly below the fixed header.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(e) = dom::smooth_scroll_to(&target) {
                log::debug!("cannot scroll to #{}: {}", &*target, e);
            }
            if let Some(callback) = &onnavigate {
                callback.emit(());
            }
        })
    };
    html! {
        <a href={format!("#{}", &*props.target)} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let style = use_state(|| HeaderStyle::Top);
    let menu_open = use_state(|| false);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Header background follows the scroll position
    {
        let style = style.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let style = style.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    style.set(HeaderStyle::for_scroll(scroll_y));
                                }
                            }
                        }
                    });
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    // Initial call
                    if let Ok(scroll_y) = window.scroll_y() {
                        style.set(HeaderStyle::for_scroll(scroll_y));
                    }
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
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Close the menu on outside click or Escape
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Ok(document) = dom::document() {
                    let click = Closure::<dyn Fn(MouseEvent)>::new({
                        let menu_open = menu_open.clone();
                        move |e: MouseEvent| {
                            let (Some(toggle), Some(menu)) =
                                (toggle_ref.cast::<Element>(), menu_ref.cast::<Element>())
                            else {
                                return;
                            };
                            let target = e.target();
                            if !dom::contains_target(&toggle, target.clone())
                                && !dom::contains_target(&menu, target)
                            {
                                menu_open.set(false);
                            }
                        }
                    });
                    let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            menu_open.set(false);
                        }
                    });
                    let _ = document
                        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
                    let _ = document
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                    Box::new(move || {
                        let _ = document
                            .remove_event_listener_with_callback("click", click.as_ref().unchecked_ref());
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Body scroll lock while the menu is open
    use_effect_with_deps(
        move |open: &bool| {
            if let Err(e) = dom::set_body_class("menu-open", *open) {
                log::debug!("menu-open class not applied: {}", e);
            }
            || ()
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <header class="header" style={style.css()}>
            <nav class="navbar">
                <SectionLink target="home" class={classes!("nav-logo")}>
                    <i class="fas fa-code"></i>
                    <span>{COMPANY_NAME}</span>
                </SectionLink>
                <div class={classes!("nav-menu", (*menu_open).then_some("active"))} ref={menu_ref}>
                    <ul>
                        { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                            <li>
                                <SectionLink target={*id} class={classes!("nav-link")} onnavigate={close_menu.clone()}>
                                    {*label}
                                </SectionLink>
                            </li>
                        }) }
                    </ul>
                </div>
                <button
                    class={classes!("mobile-menu-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    ref={toggle_ref}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
