use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Element, FocusEvent, KeyboardEvent};
use yew::prelude::*;

use crate::utils::dom;

fn set_focus_class(e: &FocusEvent, enabled: bool) {
    let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let classes = element.class_list();
    let _ = if enabled {
        classes.add_1("focus-visible")
    } else {
        classes.remove_1("focus-visible")
    };
}

/// Keyboard focus affordances: `keyboard-navigation` on body after Tab until
/// the next mousedown, and `focus-visible` on whichever element holds focus.
/// Renders nothing.
#[function_component(KeyboardNavigation)]
pub fn keyboard_navigation() -> Html {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = match dom::document() {
                Ok(document) => {
                    let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(|e: KeyboardEvent| {
                        if e.key() == "Tab" {
                            if let Err(err) = dom::set_body_class("keyboard-navigation", true) {
                                log::debug!("keyboard-navigation not applied: {}", err);
                            }
                        }
                    });
                    let mousedown = Closure::<dyn Fn()>::new(|| {
                        let _ = dom::set_body_class("keyboard-navigation", false);
                    });
                    let focusin =
                        Closure::<dyn Fn(FocusEvent)>::new(|e: FocusEvent| set_focus_class(&e, true));
                    let focusout =
                        Closure::<dyn Fn(FocusEvent)>::new(|e: FocusEvent| set_focus_class(&e, false));

                    let listeners: [(&'static str, &Function); 4] = [
                        ("keydown", keydown.as_ref().unchecked_ref()),
                        ("mousedown", mousedown.as_ref().unchecked_ref()),
                        ("focusin", focusin.as_ref().unchecked_ref()),
                        ("focusout", focusout.as_ref().unchecked_ref()),
                    ];
                    for (event, callback) in listeners {
                        let _ = document.add_event_listener_with_callback(event, callback);
                    }
                    Box::new(move || {
                        let listeners: [(&'static str, &Function); 4] = [
                            ("keydown", keydown.as_ref().unchecked_ref()),
                            ("mousedown", mousedown.as_ref().unchecked_ref()),
                            ("focusin", focusin.as_ref().unchecked_ref()),
                            ("focusout", focusout.as_ref().unchecked_ref()),
                        ];
                        for (event, callback) in listeners {
                            let _ = document.remove_event_listener_with_callback(event, callback);
                        }
                    })
                }
                Err(e) => {
                    log::debug!("keyboard navigation disabled: {}", e);
                    Box::new(|| ())
                }
            };
            move || {
                destructor();
            }
        },
        (),
    );

    html! {}
}
