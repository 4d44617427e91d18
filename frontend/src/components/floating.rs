use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::FLOATING_TOUCH_RESET_MS;
use crate::presentation::{floating_delay, parallax_transform, FloatPose};

/// Lets at most one animation frame be pending at a time. Clones share the
/// same flag.
#[derive(Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    /// Claims the next frame; false while one is already pending.
    pub fn try_begin(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }
}

const ICONS: [&str; 4] = ["fas fa-brain", "fas fa-code", "fas fa-chart-line", "fas fa-robot"];

#[derive(Properties, PartialEq, Clone)]
struct FloatingElementProps {
    index: usize,
    icon: &'static str,
    armed: bool,
}

#[function_component(FloatingElement)]
fn floating_element(props: &FloatingElementProps) -> Html {
    let pose = use_state(|| FloatPose::Rest);

    let raise = {
        let pose = pose.clone();
        let armed = props.armed;
        move || {
            if armed {
                pose.set(FloatPose::Raised);
            }
        }
    };
    let onmouseenter = {
        let raise = raise.clone();
        Callback::from(move |_: MouseEvent| raise())
    };
    let ontouchstart = Callback::from(move |_: TouchEvent| raise());
    let onmouseleave = {
        let pose = pose.clone();
        Callback::from(move |_: MouseEvent| pose.set(FloatPose::Rest))
    };
    let ontouchend = {
        let pose = pose.clone();
        Callback::from(move |_: TouchEvent| {
            let pose = pose.clone();
            Timeout::new(FLOATING_TOUCH_RESET_MS, move || pose.set(FloatPose::Rest)).forget();
        })
    };

    let style = format!("{} {}", floating_delay(props.index), pose.css());

    html! {
        <div
            class={classes!("element", format!("element-{}", props.index + 1))}
            style={style}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            ontouchstart={ontouchstart}
            ontouchend={ontouchend}
        >
            <i class={props.icon}></i>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingElementsProps {
    pub armed: bool,
}

/// Decorative hero icons drifting against the scroll.
#[function_component(FloatingElements)]
pub fn floating_elements(props: &FloatingElementsProps) -> Html {
    let offset_style = use_state(|| parallax_transform(0.0));

    // Parallax, at most one update per animation frame
    {
        let offset_style = offset_style.clone();
        use_effect_with_deps(
            move |armed: &bool| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if *armed => {
                        let gate = FrameGate::default();
                        let callback = Closure::<dyn Fn()>::new(move || {
                            let Some(win) = web_sys::window() else {
                                return;
                            };
                            if !gate.try_begin() {
                                return;
                            }
                            let frame_gate = gate.clone();
                            let offset_style = offset_style.clone();
                            let frame = Closure::once_into_js(move || {
                                if let Some(win) = web_sys::window() {
                                    if let Ok(scroll_y) = win.scroll_y() {
                                        offset_style.set(parallax_transform(scroll_y));
                                    }
                                }
                                frame_gate.finish();
                            });
                            if win.request_animation_frame(frame.unchecked_ref()).is_err() {
                                gate.finish();
                            }
                        });
                        if let Err(e) = window
                            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("parallax disabled: {:?}", e);
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            props.armed,
        );
    }

    html! {
        <div class="floating-elements" style={(*offset_style).clone()}>
            { for ICONS.iter().enumerate().map(|(index, icon)| html! {
                <FloatingElement index={index} icon={*icon} armed={props.armed} />
            }) }
        </div>
    }
}
