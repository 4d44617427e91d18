use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

#[derive(Error, Debug)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount point `{0}` not found")]
    MissingMountPoint(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::MissingMountPoint("body"))
}

/// Adds or removes a state class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) -> Result<(), DomError> {
    let classes = body()?.class_list();
    if enabled {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

/// True when the event target is the container itself or one of its descendants.
pub fn contains_target(container: &Element, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Smoothly scrolls to the element with `id`, leaving room for the fixed header.
pub fn smooth_scroll_to(id: &str) -> Result<(), DomError> {
    let document = document()?;
    let section = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(DomError::MissingMountPoint("scroll target"))?;
    let header_height = document
        .query_selector(".header")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(f64::from(section.offset_top() - header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

/// Intersection observer that fires once for its target and then stops
/// watching it. Dropping the handle disconnects the observer.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_once<F>(
    target: &Element,
    options: &ObserverOptions,
    mut on_visible: F,
) -> Result<OneShotObserver, DomError>
where
    F: FnMut(Element) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(OneShotObserver {
        observer,
        _callback: callback,
    })
}
