use web_sys::Element;
use yew::prelude::*;

use crate::utils::dom::{observe_once, ObserverOptions};

#[derive(Properties, PartialEq, Clone)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub armed: bool,
}

/// Image whose source is deferred until it first scrolls into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let img_ref = use_node_ref();
    let loaded = use_state(|| false);

    {
        let img_ref = img_ref.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |armed: &bool| {
                let observer = match (*armed, img_ref.cast::<Element>()) {
                    (true, Some(img)) => {
                        let options = ObserverOptions {
                            threshold: 0.0,
                            root_margin: None,
                        };
                        let on_visible = loaded.clone();
                        observe_once(&img, &options, move |_| on_visible.set(true))
                            .map_err(|e| {
                                log::debug!("lazy image loads eagerly: {}", e);
                                loaded.set(true);
                            })
                            .ok()
                    }
                    _ => None,
                };
                move || drop(observer)
            },
            props.armed,
        );
    }

    let src = (*loaded).then(|| props.src.clone());

    html! {
        <img
            ref={img_ref}
            class={classes!(props.class.clone(), (!*loaded).then_some("lazy"))}
            data-src={props.src.clone()}
            src={src}
            alt={props.alt.clone()}
        />
    }
}
