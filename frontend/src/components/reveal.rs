use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::presentation::CardPose;
use crate::utils::dom::{observe_once, ObserverOptions};

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProps {
    pub class: Classes,
    pub armed: bool,
    /// Lift on hover (service cards).
    #[prop_or_default]
    pub lift: bool,
    /// Press feedback on touch (mobile devices only).
    #[prop_or_default]
    pub touch: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

fn pose_callback<E: 'static>(pose: &UseStateHandle<CardPose>, enabled: bool, next: CardPose) -> Callback<E> {
    let pose = pose.clone();
    Callback::from(move |_: E| {
        if enabled {
            pose.set(next);
        }
    })
}

/// Content card that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);
    let pose = use_state(|| CardPose::Rest);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |armed: &bool| {
                let observer = match (*armed, node_ref.cast::<Element>()) {
                    (true, Some(card)) => {
                        let options = ObserverOptions {
                            threshold: REVEAL_THRESHOLD,
                            root_margin: Some(REVEAL_ROOT_MARGIN),
                        };
                        observe_once(&card, &options, move |_| revealed.set(true))
                            .map_err(|e| log::debug!("reveal skipped: {}", e))
                            .ok()
                    }
                    _ => None,
                };
                move || drop(observer)
            },
            props.armed,
        );
    }

    let onmouseenter = pose_callback::<MouseEvent>(&pose, props.lift, CardPose::Lifted);
    let onmouseleave = pose_callback::<MouseEvent>(&pose, props.lift, CardPose::Rest);
    let ontouchstart = pose_callback::<TouchEvent>(&pose, props.touch, CardPose::Pressed);
    let ontouchend = pose_callback::<TouchEvent>(&pose, props.touch, CardPose::Rest);

    html! {
        <div
            id={props.id.clone()}
            ref={node_ref}
            class={classes!(props.class.clone(), (*revealed).then_some("fade-in-up"))}
            style={pose.css()}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            ontouchstart={ontouchstart}
            ontouchend={ontouchend}
        >
            { for props.children.iter() }
        </div>
    }
}
