use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::driver::{Bounded, ChatDriver, Focusable, Scrollable, Toggleable};
use super::engine::{Message, Sender};
use super::responses::TOPICS;
use crate::utils::dom::{self, DomError};
use crate::utils::scheduler::TimeoutScheduler;

pub type DomChatDriver = ChatDriver<DomSurface, TimeoutScheduler>;

/// Browser side of the chat widget: re-renders the component and drives the
/// composer input and message list through their node refs.
pub struct DomSurface {
    container: NodeRef,
    input: NodeRef,
    messages: NodeRef,
    redraw: UseForceUpdateHandle,
}

impl Toggleable for DomSurface {
    fn set_visible(&self, _visible: bool) {
        self.redraw.force_update();
    }
}

impl Focusable for DomSurface {
    fn focus(&self) {
        // Wait for the render that reveals the window.
        let input = self.input.clone();
        Timeout::new(0, move || match input.cast::<HtmlInputElement>() {
            Some(input) => {
                let _ = input.focus();
            }
            None => log::debug!("chat composer not mounted, skipping focus"),
        })
        .forget();
    }
}

impl Scrollable for DomSurface {
    fn scroll_to_bottom(&self) {
        self.redraw.force_update();
        let messages = self.messages.clone();
        Timeout::new(0, move || {
            if let Some(list) = messages.cast::<Element>() {
                list.set_scroll_top(list.scroll_height());
            }
        })
        .forget();
    }
}

/// Everything under `.chatbot-container` counts as inside, the toggle button
/// included. An unmounted container contains nothing.
impl Bounded for DomSurface {
    type Target = Option<EventTarget>;

    fn contains(&self, target: &Option<EventTarget>) -> bool {
        self.container
            .cast::<Element>()
            .map(|container| dom::contains_target(&container, target.clone()))
            .unwrap_or(false)
    }
}

/// Outside-click and Escape listeners on the document, removed on drop.
struct DismissListeners {
    document: Document,
    click: Closure<dyn Fn(MouseEvent)>,
    keydown: Closure<dyn Fn(KeyboardEvent)>,
}

impl Drop for DismissListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
    }
}

fn attach_dismissal(driver: DomChatDriver) -> Result<DismissListeners, DomError> {
    let document = dom::document()?;

    let click = {
        let driver = driver.clone();
        Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| driver.on_document_click(&e.target()))
    };
    let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        driver.on_key(&e.key());
    });

    document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    Ok(DismissListeners {
        document,
        click,
        keydown,
    })
}

fn render_message(message: &Message) -> Html {
    let class = match message.sender {
        Sender::User => "message user-message",
        Sender::Bot => "message bot-message",
    };
    let lines = message.text.split('\n').enumerate().map(|(i, line)| {
        html! {
            <>
                if i > 0 { <br/> }
                {line}
            </>
        }
    });
    html! {
        <div class={class}>
            <div class="message-content">
                <i class={message.icon_class().to_string()}></i>
                <div class="message-text">
                    <p>
                        if let Some(title) = &message.title {
                            <>
                                <strong>{title}</strong>
                                <br/>
                            </>
                        }
                        { for lines }
                    </p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Chatbot)]
pub fn chatbot() -> Html {
    let container_ref = use_node_ref();
    let input_ref = use_node_ref();
    let messages_ref = use_node_ref();
    let redraw = use_force_update();
    let draft = use_state(String::new);

    let driver = {
        let surface = DomSurface {
            container: container_ref.clone(),
            input: input_ref.clone(),
            messages: messages_ref.clone(),
            redraw,
        };
        use_state(move || ChatDriver::new(surface, TimeoutScheduler))
    };

    // Dismiss on outside click or Escape
    {
        let driver = (*driver).clone();
        use_effect_with_deps(
            move |_| {
                let listeners = match attach_dismissal(driver) {
                    Ok(listeners) => Some(listeners),
                    Err(e) => {
                        log::debug!("chatbot dismissal disabled: {}", e);
                        None
                    }
                };
                move || drop(listeners)
            },
            (),
        );
    }

    let on_toggle = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.on_toggle())
    };
    let on_close = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.on_close())
    };
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_submit = {
        let driver = driver.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.trim().is_empty() {
                return;
            }
            driver.on_submit(&draft);
            draft.set(String::new());
        })
    };

    let open = driver.is_open();
    let state = driver.state();

    html! {
        <div class="chatbot-container" ref={container_ref}>
            <button id="chatbotToggle" class="chatbot-toggle" aria-label="Open chat" onclick={on_toggle}>
                <i class="fas fa-comments"></i>
            </button>
            <div id="chatbotWindow" class={classes!("chatbot-window", open.then_some("active"))}>
                <div class="chatbot-header">
                    <div class="chatbot-title">
                        <i class="fas fa-robot"></i>
                        <span>{"Codentra Assistant"}</span>
                    </div>
                    <button id="chatbotClose" class="chatbot-close" aria-label="Close chat" onclick={on_close}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div id="chatbotMessages" class="chatbot-messages" ref={messages_ref}>
                    <div class="message bot-message">
                        <div class="message-content">
                            <i class="fas fa-robot"></i>
                            <div class="message-text">
                                <p>{"Hi! I'm the Codentra assistant. Ask me anything or pick a topic below."}</p>
                            </div>
                        </div>
                    </div>
                    { for state.transcript.iter().map(render_message) }
                </div>
                <div class="chatbot-quick-options">
                    { for TOPICS.iter().map(|topic| {
                        let key = topic.key();
                        let onclick = {
                            let driver = driver.clone();
                            Callback::from(move |_: MouseEvent| driver.on_quick_option(key))
                        };
                        html! {
                            <button class="quick-option" data-query={key} onclick={onclick}>
                                {topic.label()}
                            </button>
                        }
                    }) }
                </div>
                <form id="chatbotForm" class="chatbot-form" onsubmit={on_submit}>
                    <input
                        id="chatbotInput"
                        ref={input_ref}
                        type="text"
                        placeholder="Type your message..."
                        autocomplete="off"
                        value={(*draft).clone()}
                        oninput={on_input}
                    />
                    <button type="submit" aria-label="Send message">
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </form>
            </div>
        </div>
    }
}
