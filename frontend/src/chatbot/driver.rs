use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::engine::{transition, ChatEffect, ChatEvent, ChatState};
use crate::config::ChatTiming;
use crate::utils::scheduler::Scheduler;

/// Something that can be shown or hidden.
pub trait Toggleable {
    fn set_visible(&self, visible: bool);
}

/// A view that follows its newest content.
pub trait Scrollable {
    fn scroll_to_bottom(&self);
}

/// Something that can take keyboard focus.
pub trait Focusable {
    fn focus(&self);
}

/// Something with an on-screen boundary that clicks can land inside.
pub trait Bounded {
    type Target;

    /// True when `target` is the boundary element or one of its descendants.
    fn contains(&self, target: &Self::Target) -> bool;
}

pub trait ChatSurface: Toggleable + Scrollable + Focusable + Bounded {}

impl<T: Toggleable + Scrollable + Focusable + Bounded> ChatSurface for T {}

/// Feeds widget events through the state machine and carries out the
/// resulting effects on a surface. Cloning shares the same conversation.
pub struct ChatDriver<V, S> {
    inner: Rc<Inner<V, S>>,
}

struct Inner<V, S> {
    state: RefCell<ChatState>,
    surface: V,
    scheduler: S,
    timing: ChatTiming,
}

impl<V, S> Clone for ChatDriver<V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: ChatSurface + 'static, S: Scheduler + 'static> ChatDriver<V, S> {
    pub fn new(surface: V, scheduler: S) -> Self {
        Self::with_timing(surface, scheduler, ChatTiming::default())
    }

    pub fn with_timing(surface: V, scheduler: S, timing: ChatTiming) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ChatState::default()),
                surface,
                scheduler,
                timing,
            }),
        }
    }

    pub fn state(&self) -> Ref<'_, ChatState> {
        self.inner.state.borrow()
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().open
    }

    pub fn on_open(&self) {
        self.dispatch(ChatEvent::Open);
    }

    pub fn on_close(&self) {
        self.dispatch(ChatEvent::Close);
    }

    pub fn on_toggle(&self) {
        self.dispatch(ChatEvent::Toggle);
    }

    pub fn on_submit(&self, text: &str) {
        self.dispatch(ChatEvent::SubmitText(text.to_string()));
    }

    pub fn on_quick_option(&self, topic_key: &str) {
        self.dispatch(ChatEvent::QuickOption(topic_key.to_string()));
    }

    /// A click anywhere in the document. Only clicks outside the surface
    /// boundary dismiss the widget.
    pub fn on_document_click(&self, target: &V::Target) {
        let inside = self.inner.surface.contains(target);
        self.dispatch(ChatEvent::DocumentClick { inside });
    }

    pub fn on_key(&self, key: &str) {
        self.dispatch(ChatEvent::KeyDown(key.to_string()));
    }

    fn dispatch(&self, event: ChatEvent) {
        // The borrow must end before effects run; surfaces read the state back.
        let effects = {
            let mut state = self.inner.state.borrow_mut();
            transition(&mut state, event, &self.inner.timing)
        };
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&self, effect: ChatEffect) {
        match effect {
            ChatEffect::SetVisible(visible) => self.inner.surface.set_visible(visible),
            ChatEffect::FocusComposer => self.inner.surface.focus(),
            ChatEffect::ScrollToBottom => self.inner.surface.scroll_to_bottom(),
            ChatEffect::ScheduleReply { delay_ms, reply } => {
                let driver = self.clone();
                self.inner.scheduler.schedule(
                    delay_ms,
                    Box::new(move || driver.dispatch(ChatEvent::BotReply(reply))),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::engine::{Message, Sender};
    use crate::chatbot::responses::{Topic, TOPICS};
    use crate::utils::scheduler::VirtualScheduler;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct FakeSurface {
        visible: Rc<Cell<bool>>,
        focused: Rc<Cell<u32>>,
        scrolls: Rc<Cell<u32>>,
    }

    impl Toggleable for FakeSurface {
        fn set_visible(&self, visible: bool) {
            self.visible.set(visible);
        }
    }

    impl Scrollable for FakeSurface {
        fn scroll_to_bottom(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    impl Focusable for FakeSurface {
        fn focus(&self) {
            self.focused.set(self.focused.get() + 1);
        }
    }

    const CONTAINER: &str = "chatbot-container";

    /// Click targets are written as their ancestor path, root first.
    impl Bounded for FakeSurface {
        type Target = &'static str;

        fn contains(&self, target: &&'static str) -> bool {
            target.split('/').any(|node| node == CONTAINER)
        }
    }

    const TRANSCRIPT_LINE: &str = "body/chatbot-container/chatbot-window/chatbot-messages/message/p";
    const TOGGLE_ICON: &str = "body/chatbot-container/chatbot-toggle/i";
    const HERO_BUTTON: &str = "body/main/home/hero-buttons/a";

    fn driver() -> (ChatDriver<FakeSurface, Rc<VirtualScheduler>>, FakeSurface, Rc<VirtualScheduler>) {
        let surface = FakeSurface::default();
        let clock = Rc::new(VirtualScheduler::default());
        (ChatDriver::new(surface.clone(), clock.clone()), surface, clock)
    }

    #[test]
    fn quick_option_reply_arrives_after_500ms() {
        for topic in TOPICS {
            let (chat, surface, clock) = driver();
            chat.on_quick_option(topic.key());
            assert_eq!(chat.state().transcript.len(), 1);

            clock.advance(499);
            assert_eq!(chat.state().transcript.len(), 1);

            clock.advance(1);
            let transcript = chat.state().transcript.clone();
            assert_eq!(
                transcript,
                vec![
                    Message::user(topic.entry().title),
                    Message::from_entry(topic.entry()),
                ]
            );
            assert_eq!(surface.scrolls.get(), 2);

            clock.advance(10_000);
            assert_eq!(chat.state().transcript.len(), 2);
        }
    }

    #[test]
    fn free_text_reply_arrives_after_one_second() {
        let (chat, _surface, clock) = driver();
        chat.on_submit("What is the MISSION of the company?");
        clock.advance(999);
        assert_eq!(chat.state().transcript.len(), 1);
        clock.advance(1);
        let state = chat.state();
        let reply = &state.transcript[1];
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.text, Topic::Mission.entry().body);
    }

    #[test]
    fn each_submission_gets_its_own_reply() {
        let (chat, _surface, clock) = driver();
        chat.on_submit("hello");
        chat.on_quick_option("contact");
        // quick option is answered first: its delay is shorter
        clock.advance(500);
        assert_eq!(chat.state().transcript.len(), 3);
        clock.advance(500);
        let state = chat.state();
        let senders: Vec<Sender> = state.transcript.iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::User, Sender::Bot, Sender::Bot]);
        assert_eq!(state.transcript[3].text, crate::chatbot::responses::GREETING_REPLY);
    }

    #[test]
    fn blank_submission_touches_nothing() {
        let (chat, surface, clock) = driver();
        chat.on_submit("");
        chat.on_submit("   ");
        assert_eq!(clock.pending(), 0);
        assert_eq!(surface.scrolls.get(), 0);
        assert!(chat.state().transcript.is_empty());
    }

    #[test]
    fn open_moves_focus_and_dismissal_closes() {
        let (chat, surface, _clock) = driver();
        chat.on_open();
        assert!(surface.visible.get());
        assert_eq!(surface.focused.get(), 1);

        chat.on_document_click(&TRANSCRIPT_LINE);
        assert!(chat.is_open());

        chat.on_document_click(&HERO_BUTTON);
        assert!(!surface.visible.get());

        chat.on_toggle();
        assert!(surface.visible.get());
        assert_eq!(surface.focused.get(), 2);
        chat.on_key("Escape");
        assert!(!chat.is_open());

        chat.on_open();
        chat.on_close();
        assert!(!surface.visible.get());
    }

    #[test]
    fn reply_lands_after_widget_is_closed() {
        let (chat, _surface, clock) = driver();
        chat.on_open();
        chat.on_submit("thanks");
        chat.on_close();
        clock.advance(1_000);
        assert_eq!(chat.state().transcript.len(), 2);
    }

    #[test]
    fn custom_timing_is_honoured() {
        let clock = Rc::new(VirtualScheduler::default());
        let chat = ChatDriver::with_timing(
            FakeSurface::default(),
            clock.clone(),
            ChatTiming {
                free_text_reply_ms: 10,
                quick_option_reply_ms: 5,
            },
        );
        chat.on_submit("hi");
        clock.advance(10);
        assert_eq!(chat.state().transcript.len(), 2);
    }

    #[test]
    fn clicks_inside_the_widget_keep_it_open() {
        let (chat, surface, _clock) = driver();
        chat.on_open();

        chat.on_document_click(&TRANSCRIPT_LINE);
        assert!(chat.is_open());
        chat.on_document_click(&TOGGLE_ICON);
        assert!(chat.is_open());
        chat.on_document_click(&"body/chatbot-container");
        assert!(surface.visible.get());

        chat.on_document_click(&HERO_BUTTON);
        assert!(!chat.is_open());
        assert!(!surface.visible.get());
    }

    #[test]
    fn outside_click_while_closed_does_nothing() {
        let (chat, surface, _clock) = driver();
        chat.on_document_click(&HERO_BUTTON);
        chat.on_document_click(&"body");
        assert!(!chat.is_open());
        assert!(!surface.visible.get());
        assert_eq!(surface.focused.get(), 0);
    }

    #[test]
    fn similarly_named_ancestors_are_outside() {
        let (chat, _surface, _clock) = driver();
        chat.on_open();
        chat.on_document_click(&"body/chatbot-container-shadow/div");
        assert!(!chat.is_open());
    }
}
