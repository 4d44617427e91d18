//! Property-based tests for the chat engine

use super::driver::{Bounded, ChatDriver, Focusable, Scrollable, Toggleable};
use super::engine::{transition, ChatEvent, ChatState, Sender};
use super::responses::{classify, Intent, Topic};
use crate::config::ChatTiming;
use crate::utils::scheduler::VirtualScheduler;
use proptest::prelude::*;
use std::rc::Rc;

struct NullSurface;

impl Toggleable for NullSurface {
    fn set_visible(&self, _visible: bool) {}
}

impl Scrollable for NullSurface {
    fn scroll_to_bottom(&self) {}
}

impl Focusable for NullSurface {
    fn focus(&self) {}
}

/// Click targets say directly whether they are inside.
impl Bounded for NullSurface {
    type Target = bool;

    fn contains(&self, inside: &bool) -> bool {
        *inside
    }
}

fn arb_mixed_case(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

fn arb_event() -> impl Strategy<Value = ChatEvent> {
    prop_oneof![
        Just(ChatEvent::Open),
        Just(ChatEvent::Close),
        Just(ChatEvent::Toggle),
        any::<bool>().prop_map(|inside| ChatEvent::DocumentClick { inside }),
        prop_oneof![Just("Escape"), Just("Tab"), Just("a")]
            .prop_map(|k| ChatEvent::KeyDown(k.to_string())),
        "[a-zA-Z ?!]{0,30}".prop_map(ChatEvent::SubmitText),
        prop_oneof![
            Just("mission"),
            Just("vision"),
            Just("services"),
            Just("contact"),
            Just("pricing"),
            Just(""),
        ]
        .prop_map(|k| ChatEvent::QuickOption(k.to_string())),
    ]
}

proptest! {
    #[test]
    fn mission_anywhere_resolves_to_mission(
        prefix in "[a-zA-Z ,.]{0,20}",
        word in arb_mixed_case("mission"),
        suffix in "[a-zA-Z ,.]{0,20}",
    ) {
        let text = format!("{prefix}{word}{suffix}");
        prop_assert_eq!(classify(&text), Intent::Topic(Topic::Mission));

        let clock = Rc::new(VirtualScheduler::default());
        let chat = ChatDriver::new(NullSurface, clock.clone());
        chat.on_submit(&text);
        clock.advance(999);
        prop_assert_eq!(chat.state().transcript.len(), 1);
        clock.advance(1);
        let state = chat.state();
        prop_assert_eq!(state.transcript.len(), 2);
        prop_assert_eq!(state.transcript[1].text.as_str(), Topic::Mission.entry().body);
    }

    #[test]
    fn whitespace_only_input_appends_nothing(text in "[ \t\r\n]{0,12}") {
        let mut state = ChatState::default();
        let effects = transition(&mut state, ChatEvent::SubmitText(text), &ChatTiming::default());
        prop_assert!(effects.is_empty());
        prop_assert!(state.transcript.is_empty());
    }

    #[test]
    fn every_user_turn_gets_exactly_one_reply(events in proptest::collection::vec(arb_event(), 0..40)) {
        let clock = Rc::new(VirtualScheduler::default());
        let chat = ChatDriver::new(NullSurface, clock.clone());
        for event in events {
            match event {
                ChatEvent::Open => chat.on_open(),
                ChatEvent::Close => chat.on_close(),
                ChatEvent::Toggle => chat.on_toggle(),
                ChatEvent::DocumentClick { inside } => chat.on_document_click(&inside),
                ChatEvent::KeyDown(key) => chat.on_key(&key),
                ChatEvent::SubmitText(text) => chat.on_submit(&text),
                ChatEvent::QuickOption(key) => chat.on_quick_option(&key),
                ChatEvent::BotReply(_) => unreachable!(),
            }
            clock.advance(100);
        }
        clock.advance(1_000);

        let state = chat.state();
        let users = state.transcript.iter().filter(|m| m.sender == Sender::User).count();
        let bots = state.transcript.iter().filter(|m| m.sender == Sender::Bot).count();
        prop_assert_eq!(users, bots);
        prop_assert_eq!(clock.pending(), 0);
    }
}
