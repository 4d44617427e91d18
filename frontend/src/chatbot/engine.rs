//! Chat widget state machine
//!
//! `transition` is pure: it mutates the state it is given and returns the
//! effects the caller has to carry out (visibility, focus, scrolling and
//! delayed replies). Nothing here touches the DOM or a clock.

use super::responses::{self, Intent};
use crate::config::ChatTiming;

pub const BOT_ICON: &str = "fas fa-robot";
pub const USER_ICON: &str = "fas fa-user";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub title: Option<String>,
    pub icon: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            title: None,
            icon: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            title: None,
            icon: None,
        }
    }

    pub fn from_entry(entry: &responses::ResponseEntry) -> Self {
        Self {
            sender: Sender::Bot,
            text: entry.body.to_string(),
            title: Some(entry.title.to_string()),
            icon: Some(entry.icon.to_string()),
        }
    }

    pub fn icon_class(&self) -> &str {
        match (&self.icon, self.sender) {
            (Some(icon), _) => icon.as_str(),
            (None, Sender::Bot) => BOT_ICON,
            (None, Sender::User) => USER_ICON,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub transcript: Vec<Message>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    Open,
    Close,
    Toggle,
    SubmitText(String),
    QuickOption(String),
    /// A click anywhere in the document; `inside` is true when it landed in
    /// the widget container.
    DocumentClick { inside: bool },
    KeyDown(String),
    /// A reply whose delay has elapsed.
    BotReply(Message),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEffect {
    SetVisible(bool),
    FocusComposer,
    ScrollToBottom,
    ScheduleReply { delay_ms: u32, reply: Message },
}

/// Builds the bot answer for a free-text question.
pub fn reply_for(text: &str) -> Message {
    match responses::classify(text) {
        Intent::Topic(topic) => Message::from_entry(topic.entry()),
        Intent::Greeting => Message::bot(responses::GREETING_REPLY),
        Intent::Thanks => Message::bot(responses::thanks_reply()),
        Intent::Fallback => Message::bot(responses::fallback_reply(text)),
    }
}

pub fn transition(state: &mut ChatState, event: ChatEvent, timing: &ChatTiming) -> Vec<ChatEffect> {
    match event {
        ChatEvent::Open => {
            state.open = true;
            vec![ChatEffect::SetVisible(true), ChatEffect::FocusComposer]
        }
        ChatEvent::Toggle if !state.open => {
            state.open = true;
            vec![ChatEffect::SetVisible(true), ChatEffect::FocusComposer]
        }
        ChatEvent::Close | ChatEvent::Toggle => {
            state.open = false;
            vec![ChatEffect::SetVisible(false)]
        }
        ChatEvent::DocumentClick { inside: false } if state.open => {
            state.open = false;
            vec![ChatEffect::SetVisible(false)]
        }
        ChatEvent::KeyDown(key) if key == "Escape" && state.open => {
            state.open = false;
            vec![ChatEffect::SetVisible(false)]
        }
        ChatEvent::DocumentClick { .. } | ChatEvent::KeyDown(_) => Vec::new(),
        ChatEvent::SubmitText(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Vec::new();
            }
            state.transcript.push(Message::user(text));
            vec![
                ChatEffect::ScrollToBottom,
                ChatEffect::ScheduleReply {
                    delay_ms: timing.free_text_reply_ms,
                    reply: reply_for(text),
                },
            ]
        }
        ChatEvent::QuickOption(key) => {
            let Some(entry) = responses::lookup(&key) else {
                log::debug!("quick option `{}` has no canned response", key);
                return Vec::new();
            };
            state.transcript.push(Message::user(entry.title));
            vec![
                ChatEffect::ScrollToBottom,
                ChatEffect::ScheduleReply {
                    delay_ms: timing.quick_option_reply_ms,
                    reply: Message::from_entry(entry),
                },
            ]
        }
        ChatEvent::BotReply(message) => {
            state.transcript.push(message);
            vec![ChatEffect::ScrollToBottom]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::responses::{Topic, TOPICS};

    fn run(state: &mut ChatState, event: ChatEvent) -> Vec<ChatEffect> {
        transition(state, event, &ChatTiming::default())
    }

    fn scheduled(effects: &[ChatEffect]) -> Vec<(u32, Message)> {
        effects
            .iter()
            .filter_map(|e| match e {
                ChatEffect::ScheduleReply { delay_ms, reply } => Some((*delay_ms, reply.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn open_focuses_and_is_idempotent() {
        let mut state = ChatState::default();
        for _ in 0..2 {
            let effects = run(&mut state, ChatEvent::Open);
            assert!(state.open);
            assert_eq!(effects, vec![ChatEffect::SetVisible(true), ChatEffect::FocusComposer]);
        }
        for _ in 0..2 {
            assert_eq!(run(&mut state, ChatEvent::Close), vec![ChatEffect::SetVisible(false)]);
            assert!(!state.open);
        }
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = ChatState::default();
        assert!(run(&mut state, ChatEvent::Toggle).contains(&ChatEffect::FocusComposer));
        assert!(state.open);
        assert_eq!(run(&mut state, ChatEvent::Toggle), vec![ChatEffect::SetVisible(false)]);
        assert!(!state.open);
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut state = ChatState::default();
        for text in ["", "   ", "\n\t"] {
            assert!(run(&mut state, ChatEvent::SubmitText(text.to_string())).is_empty());
        }
        assert!(state.transcript.is_empty());
    }

    #[test]
    fn submission_appends_trimmed_user_message_and_schedules_one_reply() {
        let mut state = ChatState::default();
        let effects = run(&mut state, ChatEvent::SubmitText("  Tell me your mission  ".into()));
        assert_eq!(state.transcript, vec![Message::user("Tell me your mission")]);
        assert_eq!(effects[0], ChatEffect::ScrollToBottom);
        let replies = scheduled(&effects);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].0, 1_000);
        assert_eq!(replies[0].1, Message::from_entry(Topic::Mission.entry()));
    }

    #[test]
    fn fallback_reply_echoes_trimmed_input() {
        let reply = reply_for("pricing");
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.text.contains("'pricing'"));
        assert_eq!(reply.title, None);
        assert_eq!(reply.icon_class(), BOT_ICON);
    }

    #[test]
    fn quick_options_echo_the_title() {
        for topic in TOPICS {
            let mut state = ChatState::default();
            let effects = run(&mut state, ChatEvent::QuickOption(topic.key().to_string()));
            assert_eq!(state.transcript, vec![Message::user(topic.entry().title)]);
            let replies = scheduled(&effects);
            assert_eq!(replies, vec![(500, Message::from_entry(topic.entry()))]);
        }
    }

    #[test]
    fn unknown_quick_option_is_a_no_op() {
        let mut state = ChatState::default();
        assert!(run(&mut state, ChatEvent::QuickOption("pricing".into())).is_empty());
        assert!(state.transcript.is_empty());
    }

    #[test]
    fn dismissal_only_on_outside_click_or_escape_while_open() {
        let mut state = ChatState::default();
        assert!(run(&mut state, ChatEvent::DocumentClick { inside: false }).is_empty());
        assert!(run(&mut state, ChatEvent::KeyDown("Escape".into())).is_empty());

        run(&mut state, ChatEvent::Open);
        assert!(run(&mut state, ChatEvent::DocumentClick { inside: true }).is_empty());
        assert!(run(&mut state, ChatEvent::KeyDown("Enter".into())).is_empty());
        assert!(state.open);

        assert_eq!(
            run(&mut state, ChatEvent::DocumentClick { inside: false }),
            vec![ChatEffect::SetVisible(false)]
        );
        run(&mut state, ChatEvent::Open);
        assert_eq!(
            run(&mut state, ChatEvent::KeyDown("Escape".into())),
            vec![ChatEffect::SetVisible(false)]
        );
        assert!(!state.open);
    }

    #[test]
    fn replies_append_even_when_closed() {
        let mut state = ChatState::default();
        let effects = run(&mut state, ChatEvent::BotReply(Message::bot("late")));
        assert_eq!(effects, vec![ChatEffect::ScrollToBottom]);
        assert_eq!(state.transcript.len(), 1);
    }

    #[test]
    fn icons_default_by_sender() {
        assert_eq!(Message::user("x").icon_class(), USER_ICON);
        assert_eq!(Message::from_entry(Topic::Contact.entry()).icon_class(), "fas fa-address-book");
    }
}
