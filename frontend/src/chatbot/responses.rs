use crate::config::COMPANY_NAME;

/// Canned answer for one of the fixed topics.
#[derive(Debug, PartialEq, Eq)]
pub struct ResponseEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Mission,
    Vision,
    Services,
    Contact,
}

pub const TOPICS: [Topic; 4] = [Topic::Mission, Topic::Vision, Topic::Services, Topic::Contact];

static RESPONSES: [ResponseEntry; 4] = [
    ResponseEntry {
        key: "mission",
        title: "Our Mission",
        body: "Transform ideas into intelligent and scalable digital solutions leveraging AI, web technologies, and modern architectures. We drive business growth through user-centric, efficient, and future-ready products while ensuring innovation, excellence, and seamless experiences.",
        icon: "fas fa-bullseye",
    },
    ResponseEntry {
        key: "vision",
        title: "Our Vision",
        body: "To be a leading innovator in AI-driven digital solutions, empowering businesses with cutting-edge technology and seamless user experiences.",
        icon: "fas fa-eye",
    },
    ResponseEntry {
        key: "services",
        title: "Our Services",
        body: "We offer comprehensive digital solutions including Data Analysis, Real-time Application Development, AI-Driven Digital Solutions, Industrial Apps & Digital Products, Web Development, and Automation Tools as a Service.",
        icon: "fas fa-cogs",
    },
    ResponseEntry {
        key: "contact",
        title: "Contact Information",
        body: "📍 Address: Plot No: 601/3015, Mathasahi, Jagatpur, Cuttack\n📞 Phone: 9937148394 / 9778336221\n📧 Email: info@codentra.in\n💬 WhatsApp: Chat with us (9937148394)",
        icon: "fas fa-address-book",
    },
];

impl Topic {
    pub fn entry(self) -> &'static ResponseEntry {
        match self {
            Topic::Mission => &RESPONSES[0],
            Topic::Vision => &RESPONSES[1],
            Topic::Services => &RESPONSES[2],
            Topic::Contact => &RESPONSES[3],
        }
    }

    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// Button label for the quick option of this topic.
    pub fn label(self) -> &'static str {
        match self {
            Topic::Mission => "Mission",
            Topic::Vision => "Vision",
            Topic::Services => "Services",
            Topic::Contact => "Contact",
        }
    }
}

/// Looks up a topic key exactly as carried by a quick-option button.
pub fn lookup(key: &str) -> Option<&'static ResponseEntry> {
    RESPONSES.iter().find(|entry| entry.key == key)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Topic(Topic),
    Greeting,
    Thanks,
    Fallback,
}

// Checked top to bottom; the first rule with a matching keyword wins.
const RULES: &[(&[&str], Intent)] = &[
    (&["mission", "purpose"], Intent::Topic(Topic::Mission)),
    (&["vision", "goal"], Intent::Topic(Topic::Vision)),
    (&["service", "offer", "work"], Intent::Topic(Topic::Services)),
    (&["contact", "phone", "email", "address"], Intent::Topic(Topic::Contact)),
    (&["hello", "hi", "hey"], Intent::Greeting),
    (&["thank"], Intent::Thanks),
];

/// Case-insensitive substring classification of free text.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Fallback)
}

pub const GREETING_REPLY: &str = "Hello! 👋 How can I assist you today? You can ask me about our mission, vision, services, or contact information.";

pub fn thanks_reply() -> String {
    format!(
        "You're welcome! 😊 Is there anything else you'd like to know about {}?",
        COMPANY_NAME
    )
}

pub fn fallback_reply(text: &str) -> String {
    format!(
        "I understand you're asking about '{}'. Let me help you with information about {}. You can ask me about our mission, vision, services, or contact details.",
        text, COMPANY_NAME
    )
}
