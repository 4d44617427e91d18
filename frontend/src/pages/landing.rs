use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::chatbot::responses::Topic;
use crate::chatbot::Chatbot;
use crate::components::floating::FloatingElements;
use crate::components::header::{Header, SectionLink};
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;
use crate::components::splash::LoadingSplash;
use crate::components::stats::HeroStats;
use crate::config::{COMPANY_NAME, SPLASH_FADE_MS, SPLASH_VISIBLE_MS};

/// Splash lifecycle. Interactive features are armed only once it is `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Showing,
    FadingOut,
    Done,
}

impl SplashPhase {
    /// Phase that follows this one and how long this one lasts.
    pub fn next(self) -> Option<(u32, SplashPhase)> {
        match self {
            SplashPhase::Showing => Some((SPLASH_VISIBLE_MS, SplashPhase::FadingOut)),
            SplashPhase::FadingOut => Some((SPLASH_FADE_MS, SplashPhase::Done)),
            SplashPhase::Done => None,
        }
    }
}

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Card; 3] = [
    Card {
        icon: "fas fa-lightbulb",
        title: "Innovation First",
        body: "We explore emerging technology so your product is ready for what comes next.",
    },
    Card {
        icon: "fas fa-users",
        title: "Expert Team",
        body: "Engineers, designers and data scientists working as one team.",
    },
    Card {
        icon: "fas fa-shield-alt",
        title: "Reliable Delivery",
        body: "Transparent milestones and tested releases from kickoff to launch.",
    },
];

const SERVICES: [Card; 6] = [
    Card {
        icon: "fas fa-chart-bar",
        title: "Data Analysis",
        body: "Dashboards and insight pipelines that make your data useful.",
    },
    Card {
        icon: "fas fa-bolt",
        title: "Real-time Application Development",
        body: "Live, event-driven applications for web and mobile.",
    },
    Card {
        icon: "fas fa-brain",
        title: "AI-Driven Digital Solutions",
        body: "Models and assistants that turn your data into decisions.",
    },
    Card {
        icon: "fas fa-industry",
        title: "Industrial Apps & Digital Products",
        body: "Shop-floor tools and products built for daily use.",
    },
    Card {
        icon: "fas fa-globe",
        title: "Web Development",
        body: "Fast, accessible websites and web applications.",
    },
    Card {
        icon: "fas fa-robot",
        title: "Automation Tools as a Service",
        body: "Hosted automation that removes repetitive work.",
    },
];

const VALUES: [Card; 4] = [
    Card {
        icon: "fas fa-star",
        title: "Excellence",
        body: "We hold every line of code to a high standard.",
    },
    Card {
        icon: "fas fa-handshake",
        title: "Integrity",
        body: "Honest estimates and open communication.",
    },
    Card {
        icon: "fas fa-rocket",
        title: "Innovation",
        body: "We keep learning so our clients keep leading.",
    },
    Card {
        icon: "fas fa-heart",
        title: "Client Focus",
        body: "Your success is how we measure ours.",
    },
];

const CONTACT_DETAILS: [(&str, &str, Option<&str>); 4] = [
    (
        "fas fa-map-marker-alt",
        "Plot No: 601/3015, Mathasahi, Jagatpur, Cuttack",
        None,
    ),
    ("fas fa-phone", "9937148394 / 9778336221", Some("tel:9937148394")),
    ("fas fa-envelope", "info@codentra.in", Some("mailto:info@codentra.in")),
    ("fab fa-whatsapp", "Chat with us on WhatsApp", Some("https://wa.me/919937148394")),
];

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    /// Mobile device: cards get press feedback on touch.
    pub touch: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let phase = use_state(|| SplashPhase::Showing);

    // Scroll to top only on initial mount, then run the splash sequence
    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                spawn_local(async move {
                    let mut current = SplashPhase::Showing;
                    while let Some((delay_ms, next)) = current.next() {
                        TimeoutFuture::new(delay_ms).await;
                        phase.set(next);
                        current = next;
                    }
                    log::info!("{} page ready", COMPANY_NAME);
                });
                || ()
            },
            (),
        );
    }

    let ready = *phase == SplashPhase::Done;
    let touch = props.touch;

    let card = |class: &'static str, lift: bool, item: &Card| {
        html! {
            <Reveal class={classes!(class)} armed={ready} lift={lift} touch={touch}>
                <div class={format!("{}-icon", class.trim_end_matches("-card"))}>
                    <i class={item.icon}></i>
                </div>
                <h3>{item.title}</h3>
                <p>{item.body}</p>
            </Reveal>
        }
    };

    html! {
        <>
            if *phase != SplashPhase::Done {
                <LoadingSplash fading={*phase == SplashPhase::FadingOut} />
            }
            <Header />
            <main>
                <section id="home" class="hero">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            {"Building the "}<span class="highlight">{"Future"}</span>{" of Technology"}
                        </h1>
                        <p class="hero-subtitle">
                            {"We craft intelligent software, AI solutions and digital experiences that help businesses grow."}
                        </p>
                        <div class="hero-buttons">
                            <SectionLink target="services" class={classes!("btn", "btn-primary")}>
                                {"Our Services"}
                            </SectionLink>
                            <SectionLink target="contact" class={classes!("btn", "btn-secondary")}>
                                {"Get in Touch"}
                            </SectionLink>
                        </div>
                        <HeroStats armed={ready} />
                    </div>
                    <div class="hero-visual">
                        <FloatingElements armed={ready} />
                    </div>
                </section>

                <section id="about" class="about">
                    <div class="container">
                        <div class="section-header">
                            <h2>{"About "}{COMPANY_NAME}</h2>
                            <p>{"A technology partner for companies that want to move faster."}</p>
                        </div>
                        <div class="about-grid">
                            <div class="about-image">
                                <LazyImage
                                    src="assets/team.jpg"
                                    alt="Our team at work"
                                    armed={ready}
                                />
                            </div>
                            <div class="features-grid">
                                { for FEATURES.iter().map(|item| card("feature-card", false, item)) }
                            </div>
                        </div>
                        <div class="mission-vision">
                            { for [Topic::Mission, Topic::Vision].into_iter().map(|topic| {
                                let entry = topic.entry();
                                html! {
                                    <Reveal
                                        id={entry.key}
                                        class={classes!(format!("{}-card", entry.key))}
                                        armed={ready}
                                        touch={touch}
                                    >
                                        <h3><i class={entry.icon}></i>{" "}{entry.title}</h3>
                                        <p>{entry.body}</p>
                                    </Reveal>
                                }
                            }) }
                        </div>
                    </div>
                </section>

                <section id="services" class="services">
                    <div class="container">
                        <div class="section-header">
                            <h2>{"Our Services"}</h2>
                            <p>{"End-to-end delivery, from first idea to production."}</p>
                        </div>
                        <div class="services-grid">
                            { for SERVICES.iter().map(|item| card("service-card", true, item)) }
                        </div>
                    </div>
                </section>

                <section id="values" class="values">
                    <div class="container">
                        <div class="section-header">
                            <h2>{"Our Values"}</h2>
                        </div>
                        <div class="values-grid">
                            { for VALUES.iter().map(|item| card("value-card", false, item)) }
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact">
                    <div class="container">
                        <div class="section-header">
                            <h2>{"Contact Us"}</h2>
                            <p>{"Tell us about your project."}</p>
                        </div>
                        <div class="contact-grid">
                            { for CONTACT_DETAILS.iter().map(|(icon, text, href)| html! {
                                <div class="contact-item">
                                    <i class={*icon}></i>
                                    if let Some(href) = href {
                                        <a href={*href}>{*text}</a>
                                    } else {
                                        <span>{*text}</span>
                                    }
                                </div>
                            }) }
                        </div>
                    </div>
                </section>
            </main>
            <footer class="footer">
                <div class="container">
                    <p>{format!("© 2024 {}. All rights reserved.", COMPANY_NAME)}</p>
                </div>
            </footer>
            if ready {
                <Chatbot />
            }
        </>
    }
}
