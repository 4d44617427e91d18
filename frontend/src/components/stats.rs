use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS, STATS_THRESHOLD};
use crate::utils::dom::{observe_once, ObserverOptions};

/// The three hero figures, recognised by their resting text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    Satisfaction,
    Experience,
    Support,
}

impl StatKind {
    pub fn detect(text: &str) -> Option<Self> {
        if text.contains("100%") {
            Some(StatKind::Satisfaction)
        } else if text.contains("5+") {
            Some(StatKind::Experience)
        } else if text.contains("24/7") {
            Some(StatKind::Support)
        } else {
            None
        }
    }

    pub fn target(self) -> u32 {
        match self {
            StatKind::Satisfaction => 100,
            StatKind::Experience => 5,
            StatKind::Support => 24,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            StatKind::Satisfaction => "%",
            StatKind::Experience => "+",
            StatKind::Support => "/7",
        }
    }

    pub fn format(self, value: u32) -> String {
        format!("{}{}", value, self.suffix())
    }
}

/// Frames of a linear count-up, one per tick. The last frame is always the
/// target; the iterator is exhausted after it.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    kind: StatKind,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(kind: StatKind, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self {
            kind,
            current: 0.0,
            increment: f64::from(kind.target()) / ticks,
            finished: false,
        }
    }

    pub fn for_kind(kind: StatKind) -> Self {
        Self::new(kind, COUNTER_DURATION_MS, COUNTER_TICK_MS)
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        let target = self.kind.target();
        if self.current >= f64::from(target) {
            self.finished = true;
            Some(self.kind.format(target))
        } else {
            Some(self.kind.format(self.current.floor() as u32))
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatNumberProps {
    pub value: AttrValue,
    pub label: AttrValue,
    pub started: bool,
}

#[function_component(StatNumber)]
pub fn stat_number(props: &StatNumberProps) -> Html {
    let display = use_state(|| props.value.to_string());

    {
        let display = display.clone();
        let value = props.value.clone();
        use_effect_with_deps(
            move |started: &bool| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *started {
                    if let Some(kind) = StatKind::detect(&value) {
                        display.set("0".to_string());
                        let mut frames = CounterAnimation::for_kind(kind);
                        let handle = interval_handle.clone();
                        let interval = Interval::new(COUNTER_TICK_MS, move || match frames.next() {
                            Some(frame) => display.set(frame),
                            None => {
                                // Stop ticking once the target is shown
                                if let Some(interval) = handle.borrow_mut().take() {
                                    drop(interval);
                                }
                            }
                        });
                        *interval_handle.borrow_mut() = Some(interval);
                    }
                }
                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.started,
        );
    }

    html! {
        <div class="stat-item">
            <span class="stat-number">{(*display).clone()}</span>
            <span class="stat-label">{&*props.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeroStatsProps {
    pub armed: bool,
}

/// Hero figures that count up the first time the block is half visible.
#[function_component(HeroStats)]
pub fn hero_stats(props: &HeroStatsProps) -> Html {
    let container_ref = use_node_ref();
    let started = use_state(|| false);

    {
        let container_ref = container_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |armed: &bool| {
                let observer = if *armed {
                    match container_ref.cast::<Element>() {
                        Some(container) => {
                            let options = ObserverOptions {
                                threshold: STATS_THRESHOLD,
                                root_margin: None,
                            };
                            observe_once(&container, &options, move |_| started.set(true))
                                .map_err(|e| log::warn!("stats counter disabled: {}", e))
                                .ok()
                        }
                        None => {
                            log::debug!("hero stats not mounted");
                            None
                        }
                    }
                } else {
                    None
                };
                move || drop(observer)
            },
            props.armed,
        );
    }

    html! {
        <div class="hero-stats" ref={container_ref}>
            <StatNumber value="100%" label="Client Satisfaction" started={*started} />
            <StatNumber value="5+" label="Years Experience" started={*started} />
            <StatNumber value="24/7" label="Support" started={*started} />
        </div>
    }
}
