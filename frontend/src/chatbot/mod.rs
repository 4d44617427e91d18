//! FAQ chatbot widget
//!
//! Keyword-matched canned answers behind a small state machine. The engine
//! and driver are headless; `widget` binds them to the page.

pub mod driver;
pub mod engine;
pub mod responses;
pub mod widget;

#[cfg(test)]
mod proptests;

pub use widget::Chatbot;
