//! Dialogue tree — quick-reply actions, flow states, canned script, and
//! free-text routing.

pub mod action;
pub mod flow;
pub mod router;
pub mod script;

pub use action::{QuickAction, QuickReply};
pub use flow::Flow;
pub use router::KeywordRouter;
