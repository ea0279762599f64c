//! SelfServe Assistant — scripted marketing chat widget engine.

pub mod config;
pub mod context;
pub mod dialogue;
pub mod error;
pub mod frontend;
pub mod store;
pub mod widget;
