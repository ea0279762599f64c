//! Frontends — hosts that render widget state and feed it visitor input.

pub mod terminal;

pub use terminal::TerminalFrontend;
