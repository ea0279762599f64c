//! Widget runtime — transcript and tray state, cancellable reply scheduling,
//! and the chat shell that ties the dialogue tree to both.

pub mod event;
pub mod log;
pub mod scheduler;
pub mod shell;

pub use event::{Message, Sender, WidgetEvent};
pub use log::MessageLog;
pub use scheduler::{BotReply, ReplyScheduler};
pub use shell::{ChatWidget, spawn_auto_open};
