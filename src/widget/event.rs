//! Widget events — everything a frontend needs to mirror chat state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dialogue::QuickReply;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bot => write!(f, "bot"),
            Self::User => write!(f, "user"),
        }
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Events broadcast to every subscribed frontend.
///
/// A frontend that starts from a transcript snapshot and applies these in
/// arrival order stays in sync with the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// A message landed in the transcript.
    MessageAppended { message: Message },
    /// The bot's typing placeholder appeared.
    TypingStarted,
    /// The typing placeholder went away.
    TypingCleared,
    /// The quick-reply tray was replaced wholesale with this set.
    QuickRepliesReplaced { replies: Vec<QuickReply> },
    /// The tray was hidden.
    QuickRepliesHidden,
    /// The chat panel opened.
    PanelOpened,
    /// The chat panel closed.
    PanelClosed,
    /// The unread badge was cleared.
    NotificationCleared,
    /// The host should open this URL in a new browsing context.
    Navigate { url: String },
}
