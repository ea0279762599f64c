//! Chat transcript — ordered message log, typing placeholder, and quick-reply
//! tray, with broadcast fan-out to subscribed frontends.

use std::time::Duration;

use tokio::sync::{RwLock, broadcast};
use tracing::debug;

use crate::dialogue::QuickReply;
use crate::widget::event::{Message, Sender, WidgetEvent};

/// Shared chat state behind one broadcast sender.
///
/// Mutations land in local state first and broadcast second, so a frontend
/// replaying events on top of a snapshot never observes them out of order.
pub struct MessageLog {
    messages: RwLock<Vec<Message>>,
    typing: RwLock<bool>,
    tray: RwLock<Vec<QuickReply>>,
    typing_delay: Duration,
    tx: broadcast::Sender<WidgetEvent>,
}

impl MessageLog {
    pub fn new(tx: broadcast::Sender<WidgetEvent>, typing_delay: Duration) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            typing: RwLock::new(false),
            tray: RwLock::new(Vec::new()),
            typing_delay,
            tx,
        }
    }

    /// Append a message to the transcript and broadcast it.
    pub async fn push(&self, sender: Sender, body: impl Into<String>) -> Message {
        let message = Message::new(sender, body);
        debug!(sender = %message.sender, chars = message.body.chars().count(), "message appended");
        {
            let mut messages = self.messages.write().await;
            messages.push(message.clone());
        }
        // Ok if no receivers are listening yet
        let _ = self.tx.send(WidgetEvent::MessageAppended {
            message: message.clone(),
        });
        message
    }

    /// Show the typing placeholder. No-op if it is already showing.
    pub async fn begin_typing(&self) {
        let mut typing = self.typing.write().await;
        if !*typing {
            *typing = true;
            let _ = self.tx.send(WidgetEvent::TypingStarted);
        }
    }

    /// Remove the typing placeholder. No-op if it is not showing.
    pub async fn clear_typing(&self) {
        let mut typing = self.typing.write().await;
        if *typing {
            *typing = false;
            let _ = self.tx.send(WidgetEvent::TypingCleared);
        }
    }

    /// Remove the typing placeholder, then land the finished bot message, in
    /// that order.
    pub async fn finish_typing_with(&self, body: impl Into<String>) -> Message {
        self.clear_typing().await;
        self.push(Sender::Bot, body).await
    }

    /// Append a message the way the dialogue tree does: a bot message with
    /// `simulate` shows exactly one typing placeholder for the configured
    /// delay before landing; everything else lands immediately.
    pub async fn add_message(
        &self,
        sender: Sender,
        body: impl Into<String>,
        simulate: bool,
    ) -> Message {
        if simulate && sender == Sender::Bot {
            self.begin_typing().await;
            tokio::time::sleep(self.typing_delay).await;
            self.finish_typing_with(body).await
        } else {
            self.push(sender, body).await
        }
    }

    /// Replace the tray wholesale. The previous set is discarded, never
    /// appended to.
    pub async fn replace_tray(&self, replies: Vec<QuickReply>) {
        {
            let mut tray = self.tray.write().await;
            *tray = replies.clone();
        }
        let _ = self.tx.send(WidgetEvent::QuickRepliesReplaced { replies });
    }

    /// Hide the tray. No-op if it is already empty.
    pub async fn hide_tray(&self) {
        let mut tray = self.tray.write().await;
        if !tray.is_empty() {
            tray.clear();
            let _ = self.tx.send(WidgetEvent::QuickRepliesHidden);
        }
    }

    /// Snapshot of the transcript.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Snapshot of the current tray.
    pub async fn tray(&self) -> Vec<QuickReply> {
        self.tray.read().await.clone()
    }

    /// Whether the typing placeholder is showing.
    pub async fn is_typing(&self) -> bool {
        *self.typing.read().await
    }
}
