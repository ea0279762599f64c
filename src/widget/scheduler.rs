//! Reply scheduler — delayed bot responses as cancellable tasks.
//!
//! Every scripted response follows the same shape: wait, show the typing
//! placeholder, swap in the next tray, wait again, land the message.
//! Scheduling a new response aborts anything still pending, so a visitor
//! clicking through quickly never sees a stale reply interleave with a fresh
//! one.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::dialogue::QuickReply;
use crate::widget::event::WidgetEvent;
use crate::widget::log::MessageLog;

/// A bot response waiting to land: the message body plus the tray that
/// replaces the current one while the bot "types".
#[derive(Debug, Clone)]
pub struct BotReply {
    pub body: String,
    pub menu: Option<Vec<QuickReply>>,
}

impl BotReply {
    /// A reply that leaves the tray alone (used when awaiting typed input).
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            menu: None,
        }
    }

    /// A reply that swaps in a new tray as it starts typing.
    pub fn with_menu(body: impl Into<String>, menu: Vec<QuickReply>) -> Self {
        Self {
            body: body.into(),
            menu: Some(menu),
        }
    }
}

/// Schedules delayed bot replies and the signup navigation.
pub struct ReplyScheduler {
    config: WidgetConfig,
    log: Arc<MessageLog>,
    tx: broadcast::Sender<WidgetEvent>,
    /// Tracked pending tasks (for cancellation).
    tasks: Arc<RwLock<HashMap<Uuid, JoinHandle<()>>>>,
}

impl ReplyScheduler {
    pub fn new(
        config: WidgetConfig,
        log: Arc<MessageLog>,
        tx: broadcast::Sender<WidgetEvent>,
    ) -> Self {
        Self {
            config,
            log,
            tx,
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cancel whatever is still pending, then schedule `reply`.
    pub async fn schedule_reply(&self, reply: BotReply) {
        self.cancel_pending().await;

        let task_id = Uuid::new_v4();
        let log = Arc::clone(&self.log);
        let tasks = Arc::clone(&self.tasks);
        let reply_delay = self.config.reply_delay;
        let typing_delay = self.config.typing_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(reply_delay).await;
            log.begin_typing().await;
            if let Some(menu) = reply.menu {
                log.replace_tray(menu).await;
            }
            tokio::time::sleep(typing_delay).await;
            log.finish_typing_with(reply.body).await;
            tasks.write().await.remove(&task_id);
        });

        self.tasks.write().await.insert(task_id, handle);
    }

    /// Cancel pending work, then emit a navigation event after the redirect
    /// delay.
    pub async fn schedule_navigate(&self, url: impl Into<String>) {
        self.cancel_pending().await;

        let task_id = Uuid::new_v4();
        let url = url.into();
        let tx = self.tx.clone();
        let tasks = Arc::clone(&self.tasks);
        let redirect_delay = self.config.redirect_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(redirect_delay).await;
            debug!(url = %url, "emitting navigation");
            let _ = tx.send(WidgetEvent::Navigate { url });
            tasks.write().await.remove(&task_id);
        });

        self.tasks.write().await.insert(task_id, handle);
    }

    /// Abort every scheduled task and drop any typing placeholder an aborted
    /// reply left behind.
    pub async fn cancel_pending(&self) {
        let cancelled: Vec<JoinHandle<()>> = {
            let mut tasks = self.tasks.write().await;
            tasks.drain().map(|(_, handle)| handle).collect()
        };
        if cancelled.is_empty() {
            return;
        }
        debug!(count = cancelled.len(), "cancelling pending bot replies");
        for handle in cancelled {
            if !handle.is_finished() {
                handle.abort();
            }
        }
        self.log.clear_typing().await;
    }

    /// Number of scheduled tasks not yet landed.
    pub async fn pending_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::sync::broadcast::error::TryRecvError;
    use tokio::time::timeout;

    use crate::dialogue::script;
    use crate::widget::event::Sender;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    fn test_config(reply_ms: u64) -> WidgetConfig {
        WidgetConfig {
            reply_delay: Duration::from_millis(reply_ms),
            typing_delay: Duration::from_millis(5),
            redirect_delay: Duration::from_millis(5),
            ..WidgetConfig::default()
        }
    }

    fn make_scheduler(
        reply_ms: u64,
    ) -> (ReplyScheduler, broadcast::Receiver<WidgetEvent>) {
        let (tx, rx) = broadcast::channel(64);
        let log = Arc::new(MessageLog::new(tx.clone(), Duration::from_millis(5)));
        (ReplyScheduler::new(test_config(reply_ms), log, tx), rx)
    }

    async fn next_event(rx: &mut broadcast::Receiver<WidgetEvent>) -> WidgetEvent {
        timeout(TEST_TIMEOUT, rx.recv())
            .await
            .expect("test timed out")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn reply_lands_in_order() {
        let (scheduler, mut rx) = make_scheduler(5);
        scheduler
            .schedule_reply(BotReply::with_menu("the pitch", script::welcome_menu()))
            .await;

        assert!(matches!(next_event(&mut rx).await, WidgetEvent::TypingStarted));
        assert!(matches!(
            next_event(&mut rx).await,
            WidgetEvent::QuickRepliesReplaced { .. }
        ));
        assert!(matches!(next_event(&mut rx).await, WidgetEvent::TypingCleared));
        match next_event(&mut rx).await {
            WidgetEvent::MessageAppended { message } => {
                assert_eq!(message.sender, Sender::Bot);
                assert_eq!(message.body, "the pitch");
            }
            other => panic!("Expected MessageAppended, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn new_reply_cancels_the_pending_one() {
        let (scheduler, _rx) = make_scheduler(200);
        scheduler.schedule_reply(BotReply::new("first")).await;
        scheduler.schedule_reply(BotReply::new("second")).await;

        // Only the second reply should ever land
        tokio::time::sleep(Duration::from_millis(400)).await;
        let messages = scheduler.log.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "second");
    }

    #[tokio::test]
    async fn cancel_clears_an_orphaned_typing_placeholder() {
        let (scheduler, mut rx) = make_scheduler(5);
        let slow = BotReply::new("never lands");
        // Long typing phase so cancellation hits mid-simulation
        let scheduler = ReplyScheduler::new(
            WidgetConfig {
                typing_delay: Duration::from_secs(60),
                ..test_config(5)
            },
            Arc::clone(&scheduler.log),
            scheduler.tx.clone(),
        );
        scheduler.schedule_reply(slow).await;

        assert!(matches!(next_event(&mut rx).await, WidgetEvent::TypingStarted));
        scheduler.cancel_pending().await;
        assert!(matches!(next_event(&mut rx).await, WidgetEvent::TypingCleared));
        assert!(!scheduler.log.is_typing().await);
        assert_eq!(scheduler.pending_count().await, 0);
        assert!(scheduler.log.messages().await.is_empty());
    }

    #[tokio::test]
    async fn navigate_fires_after_the_redirect_delay() {
        let (scheduler, mut rx) = make_scheduler(5);
        scheduler.schedule_navigate("/#pricing").await;

        match next_event(&mut rx).await {
            WidgetEvent::Navigate { url } => assert_eq!(url, "/#pricing"),
            other => panic!("Expected Navigate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancel_with_nothing_pending_is_silent() {
        let (scheduler, mut rx) = make_scheduler(5);
        scheduler.cancel_pending().await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
