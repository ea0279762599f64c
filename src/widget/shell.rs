//! Chat shell — the widget instance a hosting frontend owns.
//!
//! One [`ChatWidget`] is one visitor session: panel state, conversation
//! context, transcript, and the dialogue dispatcher. Frontends drive it with
//! [`ChatWidget::handle_action`] and [`ChatWidget::send_message`] and mirror
//! it by consuming [`ChatWidget::events`].

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::context::{Capture, ConversationContext, Intent};
use crate::dialogue::{Flow, KeywordRouter, QuickAction, QuickReply, router, script};
use crate::store::{StateStore, keys};
use crate::widget::event::{Sender, WidgetEvent};
use crate::widget::log::MessageLog;
use crate::widget::scheduler::{BotReply, ReplyScheduler};

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 256;

/// A mounted chat widget.
pub struct ChatWidget {
    config: WidgetConfig,
    store: Arc<dyn StateStore>,
    context: RwLock<ConversationContext>,
    flow: RwLock<Flow>,
    is_open: RwLock<bool>,
    log: Arc<MessageLog>,
    scheduler: ReplyScheduler,
    router: KeywordRouter,
    tx: broadcast::Sender<WidgetEvent>,
}

impl ChatWidget {
    /// Mount a widget: seed the transcript with the welcome message and menu,
    /// panel closed. The host decides when (or whether) to open it.
    pub async fn mount(config: WidgetConfig, store: Arc<dyn StateStore>) -> Arc<Self> {
        let (tx, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        let log = Arc::new(MessageLog::new(tx.clone(), config.typing_delay));
        let scheduler = ReplyScheduler::new(config.clone(), Arc::clone(&log), tx.clone());

        let widget = Arc::new(Self {
            config,
            store,
            context: RwLock::new(ConversationContext::default()),
            flow: RwLock::new(Flow::Welcome),
            is_open: RwLock::new(false),
            log,
            scheduler,
            router: KeywordRouter::default_rules(),
            tx,
        });

        widget.log.push(Sender::Bot, script::welcome_message()).await;
        widget.log.replace_tray(script::welcome_menu()).await;
        info!("chat widget mounted");
        widget
    }

    /// Subscribe to widget events. Each frontend calls this.
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.tx.subscribe()
    }

    /// The event feed as a `Stream`.
    pub fn events(&self) -> BroadcastStream<WidgetEvent> {
        BroadcastStream::new(self.tx.subscribe())
    }

    /// Open the panel and persist the dismissal flag so later visits skip the
    /// auto-open nudge. No-op if already open.
    pub async fn open(&self) {
        {
            let mut is_open = self.is_open.write().await;
            if *is_open {
                return;
            }
            *is_open = true;
        }
        let _ = self.tx.send(WidgetEvent::PanelOpened);
        let _ = self.tx.send(WidgetEvent::NotificationCleared);
        if let Err(e) = self.store.set(keys::DISMISSED, "true").await {
            warn!(error = %e, "failed to persist dismissal flag");
        }
        debug!("panel opened");
    }

    /// Close the panel. The conversation keeps its state for reopening.
    pub async fn close(&self) {
        {
            let mut is_open = self.is_open.write().await;
            if !*is_open {
                return;
            }
            *is_open = false;
        }
        let _ = self.tx.send(WidgetEvent::PanelClosed);
        debug!("panel closed");
    }

    pub async fn toggle(&self) {
        if self.is_open().await {
            self.close().await;
        } else {
            self.open().await;
        }
    }

    pub async fn is_open(&self) -> bool {
        *self.is_open.read().await
    }

    /// Dispatch a quick-reply action: echo the clicked button's label, hide
    /// the tray, drop any half-answered question, and run the transition.
    pub async fn handle_action(&self, action: QuickAction) {
        let echo = {
            let tray = self.log.tray().await;
            tray.iter()
                .find(|reply| reply.action == action)
                .map(|reply| reply.label.clone())
                .unwrap_or_else(|| action.label().to_string())
        };
        self.log.hide_tray().await;
        self.log.add_message(Sender::User, echo, false).await;
        self.context.write().await.pending_capture = None;
        self.dispatch(action).await;
    }

    /// Handle a typed message: echo it, satisfy any pending capture, then
    /// keyword-route. Unmatched input falls through to the generic help menu,
    /// so free text can never dead-end.
    pub async fn send_message(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let text: String = text.chars().take(self.config.max_input_len).collect();
        self.log.add_message(Sender::User, text.clone(), false).await;

        let pending = self.context.write().await.pending_capture.take();
        if let Some(capture) = pending {
            if self.try_capture(capture, &text).await {
                return;
            }
        }

        match self.router.evaluate(&text) {
            Some(action) => self.dispatch(action).await,
            None => {
                debug!("no keyword matched, offering help menu");
                *self.flow.write().await = Flow::Fallback;
                self.scheduler
                    .schedule_reply(BotReply::with_menu(
                        script::fallback_help(),
                        script::fallback_menu(),
                    ))
                    .await;
            }
        }
    }

    /// Try to satisfy a question the bot asked. Returns false when the text
    /// does not parse, in which case it reroutes like any other message.
    async fn try_capture(&self, capture: Capture, text: &str) -> bool {
        match capture {
            Capture::Email => {
                let Some(email) = router::parse_email(text) else {
                    debug!("no email address in reply, rerouting");
                    return false;
                };
                debug!(email = %email, "captured contact email");
                self.context.write().await.email = Some(email.clone());
                *self.flow.write().await = Flow::Contact;
                self.scheduler
                    .schedule_reply(BotReply::with_menu(
                        script::email_confirmed(&email),
                        script::email_followup_menu(),
                    ))
                    .await;
                true
            }
            Capture::AskingPrice => {
                let Some(price) = router::parse_money(text) else {
                    debug!("no dollar amount in reply, rerouting");
                    return false;
                };
                debug!(%price, "captured asking price");
                self.context.write().await.price_range = Some(price);
                *self.flow.write().await = Flow::PersonalCalculator;
                self.scheduler
                    .schedule_reply(BotReply::with_menu(
                        script::personalized_savings(price),
                        script::calculator_menu(),
                    ))
                    .await;
                true
            }
        }
    }

    async fn reply(&self, flow: Flow, body: impl Into<String>, menu: Vec<QuickReply>) {
        *self.flow.write().await = flow;
        self.scheduler
            .schedule_reply(BotReply::with_menu(body, menu))
            .await;
    }

    /// The dialogue tree. Every action lands here, whether it came from a
    /// tray button or the keyword router.
    async fn dispatch(&self, action: QuickAction) {
        debug!(action = ?action, "dispatching quick action");
        match action {
            QuickAction::Sell => {
                self.context.write().await.interested_in = Some(Intent::Sell);
                self.reply(Flow::Sell, script::sell_pitch(), script::timeshare_type_menu())
                    .await;
            }
            QuickAction::Rent => {
                self.context.write().await.interested_in = Some(Intent::Rent);
                self.reply(Flow::Rent, script::rent_pitch(), script::rental_term_menu())
                    .await;
            }
            QuickAction::Learn => {
                self.reply(Flow::Learn, script::learn_overview(), script::learn_menu())
                    .await;
            }
            QuickAction::Pricing => {
                self.reply(Flow::Pricing, script::pricing_overview(), script::pricing_menu())
                    .await;
            }
            QuickAction::ChooseType { kind } => {
                self.context.write().await.timeshare_type = Some(kind);
                self.reply(Flow::GoalSelect, script::type_ack(kind), script::goal_menu())
                    .await;
            }
            QuickAction::ChooseTerm { term } => {
                self.context.write().await.rental_term = Some(term);
                self.reply(
                    Flow::RentAdvice,
                    script::rental_term_ack(term),
                    script::rental_followup_menu(),
                )
                .await;
            }
            QuickAction::ChooseGoal { goal } => {
                self.context.write().await.goal = Some(goal);
                self.reply(
                    Flow::GoalAdvice,
                    script::goal_advice(goal),
                    script::goal_followup_menu(),
                )
                .await;
            }
            QuickAction::SavingsExample => {
                self.reply(Flow::Savings, script::savings_example(), script::savings_menu())
                    .await;
            }
            QuickAction::PersonalCalculator => {
                self.context.write().await.pending_capture = Some(Capture::AskingPrice);
                *self.flow.write().await = Flow::PersonalCalculator;
                self.scheduler
                    .schedule_reply(BotReply::new(script::asking_price_ask()))
                    .await;
            }
            QuickAction::PlanAdvice => {
                self.reply(Flow::PlanAdvice, script::plan_advice(), script::plan_advice_menu())
                    .await;
            }
            QuickAction::CostComparison => {
                self.reply(
                    Flow::CostComparison,
                    script::cost_comparison(),
                    script::cost_comparison_menu(),
                )
                .await;
            }
            QuickAction::Features => {
                self.reply(Flow::Features, script::features_overview(), script::features_menu())
                    .await;
            }
            QuickAction::SuccessStories => {
                self.reply(
                    Flow::SuccessStories,
                    script::success_stories(),
                    script::stories_menu(),
                )
                .await;
            }
            QuickAction::GettingStarted => {
                self.reply(
                    Flow::GettingStarted,
                    script::getting_started_overview(),
                    script::getting_started_menu(),
                )
                .await;
            }
            QuickAction::MarketAnalysis => {
                self.reply(
                    Flow::MarketAnalysis,
                    script::market_analysis_offer(),
                    script::market_analysis_menu(),
                )
                .await;
            }
            QuickAction::ExpertContact => {
                self.reply(
                    Flow::ExpertContact,
                    script::expert_contact_offer(),
                    script::expert_menu(),
                )
                .await;
            }
            QuickAction::Signup { plan } => {
                debug!(plan = ?plan, "entering signup flow");
                self.reply(Flow::Signup, script::signup_steps(), script::signup_menu())
                    .await;
            }
            QuickAction::CreateAccount => {
                *self.flow.write().await = Flow::Redirect;
                self.scheduler.cancel_pending().await;
                // Confirmation lands immediately, no typing simulation
                self.log
                    .add_message(Sender::Bot, script::redirect_ack(), false)
                    .await;
                self.scheduler
                    .schedule_navigate(self.config.signup_url.clone())
                    .await;
            }
            QuickAction::PhoneContact => {
                self.reply(Flow::PhoneContact, script::phone_ack(), script::phone_menu())
                    .await;
            }
            QuickAction::EmailContact => {
                self.context.write().await.pending_capture = Some(Capture::Email);
                *self.flow.write().await = Flow::EmailCapture;
                self.scheduler
                    .schedule_reply(BotReply::new(script::email_ask()))
                    .await;
            }
            QuickAction::ContactInfo => {
                self.reply(Flow::Contact, script::contact_info(), script::contact_menu())
                    .await;
            }
            QuickAction::Support => {
                self.reply(Flow::Support, script::support_overview(), script::support_menu())
                    .await;
            }
            QuickAction::KeepChatting => {
                self.reply(Flow::Welcome, script::keep_chatting(), script::welcome_menu())
                    .await;
            }
            QuickAction::MoreQuestions => {
                self.reply(
                    Flow::MoreQuestions,
                    script::more_questions(),
                    script::more_questions_menu(),
                )
                .await;
            }
        }
    }

    /// Snapshot of everything learned about the visitor so far.
    pub async fn context(&self) -> ConversationContext {
        self.context.read().await.clone()
    }

    /// Where the conversation currently sits in the dialogue tree.
    pub async fn current_flow(&self) -> Flow {
        *self.flow.read().await
    }

    /// Transcript and tray state, for initial renders.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }
}

/// Spawn the one-shot auto-open timer. After the configured delay the panel
/// opens with a greeting, unless the visitor already opened it this session
/// or dismissed it on an earlier visit. A store read failure counts as not
/// dismissed, so a broken backend nudges on every visit rather than never.
pub fn spawn_auto_open(widget: Arc<ChatWidget>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(widget.config.auto_open_after).await;
        if widget.is_open().await {
            return;
        }
        let dismissed = match widget.store.get(keys::DISMISSED).await {
            Ok(flag) => flag.is_some(),
            Err(e) => {
                warn!(error = %e, "could not read dismissal flag");
                false
            }
        };
        if dismissed {
            debug!("dismissal flag set, skipping auto-open");
            return;
        }
        info!("auto-opening chat panel");
        widget.open().await;
        widget
            .log
            .add_message(Sender::Bot, script::auto_open_greeting(), false)
            .await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::context::SellerGoal;
    use crate::store::MemoryStore;

    fn test_config() -> WidgetConfig {
        WidgetConfig {
            reply_delay: Duration::from_millis(5),
            typing_delay: Duration::from_millis(5),
            redirect_delay: Duration::from_millis(5),
            auto_open_after: Duration::from_millis(30),
            ..WidgetConfig::default()
        }
    }

    async fn make_widget() -> Arc<ChatWidget> {
        ChatWidget::mount(test_config(), Arc::new(MemoryStore::new())).await
    }

    #[tokio::test]
    async fn mount_seeds_welcome_and_menu() {
        let widget = make_widget().await;

        let messages = widget.log().messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].body, script::welcome_message());
        assert_eq!(widget.log().tray().await, script::welcome_menu());
        assert!(!widget.is_open().await);
    }

    #[tokio::test]
    async fn open_persists_the_dismissal_flag() {
        let store = Arc::new(MemoryStore::new());
        let widget = ChatWidget::mount(test_config(), store.clone()).await;

        widget.open().await;
        assert!(widget.is_open().await);
        assert_eq!(
            store.get(keys::DISMISSED).await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn toggle_flips_panel_state() {
        let widget = make_widget().await;
        widget.toggle().await;
        assert!(widget.is_open().await);
        widget.toggle().await;
        assert!(!widget.is_open().await);
    }

    #[tokio::test]
    async fn quick_reply_echoes_the_clicked_button_label() {
        let widget = make_widget().await;
        widget.handle_action(QuickAction::Sell).await;

        let messages = widget.log().messages().await;
        let last = messages.last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.body, "💰 I want to sell");
        // Tray hides until the scheduled reply swaps in the next one
        assert!(widget.log().tray().await.is_empty());
    }

    #[tokio::test]
    async fn echo_falls_back_to_the_canonical_label() {
        let widget = make_widget().await;
        // Not in the welcome tray, so no button label to borrow
        widget
            .handle_action(QuickAction::ChooseGoal {
                goal: SellerGoal::Quick,
            })
            .await;

        let messages = widget.log().messages().await;
        assert_eq!(messages.last().unwrap().body, "💸 Sell quickly");
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let widget = make_widget().await;
        widget.send_message("   ").await;
        assert_eq!(widget.log().messages().await.len(), 1);
    }

    #[tokio::test]
    async fn overlong_input_is_truncated() {
        let widget = make_widget().await;
        let long = "x".repeat(600);
        widget.send_message(&long).await;

        let messages = widget.log().messages().await;
        assert_eq!(messages.last().unwrap().body.chars().count(), 500);
    }
}
