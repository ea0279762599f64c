//! Integration tests for the scripted dialogue widget.
//!
//! Each test mounts a real `ChatWidget` over an in-memory store, subscribes
//! to its event feed, and drives it the way a frontend would: quick-reply
//! clicks, free-text messages, and the auto-open timer.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tokio::time::{sleep, timeout};

use selfserve_assistant::config::WidgetConfig;
use selfserve_assistant::context::{Intent, SellerGoal, TimeshareType};
use selfserve_assistant::dialogue::script;
use selfserve_assistant::dialogue::{Flow, QuickAction};
use selfserve_assistant::store::{MemoryStore, StateStore, keys};
use selfserve_assistant::widget::{ChatWidget, Message, Sender, WidgetEvent, spawn_auto_open};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Short delays so scheduled replies land within a few milliseconds.
fn test_config() -> WidgetConfig {
    WidgetConfig {
        reply_delay: Duration::from_millis(10),
        typing_delay: Duration::from_millis(15),
        redirect_delay: Duration::from_millis(10),
        auto_open_after: Duration::from_millis(40),
        signup_url: "/#pricing".to_string(),
        max_input_len: 500,
    }
}

async fn mount_widget() -> Arc<ChatWidget> {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
    ChatWidget::mount(test_config(), store).await
}

async fn next_event(rx: &mut broadcast::Receiver<WidgetEvent>) -> WidgetEvent {
    rx.recv().await.expect("event channel closed")
}

/// Skip ahead to the next bot message, ignoring everything else.
async fn next_bot_message(rx: &mut broadcast::Receiver<WidgetEvent>) -> Message {
    loop {
        if let WidgetEvent::MessageAppended { message } = next_event(rx).await {
            if message.sender == Sender::Bot {
                return message;
            }
        }
    }
}

// ── Keyword routing ──────────────────────────────────────────────────

#[tokio::test]
async fn how_question_routes_to_the_learn_overview() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.send_message("how does this work?").await;

        let msg = next_bot_message(&mut rx).await;
        assert!(msg.body.contains("The Problem with Traditional Brokers"));
        assert!(msg.body.contains("$7.99"));
        assert_eq!(widget.current_flow().await, Flow::Learn);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn cost_keyword_outranks_sell_when_both_match() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        // "cost" and "sell" both hit; pricing is checked first.
        widget.send_message("what does it cost to sell here").await;

        let msg = next_bot_message(&mut rx).await;
        assert!(msg.body.contains("Starter"));
        assert!(msg.body.contains("Most Popular"));
        assert_eq!(widget.current_flow().await, Flow::Pricing);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn unmatched_text_falls_back_to_the_help_menu() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.send_message("asdf qwerty zxcv").await;

        let msg = next_bot_message(&mut rx).await;
        assert_eq!(msg.body, script::fallback_help());
        assert_eq!(widget.current_flow().await, Flow::Fallback);
        assert_eq!(widget.log().tray().await.len(), 4);
    })
    .await
    .expect("test timed out");
}

// ── Quick-reply flows ────────────────────────────────────────────────

#[tokio::test]
async fn sell_flow_walks_type_and_goal_to_account_creation() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.handle_action(QuickAction::Sell).await;
        let pitch = next_bot_message(&mut rx).await;
        assert!(pitch.body.contains("What type of timeshare"));

        widget
            .handle_action(QuickAction::ChooseType {
                kind: TimeshareType::Beach,
            })
            .await;
        let ack = next_bot_message(&mut rx).await;
        assert!(ack.body.contains("Beach Resort"));

        widget
            .handle_action(QuickAction::ChooseGoal {
                goal: SellerGoal::Quick,
            })
            .await;
        let advice = next_bot_message(&mut rx).await;
        assert!(advice.body.contains("Competitive pricing"));

        // The closing tray leads with account creation.
        let tray = widget.log().tray().await;
        assert!(tray.iter().any(|r| r.label == "🚀 Create account now"));

        let ctx = widget.context().await;
        assert_eq!(ctx.interested_in, Some(Intent::Sell));
        assert_eq!(ctx.timeshare_type, Some(TimeshareType::Beach));
        assert_eq!(ctx.goal, Some(SellerGoal::Quick));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn each_reply_replaces_the_tray_wholesale() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.handle_action(QuickAction::Sell).await;
        next_bot_message(&mut rx).await;

        let tray = widget.log().tray().await;
        assert_eq!(tray, script::timeshare_type_menu());
        // Nothing from the welcome menu survives.
        assert!(!tray.iter().any(|r| r.action == QuickAction::Rent));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn scheduled_replies_wrap_the_message_in_typing_events() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.handle_action(QuickAction::Learn).await;

        let mut events = Vec::new();
        loop {
            let event = next_event(&mut rx).await;
            let done = matches!(
                &event,
                WidgetEvent::MessageAppended { message } if message.sender == Sender::Bot
            );
            events.push(event);
            if done {
                break;
            }
        }

        assert_eq!(events.len(), 6);
        assert!(matches!(events[0], WidgetEvent::QuickRepliesHidden));
        assert!(
            matches!(&events[1], WidgetEvent::MessageAppended { message } if message.sender == Sender::User)
        );
        assert!(matches!(events[2], WidgetEvent::TypingStarted));
        assert!(matches!(events[3], WidgetEvent::QuickRepliesReplaced { .. }));
        assert!(matches!(events[4], WidgetEvent::TypingCleared));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn a_second_action_cancels_the_pending_reply() {
    timeout(TEST_TIMEOUT, async {
        let config = WidgetConfig {
            reply_delay: Duration::from_millis(150),
            ..test_config()
        };
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let widget = ChatWidget::mount(config, store).await;
        let mut rx = widget.subscribe();

        // Click twice before the first reply's delay elapses.
        widget.handle_action(QuickAction::Sell).await;
        widget.handle_action(QuickAction::Pricing).await;

        let msg = next_bot_message(&mut rx).await;
        assert!(msg.body.contains("Starter"));
        assert_eq!(widget.current_flow().await, Flow::Pricing);

        // The sell pitch never lands.
        let extra = timeout(Duration::from_millis(400), next_bot_message(&mut rx)).await;
        assert!(extra.is_err());
    })
    .await
    .expect("test timed out");
}

// ── Free-text captures ───────────────────────────────────────────────

#[tokio::test]
async fn email_capture_confirms_the_given_address() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.handle_action(QuickAction::EmailContact).await;
        let ask = next_bot_message(&mut rx).await;
        assert!(ask.body.contains("email address"));

        widget
            .send_message("sure, reach me at jane.doe@example.com please")
            .await;
        let confirm = next_bot_message(&mut rx).await;
        assert!(confirm.body.contains("jane.doe@example.com"));

        let ctx = widget.context().await;
        assert_eq!(ctx.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(widget.current_flow().await, Flow::Contact);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn calculator_prices_savings_from_the_visitor_figure() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.handle_action(QuickAction::PersonalCalculator).await;
        let ask = next_bot_message(&mut rx).await;
        assert!(ask.body.contains("asking price"));

        widget.send_message("around $20,000 I think").await;
        let reply = next_bot_message(&mut rx).await;
        assert!(reply.body.contains("You save: $4,955!"));

        let ctx = widget.context().await;
        assert_eq!(ctx.price_range, Some(Decimal::from(20_000)));
    })
    .await
    .expect("test timed out");
}

// ── Signup redirect ──────────────────────────────────────────────────

#[tokio::test]
async fn account_creation_acks_immediately_then_navigates() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        widget.handle_action(QuickAction::CreateAccount).await;

        // Tray hides, the click echoes, then the ack lands with no typing
        // simulation in between.
        assert!(matches!(
            next_event(&mut rx).await,
            WidgetEvent::QuickRepliesHidden
        ));
        assert!(matches!(
            next_event(&mut rx).await,
            WidgetEvent::MessageAppended { message } if message.sender == Sender::User
        ));
        let ack = next_event(&mut rx).await;
        match ack {
            WidgetEvent::MessageAppended { message } => {
                assert_eq!(message.sender, Sender::Bot);
                assert_eq!(message.body, script::redirect_ack());
            }
            other => panic!("expected the redirect ack, got {other:?}"),
        }

        match next_event(&mut rx).await {
            WidgetEvent::Navigate { url } => assert_eq!(url, "/#pricing"),
            other => panic!("expected a navigation event, got {other:?}"),
        }
        assert_eq!(widget.current_flow().await, Flow::Redirect);
    })
    .await
    .expect("test timed out");
}

// ── Panel state and auto-open ────────────────────────────────────────

#[tokio::test]
async fn opening_the_panel_persists_the_dismissal_flag() {
    timeout(TEST_TIMEOUT, async {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let widget = ChatWidget::mount(test_config(), Arc::clone(&store)).await;

        widget.open().await;

        assert!(widget.is_open().await);
        let flag = store.get(keys::DISMISSED).await.unwrap();
        assert_eq!(flag.as_deref(), Some("true"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn the_events_stream_follows_panel_open_and_close() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut stream = widget.events();

        widget.open().await;
        widget.close().await;

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(
                stream
                    .next()
                    .await
                    .expect("stream ended")
                    .expect("stream lagged"),
            );
        }
        assert!(matches!(seen[0], WidgetEvent::PanelOpened));
        assert!(matches!(seen[1], WidgetEvent::NotificationCleared));
        assert!(matches!(seen[2], WidgetEvent::PanelClosed));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn auto_open_greets_a_fresh_visitor() {
    timeout(TEST_TIMEOUT, async {
        let widget = mount_widget().await;
        let mut rx = widget.subscribe();

        let _timer = spawn_auto_open(Arc::clone(&widget));

        loop {
            if matches!(next_event(&mut rx).await, WidgetEvent::PanelOpened) {
                break;
            }
        }
        let greeting = next_bot_message(&mut rx).await;
        assert_eq!(greeting.body, script::auto_open_greeting());
        assert!(widget.is_open().await);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn auto_open_skips_visitors_who_dismissed_before() {
    timeout(TEST_TIMEOUT, async {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());

        // First visit: the visitor opens (and thereby dismisses) the nudge.
        let first = ChatWidget::mount(test_config(), Arc::clone(&store)).await;
        first.open().await;

        // Second visit over the same store: the timer fires but stays quiet.
        let second = ChatWidget::mount(test_config(), store).await;
        let _timer = spawn_auto_open(Arc::clone(&second));
        sleep(Duration::from_millis(120)).await;

        assert!(!second.is_open().await);
        // Only the seeded welcome message, no greeting.
        assert_eq!(second.log().messages().await.len(), 1);
    })
    .await
    .expect("test timed out");
}
