//! Terminal frontend — stdin/stdout shell around a mounted widget, for local
//! testing. Type a number to press a quick reply, or free text to chat.

use std::sync::Arc;

use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::warn;

use crate::dialogue::QuickReply;
use crate::error::{FrontendError, Result};
use crate::widget::{ChatWidget, Message, Sender, WidgetEvent};

/// Mirrors one widget onto the terminal and drives it from stdin.
pub struct TerminalFrontend {
    widget: Arc<ChatWidget>,
}

impl TerminalFrontend {
    pub fn new(widget: Arc<ChatWidget>) -> Self {
        Self { widget }
    }

    /// Run until stdin closes or the visitor types `/quit`.
    pub async fn run(self) -> Result<()> {
        let mut events = self.widget.events();

        for message in self.widget.log().messages().await {
            render_message(&message);
        }
        render_tray(&self.widget.log().tray().await);
        eprint!("> ");

        let (tx, mut lines_rx) = tokio::sync::mpsc::unbounded_channel();
        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        break;
                    }
                }
            }
        });

        loop {
            tokio::select! {
                event = events.next() => {
                    match event {
                        Some(Ok(event)) => self.on_event(event).await,
                        Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                            warn!(skipped, "event feed lagged");
                        }
                        None => break,
                    }
                }
                line = lines_rx.recv() => {
                    match line {
                        Some(Ok(line)) => {
                            if !self.handle_line(&line).await {
                                break;
                            }
                        }
                        Some(Err(e)) => return Err(FrontendError::Io(e).into()),
                        None => break, // stdin closed
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns false when the visitor asked to quit.
    async fn handle_line(&self, line: &str) -> bool {
        let line = line.trim();
        match line {
            "" => {
                eprint!("> ");
            }
            "/quit" | "/q" => return false,
            "/open" => self.widget.open().await,
            "/close" => self.widget.close().await,
            "/toggle" => self.widget.toggle().await,
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    let tray = self.widget.log().tray().await;
                    match index.checked_sub(1).and_then(|i| tray.get(i)) {
                        Some(reply) => {
                            let action = reply.action.clone();
                            self.widget.handle_action(action).await;
                        }
                        None => {
                            eprintln!("ℹ️  No quick reply #{index}");
                            eprint!("> ");
                        }
                    }
                    return true;
                }
                self.widget.send_message(line).await;
            }
        }
        true
    }

    async fn on_event(&self, event: WidgetEvent) {
        match event {
            WidgetEvent::MessageAppended { message } => {
                render_message(&message);
                // The prompt comes back once the bot has finished its turn
                if message.sender == Sender::Bot {
                    render_tray(&self.widget.log().tray().await);
                    eprint!("> ");
                }
            }
            WidgetEvent::TypingStarted => eprintln!("⏳ typing..."),
            WidgetEvent::PanelOpened => eprintln!("ℹ️  Chat panel opened"),
            WidgetEvent::PanelClosed => eprintln!("ℹ️  Chat panel closed"),
            WidgetEvent::Navigate { url } => eprintln!("🔗 Opening {url} in a new tab"),
            _ => {}
        }
    }
}

fn render_message(message: &Message) {
    match message.sender {
        Sender::Bot => println!("\n🤖 {}\n", message.body),
        Sender::User => eprintln!("🧑 {}", message.body),
    }
}

fn render_tray(tray: &[QuickReply]) {
    if tray.is_empty() {
        return;
    }
    eprintln!();
    for (i, reply) in tray.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, reply.label);
    }
}
