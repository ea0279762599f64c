//! Keyword router for free-text input.
//!
//! Runs after capture interception to map typed messages onto the dialogue
//! tree. First matching rule wins, in a fixed priority order:
//! - price/cost/fee → pricing
//! - sell → sell flow
//! - rent → rent flow
//! - how/work → learn flow
//! - contact/phone/call → contact info
//! - help/support → support
//!
//! If no rule matches, the dispatcher falls through to the generic help menu,
//! so routing can never dead-end.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::dialogue::action::QuickAction;

/// A single keyword rule with a compiled regex.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Human-readable pattern description.
    pub pattern: String,
    /// Compiled regex for matching.
    pub regex: Regex,
    /// Action dispatched when the rule hits.
    pub target: QuickAction,
}

/// Ordered first-match keyword router.
pub struct KeywordRouter {
    rules: Vec<KeywordRule>,
}

impl KeywordRouter {
    /// Router with the standard keyword groups, highest priority first.
    pub fn default_rules() -> Self {
        let rules = vec![
            KeywordRule {
                pattern: "price/cost/fee".into(),
                regex: Regex::new(r"(?i)price|cost|fee").unwrap(),
                target: QuickAction::Pricing,
            },
            KeywordRule {
                pattern: "sell".into(),
                regex: Regex::new(r"(?i)sell").unwrap(),
                target: QuickAction::Sell,
            },
            KeywordRule {
                pattern: "rent".into(),
                regex: Regex::new(r"(?i)rent").unwrap(),
                target: QuickAction::Rent,
            },
            KeywordRule {
                pattern: "how/work".into(),
                regex: Regex::new(r"(?i)how|work").unwrap(),
                target: QuickAction::Learn,
            },
            KeywordRule {
                pattern: "contact/phone/call".into(),
                regex: Regex::new(r"(?i)contact|phone|call").unwrap(),
                target: QuickAction::ContactInfo,
            },
            KeywordRule {
                pattern: "help/support".into(),
                regex: Regex::new(r"(?i)help|support").unwrap(),
                target: QuickAction::Support,
            },
        ];
        Self { rules }
    }

    /// Create an empty router (for testing).
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a custom rule at the lowest priority.
    pub fn add_rule(&mut self, pattern: &str, target: QuickAction) -> Result<(), regex::Error> {
        self.rules.push(KeywordRule {
            pattern: pattern.into(),
            regex: Regex::new(pattern)?,
            target,
        });
        Ok(())
    }

    /// Evaluate a message against all rules in order.
    ///
    /// Returns `Some(action)` on the first hit, `None` when nothing matches
    /// (fall through to the generic help menu).
    pub fn evaluate(&self, text: &str) -> Option<QuickAction> {
        for rule in &self.rules {
            if rule.regex.is_match(text) {
                debug!(rule = %rule.pattern, "message matched keyword rule");
                return Some(rule.target.clone());
            }
        }
        None
    }
}

/// Email address shape for the contact capture.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

/// Dollar amount shape for the asking-price capture.
static MONEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\d[\d,]*(?:\.\d+)?").unwrap());

/// Pull the first email address out of a free-text message.
pub fn parse_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// Pull a positive dollar amount out of a free-text message. Accepts an
/// optional leading `$` and thousands separators.
pub fn parse_money(text: &str) -> Option<Decimal> {
    let raw = MONEY_PATTERN.find(text)?.as_str();
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let amount: Decimal = cleaned.parse().ok()?;
    (amount > Decimal::ZERO).then_some(amount)
}
