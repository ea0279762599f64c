//! Visitor context — the small record of everything the dialogue learns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the visitor came here to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Sell,
    Rent,
}

/// Resort category of the visitor's timeshare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeshareType {
    Beach,
    Mountain,
    City,
    Tropical,
}

impl TimeshareType {
    /// Full display name used in bot copy.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Beach => "Beach Resort",
            Self::Mountain => "Mountain/Ski Resort",
            Self::City => "City/Urban Property",
            Self::Tropical => "Tropical/Island Resort",
        }
    }
}

/// What a seller cares about most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerGoal {
    /// Sell as fast as possible.
    Quick,
    /// Maximize the sale price.
    Price,
    /// Understand market value first.
    Value,
}

/// How much of the year a renter wants to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalTerm {
    Weeks,
    Year,
    Unsure,
}

/// A value the bot has asked for; the next free-text message satisfies it
/// before keyword routing runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capture {
    Email,
    AskingPrice,
}

/// Everything learned about the visitor during one widget session.
///
/// Fields are written at most once per session in practice; nothing here is
/// validated against anything else, and none of it is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    pub name: Option<String>,
    pub email: Option<String>,
    pub has_timeshare: Option<bool>,
    pub interested_in: Option<Intent>,
    pub price_range: Option<Decimal>,
    pub timeline: Option<String>,
    pub timeshare_type: Option<TimeshareType>,
    pub goal: Option<SellerGoal>,
    pub rental_term: Option<RentalTerm>,
    pub pending_capture: Option<Capture>,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sell => write!(f, "sell"),
            Self::Rent => write!(f, "rent"),
        }
    }
}

impl std::fmt::Display for TimeshareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Beach => "beach",
            Self::Mountain => "mountain",
            Self::City => "city",
            Self::Tropical => "tropical",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for SellerGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Quick => "quick",
            Self::Price => "price",
            Self::Value => "value",
        };
        write!(f, "{s}")
    }
}
