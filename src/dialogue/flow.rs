//! Flow states — where the conversation currently sits in the dialogue tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current node of the scripted conversation. Tracked for diagnostics and so
/// captures know which flow asked the question; transitions themselves are
/// not validated, any action can fire from any state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    #[default]
    Welcome,
    Sell,
    GoalSelect,
    GoalAdvice,
    Rent,
    RentAdvice,
    Learn,
    CostComparison,
    Features,
    SuccessStories,
    GettingStarted,
    Pricing,
    PlanAdvice,
    Savings,
    PersonalCalculator,
    MarketAnalysis,
    ExpertContact,
    MoreQuestions,
    Signup,
    Redirect,
    Contact,
    EmailCapture,
    PhoneContact,
    Support,
    Fallback,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::Sell => "sell",
            Self::GoalSelect => "goal_select",
            Self::GoalAdvice => "goal_advice",
            Self::Rent => "rent",
            Self::RentAdvice => "rent_advice",
            Self::Learn => "learn",
            Self::CostComparison => "cost_comparison",
            Self::Features => "features",
            Self::SuccessStories => "success_stories",
            Self::GettingStarted => "getting_started",
            Self::Pricing => "pricing",
            Self::PlanAdvice => "plan_advice",
            Self::Savings => "savings",
            Self::PersonalCalculator => "personal_calculator",
            Self::MarketAnalysis => "market_analysis",
            Self::ExpertContact => "expert_contact",
            Self::MoreQuestions => "more_questions",
            Self::Signup => "signup",
            Self::Redirect => "redirect",
            Self::Contact => "contact",
            Self::EmailCapture => "email_capture",
            Self::PhoneContact => "phone_contact",
            Self::Support => "support",
            Self::Fallback => "fallback",
        };
        write!(f, "{s}")
    }
}
