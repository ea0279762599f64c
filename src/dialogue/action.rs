//! Quick-reply actions — the tagged vocabulary every button dispatches through.

use serde::{Deserialize, Serialize};

use crate::context::{RentalTerm, SellerGoal, TimeshareType};
use crate::dialogue::script::PlanTier;

/// Everything a quick-reply button (or a keyword route) can ask the widget
/// to do. Plain data, so menus are serializable and the dispatcher owns all
/// transition logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum QuickAction {
    /// Start the selling flow.
    Sell,
    /// Start the renting flow.
    Rent,
    /// Explain how the platform works.
    Learn,
    /// Show the subscription plans.
    Pricing,
    /// Record the visitor's resort category.
    ChooseType { kind: TimeshareType },
    /// Record how much of the year they want to rent out.
    ChooseTerm { term: RentalTerm },
    /// Record the seller's main goal.
    ChooseGoal { goal: SellerGoal },
    /// Show the worked broker-vs-subscription savings example.
    SavingsExample,
    /// Run a savings comparison on the visitor's own asking price.
    PersonalCalculator,
    /// Recommend a plan.
    PlanAdvice,
    /// Broker cost breakdown.
    CostComparison,
    /// Platform feature tour.
    Features,
    /// Seller testimonials.
    SuccessStories,
    /// Step-by-step onboarding overview.
    GettingStarted,
    /// Offer a free market analysis.
    MarketAnalysis,
    /// Offer a specialist consultation.
    ExpertContact,
    /// Walk through account setup for an optionally pre-selected plan.
    Signup { plan: Option<PlanTier> },
    /// Confirm and navigate to the signup page.
    CreateAccount,
    /// Offer a callback.
    PhoneContact,
    /// Ask for an email address to follow up on.
    EmailContact,
    /// List the ways to reach the team.
    ContactInfo,
    /// Help-center overview.
    Support,
    /// Return to the open-ended welcome menu.
    KeepChatting,
    /// Invite more questions.
    MoreQuestions,
}

impl QuickAction {
    /// Canonical button label for this action. Menus may override the label
    /// per button; this is the fallback (and the echo text for programmatic
    /// dispatch).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sell => "💰 I want to sell",
            Self::Rent => "🏖️ I want to rent",
            Self::Learn => "📚 Learn more",
            Self::Pricing => "💳 See pricing",
            Self::ChooseType { kind } => match kind {
                TimeshareType::Beach => "🏖️ Beach Resort",
                TimeshareType::Mountain => "🏔️ Mountain/Ski",
                TimeshareType::City => "🏙️ City/Urban",
                TimeshareType::Tropical => "🌴 Tropical/Island",
            },
            Self::ChooseTerm { term } => match term {
                RentalTerm::Weeks => "📅 Specific weeks",
                RentalTerm::Year => "📆 Entire year",
                RentalTerm::Unsure => "🤔 Not sure yet",
            },
            Self::ChooseGoal { goal } => match goal {
                SellerGoal::Quick => "💸 Sell quickly",
                SellerGoal::Price => "💰 Get best price",
                SellerGoal::Value => "📊 See market value",
            },
            Self::SavingsExample => "💰 Compare savings",
            Self::PersonalCalculator => "📱 Calculate my savings",
            Self::PlanAdvice => "❓ Which plan for me?",
            Self::CostComparison => "💰 Cost comparison",
            Self::Features => "🛠️ Platform features",
            Self::SuccessStories => "📈 Success stories",
            Self::GettingStarted => "🚀 Getting started",
            Self::MarketAnalysis => "📊 Free market analysis",
            Self::ExpertContact => "💬 Talk to expert",
            Self::Signup { plan } => match plan {
                Some(PlanTier::Starter) => "🚀 Start with Starter",
                Some(PlanTier::Basic) => "🚀 Start with Basic",
                Some(PlanTier::Premium) => "💎 Try Premium",
                Some(PlanTier::Unlimited) => "🚀 Go Unlimited",
                None => "🚀 Get started now",
            },
            Self::CreateAccount => "🚀 Create account now",
            Self::PhoneContact => "📞 Schedule call",
            Self::EmailContact => "📧 Email me",
            Self::ContactInfo => "📞 Contact support",
            Self::Support => "🛟 Help & support",
            Self::KeepChatting => "💬 Keep chatting",
            Self::MoreQuestions => "❓ More questions",
        }
    }
}

/// One button in the quick-reply tray. The tray is replaced wholesale every
/// time the bot presents a new menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub action: QuickAction,
}

impl QuickReply {
    /// A button with the action's canonical label.
    pub fn of(action: QuickAction) -> Self {
        Self {
            label: action.label().to_string(),
            action,
        }
    }

    /// A button with a menu-specific label.
    pub fn labeled(label: impl Into<String>, action: QuickAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}
