//! Canned dialogue content — the plan table, the worked savings math, every
//! bot message, and the quick-reply menus. Copy lives here as data; nothing
//! in this module touches timers, state, or the event stream.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::context::{RentalTerm, SellerGoal, TimeshareType};
use crate::dialogue::action::{QuickAction, QuickReply};

/// Subscription tier. Discriminant order matches [`PLANS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Starter,
    Basic,
    Premium,
    Unlimited,
}

impl PlanTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Unlimited => "Unlimited",
        }
    }
}

/// One row of the subscription table.
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub tier: PlanTier,
    pub monthly_price: Decimal,
    pub most_popular: bool,
    pub features: &'static [&'static str],
}

/// The subscription table, ordered by tier.
pub const PLANS: [Plan; 4] = [
    Plan {
        tier: PlanTier::Starter,
        monthly_price: dec!(7.99),
        most_popular: false,
        features: &[
            "1 property listing",
            "Sale OR rental",
            "6 photos",
            "Basic analytics",
            "Email support",
        ],
    },
    Plan {
        tier: PlanTier::Basic,
        monthly_price: dec!(14.99),
        most_popular: true,
        features: &[
            "2 property listings",
            "Sale AND rental",
            "10 photos",
            "Advanced analytics",
            "Priority support",
        ],
    },
    Plan {
        tier: PlanTier::Premium,
        monthly_price: dec!(24.99),
        most_popular: false,
        features: &[
            "5 property listings",
            "Featured placement",
            "20 photos",
            "Premium analytics",
        ],
    },
    Plan {
        tier: PlanTier::Unlimited,
        monthly_price: dec!(39.99),
        most_popular: false,
        features: &[
            "Unlimited listings",
            "Top placement",
            "30 photos",
            "API access",
        ],
    },
];

/// Commission rate quoted in every broker comparison.
const BROKER_COMMISSION_RATE: Decimal = dec!(0.25);

/// Sale price the worked savings example is built on.
const EXAMPLE_SALE_PRICE: Decimal = dec!(15000);

pub fn plan(tier: PlanTier) -> Plan {
    PLANS[tier as usize]
}

/// Total Basic-plan cost over `months`, rounded to whole dollars the way the
/// marketing copy quotes it.
pub fn subscription_cost(months: u32) -> Decimal {
    (plan(PlanTier::Basic).monthly_price * Decimal::from(months)).round()
}

/// Dollar formatting for bot copy: thousands separators, cents only when the
/// amount has any.
pub fn format_usd(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount.fract().is_zero() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{cents}")
    }
}

fn commission_percent() -> Decimal {
    (BROKER_COMMISSION_RATE * dec!(100)).normalize()
}

fn floor_to_hundred(amount: Decimal) -> Decimal {
    (amount / dec!(100)).floor() * dec!(100)
}

// ---------------------------------------------------------------------------
// Bot copy
// ---------------------------------------------------------------------------

pub fn welcome_message() -> &'static str {
    "👋 Welcome to SelfServe Timeshare! I'm here to help you sell or rent your timeshare commission-free.\n\nWhat brings you here today?"
}

pub fn auto_open_greeting() -> &'static str {
    "👋 Hi! I'm here to help you sell or rent your timeshare commission-free. Have any questions?"
}

pub fn sell_pitch() -> &'static str {
    "Great choice! 🎉 Selling your timeshare commission-free can save you thousands compared to traditional brokers.\n\n\
Here's what makes us different:\n\
• Keep 100% of your sale proceeds\n\
• No commission fees (brokers charge 15-40%)\n\
• Direct buyer contact\n\
• Professional listing tools\n\
• Market insights and pricing guidance\n\n\
What type of timeshare are you looking to sell?"
}

pub fn rent_pitch() -> &'static str {
    "Perfect! 🏖️ Renting your timeshare is a great way to generate income while you decide whether to sell.\n\n\
Benefits of our rental platform:\n\
• Keep 100% of rental income\n\
• No commission or booking fees\n\
• Direct renter communication\n\
• Flexible rental terms\n\
• Multiple year availability\n\n\
Are you looking to rent out specific weeks or the entire year?"
}

pub fn learn_overview() -> String {
    format!(
        "I'd love to explain how SelfServe Timeshare works! 📚\n\n\
**The Problem with Traditional Brokers:**\n\
• Charge 15-40% commission (thousands of dollars!)\n\
• Limited control over your listing\n\
• Slow communication with buyers\n\
• Hidden fees and costs\n\n\
**Our Solution:**\n\
• Simple monthly subscription ({}-{})\n\
• Keep 100% of proceeds\n\
• Direct buyer/renter contact\n\
• Professional tools and support\n\
• Cancel anytime\n\n\
What would you like to know more about?",
        format_usd(plan(PlanTier::Starter).monthly_price),
        format_usd(plan(PlanTier::Unlimited).monthly_price),
    )
}

pub fn pricing_overview() -> String {
    let mut out = String::from("Here are our simple, transparent pricing plans: 💳\n");
    for plan in PLANS {
        let badge = if plan.most_popular {
            " ⭐ Most Popular"
        } else {
            ""
        };
        out.push_str(&format!(
            "\n**{} - {}/month**{badge}\n",
            plan.tier.name(),
            format_usd(plan.monthly_price),
        ));
        for feature in plan.features {
            out.push_str(&format!("• {feature}\n"));
        }
    }
    out.push_str("\nAll plans include our money-back guarantee! Which plan interests you most?");
    out
}

pub fn type_ack(kind: TimeshareType) -> String {
    format!(
        "Excellent! {} timeshares are in high demand.\n\nTo help you get the best results, what's your main goal?",
        kind.display_name(),
    )
}

pub fn goal_advice(goal: SellerGoal) -> String {
    match goal {
        SellerGoal::Quick => format!(
            "Smart strategy! For quick sales, I recommend:\n\n\
• **Competitive pricing** (5-10% below market)\n\
• **High-quality photos** (all angles + amenities)\n\
• **Detailed descriptions** highlighting unique features\n\
• **Quick response** to inquiries (within 2 hours)\n\n\
Our Basic plan ({}/month) gives you everything needed for a fast sale. Ready to get started?",
            format_usd(plan(PlanTier::Basic).monthly_price),
        ),
        SellerGoal::Price => format!(
            "Great approach! To maximize your sale price:\n\n\
• **Market research** using our comparable sales data\n\
• **Professional photos** showcasing your unit's best features\n\
• **Strategic timing** (peak booking seasons)\n\
• **Highlight unique amenities** and location benefits\n\n\
Our Premium plan ({}/month) includes featured placement and advanced analytics to help you get top dollar. Interested?",
            format_usd(plan(PlanTier::Premium).monthly_price),
        ),
        SellerGoal::Value => "Perfect! Understanding your timeshare's value is crucial.\n\n\
Our platform provides:\n\
• **Comparable sales data** for your resort\n\
• **Market trend analysis**\n\
• **Pricing recommendations** based on unit type, season, location\n\
• **Performance tracking** to optimize your listing\n\n\
Would you like me to help you get a free market analysis for your timeshare?"
            .to_string(),
    }
}

pub fn rental_term_ack(term: RentalTerm) -> &'static str {
    match term {
        RentalTerm::Weeks => {
            "Great! Renting out specific weeks gives you the most flexibility. You keep using your timeshare and earn income from the weeks you'd otherwise leave empty.\n\n\
Peak-season weeks at popular resorts often rent within days of listing. Want to see what it costs to list?"
        }
        RentalTerm::Year => {
            "Excellent! Full-year rentals are the easiest way to offset your maintenance fees. One renter, one agreement, steady income.\n\n\
Annual listings also attract snowbirds and long-stay travelers looking for a home base. Want to see what it costs to list?"
        }
        RentalTerm::Unsure => {
            "No problem! Plenty of owners start with a few weeks and expand once the income starts arriving. You can switch between weekly and annual listings anytime.\n\n\
Want to see what it costs to list, or have more questions first?"
        }
    }
}

pub fn savings_example() -> String {
    let price = EXAMPLE_SALE_PRICE;
    let commission = price * BROKER_COMMISSION_RATE;
    let fee = subscription_cost(3);
    let slow_savings = floor_to_hundred(commission - subscription_cost(6));
    format!(
        "Let me show you the savings! 💰\n\n\
**Traditional Broker Example:**\n\
• Timeshare sells for {price}\n\
• Broker commission ({rate}%): -{commission}\n\
• Your net proceeds: {broker_net}\n\n\
**SelfServe Timeshare:**\n\
• Timeshare sells for {price}\n\
• Monthly fee (3 months): -{fee}\n\
• Your net proceeds: {our_net}\n\n\
**You save: {savings}!** 🎉\n\n\
Even if it takes 6 months to sell, you still save over {slow_savings} compared to broker fees.\n\n\
Ready to keep more of your money?",
        price = format_usd(price),
        rate = commission_percent(),
        commission = format_usd(commission),
        broker_net = format_usd(price - commission),
        fee = format_usd(fee),
        our_net = format_usd(price - fee),
        savings = format_usd(commission - fee),
        slow_savings = format_usd(slow_savings),
    )
}

pub fn asking_price_ask() -> &'static str {
    "Happy to run the numbers for you! 📱\n\n\
What asking price do you have in mind for your timeshare? A rough figure is fine, for example $15,000."
}

/// Broker-vs-subscription comparison for the visitor's own asking price. When
/// the price is so low the commission never beats the fee, says so instead of
/// inventing a saving.
pub fn personalized_savings(price: Decimal) -> String {
    let commission = (price * BROKER_COMMISSION_RATE).round_dp(2);
    let fee = subscription_cost(3);
    let savings = commission - fee;
    if savings <= Decimal::ZERO {
        return format!(
            "A traditional broker's {rate}% commission on {price} comes to about {commission}, and three months with us is {fee}. At that price the fees are close to a wash, so double-check your asking price. Most timeshares list for quite a bit more!",
            rate = commission_percent(),
            price = format_usd(price),
            commission = format_usd(commission),
            fee = format_usd(fee),
        );
    }
    format!(
        "Here's your personalized comparison for a {price} sale: 💰\n\n\
**Traditional Broker:**\n\
• Commission ({rate}%): -{commission}\n\
• Your net proceeds: {broker_net}\n\n\
**SelfServe Timeshare:**\n\
• Monthly fee (3 months): -{fee}\n\
• Your net proceeds: {our_net}\n\n\
**You save: {savings}!** 🎉\n\n\
Ready to keep more of your money?",
        price = format_usd(price),
        rate = commission_percent(),
        commission = format_usd(commission),
        broker_net = format_usd(price - commission),
        fee = format_usd(fee),
        our_net = format_usd(price - fee),
        savings = format_usd(savings),
    )
}

pub fn cost_comparison() -> String {
    let price = EXAMPLE_SALE_PRICE;
    format!(
        "Here's how the costs stack up: 💰\n\n\
**Traditional Broker:**\n\
• 15-40% commission, paid at closing\n\
• On a {price} sale that's {low} to {high} gone\n\
• Plus appraisal and marketing add-ons\n\n\
**SelfServe Timeshare:**\n\
• Flat subscription, {starter} to {unlimited} per month\n\
• A full year of Basic costs {year_basic}\n\
• No commission, no closing surprises\n\n\
Want the full worked example?",
        price = format_usd(price),
        low = format_usd(price * dec!(0.15)),
        high = format_usd(price * dec!(0.40)),
        starter = format_usd(plan(PlanTier::Starter).monthly_price),
        unlimited = format_usd(plan(PlanTier::Unlimited).monthly_price),
        year_basic = format_usd(plan(PlanTier::Basic).monthly_price * dec!(12)),
    )
}

pub fn features_overview() -> &'static str {
    "Here's what you get with every SelfServe listing: 🛠️\n\n\
• **Professional listing pages** with up to 30 photos\n\
• **Direct messaging** with buyers and renters\n\
• **Pricing guidance** from comparable sales data\n\
• **Performance analytics** for views and inquiries\n\
• **Flexible rental calendars** for weekly or annual terms\n\n\
Everything is self-serve, so your listing is live in minutes.\n\n\
What would you like to do next?"
}

pub fn success_stories() -> &'static str {
    "Our owners love telling these stories: 📈\n\n\
• Maria listed her Orlando week on a Tuesday and had three inquiries by Friday\n\
• The Hendersons have rented their ski week five seasons running, covering maintenance fees every year\n\
• Dave sold his beach unit for $18,500 and paid no commission at all\n\n\
The common thread: owners keep control and keep the proceeds.\n\n\
Ready to write your own?"
}

pub fn getting_started_overview() -> &'static str {
    "Getting started takes about ten minutes: 🚀\n\n\
1. **Create your account** and pick a plan\n\
2. **Describe your timeshare** with our guided form\n\
3. **Upload photos** straight from your phone\n\
4. **Set your price** with our market guidance\n\
5. **Go live** and start talking to buyers\n\n\
No contracts, cancel anytime.\n\n\
Want to jump in?"
}

pub fn plan_advice() -> String {
    format!(
        "Happy to help you pick! ❓\n\n\
• **Starter ({starter}/month)** if you have one property and want a simple sale or rental listing\n\
• **Basic ({basic}/month)** is our most popular: sale and rental listings with priority support\n\
• **Premium ({premium}/month)** adds featured placement when you want maximum visibility\n\
• **Unlimited ({unlimited}/month)** suits multi-property owners and resellers\n\n\
Most sellers start with Basic and upgrade only if they need more reach.\n\n\
Which way are you leaning?",
        starter = format_usd(plan(PlanTier::Starter).monthly_price),
        basic = format_usd(plan(PlanTier::Basic).monthly_price),
        premium = format_usd(plan(PlanTier::Premium).monthly_price),
        unlimited = format_usd(plan(PlanTier::Unlimited).monthly_price),
    )
}

pub fn market_analysis_offer() -> &'static str {
    "Great idea! 📊 A free market analysis shows you:\n\n\
• Recent sale prices for units at your resort\n\
• Current asking prices from comparable listings\n\
• Seasonal demand trends for your area\n\
• A suggested listing range\n\n\
Want it delivered to your inbox?"
}

pub fn expert_contact_offer() -> &'static str {
    "You'd be in great hands! 💬 Our timeshare specialists have helped thousands of owners sell and rent direct.\n\n\
A consultation covers:\n\
• Realistic pricing for your unit and season\n\
• Whether selling or renting fits your goals\n\
• A walkthrough of the platform\n\n\
How should we set that up?"
}

pub fn signup_steps() -> &'static str {
    "Fantastic! 🎉 I'm excited to help you get started.\n\n\
To create your account and begin listing your timeshare:\n\n\
1. **Click \"Get Started\"** on our homepage\n\
2. **Choose your plan** (you can always upgrade later)\n\
3. **Add your timeshare details** (takes 5-10 minutes)\n\
4. **Upload photos** (we'll help you get great shots)\n\
5. **Go live** and start connecting with buyers!\n\n\
You'll also get:\n\
• Welcome email with tips for success\n\
• Access to our seller resources\n\
• Direct support from our team\n\n\
Ready to take the next step?"
}

pub fn redirect_ack() -> &'static str {
    "Perfect! Redirecting you to get started... 🚀"
}

pub fn contact_info() -> &'static str {
    "I'd love to connect you with our team! 📞\n\n\
**Contact Options:**\n\
• **Email:** support@selfservetimeshare.com\n\
• **Phone:** Available with Premium/Unlimited plans\n\
• **Live Chat:** Right here with me!\n\
• **Help Center:** Comprehensive FAQ and guides\n\n\
**Response Times:**\n\
• Chat: Instant (that's me!)\n\
• Email: Within 4 hours\n\
• Phone: Same day callback\n\n\
What's the best way for our team to reach you?"
}

pub fn email_ask() -> &'static str {
    "Perfect! I'll make sure our team reaches out to you. 📧\n\n\
Please provide your email address and I'll have a specialist contact you within 4 hours with:\n\
• Personalized recommendations for your situation\n\
• Detailed platform walkthrough\n\
• Answers to any specific questions\n\
• Special getting-started bonus\n\n\
What's your email address?"
}

pub fn email_confirmed(email: &str) -> String {
    format!(
        "Got it! ✅ A specialist will email {email} within 4 hours.\n\n\
Keep an eye out for:\n\
• Personalized recommendations for your situation\n\
• A detailed platform walkthrough\n\
• Your getting-started bonus\n\n\
Anything else I can help with in the meantime?"
    )
}

pub fn phone_ack() -> &'static str {
    "You got it! 📞 Phone consultations come with our Premium and Unlimited plans, and our team returns every request the same day.\n\n\
In the meantime I can answer most questions right here, or have a specialist email you the details instead.\n\n\
What works best?"
}

pub fn support_overview() -> &'static str {
    "Happy to help! 🛟\n\n\
**Quick answers:**\n\
• **Listings** go live as soon as you publish them\n\
• **Billing** is monthly, cancel anytime from your account page\n\
• **Photos** upload straight from your phone or computer\n\
• **Buyers** contact you directly, we never sit in the middle\n\n\
Our Help Center covers everything else, or I can point you to the team.\n\n\
What do you need help with?"
}

pub fn more_questions() -> &'static str {
    "Ask away! 😊 I can walk you through selling, renting, pricing, or anything about how the platform works.\n\n\
You can type a question or pick a topic:"
}

pub fn keep_chatting() -> &'static str {
    "Sounds good! 💬 I'm here as long as you need.\n\nWhat else can I help you with?"
}

pub fn fallback_help() -> &'static str {
    "I'd be happy to help you with that! 😊\n\nHere are some things I can assist you with:"
}

// ---------------------------------------------------------------------------
// Quick-reply menus. Each is the complete tray for one bot message; trays
// replace each other wholesale.
// ---------------------------------------------------------------------------

pub fn welcome_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::Sell),
        QuickReply::of(QuickAction::Rent),
        QuickReply::of(QuickAction::Learn),
        QuickReply::of(QuickAction::Pricing),
    ]
}

pub fn timeshare_type_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::ChooseType {
            kind: TimeshareType::Beach,
        }),
        QuickReply::of(QuickAction::ChooseType {
            kind: TimeshareType::Mountain,
        }),
        QuickReply::of(QuickAction::ChooseType {
            kind: TimeshareType::City,
        }),
        QuickReply::of(QuickAction::ChooseType {
            kind: TimeshareType::Tropical,
        }),
    ]
}

pub fn rental_term_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::ChooseTerm {
            term: RentalTerm::Weeks,
        }),
        QuickReply::of(QuickAction::ChooseTerm {
            term: RentalTerm::Year,
        }),
        QuickReply::of(QuickAction::ChooseTerm {
            term: RentalTerm::Unsure,
        }),
    ]
}

pub fn rental_followup_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::Pricing),
        QuickReply::of(QuickAction::Signup { plan: None }),
        QuickReply::of(QuickAction::MoreQuestions),
    ]
}

pub fn learn_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::CostComparison),
        QuickReply::of(QuickAction::Features),
        QuickReply::of(QuickAction::SuccessStories),
        QuickReply::of(QuickAction::GettingStarted),
    ]
}

pub fn pricing_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::Signup {
            plan: Some(PlanTier::Basic),
        }),
        QuickReply::of(QuickAction::Signup {
            plan: Some(PlanTier::Premium),
        }),
        QuickReply::of(QuickAction::SavingsExample),
        QuickReply::of(QuickAction::PlanAdvice),
    ]
}

pub fn goal_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::ChooseGoal {
            goal: SellerGoal::Quick,
        }),
        QuickReply::of(QuickAction::ChooseGoal {
            goal: SellerGoal::Price,
        }),
        QuickReply::of(QuickAction::ChooseGoal {
            goal: SellerGoal::Value,
        }),
        QuickReply::of(QuickAction::Signup { plan: None }),
    ]
}

pub fn goal_followup_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::CreateAccount),
        QuickReply::of(QuickAction::MarketAnalysis),
        QuickReply::of(QuickAction::ExpertContact),
    ]
}

pub fn savings_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::labeled("🚀 Start saving now", QuickAction::Signup {
            plan: Some(PlanTier::Basic),
        }),
        QuickReply::of(QuickAction::PersonalCalculator),
        QuickReply::of(QuickAction::MoreQuestions),
    ]
}

pub fn calculator_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::labeled("🚀 Start saving now", QuickAction::Signup {
            plan: Some(PlanTier::Basic),
        }),
        QuickReply::of(QuickAction::MarketAnalysis),
        QuickReply::of(QuickAction::MoreQuestions),
    ]
}

pub fn cost_comparison_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::SavingsExample),
        QuickReply::of(QuickAction::Signup {
            plan: Some(PlanTier::Basic),
        }),
        QuickReply::of(QuickAction::MoreQuestions),
    ]
}

pub fn features_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::Pricing),
        QuickReply::of(QuickAction::Signup { plan: None }),
        QuickReply::of(QuickAction::SuccessStories),
    ]
}

pub fn stories_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::Signup { plan: None }),
        QuickReply::of(QuickAction::Pricing),
        QuickReply::of(QuickAction::ExpertContact),
    ]
}

pub fn getting_started_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::CreateAccount),
        QuickReply::of(QuickAction::Pricing),
        QuickReply::of(QuickAction::MoreQuestions),
    ]
}

pub fn plan_advice_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::Signup {
            plan: Some(PlanTier::Basic),
        }),
        QuickReply::of(QuickAction::Signup {
            plan: Some(PlanTier::Premium),
        }),
        QuickReply::of(QuickAction::SavingsExample),
    ]
}

pub fn market_analysis_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::labeled("📧 Email me details", QuickAction::EmailContact),
        QuickReply::of(QuickAction::Signup { plan: None }),
        QuickReply::of(QuickAction::KeepChatting),
    ]
}

pub fn expert_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::labeled("📧 Email me details", QuickAction::EmailContact),
        QuickReply::of(QuickAction::PhoneContact),
        QuickReply::of(QuickAction::KeepChatting),
    ]
}

pub fn signup_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::CreateAccount),
        QuickReply::labeled("📞 Call me instead", QuickAction::PhoneContact),
        QuickReply::labeled("📧 Email me details", QuickAction::EmailContact),
    ]
}

pub fn contact_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::EmailContact),
        QuickReply::of(QuickAction::PhoneContact),
        QuickReply::of(QuickAction::KeepChatting),
    ]
}

pub fn email_followup_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::CreateAccount),
        QuickReply::of(QuickAction::KeepChatting),
    ]
}

pub fn phone_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::labeled("📧 Email me details", QuickAction::EmailContact),
        QuickReply::of(QuickAction::CreateAccount),
        QuickReply::of(QuickAction::KeepChatting),
    ]
}

pub fn support_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::of(QuickAction::ContactInfo),
        QuickReply::of(QuickAction::KeepChatting),
        QuickReply::of(QuickAction::Learn),
    ]
}

pub fn fallback_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::labeled("💰 Selling timeshares", QuickAction::Sell),
        QuickReply::labeled("🏖️ Renting timeshares", QuickAction::Rent),
        QuickReply::labeled("💳 Pricing plans", QuickAction::Pricing),
        QuickReply::of(QuickAction::ContactInfo),
    ]
}

pub fn more_questions_menu() -> Vec<QuickReply> {
    fallback_menu()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_are_ordered_by_tier() {
        for tier in [
            PlanTier::Starter,
            PlanTier::Basic,
            PlanTier::Premium,
            PlanTier::Unlimited,
        ] {
            assert_eq!(plan(tier).tier, tier);
        }
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(15000)), "$15,000");
        assert_eq!(format_usd(dec!(7.99)), "$7.99");
        assert_eq!(format_usd(dec!(45)), "$45");
        assert_eq!(format_usd(dec!(1234567.5)), "$1,234,567.50");
        assert_eq!(format_usd(dec!(-3750)), "-$3,750");
        assert_eq!(format_usd(dec!(999)), "$999");
    }

    #[test]
    fn subscription_cost_rounds_to_whole_dollars() {
        assert_eq!(subscription_cost(3), dec!(45));
        assert_eq!(subscription_cost(6), dec!(90));
    }

    #[test]
    fn pricing_overview_lists_every_tier() {
        let copy = pricing_overview();
        assert!(copy.contains("**Starter - $7.99/month**"));
        assert!(copy.contains("**Basic - $14.99/month** ⭐ Most Popular"));
        assert!(copy.contains("**Premium - $24.99/month**"));
        assert!(copy.contains("**Unlimited - $39.99/month**"));
        assert!(copy.contains("money-back guarantee"));
    }

    #[test]
    fn savings_example_matches_worked_numbers() {
        let copy = savings_example();
        assert!(copy.contains("$15,000"));
        assert!(copy.contains("(25%): -$3,750"));
        assert!(copy.contains("$11,250"));
        assert!(copy.contains("(3 months): -$45"));
        assert!(copy.contains("$14,955"));
        assert!(copy.contains("**You save: $3,705!**"));
        assert!(copy.contains("over $3,600"));
    }

    #[test]
    fn personalized_savings_scales_with_price() {
        let copy = personalized_savings(dec!(20000));
        assert!(copy.contains("$20,000"));
        assert!(copy.contains("$19,955"));
        assert!(copy.contains("**You save: $4,955!**"));
    }

    #[test]
    fn personalized_savings_handles_prices_below_the_fee() {
        let copy = personalized_savings(dec!(100));
        assert!(!copy.contains("You save"));
        assert!(copy.contains("$25"));
    }

    #[test]
    fn learn_overview_quotes_subscription_range() {
        assert!(learn_overview().contains("($7.99-$39.99)"));
    }

    #[test]
    fn type_ack_uses_full_display_names() {
        assert!(type_ack(TimeshareType::Beach).contains("Beach Resort timeshares"));
        assert!(type_ack(TimeshareType::Mountain).contains("Mountain/Ski Resort timeshares"));
    }

    #[test]
    fn goal_advice_quotes_plan_prices() {
        assert!(goal_advice(SellerGoal::Quick).contains("Basic plan ($14.99/month)"));
        assert!(goal_advice(SellerGoal::Price).contains("Premium plan ($24.99/month)"));
        assert!(goal_advice(SellerGoal::Value).contains("free market analysis"));
    }

    #[test]
    fn fallback_menu_offers_exactly_four_topics() {
        let menu = fallback_menu();
        assert_eq!(menu.len(), 4);
        let labels: Vec<&str> = menu.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec![
            "💰 Selling timeshares",
            "🏖️ Renting timeshares",
            "💳 Pricing plans",
            "📞 Contact support",
        ]);
    }

    #[test]
    fn goal_followup_offers_account_creation() {
        assert!(
            goal_followup_menu()
                .iter()
                .any(|r| r.action == QuickAction::CreateAccount)
        );
    }

    #[test]
    fn every_menu_replaces_the_tray_with_buttons() {
        for menu in [
            welcome_menu(),
            timeshare_type_menu(),
            rental_term_menu(),
            learn_menu(),
            pricing_menu(),
            goal_menu(),
            goal_followup_menu(),
            savings_menu(),
            signup_menu(),
            contact_menu(),
            fallback_menu(),
        ] {
            assert!(!menu.is_empty());
            assert!(menu.iter().all(|r| !r.label.is_empty()));
        }
    }
}
