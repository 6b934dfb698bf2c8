//! Core domain types for the membership engine.

use crate::Points;

/// Day ordinal used to limit check-ins to one per day.
pub type Day = u32;

/// A display-only benefit attached to a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Privilege {
    pub id: String,
    pub name: String,
    /// Icon tag, resolved by the presentation layer.
    pub icon: String,
    pub enabled: bool,
}

impl Privilege {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            enabled: true,
        }
    }
}

/// A membership level with its points threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub id: String,
    pub name: String,
    pub required_points: Points,
    pub privileges: Vec<Privilege>,
}

impl Tier {
    pub fn new(id: &str, name: &str, required_points: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            required_points: Points::new(required_points),
            privileges: Vec::new(),
        }
    }

    pub fn with_privileges(mut self, privileges: Vec<Privilege>) -> Self {
        self.privileges = privileges;
        self
    }
}

/// The member's account.
///
/// `tier` is stored independently of `points`: earning points never moves
/// the member to another tier, only an explicit upgrade does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub points: Points,
    pub tier: String,
    pub wallet_id: String,
    pub last_check_in: Option<Day>,
}

impl UserAccount {
    pub fn new(points: Points, tier: &str, wallet_id: &str) -> Self {
        Self {
            points,
            tier: tier.to_string(),
            wallet_id: wallet_id.to_string(),
            last_check_in: None,
        }
    }
}

/// An item of the rewards catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub cost: Points,
    /// Remaining quantity, `None` when unlimited.
    pub stock: Option<u32>,
    /// Whether the same member may redeem it more than once.
    pub repeatable: bool,
    /// Where the member is sent after redeeming (e.g. a claim form).
    pub redirect: Option<String>,
}

/// The possible inputs of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Daily check-in, credits a fixed bonus once per day.
    CheckIn { day: Day },
    /// Move the member forward to `tier`.
    Upgrade { day: Day, tier: String },
    /// Exchange points for a reward.
    Redeem { day: Day, reward: String },
}

impl Action {
    pub fn day(&self) -> Day {
        match self {
            Action::CheckIn { day } | Action::Upgrade { day, .. } | Action::Redeem { day, .. } => {
                *day
            }
        }
    }

    /// Short name, as written in the csv `type` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::CheckIn { .. } => "checkin",
            Action::Upgrade { .. } => "upgrade",
            Action::Redeem { .. } => "redeem",
        }
    }

    /// The tier or reward the action is about.
    pub fn target(&self) -> Option<&str> {
        match self {
            Action::CheckIn { .. } => None,
            Action::Upgrade { tier, .. } => Some(tier.as_str()),
            Action::Redeem { reward, .. } => Some(reward.as_str()),
        }
    }
}
