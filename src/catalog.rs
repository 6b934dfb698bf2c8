//! Tier catalog and eligibility rules.
//!
//! The catalog is an ordered, read-only list of tiers. Position in that list
//! is the only ranking signal: upgrades move strictly forward, whatever the
//! point thresholds say. Every query here is pure; the member account is
//! always passed in explicitly.

use std::collections::HashSet;
use thiserror::Error;

use crate::model::{Tier, UserAccount};
use crate::{Points, seed};

/// Reasons a tier list cannot form a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("tier catalog is empty")]
    Empty,
    #[error("duplicate tier id '{0}'")]
    DuplicateId(String),
    #[error("tier '{id}' requires {required} points, not more than '{previous}' ({previous_required})")]
    NotAscending {
        id: String,
        required: Points,
        previous: String,
        previous_required: Points,
    },
}

/// Reasons an upgrade is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("unknown tier '{0}'")]
    UnknownTier(String),
    #[error("tier '{target}' is not above current tier '{current}'")]
    NotForward { target: String, current: String },
    #[error("tier '{target}' requires {required} points, member has {available}")]
    InsufficientPoints {
        target: String,
        required: Points,
        available: Points,
    },
}

/// How a tier relates to the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierState {
    /// The tier recorded on the account.
    Current,
    /// Threshold met.
    Unlocked,
    /// Threshold not met yet.
    Locked,
}

impl TierState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierState::Current => "current",
            TierState::Unlocked => "unlocked",
            TierState::Locked => "locked",
        }
    }
}

/// One row of the tier board shown to a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierStatus<'a> {
    pub tier: &'a Tier,
    pub state: TierState,
    pub can_upgrade: bool,
    /// Points still missing to reach this tier's threshold.
    pub points_to_go: Points,
    /// Whole percentage, 0..=100.
    pub progress: u8,
}

/// Ordered tier catalog.
#[derive(Debug, Clone)]
pub struct TierCatalog {
    tiers: Vec<Tier>,
}

impl TierCatalog {
    /// Build a catalog, checking ids are unique and thresholds strictly ascending.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(tiers.len());
        for tier in &tiers {
            if !seen.insert(tier.id.as_str()) {
                return Err(CatalogError::DuplicateId(tier.id.clone()));
            }
        }

        for pair in tiers.windows(2) {
            let (previous, tier) = (&pair[0], &pair[1]);
            if tier.required_points <= previous.required_points {
                return Err(CatalogError::NotAscending {
                    id: tier.id.clone(),
                    required: tier.required_points,
                    previous: previous.id.clone(),
                    previous_required: previous.required_points,
                });
            }
        }

        Ok(Self { tiers })
    }

    /// The five-tier membership ladder (General, Silver, Gold, Diamond, Platinum).
    pub fn standard() -> Self {
        Self {
            tiers: seed::standard_tiers(),
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn find_tier_by_id(&self, tier_id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.id == tier_id)
    }

    /// Catalog position of a tier.
    ///
    /// `None` orders below every `Some`, so an unknown tier ranks beneath the
    /// whole catalog when positions are compared.
    pub fn position(&self, tier_id: &str) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.id == tier_id)
    }

    /// The tier right after `current_tier_id`, if any.
    pub fn next_tier(&self, current_tier_id: &str) -> Option<&Tier> {
        let index = self.position(current_tier_id)?;
        self.tiers.get(index + 1)
    }

    /// Whether a member at `current_tier_id` holding `user_points` may move to
    /// `target_tier_id`. An unknown current tier lets any known target through
    /// on points alone.
    pub fn can_upgrade_to_tier(
        &self,
        user_points: Points,
        current_tier_id: &str,
        target_tier_id: &str,
    ) -> bool {
        let Some(target_index) = self.position(target_tier_id) else {
            return false;
        };
        let target = &self.tiers[target_index];

        user_points >= target.required_points
            && Some(target_index) > self.position(current_tier_id)
    }

    pub fn points_to_next_tier(&self, current_tier_id: &str, current_points: Points) -> Points {
        self.next_tier(current_tier_id)
            .map(|next| next.required_points.saturating_sub(current_points))
            .unwrap_or(Points::ZERO)
    }

    /// Highest tier whose threshold `points` meets.
    pub fn eligible_tier(&self, points: Points) -> Option<&Tier> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| points >= tier.required_points)
    }

    /// Move `account` to `target_tier_id`, returning the upgraded account.
    ///
    /// Accepts exactly what [`can_upgrade_to_tier`](Self::can_upgrade_to_tier)
    /// accepts. Points are not consumed.
    pub fn upgrade(
        &self,
        account: &UserAccount,
        target_tier_id: &str,
    ) -> Result<UserAccount, UpgradeError> {
        let target_index = self
            .position(target_tier_id)
            .ok_or_else(|| UpgradeError::UnknownTier(target_tier_id.to_string()))?;
        let target = &self.tiers[target_index];

        if Some(target_index) <= self.position(&account.tier) {
            return Err(UpgradeError::NotForward {
                target: target.id.clone(),
                current: account.tier.clone(),
            });
        }

        if account.points < target.required_points {
            return Err(UpgradeError::InsufficientPoints {
                target: target.id.clone(),
                required: target.required_points,
                available: account.points,
            });
        }

        Ok(UserAccount {
            tier: target.id.clone(),
            ..account.clone()
        })
    }

    /// Status of every tier for `account`, in catalog order.
    pub fn board(&self, account: &UserAccount) -> Vec<TierStatus<'_>> {
        let current_index = self.position(&account.tier);

        self.tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| {
                let is_current = Some(index) == current_index;
                let state = if is_current {
                    TierState::Current
                } else if account.points < tier.required_points {
                    TierState::Locked
                } else {
                    TierState::Unlocked
                };

                let progress = if is_current {
                    match self.tiers.get(index + 1) {
                        Some(next) => {
                            let span = next.required_points.saturating_sub(tier.required_points);
                            account
                                .points
                                .saturating_sub(tier.required_points)
                                .percent_of(span)
                        }
                        None => 100,
                    }
                } else {
                    account.points.percent_of(tier.required_points)
                };

                TierStatus {
                    tier,
                    state,
                    can_upgrade: self.can_upgrade_to_tier(account.points, &account.tier, &tier.id),
                    points_to_go: tier.required_points.saturating_sub(account.points),
                    progress,
                }
            })
            .collect()
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
