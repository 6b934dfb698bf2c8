//! Member action engine.
//!
//! The engine owns one member account and applies check-ins, tier upgrades
//! and reward redemptions to it. Eligibility questions are answered by the
//! [`TierCatalog`]. Also supports an async stream of actions, each one
//! delayed by a simulated backend latency.

use std::time::Duration;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::catalog::{TierCatalog, TierStatus, UpgradeError};
use crate::config::Config;
use crate::model::{Action, Day, Reward, UserAccount};
use crate::{Points, seed};

mod state;
pub use state::RewardBook;

mod error;
pub use error::{CheckInError, EngineError, RedeemError};

/// The member action engine.
pub struct Engine {
    catalog: TierCatalog,
    rewards: RewardBook,
    account: UserAccount,
    /// Simulated round trip to the rewards backend, paid before each action in `run`
    latency: Duration,
}

/// Public API
impl Engine {
    pub fn new(catalog: TierCatalog, rewards: Vec<Reward>, account: UserAccount) -> Self {
        if catalog.find_tier_by_id(&account.tier).is_none() {
            warn!(tier = %account.tier, "account tier is not in the catalog");
        }

        Self {
            catalog,
            rewards: RewardBook::new(rewards),
            account,
            latency: Duration::ZERO,
        }
    }

    /// Standard catalog and rewards, member seeded from `config`.
    pub fn from_config(config: &Config) -> Self {
        let account = UserAccount::new(config.seed_points, &config.seed_tier, &config.wallet_id);
        Self::new(TierCatalog::standard(), seed::standard_rewards(), account)
            .with_latency(config.latency)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Run the engine with the given action stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Action> + Unpin) {
        while let Some(action) = stream.next().await {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            // a rejected action must not stop the engine
            let _ = self.apply(action);
        }
    }

    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    pub fn rewards(&self) -> &RewardBook {
        &self.rewards
    }

    /// Tier board for the current account.
    pub fn board(&self) -> Vec<TierStatus<'_>> {
        self.catalog.board(&self.account)
    }

    pub fn points_to_next_tier(&self) -> Points {
        self.catalog
            .points_to_next_tier(&self.account.tier, self.account.points)
    }

    /// Apply a single action on top of the current account
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        let result = match &action {
            Action::CheckIn { day } => self.apply_check_in(*day).map_err(EngineError::from),
            Action::Upgrade { tier, .. } => self.apply_upgrade(tier).map_err(EngineError::from),
            Action::Redeem { reward, .. } => self.apply_redeem(reward).map_err(EngineError::from),
        };
        Self::log_result(&action, &result);
        result
    }
}

/// Private API
impl Engine {
    /// Small helper to log `apply` results
    fn log_result(action: &Action, result: &Result<(), EngineError>) {
        let (kind, day) = (action.kind(), action.day());
        match (result, action.target()) {
            (Ok(()), Some(subject)) => info!(day, subject, "{kind} applied"),
            (Ok(()), None) => info!(day, "{kind} applied"),
            (Err(e), Some(subject)) => info!(day, subject, reason = %e, "{kind} skipped"),
            (Err(e), None) => info!(day, reason = %e, "{kind} skipped"),
        }
    }

    /// Apply an `Action::CheckIn`:
    /// - Ensure the member has not checked in on this day (or a later one)
    /// - Credit the check-in bonus
    fn apply_check_in(&mut self, day: Day) -> Result<(), CheckInError> {
        if let Some(last) = self.account.last_check_in.filter(|&last| day <= last) {
            return Err(CheckInError::AlreadyCheckedIn { day, last });
        }

        self.account.points += seed::CHECK_IN_BONUS;
        self.account.last_check_in = Some(day);

        Ok(())
    }

    /// Apply an `Action::Upgrade`: the catalog decides, the engine adopts the
    /// returned account. Points are kept.
    fn apply_upgrade(&mut self, tier: &str) -> Result<(), UpgradeError> {
        self.account = self.catalog.upgrade(&self.account, tier)?;
        Ok(())
    }

    /// Apply an `Action::Redeem`:
    /// - Find the reward
    /// - Check stock, one-time rewards and balance
    /// - Deduct the cost and take one unit of stock
    fn apply_redeem(&mut self, reward_id: &str) -> Result<(), RedeemError> {
        let already_redeemed = self.rewards.has_redeemed(reward_id);

        let reward = self
            .rewards
            .get_mut(reward_id)
            .ok_or_else(|| RedeemError::UnknownReward(reward_id.to_string()))?;

        if reward.stock == Some(0) {
            return Err(RedeemError::OutOfStock(reward.id.clone()));
        }

        if !reward.repeatable && already_redeemed {
            return Err(RedeemError::AlreadyRedeemed(reward.id.clone()));
        }

        let remaining = self.account.points.checked_sub(reward.cost).ok_or_else(|| {
            RedeemError::InsufficientPoints {
                reward: reward.id.clone(),
                cost: reward.cost,
                available: self.account.points,
            }
        })?;

        if let Some(stock) = reward.stock.as_mut() {
            *stock -= 1;
        }
        if let Some(redirect) = &reward.redirect {
            info!(reward = %reward.id, redirect = %redirect, "claim at redirect");
        }

        self.account.points = remaining;
        self.rewards.mark_redeemed(reward_id);

        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(
            TierCatalog::standard(),
            seed::standard_rewards(),
            seed::seed_account(),
        )
    }
}
