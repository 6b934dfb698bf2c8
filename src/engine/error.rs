//! Error types for member actions.

use thiserror::Error;

use crate::Points;
use crate::catalog::UpgradeError;
use crate::model::Day;

/// Top-level error returned by [`Engine::apply`](super::Engine::apply).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("check-in failed: {0}")]
    CheckIn(#[from] CheckInError),

    #[error("upgrade failed: {0}")]
    Upgrade(#[from] UpgradeError),

    #[error("redemption failed: {0}")]
    Redeem(#[from] RedeemError),
}

/// Error during daily check-in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckInError {
    #[error("already checked in on day {last}, cannot check in for day {day}")]
    AlreadyCheckedIn { day: Day, last: Day },
}

/// Error during reward redemption.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedeemError {
    #[error("unknown reward '{0}'")]
    UnknownReward(String),
    #[error("reward '{0}' is out of stock")]
    OutOfStock(String),
    #[error("reward '{0}' can only be redeemed once")]
    AlreadyRedeemed(String),
    #[error("reward '{reward}' costs {cost} points, member has {available}")]
    InsufficientPoints {
        reward: String,
        cost: Points,
        available: Points,
    },
}
