pub mod catalog;
pub mod config;
pub mod csv;
pub mod engine;
pub mod model;
pub mod points;
pub mod seed;

pub use catalog::{TierCatalog, TierState, TierStatus};
pub use config::Config;
pub use engine::Engine;
pub use model::{Action, Day, Privilege, Reward, Tier, UserAccount};
pub use points::Points;
