use std::collections::{HashMap, HashSet};

use crate::model::Reward;

/// Rewards on offer, with remaining stock and what the member already took.
#[derive(Debug, Default)]
pub struct RewardBook {
    rewards: HashMap<String, Reward>,
    redeemed: HashSet<String>,
}

impl RewardBook {
    pub fn new(rewards: impl IntoIterator<Item = Reward>) -> Self {
        Self {
            rewards: rewards.into_iter().map(|r| (r.id.clone(), r)).collect(),
            redeemed: HashSet::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Reward> {
        self.rewards.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Reward> {
        self.rewards.get_mut(id)
    }

    pub fn has_redeemed(&self, id: &str) -> bool {
        self.redeemed.contains(id)
    }

    pub fn mark_redeemed(&mut self, id: &str) {
        self.redeemed.insert(id.to_string());
    }
}
