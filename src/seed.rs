//! Static catalog data the application ships with.

use crate::Points;
use crate::model::{Privilege, Reward, Tier, UserAccount};

/// Points credited by a daily check-in.
pub const CHECK_IN_BONUS: Points = Points::new(10);

pub const SEED_POINTS: Points = Points::new(98);
pub const SEED_TIER: &str = "general";
pub const SEED_WALLET: &str = "NO.7134788";

/// The demo member everything starts from.
pub fn seed_account() -> UserAccount {
    UserAccount::new(SEED_POINTS, SEED_TIER, SEED_WALLET)
}

pub fn standard_tiers() -> Vec<Tier> {
    vec![
        Tier::new("general", "General", 0).with_privileges(vec![
            Privilege::new("basic-membership", "Basic Membership", "crown"),
            Privilege::new("five-dollar-voucher", "$5 Voucher", "ticket"),
            Privilege::new("seven-day-trial", "7-Day Free Trial", "arrow-right"),
        ]),
        Tier::new("bronze", "Silver", 100).with_privileges(vec![
            Privilege::new("basic-membership", "Basic Membership", "crown"),
            Privilege::new("ten-dollar-voucher", "$10 Voucher", "ticket"),
            Privilege::new("ten-day-trial", "10-Day Free Trial", "arrow-right"),
            Privilege::new("discount-coupon", "$50 Discount Coupon", "badge-dollar-sign"),
            Privilege::new("free-storage", "Free Storage Box", "gift"),
        ]),
        Tier::new("gold", "Gold", 300).with_privileges(vec![
            Privilege::new("premium-membership", "Premium Membership", "crown"),
            Privilege::new("twenty-dollar-voucher", "$20 Voucher", "ticket"),
            Privilege::new("thirty-day-trial", "30-Day Free Trial", "arrow-right"),
            Privilege::new("discount-coupon", "$150 Discount Coupon", "badge-dollar-sign"),
            Privilege::new("free-preview", "Free Preview", "star"),
            Privilege::new("fifty-day-free", "50-Day Free Service", "gift"),
            Privilege::new("silver-benefits", "Silver Benefits", "medal"),
        ]),
        Tier::new("diamond", "Diamond", 500).with_privileges(vec![
            Privilege::new("premium-membership", "Premium Membership", "crown"),
            Privilege::new("fifty-dollar-voucher", "$50 Voucher", "ticket"),
            Privilege::new("sixty-day-trial", "60-Day Free Trial", "arrow-right"),
            Privilege::new("discount-coupon", "$200 Discount Coupon", "badge-dollar-sign"),
            Privilege::new("free-storage", "Free Storage", "gift"),
            Privilege::new("forty-day-free", "40-Day Free Service", "shield-check"),
            Privilege::new("gold-benefits", "Gold Benefits", "medal"),
        ]),
        Tier::new("platinum", "Platinum", 1000).with_privileges(vec![
            Privilege::new("vip-membership", "VIP Membership", "crown"),
            Privilege::new("hundred-dollar-voucher", "$100 Voucher", "ticket"),
            Privilege::new("ninety-day-trial", "90-Day Free Trial", "arrow-right"),
            Privilege::new("discount-coupon", "$300 Discount Coupon", "badge-dollar-sign"),
            Privilege::new("free-storage", "Premium Storage", "gift"),
            Privilege::new("platinum-benefits", "Platinum Benefits", "medal"),
            Privilege::new("concierge", "Concierge Service", "star"),
            Privilege::new("priority-support", "Priority Support", "shield"),
        ]),
    ]
}

pub fn standard_rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: "line-melody".to_string(),
            name: "LINE Melody".to_string(),
            cost: Points::new(430),
            stock: None,
            repeatable: true,
            redirect: Some("https://docs.google.com/forms/d/".to_string()),
        },
        Reward {
            id: "welcome-sticker".to_string(),
            name: "Welcome Sticker".to_string(),
            cost: Points::ZERO,
            stock: None,
            repeatable: false,
            redirect: None,
        },
        Reward {
            id: "gashapon-ticket".to_string(),
            name: "Gashapon Ticket".to_string(),
            cost: Points::new(100),
            stock: Some(3),
            repeatable: true,
            redirect: None,
        },
    ]
}
