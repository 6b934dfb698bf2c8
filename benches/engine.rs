use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tier_eng::{Action, Day, Engine, Points, TierCatalog, UserAccount};

const TIER_IDS: [&str; 5] = ["general", "bronze", "gold", "diamond", "platinum"];

/// Generates a member's daily action sequence for benchmarking.
///
/// Pattern per day:
/// 1. Check in
/// 2. Try to upgrade to the next tier (rejected until the points are there)
/// 3. Every tenth day, redeem the repeatable melody reward
pub struct ActionGenerator {
    day: Day,
    days: Day,
    step: u8,
    next_tier: usize,
}

impl ActionGenerator {
    pub fn new(days: Day) -> Self {
        Self {
            day: 1,
            days,
            step: 0,
            next_tier: 1,
        }
    }
}

impl Iterator for ActionGenerator {
    type Item = Action;

    fn next(&mut self) -> Option<Self::Item> {
        while self.day <= self.days {
            let day = self.day;
            let step = self.step;
            self.step += 1;

            let action = match step {
                0 => Some(Action::CheckIn { day }),
                1 => Some(Action::Upgrade {
                    day,
                    tier: TIER_IDS[self.next_tier.min(TIER_IDS.len() - 1)].to_string(),
                }),
                _ => {
                    self.step = 0;
                    self.day += 1;
                    self.next_tier = (day as usize / 20 + 1).min(TIER_IDS.len() - 1);
                    (day % 10 == 0).then(|| Action::Redeem {
                        day,
                        reward: "line-melody".to_string(),
                    })
                }
            };

            if action.is_some() {
                return action;
            }
        }
        None
    }
}

fn bench_eligibility(c: &mut Criterion) {
    let catalog = TierCatalog::standard();
    let mut group = c.benchmark_group("eligibility");

    group.bench_function("can_upgrade_all_pairs", |b| {
        b.iter(|| {
            let mut allowed = 0u32;
            for points in [0u64, 98, 150, 450, 1500] {
                for current in TIER_IDS {
                    for target in TIER_IDS {
                        if catalog.can_upgrade_to_tier(Points::new(points), current, target) {
                            allowed += 1;
                        }
                    }
                }
            }
            black_box(allowed)
        });
    });

    group.bench_function("board", |b| {
        let account = UserAccount::new(Points::new(420), "bronze", "NO.7134788");
        b.iter(|| black_box(catalog.board(black_box(&account))));
    });

    group.finish();
}

fn bench_member_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("actions");

    for days in [365u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                let mut engine = Engine::default();
                for action in ActionGenerator::new(days) {
                    let _ = black_box(engine.apply(action));
                }
                engine
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eligibility, bench_member_actions);
criterion_main!(benches);
