use std::fmt;

/// A loyalty point balance or threshold. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Points(u64);

impl Points {
    pub const ZERO: Points = Points(0);

    pub const fn new(value: u64) -> Self {
        Points(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Difference clamped at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Points(self.0.saturating_sub(rhs.0))
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Points)
    }

    /// Share of `whole` covered by `self`, as a whole percentage capped at 100.
    /// A zero `whole` counts as fully covered.
    pub fn percent_of(self, whole: Self) -> u8 {
        if whole.0 == 0 {
            return 100;
        }
        let pct = (self.0 as u128 * 100) / whole.0 as u128;
        pct.min(100) as u8
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Points {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Points::default(), Points::ZERO);
    }

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(Points::new(0).to_string(), "0");
        assert_eq!(Points::new(1500).to_string(), "1500");
    }

    #[test]
    fn add_and_add_assign() {
        let mut p = Points::new(98);
        p += Points::new(10);
        assert_eq!(p, Points::new(108));
        assert_eq!(Points::new(1) + Points::new(2), Points::new(3));
    }

    #[test]
    fn add_saturates_instead_of_overflowing() {
        assert_eq!(Points::new(u64::MAX) + Points::new(1), Points::new(u64::MAX));
    }

    #[test]
    fn saturating_sub_clamps_at_zero() {
        assert_eq!(Points::new(100).saturating_sub(Points::new(98)), Points::new(2));
        assert_eq!(Points::new(98).saturating_sub(Points::new(100)), Points::ZERO);
    }

    #[test]
    fn checked_sub_rejects_underflow() {
        assert_eq!(Points::new(430).checked_sub(Points::new(30)), Some(Points::new(400)));
        assert_eq!(Points::new(30).checked_sub(Points::new(430)), None);
    }

    #[test]
    fn percent_of() {
        assert_eq!(Points::new(98).percent_of(Points::new(100)), 98);
        assert_eq!(Points::new(150).percent_of(Points::new(300)), 50);
        assert_eq!(Points::new(1500).percent_of(Points::new(1000)), 100);
        assert_eq!(Points::new(5).percent_of(Points::ZERO), 100);
    }

    #[test]
    fn ordering() {
        assert!(Points::new(98) < Points::new(100));
        assert!(Points::new(100) >= Points::new(100));
    }
}
