//! Score, lives, money and the combo streak

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Spendable currency. `Unlimited` is the rich-mode sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Money {
    Amount(u64),
    Unlimited,
}

impl Money {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Money::Unlimited)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Money::Amount(amount) => write!(f, "${amount}"),
            Money::Unlimited => write!(f, "$∞"),
        }
    }
}

/// A run of consecutive scoring hits
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    pub count: u32,
    /// Sum of 1 + 2 + ... + count, paid out on reset
    pub earnings: u64,
    pub is_active: bool,
    /// Time (ms) of the last increment
    pub timestamp: f64,
}

/// Progression state mutated by the collision pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Economy {
    pub score: u64,
    pub lives: u32,
    pub money: Money,
    pub combo: Combo,
}

impl Economy {
    pub fn new(rich_mode: bool) -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            money: if rich_mode {
                Money::Unlimited
            } else {
                Money::Amount(0)
            },
            combo: Combo::default(),
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// No-op in rich mode
    pub fn add_money(&mut self, amount: u64) {
        if let Money::Amount(current) = &mut self.money {
            *current = current.saturating_add(amount);
        }
    }

    pub fn can_afford(&self, cost: u64) -> bool {
        match self.money {
            Money::Amount(current) => current >= cost,
            Money::Unlimited => true,
        }
    }

    /// Deduct `cost` if affordable. Rich mode always succeeds without deducting.
    pub fn spend_money(&mut self, cost: u64) -> bool {
        match &mut self.money {
            Money::Amount(current) if *current >= cost => {
                *current -= cost;
                true
            }
            Money::Amount(_) => false,
            Money::Unlimited => true,
        }
    }

    /// Remove one life. Returns true when that was the last one.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn add_life(&mut self) {
        self.lives = self.lives.saturating_add(1);
    }

    /// Money multiplier for the current streak (at least 1)
    pub fn combo_multiplier(&self) -> u64 {
        u64::from(self.combo.count.max(1))
    }

    /// Money earned for a hit dealing `damage` at the current multiplier
    pub fn reward_for_damage(&self, damage: f32) -> u64 {
        Self::reward(damage, self.combo_multiplier())
    }

    /// `ceil(damage)` times `multiplier`
    pub fn reward(damage: f32, multiplier: u64) -> u64 {
        let whole = damage.max(0.0).ceil() as u64;
        whole.saturating_mul(multiplier)
    }

    /// Advance the streak by one hit
    pub fn increment_combo(&mut self, now_ms: f64) {
        let combo = &mut self.combo;
        combo.count += 1;
        combo.earnings += u64::from(combo.count);
        combo.is_active = true;
        combo.timestamp = now_ms;
    }

    /// End the streak, banking its earnings into money
    pub fn reset_combo(&mut self) {
        let earnings = self.combo.earnings;
        if earnings > 0 {
            log::debug!("Combo of {} ended, banking {}", self.combo.count, earnings);
            self.add_money(earnings);
        }
        self.combo = Combo::default();
    }

    /// Whether the combo popup should still be shown
    pub fn combo_display_visible(&self, now_ms: f64) -> bool {
        self.combo.is_active && now_ms - self.combo.timestamp < COMBO_DISPLAY_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let economy = Economy::new(false);
        assert_eq!(economy.lives, 3);
        assert_eq!(economy.money, Money::Amount(0));
        assert_eq!(economy.score, 0);

        let rich = Economy::new(true);
        assert!(rich.money.is_unlimited());
    }

    #[test]
    fn test_combo_progression_and_banking() {
        let mut economy = Economy::new(false);
        for (step, expected) in [(1, 1), (2, 3), (3, 6)] {
            economy.increment_combo(step as f64);
            assert_eq!(economy.combo.count, step);
            assert_eq!(economy.combo.earnings, expected);
        }
        // Incrementing never deposits
        assert_eq!(economy.money, Money::Amount(0));

        economy.reset_combo();
        assert_eq!(economy.money, Money::Amount(6));
        assert_eq!(economy.combo, Combo::default());
    }

    #[test]
    fn test_reward_multiplier() {
        let mut economy = Economy::new(false);
        assert_eq!(economy.reward_for_damage(1.0), 1);
        assert_eq!(economy.reward_for_damage(1.2), 2);
        economy.increment_combo(0.0);
        economy.increment_combo(0.0);
        economy.increment_combo(0.0);
        assert_eq!(economy.combo_multiplier(), 3);
        assert_eq!(economy.reward_for_damage(2.0), 6);
    }

    #[test]
    fn test_spend() {
        let mut economy = Economy::new(false);
        economy.add_money(500);
        assert!(!economy.spend_money(501));
        assert_eq!(economy.money, Money::Amount(500));
        assert!(economy.spend_money(500));
        assert_eq!(economy.money, Money::Amount(0));
    }

    #[test]
    fn test_rich_mode_is_inert() {
        let mut economy = Economy::new(true);
        economy.add_money(100);
        assert!(economy.spend_money(1_000_000));
        economy.increment_combo(0.0);
        economy.reset_combo();
        assert_eq!(economy.money, Money::Unlimited);
    }

    #[test]
    fn test_lives() {
        let mut economy = Economy::new(false);
        assert!(!economy.lose_life());
        assert!(!economy.lose_life());
        assert!(economy.lose_life());
        // Saturates
        assert!(economy.lose_life());
        assert_eq!(economy.lives, 0);
        economy.add_life();
        assert_eq!(economy.lives, 1);
    }

    #[test]
    fn test_combo_display_window() {
        let mut economy = Economy::new(false);
        assert!(!economy.combo_display_visible(0.0));
        economy.increment_combo(1000.0);
        assert!(economy.combo_display_visible(2999.0));
        assert!(!economy.combo_display_visible(3000.0));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::Amount(42).to_string(), "$42");
        assert_eq!(Money::Unlimited.to_string(), "$∞");
    }

    proptest! {
        #[test]
        fn prop_spend_never_negative(
            start in 0u64..10_000,
            costs in proptest::collection::vec(0u64..5_000, 0..20),
        ) {
            let mut economy = Economy::new(false);
            economy.add_money(start);
            let mut expected = start;
            for cost in costs {
                let ok = economy.spend_money(cost);
                prop_assert_eq!(ok, expected >= cost);
                if ok {
                    expected -= cost;
                }
                prop_assert_eq!(economy.money, Money::Amount(expected));
            }
        }
    }
}
