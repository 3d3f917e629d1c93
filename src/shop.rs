//! Upgrade catalog and purchases

use crate::consts::MISSILE_AMMO_PER_UPGRADE;
use crate::sim::{GameState, SoundCue};

/// What an upgrade does once bought
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    ExtraLife,
    /// Multiplies the ball speed multiplier (applies from the next launch or paddle hit)
    SpeedMultiplier(f32),
    /// Added to the ball damage multiplier
    DamageBonus(f32),
    /// Enables the launcher and adds ammo
    MissileLauncher { ammo: u32 },
}

/// A shop entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Upgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub effect: UpgradeEffect,
}

impl Upgrade {
    /// Price actually charged in the current session
    pub fn price(&self, rich_mode: bool) -> u64 {
        if rich_mode { 0 } else { self.cost }
    }
}

pub const CATALOG: &[Upgrade] = &[
    Upgrade {
        id: "extra-life",
        name: "Extra Life",
        description: "Adds one additional life",
        cost: 1000,
        effect: UpgradeEffect::ExtraLife,
    },
    Upgrade {
        id: "slow-ball",
        name: "Slow Ball",
        description: "Reduces ball speed by 25%",
        cost: 500,
        effect: UpgradeEffect::SpeedMultiplier(0.75),
    },
    Upgrade {
        id: "speed-boost",
        name: "Speed Boost",
        description: "Increases ball speed by 15%",
        cost: 100,
        effect: UpgradeEffect::SpeedMultiplier(1.15),
    },
    Upgrade {
        id: "damage-boost",
        name: "Damage Boost",
        description: "Increases ball damage by 1",
        cost: 1000,
        effect: UpgradeEffect::DamageBonus(1.0),
    },
    Upgrade {
        id: "missile-launcher",
        name: "Missile Launcher",
        description: "Adds missile launcher with 3 ammo",
        cost: 2000,
        effect: UpgradeEffect::MissileLauncher {
            ammo: MISSILE_AMMO_PER_UPGRADE,
        },
    },
];

/// Look an upgrade up by id
pub fn find(id: &str) -> Option<&'static Upgrade> {
    CATALOG.iter().find(|upgrade| upgrade.id == id)
}

/// Buy `upgrade` if affordable and apply it
///
/// Returns false (leaving everything untouched) when the player cannot pay.
pub fn purchase(state: &mut GameState, upgrade: &Upgrade) -> bool {
    let price = upgrade.price(state.rich_mode);
    if !state.economy.spend_money(price) {
        log::debug!("Cannot afford {} ({})", upgrade.id, price);
        return false;
    }

    apply_effect(state, upgrade.effect);
    state.play(SoundCue::Purchase);
    log::info!("Purchased {} for {}", upgrade.name, price);
    true
}

fn apply_effect(state: &mut GameState, effect: UpgradeEffect) {
    match effect {
        UpgradeEffect::ExtraLife => state.economy.add_life(),
        UpgradeEffect::SpeedMultiplier(factor) => {
            state.ball.effects.speed_multiplier *= factor;
        }
        UpgradeEffect::DamageBonus(bonus) => {
            state.ball.effects.damage_multiplier += bonus;
        }
        UpgradeEffect::MissileLauncher { ammo } => {
            state.paddle.stats.has_missile_launcher = true;
            state.paddle.add_missile_ammo(ammo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameEvent, Money, Projectile};

    fn shopping_state(money: u64) -> GameState {
        let mut state = GameState::new(false);
        state.start_game();
        state.economy.add_money(money);
        state.open_shop();
        state
    }

    fn upgrade(id: &str) -> &'static Upgrade {
        find(id).expect("catalog entry")
    }

    #[test]
    fn test_catalog_prices() {
        let prices: Vec<_> = CATALOG.iter().map(|u| (u.id, u.cost)).collect();
        assert_eq!(
            prices,
            vec![
                ("extra-life", 1000),
                ("slow-ball", 500),
                ("speed-boost", 100),
                ("damage-boost", 1000),
                ("missile-launcher", 2000),
            ]
        );
    }

    #[test]
    fn test_rejected_when_broke() {
        let mut state = shopping_state(999);
        assert!(!purchase(&mut state, upgrade("extra-life")));
        assert_eq!(state.economy.lives, 3);
        assert_eq!(state.economy.money, Money::Amount(999));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_extra_life() {
        let mut state = shopping_state(1000);
        assert!(purchase(&mut state, upgrade("extra-life")));
        assert_eq!(state.economy.lives, 4);
        assert_eq!(state.economy.money, Money::Amount(0));
        assert_eq!(state.events, vec![GameEvent::Sound(SoundCue::Purchase)]);
    }

    #[test]
    fn test_ball_upgrades_stack() {
        let mut state = shopping_state(1600);
        assert!(purchase(&mut state, upgrade("slow-ball")));
        assert!(purchase(&mut state, upgrade("damage-boost")));
        assert!(purchase(&mut state, upgrade("speed-boost")));
        assert!((state.ball.effects.speed_multiplier - 0.75 * 1.15).abs() < 1e-6);
        assert_eq!(state.ball.damage(), 2.0);
        assert_eq!(state.economy.money, Money::Amount(0));
    }

    #[test]
    fn test_missile_launcher() {
        let mut state = shopping_state(4000);
        assert!(purchase(&mut state, upgrade("missile-launcher")));
        assert!(purchase(&mut state, upgrade("missile-launcher")));
        assert!(state.paddle.stats.has_missile_launcher);
        assert_eq!(state.paddle.stats.missile_ammo, 6);
    }

    #[test]
    fn test_rich_mode_is_free() {
        let mut state = GameState::new(true);
        state.start_game();
        assert!(purchase(&mut state, upgrade("missile-launcher")));
        assert_eq!(state.economy.money, Money::Unlimited);
        assert_eq!(upgrade("extra-life").price(true), 0);
    }
}
