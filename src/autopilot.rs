//! Demo mode: a bot that plays the game
//!
//! Produces the same `Command`s a player would. Used by the headless native
//! binary and by the web host when demo mode is toggled on.

use crate::consts::*;
use crate::shop::CATALOG;
use crate::sim::{Command, GamePhase, GameState};

/// Shop preferences, best first
const SHOPPING_LIST: &[&str] = &["missile-launcher", "damage-boost", "extra-life"];

/// Purchases per shop visit, so free (rich mode) shopping terminates
const MAX_PURCHASES_PER_VISIT: u32 = 3;

#[derive(Debug, Default, Clone)]
pub struct Autopilot {
    purchases_this_visit: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for the current state, in the order they should be applied
    pub fn commands(&mut self, state: &GameState) -> Vec<Command> {
        if state.phase != GamePhase::Shop {
            self.purchases_this_visit = 0;
        }

        match state.phase {
            GamePhase::Menu => vec![Command::StartGame],
            GamePhase::Shop => vec![self.shop(state)],
            GamePhase::Playing => Self::play(state),
            GamePhase::Paused | GamePhase::GameOver => Vec::new(),
        }
    }

    fn shop(&mut self, state: &GameState) -> Command {
        if self.purchases_this_visit >= MAX_PURCHASES_PER_VISIT {
            return Command::CloseShop;
        }

        let pick = SHOPPING_LIST.iter().find_map(|id| {
            CATALOG.iter().position(|upgrade| {
                upgrade.id == *id
                    && state
                        .economy
                        .can_afford(upgrade.price(state.rich_mode))
            })
        });

        match pick {
            Some(index) => {
                self.purchases_this_visit += 1;
                Command::Purchase(index)
            }
            None => Command::CloseShop,
        }
    }

    fn play(state: &GameState) -> Vec<Command> {
        let mut commands = Vec::with_capacity(3);

        // Track the ball with a slow drift across the paddle face so rallies vary
        let drift = ((state.time_ticks / 90) % 3) as f32 - 1.0;
        let target = state.ball.center().x + drift * PADDLE_WIDTH / 5.0;
        commands.push(Command::PointerMove(target));

        if !state.ball.is_launched() {
            commands.push(Command::Launch);
        } else if state.paddle.stats.has_missile_launcher && state.paddle.stats.missile_ammo > 0 {
            commands.push(Command::FireMissile);
        }

        commands
    }
}
