//! Player commands
//!
//! Device listeners translate raw input into `Command`s; this is where the
//! commands are checked against the current phase and applied.

use super::collision::Projectile;
use super::paddle::MoveDir;
use super::state::{GamePhase, GameState, SoundCue};
use crate::shop;

/// A single player intent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Absolute pointer x in playfield coordinates
    PointerMove(f32),
    MoveLeft,
    MoveRight,
    /// Key released
    Stop(MoveDir),
    Launch,
    FireMissile,
    TogglePause,
    OpenShop,
    CloseShop,
    /// Buy the catalog entry at this index
    Purchase(usize),
    StartGame,
    ExitToMenu,
}

/// Apply a command. Returns true if it changed anything.
pub fn apply_command(state: &mut GameState, command: Command, now_ms: f64) -> bool {
    match command {
        Command::TogglePause => {
            if matches!(state.phase, GamePhase::Playing | GamePhase::Paused) {
                state.toggle_pause();
                return true;
            }
            false
        }
        Command::CloseShop => {
            let was_shopping = state.phase == GamePhase::Shop;
            state.close_shop();
            was_shopping
        }
        Command::Purchase(index) => {
            if state.phase != GamePhase::Shop {
                return false;
            }
            shop::CATALOG
                .get(index)
                .is_some_and(|upgrade| shop::purchase(state, upgrade))
        }
        Command::StartGame => {
            if matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
                state.start_game();
                return true;
            }
            false
        }
        Command::ExitToMenu => {
            if state.phase == GamePhase::Menu {
                return false;
            }
            state.reset_to_menu();
            true
        }
        _ if !state.is_playing() => false,
        Command::PointerMove(x) => {
            state.paddle.set_position(x);
            true
        }
        Command::MoveLeft => {
            state.paddle.move_left();
            true
        }
        Command::MoveRight => {
            state.paddle.move_right();
            true
        }
        Command::Stop(dir) => {
            state.paddle.stop_if_moving(dir);
            true
        }
        Command::Launch => {
            let launched = state.ball.launch();
            if launched {
                state.play(SoundCue::Hit);
            }
            launched
        }
        Command::FireMissile => {
            let damage = state.ball.damage();
            let fired = state.paddle.fire_missile(damage, now_ms);
            if fired {
                state.play(SoundCue::Missile);
            }
            fired
        }
        Command::OpenShop => {
            state.open_shop();
            true
        }
    }
}

/// Keyboard binding by `KeyboardEvent.code`
pub fn key_command(code: &str, pressed: bool) -> Option<Command> {
    let command = match (code, pressed) {
        ("ArrowLeft", true) => Command::MoveLeft,
        ("ArrowRight", true) => Command::MoveRight,
        ("ArrowLeft", false) => Command::Stop(MoveDir::Left),
        ("ArrowRight", false) => Command::Stop(MoveDir::Right),
        ("Space", true) => Command::Launch,
        ("KeyE", true) => Command::FireMissile,
        ("KeyP", true) => Command::TogglePause,
        ("KeyB", true) => Command::OpenShop,
        _ => return None,
    };
    Some(command)
}
