//! Game state and core simulation types
//!
//! `GameState` is the single aggregate the loop driver owns. Everything the
//! collision pass mutates lives here, and every side effect it wants performed
//! outside the simulation is queued as a `GameEvent`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::economy::Economy;
use super::paddle::Paddle;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    Menu,
    /// Active gameplay (ball may still be resting on the paddle)
    Playing,
    /// Game is paused
    Paused,
    /// Upgrade shop open between levels or on demand
    Shop,
    /// Run ended
    GameOver,
}

/// Named sound cues the audio sink understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Hit,
    Break,
    Lose,
    Purchase,
    Missile,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Hit => "hit",
            SoundCue::Break => "break",
            SoundCue::Lose => "lose",
            SoundCue::Purchase => "purchase",
            SoundCue::Missile => "missile",
        }
    }
}

/// Side effects requested by the simulation, drained once per step
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Sound(SoundCue),
    Explosion { pos: Vec2, color: u32, large: bool },
    LifeLost,
    /// The level that was just cleared
    LevelCleared { level: u32 },
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    pub economy: Economy,
    /// Unlimited money and free purchases
    pub rich_mode: bool,
    /// Simulation steps taken while playing
    pub time_ticks: u64,
    /// Pending side effects (not persisted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A fresh session sitting on the menu
    pub fn new(rich_mode: bool) -> Self {
        let paddle = Paddle::new();
        let ball = Ball::new(paddle.pos.x, paddle.pos.y);
        Self {
            phase: GamePhase::Menu,
            paddle,
            ball,
            bricks: BrickField::new(),
            economy: Economy::new(rich_mode),
            rich_mode,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Start a new run from level 1
    pub fn start_game(&mut self) {
        self.reset_entities();
        self.bricks.reset();
        self.economy = Economy::new(self.rich_mode);
        self.time_ticks = 0;
        self.events.clear();
        self.phase = GamePhase::Playing;
        log::info!("Game started (rich mode: {})", self.rich_mode);
    }

    /// Abandon the run and go back to the title screen
    pub fn reset_to_menu(&mut self) {
        self.reset_entities();
        self.economy.combo = Default::default();
        self.phase = GamePhase::Menu;
        log::info!("Returned to menu");
    }

    /// Playing <-> Paused; anything else is left alone
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
        log::debug!("Phase now {:?}", self.phase);
    }

    pub fn open_shop(&mut self) {
        self.phase = GamePhase::Shop;
        log::debug!("Shop opened");
    }

    pub fn close_shop(&mut self) {
        if self.phase == GamePhase::Shop {
            self.phase = GamePhase::Playing;
            log::debug!("Shop closed");
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Put the ball back on the paddle
    pub fn reset_ball(&mut self) {
        self.ball.reset(self.paddle.pos.x, self.paddle.pos.y);
    }

    /// Record a terminal loss
    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!(
            "Game over at level {} with score {}",
            self.bricks.level(),
            self.economy.score
        );
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Sound(cue));
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn reset_entities(&mut self) {
        self.paddle.reset();
        self.reset_ball();
    }
}
