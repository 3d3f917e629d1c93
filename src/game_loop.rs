//! Frame pacing and the per-frame driver
//!
//! The host calls `GameLoop::on_animation_frame` from its frame callback. The
//! pacer decides whether enough time has passed for a step; a step clears the
//! frame, advances the simulation (Playing only), routes the queued events,
//! draws everything and commits.

use crate::audio::AudioSink;
use crate::consts::*;
use crate::renderer::RenderSink;
use crate::settings::Settings;
use crate::sim::{Command, GameEvent, GamePhase, GameState, apply_command, tick};

/// A callback this close to the due time still steps
const DUE_TOLERANCE_MS: f64 = 1.0;
/// Host spacing above this many intervals is an overrun
const OVERRUN_RATIO: f64 = 1.2;
/// Host spacing below this many intervals is slack
const SLACK_RATIO: f64 = 0.8;
/// Host spacing within this many of the next target's intervals leaves room for it
const HEADROOM_RATIO: f64 = 1.02;
/// Weight of the newest callback in the smoothed host spacing
const SPACING_SMOOTHING: f64 = 0.1;

/// Step-rate controller
///
/// Starts at `max_fps`. Load is judged on the smoothed spacing between host
/// callbacks, so a step skipped at an interval boundary never counts as an
/// overrun. Spacing above 1.2 intervals lowers the target by one. Spacing
/// below 0.8 intervals, or short enough to fit one more step per second,
/// raises it by one. The target never leaves `[min_fps, max_fps]`.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_fps: u32,
    max_fps: u32,
    target_fps: u32,
    interval_ms: f64,
    last_step: Option<f64>,
    last_callback: Option<f64>,
    /// Smoothed host callback spacing
    host_spacing: Option<f64>,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(MIN_TARGET_FPS, MAX_TARGET_FPS)
    }
}

impl FramePacer {
    /// Bounds are sorted and kept at 1 or above
    pub fn new(min_fps: u32, max_fps: u32) -> Self {
        let lo = min_fps.min(max_fps).max(1);
        let hi = min_fps.max(max_fps).max(1);
        Self {
            min_fps: lo,
            max_fps: hi,
            target_fps: hi,
            interval_ms: 1000.0 / hi as f64,
            last_step: None,
            last_callback: None,
            host_spacing: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let (min, max) = settings.fps_bounds();
        Self::new(min, max)
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min_fps, self.max_fps)
    }

    /// Smoothed spacing of host callbacks, once two have arrived
    pub fn host_spacing_ms(&self) -> Option<f64> {
        self.host_spacing
    }

    /// Forget timing history (after a stop/resume)
    pub fn reset(&mut self) {
        self.last_step = None;
        self.last_callback = None;
        self.host_spacing = None;
    }

    /// Feed one host callback timestamp. Returns true if a step should run now.
    pub fn on_frame(&mut self, timestamp: f64) -> bool {
        let (Some(last_step), Some(last_callback)) = (self.last_step, self.last_callback) else {
            // First callback only establishes the time base
            self.last_step = Some(timestamp);
            self.last_callback = Some(timestamp);
            return false;
        };

        let callback_delta = (timestamp - last_callback).max(0.0);
        self.last_callback = Some(timestamp);
        let spacing = match self.host_spacing {
            Some(avg) => avg + (callback_delta - avg) * SPACING_SMOOTHING,
            None => callback_delta,
        };
        self.host_spacing = Some(spacing);

        let elapsed = timestamp - last_step;
        if elapsed + DUE_TOLERANCE_MS < self.interval_ms {
            return false;
        }

        // Carry the time past the due point into the next interval
        let carry = (elapsed - self.interval_ms).max(0.0) % self.interval_ms;
        self.last_step = Some(timestamp - carry);

        let next_interval = 1000.0 / (self.target_fps + 1) as f64;
        if spacing > self.interval_ms * OVERRUN_RATIO {
            self.set_target(self.target_fps.saturating_sub(1));
        } else if spacing < self.interval_ms * SLACK_RATIO
            || spacing <= next_interval * HEADROOM_RATIO
        {
            self.set_target(self.target_fps + 1);
        }
        true
    }

    fn set_target(&mut self, fps: u32) {
        let fps = fps.clamp(self.min_fps, self.max_fps);
        if fps != self.target_fps {
            log::debug!("Target step rate {} -> {}", self.target_fps, fps);
            self.target_fps = fps;
        }
        self.interval_ms = 1000.0 / self.target_fps as f64;
    }
}

/// Owns a session and drives it one frame at a time
pub struct GameLoop<R: RenderSink, A: AudioSink> {
    pub state: GameState,
    renderer: Option<R>,
    audio: A,
    pacer: FramePacer,
    settings: Settings,
    running: bool,
    /// Lifecycle events kept for the host (HUD, dialogs)
    notices: Vec<GameEvent>,
}

impl<R: RenderSink, A: AudioSink> GameLoop<R, A> {
    /// A stopped loop on the menu with no render sink yet
    pub fn new(settings: Settings, mut audio: A) -> Self {
        audio.set_muted(settings.muted);
        audio.set_volume(settings.effective_volume());
        Self {
            state: GameState::new(settings.rich_mode),
            renderer: None,
            audio,
            pacer: FramePacer::from_settings(&settings),
            settings,
            running: false,
            notices: Vec::new(),
        }
    }

    pub fn attach_renderer(&mut self, renderer: R) {
        self.renderer = Some(renderer);
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn start(&mut self) {
        if !self.running {
            self.pacer.reset();
            self.running = true;
            log::info!("Game loop started");
        }
    }

    /// Stop stepping. The host cancels its pending callback.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Game loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Measured frame rate, if anything is being drawn
    pub fn fps(&self) -> Option<u32> {
        self.renderer.as_ref().map(RenderSink::fps)
    }

    /// Host frame callback. Returns true if a step ran.
    pub fn on_animation_frame(&mut self, timestamp: f64) -> bool {
        if !self.running || self.renderer.is_none() {
            return false;
        }
        if !self.pacer.on_frame(timestamp) {
            return false;
        }
        self.step(timestamp)
    }

    /// Run one frame unconditionally. Without a render sink nothing advances.
    pub fn step(&mut self, now_ms: f64) -> bool {
        let Some(renderer) = self.renderer.as_mut() else {
            return false;
        };

        renderer.clear();
        tick(&mut self.state, now_ms);
        self.dispatch_events();

        let Some(renderer) = self.renderer.as_mut() else {
            return false;
        };
        let state = &self.state;
        renderer.draw_bricks(&state.bricks);
        renderer.draw_paddle(&state.paddle);
        renderer.draw_ball(&state.ball);
        if state.phase == GamePhase::Playing && !state.ball.is_launched() {
            renderer.draw_launch_prompt();
        }
        renderer.commit(now_ms);
        true
    }

    /// Apply a player command and play any cue it produced
    pub fn handle_command(&mut self, command: Command, now_ms: f64) -> bool {
        let changed = apply_command(&mut self.state, command, now_ms);
        self.dispatch_events();
        changed
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.audio.is_muted();
        self.audio.set_muted(muted);
        self.settings.muted = muted;
        self.settings.save();
        muted
    }

    /// Replace and persist settings, pushing them to both sinks.
    /// Changed frame-rate bounds restart the pacer.
    pub fn apply_settings(&mut self, mut settings: Settings) {
        settings.sanitize();
        if settings.fps_bounds() != self.settings.fps_bounds() {
            self.pacer = FramePacer::from_settings(&settings);
        }
        self.audio.set_muted(settings.muted);
        self.audio.set_volume(settings.effective_volume());
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.apply_settings(&settings);
        }
        self.settings = settings;
        self.settings.save();
    }

    /// Lifecycle events since the last call
    pub fn take_notices(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.notices)
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Sound(cue) => self.audio.play(cue),
                GameEvent::Explosion { pos, color, large } => {
                    if let Some(renderer) = self.renderer.as_mut() {
                        renderer.spawn_explosion(pos, color, large);
                    }
                }
                notice => self.notices.push(notice),
            }
        }
    }
}
