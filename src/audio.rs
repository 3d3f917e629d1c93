//! Sound cue playback
//!
//! The simulation only names cues. An `AudioSink` turns them into sound, or
//! silently drops them. Playback is fire-and-forget: nothing here returns an
//! error to the game loop.

pub use crate::sim::SoundCue;

/// Destination for sound cues
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;
    /// Overall cue volume (0.0 - 1.0), independent of mute
    fn set_volume(&mut self, _volume: f32) {}
}

/// Sink that plays nothing (native builds, tests, audio unavailable)
#[derive(Debug, Default)]
pub struct NullAudio {
    muted: bool,
}

impl AudioSink for NullAudio {
    fn play(&mut self, cue: SoundCue) {
        log::trace!("Sound cue {} (no audio output)", cue.name());
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Procedural tones over the Web Audio API
#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundCue};

    /// Web Audio sink. The context is only created by `init`, which must run
    /// inside a user gesture; cues before that are dropped.
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        /// Full volume, unmuted; the game loop pushes the player's settings
        pub fn new() -> Self {
            Self {
                ctx: None,
                volume: 1.0,
                muted: false,
            }
        }

        /// Create (or resume) the audio context
        pub fn init(&mut self) {
            match &self.ctx {
                Some(ctx) => {
                    if ctx.state() == AudioContextState::Suspended {
                        let _ = ctx.resume();
                    }
                }
                None => match AudioContext::new() {
                    Ok(ctx) => {
                        log::info!("Audio initialized");
                        self.ctx = Some(ctx);
                    }
                    Err(e) => log::warn!("Failed to create AudioContext - audio disabled: {e:?}"),
                },
            }
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.volume }
        }

        /// Create an oscillator routed through its own gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// One enveloped tone sweeping from `from` to `to` Hz
        fn sweep(
            ctx: &AudioContext,
            osc_type: OscillatorType,
            from: f32,
            to: f32,
            level: f32,
            start: f64,
            duration: f64,
        ) {
            let Some((osc, gain)) = Self::create_osc(ctx, from, osc_type) else {
                return;
            };
            gain.gain().set_value_at_time(level, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + duration)
                .ok();
            osc.frequency().set_value_at_time(from, start).ok();
            if (to - from).abs() > f32::EPSILON {
                osc.frequency()
                    .exponential_ramp_to_value_at_time(to, start + duration)
                    .ok();
            }
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + duration + 0.05).ok();
        }

        /// Paddle hit / launch - solid thump
        fn play_hit(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            Self::sweep(ctx, OscillatorType::Sine, 150.0, 60.0, vol * 0.6, t, 0.1);
        }

        /// Brick hit - crack with a bass tail
        fn play_break(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            Self::sweep(ctx, OscillatorType::Square, 900.0, 300.0, vol * 0.2, t, 0.08);
            Self::sweep(ctx, OscillatorType::Sine, 90.0, 50.0, vol * 0.3, t, 0.12);
        }

        /// Ball lost - falling tone
        fn play_lose(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            Self::sweep(ctx, OscillatorType::Sawtooth, 400.0, 60.0, vol * 0.4, t, 0.6);
        }

        /// Purchase - rising two-note chime
        fn play_purchase(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            Self::sweep(ctx, OscillatorType::Triangle, 660.0, 660.0, vol * 0.35, t, 0.12);
            Self::sweep(ctx, OscillatorType::Triangle, 990.0, 990.0, vol * 0.35, t + 0.1, 0.18);
        }

        /// Missile launch or impact - boom
        fn play_missile(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            Self::sweep(ctx, OscillatorType::Sawtooth, 100.0, 30.0, vol * 0.5, t, 0.4);
            Self::sweep(ctx, OscillatorType::Square, 1500.0, 1500.0, vol * 0.2, t, 0.1);
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: SoundCue) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend contexts created outside a gesture
            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                SoundCue::Hit => Self::play_hit(ctx, vol),
                SoundCue::Break => Self::play_break(ctx, vol),
                SoundCue::Lose => Self::play_lose(ctx, vol),
                SoundCue::Purchase => Self::play_purchase(ctx, vol),
                SoundCue::Missile => Self::play_missile(ctx, vol),
            }
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn is_muted(&self) -> bool {
            self.muted
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_audio_mute_flag() {
        let mut audio = NullAudio::default();
        assert!(!audio.is_muted());
        audio.play(SoundCue::Break);
        audio.set_muted(true);
        assert!(audio.is_muted());
    }
}
