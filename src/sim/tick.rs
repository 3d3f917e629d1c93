//! Per-step simulation update and collision resolution
//!
//! One call to `tick` is one simulation step. Nothing moves outside Playing;
//! the renderer keeps drawing the last state while paused or shopping.

use super::collision::{Projectile, hit_fraction};
use super::economy::Economy;
use super::state::{GameEvent, GamePhase, GameState, SoundCue};
use crate::consts::*;

/// Advance the game state by one step
pub fn tick(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    state.paddle.update();

    if state.ball.is_launched() {
        state.ball.update();
        resolve_collisions(state, now_ms);
    } else {
        state.ball.follow_paddle(&state.paddle);
    }
}

/// Resolve every interaction for the current step, in order:
/// walls, paddle, missiles vs bricks, ball vs bricks, miss, level clear.
///
/// Every brick hit in the step pays at the combo multiplier the step started with.
pub fn resolve_collisions(state: &mut GameState, now_ms: f64) {
    let multiplier = state.economy.combo_multiplier();
    bounce_off_walls(state);
    bounce_off_paddle(state);
    resolve_missile_hits(state, multiplier, now_ms);
    resolve_ball_hit(state, multiplier, now_ms);

    if check_miss(state) {
        return;
    }
    check_level_clear(state);
}

fn bounce_off_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    if ball.pos.x <= 0.0 || ball.pos.x >= CANVAS_WIDTH - ball.size.x {
        ball.reverse_x();
    }
    if ball.pos.y <= 0.0 {
        ball.reverse_y();
    }
}

fn bounce_off_paddle(state: &mut GameState) {
    let ball_bounds = state.ball.bounds();
    let paddle_bounds = state.paddle.bounds();
    if !ball_bounds.overlaps(&paddle_bounds) {
        return;
    }

    state
        .ball
        .set_velocity_from_paddle_hit(hit_fraction(&ball_bounds, &paddle_bounds));
    state.play(SoundCue::Hit);
    state.economy.reset_combo();
}

fn resolve_missile_hits(state: &mut GameState, multiplier: u64, now_ms: f64) {
    let ball_damage = state.ball.damage();
    let GameState {
        paddle,
        bricks,
        economy,
        events,
        ..
    } = state;

    for missile in paddle.missiles.iter_mut().filter(|m| !m.destroyed) {
        if !bricks.check_collision(&missile.with_damage(ball_damage), events) {
            continue;
        }

        events.push(GameEvent::Sound(SoundCue::Break));
        economy.add_score(BRICK_HIT_SCORE);
        missile.charge = missile.charge.saturating_sub(1);
        economy.add_money(Economy::reward(ball_damage, multiplier));
        economy.increment_combo(now_ms);

        if missile.charge == 0 {
            events.push(GameEvent::Explosion {
                pos: missile.center(),
                color: MISSILE_EXPLOSION_COLOR,
                large: true,
            });
            events.push(GameEvent::Sound(SoundCue::Missile));
            missile.destroy();
        }
    }

    paddle
        .missiles
        .retain(|m| !m.destroyed && !m.is_out_of_bounds());
}

fn resolve_ball_hit(state: &mut GameState, multiplier: u64, now_ms: f64) {
    if !state.bricks.check_collision(&state.ball, &mut state.events) {
        return;
    }

    state.ball.reverse_y();
    state.economy.add_score(BRICK_HIT_SCORE);
    let reward = Economy::reward(state.ball.damage(), multiplier);
    state.economy.add_money(reward);
    state.economy.increment_combo(now_ms);
    state.play(SoundCue::Break);
}

/// Returns true if the run ended on this miss
fn check_miss(state: &mut GameState) -> bool {
    if state.ball.pos.y < CANVAS_HEIGHT {
        return false;
    }

    let out_of_lives = state.economy.lose_life();
    log::info!("Ball lost, {} lives left", state.economy.lives);
    state.events.push(GameEvent::LifeLost);
    state.play(SoundCue::Lose);
    state.reset_ball();
    state.economy.reset_combo();

    if out_of_lives {
        state.game_over();
        return true;
    }
    false
}

fn check_level_clear(state: &mut GameState) {
    if !state.bricks.is_empty() {
        return;
    }

    let cleared = state.bricks.level();
    log::info!("Level {} cleared", cleared);
    state.economy.add_score(LEVEL_CLEAR_SCORE);
    state.economy.add_money(LEVEL_CLEAR_MONEY);
    state.bricks.next_level();
    state.reset_ball();
    state.events.push(GameEvent::LevelCleared { level: cleared });
    state.open_shop();
    state.economy.reset_combo();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bricks::Brick;
    use crate::sim::economy::Money;
    use crate::sim::paddle::Missile;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(false);
        state.start_game();
        state
    }

    fn sounds(events: &[GameEvent]) -> Vec<SoundCue> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Sound(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Replace the field with a single brick at `pos`
    fn single_brick(state: &mut GameState, pos: Vec2, strength: f32) {
        let bricks = state.bricks.bricks_mut();
        bricks.clear();
        bricks.push(Brick::new(pos.x, pos.y, 0x4ECDC4, strength));
    }

    #[test]
    fn test_tick_only_while_playing() {
        let mut state = GameState::new(false);
        state.paddle.move_left();
        tick(&mut state, 0.0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.paddle.pos.x, 350.0);

        state.start_game();
        state.toggle_pause();
        state.paddle.move_left();
        tick(&mut state, 0.0);
        assert_eq!(state.paddle.pos.x, 350.0);
    }

    #[test]
    fn test_resting_ball_follows_paddle() {
        let mut state = playing_state();
        state.paddle.move_right();
        tick(&mut state, 0.0);
        assert_eq!(state.paddle.pos.x, 358.0);
        assert_eq!(state.ball.center().x, state.paddle.pos.x + 50.0);
        assert!(!state.ball.is_launched());
    }

    #[test]
    fn test_wall_bounce() {
        let mut state = playing_state();
        state.ball.vel = Vec2::new(-7.0, -7.0);
        state.ball.pos = Vec2::new(3.0, 300.0);
        tick(&mut state, 0.0);
        assert_eq!(state.ball.vel.x, 7.0);

        state.ball.pos = Vec2::new(400.0, 5.0);
        tick(&mut state, 0.0);
        assert_eq!(state.ball.vel.y, 7.0);
    }

    #[test]
    fn test_paddle_bounce_banks_combo() {
        let mut state = playing_state();
        for _ in 0..3 {
            state.economy.increment_combo(0.0);
        }
        // Ball dropping onto the paddle center
        state.ball.pos = Vec2::new(392.0, 530.0);
        state.ball.vel = Vec2::new(0.0, 7.0);
        tick(&mut state, 0.0);

        assert_eq!(state.ball.vel, Vec2::new(0.0, -7.0));
        assert_eq!(state.economy.money, Money::Amount(6));
        assert_eq!(state.economy.combo.count, 0);
        assert_eq!(sounds(&state.events), vec![SoundCue::Hit]);
    }

    #[test]
    fn test_ball_brick_hit() {
        let mut state = playing_state();
        single_brick(&mut state, Vec2::new(300.0, 200.0), 5.0);
        state.bricks.bricks_mut().push(Brick::new(35.0, 50.0, 0xFF6B6B, 7.0));
        state.ball.pos = Vec2::new(320.0, 230.0);
        state.ball.vel = Vec2::new(0.0, -7.0);
        tick(&mut state, 100.0);

        assert_eq!(state.bricks.bricks()[0].strength, 4.0);
        assert_eq!(state.ball.vel.y, 7.0);
        assert_eq!(state.economy.score, 100);
        assert_eq!(state.economy.money, Money::Amount(1));
        assert_eq!(state.economy.combo.count, 1);
        assert_eq!(state.economy.combo.timestamp, 100.0);
        assert_eq!(sounds(&state.events), vec![SoundCue::Break]);
    }

    #[test]
    fn test_missile_hit_uses_ball_damage() {
        let mut state = playing_state();
        single_brick(&mut state, Vec2::new(300.0, 200.0), 5.0);
        state.bricks.bricks_mut().push(Brick::new(35.0, 50.0, 0xFF6B6B, 7.0));
        state.ball.effects.damage_multiplier = 2.0;
        state.ball.pos = Vec2::new(600.0, 400.0);
        state.ball.vel = Vec2::new(1.0, 1.0);

        state.paddle.stats.has_missile_launcher = true;
        state.paddle.add_missile_ammo(1);
        state.paddle.pos.x = 286.0;
        assert!(state.paddle.fire_missile(2.0, 0.0));

        let mut hit = false;
        for step in 0..60 {
            tick(&mut state, step as f64);
            if state.paddle.missiles.is_empty() {
                hit = true;
                break;
            }
        }
        assert!(hit);
        assert_eq!(state.bricks.bricks()[0].strength, 3.0);
        assert_eq!(state.economy.score, 100);
        assert_eq!(state.economy.money, Money::Amount(2));
        assert!(state.events.iter().any(|e| matches!(
            e,
            GameEvent::Explosion {
                large: true,
                color: MISSILE_EXPLOSION_COLOR,
                ..
            }
        )));
        assert_eq!(
            sounds(&state.events),
            vec![SoundCue::Break, SoundCue::Missile]
        );
    }

    #[test]
    fn test_same_step_hits_share_multiplier() {
        let mut state = playing_state();
        single_brick(&mut state, Vec2::new(300.0, 200.0), 5.0);
        state.bricks.bricks_mut().push(Brick::new(500.0, 200.0, 0xFF6B6B, 5.0));
        state.economy.increment_combo(0.0);
        state.economy.increment_combo(0.0);

        // Ball into the first brick, a missile into the second, same step
        state.ball.pos = Vec2::new(320.0, 230.0);
        state.ball.vel = Vec2::new(0.0, -7.0);
        state.paddle.missiles.push(Missile::new(520.0, 228.0));
        tick(&mut state, 50.0);

        assert_eq!(state.bricks.bricks()[0].strength, 4.0);
        assert_eq!(state.bricks.bricks()[1].strength, 4.0);
        // Both hits pay 1 * 2
        assert_eq!(state.economy.money, Money::Amount(4));
        assert_eq!(state.economy.combo.count, 4);
        assert_eq!(state.economy.combo.earnings, 1 + 2 + 3 + 4);
    }

    #[test]
    fn test_miss_loses_life() {
        let mut state = playing_state();
        state.economy.increment_combo(0.0);
        state.ball.pos = Vec2::new(100.0, 595.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        tick(&mut state, 0.0);

        assert_eq!(state.economy.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.ball.is_launched());
        assert_eq!(state.economy.combo.count, 0);
        assert!(state.events.contains(&GameEvent::LifeLost));
        assert_eq!(sounds(&state.events), vec![SoundCue::Lose]);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = playing_state();
        state.economy.lives = 1;
        state.ball.pos = Vec2::new(100.0, 595.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        tick(&mut state, 0.0);

        assert_eq!(state.economy.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.economy.combo.count, 0);
        assert!(state.events.contains(&GameEvent::GameOver));

        // Game over freezes the simulation
        let ticks = state.time_ticks;
        tick(&mut state, 0.0);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_level_clear() {
        let mut state = playing_state();
        single_brick(&mut state, Vec2::new(300.0, 200.0), 1.0);
        state.ball.pos = Vec2::new(320.0, 230.0);
        state.ball.vel = Vec2::new(0.0, -7.0);
        tick(&mut state, 0.0);

        assert_eq!(state.economy.score, 100 + 1000);
        // 1 for the hit, 500 bonus, 1 banked from the one-hit combo
        assert_eq!(state.economy.money, Money::Amount(502));
        assert_eq!(state.bricks.level(), 2);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.phase, GamePhase::Shop);
        assert!(!state.ball.is_launched());
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 1 }));
    }

    #[test]
    fn test_three_hit_combo_then_bounce() {
        let mut state = playing_state();
        {
            let bricks = state.bricks.bricks_mut();
            bricks.clear();
            for x in [100.0, 300.0, 500.0] {
                bricks.push(Brick::new(x, 200.0, 0x45B7D1, 10.0));
            }
            // Keeps the field from clearing
            bricks.push(Brick::new(700.0, 50.0, 0x45B7D1, 10.0));
        }

        for x in [120.0, 320.0, 520.0] {
            state.ball.pos = Vec2::new(x, 230.0);
            state.ball.vel = Vec2::new(0.0, -7.0);
            tick(&mut state, 0.0);
        }
        assert_eq!(state.economy.combo.count, 3);
        assert_eq!(state.economy.combo.earnings, 6);
        // Direct rewards: 1 + 1 + 2
        assert_eq!(state.economy.money, Money::Amount(4));

        state.ball.pos = Vec2::new(392.0, 530.0);
        state.ball.vel = Vec2::new(0.0, 7.0);
        tick(&mut state, 0.0);
        assert_eq!(state.economy.money, Money::Amount(10));
        assert_eq!(state.economy.combo.count, 0);
    }
}
