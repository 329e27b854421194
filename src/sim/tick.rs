//! Fixed timestep simulation tick
//!
//! Core game loop that advances the state machine deterministically. The
//! frontend calls `tick` once per frame; all entity mutation happens here.

use super::collision::avatar_collides;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse. Honored only while Playing.
    pub flap: bool,
    /// Start a session. Honored only at the start prompt.
    pub start: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Returns the events the frontend should react to (persistence, logging).
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle => {
            if input.start {
                state.begin_session();
                events.push(GameEvent::SessionStarted);
            }
        }

        GamePhase::GameOver => {
            state.hold_ticks = state.hold_ticks.saturating_sub(1);
            if state.hold_ticks == 0 {
                state.prepare_restart();
                events.push(GameEvent::ReadyToRestart);
            }
        }

        GamePhase::Playing => {
            if input.flap {
                state.avatar.flap(state.tuning.flap_strength);
                events.push(GameEvent::Flapped);
            }

            state.avatar.update(state.tuning.gravity);

            if state.tick_count % state.tuning.spawn_interval_ticks == 0 {
                state.spawn_obstacle();
            }

            for obstacle in &mut state.obstacles {
                obstacle.advance(state.tuning.scroll_speed);
            }

            let half_w = state.tuning.screen_width / 2.0;
            let width = state.tuning.obstacle_width;
            state.obstacles.retain(|o| !o.is_offscreen(half_w, width));

            if avatar_collides(&state.avatar, &state.obstacles, &state.tuning) {
                state.phase = GamePhase::GameOver;
                state.hold_ticks = state.tuning.game_over_hold_ticks.max(1);
                events.push(GameEvent::Collided);
                return events;
            }

            let avatar_x = state.avatar.pos.x;
            for obstacle in state.obstacles.iter_mut() {
                if let Some(event) = state.score.maybe_score(obstacle, avatar_x) {
                    events.push(event);
                }
            }

            state.tick_count += 1;
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Tuning;
    use crate::sim::state::Obstacle;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &TickInput { start: true, ..Default::default() });
        state
    }

    /// Tuning with a wide-open gap so obstacle collisions cannot happen.
    fn safe_tuning() -> Tuning {
        Tuning {
            gap_height: 10_000.0,
            gap_center_range: 0.0,
            ..Tuning::default()
        }
    }

    #[test]
    fn start_input_leaves_the_prompt() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Idle);

        let events = tick(&mut state, &TickInput { start: true, ..Default::default() });

        assert_eq!(state.phase, GamePhase::Playing);
        assert!(events.contains(&GameEvent::SessionStarted));
        assert_eq!(state.score.current, 0);
        assert_eq!(state.tick_count, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn flap_is_ignored_at_the_prompt() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &TickInput { flap: true, ..Default::default() });

        assert_eq!(state.phase, GamePhase::Idle);
        assert!(events.is_empty());
        assert_eq!(state.avatar.vel_y, 0.0);
        assert_eq!(state.avatar.pos.y, 0.0);
    }

    #[test]
    fn start_is_ignored_mid_session() {
        let mut state = playing_state(1);
        for _ in 0..5 {
            tick(&mut state, &TickInput { flap: true, ..Default::default() });
        }
        let ticks_before = state.tick_count;

        tick(&mut state, &TickInput { start: true, flap: true });

        // A restart would have zeroed the counter.
        assert_eq!(state.tick_count, ticks_before + 1);
    }

    #[test]
    fn first_obstacle_spawns_on_the_first_tick() {
        let mut state = GameState::with_tuning(3, safe_tuning());
        tick(&mut state, &TickInput { start: true, ..Default::default() });
        tick(&mut state, &TickInput { flap: true, ..Default::default() });

        assert_eq!(state.obstacles.len(), 1);
        // Spawned at the edge, then advanced once within the same tick.
        let expected = SCREEN_WIDTH / 2.0 + PIPE_WIDTH - PIPE_SPEED;
        assert_eq!(state.obstacles[0].x, expected);
    }

    #[test]
    fn obstacles_spawn_on_the_configured_interval() {
        let tuning = Tuning {
            spawn_interval_ticks: 10,
            ..safe_tuning()
        };
        let mut state = GameState::with_tuning(3, tuning);
        tick(&mut state, &TickInput { start: true, ..Default::default() });

        for _ in 0..25 {
            tick(&mut state, &TickInput { flap: true, ..Default::default() });
        }
        // Spawns at ticks 0, 10, 20.
        assert_eq!(state.obstacles.len(), 3);
    }

    #[test]
    fn offscreen_obstacles_are_pruned_in_order() {
        let mut state = GameState::with_tuning(3, safe_tuning());
        tick(&mut state, &TickInput { start: true, ..Default::default() });

        // One obstacle a hair above the prune threshold, one safely inside.
        let threshold = -SCREEN_WIDTH / 2.0 - PIPE_WIDTH;
        state.obstacles.push(Obstacle::new(threshold + PIPE_SPEED - 1.0, 0.0));
        state.obstacles.push(Obstacle::new(0.0, 0.0));

        tick(&mut state, &TickInput::default());

        // The near-threshold obstacle fell off; the rest keep their order,
        // with the tick-0 spawn appended last.
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].x, -PIPE_SPEED);
        assert_eq!(state.obstacles[1].x, SCREEN_WIDTH / 2.0 + PIPE_WIDTH - PIPE_SPEED);
    }

    #[test]
    fn passing_an_obstacle_scores_exactly_once() {
        let mut state = GameState::with_tuning(3, safe_tuning());
        tick(&mut state, &TickInput { start: true, ..Default::default() });
        state.obstacles.push(Obstacle::new(AVATAR_X + PIPE_SPEED * 1.5, 0.0));

        let mut scored = 0;
        for _ in 0..10 {
            let events = tick(&mut state, &TickInput { flap: true, ..Default::default() });
            scored += events
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored(_) | GameEvent::NewBest(_)))
                .count();
        }

        assert_eq!(scored, 1);
        assert_eq!(state.score.current, 1);
        assert_eq!(state.score.best, 1);
    }

    #[test]
    fn collision_enters_game_over_and_arms_the_hold() {
        let mut state = playing_state(5);
        state.avatar.pos.y = SCREEN_HEIGHT / 2.0 + 50.0;

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::Collided));
        assert_eq!(state.hold_ticks, GAME_OVER_HOLD_TICKS);
    }

    #[test]
    fn game_over_hold_expires_into_a_fresh_prompt() {
        let mut state = playing_state(5);
        state.avatar.pos.y = SCREEN_HEIGHT / 2.0 + 50.0;
        tick(&mut state, &TickInput::default());

        let mut restarted = false;
        for _ in 0..GAME_OVER_HOLD_TICKS {
            let events = tick(&mut state, &TickInput::default());
            restarted |= events.contains(&GameEvent::ReadyToRestart);
        }

        assert!(restarted);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.avatar.pos.y, 0.0);
        assert_eq!(state.avatar.vel_y, 0.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn best_survives_a_worse_follow_up_session() {
        let mut state = GameState::with_tuning(8, safe_tuning());
        tick(&mut state, &TickInput { start: true, ..Default::default() });
        state.score.current = 9;
        state.score.best = 9;

        // Crash out, wait out the hold, play again without scoring.
        state.avatar.pos.y = SCREEN_HEIGHT;
        tick(&mut state, &TickInput::default());
        for _ in 0..GAME_OVER_HOLD_TICKS {
            tick(&mut state, &TickInput::default());
        }
        tick(&mut state, &TickInput { start: true, ..Default::default() });

        assert_eq!(state.score.current, 0);
        assert_eq!(state.score.best, 9);
    }

    #[test]
    fn fifty_ticks_after_a_flap_stay_alive_and_scoreless() {
        let mut state = GameState::new(11);
        tick(&mut state, &TickInput { start: true, ..Default::default() });

        tick(&mut state, &TickInput { flap: true, ..Default::default() });
        for _ in 0..49 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score.current, 0);
        assert!(state.avatar.pos.y.abs() < SCREEN_HEIGHT / 2.0);
    }

    #[test]
    fn same_seed_and_inputs_replay_identically() {
        let mut a = GameState::new(21);
        let mut b = GameState::new(21);
        let script = [true, false, false, true, false];

        tick(&mut a, &TickInput { start: true, ..Default::default() });
        tick(&mut b, &TickInput { start: true, ..Default::default() });
        for round in 0..200 {
            let input = TickInput {
                flap: script[round % script.len()],
                ..Default::default()
            };
            let ea = tick(&mut a, &input);
            let eb = tick(&mut b, &input);

            assert_eq!(ea, eb);
            assert_eq!(a.phase, b.phase);
            assert_eq!(a.avatar.pos.y, b.avatar.pos.y);
            assert_eq!(a.obstacles.len(), b.obstacles.len());
            for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
                assert_eq!(oa.x, ob.x);
                assert_eq!(oa.gap_center_y, ob.gap_center_y);
            }
        }
    }
}
