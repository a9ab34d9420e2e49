//! Integration tests for the game engine and frame loop

use crossterm::event::{KeyCode, KeyEvent};

use tetris::core::{collides, GameState, PieceSource, ScriptedPieces, SimpleRng};
use tetris::engine::{FrameLoop, FrameOutcome};
use tetris::input::map_key;
use tetris::types::{Color, Command, PieceKind, SessionState, FRAME_MS};

const GRAY: Color = Color::new(128, 128, 128);

fn scripted(kind: PieceKind) -> GameState<ScriptedPieces> {
    let mut game = GameState::new(ScriptedPieces::repeat(kind));
    game.start();
    game
}

fn fill_row<R: PieceSource>(game: &mut GameState<R>, y: i16, except: &[i16]) {
    for x in 0..10 {
        if !except.contains(&x) {
            game.board_mut().set(x, y, Some(GRAY));
        }
    }
}

// ============== Lifecycle ==============

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::with_seed(12345);
    assert_eq!(game.session(), SessionState::NotStarted);
    assert!(game.active().is_none());

    // Steering before start is ignored.
    assert!(!game.apply_command(Command::MoveLeft));
    assert!(!game.tick(5000));

    game.start();
    assert!(game.is_running());
    assert!(game.active().is_some());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = GameState::with_seed(seed);
        game.start();
        let mut kinds = Vec::new();
        for _ in 0..10 {
            kinds.push(game.active().map(|a| a.kind));
            game.hard_drop();
        }
        (kinds, game.board().clone())
    };
    assert_eq!(play(7), play(7));
}

#[test]
fn test_gravity_after_drop_interval() {
    let mut game = scripted(PieceKind::T);
    let y0 = game.active().unwrap().offset.y;

    // 62 frames of 16ms = 992ms: still waiting.
    for _ in 0..62 {
        assert!(!game.tick(FRAME_MS));
    }
    assert_eq!(game.active().unwrap().offset.y, y0);

    // 1008ms > 1000ms: one step, and the accumulator starts over.
    assert!(game.tick(FRAME_MS));
    assert_eq!(game.active().unwrap().offset.y, y0 + 1);
    assert_eq!(game.drop_timer_ms(), 0);
}

#[test]
fn test_exactly_one_interval_does_not_drop() {
    let mut game = scripted(PieceKind::O);
    assert!(!game.tick(1000));
    assert!(game.tick(1));
}

// ============== Movement ==============

#[test]
fn test_walls_block_movement() {
    let mut game = scripted(PieceKind::O);
    for _ in 0..4 {
        assert!(game.apply_command(Command::MoveLeft));
    }
    assert!(!game.apply_command(Command::MoveLeft));
    assert_eq!(game.active().unwrap().offset.x, 0);

    for _ in 0..8 {
        assert!(game.apply_command(Command::MoveRight));
    }
    assert!(!game.apply_command(Command::MoveRight));
    assert_eq!(game.active().unwrap().offset.x, 8);
}

#[test]
fn test_rotation_rejected_when_blocked() {
    let mut game = scripted(PieceKind::I);
    // Horizontal I on row 1; vertical needs column 5 rows 0..4.
    game.board_mut().set(5, 3, Some(GRAY));
    let before = game.active().unwrap();

    assert!(!game.apply_command(Command::Rotate));
    assert_eq!(game.active().unwrap(), before);
}

#[test]
fn test_hard_drop_rests_one_step_above_collision() {
    for seed in [1, 2, 3, 99, 12345] {
        let mut game = GameState::with_seed(seed);
        game.start();
        fill_row(&mut game, 19, &[0, 1, 2]);
        fill_row(&mut game, 17, &[7, 8, 9]);
        game.apply_command(Command::MoveRight);

        let active = game.active().unwrap();
        let landing = game.landing_offset().unwrap();
        assert!(!collides(&active.shape, game.board(), landing));
        assert!(collides(&active.shape, game.board(), landing.translated(0, 1).unwrap()));

        let travelled = game.hard_drop();
        assert_eq!(travelled, (landing.y - active.offset.y) as u32);
        assert_eq!(
            game.board().occupied_count(),
            7 + 7 + 4,
            "seed {seed}: piece locks where it landed"
        );
    }
}

// ============== Scoring ==============

#[test]
fn test_score_only_changes_on_clears() {
    let mut game = scripted(PieceKind::O);
    game.hard_drop();
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
}

#[test]
fn test_double_clear_scores_two_hundred() {
    let mut game = scripted(PieceKind::O);
    fill_row(&mut game, 19, &[4, 5]);
    fill_row(&mut game, 18, &[4, 5]);

    game.hard_drop();
    assert_eq!(game.score(), 200);
    assert_eq!(game.lines(), 2);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_soft_dropped_o_clears_one_row() {
    let mut game = scripted(PieceKind::O);
    fill_row(&mut game, 19, &[4, 5]);

    let mut presses = 0;
    while game.score() == 0 {
        assert!(game.apply_command(Command::SoftDrop));
        presses += 1;
        assert!(presses <= 20, "piece never locked");
    }

    // 18 moves down, then the blocked one locks.
    assert_eq!(presses, 19);
    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.board().occupied_count(), 2);
    assert!(game.board().is_occupied(4, 19));
    assert!(game.board().is_occupied(5, 19));
    assert!(game.is_running());
}

// ============== Rotation ==============

#[test]
fn test_four_clockwise_rotations_restore_t() {
    let mut game = scripted(PieceKind::T);
    let before = game.active().unwrap();

    for _ in 0..4 {
        assert!(game.apply_command(Command::Rotate));
    }
    let after = game.active().unwrap();
    assert_eq!(after.shape, before.shape);
    assert_eq!(after.offset, before.offset);
}

// ============== Game over ==============

#[test]
fn test_spawn_on_filled_top_rows_ends_game() {
    let mut game = scripted(PieceKind::T);
    fill_row(&mut game, 0, &[9]);
    fill_row(&mut game, 1, &[9]);

    assert!(!game.spawn());
    assert_eq!(game.session(), SessionState::Over);
    assert!(game.active().is_none());

    // Nothing moves once over.
    assert!(!game.tick(5000));
    assert!(!game.apply_command(Command::HardDrop));
    assert!(!game.spawn());
}

#[test]
fn test_spawn_on_full_top_rows_ends_game_for_every_piece() {
    fn check<R: PieceSource>(mut game: GameState<R>) {
        fill_row(&mut game, 0, &[]);
        fill_row(&mut game, 1, &[]);
        assert!(!game.spawn());
        assert_eq!(game.session(), SessionState::Over);
        assert!(game.active().is_none());
    }

    for kind in PieceKind::ALL {
        check(scripted(kind));
    }
    for seed in 1..=20 {
        let mut game = GameState::with_seed(seed);
        game.start();
        check(game);
    }
}

#[test]
fn test_lock_below_blocked_spawn_rows_ends_game() {
    for seed in 1..=20 {
        let mut game = GameState::with_seed(seed);
        game.start();
        // Move the piece clear of the spawn rows, then wall them off.
        for _ in 0..4 {
            assert!(game.try_move(0, 1), "seed {seed}");
        }
        fill_row(&mut game, 0, &[0]);
        fill_row(&mut game, 1, &[0]);

        game.hard_drop();
        assert_eq!(game.session(), SessionState::Over, "seed {seed}");
        assert!(game.active().is_none());
        assert_eq!(game.lines(), 0);
    }
}

#[test]
fn test_lock_clears_full_top_rows_before_next_spawn() {
    let mut game = scripted(PieceKind::O);
    for _ in 0..4 {
        game.try_move(0, 1);
    }
    fill_row(&mut game, 0, &[]);
    fill_row(&mut game, 1, &[]);

    game.hard_drop();
    assert!(game.is_running());
    assert_eq!(game.lines(), 2);
    assert_eq!(game.score(), 200);
    assert!(game.active().is_some());
}

#[test]
fn test_restart_after_game_over() {
    let mut game = scripted(PieceKind::T);
    fill_row(&mut game, 1, &[9]);
    game.spawn();
    assert!(game.game_over());

    assert!(game.apply_command(Command::Restart));
    assert!(game.is_running());
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.score(), 0);
}

// ============== Frame loop ==============

#[test]
fn test_frame_loop_runs_until_stopped() {
    let mut lp = FrameLoop::with_seed(3);
    assert_eq!(lp.frame(FRAME_MS), FrameOutcome::Stopped);

    let handle = lp.start();
    assert!(lp.is_running());
    let mut outcomes = Vec::new();
    for _ in 0..64 {
        outcomes.push(lp.frame(FRAME_MS));
    }
    assert_eq!(outcomes.iter().filter(|o| **o == FrameOutcome::Dropped).count(), 1);
    assert_eq!(lp.frames(), 64);

    let before = lp.snapshot();
    assert!(handle.cancel());
    assert!(!handle.cancel());
    assert_eq!(lp.frame(5000), FrameOutcome::Stopped);
    assert!(!lp.dispatch(Command::HardDrop));
    assert_eq!(lp.snapshot(), before);

    assert!(!lp.stop());
}

#[test]
fn test_restart_issues_a_new_run() {
    let mut lp = FrameLoop::with_seed(3);
    let first = lp.start();
    let second = lp.start();

    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert_eq!(lp.frame(FRAME_MS), FrameOutcome::Idle);
}

#[test]
fn test_frame_loop_stops_itself_on_game_over() {
    let mut lp = FrameLoop::new(GameState::new(ScriptedPieces::repeat(PieceKind::O)));
    let handle = lp.start();
    {
        let game = lp.game_mut();
        fill_row(game, 0, &[0]);
        fill_row(game, 1, &[0]);
    }

    lp.dispatch(Command::HardDrop);
    assert!(lp.game().game_over());
    assert!(handle.is_cancelled());
    assert_eq!(lp.frame(FRAME_MS), FrameOutcome::Stopped);

    // Enter starts over.
    lp.dispatch(Command::Start);
    assert!(lp.is_running());
    assert_eq!(lp.snapshot().session, SessionState::Running);
}

#[test]
fn test_keys_drive_the_loop() {
    let mut lp = FrameLoop::new(GameState::new(ScriptedPieces::repeat(PieceKind::O)));
    let mut press = |code: KeyCode| {
        let command = map_key(KeyEvent::from(code)).expect("mapped key");
        lp.dispatch(command)
    };

    assert!(press(KeyCode::Enter));
    assert!(press(KeyCode::Left));
    assert!(press(KeyCode::Char(' ')));

    let snap = lp.snapshot();
    assert_eq!(snap.board[19][3], Some(Color::new(255, 255, 0)));
    assert_eq!(snap.active.map(|a| a.kind), Some(PieceKind::O));
}

#[test]
fn test_default_rng_yields_every_kind() {
    let mut rng = SimpleRng::new(2024);
    let mut seen = [false; 7];
    for _ in 0..500 {
        seen[rng.next_kind().index()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

// ============== Snapshot serialization ==============

#[test]
fn test_snapshot_serializes_to_json() {
    let mut lp = FrameLoop::new(GameState::new(ScriptedPieces::repeat(PieceKind::O)));
    lp.start();
    lp.dispatch(Command::HardDrop);

    let v: serde_json::Value = serde_json::to_value(lp.snapshot()).unwrap();
    assert_eq!(v["session"], "Running");
    assert_eq!(v["score"], 0);
    assert_eq!(v["lines"], 0);
    assert_eq!(v["board"][19][4]["r"], 255);
    assert!(v["board"][0][4].is_null());
    assert_eq!(v["active"]["kind"], "O");
    assert_eq!(v["active"]["y"], 0);
    assert_eq!(v["ghost_y"], 16);
}
