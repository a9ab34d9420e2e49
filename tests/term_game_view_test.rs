use tetris::core::{pieces::PURPLE, GameSnapshot, GameState, ScriptedPieces};
use tetris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tetris::types::{Color, PieceKind, SessionState};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn running_t_game() -> GameState<ScriptedPieces> {
    let mut gs = GameState::new(ScriptedPieces::repeat(PieceKind::T));
    gs.start();
    gs
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 10*2 by 20*1 block cells plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_in_its_color() {
    let mut snap = GameSnapshot::default();
    snap.session = SessionState::Running;
    snap.board[19][0] = Some(Color::new(255, 0, 0));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each block is 2 chars wide.
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Color::new(255, 0, 0));
    }
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_block_size_is_configurable() {
    let mut snap = GameSnapshot::default();
    snap.session = SessionState::Running;
    snap.board[0][1] = Some(Color::new(0, 0, 255));

    let view = GameView::new(3, 2);
    let fb = view.render(&snap, Viewport::new(32, 42));

    for (x, y) in [(4, 1), (5, 1), (6, 1), (4, 2), (6, 2)] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "({x}, {y})");
    }
    assert_ne!(fb.get(4, 3).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let gs = running_t_game();
    let snap = gs.snapshot();
    assert_eq!(snap.ghost_y, Some(18));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // T spawns at x=3: nub at board (4,0), bar at row 1.
    let nub = fb.get(9, 1).unwrap();
    assert_eq!(nub.ch, '█');
    assert_eq!(nub.style.fg, PURPLE);
    assert_eq!(fb.get(7, 2).unwrap().ch, '█');

    // Ghost sits on the floor.
    assert_eq!(fb.get(9, 19).unwrap().ch, '░');
    assert_eq!(fb.get(7, 20).unwrap().ch, '░');
}

#[test]
fn term_view_ghost_can_be_disabled() {
    let snap = running_t_game().snapshot();
    let fb = GameView::default()
        .with_ghost(false)
        .render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains('░'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_t_game().snapshot();
    snap.score = 1200;
    snap.lines = 12;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1200"));
    assert!(all.contains("LINES"));
    assert!(all.contains("space drop"));

    // Too narrow: no panel.
    let narrow = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_session() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let idle = view.render(&GameSnapshot::default(), vp);
    assert!(idle.row_text(11).contains("PRESS ENTER"));

    let running = view.render(&running_t_game().snapshot(), vp);
    let text = screen_text(&running);
    assert!(!text.contains("PRESS ENTER"));
    assert!(!text.contains("GAME OVER"));

    let mut over = running_t_game();
    for x in 0..10 {
        over.board_mut().set(x, 1, Some(Color::new(1, 1, 1)));
    }
    over.spawn();
    assert_eq!(over.session(), SessionState::Over);
    let fb = view.render(&over.snapshot(), vp);
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameSnapshot::default();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&GameSnapshot::default(), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
}
