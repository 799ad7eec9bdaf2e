use term_arcade::core::{parse_pattern, Ball, LifeState, PongState};
use term_arcade::term::{encode_full_into, LifeView, PongView, Viewport};
use term_arcade::types::{PongAction, Player};

#[test]
fn pong_view_is_centered_on_large_viewports() {
    let state = PongState::new();
    let (w, h) = PongView::frame_size();
    let fb = PongView::default().render(&state, Viewport::new(w + 20, h + 10));

    // Origin = (10, 5): the top-left wall moves with it.
    assert_eq!(fb.get(10, 5).unwrap().ch, '|');
    assert_eq!(fb.get(9, 5).unwrap().ch, ' ');
    assert_eq!(fb.get(10 + 39, 5 + 12).unwrap().ch, '*');
}

#[test]
fn pong_view_follows_paddle_moves() {
    let mut state = PongState::new();
    state.apply_action(PongAction::PaddleUp(Player::First));
    state.apply_action(PongAction::PaddleDown(Player::Second));
    let (w, h) = PongView::frame_size();
    let fb = PongView::default().render(&state, Viewport::new(w, h));

    assert_eq!(fb.get(3, 4).unwrap().ch, '|');
    assert_eq!(fb.get(3, 7).unwrap().ch, ' ');
    assert_eq!(fb.get(76, 17).unwrap().ch, ' ');
    assert_eq!(fb.get(76, 20).unwrap().ch, '|');
}

#[test]
fn pong_ball_on_a_wall_column_draws_as_wall() {
    let mut state = PongState::new();
    state.set_ball(Ball::at(0, 12, -1, 1));
    let (w, h) = PongView::frame_size();
    let fb = PongView::default().render(&state, Viewport::new(w, h));
    assert_eq!(fb.get(0, 12).unwrap().ch, '|');
}

#[test]
fn life_view_clips_on_small_terminals() {
    let state = LifeState::new(parse_pattern(b"*"));
    let fb = LifeView::default().render(&state, Viewport::new(40, 10));

    assert_eq!(fb.width(), 40);
    assert_eq!(fb.get(1, 1).unwrap().ch, '*');
    assert_eq!(fb.get(39, 0).unwrap().ch, '-');
}

#[test]
fn encoded_frame_contains_every_row() {
    let state = LifeState::new(parse_pattern(b"**"));
    let (w, h) = LifeView::frame_size();
    let fb = LifeView::default().render(&state, Viewport::new(w, h));

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.matches("\r\n").count(), h as usize - 1);
    assert!(text.contains("Speed: "));
}
