//! Pong state module - ball, paddles, and score for one match
//!
//! Each tick runs [`PongState::update`] (wall bounce, scoring, paddle bounce, in
//! that order) and then applies at most one input action. The ball only moves on
//! an explicit [`PongAction::Advance`].

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::ball::Ball;
use crate::paddle::Paddle;
use crate::scoring::Score;
use crate::types::{Player, PongAction, FIELD_WIDTH, WIN_SCORE};

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PongEvent {
    /// The ball reflected off the top or bottom wall.
    WallBounce,
    /// The ball reflected off a player's paddle.
    PaddleBounce(Player),
    /// A player scored; `total` is their new score.
    PointScored { player: Player, total: u32 },
    /// A player reached `WIN_SCORE`.
    MatchWon(Player),
}

/// Events produced by a single update; at most two are ever reported.
pub type PongEvents = ArrayVec<PongEvent, 4>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PongState {
    ball: Ball,
    left: Paddle,
    right: Paddle,
    score: Score,
    winner: Option<Player>,
    /// Exchanges played, including the current one.
    exchange: u32,
}

impl PongState {
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            left: Paddle::for_player(Player::First),
            right: Paddle::for_player(Player::Second),
            score: Score::new(),
            winner: None,
            exchange: 1,
        }
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn paddle(&self, player: Player) -> Paddle {
        match player {
            Player::First => self.left,
            Player::Second => self.right,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn exchange(&self) -> u32 {
        self.exchange
    }

    /// Replace the ball, e.g. to set up a specific situation.
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    pub fn set_score(&mut self, score: Score) {
        self.score = score;
        self.winner = score.winner();
    }

    fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::First => &mut self.left,
            Player::Second => &mut self.right,
        }
    }

    /// Run the per-tick rules against the current (pre-move) ball position.
    ///
    /// Nothing happens once the match is won.
    pub fn update(&mut self) -> PongEvents {
        let mut events = PongEvents::new();
        if self.game_over() {
            return events;
        }

        if self.ball.bounce_walls() {
            events.push(PongEvent::WallBounce);
        }

        if let Some(player) = self.scoring_player() {
            let total = self.score.award(player);
            debug!("point for {} player, now {}", player.as_str(), total);
            events.push(PongEvent::PointScored { player, total });
            if total >= WIN_SCORE {
                info!("{} player wins {}-{}", player.as_str(), self.score.first, self.score.second);
                self.winner = Some(player);
                events.push(PongEvent::MatchWon(player));
            }
            self.reset_exchange();
            return events;
        }

        if let Some(player) = self.bounce_paddles() {
            events.push(PongEvent::PaddleBounce(player));
        }

        events
    }

    /// Apply one input action.
    ///
    /// Returns false when the action had no effect (clamped paddle, or a move
    /// after the match is over).
    pub fn apply_action(&mut self, action: PongAction) -> bool {
        match action {
            PongAction::Restart => {
                self.restart();
                true
            }
            _ if self.game_over() => false,
            PongAction::PaddleUp(player) => self.paddle_mut(player).move_up(),
            PongAction::PaddleDown(player) => self.paddle_mut(player).move_down(),
            PongAction::Advance => {
                self.ball.advance();
                true
            }
        }
    }

    /// Start a new match with zeroed scores.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    fn scoring_player(&self) -> Option<Player> {
        if self.ball.x == FIELD_WIDTH - 1 {
            Some(Player::First)
        } else if self.ball.x == 0 {
            Some(Player::Second)
        } else {
            None
        }
    }

    fn bounce_paddles(&mut self) -> Option<Player> {
        let ball = self.ball;
        let hit = if self.right.covers_row(ball.y) && ball.x == self.right.front_column() {
            Some((Player::Second, -1))
        } else if self.left.covers_row(ball.y) && ball.x == self.left.front_column() {
            Some((Player::First, 1))
        } else {
            None
        };

        let (player, speed_x) = hit?;
        let changed = self.ball.speed_x != speed_x;
        self.ball.speed_x = speed_x;
        changed.then_some(player)
    }

    fn reset_exchange(&mut self) {
        self.ball = Ball::new();
        self.left = Paddle::for_player(Player::First);
        self.right = Paddle::for_player(Player::Second);
        self.exchange += 1;
    }
}

impl Default for PongState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FIELD_HEIGHT, LEFT_PADDLE_X, RIGHT_PADDLE_X};

    #[test]
    fn fresh_state_update_is_quiet() {
        let mut state = PongState::new();
        assert!(state.update().is_empty());
        assert_eq!(state.ball(), Ball::new());
    }

    #[test]
    fn ball_only_moves_on_advance() {
        let mut state = PongState::new();
        state.update();
        state.apply_action(PongAction::PaddleUp(Player::First));
        assert_eq!(state.ball(), Ball::new());

        state.apply_action(PongAction::Advance);
        assert_eq!((state.ball().x, state.ball().y), (40, 13));
    }

    #[test]
    fn right_wall_scores_for_first_player_and_resets() {
        let mut state = PongState::new();
        state.apply_action(PongAction::PaddleDown(Player::Second));
        state.set_ball(Ball::at(FIELD_WIDTH - 1, 10, 1, 1));

        let events = state.update();
        assert_eq!(
            events.as_slice(),
            &[PongEvent::PointScored {
                player: Player::First,
                total: 1
            }]
        );
        assert_eq!(state.score().first, 1);
        assert_eq!(state.ball(), Ball::new());
        assert_eq!(state.paddle(Player::Second), Paddle::for_player(Player::Second));
        assert_eq!(state.exchange(), 2);
    }

    #[test]
    fn wall_bounce_is_reported_alongside_a_point() {
        let mut state = PongState::new();
        state.set_ball(Ball::at(0, FIELD_HEIGHT - 2, -1, 1));
        let events = state.update();
        assert_eq!(events[0], PongEvent::WallBounce);
        assert_eq!(
            events[1],
            PongEvent::PointScored {
                player: Player::Second,
                total: 1
            }
        );
    }

    #[test]
    fn paddle_bounce_requires_span_and_adjacent_column() {
        let mut state = PongState::new();
        let left = state.paddle(Player::First);

        state.set_ball(Ball::at(LEFT_PADDLE_X + 1, left.start(), -1, 1));
        assert_eq!(state.update().as_slice(), &[PongEvent::PaddleBounce(Player::First)]);
        assert_eq!(state.ball().speed_x, 1);

        state.set_ball(Ball::at(LEFT_PADDLE_X + 1, left.end() + 1, -1, 1));
        assert!(state.update().is_empty());
        assert_eq!(state.ball().speed_x, -1);

        state.set_ball(Ball::at(LEFT_PADDLE_X + 2, left.start(), -1, 1));
        state.update();
        assert_eq!(state.ball().speed_x, -1);

        let right = state.paddle(Player::Second);
        state.set_ball(Ball::at(RIGHT_PADDLE_X - 1, right.end(), 1, -1));
        assert_eq!(state.update().as_slice(), &[PongEvent::PaddleBounce(Player::Second)]);
        assert_eq!(state.ball().speed_x, -1);
    }

    #[test]
    fn reaching_win_score_ends_the_match() {
        let mut state = PongState::new();
        state.set_score(Score {
            first: WIN_SCORE - 1,
            second: 4,
        });
        state.set_ball(Ball::at(FIELD_WIDTH - 1, 12, 1, 1));

        let events = state.update();
        assert!(events.contains(&PongEvent::MatchWon(Player::First)));
        assert_eq!(state.winner(), Some(Player::First));

        assert!(!state.apply_action(PongAction::Advance));
        assert!(!state.apply_action(PongAction::PaddleUp(Player::First)));
        assert!(state.update().is_empty());

        assert!(state.apply_action(PongAction::Restart));
        assert_eq!(state, PongState::new());
    }
}
