//! Scoring module - per-player point counters

use crate::types::{Player, WIN_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub first: u32,
    pub second: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// Award one point and return the player's new total.
    pub fn award(&mut self, player: Player) -> u32 {
        let slot = match player {
            Player::First => &mut self.first,
            Player::Second => &mut self.second,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    /// The player who has reached `WIN_SCORE`, if any.
    pub fn winner(&self) -> Option<Player> {
        if self.first >= WIN_SCORE {
            Some(Player::First)
        } else if self.second >= WIN_SCORE {
            Some(Player::Second)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_counts_per_player() {
        let mut score = Score::new();
        assert_eq!(score.award(Player::Second), 1);
        assert_eq!(score.award(Player::Second), 2);
        assert_eq!(score.award(Player::First), 1);
        assert_eq!(score.get(Player::First), 1);
        assert_eq!(score.get(Player::Second), 2);
        assert_eq!(score.winner(), None);
    }

    #[test]
    fn winner_at_threshold() {
        let score = Score {
            first: 3,
            second: WIN_SCORE,
        };
        assert_eq!(score.winner(), Some(Player::Second));
    }
}
