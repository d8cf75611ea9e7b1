//! Win/loss tallies across games played in one run

use super::{GameSession, GameStatus};

/// Running totals for finished games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished session
    ///
    /// Returns false (and records nothing) while the session is still in
    /// progress.
    pub fn record(&mut self, session: &GameSession) -> bool {
        match session.status() {
            GameStatus::InProgress => false,
            GameStatus::Lost => {
                self.total_games += 1;
                true
            }
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;

                let guesses = session.attempts().len();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
                true
            }
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins that took exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        self.guess_distribution.get(guesses).copied().unwrap_or(0)
    }
}
