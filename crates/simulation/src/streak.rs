//! Consecutive win/loss tracking.

use trade_sim_domain::enums::{Outcome, StreakPolicy};

/// Tracks the current and longest runs of consecutive outcomes.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    policy: StreakPolicy,
    previous: Option<Outcome>,
    current_wins: u32,
    current_losses: u32,
    max_wins: u32,
    max_losses: u32,
}

impl StreakTracker {
    /// Creates a tracker counting streaks under `policy`.
    #[must_use]
    pub fn new(policy: StreakPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Records the next trade outcome.
    pub fn record(&mut self, outcome: Outcome) {
        let extends = match self.policy {
            StreakPolicy::SecondOccurrence => self.previous == Some(outcome),
            StreakPolicy::FullLength => true,
        };

        match outcome {
            Outcome::Win => {
                self.current_losses = 0;
                if extends {
                    self.current_wins += 1;
                    self.max_wins = self.max_wins.max(self.current_wins);
                }
            }
            Outcome::Loss => {
                self.current_wins = 0;
                if extends {
                    self.current_losses += 1;
                    self.max_losses = self.max_losses.max(self.current_losses);
                }
            }
        }

        self.previous = Some(outcome);
    }

    /// Longest win streak so far.
    #[must_use]
    pub fn max_wins(&self) -> u32 {
        self.max_wins
    }

    /// Longest loss streak so far.
    #[must_use]
    pub fn max_losses(&self) -> u32 {
        self.max_losses
    }
}
