use std::fmt;

/// Running tally for one round of play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// Summary banner for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Excellent,
    Good,
    KeepStudying,
}

impl Score {
    pub fn new(total: usize) -> Self {
        Self { correct: 0, total }
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        }
    }

    /// Percentage of correct answers, or `None` for an empty round.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.correct as f64 / self.total as f64 * 100.0)
    }

    pub fn tier(&self) -> Option<Tier> {
        if self.total == 0 {
            return None;
        }

        // Compare on counts so 4/5 lands on the 80% boundary exactly.
        let tier = if self.correct == self.total {
            Tier::Perfect
        } else if self.correct * 10 >= self.total * 8 {
            Tier::Excellent
        } else if self.correct * 10 >= self.total * 6 {
            Tier::Good
        } else {
            Tier::KeepStudying
        };
        Some(tier)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

impl Tier {
    pub fn banner(self) -> &'static str {
        match self {
            Tier::Perfect => "Perfect! You got every answer right!",
            Tier::Excellent => "Excellent work!",
            Tier::Good => "Good job!",
            Tier::KeepStudying => "Keep studying!",
        }
    }
}
