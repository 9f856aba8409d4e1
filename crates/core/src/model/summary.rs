/// Message band for a final score.
///
/// The bands are `..3`, `4..=6` and `7..=10`. A score of exactly 3 falls
/// through to `Unranked` and shows no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Middle,
    High,
    Unranked,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        match score {
            0..3 => Self::Low,
            4..=6 => Self::Middle,
            7..=10 => Self::High,
            _ => Self::Unranked,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Low => "WOW U SUCK",
            Self::Middle => "eh decent score ig",
            Self::High => "U ROCK 🤩",
            Self::Unranked => "",
        }
    }
}

/// Final tally shown on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    score: u32,
    total: u32,
}

impl ScoreSummary {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Share of correct answers in `0.0..=1.0`; `0.0` for an empty quiz.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.score) / f64::from(self.total)).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.band().message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Low);
        assert_eq!(ScoreBand::for_score(2), ScoreBand::Low);
        assert_eq!(ScoreBand::for_score(4), ScoreBand::Middle);
        assert_eq!(ScoreBand::for_score(6), ScoreBand::Middle);
        assert_eq!(ScoreBand::for_score(7), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(10), ScoreBand::High);
    }

    #[test]
    fn three_has_no_message() {
        assert_eq!(ScoreBand::for_score(3), ScoreBand::Unranked);
        assert_eq!(ScoreSummary::new(3, 10).message(), "");
        assert_eq!(ScoreSummary::new(11, 10).message(), "");
    }

    #[test]
    fn fraction_handles_empty_quiz() {
        assert!((ScoreSummary::new(2, 10).fraction() - 0.2).abs() < f64::EPSILON);
        assert!(ScoreSummary::new(0, 0).fraction().abs() < f64::EPSILON);
    }
}
