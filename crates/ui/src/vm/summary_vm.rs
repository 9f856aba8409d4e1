use quiz_core::model::ScoreSummary;
use services::QuizSnapshot;

const RING_RADIUS: f64 = 40.0;

/// Stroke geometry for the score donut, in SVG user units.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutRingVm {
    pub radius: f64,
    pub circumference: f64,
    pub filled: f64,
}

impl DonutRingVm {
    #[must_use]
    pub fn for_fraction(fraction: f64) -> Self {
        let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
        Self {
            radius: RING_RADIUS,
            circumference,
            filled: circumference * fraction.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn dash_array(&self) -> String {
        format!("{:.2} {:.2}", self.filled, self.circumference)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryVm {
    pub ratio_label: String,
    pub score_label: String,
    pub message: &'static str,
    pub ring: DonutRingVm,
}

#[must_use]
pub fn map_summary(snapshot: &QuizSnapshot) -> SummaryVm {
    let score = u32::try_from(snapshot.score).unwrap_or(u32::MAX);
    let total = u32::try_from(snapshot.total).unwrap_or(u32::MAX);
    let summary = ScoreSummary::new(score, total);

    SummaryVm {
        ratio_label: format!("{score} / {total}"),
        score_label: format!("Score: {score} / {total}"),
        message: summary.message(),
        ring: DonutRingVm::for_fraction(summary.fraction()),
    }
}
