mod answer;
mod quiz;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use answer::AnswerModal;
pub use quiz::QuizView;
pub use summary::SummaryPanel;
