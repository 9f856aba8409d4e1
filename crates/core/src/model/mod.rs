mod bank;
mod question;
mod summary;

pub use bank::{QUESTION_COUNT, question_bank};
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use summary::{ScoreBand, ScoreSummary};
