use thiserror::Error;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("option {index} must not be empty")]
    EmptyOption { index: usize },

    #[error("option {index} duplicates an earlier option")]
    DuplicateOption { index: usize },

    #[error("correct option {correct:?} is not one of the options")]
    CorrectOptionMissing { correct: String },
}

/// A single multiple-choice question.
///
/// The correct answer is stored as the option text, not as an index, so
/// answers are matched by the text the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_option: String,
}

impl Question {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_option: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct_option: correct_option.into(),
        }
    }

    /// Check the shape of the question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt or an option is blank, an
    /// option repeats, or the correct option is not among the options.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            if self.options[..index].contains(option) {
                return Err(QuestionError::DuplicateOption { index });
            }
        }
        if !self.options.contains(&self.correct_option) {
            return Err(QuestionError::CorrectOptionMissing {
                correct: self.correct_option.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_option == selected
    }
}
