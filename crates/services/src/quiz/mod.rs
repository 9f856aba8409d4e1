mod engine;
mod quiz_loop;
mod state;
mod view;

// Public API of the quiz subsystem.
pub use engine::QuizEngine;
pub use quiz_loop::{QuizIntent, QuizLoop};
pub use state::QuizState;
pub use view::QuizSnapshot;
