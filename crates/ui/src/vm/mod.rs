mod quiz_vm;
mod summary_vm;

pub use quiz_vm::{
    AnswerModalVm, AudioToggleVm, QuizScreenVm, map_answer_modal, map_audio_toggle,
    map_quiz_screen,
};
pub use summary_vm::{DonutRingVm, SummaryVm, map_summary};
