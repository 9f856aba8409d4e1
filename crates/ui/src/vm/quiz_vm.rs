use services::{QuizIntent, QuizSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub timer_label: String,
    pub timer_urgent: bool,
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub score_label: String,
}

/// Seconds left at which the timer switches to its warning style.
const URGENT_SECONDS: u32 = 5;

/// Active-question screen, or `None` once every question has been answered.
#[must_use]
pub fn map_quiz_screen(snapshot: &QuizSnapshot) -> Option<QuizScreenVm> {
    let question = snapshot.question.as_ref()?;
    Some(QuizScreenVm {
        timer_label: snapshot.remaining_seconds.to_string(),
        timer_urgent: snapshot.remaining_seconds <= URGENT_SECONDS,
        progress_label: format!(
            "Question {} of {}",
            snapshot.question_number, snapshot.total
        ),
        prompt: question.prompt().to_string(),
        options: question.options().to_vec(),
        score_label: format!("Score: {}", snapshot.score),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerModalVm {
    pub title: &'static str,
    pub mark: &'static str,
    pub class: &'static str,
}

#[must_use]
pub fn map_answer_modal(correct: bool) -> AnswerModalVm {
    if correct {
        AnswerModalVm {
            title: "Correct!",
            mark: "✓",
            class: "answer-modal answer-modal--correct",
        }
    } else {
        AnswerModalVm {
            title: "Wrong!",
            mark: "✗",
            class: "answer-modal answer-modal--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioToggleVm {
    pub track_title: String,
    pub icon: &'static str,
    pub label: &'static str,
    pub intent: QuizIntent,
}

#[must_use]
pub fn map_audio_toggle(track: &str, playing: bool) -> AudioToggleVm {
    let (icon, label, intent) = if playing {
        ("⏸", "Pause music", QuizIntent::StopAudio)
    } else {
        ("▶", "Play music", QuizIntent::PlayAudio)
    };
    AudioToggleVm {
        track_title: track_title(track),
        icon,
        label,
        intent,
    }
}

/// Display title for a track file: extension dropped, words capitalised.
fn track_title(track: &str) -> String {
    let stem = track.rsplit_once('.').map_or(track, |(stem, _)| stem);
    stem.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
