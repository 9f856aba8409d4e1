use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use services::{BACKGROUND_TRACK, BackgroundAudio, QuizIntent, QuizLoop, QuizSnapshot};

use crate::audio::WebviewAudioSink;
use crate::context::AppContext;
use crate::vm::{QuizScreenVm, map_audio_toggle, map_quiz_screen, map_summary};

use super::answer::AnswerModal;
use super::summary::SummaryPanel;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_signal({
        let questions = ctx.questions();
        move || QuizSnapshot::fresh(&questions)
    });

    // The loop lives as long as this view; dropping it stops the countdown and the music.
    let quiz: Coroutine<QuizIntent> =
        use_coroutine(move |intents: UnboundedReceiver<QuizIntent>| {
            let ctx = ctx.clone();
            let mut snapshot = snapshot;
            async move {
                let audio = BackgroundAudio::new(
                    BACKGROUND_TRACK,
                    ctx.assets(),
                    Box::new(WebviewAudioSink::new()),
                );
                let quiz_loop =
                    QuizLoop::new(ctx.questions(), audio).with_autoplay(ctx.autoplay_audio());
                let mut updates = quiz_loop.subscribe();

                let publish = async move {
                    while updates.changed().await.is_ok() {
                        let next = updates.borrow_and_update().clone();
                        snapshot.set(next);
                    }
                };

                tokio::join!(quiz_loop.run(intents), publish);
            }
        });

    let dispatch_intent = use_callback(move |intent: QuizIntent| quiz.send(intent));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, snapshot);
            }
        }
    }

    let current = snapshot.read().clone();
    let toggle = map_audio_toggle(BACKGROUND_TRACK, current.audio_playing);
    let toggle_intent = toggle.intent.clone();
    let show_modal = current.show_answer_modal && !current.show_summary;

    let body = if current.show_summary {
        rsx! {
            SummaryPanel {
                summary: map_summary(&current),
                on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
            }
        }
    } else {
        match map_quiz_screen(&current) {
            Some(screen) => rsx! {
                QuestionCard {
                    screen,
                    on_answer: move |answer: String| dispatch_intent.call(QuizIntent::Answer(answer)),
                }
            },
            None => rsx! {
                p { class: "quiz__empty", "No questions available." }
            },
        }
    };

    rsx! {
        div { class: "quiz",
            // Music controls belong to the question screen only.
            if !current.show_summary {
                div { class: "quiz__toolbar",
                    span { class: "quiz__track", "{toggle.track_title}" }
                    button {
                        class: "audio-toggle",
                        r#type: "button",
                        title: "{toggle.label}",
                        onclick: move |_| dispatch_intent.call(toggle_intent.clone()),
                        "{toggle.icon}"
                    }
                }
            }
            {body}
        }
        if show_modal {
            AnswerModal {
                correct: current.last_answer_correct,
                on_close: move |()| dispatch_intent.call(QuizIntent::DismissModal),
            }
        }
    }
}

#[component]
fn QuestionCard(screen: QuizScreenVm, on_answer: EventHandler<String>) -> Element {
    let timer_class = if screen.timer_urgent {
        "quiz__timer quiz__timer--urgent"
    } else {
        "quiz__timer"
    };

    rsx! {
        div { class: "quiz__header",
            span { class: "{timer_class}", "{screen.timer_label}" }
            span { class: "quiz__progress", "{screen.progress_label}" }
        }
        h2 { class: "quiz__prompt", "{screen.prompt}" }
        div { class: "quiz__options",
            {screen.options.iter().map(|option| {
                let answer = option.clone();
                rsx! {
                    button {
                        key: "{option}",
                        class: "quiz__option",
                        r#type: "button",
                        onclick: move |_| on_answer.call(answer.clone()),
                        "{option}"
                    }
                }
            })}
        }
        p { class: "quiz__score", "{screen.score_label}" }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    snapshot: Rc<RefCell<Option<Signal<QuizSnapshot>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, snapshot: Signal<QuizSnapshot>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.snapshot.borrow_mut() = Some(snapshot);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn snapshot(&self) -> Signal<QuizSnapshot> {
        (*self.snapshot.borrow()).expect("quiz snapshot registered")
    }
}
