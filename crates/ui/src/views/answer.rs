use dioxus::prelude::*;

use crate::vm::map_answer_modal;

#[component]
pub fn AnswerModal(correct: bool, on_close: EventHandler<()>) -> Element {
    let vm = map_answer_modal(correct);

    rsx! {
        div { class: "modal-backdrop",
            div { class: "{vm.class}", role: "dialog",
                div { class: "answer-modal__mark", "{vm.mark}" }
                h3 { class: "answer-modal__title", "{vm.title}" }
                button {
                    class: "answer-modal__close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
