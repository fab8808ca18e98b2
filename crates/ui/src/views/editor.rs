use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::EditorVm;

#[component]
pub fn EditorView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut vm = use_signal({
        let editor = ctx.editor();
        move || EditorVm::load(editor)
    });

    let (rows, prompt, answer, error) = {
        let vm = vm.read();
        (
            vm.rows(),
            vm.new_prompt().to_string(),
            vm.new_answer().to_string(),
            vm.error(),
        )
    };

    rsx! {
        div { class: "page editor",
            header { class: "editor-header",
                h2 { "Edit Cards" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::Study {});
                    },
                    "Done"
                }
            }
            if let Some(err) = error {
                p { class: "error", role: "alert", "{err.message()}" }
            }
            form {
                class: "new-card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    vm.write().add_card();
                },
                h3 { "Add new card" }
                input {
                    r#type: "text",
                    placeholder: "Prompt",
                    value: "{prompt}",
                    oninput: move |evt: FormEvent| vm.write().set_prompt(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Answer",
                    value: "{answer}",
                    oninput: move |evt: FormEvent| vm.write().set_answer(evt.value()),
                }
                button { class: "btn", r#type: "submit", "Add Card" }
            }
            ul { class: "card-list",
                for (index, row) in rows.into_iter().enumerate() {
                    li { key: "{row.id}", class: "card-row",
                        div { class: "card-row__text",
                            span { class: "card-row__prompt", "{row.prompt_preview}" }
                            span { class: "card-row__answer", "{row.answer_preview}" }
                        }
                        button {
                            class: "btn btn-danger",
                            aria_label: "Delete",
                            onclick: move |_| vm.write().remove_card(index),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
