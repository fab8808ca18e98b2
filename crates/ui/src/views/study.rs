use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, DisplayConfig, ScenePhase};
use crate::routes::Route;
use crate::vm::{StackCardVm, StudyVm, is_tap, swipe_verdict};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Drag {
    start_x: f64,
    offset_x: f64,
    pressed: bool,
}

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let display = ctx.display();
    let scene = try_use_context::<Signal<ScenePhase>>();

    // Mounting the screen is the point where edits from the editor are picked up.
    let mut vm = use_signal({
        let store = ctx.deck_store();
        move || StudyVm::start(store)
    });
    let mut drag = use_signal(Drag::default);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            vm.write().tick();
        }
    });

    use_effect(move || {
        if let Some(scene) = scene {
            let active = scene.read().is_active();
            vm.write().set_active(active);
        }
    });

    let on_key = move |evt: KeyboardEvent| match evt.data.key() {
        Key::ArrowRight => {
            evt.prevent_default();
            vm.write().answer(true);
        }
        Key::ArrowLeft => {
            evt.prevent_default();
            vm.write().answer(false);
        }
        _ if evt.data.code() == Code::Space => {
            evt.prevent_default();
            vm.write().toggle_reveal();
        }
        _ => {}
    };

    let on_down = move |evt: MouseEvent| {
        if !vm.read().accepts_answers() {
            return;
        }
        drag.set(Drag {
            start_x: evt.client_coordinates().x,
            offset_x: 0.0,
            pressed: true,
        });
    };
    let on_move = move |evt: MouseEvent| {
        let current = *drag.read();
        if current.pressed {
            drag.set(Drag {
                offset_x: evt.client_coordinates().x - current.start_x,
                ..current
            });
        }
    };
    let on_up = move |_| {
        let finished = *drag.read();
        drag.set(Drag::default());
        if !finished.pressed {
            return;
        }
        if let Some(correct) = swipe_verdict(finished.offset_x) {
            vm.write().answer(correct);
        } else if is_tap(finished.offset_x) {
            vm.write().toggle_reveal();
        }
    };
    let on_leave = move |_| drag.set(Drag::default());

    let (timer_label, stack, accepts, show_start_again) = {
        let vm = vm.read();
        (
            vm.timer_label(),
            vm.stack(),
            vm.accepts_answers(),
            vm.show_start_again(),
        )
    };
    let drag_x = drag.read().offset_x;
    let stack_class = if accepts { "stack" } else { "stack stack--locked" };

    rsx! {
        div { class: "page study", tabindex: "0", onkeydown: on_key,
            header { class: "study-header",
                p { class: "timer", aria_live: "polite", "{timer_label}" }
                Link { class: "add-link", to: Route::Editor {}, "+" }
            }
            div {
                class: "{stack_class}",
                onmousedown: on_down,
                onmousemove: on_move,
                onmouseup: on_up,
                onmouseleave: on_leave,
                for card in stack.into_iter().rev() {
                    CardFace { key: "{card.id}", card, display, drag_x }
                }
            }
            if display.show_answer_buttons() && accepts {
                div { class: "answer-buttons",
                    button {
                        class: "btn answer-wrong",
                        aria_label: "Wrong",
                        onclick: move |_| vm.write().answer(false),
                        "✗ Wrong"
                    }
                    button {
                        class: "btn answer-correct",
                        aria_label: "Correct",
                        onclick: move |_| vm.write().answer(true),
                        "✓ Correct"
                    }
                }
            }
            if show_start_again {
                button {
                    class: "btn btn-primary start-again",
                    onclick: move |_| vm.write().restart(),
                    "Start Again"
                }
            }
        }
    }
}

#[component]
fn CardFace(card: StackCardVm, display: DisplayConfig, drag_x: f64) -> Element {
    let style = card.style(drag_x);
    let class = card.tint_class(drag_x, display);
    let (primary, secondary) = card.faces(display);
    let hidden = !card.is_top();

    rsx! {
        div { class: "{class}", style: "{style}", aria_hidden: hidden,
            p { class: "card-prompt", "{primary}" }
            if let Some(answer) = secondary {
                p { class: "card-answer", "{answer}" }
            }
        }
    }
}
