use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::ScenePhase;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let mut scene = use_context_provider(|| Signal::new(ScenePhase::Active));

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Focused(focused),
            ..
        } = event
        {
            let next = ScenePhase::from_focus(*focused);
            if *scene.peek() != next {
                tracing::debug!(?next, "window focus changed");
                scene.set(next);
            }
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "FlashDeck" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
