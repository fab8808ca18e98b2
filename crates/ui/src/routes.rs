use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{EditorView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StudyView)] Study {},
        #[route("/editor", EditorView)] Editor {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
