use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use flash_core::model::{Card, Deck};
use services::{AppServices, DeckStore, EditorService, ServicesConfig};
use storage::{DeckRepository, Storage};

use crate::context::{DisplayConfig, ScenePhase, UiApp, build_app_context};
use crate::views::{EditorView, StudyView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    display: DisplayConfig,
}

impl UiApp for TestApp {
    fn deck_store(&self) -> Arc<DeckStore> {
        self.services.deck_store()
    }

    fn editor(&self) -> Arc<EditorService> {
        self.services.editor()
    }

    fn display(&self) -> DisplayConfig {
        self.display
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Study,
    Editor,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(ScenePhase::Active));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Study => rsx! { StudyView {} },
        ViewKind::Editor => rsx! { EditorView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, faces: &[(&str, &str)]) -> ViewHarness {
    setup_view_harness_with_display(view, faces, DisplayConfig::default())
}

pub fn setup_view_harness_with_display(
    view: ViewKind,
    faces: &[(&str, &str)],
    display: DisplayConfig,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let deck = Deck::from_cards(faces.iter().map(|(p, a)| Card::new(*p, *a)).collect())
        .expect("unique cards");
    storage.decks.save(&deck).expect("seed deck");

    let services = AppServices::new(storage.clone(), &ServicesConfig::default());
    let app = Arc::new(TestApp { services, display });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
