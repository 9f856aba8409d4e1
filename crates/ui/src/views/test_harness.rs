use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, question_bank};
use services::{AssetSource, BACKGROUND_TRACK, InMemoryAssets, QuizIntent, QuizSnapshot};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    questions: Vec<Question>,
    assets: Arc<InMemoryAssets>,
}

impl UiApp for TestApp {
    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn assets(&self) -> Arc<dyn AssetSource> {
        self.assets.clone()
    }

    fn autoplay_audio(&self) -> bool {
        false
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
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
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep driving the dom until the published snapshot satisfies `condition`.
    pub async fn drive_until(&mut self, condition: impl Fn(&QuizSnapshot) -> bool) -> QuizSnapshot {
        for _ in 0..40 {
            self.drive_async().await;
            let current = self.snapshot();
            if condition(&current) {
                return current;
            }
        }
        panic!("condition not reached; last snapshot {:?}", self.snapshot());
    }

    pub fn dispatch(&self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let snapshot = self.handles.snapshot();
        self.dom.in_runtime(|| snapshot.peek().clone())
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

pub fn setup_view_harness() -> ViewHarness {
    let assets = InMemoryAssets::new().with_asset(BACKGROUND_TRACK, vec![0xFF, 0xFB, 0x90]);
    let app = Arc::new(TestApp {
        questions: question_bank(),
        assets: Arc::new(assets),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
