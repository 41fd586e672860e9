use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{LocalWordSource, WordSource, WordSourceError};
use speller_core::VocabularyEntry;

use crate::context::{UiApp, build_app_context};
use crate::views::ShellPanel;
use crate::views::home::ShellTestHandles;
use crate::vm::ShellVm;

#[derive(Clone)]
struct TestApp {
    word_source: Arc<dyn WordSource>,
}

impl UiApp for TestApp {
    fn word_source(&self) -> Arc<dyn WordSource> {
        Arc::clone(&self.word_source)
    }

    fn session_size(&self) -> usize {
        1
    }
}

/// Word source that always fails, as an unreachable backend would.
pub struct UnavailableSource;

#[async_trait]
impl WordSource for UnavailableSource {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn fetch_session(&self, _count: usize) -> Result<Vec<VocabularyEntry>, WordSourceError> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Err(WordSourceError::Unavailable)
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    initial: ShellVm,
    handles: ShellTestHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! {
        ShellPanel { initial: props.initial.clone() }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ShellTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks until the rendered page contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    /// Press Start, as the welcome button does.
    pub fn start(&mut self) {
        let start = self.handles.start();
        self.dom.in_runtime(|| start.call(()));
        self.drive();
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

pub fn sample_entries() -> Vec<VocabularyEntry> {
    vec![VocabularyEntry::new("Elma", "apple", "A round fruit that grows on trees.").unwrap()]
}

/// Several entries, so a one-word session shows the size limit is applied.
pub fn pool_entries() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("Elma", "apple", "A round fruit that grows on trees.").unwrap(),
        VocabularyEntry::new("Kitap", "book", "A set of pages with writing on them.").unwrap(),
        VocabularyEntry::new("Su", "water", "A clear liquid you drink.").unwrap(),
    ]
}

pub fn setup_view_harness(initial: ShellVm) -> ViewHarness {
    let word_source: Arc<dyn WordSource> =
        Arc::new(LocalWordSource::with_entries(sample_entries()).with_seed(7));
    setup_view_harness_with_source(initial, word_source)
}

pub fn setup_view_harness_with_source(
    initial: ShellVm,
    word_source: Arc<dyn WordSource>,
) -> ViewHarness {
    let app = Arc::new(TestApp { word_source });
    let handles = ShellTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ShellHarness,
        ShellHarnessProps {
            app,
            initial,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
