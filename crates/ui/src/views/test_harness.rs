use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use eggsy_core::model::{CookSettings, CookSettingsDraft};
use eggsy_core::rng::ScriptedDice;
use eggsy_core::time::fixed_clock;
use services::CookTimerService;

use crate::context::{UiApp, build_app_context};
use crate::platform::{ChimePlayer, ChimePlayerRef};
use crate::views::KitchenView;
use crate::vm::KitchenIntent;

use super::kitchen::KitchenTestHandles;

/// Chime that counts instead of making noise.
#[derive(Default)]
pub struct CountingChime {
    plays: AtomicUsize,
}

impl CountingChime {
    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }
}

impl ChimePlayer for CountingChime {
    fn play(&self) {
        self.plays.fetch_add(1, Ordering::SeqCst);
    }
}

struct TestApp {
    service: Arc<CookTimerService>,
    chime: Arc<CountingChime>,
}

impl UiApp for TestApp {
    fn app_title(&self) -> &str {
        "Eggsy"
    }

    fn cook_service(&self) -> Arc<CookTimerService> {
        Arc::clone(&self.service)
    }

    fn chime_player(&self) -> ChimePlayerRef {
        self.chime.clone()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: KitchenTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn KitchenHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { KitchenView {} }
}

pub struct KitchenViewHarness {
    pub dom: VirtualDom,
    pub service: Arc<CookTimerService>,
    pub chime: Arc<CountingChime>,
    handles: KitchenTestHandles,
}

impl KitchenViewHarness {
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Dispatch through the same callback the buttons and the real ticker
    /// use, then re-render.
    pub fn dispatch(&mut self, intent: KitchenIntent) {
        self.handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }

    pub fn handles(&self) -> &KitchenTestHandles {
        &self.handles
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_kitchen_harness(dice: ScriptedDice, settings: CookSettings) -> KitchenViewHarness {
    let service = Arc::new(CookTimerService::new(
        fixed_clock(),
        settings,
        Box::new(dice),
    ));
    let chime = Arc::new(CountingChime::default());
    let handles = KitchenTestHandles::default();

    let app = Arc::new(TestApp {
        service: Arc::clone(&service),
        chime: Arc::clone(&chime),
    });

    let dom = VirtualDom::new_with_props(
        KitchenHarness,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    KitchenViewHarness {
        dom,
        service,
        chime,
        handles,
    }
}

pub fn default_settings() -> CookSettings {
    CookSettingsDraft::new()
        .validate()
        .expect("default settings are valid")
}
