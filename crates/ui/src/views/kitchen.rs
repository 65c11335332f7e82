use std::time::Duration;

use dioxus::prelude::*;

use eggsy_core::model::{EggProfile, ProfileId, SessionMode, TickOutcome};
use services::{CookSnapshot, ParadePositions};

use crate::context::AppContext;
use crate::vm::{KitchenIntent, KitchenVm, format_clock};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole app is this one screen: picker while Idle, countdown while
/// Running, celebration while Completed.
#[component]
pub fn KitchenView() -> Element {
    let ctx = use_context::<AppContext>();
    let cook_service = ctx.cook_service();
    let vm = use_signal(move || KitchenVm::new(cook_service));

    let chime_player = ctx.chime_player();
    let dispatch = use_callback(move |intent: KitchenIntent| {
        let mut vm = vm;
        let outcome = vm.write().apply(intent);
        // The Completed edge is reported exactly once per cook.
        if outcome == TickOutcome::Completed && !vm.read().snapshot().muted {
            chime_player.play();
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<KitchenTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let snapshot = vm.read().snapshot().clone();
    let celebration_seconds = vm.read().celebration_seconds();
    let title = ctx.title().to_string();

    rsx! {
        div { class: "kitchen", id: "kitchen-root",
            KitchenHeader { title, muted: snapshot.muted, dispatch }

            if snapshot.mode == SessionMode::Idle {
                ProfilePicker { dispatch }
            } else {
                CookingPanel { snapshot: snapshot.clone(), dispatch }
            }

            if snapshot.mode == SessionMode::Running {
                CookTicker { dispatch }
            }
            if snapshot.celebrating {
                CelebrationOverlay { dispatch, seconds: celebration_seconds }
            }
        }
    }
}

#[component]
fn KitchenHeader(title: String, muted: bool, dispatch: Callback<KitchenIntent>) -> Element {
    let mute_icon = if muted { "🔇" } else { "🔊" };
    let mute_label = if muted { "Unmute" } else { "Mute" };
    rsx! {
        header { class: "kitchen__header",
            h1 { class: "kitchen__title", "🥚 {title}" }
            button {
                id: "mute-toggle",
                class: "kitchen__mute",
                r#type: "button",
                aria_label: "{mute_label}",
                onclick: move |_| dispatch.call(KitchenIntent::ToggleMute),
                "{mute_icon}"
            }
        }
    }
}

#[component]
fn ProfilePicker(dispatch: Callback<KitchenIntent>) -> Element {
    rsx! {
        div { class: "picker",
            p { class: "picker__greeting", "How do you like your egg today, my dear chef? 🥚✨" }
            for (index, profile) in EggProfile::catalog().iter().enumerate() {
                button {
                    key: "{profile.name()}",
                    id: "pick-{index}",
                    class: "picker__choice",
                    r#type: "button",
                    onclick: move |_| dispatch.call(KitchenIntent::Start(ProfileId::new(index))),
                    h3 { class: "picker__name", "{profile.name()} ({profile.duration_minutes()} min)" }
                    p { class: "picker__description", "{profile.description()}" }
                }
            }
        }
    }
}

/// CSS stage for the egg sprite: it yellows as the cook progresses.
fn egg_stage(progress_percent: f64) -> &'static str {
    if progress_percent < 33.0 {
        "egg--early"
    } else if progress_percent < 66.0 {
        "egg--mid"
    } else {
        "egg--late"
    }
}

#[component]
fn CookingPanel(snapshot: CookSnapshot, dispatch: Callback<KitchenIntent>) -> Element {
    let remaining = format_clock(snapshot.remaining_seconds);
    let stage = egg_stage(snapshot.progress_percent);
    let fill_style = format!("width: {:.1}%;", snapshot.progress_percent);
    let done = snapshot.mode == SessionMode::Completed;
    let egg_class = if done { "cooking__egg egg--done" } else { "cooking__egg" };

    rsx! {
        div { class: "cooking",
            div { class: "{egg_class} {stage}", "🥚" }
            div { class: "cooking__clock", id: "cooking-clock", "{remaining}" }
            div { class: "progress",
                div { class: "progress__fill", style: "{fill_style}" }
            }
            p { class: "cooking__message", id: "cooking-message", "{snapshot.status_message}" }
            if done {
                button {
                    id: "cook-again",
                    class: "cooking__again",
                    r#type: "button",
                    onclick: move |_| dispatch.call(KitchenIntent::Reset),
                    "Let's cook another egg! 🍳"
                }
            } else {
                button {
                    id: "cook-cancel",
                    class: "cooking__cancel",
                    r#type: "button",
                    onclick: move |_| dispatch.call(KitchenIntent::Cancel),
                    "Cancel"
                }
            }
            AnimalParade { parade: snapshot.parade }
        }
    }
}

#[component]
fn AnimalParade(parade: ParadePositions) -> Element {
    rsx! {
        div { class: "parade",
            ParadeWalker { emoji: "🐥", kind: "parade__chick", left: parade.chick }
            ParadeWalker { emoji: "🐰", kind: "parade__bunny", left: parade.bunny }
            ParadeWalker { emoji: "🐔", kind: "parade__hen", left: parade.hen }
        }
    }
}

#[component]
fn ParadeWalker(emoji: &'static str, kind: &'static str, left: f32) -> Element {
    let style = format!("left: {left:.1}%;");
    rsx! {
        span { class: "parade__walker {kind}", style: "{style}", "{emoji}" }
    }
}

/// The one-second trigger, alive only while the session is Running.
///
/// Mounting acquires it; unmounting (completion, cancel, reset, teardown)
/// drops the future. At most one exists at a time, and one tick is fully
/// applied before the next sleep is scheduled.
#[component]
fn CookTicker(dispatch: Callback<KitchenIntent>) -> Element {
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            dispatch.call(KitchenIntent::Tick);
        }
    });
    rsx! {}
}

/// Confetti overlay plus its own scoped clear timer: mounted while the
/// celebration flag is up, lowers the flag after the configured window.
#[component]
fn CelebrationOverlay(dispatch: Callback<KitchenIntent>, seconds: u32) -> Element {
    use_future(move || async move {
        tokio::time::sleep(Duration::from_secs(u64::from(seconds))).await;
        dispatch.call(KitchenIntent::CelebrationOver);
    });
    rsx! {
        div { class: "confetti", id: "confetti",
            span { class: "confetti__piece confetti__piece--left", "🎉" }
            span { class: "confetti__piece confetti__piece--mid", "✨" }
            span { class: "confetti__piece confetti__piece--right", "🎈" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct KitchenTestHandles {
    dispatch: Rc<RefCell<Option<Callback<KitchenIntent>>>>,
    vm: Rc<RefCell<Option<Signal<KitchenVm>>>>,
}

#[cfg(test)]
impl KitchenTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<KitchenIntent>, vm: Signal<KitchenVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<KitchenIntent> {
        (*self.dispatch.borrow()).expect("kitchen dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<KitchenVm> {
        (*self.vm.borrow()).expect("kitchen vm registered")
    }
}
