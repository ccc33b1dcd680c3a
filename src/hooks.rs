//! The hook wiring the slot controller to the Dioxus runtime.

use dioxus::prelude::*;

use crate::retrieval::{Retriever, SlotComponent};
use crate::slot::SlotController;
use crate::trigger::Strategy;
use crate::utils::CCStr;
use crate::visibility::{use_entered_view, ViewportOptions};

/// Configuration of one lazy slot instance, consumed by [`use_lazy_slot`].
pub struct LazySlotConfig<P: 'static> {
    /// The asynchronous module fetch. Invoked at most once per instance.
    pub retrieval: Retriever<P>,
    /// Which export of the retrieved module is the component to render.
    pub export_key: CCStr,
    /// The loading strategy, fixed for the lifetime of the instance.
    pub strategy: Strategy,
    /// Forced mount-time loading requested.
    pub force_mount: bool,
    /// Current value of the external condition, `None` when the caller did
    /// not configure one. Re-evaluated on every change.
    pub condition_met: Option<bool>,
    /// Forwarded to the visibility collaborator.
    pub viewport: ViewportOptions,
    /// Invoked exactly once when the region enters the viewport, whether or
    /// not that triggers a retrieval.
    pub on_entered_view: Option<EventHandler<()>>,
}

/// Owns one slot's lifecycle from `Empty` to `Loaded`.
///
/// Creation evaluates the mount-time trigger, the one-shot viewport signal
/// and the external condition each re-evaluate the controller, and whichever
/// evaluation fires first starts the retrieval. The retrieval task is owned
/// by the slot's scope: unmounting drops it, so a resolution arriving after
/// teardown cannot touch dead state.
pub fn use_lazy_slot<P: 'static>(config: LazySlotConfig<P>) -> LazySlotHandle<P> {
    let LazySlotConfig {
        retrieval,
        export_key,
        strategy,
        force_mount,
        condition_met,
        viewport,
        on_entered_view,
    } = config;

    let region_id = use_hook(|| CCStr::from(format!("lazy-slot-{}", uuid::Uuid::new_v4())));
    let region = use_signal(|| None);
    let mut controller = use_signal(|| {
        SlotController::new(strategy, force_mount, condition_met.unwrap_or(false))
    });

    // Creation-time evaluation. The future is the first task scheduled for
    // this scope, so it runs before any visibility or condition delivery.
    {
        let retrieval = retrieval.clone();
        let export_key = export_key.clone();
        use_future(move || {
            let retrieval = retrieval.clone();
            let export_key = export_key.clone();
            async move {
                if controller.write().on_create() {
                    run_retrieval(controller, retrieval, export_key).await;
                }
            }
        });
    }

    // One-shot viewport signal. The notification callback fires on the
    // transition no matter the strategy or whether a retrieval starts.
    let entered = use_entered_view(region_id.clone(), viewport);
    {
        let retrieval = retrieval.clone();
        let export_key = export_key.clone();
        use_effect(move || {
            if entered() {
                let outcome = controller.write().on_entered_view();
                if outcome.notify {
                    if let Some(notify) = on_entered_view {
                        notify.call(());
                    }
                }
                if outcome.load {
                    start_retrieval(controller, retrieval.clone(), export_key.clone());
                }
            }
        });
    }

    // External condition input, re-evaluated whenever the prop changes.
    use_effect(use_reactive((&condition_met,), move |(met,)| {
        if controller.write().on_condition_change(met.unwrap_or(false)) {
            start_retrieval(controller, retrieval.clone(), export_key.clone());
        }
    }));

    LazySlotHandle {
        region_id,
        region,
        controller,
    }
}

async fn run_retrieval<P: 'static>(
    mut controller: Signal<SlotController<SlotComponent<P>>>,
    retrieval: Retriever<P>,
    export_key: CCStr,
) {
    match retrieval.retrieve_export(&export_key).await {
        Ok(artifact) => controller.write().complete(artifact),
        // No retry and no state change: the slot stays Empty and the
        // placeholder keeps showing.
        Err(e) => log::error!("lazy slot retrieval failed: {e}"),
    }
}

fn start_retrieval<P: 'static>(
    controller: Signal<SlotController<SlotComponent<P>>>,
    retrieval: Retriever<P>,
    export_key: CCStr,
) {
    spawn(run_retrieval(controller, retrieval, export_key));
}

/// Handle on a running slot instance, as returned by [`use_lazy_slot`].
pub struct LazySlotHandle<P: 'static> {
    region_id: CCStr,
    region: Signal<Option<MountedEvent>>,
    controller: Signal<SlotController<SlotComponent<P>>>,
}

impl<P> Clone for LazySlotHandle<P> {
    fn clone(&self) -> Self {
        Self {
            region_id: self.region_id.clone(),
            region: self.region,
            controller: self.controller,
        }
    }
}
impl<P> PartialEq for LazySlotHandle<P> {
    fn eq(&self, other: &Self) -> bool {
        self.region_id == other.region_id
            && self.region == other.region
            && self.controller == other.controller
    }
}

impl<P> LazySlotHandle<P> {
    /// The generated DOM id of the slot's root region, observed by the
    /// visibility collaborator.
    pub fn region_id(&self) -> CCStr {
        self.region_id.clone()
    }

    /// The root region's mounted event, once the region is live.
    pub fn region(&self) -> Option<MountedEvent> {
        self.region.read().clone()
    }

    /// A sink recording the root region's mounted event on the handle.
    pub fn region_sink(&self) -> EventHandler<MountedEvent> {
        let mut region = self.region;
        EventHandler::new(move |event| region.set(Some(event)))
    }

    /// The resolved component, or `None` while the slot is empty.
    pub fn artifact(&self) -> Option<SlotComponent<P>> {
        self.controller.read().artifact().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.controller.read().is_loaded()
    }
}
