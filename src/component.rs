use dioxus::prelude::*;

use crate::handles::merge_sinks;
use crate::hooks::{use_lazy_slot, LazySlotConfig};
use crate::retrieval::Retriever;
use crate::trigger::Strategy;
use crate::utils::CCStr;
use crate::visibility::ViewportOptions;

/// A slot that defers retrieving its component module until its configured
/// trigger fires, showing `placeholder` (or nothing) until then.
///
/// The strategy is fixed at creation: `strategy_override` when given, else
/// derived from the flags (`force_mount` wins, else a configured
/// `condition_met` means condition-gated, else load on viewport entry).
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     LazySlot {
///         retrieval: Retriever::new(|| async { fetch_chart_module().await }),
///         export_key: "default",
///         render_props: ChartProps { series },
///         placeholder: rsx! { div { class: "skeleton h-80" } },
///     }
/// }
/// ```
#[component]
pub fn LazySlot<P: Clone + PartialEq + 'static>(
    /// The asynchronous module fetch. Invoked at most once per instance.
    retrieval: Retriever<P>,
    /// Which export of the retrieved module is the component to render.
    #[props(into)]
    export_key: CCStr,
    /// Props forwarded to the resolved component once loaded.
    render_props: P,
    /// Fraction of the region that must intersect the viewport, in `[0, 1]`.
    #[props(default = 0.5)]
    visibility_threshold: f64,
    /// Shown while the slot is empty.
    placeholder: Option<Element>,
    /// Load unconditionally at creation time.
    #[props(default = false)]
    force_mount: bool,
    /// External condition; configuring it (even `Some(false)`) makes the
    /// derived strategy condition-gated.
    condition_met: Option<bool>,
    /// Receives the root region's mounted event, alongside the slot's own
    /// handle.
    external_ref: Option<EventHandler<MountedEvent>>,
    /// Notified exactly once when the region enters the viewport, whether or
    /// not that starts a retrieval.
    on_entered_view: Option<EventHandler<()>>,
    /// Margin expanding the trigger region, CSS margin syntax.
    #[props(default = CCStr::from("1000px 0px"))]
    viewport_margin: CCStr,
    /// Explicit strategy, bypassing derivation from the flags.
    strategy_override: Option<Strategy>,
) -> Element {
    let strategy =
        strategy_override.unwrap_or_else(|| Strategy::derive(force_mount, condition_met.is_some()));

    let slot = use_lazy_slot(LazySlotConfig {
        retrieval,
        export_key,
        strategy,
        force_mount,
        condition_met,
        viewport: ViewportOptions {
            threshold: visibility_threshold,
            margin: viewport_margin,
        },
        on_entered_view,
    });

    let region_id = slot.region_id();
    let on_region_mounted = merge_sinks(vec![Some(slot.region_sink()), external_ref]);

    rsx! {
        div {
            id: "{region_id}",
            onmounted: move |event| on_region_mounted(event),
            {match slot.artifact() {
                Some(artifact) => artifact.render(render_props),
                None => placeholder.unwrap_or_else(VNode::empty),
            }}
        }
    }
}
