//! # Dioxus Lazy Slot
//!
//! A deferred-activation slot for Dioxus: decide *when* to retrieve an
//! asynchronous component module for one visual slot, then swap the
//! placeholder for the retrieved component, exactly once.
//!
//! Three independent signals can trigger the retrieval and a small state
//! machine reconciles them deterministically:
//! - forced mount-time loading (fires at creation, earliest possible point),
//! - an externally supplied boolean condition (re-evaluated on every change),
//! - a one-shot "entered view" viewport signal.
//!
//! ## Core Concepts
//!
//! - [`Strategy`](trigger::Strategy) / [`ActivationMap`](trigger::ActivationMap):
//!   the pure trigger resolver mapping the raw signals to one activation
//!   verdict per strategy
//! - [`SlotController`](slot::SlotController): per-instance state machine
//!   owning the `Empty -> Loaded` lifecycle and the at-most-once latch
//! - [`Retriever`](retrieval::Retriever) / [`ModuleMap`](retrieval::ModuleMap):
//!   the asynchronous fetch boundary and export lookup
//! - [`use_lazy_slot`](hooks::use_lazy_slot): the hook wiring the controller
//!   to the Dioxus runtime
//! - [`LazySlot`](component::LazySlot): the ready-made component with a
//!   placeholder body
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use dioxus_lazy_slot::prelude::*;
//!
//! #[component]
//! fn Dashboard() -> Element {
//!     rsx! {
//!         LazySlot {
//!             retrieval: Retriever::new(|| async {
//!                 Ok(module_map! { "default" => HeavyChart })
//!             }),
//!             export_key: "default",
//!             render_props: ChartProps { series: vec![] },
//!             placeholder: rsx! { div { class: "skeleton h-80" } },
//!         }
//!     }
//! }
//! ```
//!
//! Failures are deliberately boring: a rejected fetch or an absent export
//! key is logged, the slot stays empty and the placeholder keeps showing.
//! There is no retry, no cross-instance cache and no eviction.

pub mod component;
pub mod handles;
pub mod hooks;
pub mod retrieval;
pub mod slot;
pub mod trigger;
pub mod utils;
pub mod visibility;

/// Prelude module that re-exports the public surface of the crate.
pub mod prelude {
    pub use crate::component::LazySlot;
    pub use crate::handles::merge_sinks;
    pub use crate::hooks::{use_lazy_slot, LazySlotConfig, LazySlotHandle};
    pub use crate::module_map;
    pub use crate::retrieval::{ModuleMap, Retriever, SlotComponent};
    pub use crate::slot::{EnteredView, SlotController, SlotState};
    pub use crate::trigger::{ActivationMap, Strategy, TriggerInputs};
    pub use crate::utils::CCStr;
    pub use crate::visibility::{use_entered_view, ViewportOptions};
}
