//! End-to-end scenarios driving the slot controller and the retrieval
//! boundary together, wired the same way the `use_lazy_slot` hook wires
//! them: each trigger evaluation that fires starts exactly one retrieval,
//! and completion stores the resolved export.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_lazy_slot::prelude::*;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn blank(_: ()) -> Element {
    VNode::empty()
}

/// A retriever resolving to `{ "default" => component }` that counts its
/// invocations.
fn counting_retriever(
    component: SlotComponent<()>,
) -> (Retriever<()>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let retriever = Retriever::new(move || {
        counter.set(counter.get() + 1);
        let module = ModuleMap::from([(String::from("default"), component.clone())]);
        async move { Ok(module) }
    });
    (retriever, calls)
}

#[tokio::test]
async fn scenario_a_default_strategy_loads_on_entering_view() {
    init_logs();
    let comp_x = SlotComponent::new(blank);
    let (retriever, calls) = counting_retriever(comp_x.clone());

    // Not in view at creation.
    let mut slot = SlotController::new(Strategy::Default, false, false);
    assert!(!slot.on_create());
    assert_eq!(calls.get(), 0);

    // The region enters the viewport.
    assert!(slot.on_entered_view().load);
    let artifact = retriever.retrieve_export("default").await.unwrap();
    slot.complete(artifact);

    assert_eq!(calls.get(), 1);
    assert!(slot.is_loaded());
    assert_eq!(slot.artifact(), Some(&comp_x));
}

#[tokio::test]
async fn scenario_b_forced_on_mount_loads_without_any_visibility_event() {
    init_logs();
    let comp = SlotComponent::new(blank);
    let (retriever, calls) = counting_retriever(comp);

    let mut slot = SlotController::new(Strategy::ForcedOnMount, true, false);
    assert!(slot.on_create());
    let artifact = retriever.retrieve_export("default").await.unwrap();
    slot.complete(artifact);

    assert_eq!(calls.get(), 1);
    assert!(slot.is_loaded());

    // A later entered-view signal still notifies the caller exactly once
    // but never re-triggers retrieval.
    let outcome = slot.on_entered_view();
    assert!(outcome.notify);
    assert!(!outcome.load);
    assert!(!slot.on_entered_view().notify);
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn scenario_c_condition_gated_ignores_visibility_until_the_flip() {
    init_logs();
    let comp = SlotComponent::new(blank);
    let (retriever, calls) = counting_retriever(comp);

    let mut slot = SlotController::new(Strategy::ConditionGated, false, false);
    assert!(!slot.on_create());

    // Entering the viewport notifies but does not trigger retrieval for a
    // gated slot.
    let outcome = slot.on_entered_view();
    assert!(outcome.notify);
    assert!(!outcome.load);
    assert_eq!(calls.get(), 0);

    // The condition flips to true.
    assert!(slot.on_condition_change(true));
    let artifact = retriever.retrieve_export("default").await.unwrap();
    slot.complete(artifact);

    assert_eq!(calls.get(), 1);
    assert!(slot.is_loaded());

    // Further flips are no-ops.
    assert!(!slot.on_condition_change(false));
    assert!(!slot.on_condition_change(true));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn failed_retrieval_leaves_the_slot_empty_forever() {
    init_logs();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let retriever = Retriever::<()>::new(move || {
        counter.set(counter.get() + 1);
        async move { Err(CCStr::from("module fetch rejected")) }
    });

    let mut slot = SlotController::<SlotComponent<()>>::new(Strategy::Default, false, false);
    assert!(slot.on_entered_view().load);
    assert!(retriever.retrieve_export("default").await.is_err());

    // No retry: the slot stays Empty and every later signal is inert.
    assert!(!slot.is_loaded());
    assert!(!slot.on_entered_view().load);
    assert!(!slot.on_condition_change(true));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn missing_export_key_leaves_the_slot_empty() {
    init_logs();
    let retriever = Retriever::<()>::new(|| async { Ok(module_map! { "default" => blank }) });

    let mut slot = SlotController::<SlotComponent<()>>::new(Strategy::Default, false, false);
    assert!(slot.on_entered_view().load);
    assert!(retriever.retrieve_export("named").await.is_err());
    assert!(!slot.is_loaded());
}
