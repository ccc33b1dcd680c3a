//! Per-instance slot state and the controller that turns trigger signals
//! into at most one retrieval.

use crate::trigger::{ActivationMap, Strategy, TriggerInputs};

/// The loading state of one slot instance.
///
/// There is deliberately no `Loading` or `Error` variant: a failed or
/// in-flight retrieval leaves the slot [`SlotState::Empty`] and the
/// placeholder keeps showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotState<T> {
    /// No artifact. Initial state.
    #[default]
    Empty,
    /// The resolved artifact. Terminal: the slot never regresses to `Empty`
    /// and never re-triggers retrieval.
    Loaded(T),
}

/// Outcome of one entered-view delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnteredView {
    /// First delivery for this instance: the caller's entered-view
    /// notification fires now, whatever the strategy and whether or not a
    /// retrieval starts.
    pub notify: bool,
    /// The activation map says to start retrieval now.
    pub load: bool,
}

/// Owns one slot's lifecycle from `Empty` to `Loaded`.
///
/// Each trigger entry point is synchronous and runs to completion: it
/// recomputes the [`ActivationMap`] from the current inputs, consults the
/// entry for the configured [`Strategy`] and reports whether the caller must
/// start the asynchronous retrieval now. The `initiated` latch is the
/// at-most-once contract: whatever combination of signals races in, only the
/// first positive evaluation proceeds, and a failed retrieval never re-arms.
#[derive(Debug)]
pub struct SlotController<T> {
    strategy: Strategy,
    force_mount: bool,
    condition_met: bool,
    entered_view: bool,
    initiated: bool,
    state: SlotState<T>,
}

impl<T> SlotController<T> {
    /// Creates a fresh, `Empty` controller.
    ///
    /// An explicit [`Strategy::ForcedOnMount`] implies the force-mount
    /// trigger input even when the flag itself is false, so an overridden
    /// strategy actually fires at creation.
    pub fn new(strategy: Strategy, force_mount: bool, condition_met: bool) -> Self {
        Self {
            strategy,
            force_mount: force_mount || strategy == Strategy::ForcedOnMount,
            condition_met,
            entered_view: false,
            initiated: false,
            state: SlotState::Empty,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Creation-time evaluation. The earliest possible trigger: when it
    /// fires, the latch makes every later visibility or condition signal
    /// moot (first-writer-wins).
    pub fn on_create(&mut self) -> bool {
        self.evaluate()
    }

    /// Handles an "entered view" signal from the visibility collaborator.
    ///
    /// The entered flag is sticky and `notify` reports only the first
    /// delivery, so the caller's notification fires exactly once even if
    /// the underlying signal misbehaves and delivers more than once.
    pub fn on_entered_view(&mut self) -> EnteredView {
        let notify = !self.entered_view;
        self.entered_view = true;
        EnteredView {
            notify,
            load: self.evaluate(),
        }
    }

    /// Handles a change of the external condition. May be called arbitrarily
    /// many times; a no-op once the latch is set.
    pub fn on_condition_change(&mut self, met: bool) -> bool {
        self.condition_met = met;
        self.evaluate()
    }

    /// Stores the resolved artifact. `Empty -> Loaded` is one-way and the
    /// artifact is set exactly once.
    pub fn complete(&mut self, artifact: T) {
        debug_assert!(self.initiated, "complete without an initiated retrieval");
        if matches!(self.state, SlotState::Empty) {
            self.state = SlotState::Loaded(artifact);
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SlotState::Loaded(_))
    }

    pub fn artifact(&self) -> Option<&T> {
        match &self.state {
            SlotState::Empty => None,
            SlotState::Loaded(artifact) => Some(artifact),
        }
    }

    fn evaluate(&mut self) -> bool {
        let map = ActivationMap::resolve(TriggerInputs {
            force_mount: self.force_mount,
            visible_default: self.entered_view && matches!(self.state, SlotState::Empty),
            condition_met: self.condition_met,
        });
        map.activates(self.strategy) && self.try_initiate()
    }

    fn try_initiate(&mut self) -> bool {
        if self.initiated || !matches!(self.state, SlotState::Empty) {
            return false;
        }
        self.initiated = true;
        true
    }
}
