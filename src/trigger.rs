//! The trigger resolver: a pure mapping from the three raw triggering
//! signals to a per-strategy activation verdict.
//!
//! The resolver never prioritizes between strategies. Every entry of the
//! [`ActivationMap`] carries its own independent truth value and the
//! [`SlotController`](crate::slot::SlotController) consults exactly the one
//! entry matching its configured [`Strategy`].

use serde::{Deserialize, Serialize};

/// When a slot starts loading. Fixed at construction, immutable for the
/// lifetime of the slot instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Load as soon as the slot region is visible, or immediately if it is
    /// already visible at creation time.
    Default,
    /// Load unconditionally at creation time, independent of visibility.
    ForcedOnMount,
    /// Load only when an externally supplied boolean condition becomes true.
    ConditionGated,
}

impl Strategy {
    /// Derives the strategy from the configuration flags when no explicit
    /// strategy is supplied.
    ///
    /// `force_mount` wins, else a caller that configured a condition at all
    /// (regardless of its current value) gets [`Strategy::ConditionGated`],
    /// else [`Strategy::Default`].
    pub fn derive(force_mount: bool, condition_configured: bool) -> Self {
        if force_mount {
            Strategy::ForcedOnMount
        } else if condition_configured {
            Strategy::ConditionGated
        } else {
            Strategy::Default
        }
    }
}

/// The raw signal values a single trigger evaluation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerInputs {
    /// The caller requested forced mount-time loading.
    pub force_mount: bool,
    /// The default-strategy condition holds: the region entered the viewport
    /// and no artifact is loaded yet.
    pub visible_default: bool,
    /// The caller's external condition currently holds.
    pub condition_met: bool,
}

/// One activation verdict per [`Strategy`], recomputed from scratch on every
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivationMap {
    default: bool,
    forced_on_mount: bool,
    condition_gated: bool,
}

impl ActivationMap {
    /// Resolves the activation map for the given inputs.
    ///
    /// Pure and stateless: calling it repeatedly with the same inputs yields
    /// the same map, and all-false inputs yield the all-false map.
    pub fn resolve(inputs: TriggerInputs) -> Self {
        Self {
            default: inputs.visible_default,
            forced_on_mount: inputs.force_mount,
            condition_gated: inputs.condition_met,
        }
    }

    /// Whether the entry for `strategy` says "start loading now".
    pub fn activates(&self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Default => self.default,
            Strategy::ForcedOnMount => self.forced_on_mount,
            Strategy::ConditionGated => self.condition_gated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_false_inputs_fire_nothing() {
        let map = ActivationMap::resolve(TriggerInputs::default());
        assert!(!map.activates(Strategy::Default));
        assert!(!map.activates(Strategy::ForcedOnMount));
        assert!(!map.activates(Strategy::ConditionGated));
    }

    #[test]
    fn entries_are_independent() {
        let map = ActivationMap::resolve(TriggerInputs {
            force_mount: true,
            visible_default: false,
            condition_met: true,
        });
        assert!(!map.activates(Strategy::Default));
        assert!(map.activates(Strategy::ForcedOnMount));
        assert!(map.activates(Strategy::ConditionGated));
    }

    #[test]
    fn resolution_is_repeatable() {
        let inputs = TriggerInputs {
            force_mount: false,
            visible_default: true,
            condition_met: false,
        };
        assert_eq!(ActivationMap::resolve(inputs), ActivationMap::resolve(inputs));
    }

    #[test]
    fn derivation_precedence() {
        assert_eq!(Strategy::derive(true, true), Strategy::ForcedOnMount);
        assert_eq!(Strategy::derive(true, false), Strategy::ForcedOnMount);
        assert_eq!(Strategy::derive(false, true), Strategy::ConditionGated);
        assert_eq!(Strategy::derive(false, false), Strategy::Default);
    }
}
