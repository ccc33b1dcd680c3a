use dioxus::prelude::*;

/// Fans one produced value out to every configured sink.
///
/// `None` entries are skipped; every remaining sink is invoked with a clone
/// of the same value. Used to serve both the slot's own region handle and a
/// caller-supplied `external_ref` from a single `onmounted` attribute.
pub fn merge_sinks<T: Clone + 'static>(sinks: Vec<Option<EventHandler<T>>>) -> impl Fn(T) {
    move |value: T| {
        for sink in sinks.iter().flatten() {
            sink.call(value.clone());
        }
    }
}
