//! Default visibility collaborator: a one-shot "entered view" signal for a
//! DOM region, installed through `document::eval`.

use dioxus::prelude::*;

use crate::utils::CCStr;

/// Options forwarded to the viewport observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportOptions {
    /// Fraction of the region that must intersect the viewport before the
    /// signal fires, in `[0, 1]`.
    pub threshold: f64,
    /// Margin expanding the trigger region around the viewport, in CSS
    /// margin syntax (e.g. `"1000px 0px"`).
    pub margin: CCStr,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            margin: CCStr::from("1000px 0px"),
        }
    }
}

impl ViewportOptions {
    /// The threshold as actually forwarded to the observer. An
    /// out-of-range or non-finite value would make the
    /// IntersectionObserver constructor throw inside the eval script and
    /// silently disable the slot, so it is clamped to `[0, 1]` here.
    fn effective_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            Self::default().threshold
        }
    }

    /// The margin as actually forwarded to the observer. The string is
    /// interpolated into the eval script, so anything beyond CSS margin
    /// syntax (lengths, percentages, spaces) is rejected and replaced by
    /// the default.
    fn effective_margin(&self) -> CCStr {
        let valid = !self.margin.is_empty()
            && self
                .margin
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '-' | '%'));
        if valid {
            self.margin.clone()
        } else {
            log::warn!("rejecting viewport margin {:?}", &*self.margin);
            Self::default().margin
        }
    }
}

/// Observes the DOM element with id `region_id` and returns a signal that
/// flips to `true` the first time the region intersects the viewport, then
/// never changes again.
///
/// The observer disconnects itself after the first intersection, so the
/// signal is one-shot by construction. A region already in view when the
/// observer is installed fires immediately.
pub fn use_entered_view(region_id: CCStr, options: ViewportOptions) -> ReadOnlySignal<bool> {
    let mut entered = use_signal(|| false);

    // Installed from an effect so the region element is in the DOM by the
    // time the script looks it up. The options are fixed at construction:
    // no reactive dependency, the effect runs once.
    use_effect(move || {
        let js = format!(
            r#"
            const target = document.getElementById("{region_id}");
            if (target === null) {{
                return;
            }}
            const observer = new IntersectionObserver(
                (entries) => {{
                    if (entries.some((entry) => entry.isIntersecting)) {{
                        observer.disconnect();
                        dioxus.send(true);
                    }}
                }},
                {{ threshold: {threshold}, rootMargin: "{margin}" }},
            );
            observer.observe(target);
            "#,
            threshold = options.effective_threshold(),
            margin = options.effective_margin(),
        );
        let region_id = region_id.clone();
        spawn(async move {
            let mut eval = document::eval(&js);
            match eval.recv::<bool>().await {
                Ok(_) => entered.set(true),
                // The channel closing means the slot was torn down before
                // the region ever entered the viewport.
                Err(e) => log::debug!("viewport observer for {region_id} closed: {e:?}"),
            }
        });
    });

    entered.into()
}
