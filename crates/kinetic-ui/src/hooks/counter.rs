//! Count-up hook triggered by element visibility.

use dioxus::prelude::*;
use kinetic_core::{run_counter, CancellationToken, Counter, CounterConfig};

use crate::platform::{read_preferences, visibility_supported};

/// Handle returned by [`use_counter`].
#[derive(Clone, Copy, PartialEq)]
pub struct UseCounter {
    counter: Signal<Option<Counter>>,
    value: Signal<i64>,
    cancel: Signal<CancellationToken>,
}

impl UseCounter {
    /// Currently displayed value.
    pub fn value(&self) -> i64 {
        (self.value)()
    }

    /// Handle the element's `onvisible` event.
    ///
    /// Errors reading the intersection state count as visible.
    pub fn on_visible(&mut self, evt: VisibleEvent) {
        let visible = evt.data().is_intersecting().unwrap_or(true);
        if visible {
            self.trigger();
        }
    }

    /// Handle `onmounted`: without visibility support, start right away.
    pub fn on_mounted(&mut self) {
        let mut this = *self;
        spawn(async move {
            if !visibility_supported().await {
                tracing::debug!("No visibility signal; counter starts immediately");
                this.trigger();
            }
        });
    }

    /// Start the animation. Only the first call on an instance has an effect.
    pub fn trigger(&mut self) {
        let running = {
            let mut guard = self.counter.write();
            match guard.as_mut() {
                Some(counter) => {
                    if counter.trigger() {
                        Some(counter.clone())
                    } else {
                        None
                    }
                }
                None => None,
            }
        };
        let Some(mut counter) = running else {
            return;
        };

        let mut value = self.value;
        let token = self.cancel.peek().clone();
        spawn(async move {
            if read_preferences().await.reduced_motion {
                value.set(counter.finish());
                return;
            }
            run_counter(counter, token, move |v| value.set(v)).await;
        });
    }
}

/// Count from `config.start_value` to `config.end_value` once visible.
///
/// Invalid configuration is logged and the end value (or zero for non-finite
/// input) is shown statically.
pub fn use_counter(config: CounterConfig) -> UseCounter {
    let counter = use_signal(|| match Counter::new(config) {
        Ok(counter) => Some(counter),
        Err(e) => {
            tracing::warn!("Counter not started: {}", e);
            None
        }
    });
    let value = use_signal(|| {
        let fallback = if config.end_value.is_finite() {
            config.end_value.floor() as i64
        } else {
            0
        };
        Option::as_ref(&*counter.peek()).map_or(fallback, Counter::value)
    });
    let cancel = use_signal(CancellationToken::new);

    use_drop(move || cancel.peek().cancel());

    UseCounter {
        counter,
        value,
        cancel,
    }
}
