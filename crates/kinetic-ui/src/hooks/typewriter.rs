//! Cycling typewriter hook.

use dioxus::prelude::*;
use kinetic_core::{run_typewriter, CancellationToken, Typewriter, TypewriterConfig};

use crate::platform::read_preferences;

/// Animate through `config.strings`, returning the rendered text.
///
/// Under reduced motion, or when the configuration is rejected (empty list),
/// the text is the first string (or empty) and no timer ever runs. The timer
/// chain is cancelled when the component unmounts.
pub fn use_typewriter(config: TypewriterConfig) -> ReadOnlySignal<String> {
    let mut text = use_signal(String::new);
    let cancel = use_hook(CancellationToken::new);

    use_hook({
        let cancel = cancel.clone();
        move || {
            let machine = match Typewriter::new(config) {
                Ok(machine) => machine,
                Err(e) => {
                    tracing::warn!("Typewriter not started: {}", e);
                    return;
                }
            };

            spawn(async move {
                if read_preferences().await.reduced_motion {
                    text.set(machine.current_target().to_string());
                    return;
                }
                run_typewriter(machine, cancel, move |rendered, _phase| {
                    text.set(rendered.to_string())
                })
                .await;
            });
        }
    });

    use_drop(move || cancel.cancel());

    text.into()
}
