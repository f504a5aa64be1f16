use std::sync::Arc;

use dioxus::prelude::*;
use kinetic_core::{KeyValueStore, KineticConfig, MemoryStore, RedbStore, ThemeStore};
use kinetic_ui::{use_theme_provider, DocumentThemeApplier};

use crate::get_data_dir;
use crate::pages::Gallery;
use crate::theme::GLOBAL_STYLES;

/// Open the on-disk preference store, or keep preferences in memory for
/// this session when the store cannot be opened.
fn open_preferences() -> Arc<dyn KeyValueStore> {
    let data_dir = get_data_dir();
    match RedbStore::in_dir(&data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to open preference store in {:?}: {}", data_dir, e);
            Arc::new(MemoryStore::new())
        }
    }
}

fn load_config() -> KineticConfig {
    let path = get_data_dir().join("kinetic.json");
    KineticConfig::load_or_default(&path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {:?}: {}", path, e);
        KineticConfig::default()
    })
}

/// Root application component.
///
/// Provides global styles, the shared theme and the interaction defaults.
#[component]
pub fn App() -> Element {
    use_theme_provider(|| ThemeStore::new(open_preferences(), Arc::new(DocumentThemeApplier)));
    let config = use_hook(load_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Gallery { config }
    }
}
