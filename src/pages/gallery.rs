//! Gallery page - every interaction on one scrolling page.
//!
//! Header with the theme toggle, a typewriter hero, a grid of tilt cards and
//! a row of counters placed below the fold so they start when scrolled to.

use dioxus::prelude::*;
use kinetic_core::{CounterConfig, Easing, KineticConfig, TiltConfig, TypewriterConfig};
use kinetic_ui::{AnimatedCounter, ThemeToggle, TiltCard, TypewriterText};

const HERO_STRINGS: [&str; 4] = ["tilt cards", "typewriters", "counters", "themes"];

/// Hero strings from `kinetic.json`, or the built-in set when none are configured.
fn hero_config(config: &KineticConfig) -> TypewriterConfig {
    if config.typewriter.strings.is_empty() {
        TypewriterConfig {
            strings: HERO_STRINGS.iter().map(|s| s.to_string()).collect(),
            ..config.typewriter.clone()
        }
    } else {
        config.typewriter.clone()
    }
}

struct CardSpec {
    title: &'static str,
    body: &'static str,
    config: TiltConfig,
}

fn card_specs(base: TiltConfig) -> [CardSpec; 3] {
    [
        CardSpec {
            title: "Default",
            body: "Configured tilt with a glare that follows the pointer.",
            config: base,
        },
        CardSpec {
            title: "Subtle",
            body: "Five degrees, no scale, no glare.",
            config: TiltConfig {
                max_tilt_degrees: 5.0,
                hover_scale: 1.0,
                enable_glare: false,
                ..base
            },
        },
        CardSpec {
            title: "Dramatic",
            body: "Thirty degrees with a quick transition.",
            config: TiltConfig {
                max_tilt_degrees: 30.0,
                hover_scale: 1.1,
                transition_speed_ms: 120,
                ..base
            },
        },
    ]
}

/// Gallery page component.
#[component]
pub fn Gallery(config: KineticConfig) -> Element {
    let hero = hero_config(&config);
    let cards = card_specs(config.tilt);
    let configured = config.counter;
    let downloads = CounterConfig {
        easing: Easing::EaseOutExpo,
        ..CounterConfig::to(12_500.0)
    };
    let countdown = CounterConfig {
        start_value: 100.0,
        end_value: 0.0,
        ..Default::default()
    };

    rsx! {
        main { class: "gallery",
            header { class: "gallery-header",
                h1 { class: "page-title", "Kinetic" }
                ThemeToggle {}
            }

            section { class: "hero",
                p { class: "hero-line",
                    "Built for "
                    span { class: "hero-accent",
                        TypewriterText { config: hero }
                    }
                }
            }

            section { class: "card-grid",
                for card in cards {
                    TiltCard { key: "{card.title}", config: card.config,
                        h3 { "{card.title}" }
                        p { "{card.body}" }
                    }
                }
            }

            div { class: "scroll-hint", "Scroll down" }

            section { class: "stats",
                div { class: "stat",
                    AnimatedCounter { config: configured }
                    span { class: "stat-label", "Configured" }
                }
                div { class: "stat",
                    AnimatedCounter { config: downloads, suffix: "+" }
                    span { class: "stat-label", "Downloads" }
                }
                div { class: "stat",
                    AnimatedCounter { config: countdown, suffix: "%" }
                    span { class: "stat-label", "Countdown" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_uses_built_in_strings_when_unconfigured() {
        let hero = hero_config(&KineticConfig::default());
        assert_eq!(hero.strings.len(), HERO_STRINGS.len());
        assert_eq!(hero.pause_ms, 2000);
    }

    #[test]
    fn hero_prefers_configured_strings() {
        let mut config = KineticConfig::default();
        config.typewriter.strings = vec!["mine".to_string()];
        assert_eq!(hero_config(&config).strings, vec!["mine"]);
    }

    #[test]
    fn card_specs_are_valid() {
        for card in card_specs(TiltConfig::default()) {
            assert!(card.config.validate().is_ok(), "{}", card.title);
        }
    }
}
