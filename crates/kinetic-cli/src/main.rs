//! Kinetic CLI
//!
//! Thin wrapper around kinetic-core for command-line usage: manage the
//! persisted theme and preview the interaction state machines frame by frame.
//!
//! ## Usage
//!
//! ```bash
//! # Show the resolved theme and where it came from
//! kinetic theme get
//!
//! # Persist a theme / flip it
//! kinetic theme set dark
//! kinetic theme toggle
//!
//! # Derive a tilt frame for a pointer over a 300x200 card
//! kinetic tilt --width 300 --height 200 --x 75 --y 50
//!
//! # Print one full typewriter cycle
//! kinetic typewriter "fast" "safe" "fearless"
//!
//! # Sample a counter every 250ms
//! kinetic counter --end 1000 --step-ms 250
//!
//! # List everything in the preference store
//! kinetic prefs
//!
//! # Show or write the interaction defaults
//! kinetic config show
//! kinetic config init
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kinetic_core::{
    spawn_counter, spawn_typewriter, Counter, CounterConfig, Easing, ElementRect, KineticConfig,
    NoopApplier, Point, RedbStore, StaticPreferences, Theme, ThemeStore, Tilt, Typewriter,
    THEME_STORAGE_KEY,
};

/// Kinetic - interaction previews and theme persistence
#[derive(Parser)]
#[command(name = "kinetic")]
#[command(version = "0.1.0")]
#[command(about = "Kinetic - interaction previews and theme persistence")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir/kinetic)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Interaction defaults file (default: <data-dir>/kinetic.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Persisted light/dark theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Derive the tilt transform for one pointer position
    Tilt {
        /// Element width in pixels
        #[arg(long)]
        width: f64,
        /// Element height in pixels
        #[arg(long)]
        height: f64,
        /// Pointer x, relative to the element's left edge
        #[arg(long)]
        x: f64,
        /// Pointer y, relative to the element's top edge
        #[arg(long)]
        y: f64,
        /// Override the maximum tilt in degrees
        #[arg(long)]
        max_tilt: Option<f64>,
        /// Override the hover scale
        #[arg(long)]
        scale: Option<f64>,
        /// Disable the glare highlight
        #[arg(long)]
        no_glare: bool,
        /// Simulate the reduced-motion preference
        #[arg(long)]
        reduced_motion: bool,
        /// Show the frame after the pointer leaves instead
        #[arg(long)]
        leave: bool,
    },

    /// Print typewriter frames
    Typewriter {
        /// Strings to cycle (default: from the config file)
        strings: Vec<String>,
        /// Number of ticks to print (default: one full cycle)
        #[arg(long)]
        ticks: Option<usize>,
        /// Play in real time for this many milliseconds instead
        #[arg(long)]
        realtime_ms: Option<u64>,
    },

    /// Print counter frames
    Counter {
        /// Target value
        #[arg(long, allow_hyphen_values = true)]
        end: Option<f64>,
        /// Start value
        #[arg(long, allow_hyphen_values = true)]
        start: Option<f64>,
        /// Animation duration in milliseconds
        #[arg(long)]
        duration: Option<f64>,
        /// Easing curve
        #[arg(long, value_enum)]
        easing: Option<EasingArg>,
        /// Sampling step in milliseconds
        #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
        step_ms: u64,
        /// Run in real time at display rate instead of sampling
        #[arg(long)]
        realtime: bool,
    },

    /// List every stored preference
    Prefs,

    /// Interaction defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the resolved theme
    Get {
        /// System color scheme to assume when nothing is persisted
        #[arg(long)]
        system: Option<Theme>,
    },
    /// Persist a theme
    Set {
        /// light or dark
        theme: Theme,
    },
    /// Flip between light and dark
    Toggle {
        /// System color scheme to assume when nothing is persisted
        #[arg(long)]
        system: Option<Theme>,
    },
    /// Forget the persisted theme
    Reset,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EasingArg {
    Linear,
    Quad,
    Cubic,
    Quart,
    Expo,
    Sine,
}

impl From<EasingArg> for Easing {
    fn from(arg: EasingArg) -> Self {
        match arg {
            EasingArg::Linear => Easing::Linear,
            EasingArg::Quad => Easing::EaseOutQuad,
            EasingArg::Cubic => Easing::EaseOutCubic,
            EasingArg::Quart => Easing::EaseOutQuart,
            EasingArg::Expo => Easing::EaseOutExpo,
            EasingArg::Sine => Easing::EaseOutSine,
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (<platform data dir>/kinetic)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinetic")
}

fn system_preferences(system: Option<Theme>) -> StaticPreferences {
    match system {
        Some(Theme::Dark) => StaticPreferences::dark(),
        Some(Theme::Light) => StaticPreferences::light(),
        None => StaticPreferences::unavailable(),
    }
}

/// Hook defaults, read only by the commands that use them.
fn load_config(path: &Path) -> Result<KineticConfig> {
    KineticConfig::load_or_default(path).with_context(|| format!("loading {}", path.display()))
}

fn open_theme_store(data_dir: &Path) -> Result<ThemeStore> {
    let kv = RedbStore::in_dir(data_dir)
        .with_context(|| format!("opening preference store in {}", data_dir.display()))?;
    Ok(ThemeStore::new(std::sync::Arc::new(kv), std::sync::Arc::new(NoopApplier)))
}

fn print_theme(store: &ThemeStore) {
    println!("Theme: {}", store.current());
    println!("Source: {:?}", store.source());
}

fn run_theme(action: ThemeAction, data_dir: &Path) -> Result<()> {
    match action {
        ThemeAction::Get { system } => {
            let store = open_theme_store(data_dir)?;
            store.initialize(&system_preferences(system));
            print_theme(&store);
        }
        ThemeAction::Set { theme } => {
            let store = open_theme_store(data_dir)?;
            store.set(theme);
            print_theme(&store);
        }
        ThemeAction::Toggle { system } => {
            let store = open_theme_store(data_dir)?;
            let before = store.initialize(&system_preferences(system));
            let after = store.toggle();
            println!("Theme: {} -> {}", before, after);
        }
        ThemeAction::Reset => {
            let kv = RedbStore::in_dir(data_dir)?;
            if kv.remove(THEME_STORAGE_KEY)? {
                println!("Persisted theme cleared.");
            } else {
                println!("No persisted theme.");
            }
        }
    }
    Ok(())
}

fn print_typewriter_frame(elapsed_ms: u64, phase: impl std::fmt::Display, text: &str) {
    println!("{:>7}ms  {:<8}  |{}|", elapsed_ms, phase, text);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config_path = cli
        .config
        .unwrap_or_else(|| data_dir.join("kinetic.json"));

    match cli.command {
        Commands::Theme { action } => run_theme(action, &data_dir)?,

        Commands::Tilt {
            width,
            height,
            x,
            y,
            max_tilt,
            scale,
            no_glare,
            reduced_motion,
            leave,
        } => {
            let mut tilt_config = load_config(&config_path)?.tilt;
            if let Some(max) = max_tilt {
                tilt_config.max_tilt_degrees = max;
            }
            if let Some(scale) = scale {
                tilt_config.hover_scale = scale;
            }
            if no_glare {
                tilt_config.enable_glare = false;
            }

            let prefs = StaticPreferences::unavailable().with_reduced_motion(reduced_motion);
            let mut tilt = Tilt::new(tilt_config, &prefs)?;
            let rect = ElementRect::sized(width, height);

            let frame = tilt.pointer_move(rect, Point::new(x, y));
            let frame = if leave { tilt.pointer_leave() } else { frame };

            match frame {
                Some(frame) => {
                    println!("rotateX: {:.2}deg", frame.rotate_x);
                    println!("rotateY: {:.2}deg", frame.rotate_y);
                    println!("scale: {}", frame.scale);
                    if let Some(glare) = frame.glare {
                        println!("glare: {:.1}% {:.1}%", glare.x_percent, glare.y_percent);
                    }
                    println!("style: {}", frame.style(tilt_config.transition_speed_ms));
                }
                None => println!("Tilt inert (reduced motion requested)"),
            }
        }

        Commands::Typewriter {
            strings,
            ticks,
            realtime_ms,
        } => {
            let mut tw_config = load_config(&config_path)?.typewriter;
            if !strings.is_empty() {
                tw_config.strings = strings;
            }
            let mut machine = Typewriter::new(tw_config)?;

            if let Some(window) = realtime_ms {
                let started = tokio::time::Instant::now();
                let handle = spawn_typewriter(machine, move |text, phase| {
                    print_typewriter_frame(started.elapsed().as_millis() as u64, phase, text);
                });
                tokio::time::sleep(Duration::from_millis(window)).await;
                handle.cancel();
                handle.join().await;
                return Ok(());
            }

            let ticks = ticks.unwrap_or_else(|| machine.ticks_per_cycle());
            let mut elapsed = machine.initial_delay();
            print_typewriter_frame(0, machine.phase(), machine.text());
            for _ in 0..ticks {
                let tick = machine.tick();
                print_typewriter_frame(elapsed.as_millis() as u64, tick.phase, machine.text());
                elapsed += tick.delay;
            }
        }

        Commands::Counter {
            end,
            start,
            duration,
            easing,
            step_ms,
            realtime,
        } => {
            let mut counter_config: CounterConfig = load_config(&config_path)?.counter;
            if let Some(end) = end {
                counter_config.end_value = end;
            }
            if let Some(start) = start {
                counter_config.start_value = start;
            }
            if let Some(duration) = duration {
                counter_config.duration_ms = duration;
            }
            if let Some(easing) = easing {
                counter_config.easing = easing.into();
            }

            let mut counter = Counter::new(counter_config)?;
            counter.trigger();

            if realtime {
                let started = tokio::time::Instant::now();
                let handle = spawn_counter(counter, move |value| {
                    println!("{:>7}ms  {}", started.elapsed().as_millis(), value);
                });
                handle.join().await;
                return Ok(());
            }

            let mut t = 0u64;
            loop {
                let value = counter.sample(Duration::from_millis(t));
                println!("{:>7}ms  {}", t, value);
                if counter.is_finished() {
                    break;
                }
                t += step_ms;
            }
        }

        Commands::Prefs => {
            let kv = RedbStore::in_dir(&data_dir)?;
            let entries = kv.entries()?;
            if entries.is_empty() {
                println!("No stored preferences.");
            }
            for (key, value) in entries {
                println!("{} = {}", key, value);
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = load_config(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    anyhow::bail!(
                        "{} already exists (use --force to overwrite)",
                        config_path.display()
                    );
                }
                KineticConfig::default().save(&config_path)?;
                println!("Wrote {}", config_path.display());
            }
        },
    }

    Ok(())
}
