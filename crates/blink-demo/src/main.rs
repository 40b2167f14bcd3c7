//! Blink demo entry point.
//!
//! Polls a monotonic clock at a fixed interval and feeds each reading to a
//! [`BlinkTimer`] whose output is rendered on the console.

mod console;

use anyhow::{Context, Result};
use blink_common::{BlinkConfig, Millis, MonotonicClock, TimeSource};
use blink_core::{BlinkTimer, OutputSink};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::console::ConsoleLed;

/// Blink demo command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "blink-demo",
    about = "Blink timer demo - toggles a console LED between two durations",
    version,
    long_about = None
)]
struct Args {
    /// Path to a configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// On duration, e.g. "1s" (overrides config file).
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    on: Option<Duration>,

    /// Off duration, e.g. "500ms" (overrides config file).
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    off: Option<Duration>,

    /// Polling interval (overrides config file).
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    interval: Option<Duration>,

    /// Total run time (overrides config file).
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    run_for: Option<Duration>,

    /// Disable ANSI colours.
    #[arg(long)]
    no_color: bool,

    /// Print the final timer state as JSON.
    #[arg(long)]
    dump_state: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting blink demo");

    let mut config = load_config(&args)?;
    apply_overrides(&mut config, &args);
    config.validate().context("Invalid configuration")?;

    info!(
        on = ?config.on_duration,
        off = ?config.off_duration,
        interval = ?config.poll_interval,
        "Configuration loaded"
    );

    run_demo(&config, args.dump_state)
}

/// Initialize logging with the specified log level.
fn init_logging(level: &str) {
    let filter = format!("blink_demo={level},blink_core={level},blink_common={level}");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `BLINK_CONFIG_PATH` environment variable
/// 3. `config/blink.toml` (local development)
/// 4. Built-in defaults
fn load_config(args: &Args) -> Result<BlinkConfig> {
    if let Some(config_path) = &args.config {
        info!(?config_path, "Loading config from command-line argument");
        return BlinkConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    if let Ok(env_path) = std::env::var("BLINK_CONFIG_PATH") {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from BLINK_CONFIG_PATH");
            return BlinkConfig::from_file(&config_path).with_context(|| {
                format!("Failed to load config from BLINK_CONFIG_PATH={env_path}")
            });
        }
        warn!(
            path = %env_path,
            "BLINK_CONFIG_PATH set but file does not exist, checking other locations"
        );
    }

    let local_path = PathBuf::from("config/blink.toml");
    if local_path.exists() {
        info!(?local_path, "Loading config from local path");
        return BlinkConfig::from_file(&local_path)
            .with_context(|| format!("Failed to load config from {}", local_path.display()));
    }

    info!("No config file found, using built-in defaults");
    Ok(BlinkConfig::default())
}

/// Command-line flags win over file values.
fn apply_overrides(config: &mut BlinkConfig, args: &Args) {
    if let Some(on) = args.on {
        config.on_duration = on;
    }
    if let Some(off) = args.off {
        config.off_duration = off;
    }
    if let Some(interval) = args.interval {
        config.poll_interval = interval;
    }
    if let Some(run_for) = args.run_for {
        config.run_for = run_for;
    }
    if args.no_color {
        config.color = false;
    }
}

/// Print the banner, run the polling loop and report the outcome.
fn run_demo(config: &BlinkConfig, dump_state: bool) -> Result<()> {
    let on_ms = config.on_duration_ms()?;
    let off_ms = config.off_duration_ms()?;
    let run_ms = config.run_for_ms()?;

    println!("\n=== Blink Timer Demo ===");
    println!("Configuration:");
    println!("  ON duration:  {on_ms}ms");
    println!("  OFF duration: {off_ms}ms");
    println!("  Total cycle:  {}ms", u64::from(on_ms) + u64::from(off_ms));
    println!("\nRunning for {}...\n", humantime::format_duration(config.run_for));

    let mut led = ConsoleLed::stdout(config.color);
    let clock = MonotonicClock::new();
    led.reset_time();

    let mut timer = BlinkTimer::new(&mut led, on_ms, off_ms);
    let poll_interval = config.poll_interval;
    let updates = run_loop(&mut timer, &clock, run_ms, || {
        std::thread::sleep(poll_interval);
    });

    let state = timer.state();
    info!(updates, final_state = %state.level(), "Demo complete");

    println!("\n=== Demo Complete ===");
    println!("Final LED state: {}", led.level());
    if dump_state {
        let json = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
        println!("{json}");
    }

    Ok(())
}

/// Feed clock readings to the timer until `run_ms` has passed.
///
/// `pause` runs between two updates. Returns the number of updates made.
fn run_loop<S, T, P>(timer: &mut BlinkTimer<S>, clock: &T, run_ms: Millis, mut pause: P) -> u64
where
    S: OutputSink,
    T: TimeSource,
    P: FnMut(),
{
    let mut updates = 0u64;

    while clock.millis() < run_ms {
        let now = clock.millis();
        timer.update(now);
        updates += 1;
        debug!(now_ms = now, state = %timer.level(), "update");
        pause();
    }

    updates
}
