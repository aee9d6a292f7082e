use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use breath_core::{
    find_preset, overlay_text, presets, ring_is_active, BreathController, BreathingConfig,
    FrameClock, SessionState, DEFAULT_SESSION_SEC, NUM_RINGS, REMAINING_EPSILON_SEC,
};
use clap::Parser;

/// Guided breathing timer for the terminal.
#[derive(Parser, Debug)]
#[command(name = "breathe", version, about)]
struct Args {
    /// Built-in pattern to follow (see --list)
    #[arg(short, long, default_value = "relax")]
    preset: String,

    /// Custom pattern as inhale,hold,exhale,pause seconds; overrides --preset
    #[arg(long, value_delimiter = ',')]
    pattern: Option<Vec<f64>>,

    /// Session length in seconds
    #[arg(short, long)]
    total: Option<f64>,

    /// Update rate of the frame loop
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Rings drawn in the progress column
    #[arg(long, default_value_t = NUM_RINGS)]
    rings: usize,

    /// Print the built-in patterns and exit
    #[arg(long)]
    list: bool,
}

fn resolve_config(args: &Args) -> anyhow::Result<BreathingConfig> {
    if let Some(values) = &args.pattern {
        let [inhale, hold, exhale, pause] = values[..] else {
            bail!(
                "--pattern expects 4 comma-separated values, got {}",
                values.len()
            );
        };
        let total = args.total.unwrap_or(DEFAULT_SESSION_SEC);
        return BreathingConfig::new(inhale, hold, exhale, pause, total)
            .context("invalid custom pattern");
    }

    let preset = find_preset(&args.preset)?;
    log::info!("using preset {}", preset.label);
    match args.total {
        Some(total) => preset.with_total(total).context("invalid session length"),
        None => Ok(preset.config),
    }
}

fn print_presets(out: &mut impl Write) -> io::Result<()> {
    for preset in presets() {
        let c = &preset.config;
        writeln!(
            out,
            "{:<10} {:<30} {}/{}/{}/{}s  {:.1} breaths/min",
            preset.id,
            preset.label,
            c.inhale,
            c.hold,
            c.exhale,
            c.pause,
            c.breaths_per_minute()
        )?;
    }
    Ok(())
}

fn render_line(out: &mut impl Write, state: &SessionState, rings: usize) -> io::Result<()> {
    let column: String = (0..rings)
        .map(|i| {
            if ring_is_active(state, i, rings) {
                '●'
            } else {
                '○'
            }
        })
        .collect();
    write!(out, "\r{column}  {:<20}", overlay_text(state))?;
    out.flush()
}

/// Tick once and redraw. The overlay line is ended before the finishing tick
/// so the controller's completion log starts on a fresh terminal line.
fn advance_frame(
    out: &mut impl Write,
    controller: &mut BreathController,
    dt: f64,
    rings: usize,
) -> io::Result<()> {
    if dt + REMAINING_EPSILON_SEC >= controller.remaining() {
        writeln!(out)?;
        out.flush()?;
    }
    controller.tick(dt);
    render_line(out, &controller.state(), rings)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        print_presets(&mut out)?;
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));

    let mut controller = BreathController::new(config);
    controller.start(config);
    let mut clock = FrameClock::new();
    clock.tick();

    render_line(&mut out, &controller.state(), args.rings)?;
    while controller.is_running() {
        thread::sleep(frame);
        advance_frame(&mut out, &mut controller, clock.tick(), args.rings)?;
    }
    writeln!(out)?;

    log::info!(
        "completed {} breaths in {:.0}s",
        controller.cycles_completed(),
        controller.elapsed()
    );
    Ok(())
}
