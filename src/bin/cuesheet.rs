use std::{
    fs::File,
    io::{BufReader, BufWriter, Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cuesheet", version)]
struct Cli {
    /// Log every fired action and lerp.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a script.
    Validate(InArgs),
    /// Run a script on a simulated clock, printing slot values per frame as JSON lines.
    Trace(TraceArgs),
    /// Run a script on a simulated clock and write the last frame as a PNG.
    Render(RenderArgs),
    /// Write the built-in demo script.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated milliseconds per frame (overrides the script's settings).
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Cancel after this many frames (overrides the script's settings).
    #[arg(long)]
    max_frames: Option<u64>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    sim: SimArgs,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    sim: SimArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Color slot to paint as background (overrides the script's `background`).
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Render(args) => cmd_render(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn read_script(path: &Path) -> anyhow::Result<cuesheet::ScriptDoc> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let mut s = String::new();
    BufReader::new(f)
        .read_to_string(&mut s)
        .with_context(|| format!("read script '{}'", path.display()))?;
    let doc = cuesheet::ScriptDoc::from_json(&s).with_context(|| "parse script JSON")?;
    Ok(doc)
}

fn settings_for(doc: &cuesheet::ScriptDoc, sim: &SimArgs) -> anyhow::Result<cuesheet::RunSettings> {
    let mut settings = doc.settings;
    if let Some(ms) = sim.interval_ms {
        settings.frame_interval_ms = ms;
    }
    if let Some(max) = sim.max_frames {
        settings.max_frames = max;
    }
    settings.validate()?;
    Ok(settings)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_validate(args: InArgs) -> anyhow::Result<()> {
    let doc = read_script(&args.in_path)?;
    let prepared = doc.prepare()?;
    println!(
        "ok: {} slots, {} actions, {} ms",
        prepared.state.len(),
        prepared.timeline.len(),
        prepared.timeline.total_duration_ms()
    );
    Ok(())
}

/// Records one JSON line per presented frame.
struct TraceScene<W: std::io::Write> {
    out: W,
    frame: u64,
    interval_ms: u64,
    error: Option<std::io::Error>,
}

impl<W: std::io::Write> cuesheet::Scene for TraceScene<W> {
    fn render(&mut self, state: &cuesheet::AnimState, _surface: &mut dyn cuesheet::Surface) {
        if self.error.is_some() {
            return;
        }
        let slots: serde_json::Map<String, serde_json::Value> = state
            .iter()
            .map(|(_, name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();
        let line = serde_json::json!({
            "frame": self.frame,
            "t_ms": self.frame.saturating_mul(self.interval_ms),
            "slots": slots,
        });
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
        self.frame += 1;
    }
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let doc = read_script(&args.sim.in_path)?;
    let settings = settings_for(&doc, &args.sim)?;
    let cuesheet::Prepared {
        mut state,
        timeline,
        ..
    } = doc.prepare()?;

    let out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let mut host = cuesheet::SimulatedHost::new(cuesheet::Millis::ZERO, settings.frame_interval_ms)
        .with_max_frames(settings.max_frames);
    let mut scene = TraceScene {
        out,
        frame: 0,
        interval_ms: settings.frame_interval_ms,
        error: None,
    };
    let mut surface = cuesheet::PixelSurface::new(cuesheet::Canvas {
        width: 1,
        height: 1,
    })?;

    let outcome = cuesheet::run(&mut surface, &timeline, &mut state, &mut host, &mut scene)?;
    if let Some(e) = scene.error.take() {
        return Err(e).with_context(|| "write trace");
    }
    scene.out.flush().with_context(|| "flush trace")?;

    eprintln!("{:?} after {} frames", outcome, host.frames_presented());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut doc = read_script(&args.sim.in_path)?;
    let settings = settings_for(&doc, &args.sim)?;
    if let Some(bg) = args.background {
        doc.background = Some(bg);
    }
    let cuesheet::Prepared {
        mut state,
        timeline,
        background,
    } = doc.prepare()?;

    let mut surface = cuesheet::PixelSurface::new(settings.canvas)?;
    cuesheet::Surface::fill(&mut surface, settings.clear);

    let mut host = cuesheet::SimulatedHost::new(cuesheet::Millis::ZERO, settings.frame_interval_ms)
        .with_max_frames(settings.max_frames);
    let outcome = match background {
        Some(slot) => cuesheet::run(
            &mut surface,
            &timeline,
            &mut state,
            &mut host,
            &mut cuesheet::BackgroundFill::new(slot),
        )?,
        None => cuesheet::run(&mut surface, &timeline, &mut state, &mut host, &mut ())?,
    };

    ensure_parent_dir(&args.out)?;
    surface.save_png(&args.out)?;

    eprintln!(
        "{:?} after {} frames; wrote {}",
        outcome,
        host.frames_presented(),
        args.out.display()
    );
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let json = cuesheet::ScriptDoc::demo().to_json_pretty()?;
    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write demo script '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
