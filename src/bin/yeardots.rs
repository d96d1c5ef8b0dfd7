use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "yeardots", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the year-progress wallpaper as a PNG.
    Render(RenderArgs),
    /// Print the current year progress as JSON.
    Progress(ProgressArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Named visual preset (live, lockscreen, classic, poster).
    #[arg(long, default_value = "live")]
    preset: yeardots::Preset,

    /// JSON render config; replaces the preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels (malformed values fall back to the default).
    #[arg(short = 'W', long, allow_hyphen_values = true)]
    width: Option<String>,

    /// Output height in pixels (malformed values fall back to the default).
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Display name shown in the caption.
    #[arg(long)]
    name: Option<String>,

    /// Civil date to render instead of today (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Font file candidates, tried in order before the configured ones.
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct ProgressArgs {
    /// Civil date to report instead of today (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Progress(args) => cmd_progress(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn progress_for(date: Option<NaiveDate>) -> yeardots::YearProgress {
    match date {
        Some(d) => yeardots::YearProgress::for_date(d),
        None => yeardots::YearProgress::now(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let base = match &args.config {
        Some(path) => yeardots::RenderConfig::from_path(path)?,
        None => args.preset.config(),
    };

    let mut pairs = Vec::new();
    if let Some(w) = &args.width {
        pairs.push(("w", w.as_str()));
    }
    if let Some(h) = &args.height {
        pairs.push(("h", h.as_str()));
    }
    if let Some(name) = &args.name {
        pairs.push(("name", name.as_str()));
    }
    let req = yeardots::RenderRequest::from_pairs(pairs);

    let mut config = base.with_request(&req)?;
    if !args.fonts.is_empty() {
        let mut candidates = args.fonts.clone();
        candidates.append(&mut config.font.candidates);
        config.font.candidates = candidates;
    }

    let progress = progress_for(args.date);
    let image = yeardots::render_progress_png(&config, &progress, &yeardots::FsProbe)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &image.bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    if image.report.font.fallback {
        eprintln!("note: using fallback font family '{}'", image.report.font.family);
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_progress(args: ProgressArgs) -> anyhow::Result<()> {
    let progress = progress_for(args.date);
    let json = serde_json::to_string_pretty(&progress).context("serialize progress")?;
    println!("{json}");
    Ok(())
}
