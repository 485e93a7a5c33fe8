use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use intertitle::{CpuSurface, TitleCard, export, random_seed, render_card};

#[derive(Parser, Debug)]
#[command(name = "intertitle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card file as a PNG.
    Render(RenderArgs),
    /// Write a starter card file.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input card JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Theme seed in [0,1). A fresh seed is drawn when omitted.
    #[arg(long)]
    seed: Option<f64>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Output card JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let card = TitleCard::from_path(&args.in_path)?;

    let seed = match args.seed {
        Some(s) if (0.0..1.0).contains(&s) => s,
        Some(s) => anyhow::bail!("seed {s} is outside [0,1)"),
        None => random_seed(),
    };

    let mut surface = CpuSurface::new(card.canvas)?;
    render_card(&mut surface, &card, seed)?;
    export::save_png(&surface.readback(), &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let card = TitleCard {
        top_text: "neon genesis".to_string(),
        top_text_caps: true,
        mid_text: "evangelion".to_string(),
        mid_text_caps: true,
        bot_text: "episode:1".to_string(),
        bot_text_caps: true,
        ep_text: "angel attack".to_string(),
        ep_text_caps: true,
        title_text: "A Cruel Angel's Thesis".to_string(),
        ..TitleCard::default()
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, card.to_json_pretty()?)
        .with_context(|| format!("write card '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
