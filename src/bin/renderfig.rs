use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "renderfig", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the overview figure for a results directory.
    Build(BuildArgs),
    /// Print the effective configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Results root holding one directory per scene.
    #[arg(default_value = "Results")]
    root: PathBuf,

    /// JSON configuration overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path (defaults to `<root>/Overview.svg`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write a PNG preview next to the SVG.
    #[arg(long, default_value_t = false)]
    png: bool,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// JSON configuration overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "renderfig=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<renderfig::FigureConfig> {
    match path {
        Some(p) => Ok(renderfig::FigureConfig::from_path(p)?),
        None => Ok(renderfig::FigureConfig::default()),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let opts = renderfig::RunOpts {
        out: args.out.clone(),
        png_preview: args.png,
    };
    let doc = renderfig::run(&args.root, &cfg, &opts)
        .with_context(|| format!("build overview for '{}'", args.root.display()))?;

    let out = args
        .out
        .unwrap_or_else(|| renderfig::default_output_path(&args.root, &cfg));
    eprintln!("wrote {} ({} scenes)", out.display(), doc.rows.len());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
