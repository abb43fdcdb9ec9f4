//! Phish-Shield - Main Entry Point
//!
//! One-shot: `phish-shield --mode email "Your account is suspended..."`
//! Interactive: `phish-shield` (one check per line)

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use phish_shield::api::{self, OutputFormat, Session};
use phish_shield::constants::{APP_NAME, APP_VERSION};
use phish_shield::logic::features::LayoutInfo;
use phish_shield::{Detector, DetectorConfig, Mode};

#[derive(Parser)]
#[command(name = "phish-shield", version, about = "Smart Phishing Detector (URL + Email)")]
struct Cli {
    /// What the input is: url or email
    #[arg(long, short, default_value = "url")]
    mode: Mode,

    /// Fix the forest seed (reproducible models)
    #[arg(long)]
    seed: Option<u64>,

    /// Trees per forest
    #[arg(long)]
    trees: Option<usize>,

    /// Depth limit per tree (default: grow until pure)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Never colour the verdict
    #[arg(long)]
    no_color: bool,

    /// Text to check; omit for the interactive prompt
    text: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let mut config = DetectorConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(trees) = cli.trees {
        config = config.with_trees(trees);
    }
    if cli.max_depth.is_some() {
        config = config.with_max_depth(cli.max_depth);
    }

    let detector = Detector::initialize(&config).context("model training failed")?;
    for mode in Mode::ALL {
        let layout = LayoutInfo::current(mode);
        log::info!(
            "{} model ready: layout v{} ({:08x}) [{}], trained at {}",
            mode.title(),
            layout.version,
            layout.hash,
            layout.feature_names.join(", "),
            detector.model_info(mode).trained_at.to_rfc3339()
        );
    }

    let format = if cli.json {
        OutputFormat::Json
    } else if cli.no_color || !io::stdout().is_terminal() {
        OutputFormat::Plain
    } else {
        OutputFormat::Color
    };

    if cli.text.is_empty() {
        let stdin = io::stdin();
        Session::new(&detector, cli.mode)
            .with_format(format)
            .run(stdin.lock(), io::stdout().lock())
            .context("interactive session failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = api::check_input(&detector, cli.mode, &cli.text.join(" "));
    println!("{}", api::render(&outcome, format));

    Ok(match outcome {
        api::CheckOutcome::InputError { .. } => ExitCode::from(2),
        api::CheckOutcome::Classified(_) => ExitCode::SUCCESS,
    })
}
