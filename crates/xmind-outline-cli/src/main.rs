use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};
use xmind_outline_config::Config;
use xmind_outline_engine::{Artifact, SAMPLE_OUTLINE, compile, validate};

/// Compile a tab-indented outline into an XMind mind map
#[derive(Parser, Debug)]
#[command(name = "xmind-outline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Outline text file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Directory the .xmind file is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Base file name; a timestamp and .xmind are appended
    #[arg(short, long)]
    name: Option<String>,

    /// Only validate the outline and report the verdict
    #[arg(long)]
    check: bool,

    /// Use the built-in sample outline instead of reading input
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger_builder(
        env_logger::Env::default().default_filter_or("info"),
        cli.verbose,
    )
    .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` (or the env's default) sets the level; `--verbose` forces debug.
fn logger_builder(env: env_logger::Env, verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

/// Command-line values win over the config file.
fn output_settings(
    output_dir: Option<PathBuf>,
    name: Option<String>,
    config: Config,
) -> (PathBuf, String) {
    (
        output_dir.unwrap_or(config.output_dir),
        name.unwrap_or(config.base_name),
    )
}

/// Returns whether the run succeeded.
fn run(cli: Cli) -> Result<bool> {
    let text = if cli.sample {
        SAMPLE_OUTLINE.to_string()
    } else {
        read_input(cli.input.as_deref())?
    };

    let verdict = validate(&text);
    if cli.check {
        println!("{}", verdict.message);
        return Ok(verdict.ok);
    }
    if verdict.ok {
        log::info!("{}", verdict.message);
    } else {
        log::warn!("{}", verdict.message);
    }

    let config = Config::load_or_default().context("Failed to load config")?;
    let (output_dir, base_name) = output_settings(cli.output_dir, cli.name, config);

    let artifact = match compile(&text, &base_name) {
        Ok(artifact) => artifact,
        Err(e) if e.is_input_error() => {
            eprintln!("{e}");
            return Ok(false);
        }
        Err(e) => return Err(e).context("Failed to generate XMind file"),
    };

    let path = write_artifact(&output_dir, &artifact)?;
    log::info!("XMind file generated: {}", path.display());
    println!("{}", path.display());
    Ok(true)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read outline from {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read outline from stdin")?;
            Ok(text)
        }
    }
}

fn write_artifact(output_dir: &Path, artifact: &Artifact) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let path = output_dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
