//! mdx2vast CLI - convert MDX to HTML that Vale can lint.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use mdx2vast_vale::{BatchInput, FRAMEWORKS, Options, convert_batch, to_vale_html};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "mdx2vast")]
#[command(about = "Convert MDX to HTML for linting with Vale")]
#[command(version)]
struct Cli {
    /// MDX files to convert; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Framework whose prose components are linted, instead of detecting it.
    /// Defaults to $MDX2VAST_FRAMEWORK
    #[arg(long)]
    framework: Option<String>,

    /// Treat `$...$` as plain text instead of math
    #[arg(long)]
    no_math: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the known frameworks and their import patterns
    #[arg(long)]
    list_frameworks: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.list_frameworks {
        for profile in FRAMEWORKS {
            println!("{}\t{}", profile.id, profile.pattern);
        }
        return Ok(());
    }

    let mut options = match cli.framework {
        Some(framework) => Options::with_framework(Some(framework)),
        None => Options::from_env(),
    };
    options.enable_math = !cli.no_math;

    match cli.files.as_slice() {
        [] => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            ensure_input(&input)?;
            println!("{}", to_vale_html(&input, &options)?);
        }
        [path] => {
            let input = read_input(path)?;
            let html = to_vale_html(&input, &options)
                .map_err(|err| err.in_file(path.display().to_string()))?;
            println!("{html}");
        }
        paths => {
            let inputs = paths
                .iter()
                .map(|path| {
                    Ok(BatchInput {
                        id: path.display().to_string(),
                        source: read_input(path)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            tracing::debug!("Converting {} files", inputs.len());
            for output in convert_batch(inputs, &options) {
                let html = output.html.map_err(|err| err.in_file(&output.id))?;
                println!("{html}");
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ensure_input(&input)?;
    Ok(input)
}

fn ensure_input(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        bail!("No input provided.");
    }
    Ok(())
}
