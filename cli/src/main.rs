//! snapcode CLI - code screenshot tool

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use snapcode::{Error, SnapCode, Theme};

#[derive(Parser)]
#[command(name = "snapcode")]
#[command(version)]
#[command(about = "Turn source code into syntax-highlighted, auto-cropped images", long_about = None)]
struct Cli {
    /// Input source file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output filename prefix; pages are saved as <PREFIX>_<N>.jpg
    #[arg(short, long, value_name = "PREFIX", default_value = "snapshot")]
    output: String,

    /// Output directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// CSS font size (e.g. "16px")
    #[arg(long, value_name = "SIZE")]
    font_size: Option<String>,

    /// Theme color overrides as JSON, e.g. '{"bg": "#000000"}'
    #[arg(long, value_name = "JSON")]
    theme: Option<String>,

    /// Extra keywords added to the highlighter's set
    #[arg(long, value_name = "WORD")]
    keyword: Vec<String>,

    /// Directory containing poppler's binaries (pdftoppm)
    #[arg(long, value_name = "DIR", env = "SNAPCODE_POPPLER_PATH")]
    poppler_path: Option<PathBuf>,

    /// Path to the wkhtmltopdf executable
    #[arg(long, value_name = "FILE", env = "SNAPCODE_WKHTMLTOPDF")]
    wkhtmltopdf: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(saved) => {
            println!(
                "{} generated {} image(s) with prefix: {}",
                "Successfully".green().bold(),
                saved.len(),
                cli.output
            );
            ExitCode::SUCCESS
        }
        Err(err @ Error::InputNotFound(_)) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
        Err(Error::RenderingUnavailable(msg)) => {
            // Missing toolchain is a setup problem, not a usage error:
            // print remediation and exit cleanly with zero outputs.
            eprintln!("{}", "=".repeat(60));
            eprintln!("{} {}", "[!]".yellow().bold(), msg);
            eprintln!("Install wkhtmltopdf and poppler, then either add them to");
            eprintln!("PATH or pass --wkhtmltopdf / --poppler-path.");
            eprintln!("{}", "=".repeat(60));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{} an unexpected error occurred: {}",
                "[!]".yellow().bold(),
                err
            );
            ExitCode::SUCCESS
        }
    }
}

fn run(cli: &Cli) -> snapcode::Result<Vec<PathBuf>> {
    let theme = match &cli.theme {
        Some(json) => Theme::from_json(json)?,
        None => Theme::dark(),
    };

    let mut snap = SnapCode::new()
        .with_theme(theme)
        .with_output_dir(&cli.out_dir);

    if let Some(font_size) = &cli.font_size {
        snap = snap.with_font_size(font_size.clone());
    }
    if !cli.keyword.is_empty() {
        let keywords: Vec<String> = snapcode::PYTHON_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(cli.keyword.iter().cloned())
            .collect();
        snap = snap.with_keywords(keywords);
    }
    if let Some(poppler) = &cli.poppler_path {
        snap = snap.with_poppler_path(poppler);
    }
    if let Some(wkhtmltopdf) = &cli.wkhtmltopdf {
        snap = snap.with_wkhtmltopdf_path(wkhtmltopdf);
    }

    snap.convert(&cli.input, &cli.output)
}
