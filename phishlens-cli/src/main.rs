//! phishlens: classify a web page as Legitimate or Phishing from its URL
//! and markup.
//!
//! Exit codes: 0 when every page is Legitimate, 1 when any page is
//! Phishing, 2 when the page could not be analyzed or usage was wrong.

mod demo;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use phishlens_analysis::reporters::{create_reporter, PageReport, ReportOptions};
use phishlens_analysis::Analyzer;
use phishlens_core::config::{CliOverrides, PhishlensConfig};
use phishlens_core::constants::VERSION;
use phishlens_core::errors::{PhishlensErrorCode, RunError};
use phishlens_core::tracing::init_tracing;

const EXIT_LEGITIMATE: u8 = 0;
const EXIT_PHISHING: u8 = 1;
const EXIT_UNABLE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "phishlens", version = VERSION, about = "Rule-based phishing page classifier")]
struct Cli {
    /// Directory searched for phishlens.toml (defaults to the working directory)
    #[arg(long, global = true, value_name = "DIR")]
    config_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one page
    Check {
        /// Page URL
        url: String,

        /// HTML file to analyze, or `-` for stdin. Without it the page is
        /// treated as empty.
        #[arg(long, value_name = "FILE")]
        html: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze the bundled sample pages
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format (console, json)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Disable ANSI colors in console output
    #[arg(long)]
    no_color: bool,

    /// List every feature value under each verdict
    #[arg(long)]
    show_features: bool,

    /// Cap on markup bytes parsed per page
    #[arg(long, value_name = "BYTES")]
    max_html_bytes: Option<u64>,
}

impl OutputArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_html_bytes: self.max_html_bytes,
            format: self.format.clone(),
            color: self.no_color.then_some(false),
            show_features: self.show_features.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error_code = err.error_code(), "run failed");
            eprintln!("phishlens: unable to analyze: {}", err.coded_string());
            ExitCode::from(EXIT_UNABLE)
        }
    }
}

fn run(cli: Cli) -> Result<u8, RunError> {
    let root = match cli.config_root {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let (pages, output) = match cli.command {
        Command::Check { url, html, output } => {
            let markup = input::read_markup(html.as_deref())?;
            (vec![(url, markup)], output)
        }
        Command::Demo { output } => {
            let pages = demo::SAMPLES
                .iter()
                .map(|page| (page.url.to_string(), page.html.to_string()))
                .collect();
            (pages, output)
        }
    };

    let config = PhishlensConfig::load(&root, Some(&output.overrides()))?;
    let analyzer = Analyzer::new(&config.analysis);

    let reports: Vec<PageReport> = pages
        .iter()
        .map(|(url, html)| PageReport::new(url.as_str(), analyzer.analyze(url, html)))
        .collect();

    let options = ReportOptions {
        use_color: config.output.effective_color(),
        show_features: config.output.effective_show_features(),
    };
    let format = config.output.effective_format();
    let Some(reporter) = create_reporter(format, options) else {
        // validate() already rejects unknown formats
        eprintln!("phishlens: unknown output format '{format}'");
        return Ok(EXIT_UNABLE);
    };

    match reporter.generate(&reports) {
        Ok(text) => println!("{text}"),
        Err(message) => {
            eprintln!("phishlens: {} report failed: {message}", reporter.name());
            return Ok(EXIT_UNABLE);
        }
    }

    let any_phishing = reports.iter().any(|r| r.verdict.is_phishing());
    Ok(if any_phishing {
        EXIT_PHISHING
    } else {
        EXIT_LEGITIMATE
    })
}
