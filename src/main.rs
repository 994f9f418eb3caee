use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use fcollect::{CollectOptions, DEFAULT_EXTENSION, DEFAULT_OUTPUT};

#[derive(Debug, Parser)]
#[clap(author, version)]
/// Pipes every source file under a directory into an external formatter
struct Args {
    /// directory to search (defaults to the current directory)
    base_dir: Option<PathBuf>,

    /// file extension to collect
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// file receiving the formatter output
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// formatter program reading paths on stdin
    #[arg(short, long, default_value = fcollect::formatter::DEFAULT_FORMATTER)]
    formatter: String,

    /// extra argument for the formatter, may be repeated
    #[arg(short = 'a', long = "formatter-arg", allow_hyphen_values = true)]
    formatter_args: Vec<String>,

    /// hide the progress spinner
    #[arg(long)]
    no_progress: bool,

    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug"])]
    log_level: String,
}

impl Args {
    fn options(&self) -> CollectOptions {
        CollectOptions {
            base_dir: fcollect::resolve_base_dir(self.base_dir.clone()),
            extension: self.extension.clone(),
            output: self.output.clone(),
            formatter: self.formatter.clone(),
            formatter_args: self.formatter_args.clone(),
            progress: !self.no_progress,
        }
    }

    fn run(&self) -> Result<()> {
        setup_logging(&self.log_level);
        let opts = self.options();
        fcollect::run_collect(&opts)?;
        println!("{}", fcollect::confirmation_message(&opts));
        Ok(())
    }
}

fn setup_logging(log_level: &str) {
    let level = match log_level {
        "error" => log::LevelFilter::Error,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn main() -> Result<()> {
    Args::parse().run()
}
