//! Entry point functions
use anyhow::Result;
use indicatif::ProgressBar;
use std::path::PathBuf;

pub mod folders;
pub mod formatter;

/// Output file written when no other name is configured.
pub const DEFAULT_OUTPUT: &str = "all_files.txt";

/// Extension searched for when no other is configured.
pub const DEFAULT_EXTENSION: &str = "swift";

/// Settings for a single collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// search root, used verbatim
    pub base_dir: PathBuf,
    /// extension to match, with or without the leading dot
    pub extension: String,
    /// file receiving the formatter's stdout
    pub output: PathBuf,
    /// formatter program
    pub formatter: String,
    pub formatter_args: Vec<String>,
    /// show a spinner while walking
    pub progress: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            base_dir: resolve_base_dir(None),
            extension: DEFAULT_EXTENSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            formatter: formatter::DEFAULT_FORMATTER.to_string(),
            formatter_args: Vec::new(),
            progress: true,
        }
    }
}

/// Use the given directory as is, or the current directory when absent.
pub fn resolve_base_dir(arg: Option<PathBuf>) -> PathBuf {
    arg.unwrap_or_else(|| PathBuf::from("."))
}

/// Line printed once a run has finished.
pub fn confirmation_message(opts: &CollectOptions) -> String {
    format!(
        "✅ Ficheros {} procesados y guardados en: {}",
        folders::name_suffix(&opts.extension),
        opts.output.display()
    )
}

/// Find every matching file under `opts.base_dir` and pipe the list through
/// the formatter into `opts.output`. Returns the number of matched paths.
pub fn run_collect(opts: &CollectOptions) -> Result<usize> {
    let suffix = folders::name_suffix(&opts.extension);
    log::info!("searching {:?} for *{suffix}", opts.base_dir);

    let progress = if opts.progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    let paths = folders::collect_matching(&opts.base_dir, &suffix, &progress);
    progress.finish_and_clear();
    log::info!("found {} matching entries", paths.len());

    formatter::pipe_to_formatter(&opts.formatter, &opts.formatter_args, &paths, &opts.output)?;
    Ok(paths.len())
}
