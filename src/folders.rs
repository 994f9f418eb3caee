use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use walkdir::WalkDir;

/// Normalize a user supplied extension (`swift` or `.swift`) into the name
/// suffix matched during discovery.
pub fn name_suffix(extension: &str) -> String {
    format!(".{}", extension.trim_start_matches('.'))
}

/// Collect every entry under `base_dir` whose file name ends in `suffix`.
///
/// Matches the way `find <base_dir> -name '*<suffix>'` selects entries: the
/// root itself is tested, matching directories are reported and still
/// descended into, and symlinks are not followed. Entries within a directory
/// are visited in file name order. Walk errors are logged and skipped.
pub fn collect_matching(base_dir: &Path, suffix: &str, progress: &ProgressBar) -> Vec<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::<_>::with_capacity(16);

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("{err}");
                continue;
            }
        };
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            log::debug!("matched {:?}", entry.path());
            matches.push(entry.into_path());
            progress.set_message(format!("{} matching entries", matches.len()));
        }
        progress.tick();
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn suffix_accepts_leading_dot() {
        assert_eq!(name_suffix("swift"), ".swift");
        assert_eq!(name_suffix(".swift"), ".swift");
    }

    #[test]
    fn only_matching_names_are_collected() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("Sources/Model")).unwrap();
        touch(&root.join("App.swift"));
        touch(&root.join("README.md"));
        touch(&root.join("Sources/Model/Task.swift"));
        touch(&root.join("Sources/Model/Task.swift.orig"));
        touch(&root.join("Sources/notes.txt"));

        let found = collect_matching(root, ".swift", &ProgressBar::hidden());

        assert_eq!(
            found,
            vec![root.join("App.swift"), root.join("Sources/Model/Task.swift")]
        );
    }

    #[test]
    fn no_matches_yields_empty_list() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("main.rs"));

        let found = collect_matching(tmp.path(), ".swift", &ProgressBar::hidden());
        assert!(found.is_empty());
    }

    #[test]
    fn matching_directories_are_reported_and_descended() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = tmp.path().join("Pkg.swift");
        fs::create_dir(&bundle).unwrap();
        touch(&bundle.join("Inner.swift"));

        let found = collect_matching(tmp.path(), ".swift", &ProgressBar::hidden());
        assert_eq!(found, vec![bundle.clone(), bundle.join("Inner.swift")]);
    }

    #[test]
    fn missing_base_dir_is_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let found = collect_matching(&missing, ".swift", &ProgressBar::hidden());
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let tmp = tempfile::tempdir().unwrap();
        let outside = tmp.path().join("outside");
        let root = tmp.path().join("root");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&root).unwrap();
        touch(&outside.join("Hidden.swift"));
        std::os::unix::fs::symlink(&outside, root.join("linked")).unwrap();

        let found = collect_matching(&root, ".swift", &ProgressBar::hidden());
        assert!(found.is_empty());
    }

    #[test]
    fn bare_suffix_name_matches() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join(".swift"));

        let found = collect_matching(tmp.path(), ".swift", &ProgressBar::hidden());
        assert_eq!(found, vec![tmp.path().join(".swift")]);
    }

    #[test]
    fn matching_file_as_base_is_listed() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("Main.swift");
        touch(&file);

        let found = collect_matching(&file, ".swift", &ProgressBar::hidden());
        assert_eq!(found, vec![file.clone()]);
    }

    #[test]
    fn paths_keep_the_base_prefix_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("a.swift"));
        let base = tmp.path().join(".");

        let found = collect_matching(&base, ".swift", &ProgressBar::hidden());
        assert_eq!(found, vec![base.join("a.swift")]);
    }
}
