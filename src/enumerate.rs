use std::path::{Path, PathBuf};

use walkdir::{self, WalkDir};

use context::AuditContext;
use error::*;
use rule::{ExcludedDirectoryRule, ExtensionRule, FileRule};

pub const GIT_METADATA_DIRECTORY: &str = ".git";

/// Lazily walks a directory tree, yielding the files that satisfy every rule.
///
/// Directories below the root that match `pruned` are not descended into.
/// Symbolic links are followed; a link back to one of its own ancestors is
/// skipped with a warning, other aliases are walked under each name.
/// Yield order follows the directory listings and is otherwise unspecified.
pub struct MatchingFiles {
    rules: Vec<Box<dyn FileRule>>,
    pruned: ExcludedDirectoryRule,
    walker: walkdir::IntoIter,
}

impl MatchingFiles {
    pub fn new(root: &Path, pruned: ExcludedDirectoryRule, rules: Vec<Box<dyn FileRule>>) -> MatchingFiles {
        MatchingFiles {
            rules,
            pruned,
            walker: WalkDir::new(root).follow_links(true).into_iter(),
        }
    }

    fn matches_all_rules(&self, file: &Path) -> bool {
        self.rules.iter().all(|rule| rule.file_matches_rule(file))
    }
}

impl Iterator for MatchingFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Result<PathBuf>> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    if let Some(ancestor) = error.loop_ancestor() {
                        warn!("Skipping symlink loop back to {}", ancestor.to_string_lossy());
                        continue;
                    }
                    let location = error.path().map(|path| path.to_string_lossy().into_owned()).unwrap_or_default();
                    return Some(Err(Error::with_chain(error, format!("Unable to read directory tree at {}", location))));
                }
            };

            if entry.file_type().is_dir() {
                if entry.depth() > 0 && self.pruned.is_excluded_directory(entry.path()) {
                    debug!("Skipping excluded directory: {}", entry.path().to_string_lossy());
                    self.walker.skip_current_dir();
                }
                continue;
            }

            if entry.file_type().is_file() && self.matches_all_rules(entry.path()) {
                trace!("Matching file: {}", entry.path().to_string_lossy());
                return Some(Ok(entry.into_path()));
            }
            trace!("Not a matching file: {}", entry.path().to_string_lossy());
        }
    }
}

/// Starts a fresh walk over the text files of the repository being audited.
///
/// Files under a `.git` directory are never yielded and only files whose
/// extension is in the context's set are.
pub fn text_files(file_context: &AuditContext) -> MatchingFiles {
    let rules: Vec<Box<dyn FileRule>> = vec![
        Box::new(ExcludedDirectoryRule::new(GIT_METADATA_DIRECTORY)),
        Box::new(ExtensionRule::new(file_context.extensions.clone())),
    ];
    MatchingFiles::new(&file_context.repository_root,
                       ExcludedDirectoryRule::new(GIT_METADATA_DIRECTORY), rules)
}
