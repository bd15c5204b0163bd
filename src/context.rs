use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use error::*;
use extension::TextFileExtensionSet;

pub const DEFAULT_EXCLUDED_DIRECTORY: &str = ".svn";

/// Everything the line ending audit needs, validated once from the command line.
#[derive(Clone, Debug)]
pub struct AuditContext {
    pub repository_root: PathBuf,
    pub extensions: TextFileExtensionSet,
    pub fix: bool,
}

impl AuditContext {
    pub fn new(repository_root: &str, extensions: TextFileExtensionSet, fix: bool) -> Result<AuditContext> {
        Ok(AuditContext {
            repository_root: validate_directory(repository_root)?,
            extensions,
            fix,
        })
    }
}

/// Everything the tree copy needs, validated once from the command line.
#[derive(Clone, Debug)]
pub struct CopyContext {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub excluded_dir: String,
    pub dry_run: bool,
}

impl CopyContext {
    pub fn new(source_dir: &str, dest_dir: &str, excluded_dir: &str, dry_run: bool) -> Result<CopyContext> {
        // Source is checked first so its message wins when both are missing
        let source_dir = validate_directory(source_dir)?;
        let dest_dir = validate_directory(dest_dir)?;
        if same_location(&source_dir, &dest_dir)? {
            bail!(ErrorKind::SameFile(source_dir.to_string_lossy().into_owned(),
                                      dest_dir.to_string_lossy().into_owned()));
        }
        Ok(CopyContext {
            source_dir,
            dest_dir,
            excluded_dir: excluded_dir.to_string(),
            dry_run,
        })
    }
}

/// Checks that `directory` exists and returns it as an absolute path.
pub fn validate_directory(directory: &str) -> Result<PathBuf> {
    let path = Path::new(directory);
    if !path.is_dir() {
        bail!(ErrorKind::DirectoryNotFound(directory.to_string()));
    }

    let absolute: PathBuf = if path.is_absolute() {
        path.components().collect()
    } else {
        env::current_dir()
            .chain_err(|| "Unable to determine the current directory")?
            .join(path)
            .components()
            .collect()
    };
    trace!("Validated directory {} as {}", directory, absolute.to_string_lossy());
    Ok(absolute)
}

/// Returns whether both paths resolve to the same filesystem entry.
pub fn same_location(first: &Path, second: &Path) -> Result<bool> {
    let first = fs::canonicalize(first).chain_err(|| format!("Unable to resolve {}", first.to_string_lossy()))?;
    let second = fs::canonicalize(second).chain_err(|| format!("Unable to resolve {}", second.to_string_lossy()))?;
    Ok(first == second)
}
