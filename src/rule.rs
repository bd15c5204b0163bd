use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path};

use extension::TextFileExtensionSet;

pub trait FileRule: fmt::Debug {
    fn file_matches_rule(&self, file: &Path) -> bool;
}

/// Matches files whose extension is in the given set.
#[derive(Debug)]
pub struct ExtensionRule {
    extensions: TextFileExtensionSet,
}

impl ExtensionRule {
    pub fn new(extensions: TextFileExtensionSet) -> ExtensionRule {
        ExtensionRule { extensions }
    }
}

impl FileRule for ExtensionRule {
    fn file_matches_rule(&self, file: &Path) -> bool {
        self.extensions.matches(file)
    }
}

/// Matches files that do not live under a directory with the given name.
#[derive(Debug)]
pub struct ExcludedDirectoryRule {
    directory_name: String,
}

impl ExcludedDirectoryRule {
    pub fn new(directory_name: &str) -> ExcludedDirectoryRule {
        ExcludedDirectoryRule { directory_name: directory_name.to_string() }
    }

    pub fn is_excluded_directory(&self, directory: &Path) -> bool {
        directory.file_name() == Some(OsStr::new(&self.directory_name))
    }
}

impl FileRule for ExcludedDirectoryRule {
    fn file_matches_rule(&self, file: &Path) -> bool {
        let parent = match file.parent() {
            Some(parent) => parent,
            None => return true,
        };
        !parent.components().any(|component| match component {
            Component::Normal(name) => name == OsStr::new(&self.directory_name),
            _ => false,
        })
    }
}
