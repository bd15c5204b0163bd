use std::collections::HashSet;
use std::path::Path;

const DEFAULT_TEXT_FILE_EXTENSIONS: &[&str] = &[
    ".ds",
    ".dc",
    ".sln",
    ".props",
    ".sources",
    ".targets",
    ".csproj",
    ".rptproj",
    ".vcxproj",
    ".proj",
    ".filters",
    ".cs",
    ".vb",
    ".h",
    ".cpp",
    ".resx",
    ".xaml",
    ".html",
    ".css",
    ".js",
    ".cmd",
    ".bat",
    ".ps1",
    ".txt",
    ".config",
    ".xml",
    ".xsd",
    ".ini",
    ".snippet",
    ".vsixmanifest",
    ".ruleset",
    ".nuspec",
    ".StyleCop",
    ".DotSettings",
    ".rdl",
    ".rsd",
    ".def",
    ".gitattributes",
    ".gitignore",
    ".rds",
];

/// Case-insensitive set of extensions treated as line ending sensitive text.
///
/// Entries are stored lowercased with a leading dot, so `cs`, `.cs` and `.CS`
/// all describe the same extension.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFileExtensionSet {
    extensions: HashSet<String>,
}

impl TextFileExtensionSet {
    pub fn new<I, S>(extensions: I) -> TextFileExtensionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|extension| normalize_extension(extension.as_ref()))
            .filter(|extension| extension.len() > 1)
            .collect();
        TextFileExtensionSet { extensions }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&normalize_extension(extension))
    }

    pub fn matches(&self, file: &Path) -> bool {
        match file_extension(file) {
            Some(extension) => self.contains(&extension),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for TextFileExtensionSet {
    fn default() -> TextFileExtensionSet {
        TextFileExtensionSet::new(DEFAULT_TEXT_FILE_EXTENSIONS)
    }
}

/// Returns the suffix from the last `.` of the file name, dot included.
///
/// Unlike `Path::extension`, a dot-file such as `.gitignore` has the extension
/// `.gitignore`. Names without a dot, or ending in one, have none.
pub fn file_extension(file: &Path) -> Option<String> {
    let file_name = file.file_name()?.to_string_lossy().into_owned();
    let dot = file_name.rfind('.')?;
    if dot + 1 == file_name.len() {
        return None;
    }
    Some(file_name[dot..].to_string())
}

fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim().to_lowercase();
    if extension.starts_with('.') {
        extension
    } else {
        format!(".{}", extension)
    }
}
