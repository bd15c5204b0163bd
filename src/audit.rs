use std::io::Write;
use std::path::PathBuf;

use context::AuditContext;
use enumerate::text_files;
use error::*;
use line_endings::{file_has_proper_line_endings, fix_line_endings};

/// Reports every text file with a bare line feed as `BAD FILE:<path>` on `report`.
///
/// When the context asks for it, each reported file is then rewritten with
/// `\r\n` endings. Returns the bad files in the order they were found. The
/// first unreadable file stops the audit, as does a bad file that cannot be
/// decoded strictly when it is about to be fixed.
pub fn detect_bad_files<W: Write>(file_context: &AuditContext, report: &mut W) -> Result<Vec<PathBuf>> {
    let mut bad_files = Vec::new();
    for file_result in text_files(file_context) {
        let file = file_result?;
        if file_has_proper_line_endings(&file)? {
            trace!("Proper line endings: {}", file.to_string_lossy());
            continue;
        }

        writeln!(report, "BAD FILE:{}", file.to_string_lossy())
            .chain_err(|| "Unable to write audit report")?;
        if file_context.fix {
            info!("Fixing line endings: {}", file.to_string_lossy());
            fix_line_endings(&file)?;
        }
        bad_files.push(file);
    }

    debug!("Found {} files with bare line feeds", bad_files.len());
    Ok(bad_files)
}
