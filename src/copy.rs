use std::fs;
use std::io::Write;
use std::path::Path;

use context::{same_location, CopyContext};
use error::*;
use path_map::PathMap;

/// Copies every mapped file, overwriting existing destinations, and returns how many were copied.
///
/// Progress and the final summary go to `output`. In a dry run nothing is
/// written to the filesystem but the same lines are printed.
pub fn copy_files<W: Write>(path_map: &PathMap, file_context: &CopyContext, output: &mut W) -> Result<usize> {
    for &(ref source, ref destination) in path_map.iter() {
        writeln!(output, "Copying {} -> {}", source.to_string_lossy(), destination.to_string_lossy())
            .chain_err(|| "Unable to write copy progress")?;
        copy_file(source, destination, file_context.dry_run)?;
    }

    writeln!(output).chain_err(|| "Unable to write copy summary")?;
    writeln!(output, "Successfully copied {} files", path_map.len())
        .chain_err(|| "Unable to write copy summary")?;
    Ok(path_map.len())
}

fn copy_file(source: &Path, destination: &Path, dry_run: bool) -> Result<()> {
    let destination_directory = match destination.parent() {
        Some(parent) => parent,
        None => bail!("Internal failure: Destination {} has no parent directory. This is a bug.",
                      destination.to_string_lossy()),
    };
    if !destination_directory.is_dir() {
        info!("Creating destination directory: {}", destination_directory.to_string_lossy());
        if !dry_run {
            fs::create_dir_all(destination_directory)
                .chain_err(|| format!("Unable to create destination directory: {}",
                                      destination_directory.to_string_lossy()))?;
        }
    }

    if destination.exists() && same_location(source, destination)? {
        bail!(ErrorKind::SameFile(source.to_string_lossy().into_owned(),
                                  destination.to_string_lossy().into_owned()));
    }

    if !dry_run {
        fs::copy(source, destination)
            .chain_err(|| format!("Unable to copy file {} to destination {}", source.to_string_lossy(),
                                  destination.to_string_lossy()))?;
    }
    Ok(())
}
