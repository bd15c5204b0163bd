use clap::{App, Arg, ArgMatches};
use std::io::Write;

use audit::detect_bad_files;
use context::{AuditContext, CopyContext, DEFAULT_EXCLUDED_DIRECTORY};
use copy::copy_files;
use error::*;
use extension::TextFileExtensionSet;
use path_map::populate_path_map;

pub fn audit_app<'a, 'b>() -> App<'a, 'b> {
    App::new("fix-line-endings")
        .version("1.0")
        .about("Reports text files in a repository that use bare LF line endings instead of CRLF")
        .arg(
            Arg::with_name("repo-dir")
                .value_name("REPO DIRECTORY")
                .help("Sets the repository directory to scan")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("extension")
                .short("e")
                .long("extension")
                .value_name("EXT")
                .help("Sets a text file extension to check, replacing the built-in list")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("fix")
                .long("fix")
                .help("Rewrites bad files with CRLF line endings instead of only reporting them"),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
}

pub fn copy_app<'a, 'b>() -> App<'a, 'b> {
    App::new("svn-extract")
        .version("1.0")
        .about("Copies every file of an svn working copy into another directory, leaving out .svn metadata")
        .arg(
            Arg::with_name("source-dir")
                .value_name("SOURCE DIRECTORY")
                .help("Sets the directory to copy files from")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("dest-dir")
                .value_name("DESTINATION DIRECTORY")
                .help("Sets the directory to copy files into")
                .index(2)
                .required(true),
        )
        .arg(
            Arg::with_name("exclude-dir")
                .short("x")
                .long("exclude-dir")
                .value_name("NAME")
                .help("Sets the name of the directories to leave out (case-insensitive)")
                .takes_value(true)
                .default_value(DEFAULT_EXCLUDED_DIRECTORY),
        )
        .arg(
            Arg::with_name("dry-run")
                .short("n")
                .long("dry-run")
                .help("Sets whether or not to actually write to the filesystem"),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
}

/// Audits the repository named on the command line, writing `BAD FILE:` lines to `report`.
pub fn run_audit<W: Write>(matches: &ArgMatches, report: &mut W) -> Result<()> {
    let extensions = match matches.values_of("extension") {
        Some(values) => TextFileExtensionSet::new(values),
        None => TextFileExtensionSet::default(),
    };
    debug!("Checking {} text file extensions", extensions.len());

    let repo_dir = match matches.value_of("repo-dir") {
        Some(repo_dir) => repo_dir,
        None => bail!("No repository directory given"),
    };
    let file_context = AuditContext::new(repo_dir, extensions, matches.is_present("fix"))?;
    detect_bad_files(&file_context, report)?;

    Ok(())
}

/// Copies the source tree named on the command line, writing progress to `output`.
pub fn run_copy<W: Write>(matches: &ArgMatches, output: &mut W) -> Result<()> {
    let (source_dir, dest_dir) = match (matches.value_of("source-dir"), matches.value_of("dest-dir")) {
        (Some(source_dir), Some(dest_dir)) => (source_dir, dest_dir),
        _ => bail!("Both a source and a destination directory are required"),
    };
    let file_context = CopyContext::new(
        source_dir,
        dest_dir,
        matches.value_of("exclude-dir").unwrap_or(DEFAULT_EXCLUDED_DIRECTORY),
        matches.is_present("dry-run"),
    )?;

    let path_map = populate_path_map(&file_context)?;
    debug!("Mapped {} files", path_map.len());
    copy_files(&path_map, &file_context, output)?;

    Ok(())
}

/// Reports the outcome of a run and returns the process exit code for it.
///
/// A missing directory is a plain message on `stdout`; any other error is
/// logged together with its causes.
pub fn exit_code<W: Write>(result: &Result<()>, stdout: &mut W) -> i32 {
    match *result {
        Ok(()) => 0,
        Err(Error(ErrorKind::DirectoryNotFound(ref directory), _)) => {
            if writeln!(stdout, "Directory {} does not exist", directory).is_err() {
                warn!("Unable to write to stdout");
            }
            1
        }
        // If there was an error, nicely print it and the related causes
        Err(ref error) => {
            error!("Error: {}", error);
            for cause in error.iter().skip(1) {
                error!("caused by: {}", cause);
            }
            1
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;
    use testutils::*;

    #[test]
    fn audit_app_requires_a_directory() {
        let error = audit_app().get_matches_from_safe(vec!["fix-line-endings"]).unwrap_err();
        assert_eq!(error.use_stderr(), true);
    }

    #[test]
    fn audit_app_rejects_extra_arguments() {
        let result = audit_app().get_matches_from_safe(vec!["fix-line-endings", "one", "two"]);
        assert_eq!(result.unwrap_err().use_stderr(), true);
    }

    #[test]
    fn audit_app_reads_options() {
        let matches = audit_app()
            .get_matches_from_safe(vec!["fix-line-endings", "-e", "rs", "-e", "toml", "--fix", "-vv", "repo"])
            .unwrap();
        assert_eq!(matches.values_of("extension").unwrap().collect::<Vec<_>>(), vec!["rs", "toml"]);
        assert_eq!(matches.is_present("fix"), true);
        assert_eq!(matches.occurrences_of("v"), 2);
        assert_eq!(matches.value_of("repo-dir"), Some("repo"));
    }

    #[test]
    fn copy_app_requires_two_directories() {
        assert_eq!(copy_app().get_matches_from_safe(vec!["svn-extract", "source"]).unwrap_err().use_stderr(),
                   true);
        assert_eq!(copy_app().get_matches_from_safe(vec!["svn-extract", "a", "b", "c"]).unwrap_err().use_stderr(),
                   true);
    }

    #[test]
    fn copy_app_defaults_to_svn() {
        let matches = copy_app().get_matches_from_safe(vec!["svn-extract", "a", "b"]).unwrap();
        assert_eq!(matches.value_of("exclude-dir"), Some(".svn"));
        assert_eq!(matches.is_present("dry-run"), false);
    }

    #[test]
    fn run_audit_missing_directory() {
        let matches = audit_app().get_matches_from_safe(vec!["fix-line-endings", "does-not-exist"]).unwrap();
        let mut report: Vec<u8> = Vec::new();
        let result = run_audit(&matches, &mut report);

        let mut stdout: Vec<u8> = Vec::new();
        assert_eq!(exit_code(&result, &mut stdout), 1);
        assert_eq!(String::from_utf8(stdout).unwrap(), "Directory does-not-exist does not exist\n");
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn run_audit_bad_files_still_exit_zero() {
        with_default_test_directory(|test_directory| {
            write_file(&test_directory.join("file1.cs"), b"line1\r\nline2\n");
            write_file(&test_directory.join("file2.cs"), b"line1\r\nline2\r\n");

            let repo_dir = test_directory.to_string_lossy().into_owned();
            let matches = audit_app().get_matches_from_safe(vec!["fix-line-endings", &repo_dir]).unwrap();
            let mut report: Vec<u8> = Vec::new();
            let result = run_audit(&matches, &mut report);

            let mut stdout: Vec<u8> = Vec::new();
            assert_eq!(exit_code(&result, &mut stdout), 0);
            assert_eq!(stdout.len(), 0);
            let report = String::from_utf8(report).unwrap();
            assert_eq!(report.lines().count(), 1);
            assert_eq!(report.starts_with("BAD FILE:"), true);
            assert_eq!(report.trim_end().ends_with("file1.cs"), true);
        });
    }

    #[test]
    fn run_copy_checks_source_first() {
        let matches = copy_app()
            .get_matches_from_safe(vec!["svn-extract", "missing-source", "missing-destination"])
            .unwrap();
        let mut output: Vec<u8> = Vec::new();
        let result = run_copy(&matches, &mut output);

        let mut stdout: Vec<u8> = Vec::new();
        assert_eq!(exit_code(&result, &mut stdout), 1);
        assert_eq!(String::from_utf8(stdout).unwrap(), "Directory missing-source does not exist\n");
    }

    #[test]
    fn run_copy_missing_destination() {
        with_default_test_directory(|test_directory| {
            let source_dir = test_directory.to_string_lossy().into_owned();
            let matches = copy_app()
                .get_matches_from_safe(vec!["svn-extract", &source_dir, "missing-destination"])
                .unwrap();
            let mut output: Vec<u8> = Vec::new();
            let result = run_copy(&matches, &mut output);

            let mut stdout: Vec<u8> = Vec::new();
            assert_eq!(exit_code(&result, &mut stdout), 1);
            assert_eq!(String::from_utf8(stdout).unwrap(), "Directory missing-destination does not exist\n");
        });
    }

    #[test]
    fn run_copy_reports_summary() {
        with_default_test_directory(|test_directory| {
            write_file(&test_directory.join("a.txt"), b"a");
            write_file(&test_directory.join("sub/.svn/ignored.txt"), b"ignored");
            write_file(&test_directory.join("sub/b.txt"), b"b");

            with_default_output_directory(&PathBuf::from("./test_output"), |output_directory| {
                let source_dir = test_directory.to_string_lossy().into_owned();
                let dest_dir = output_directory.to_string_lossy().into_owned();
                let matches = copy_app()
                    .get_matches_from_safe(vec!["svn-extract", &source_dir, &dest_dir])
                    .unwrap();
                let mut output: Vec<u8> = Vec::new();
                let result = run_copy(&matches, &mut output);

                let mut stdout: Vec<u8> = Vec::new();
                assert_eq!(exit_code(&result, &mut stdout), 0);
                assert_eq!(String::from_utf8(output).unwrap().ends_with("\n\nSuccessfully copied 2 files\n"), true);
            })
        });
    }

    #[test]
    fn exit_code_for_other_errors() {
        let result: Result<()> = Err(Error::from("copy failed"));
        let mut stdout: Vec<u8> = Vec::new();
        assert_eq!(exit_code(&result, &mut stdout), 1);
        assert_eq!(stdout.len(), 0);
    }
}
