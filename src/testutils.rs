use super::*;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub fn with_default_test_file<F>(test_dir: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    let test_file_name = random_string() + "test_file.test";
    let test_file: &PathBuf = &test_dir.join(test_file_name);
    with_test_file(test_file, test_method);
}

pub fn with_test_file<F>(test_file: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    // Make sure file test file exists
    if !test_file.is_file() {
        File::create(test_file).unwrap();
    }
    assert_eq!(test_file.is_file(), true);

    test_method(test_file);

    // Clean up if the test file wasn't deleted
    if test_file.is_file() {
        fs::remove_file(test_file).unwrap();
    }
}

pub fn with_default_test_directory<F>(test_method: F)
where
    F: Fn(&PathBuf),
{
    let test_dir_name = "./test_output/output".to_owned() + &random_string();
    with_test_directory(&PathBuf::from(test_dir_name), test_method);
}

pub fn with_test_directory<F>(test_dir: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    // Make sure test directory exists and is empty
    if test_dir.is_dir() {
        fs::remove_dir_all(test_dir).unwrap();
    }
    fs::create_dir_all(test_dir).unwrap();
    assert_eq!(test_dir.is_dir(), true);

    test_method(test_dir);

    // Clean up
    fs::remove_dir_all(test_dir).unwrap();
}

pub fn with_default_output_directory<F>(test_dir: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    let test_output_name = random_string() + "test_output";
    with_output_directory(&test_dir.join(test_output_name), test_method);
}

pub fn with_output_directory<F>(output_directory: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    // Output directories start out existing and empty, as the copier requires
    if output_directory.is_dir() {
        fs::remove_dir_all(output_directory).unwrap();
    }
    fs::create_dir_all(output_directory).unwrap();

    test_method(output_directory);

    if output_directory.is_dir() {
        fs::remove_dir_all(output_directory).unwrap();
    }
}

/// Writes `contents` to `file`, creating any missing parent directories.
pub fn write_file(file: &Path, contents: &[u8]) {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(file, contents).unwrap();
}

pub fn read_file(file: &Path) -> Vec<u8> {
    fs::read(file).unwrap()
}

pub fn random_string() -> String {
    let random_number = rand::random::<u32>();
    println!("Using random number: {:?}", random_number);
    random_number.to_string()
}
