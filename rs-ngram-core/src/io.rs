use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Returns `true` if `path` is an existing file with at least one byte.
pub(crate) fn is_non_empty_file<P: AsRef<Path>>(path: P) -> bool {
	fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
}

/// Creates the parent directory of `path` if it has one and it is missing.
pub(crate) fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
	match path.as_ref().parent() {
		Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
		_ => Ok(()),
	}
}

/// Lists all files with a given extension under a directory, recursively.
///
/// Returns full paths in file-name order within each directory, so that the
/// listing does not depend on the order in which the filesystem yields entries.
/// Symbolic links are not followed.
pub(crate) fn list_files_recursive<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in WalkDir::new(dir).sort_by_file_name() {
		let entry = entry?;
		if !entry.file_type().is_file() {
			continue;
		}

		let path = entry.into_path();
		if path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	Ok(files)
}
