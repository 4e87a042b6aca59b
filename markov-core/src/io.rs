use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole UTF-8 text file into a `String`.
///
/// Read failures (missing file, permissions, invalid UTF-8) are returned
/// as `Error::Io` carrying the path and the original `io::Error`.
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
	Ok(contents)
}
