/*!
Opening proofs to read.

A proof is read through a [BufRead], chosen by the extension of the path to the proof:
- `xz`, the proof is decompressed as it is read, if built with the `xz` feature.
- Otherwise, the proof is read as plain text.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// A reader over the proof at `path`.
pub fn proof_reader(path: &Path) -> Result<Box<dyn BufRead + Send>, err::ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::error!(target: targets::IO, "Failed to open {path:?}: {e}");
            return Err(err::ErrorKind::from(err::IoError::FileNotFound(
                path.to_path_buf(),
            )));
        }
    };

    log::info!(target: targets::IO, "Reading proof from {path:?}");

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => Ok(Box::new(BufReader::new(
            xz2::read::XzDecoder::new(file),
        ))),

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => Err(err::ErrorKind::from(
            err::IoError::UnsupportedExtension(extension.to_os_string()),
        )),

        _ => Ok(Box::new(BufReader::new(file))),
    }
}
