//! The transformation stages run over the build tree.

mod convert;
mod normalize;
mod references;

pub use convert::ConvertStage;
pub use normalize::NormalizeStage;
pub use references::ReferenceStage;

use crate::error::FileError;
use camino::Utf8Path;
use std::fs;

fn read_file(path: &Utf8Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_owned(),
        source,
    })
}

fn write_file(path: &Utf8Path, content: &str) -> Result<(), FileError> {
    fs::write(path, content).map_err(|source| FileError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Returns whether the file is a script or stylesheet that is not itself a
/// generated module.
fn is_handwritten_source(relative: &Utf8Path, extensions: &[&str]) -> bool {
    let Some(file_name) = relative.file_name() else {
        return false;
    };
    let has_extension = relative
        .extension()
        .is_some_and(|ext| extensions.contains(&ext));
    has_extension && !template_module::is_generated_module(file_name)
}
