use crate::{
    pattern::write_alternating_pages,
    sets::FixtureContent,
    source::RandomSource,
    writer::copy_exact,
};
use std::{io::Write, path::PathBuf};

use log::*;
use thiserror::Error;

pub mod page;
pub mod pattern;
pub mod sets;
pub mod source;
pub mod writer;

pub use page::PageSize;

/// Writes `total_size` bytes of `content` to `output`.
///
/// Random content opens a fresh `stream` from `source` for every fixture.
pub fn write_fixture(
    content: FixtureContent,
    source: &RandomSource,
    stream: u64,
    mut output: impl Write,
    page_size: PageSize,
    total_size: u64,
) -> Result<u64, FixtureError> {
    let written = match content {
        FixtureContent::Random => {
            let input = source.open(stream)?;
            copy_exact(input, &mut output, total_size)?
        }
        FixtureContent::AlternatingPages => {
            write_alternating_pages(&mut output, page_size, total_size)?
        }
    };

    output.flush().map_err(FixtureError::FailedToWrite)?;

    debug!("Wrote {} bytes of {:?} content", written, content);

    Ok(written)
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to open random source '{}'", path.display())]
    OpenSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create output file '{}'", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to copy random bytes to output")]
    FailedToCopy(#[source] std::io::Error),
    #[error("Random source ran dry after {copied} of {expected} bytes")]
    ShortCopy { expected: u64, copied: u64 },
    #[error("Failed to write to output")]
    FailedToWrite(#[source] std::io::Error),
    #[error("Unable to determine the system page size")]
    PageSizeUnavailable,
    #[error("Fixture size overflows: page size {page_size} x {multiplier} pages")]
    SizeOverflow { page_size: u64, multiplier: u64 },
}
