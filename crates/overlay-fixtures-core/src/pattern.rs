use std::io::Write;

use log::trace;

use crate::{FixtureError, PageSize};

/// Writes whole pages alternating between all 0x00 and all 0xff, starting with 0x00.
///
/// Only `total_size / page_size` pages are written, any remainder is dropped.
pub fn write_alternating_pages(
    mut output: impl Write,
    page_size: PageSize,
    total_size: u64,
) -> Result<u64, FixtureError> {
    let zero_page = vec![0x00u8; page_size.as_usize()];
    let ones_page = vec![0xffu8; page_size.as_usize()];

    let pages = page_size.page_count(total_size);
    for page in 0..pages {
        let data = if page % 2 == 0 { &zero_page } else { &ones_page };

        trace!("Page {} / {}", page, pages);

        output.write_all(data).map_err(FixtureError::FailedToWrite)?;
    }

    Ok(pages * page_size.get())
}
