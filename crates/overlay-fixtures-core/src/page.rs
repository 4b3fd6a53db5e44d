use std::fmt;

use assert_into::AssertInto;

use crate::FixtureError;

/// Size of one page in bytes. Every fixture is sized in whole pages.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PageSize(u64);

impl PageSize {
    /// Returns `None` for a zero sized page.
    pub const fn new(bytes: u64) -> Option<Self> {
        if bytes == 0 {
            None
        } else {
            Some(Self(bytes))
        }
    }

    /// Queries the page size of the running system.
    pub fn system() -> Result<Self, FixtureError> {
        query_page_size()
            .and_then(Self::new)
            .ok_or(FixtureError::PageSizeUnavailable)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Page size as a buffer length.
    pub fn as_usize(self) -> usize {
        self.0.assert_into()
    }

    /// Byte length of `multiplier` pages.
    pub fn total_size(self, multiplier: u64) -> Result<u64, FixtureError> {
        self.0
            .checked_mul(multiplier)
            .ok_or(FixtureError::SizeOverflow {
                page_size: self.0,
                multiplier,
            })
    }

    /// Number of whole pages in `total_size`, a trailing partial page is not counted.
    pub const fn page_count(self, total_size: u64) -> u64 {
        total_size / self.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(unix)]
fn query_page_size() -> Option<u64> {
    // SAFETY: sysconf has no preconditions and only reads system configuration.
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    u64::try_from(size).ok()
}

#[cfg(not(unix))]
fn query_page_size() -> Option<u64> {
    None
}
