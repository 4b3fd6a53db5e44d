pub use large::LargeSet;
pub use small::SmallSet;

use crate::{FixtureError, PageSize};

pub mod large;
pub mod small;

/// What a fixture file is filled with
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FixtureContent {
    /// Bytes read from the random source
    Random,
    /// Whole pages of 0x00 and 0xff in turn, starting with 0x00
    AlternatingPages,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fixture {
    pub file_name: &'static str,
    pub content: FixtureContent,
}

impl Fixture {
    pub const fn new(file_name: &'static str, content: FixtureContent) -> Self {
        Self { file_name, content }
    }
}

/// This trait describes the list of files one generator produces.
pub trait FixtureSet {
    /// Get the set's name
    fn set_name(&self) -> String;

    /// Number of pages in every fixture of the set
    fn page_multiplier(&self) -> u64;

    /// The fixtures in the order they are generated
    fn fixtures(&self) -> Vec<Fixture>;

    /// Byte length of every fixture in the set for the given page size
    fn total_size(&self, page_size: PageSize) -> Result<u64, FixtureError> {
        page_size.total_size(self.page_multiplier())
    }
}
