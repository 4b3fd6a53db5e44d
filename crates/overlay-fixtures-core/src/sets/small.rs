use crate::sets::{Fixture, FixtureContent, FixtureSet};

/// Three random files and one alternating page file, 1024 pages each.
#[derive(Debug, Default, Clone)]
pub struct SmallSet;

impl FixtureSet for SmallSet {
    fn set_name(&self) -> String {
        "small".to_string()
    }

    fn page_multiplier(&self) -> u64 {
        SMALL_PAGE_MULTIPLIER
    }

    fn fixtures(&self) -> Vec<Fixture> {
        SMALL_FIXTURES.to_vec()
    }
}

pub const SMALL_PAGE_MULTIPLIER: u64 = 1024;

pub const SMALL_FIXTURES: &[Fixture] = &[
    Fixture::new("base.bin", FixtureContent::Random),
    Fixture::new("overlay1.bin", FixtureContent::Random),
    Fixture::new("overlay2.bin", FixtureContent::Random),
    Fixture::new("overlay3.bin", FixtureContent::AlternatingPages),
];
