use crate::sets::{Fixture, FixtureContent, FixtureSet};

/// Three random files of 1024 * 1024 pages each.
#[derive(Debug, Default, Clone)]
pub struct LargeSet;

impl FixtureSet for LargeSet {
    fn set_name(&self) -> String {
        "large".to_string()
    }

    fn page_multiplier(&self) -> u64 {
        LARGE_PAGE_MULTIPLIER
    }

    fn fixtures(&self) -> Vec<Fixture> {
        LARGE_FIXTURES.to_vec()
    }
}

pub const LARGE_PAGE_MULTIPLIER: u64 = 1024 * 1024;

pub const LARGE_FIXTURES: &[Fixture] = &[
    Fixture::new("base.bin", FixtureContent::Random),
    Fixture::new("overlay1.bin", FixtureContent::Random),
    Fixture::new("overlay2.bin", FixtureContent::Random),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageSize;

    #[test]
    pub fn large_set_is_4gib_per_file_with_4k_pages() {
        let page_size = PageSize::new(4096).unwrap();
        assert_eq!(LargeSet.total_size(page_size).unwrap(), 4_294_967_296);
    }

    #[test]
    pub fn large_set_is_all_random() {
        let names: Vec<_> = LargeSet.fixtures().iter().map(|f| f.file_name).collect();
        assert_eq!(names, ["base.bin", "overlay1.bin", "overlay2.bin"]);
        assert!(LargeSet
            .fixtures()
            .iter()
            .all(|f| f.content == FixtureContent::Random));
    }
}
