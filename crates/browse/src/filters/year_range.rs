//! Filter on an inclusive release-year range.

use crate::traits::Filter;
use catalog::Movie;

/// Keeps movies released between `from` and `to`, both inclusive.
pub struct YearRangeFilter {
    from: u16,
    to: u16,
}

impl YearRangeFilter {
    pub fn new(from: u16, to: u16) -> Self {
        Self { from, to }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        (self.from..=self.to).contains(&movie.year)
    }
}
