use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::error::{Result, ScaffoldError};

/// Directory the generated files land in, relative to the puzzle crate root.
pub const SRC_BIN_DIR: &str = "src/bin";

/// Calendar year used in the printed links when no --year is given.
pub const DEFAULT_YEAR: u16 = 2020;

const AOC_BASE_URL: &str = "https://adventofcode.com";

/// A calendar day that is guaranteed to be within 1..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day(u8);

impl Day {
    pub const FIRST: u32 = 1;
    pub const LAST: u32 = 25;

    /// Any integer outside 1..=25, however large, is a `DayOutOfRangeError`.
    pub fn new(day: u32) -> Result<Self> {
        if !(Self::FIRST..=Self::LAST).contains(&day) {
            return Err(ScaffoldError::DayOutOfRangeError { day });
        }
        Ok(Day(day as u8))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-padded two-digit label that names every generated file, e.g.
    /// day 5 -> "day05".
    pub fn identifier(self) -> String {
        format!("day{:02}", self.0)
    }

    pub fn stub_file_name(self) -> String {
        format!("{}.rs", self.identifier())
    }

    pub fn input_file_name(self) -> String {
        format!("{}-input.txt", self.identifier())
    }

    pub fn test_input_file_name(self) -> String {
        format!("{}-test-input.txt", self.identifier())
    }

    /// Instructions page for this day. Days are not zero-padded in URLs.
    pub fn puzzle_url(self, year: u16) -> String {
        format!("{}/{}/day/{}", AOC_BASE_URL, year, self.0)
    }

    pub fn input_url(self, year: u16) -> String {
        format!("{}/{}/day/{}/input", AOC_BASE_URL, year, self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Target paths for one day, relative to the puzzle crate root. Pure path
/// derivation; no filesystem access happens here.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub day: Day,
    pub with_tests: bool,
    pub stub_path: PathBuf,
    pub input_path: PathBuf,
    pub test_input_path: Option<PathBuf>,
}

impl ScaffoldPlan {
    pub fn new(day: Day, with_tests: bool) -> Self {
        let bin_dir = Path::new(SRC_BIN_DIR);
        Self {
            day,
            with_tests,
            stub_path: bin_dir.join(day.stub_file_name()),
            input_path: bin_dir.join(day.input_file_name()),
            test_input_path: with_tests.then(|| bin_dir.join(day.test_input_file_name())),
        }
    }
}

/// Files a scaffold run actually wrote, relative to the puzzle crate root.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_identifier_is_zero_padded() {
        assert_eq!(Day::new(5).unwrap().identifier(), "day05");
        assert_eq!(Day::new(1).unwrap().identifier(), "day01");
        assert_eq!(Day::new(25).unwrap().identifier(), "day25");
        assert_eq!(Day::new(5).unwrap().number(), 5);
    }

    #[test]
    fn test_day_rejects_out_of_range_values() {
        assert!(Day::new(0).is_err());
        assert!(Day::new(26).is_err());
        assert!(Day::new(300).is_err());

        match Day::new(300).unwrap_err() {
            ScaffoldError::DayOutOfRangeError { day } => assert_eq!(day, 300),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_file_names_derive_from_identifier() {
        let day = Day::new(5).unwrap();
        assert_eq!(day.stub_file_name(), "day05.rs");
        assert_eq!(day.input_file_name(), "day05-input.txt");
        assert_eq!(day.test_input_file_name(), "day05-test-input.txt");
    }

    #[test]
    fn test_urls_use_unpadded_day() {
        let day = Day::new(5).unwrap();
        assert_eq!(day.puzzle_url(2020), "https://adventofcode.com/2020/day/5");
        assert_eq!(
            day.input_url(2020),
            "https://adventofcode.com/2020/day/5/input"
        );
    }

    #[test]
    fn test_plan_derives_src_bin_paths() {
        let plan = ScaffoldPlan::new(Day::new(5).unwrap(), false);
        assert_eq!(plan.stub_path, Path::new("src/bin/day05.rs"));
        assert_eq!(plan.input_path, Path::new("src/bin/day05-input.txt"));
        assert!(plan.test_input_path.is_none());

        let plan = ScaffoldPlan::new(Day::new(5).unwrap(), true);
        assert_eq!(
            plan.test_input_path.as_deref(),
            Some(Path::new("src/bin/day05-test-input.txt"))
        );
    }
}
