use clap::Parser;

use crate::domain::model::{Day, DEFAULT_YEAR};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};

// The event first ran in 2015.
const FIRST_EVENT_YEAR: u16 = 2015;
const LAST_EVENT_YEAR: u16 = 2099;

#[derive(Debug, Clone, Parser)]
#[command(name = "gen-day")]
#[command(about = "Scaffold the solution stub and input files for one puzzle day")]
pub struct CliConfig {
    /// Day of the puzzle calendar (1-25)
    pub day: u32,

    /// Also scaffold an empty test-input file and a test block in the stub
    #[arg(long)]
    pub with_tests: bool,

    /// Year used in the printed instruction/input links
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Root of the puzzle crate to scaffold into
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 驗證日期範圍（域模型本身就是驗證器）
        Day::new(self.day)?;

        validate_range("year", self.year, FIRST_EVENT_YEAR, LAST_EVENT_YEAR)?;
        validate_path("root", &self.root)?;

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
