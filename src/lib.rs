pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::scaffold::Scaffolder;
pub use crate::domain::model::{Day, ScaffoldPlan, ScaffoldReport};
pub use crate::utils::error::{Result, ScaffoldError};
