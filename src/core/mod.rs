pub mod scaffold;
pub mod template;

pub use crate::domain::model::{Day, ScaffoldPlan, ScaffoldReport};
pub use crate::utils::error::Result;
pub use scaffold::Scaffolder;
