// Domain layer: the day model and the plan/report types derived from it.

pub mod model;
