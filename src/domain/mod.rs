// Domain layer - Value objects and pure state logic
pub mod dashboard;
pub mod load_state;
pub mod stats;
