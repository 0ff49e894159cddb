//! Configuration and path management for fintrack

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
