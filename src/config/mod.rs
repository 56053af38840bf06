//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
