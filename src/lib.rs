// Vehicle Factory - Core Library
// Factory and factory-method showcases, used by the demo binary and tests

pub mod error;
pub mod vehicle;
pub mod factory;
pub mod profile;
pub mod report;

// Re-export commonly used types
pub use error::FactoryError;
pub use vehicle::{Car, Genesis, Spark, Vehicle, VehicleKind};
pub use factory::{Constructor, VehicleFactory};
pub use profile::{section_line, Facebook, LinkedIn, NetworkKind, Profile, Section, SocialNetwork};
pub use report::{register_custom_models, run_demo, DemoReport, ProfileReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
