mod audit;
mod constraints;
mod core;
mod defaults;
mod generation;
mod intent;
mod observability;
mod profiles;
mod risk;
mod viability;

pub use audit::AuditConfig;
pub use constraints::{ConstraintConfig, ToneRule};
pub use self::core::Config;
pub use defaults::DefaultsConfig;
pub use generation::GenerationConfig;
pub use intent::IntentConfig;
pub use observability::ObservabilityConfig;
pub use profiles::ProfileSourceConfig;
pub use risk::{RiskConfig, RiskKeyword};
pub use viability::ViabilityConfig;
