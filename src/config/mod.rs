pub mod schema;

pub use schema::{
    AuditConfig, Config, ConstraintConfig, DefaultsConfig, GenerationConfig, IntentConfig,
    ObservabilityConfig, ProfileSourceConfig, RiskConfig, RiskKeyword, ToneRule, ViabilityConfig,
};
