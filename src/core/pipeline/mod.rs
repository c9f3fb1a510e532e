// Pipeline: the stage machine and the orchestrator that drives it.

pub mod constraints;
pub mod orchestrator;
pub mod stage;
pub mod types;

pub use constraints::{ConstraintDeriver, DerivedConstraints};
pub use orchestrator::Orchestrator;
pub use stage::{Stage, StageMachine, apply_safety_gate};
pub use types::{ContentResult, Outcome, ResolvedRequest};
