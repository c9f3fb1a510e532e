use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::debug;

/// Fixed vocabulary of pipeline stages that emit a trace.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum StepName {
    #[serde(rename = "Setup")]
    #[strum(serialize = "Setup")]
    Setup,
    #[serde(rename = "Cortex Viability")]
    #[strum(serialize = "Cortex Viability")]
    Viability,
    #[serde(rename = "Broca")]
    #[strum(serialize = "Broca")]
    Generation,
    #[serde(rename = "Cortex Risk")]
    #[strum(serialize = "Cortex Risk")]
    Risk,
}

impl StepName {
    /// Emission order of a complete pipeline run.
    pub const ORDER: [StepName; 4] = [
        StepName::Setup,
        StepName::Viability,
        StepName::Generation,
        StepName::Risk,
    ];
}

/// One stage's recorded inputs, outputs and rationale.
///
/// Entries can only be added. Logging a key that is already present is
/// ignored so the first recorded value stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTrace {
    step: StepName,
    timestamp: DateTime<Utc>,
    inputs: BTreeMap<String, String>,
    outputs: BTreeMap<String, String>,
    reasoning: Vec<String>,
}

impl ReasoningTrace {
    pub fn new(step: StepName) -> Self {
        Self {
            step,
            timestamp: Utc::now(),
            inputs: BTreeMap::new(),
            outputs: BTreeMap::new(),
            reasoning: Vec::new(),
        }
    }

    /// Returns `false` when `key` was already logged.
    pub fn log_input(&mut self, key: &str, value: impl Display) -> bool {
        append_once(&mut self.inputs, self.step, "input", key, value)
    }

    /// Returns `false` when `key` was already logged.
    pub fn log_output(&mut self, key: &str, value: impl Display) -> bool {
        append_once(&mut self.outputs, self.step, "output", key, value)
    }

    pub fn add_reason(&mut self, reason: impl Into<String>) {
        self.reasoning.push(reason.into());
    }

    pub fn step(&self) -> StepName {
        self.step
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn inputs(&self) -> &BTreeMap<String, String> {
        &self.inputs
    }

    pub fn outputs(&self) -> &BTreeMap<String, String> {
        &self.outputs
    }

    pub fn reasoning(&self) -> &[String] {
        &self.reasoning
    }

    pub fn input(&self, key: &str) -> Option<&str> {
        self.inputs.get(key).map(String::as_str)
    }

    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs.get(key).map(String::as_str)
    }
}

fn append_once(
    map: &mut BTreeMap<String, String>,
    step: StepName,
    kind: &str,
    key: &str,
    value: impl Display,
) -> bool {
    if map.contains_key(key) {
        debug!(step = %step, kind, key, "trace.duplicate_ignored");
        return false;
    }
    map.insert(key.to_string(), value.to_string());
    true
}
