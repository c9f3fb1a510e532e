use super::types::Outcome;
use crate::core::broca::GeneratedContent;
use crate::core::cortex::RiskAssessment;
use crate::core::governance::{ReasoningTrace, StepName};
use crate::error::PipelineError;
use strum::Display;

/// Pipeline states. Strictly sequential: no branches, loops or retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Stage {
    Setup,
    Viability,
    Generation,
    Risk,
    Finalize,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Setup => Some(Stage::Viability),
            Stage::Viability => Some(Stage::Generation),
            Stage::Generation => Some(Stage::Risk),
            Stage::Risk => Some(Stage::Finalize),
            Stage::Finalize => None,
        }
    }

    /// Trace tag emitted by this stage. `Finalize` emits no trace.
    pub fn step_name(self) -> Option<StepName> {
        match self {
            Stage::Setup => Some(StepName::Setup),
            Stage::Viability => Some(StepName::Viability),
            Stage::Generation => Some(StepName::Generation),
            Stage::Risk => Some(StepName::Risk),
            Stage::Finalize => None,
        }
    }
}

/// Local trace buffer for one run.
///
/// Each stage hands its finished trace to [`StageMachine::complete`], which
/// only accepts the trace of the current stage and then advances. Traces
/// leave the buffer all at once through [`StageMachine::finish`].
#[derive(Debug)]
pub struct StageMachine {
    current: Stage,
    traces: Vec<ReasoningTrace>,
}

impl Default for StageMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StageMachine {
    pub fn new() -> Self {
        Self {
            current: Stage::Setup,
            traces: Vec::with_capacity(StepName::ORDER.len()),
        }
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    pub fn traces(&self) -> &[ReasoningTrace] {
        &self.traces
    }

    /// Open an empty trace for the current stage.
    pub fn begin(&self) -> Result<ReasoningTrace, PipelineError> {
        self.current
            .step_name()
            .map(ReasoningTrace::new)
            .ok_or_else(|| self.violation("no trace at Finalize"))
    }

    /// Accept the current stage's trace and advance. Returns the new stage.
    pub fn complete(&mut self, trace: ReasoningTrace) -> Result<Stage, PipelineError> {
        let expected = self
            .current
            .step_name()
            .ok_or_else(|| self.violation(trace.step().to_string()))?;
        if trace.step() != expected {
            return Err(self.violation(trace.step().to_string()));
        }

        self.traces.push(trace);
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        Ok(self.current)
    }

    /// Release the full trace set. Only valid once every stage completed.
    pub fn finish(self) -> Result<Vec<ReasoningTrace>, PipelineError> {
        if self.current != Stage::Finalize {
            return Err(self.violation(Stage::Finalize.to_string()));
        }
        Ok(self.traces)
    }

    fn violation(&self, found: impl Into<String>) -> PipelineError {
        PipelineError::StageOrder {
            expected: self.current.to_string(),
            found: found.into(),
        }
    }
}

/// Suppress script and caption of unsafe content. Hashtags are kept.
pub fn apply_safety_gate(
    content: GeneratedContent,
    risk: &RiskAssessment,
) -> (GeneratedContent, Outcome) {
    if risk.is_safe {
        return (content, Outcome::Success);
    }
    (
        GeneratedContent {
            script: String::new(),
            caption: String::new(),
            hashtags: content.hashtags,
        },
        Outcome::Blocked,
    )
}
