use creatorcortex::Config;
use creatorcortex::core::governance::AuditEvent;
use creatorcortex::core::intent::IntentResponse;
use creatorcortex::core::pipeline::ContentResult;
use creatorcortex::core::preference::CreatorState;

pub fn render_config_summary(config: &Config) -> String {
    let lines = [
        format!("◆ creatorcortex {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        format!("workspace     {}", config.workspace_dir.display()),
        format!("config        {}", config.config_path.display()),
        String::new(),
        format!("generation    {}", config.generation.backend),
        format!(
            "profiles      {}",
            config.profiles.base_url.as_deref().unwrap_or("(in-memory)")
        ),
        format!(
            "audit         {} ({})",
            config.audit.backend,
            config.audit_db_path().display()
        ),
        format!(
            "observability {} [{}]",
            config.observability.backend, config.observability.log_level
        ),
        format!("risk keywords {}", config.risk.keywords.len()),
    ];
    lines.join("\n")
}

pub fn render_content_result(result: &ContentResult) -> String {
    let mut lines = Vec::new();
    if result.is_blocked() {
        lines.push(format!(
            "✗ blocked (risk {:.2})",
            result.risk_assessment.score
        ));
        for reason in &result.risk_assessment.reasons {
            lines.push(format!("  - {reason}"));
        }
    } else {
        lines.push(format!("✓ released (risk {:.2})", result.risk_assessment.score));
        lines.push(String::new());
        lines.push(result.script.clone());
        lines.push(String::new());
        lines.push(format!("caption: {}", result.caption));
    }
    lines.push(format!("hashtags: {}", result.hashtags.join(" ")));
    lines.push(format!("audit event: {}", result.event_id()));
    lines.join("\n")
}

pub fn render_audit_event(event: &AuditEvent) -> String {
    let steps: Vec<String> = event.traces().iter().map(|t| t.step().to_string()).collect();
    format!(
        "{}  {}  {}  [{}]",
        event.timestamp().to_rfc3339(),
        event.event_id(),
        event.event_type(),
        steps.join(" → ")
    )
}

pub fn render_intent(response: &IntentResponse) -> String {
    format!(
        "{} (confidence {:.2}{})\n{}",
        response.intent_type,
        response.confidence,
        if response.ambiguity_flag { ", ambiguous" } else { "" },
        response.reasoning.as_deref().unwrap_or_default()
    )
}

pub fn render_preference(before: &CreatorState, after: &CreatorState) -> String {
    format!(
        "{}: risk tolerance {} → {}",
        after.creator_id, before.risk_tolerance, after.risk_tolerance
    )
}
