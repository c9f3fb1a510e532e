use crate::app::render::{
    render_audit_event, render_config_summary, render_content_result, render_intent,
    render_preference,
};
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use creatorcortex::Config;
use creatorcortex::core::governance::{AuditQuery, create_audit_sink};
use creatorcortex::core::intent::{AmbiguityDetector, IntentClassifier, IntentRequest};
use creatorcortex::core::pipeline::Orchestrator;
use creatorcortex::core::preference::{CreatorState, PreferenceUpdate, PreferenceUpdater};
use creatorcortex::core::profile::{CreatorProfile, Idea, create_profile_provider};
use creatorcortex::runtime::observability::{ObserverEvent, create_observer};
use std::sync::Arc;

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Create {
            topic,
            idea_topics,
            format,
            creator_id,
            tone,
            creator_topics,
            risk_tolerance,
            json,
        } => {
            let idea = Idea {
                topic,
                topics: idea_topics,
                format,
            };
            let orchestrator = Orchestrator::from_config(&config).await?;

            let result = if let Some(creator_id) = creator_id {
                let provider = create_profile_provider(&config.profiles);
                orchestrator
                    .create_content_for_creator(&creator_id, &idea, provider.as_ref())
                    .await?
            } else {
                let profile = CreatorProfile {
                    creator_id: None,
                    primary_topics: creator_topics,
                    tone,
                    risk_tolerance,
                };
                orchestrator.create_content(&idea, &profile).await?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", render_content_result(&result));
            }
            Ok(())
        }

        Commands::Feedback {
            creator_id,
            content_id,
            tolerance,
            kind,
            reason,
            risk_score,
        } => {
            let state = CreatorState::new(creator_id.clone(), tolerance)?;
            let update = PreferenceUpdate {
                creator_id,
                content_id,
                feedback: kind,
                rejection_reason: reason,
                content_risk_score: risk_score,
            };
            update.validate()?;

            let next = PreferenceUpdater::new().update(&state, &update);
            create_observer(&config.observability).record_event(
                &ObserverEvent::PreferenceUpdated {
                    creator_id: next.creator_id.clone(),
                    before: state.risk_tolerance,
                    after: next.risk_tolerance,
                },
            );
            println!("{}", render_preference(&state, &next));
            Ok(())
        }

        Commands::Classify { query } => {
            let classifier =
                IntentClassifier::new(AmbiguityDetector::from_config(&config.intent));
            let response = classifier.predict(&IntentRequest::new(query));
            println!("{}", render_intent(&response));
            Ok(())
        }

        Commands::Audit {
            event_type,
            limit,
            json,
        } => {
            let sink = create_audit_sink(&config.audit, &config.workspace_dir).await?;
            let query = AuditQuery { event_type, limit };
            let events = sink
                .query(&query)
                .await
                .context("Failed to read audit events")?;

            if json {
                let documents = events
                    .iter()
                    .map(|e| e.to_document())
                    .collect::<Result<Vec<_>, _>>()?;
                println!("{}", serde_json::to_string_pretty(&documents)?);
            } else if events.is_empty() {
                println!("No audit events.");
            } else {
                for event in &events {
                    println!("{}", render_audit_event(event));
                }
            }
            Ok(())
        }

        Commands::Config => {
            println!("{}", render_config_summary(&config));
            println!();
            let mut shown = config.as_ref().clone();
            if shown.generation.api_key.is_some() {
                shown.generation.api_key = Some("***".into());
            }
            println!("{}", toml::to_string_pretty(&shown)?);
            Ok(())
        }
    }
}
