use std::collections::HashSet;
use std::sync::Arc;

use creatorcortex::core::governance::StepName;
use creatorcortex::core::profile::{CreatorProfile, Idea};

use super::pipeline_harness::Harness;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_runs_append_whole_events() {
    let harness = Arc::new(Harness::template());
    let mut handles = Vec::new();

    for i in 0..16 {
        let harness = Arc::clone(&harness);
        handles.push(tokio::spawn(async move {
            let topic = if i % 2 == 0 {
                format!("AI Agents {i}")
            } else {
                format!("scam tactics {i}")
            };
            harness
                .orchestrator
                .create_content(
                    &Idea::new(topic),
                    &CreatorProfile::default().with_risk_tolerance(0.5),
                )
                .await
                .unwrap()
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let stored = harness.stored_events().await;
    assert_eq!(stored.len(), 16);

    let ids: HashSet<&str> = stored.iter().map(|e| e.event_id()).collect();
    assert_eq!(ids.len(), 16);

    for event in &stored {
        let steps: Vec<StepName> = event.traces().iter().map(|t| t.step()).collect();
        assert_eq!(steps, StepName::ORDER);
    }

    let blocked = results.iter().filter(|r| r.is_blocked()).count();
    assert_eq!(blocked, 8);
}
