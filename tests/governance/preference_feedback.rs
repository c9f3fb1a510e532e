use creatorcortex::core::preference::{
    CreatorState, FeedbackKind, PreferenceUpdate, PreferenceUpdater, RejectionReason,
};

fn feedback(kind: FeedbackKind, reason: Option<RejectionReason>, risk: f64) -> PreferenceUpdate {
    PreferenceUpdate {
        creator_id: "123".into(),
        content_id: "post".into(),
        feedback: kind,
        rejection_reason: reason,
        content_risk_score: risk,
    }
}

#[test]
fn too_risky_rejection_from_point_eight_gives_point_six_four() {
    let state = CreatorState::new("123", 0.8).unwrap();
    let next = PreferenceUpdater::new().update(
        &state,
        &feedback(FeedbackKind::Rejected, Some(RejectionReason::TooRisky), 0.9),
    );
    assert_eq!(next.risk_tolerance, 0.64);
}

#[test]
fn tolerance_stays_in_unit_interval_over_long_histories() {
    let updater = PreferenceUpdater::new();
    let boosts: Vec<PreferenceUpdate> = (0..50)
        .map(|_| feedback(FeedbackKind::Accepted, None, 0.95))
        .collect();
    let cuts: Vec<PreferenceUpdate> = (0..50)
        .map(|_| feedback(FeedbackKind::Rejected, Some(RejectionReason::TooRisky), 0.95))
        .collect();

    let start = CreatorState::new("123", 0.5).unwrap();
    let high = updater.replay(&start, &boosts);
    assert_eq!(high.risk_tolerance, 1.0);

    let low = updater.replay(&start, &cuts);
    assert!(low.risk_tolerance >= 0.0);
    assert!(low.risk_tolerance < 0.001);
}

#[test]
fn feedback_round_trips_through_json() {
    let update = feedback(FeedbackKind::Edited, Some(RejectionReason::OffBrand), 0.3);
    let raw = serde_json::to_string(&update).unwrap();
    assert!(raw.contains("\"edited\""));
    assert!(raw.contains("\"off_brand\""));
    let back: PreferenceUpdate = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, update);
}
