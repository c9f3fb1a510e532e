pub mod types;
pub mod updater;

pub use types::{CreatorState, FeedbackKind, PreferenceUpdate, RejectionReason};
pub use updater::PreferenceUpdater;
