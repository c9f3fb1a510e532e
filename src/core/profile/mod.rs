pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpProfileProvider;
pub use provider::{InMemoryProfileProvider, ProfileProvider, create_profile_provider};
pub use types::{CreatorProfile, Idea};
