use clap::{Parser, Subcommand};
use creatorcortex::core::governance::AuditEventType;
use creatorcortex::core::preference::{FeedbackKind, RejectionReason};

/// `creatorcortex` - explainable, policy-gated content decisions for creators.
#[derive(Parser, Debug)]
#[command(name = "creatorcortex")]
#[command(version)]
#[command(about = "Explainable, policy-gated content pipeline.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the content pipeline for one idea
    Create {
        /// Idea topic (defaults to the configured topic)
        #[arg(short, long)]
        topic: Option<String>,

        /// Extra idea topics used for viability scoring (comma separated)
        #[arg(long, value_delimiter = ',')]
        idea_topics: Vec<String>,

        /// Desired format, e.g. Short or Docu-style
        #[arg(short, long)]
        format: Option<String>,

        /// Fetch the creator profile from the profile service
        #[arg(long, conflicts_with_all = ["tone", "creator_topics", "risk_tolerance"])]
        creator_id: Option<String>,

        /// Creator tone (inline profile)
        #[arg(long)]
        tone: Option<String>,

        /// Creator topics of interest (inline profile, comma separated)
        #[arg(long, value_delimiter = ',')]
        creator_topics: Vec<String>,

        /// Creator risk tolerance in [0, 1] (inline profile)
        #[arg(long)]
        risk_tolerance: Option<f64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply one feedback event to a creator's risk tolerance
    Feedback {
        #[arg(long)]
        creator_id: String,

        #[arg(long)]
        content_id: String,

        /// Current risk tolerance in [0, 1]
        #[arg(long)]
        tolerance: f64,

        /// accepted | rejected | edited
        #[arg(long)]
        kind: FeedbackKind,

        /// too_risky | off_brand | boring | other
        #[arg(long)]
        reason: Option<RejectionReason>,

        /// Risk score of the content the feedback is about
        #[arg(long, default_value = "0.0")]
        risk_score: f64,
    },

    /// Classify the intent of a free-text request
    Classify {
        /// The request text
        query: String,
    },

    /// List persisted audit events
    Audit {
        /// content_generation_success | content_generation_blocked
        #[arg(long)]
        event_type: Option<AuditEventType>,

        /// Show at most this many of the most recent events
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print full audit documents as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}
