//! Constants used throughout the application.
//!
//! This module contains all constants used in the Reverie library, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "reverie";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the journal database path.
pub const ENV_VAR_REVERIE_DB: &str = "REVERIE_DB";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default database location relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".reverie/journal.db";

// Database
/// Maximum number of pooled SQLite connections.
pub const DB_POOL_SIZE: u32 = 5;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Sentiment Scoring
/// Compound score at or above which text is classified Positive.
pub const SENTIMENT_POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is classified Negative.
pub const SENTIMENT_NEGATIVE_THRESHOLD: f64 = -0.05;
/// Normalization constant for mapping raw valence sums into [-1, 1].
pub const SCORE_NORMALIZATION_ALPHA: f64 = 15.0;
/// Multiplier applied to a valence preceded by a negation.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Decay applied to a booster one extra word away from its target.
pub const BOOSTER_DECAY: f64 = 0.95;
/// How many words before a lexicon hit are checked for negations.
pub const NEGATION_LOOKBACK: usize = 3;
/// How many words before a lexicon hit are checked for boosters.
pub const BOOSTER_LOOKBACK: usize = 2;
/// Score emphasis contributed per exclamation mark.
pub const EXCLAMATION_EMPHASIS: f64 = 0.292;
/// Exclamation marks beyond this count add no further emphasis.
pub const MAX_EXCLAMATIONS: usize = 3;

// Export
/// Header row for CSV export.
pub const CSV_HEADER: [&str; 4] = ["Date", "Sentiment", "Entry", "Tags"];
/// Byte substituted for characters the flat-document encoding cannot represent.
pub const DOCUMENT_SUBSTITUTION_BYTE: u8 = b'?';

// Journaling Prompts
/// Writing prompts offered to users staring at a blank entry.
pub const JOURNAL_PROMPTS: &[&str] = &[
    "What are you grateful for today?",
    "What's one thing you want to remember from today?",
    "Describe a challenge you faced today and how you handled it.",
    "What's on your mind right now?",
    "Write about something that made you smile today.",
    "What is one thing you can do to make tomorrow better?",
    "Describe a recent dream you had.",
    "What are your goals for the upcoming week?",
    "Write about a person who has had a positive impact on your life.",
    "What is a skill you would like to learn and why?",
];
/// Prompt shown before the user has asked for a suggestion.
pub const DEFAULT_JOURNAL_PROMPT: &str = "How are you feeling today?";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "reverie";
