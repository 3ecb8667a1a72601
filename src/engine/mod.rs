pub mod config;
pub mod distance;
pub mod error;
pub mod normalize;
pub mod ranker;

pub use distance::edit_distance;
pub use normalize::{display_token, normalize_token, split_marker, starts_word};
pub use ranker::{
    rank_suggestions, score_candidates, Suggestion, SuggestionRanker, DEFAULT_SUGGESTION_LIMIT,
};
