//! Value objects - Immutable objects defined by their attributes

mod challenge_rating;
mod ids;

pub use challenge_rating::{ChallengeRating, UnknownChallengeRating};
pub use ids::*;
