mod filter;
mod matcher;

pub use filter::{MatchFilter, UniqueBoundaryFilter};
pub use matcher::{filter_and_dedup, BoundaryMatcher, Candidate, EdgeMatch, HitKind, MatchKind, Matches};
