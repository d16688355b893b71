//! Pattern matchers over OCR gazette text.

pub mod context;
pub mod identity;
pub mod military;
pub mod names;
pub mod patterns;
pub mod rank;
pub mod vocabulary;

pub use context::ContextWindow;
pub use identity::IdentityMatcher;
pub use military::MilitaryMatcher;
pub use names::NameResolver;
pub use rank::{CitizenRankMatcher, RankTitleMatcher};

/// Trait for matchers that scan a text for one kind of record.
pub trait TextMatcher {
    /// The record this matcher produces.
    type Output;

    /// Find every occurrence, left to right.
    fn find_all(&self, text: &str) -> Vec<Self::Output>;
}
