//! Data models for gazette scanning.

pub mod config;
pub mod document;
pub mod hit;

pub use config::ScanConfig;
pub use document::{BulletinMeta, Document, PageText};
pub use hit::{
    CitizenRankHit, DocumentRef, Hit, IdentityHit, MilitaryHit, RankTitleHit, ScanHit, Span,
    UNKNOWN_NAME,
};
