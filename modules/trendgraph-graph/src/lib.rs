pub mod client;
pub mod migrate;
pub mod similarity;
pub mod writer;

#[cfg(feature = "test-utils")]
pub mod testutil;

pub use client::GraphClient;
pub use migrate::ensure_constraints;
pub use similarity::{related_pairs, RelatedKeywordBuilder};
pub use writer::{GraphStats, GraphWriter};
