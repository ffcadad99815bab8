pub mod config;
pub mod ids;
pub mod links;
pub mod types;

pub use config::Config;
pub use links::parse_media_links;
pub use types::{MediaLink, TrendRecord};
