pub mod rest;
pub mod types;

pub use rest::GammaClient;
pub use types::{collect_entries, GammaEvent, GammaMarket};
