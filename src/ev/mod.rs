pub mod expected;
pub mod marginal;

pub use expected::expected_value;
pub use marginal::{to_marginal, MarginalDistribution, MarginalLevel};
