pub mod direction;
pub mod price;

pub use direction::classify_direction;
pub use price::extract_price;
