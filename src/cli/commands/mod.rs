pub mod comments;
pub mod health;

pub use comments::{delete, list};
pub use health::health;
