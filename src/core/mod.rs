pub mod client;
pub mod fallback;
pub mod favorites;
pub mod ladder;

pub use crate::domain::model::Country;
pub use crate::domain::ports::{CountrySource, Storage};
pub use crate::utils::error::Result;
