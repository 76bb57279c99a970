pub mod analysis;
pub mod error;
pub mod extract;
pub mod output;
