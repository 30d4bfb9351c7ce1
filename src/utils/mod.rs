pub mod errors;
pub mod export;
