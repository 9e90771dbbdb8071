pub mod context;
pub mod fit;
pub mod signal;
