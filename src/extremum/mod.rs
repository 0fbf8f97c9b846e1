// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod order;
pub mod report;
pub mod traits;
pub mod triple;
pub use traits::IterationObserver;

// algorithm
pub mod vertex;
pub mod squeeze;
pub mod spi;
