//! Result caching module.

mod clock;
mod result_cache;

// Re-export the public interface
pub use clock::{Clock, SystemClock};
pub use result_cache::ResultCache;
