mod cache;
mod macros;

pub use cache::{Cache, CacheKey, SEARCH_CACHE_TTL};
