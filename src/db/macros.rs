/// A macro to simplify read-through caching of provider fetches.
///
/// This macro checks if a batch is present in the cache.
/// If found, it returns the cached batch.
/// If not found, it executes the provided block to fetch the batch,
/// stores it in the cache, and then returns the fetched batch.
/// A block that fails leaves the cache untouched: only successful
/// fetches are memoized.
///
/// # Arguments
/// * `$cache`: The cache instance to use for retrieval and storage. The cache must have
///   `get_from_cache` and `set_in_cache` methods.
/// * `$key`: The key to use for caching the batch.
/// * `$ttl`: The time-to-live for the cached batch.
/// * `$block`: The async block to execute if the batch is not found in cache.
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        // Attempt to get the batch from cache
        if let Some(cached) = $cache.get_from_cache(&$key) {
            Ok(cached)
        } else {
            // If not in cache, execute the block to fetch the batch
            let value = $block.await?;
            // Store the fetched batch in cache
            $cache.set_in_cache(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
