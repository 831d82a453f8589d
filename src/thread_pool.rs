//! Shared thread pool for batch evaluation.
//!
//! Batches run on a dedicated rayon pool with a larger stack so that wide
//! canvases (each heatmap allocates its padded grid on the worker) do not
//! compete with the caller's own use of the global pool.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get or initialize the shared pool.
///
/// Configured with an 8 MB stack per thread and one thread per logical CPU.
/// Returns `None` if the pool could not be built, in which case callers fall
/// back to rayon's global pool.
#[cfg(feature = "parallel")]
pub fn get_thread_pool() -> Option<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            match rayon::ThreadPoolBuilder::new()
                .thread_name(|i| format!("gaze-metrics-{}", i))
                .stack_size(8 * 1024 * 1024)
                .build()
            {
                Ok(pool) => Some(pool),
                Err(err) => {
                    log::warn!("falling back to the global rayon pool: {}", err);
                    None
                }
            }
        })
        .as_ref()
}

/// Execute a parallel operation on the shared pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match get_thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

/// Without the `parallel` feature batches run inline.
#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
