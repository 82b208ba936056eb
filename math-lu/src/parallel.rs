//! Parallel utilities with feature-gated implementations
//!
//! Provides parallel abstractions backed by rayon when the `rayon` feature is
//! enabled, with sequential fallbacks otherwise.

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Number of worker threads the parallel helpers will use
#[cfg(feature = "rayon")]
pub fn current_num_threads() -> usize {
    rayon::current_num_threads()
}

/// Number of worker threads the parallel helpers will use
#[cfg(not(feature = "rayon"))]
pub fn current_num_threads() -> usize {
    1
}

/// Parallel for_each over disjoint mutable chunks of `chunk_len` elements
///
/// `f` receives the chunk index and the chunk. Chunks never overlap, so each
/// task owns its output exclusively.
#[cfg(feature = "rayon")]
pub fn parallel_chunks_mut<T, F>(data: &mut [T], chunk_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    use rayon::prelude::*;
    data.par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(i, chunk)| f(i, chunk));
}

/// Sequential chunked for_each (fallback)
#[cfg(not(feature = "rayon"))]
pub fn parallel_chunks_mut<T, F>(data: &mut [T], chunk_len: usize, f: F)
where
    F: Fn(usize, &mut [T]),
{
    data.chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(i, chunk)| f(i, chunk));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_chunks_mut() {
        let mut data = vec![0usize; 12];
        parallel_chunks_mut(&mut data, 4, |i, chunk| {
            for (k, v) in chunk.iter_mut().enumerate() {
                *v = i * 10 + k;
            }
        });
        assert_eq!(data, vec![0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]);
    }

    #[test]
    fn test_thread_count() {
        assert!(current_num_threads() >= 1);
        if !is_parallel_available() {
            assert_eq!(current_num_threads(), 1);
        }
    }
}
