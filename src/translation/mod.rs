/*!
 * Batched translation of caption tracks.
 *
 * The batch translator slices a track into fixed-size batches, sends them
 * to a translation backend sequentially, and degrades to a partial result
 * when a batch fails rather than discarding everything translated so far.
 */

// Re-export main types for easier usage
pub use self::batch::BatchTranslator;

pub mod batch;
