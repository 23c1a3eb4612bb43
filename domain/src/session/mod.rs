//! Streaming session domain.
//!
//! - [`chunk::CompletionChunk`]: one increment of a streamed response
//! - [`stream::ChunkAccumulator`]: assembles chunks and tracks stream state

pub mod chunk;
pub mod stream;
