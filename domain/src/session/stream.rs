//! Stream state for a sequence of completion chunks.
//!
//! A stream is `Streaming` until the first chunk with a finish reason
//! arrives, then `Complete`. Well-behaved producers stop emitting at that
//! point; [`ChunkAccumulator`] rejects anything that arrives later.

use super::chunk::CompletionChunk;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while accumulating a chunk stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Chunk {chunk_id} arrived after the stream completed")]
    AlreadyComplete { chunk_id: String },
}

/// Lifecycle of a chunk stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamState {
    #[default]
    Streaming,
    Complete,
}

impl StreamState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamState::Complete)
    }
}

/// Accumulates the text of a chunk stream and tracks its state
#[derive(Debug, Clone, Default)]
pub struct ChunkAccumulator {
    text: String,
    state: StreamState,
    finish_reason: Option<String>,
    chunk_count: usize,
}

impl ChunkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk's delta and advance the state.
    pub fn push(&mut self, chunk: &CompletionChunk) -> Result<StreamState, StreamError> {
        if self.state.is_terminal() {
            return Err(StreamError::AlreadyComplete {
                chunk_id: chunk.id.clone(),
            });
        }

        self.text.push_str(chunk.content());
        self.chunk_count += 1;

        if chunk.is_complete() {
            self.state = StreamState::Complete;
            self.finish_reason = chunk.finish_reason().map(str::to_string);
        }
        Ok(self.state)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.finish_reason.as_deref()
    }

    /// Number of chunks accepted so far
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(text: &str) -> CompletionChunk {
        CompletionChunk::new("chatcmpl-1", "gpt-4o-mini", text, None)
    }

    fn last(text: &str) -> CompletionChunk {
        CompletionChunk::new("chatcmpl-1", "gpt-4o-mini", text, Some("stop".to_string()))
    }

    #[test]
    fn accumulates_until_terminal_chunk() {
        let mut acc = ChunkAccumulator::new();
        assert_eq!(acc.push(&delta("Hel")).unwrap(), StreamState::Streaming);
        assert_eq!(acc.push(&delta("lo")).unwrap(), StreamState::Streaming);
        assert!(!acc.is_complete());
        assert_eq!(acc.push(&last("!")).unwrap(), StreamState::Complete);

        assert!(acc.is_complete());
        assert_eq!(acc.text(), "Hello!");
        assert_eq!(acc.finish_reason(), Some("stop"));
        assert_eq!(acc.chunk_count(), 3);
    }

    #[test]
    fn rejects_chunks_after_completion() {
        let mut acc = ChunkAccumulator::new();
        acc.push(&last("done")).unwrap();

        let err = acc.push(&delta(" extra")).unwrap_err();
        assert_eq!(
            err,
            StreamError::AlreadyComplete {
                chunk_id: "chatcmpl-1".to_string()
            }
        );
        assert_eq!(acc.text(), "done");
        assert_eq!(acc.chunk_count(), 1);
    }

    #[test]
    fn chunk_without_choices_keeps_streaming() {
        let mut acc = ChunkAccumulator::new();
        let mut empty = delta("");
        empty.choices.clear();
        assert_eq!(acc.push(&empty).unwrap(), StreamState::Streaming);
        assert_eq!(acc.text(), "");
        assert_eq!(acc.finish_reason(), None);
    }

    #[test]
    fn default_state_is_streaming() {
        assert_eq!(StreamState::default(), StreamState::Streaming);
        assert!(!StreamState::Streaming.is_terminal());
        assert!(StreamState::Complete.is_terminal());
    }
}
