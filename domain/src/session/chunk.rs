//! Incremental chat completion chunks.
//!
//! A [`CompletionChunk`] is one increment of a streamed response, in the
//! shape used by incremental chat-completion streaming:
//!
//! ```json
//! {"id":"chatcmpl-123","object":"chat.completion.chunk","model":"gpt-4o-mini",
//!  "choices":[{"index":0,"delta":{"content":"Hello"},"finish_reason":null}]}
//! ```
//!
//! Chunks are immutable once built. A stream ends with the first chunk
//! whose first choice carries a finish reason.

use serde::{Deserialize, Serialize};

/// Object tag carried by every chunk
pub const CHAT_COMPLETION_CHUNK_OBJECT: &str = "chat.completion.chunk";

fn default_object() -> String {
    CHAT_COMPLETION_CHUNK_OBJECT.to_string()
}

/// Incremental text fragment carried by a choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub content: String,
}

/// One choice within a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub delta: ChunkDelta,
    /// Present once the stream has finished (e.g. `"stop"`, `"length"`)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// One increment of a streamed completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionChunk {
    pub id: String,
    #[serde(default = "default_object")]
    pub object: String,
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

impl CompletionChunk {
    /// Builds a single-choice chunk.
    ///
    /// `finish_reason` is `None` while the stream is still producing text.
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        content_delta: impl Into<String>,
        finish_reason: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            object: default_object(),
            model: model.into(),
            choices: vec![ChunkChoice {
                index: 0,
                delta: ChunkDelta {
                    content: content_delta.into(),
                },
                finish_reason,
            }],
        }
    }

    /// Returns true if the first choice carries a finish reason.
    ///
    /// Presence is what counts: an empty finish reason still terminates.
    pub fn is_complete(&self) -> bool {
        self.choices
            .first()
            .is_some_and(|choice| choice.finish_reason.is_some())
    }

    /// Text delta of the first choice, or `""` when there are no choices.
    pub fn content(&self) -> &str {
        self.choices
            .first()
            .map(|choice| choice.delta.content.as_str())
            .unwrap_or("")
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.finish_reason.as_deref())
    }
}
