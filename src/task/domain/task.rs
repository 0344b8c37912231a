//! Task aggregate root and its request payload.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Serializes as `{ "id": .., "content": .., "done": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    content: String,
    done: bool,
}

impl Task {
    /// Creates an open task with the given identifier and content.
    #[must_use]
    pub fn new(id: TaskId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            done: false,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Overwrites content and completion flag from a draft.
    ///
    /// The identifier is preserved; any identifier carried by the draft is
    /// ignored.
    pub fn replace(&mut self, draft: TaskDraft) {
        self.content = draft.content;
        self.done = draft.done;
    }

    /// Marks the task as completed. Repeated calls are no-ops.
    pub const fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Client-supplied task payload for create and update requests.
///
/// The `id` field is accepted for wire compatibility but never trusted: the
/// repository assigns identifiers and updates address tasks by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Identifier echoed by clients; ignored by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Task description.
    #[serde(default)]
    pub content: String,
    /// Completion flag.
    #[serde(default)]
    pub done: bool,
}

impl TaskDraft {
    /// Creates an open draft with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            done: false,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Sets the client-supplied identifier.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
