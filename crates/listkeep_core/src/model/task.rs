//! TODO task record.

use crate::model::record::{
    normalize_text, ListRecord, RecordField, RecordId, Toggle, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Storage key used by the TODO list.
pub const TASKS_STORAGE_KEY: &str = "todoAppTasks";

/// One TODO item. New tasks start with `done = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub text: String,
    pub done: bool,
}

/// Raw create input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Partial edit input. Completion state changes go through `toggle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub text: Option<String>,
}

impl ListRecord for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    const KIND: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: &TaskDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            text: normalize_text(RecordField::Text, &draft.text)?,
            done: false,
        })
    }

    fn patched(&self, patch: &TaskPatch) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        if let Some(text) = &patch.text {
            next.text = normalize_text(RecordField::Text, text)?;
        }
        Ok(next)
    }
}

impl Toggle for Task {
    fn is_done(&self) -> bool {
        self.done
    }

    fn toggle(&mut self) {
        self.done = !self.done;
    }
}
