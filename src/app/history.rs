//! Text-Snapshot-History für Undo/Redo.
//!
//! Jeder Eintrag ist die vollständige Code-Serialisierung eines Modellstands.

use crate::shared::options::HISTORY_MAX_DEPTH;

/// Undo/Redo-Manager über Code-Text-Snapshots.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_MAX_DEPTH)
    }
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Legt `text` auf den Undo-Stack und leert den Redo-Stack, sofern sich
    /// `text` vom obersten Eintrag unterscheidet.
    ///
    /// Gibt `true` zurück, wenn ein Eintrag angelegt wurde.
    pub fn record_if_changed(&mut self, text: &str) -> bool {
        if self.undo_stack.last().is_some_and(|top| top == text) {
            return false;
        }
        push_bounded(&mut self.undo_stack, text.to_string(), self.max_depth);
        self.redo_stack.clear();
        true
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the text to apply.
    pub fn pop_undo_with_current(&mut self, current: String) -> Option<String> {
        let prev = self.undo_stack.pop()?;
        push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the text to apply.
    pub fn pop_redo_with_current(&mut self, current: String) -> Option<String> {
        let next = self.redo_stack.pop()?;
        push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    /// Ändert die maximale Tiefe; überzählige alte Einträge fallen heraus.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        let max_depth = max_depth.max(1);
        self.max_depth = max_depth;
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            let excess = stack.len().saturating_sub(max_depth);
            stack.drain(..excess);
        }
    }

    /// Verwirft beide Stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut Vec<String>, entry: String, max_depth: usize) {
    if !stack.is_empty() && stack.len() >= max_depth {
        stack.remove(0);
    }
    stack.push(entry);
}
