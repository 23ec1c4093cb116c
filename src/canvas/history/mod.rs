//! Snapshot-based undo/redo history for the canvas.
//!
//! Every history-significant edit records a [`Snapshot`] of the document as it
//! was *before* the edit. Undo swaps the current document with the newest
//! snapshot and parks the current one on the redo stack; redo does the reverse.
//! Selecting and deselecting items are never recorded.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last edit
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone edit
//!
//! ## Module Structure
//!
//! - [`snapshot`] - Snapshot of the selection and item collection
//! - [`snapshot_history`] - Undo and redo stacks

mod snapshot;
mod snapshot_history;

#[cfg(test)]
mod tests;

// Re-exports
pub use snapshot::Snapshot;
pub use snapshot_history::SnapshotHistory;
