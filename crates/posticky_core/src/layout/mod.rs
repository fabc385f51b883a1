//! Pure layout state for the split editor/preview pane.

pub mod split;
