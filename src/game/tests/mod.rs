//! Game module tests.
//!
//! - `status.rs` - Check, checkmate, stalemate and terminal-state handling
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Apply/undo correctness and derived state updates
//! - `proptest.rs` - Property-based tests over random games

mod draw;
