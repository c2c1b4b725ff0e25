//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation, attacks and castling rules
//! - `edge_cases.rs` - Special positions: mates, stalemates, en passant, promotion
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `position.rs` - Position state, status and move parsing
//! - `perft.rs` - Move tree node counts against known values
//! - `search.rs` - Minimax and alpha-beta behavior
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod perft;
mod position;
