//! Game rules.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the engine and the tests share one source of truth
//! for what counts as a finished game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
