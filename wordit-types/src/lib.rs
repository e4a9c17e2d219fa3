pub mod game;
pub mod share;
pub mod errors;

// Re-export all types
pub use game::*;
pub use share::*;
pub use errors::*;
