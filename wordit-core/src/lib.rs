pub mod timer;
pub mod scoring;
pub mod validation;
pub mod session;
pub mod events;

// Re-export main components
pub use timer::*;
pub use scoring::*;
pub use validation::*;
pub use session::*;
pub use events::*;
