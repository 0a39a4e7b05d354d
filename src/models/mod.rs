pub mod generation;
pub mod session;

pub use generation::*;
pub use session::*;
