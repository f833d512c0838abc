pub use crate::errors::SystemError;
pub use crate::system::SolvedSystem;
pub use crate::system::SquareSystem;
