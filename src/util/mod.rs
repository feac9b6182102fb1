pub mod alloc;
pub mod error;
pub mod panic;
pub mod result;
