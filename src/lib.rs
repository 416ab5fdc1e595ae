// Idiom demos library
// Each module holds one idiom; the matching demo lives in src/bin/.

pub mod config;
pub mod error;
pub mod job;
pub mod phase;
pub mod plant;
pub mod serial;
pub mod varargs;

pub use error::{IdiomError, Result};
pub use serial::{generate_serial_number, SerialNumberGenerator};
