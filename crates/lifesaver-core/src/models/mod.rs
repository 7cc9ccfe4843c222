//! Domain models for the LifeSaver system.

mod alert;
mod contact;
mod medical;

pub use alert::*;
pub use contact::*;
pub use medical::*;
