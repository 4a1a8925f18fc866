//! Rebuild module
//!
//! This module contains the rebuild template, its interpreter and the clock
//! snapshot used for date tokens.

mod clock;
mod interpreter;
mod template;

pub use clock::{ClockSnapshot, DateUnit};
pub use interpreter::rebuild;
pub use template::{Template, TemplateAtom};
