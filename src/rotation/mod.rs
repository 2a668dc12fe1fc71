pub mod shift;

pub use shift::{CircularShifter, ShiftGenerator};
