/// Step-wise rounding used throughout the simulation.
pub mod rounding;

pub use rounding::{percent_of, round_dp2};
