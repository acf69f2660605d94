#![no_std]

pub mod config;
pub mod dice;
pub mod driver;
pub mod line;
pub mod segments;

pub use config::DisplayConfig;
pub use dice::Die;
pub use driver::DisplayDriver;
pub use line::{Clock, Digit, Level, LinePort, PinMap};
pub use segments::{Segment, Segments};
