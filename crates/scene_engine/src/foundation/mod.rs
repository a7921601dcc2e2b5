//! Foundation utilities: math, time, and logging

pub mod logging;
pub mod math;
pub mod time;
