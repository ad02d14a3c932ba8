mod log;

pub mod misc;
pub mod sample;
