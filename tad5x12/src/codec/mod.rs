//! TAD5x12 audio DAC driver module.
//!
//! Provides a driver for the TI TAD5x12 family (TAD5212 and relatives) as
//! used in a playback-only configuration: I2S or left-justified serial audio
//! in, stereo single-ended analog out.

pub mod registers;
mod tad5x12;

mod integration_tests;

pub use tad5x12::{OutputDrive, Tad5x12, Tad5x12Config};
