//! # tad5x12
//!
//! A `no_std` driver for the TI TAD5x12 stereo audio DAC, written against
//! the [`embedded-hal`](https://docs.rs/embedded-hal) 1.0 `I2c` and `DelayNs`
//! traits. It turns a small generic codec API (serial format, word length,
//! output routing, volume, power) into the chip's paged register writes.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Trait | [`control`] | [`AudioCodec`] contract and property types |
//! | Config | [`dai`] | Serial interface / stream configuration request |
//! | Codec | [`codec`] | TAD5x12 register map and driver |
//! | Bring-up | [`devices`] | Initialise a list of codec instances |
//!
//! ## Quick start
//!
//! ```ignore
//! use tad5x12::{AudioCodec, AudioCodecCfg, Tad5x12, Tad5x12Config};
//!
//! let mut codec = Tad5x12::new(i2c, delay, &Tad5x12Config::DEFAULT);
//! codec.init()?;
//! codec.configure(&AudioCodecCfg::playback_i2s(24))?;
//! codec.start_output();
//! codec.set_volume_db(-12.0)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | Log through `defmt`, `defmt::Format` on public types |
//! | `log` | no | Log through the `log` facade |
//!
//! With neither feature the log statements compile to nothing.

#![cfg_attr(not(test), no_std)]

// Declared ahead of the log macros: thiserror's `#[error]` helper would
// otherwise be ambiguous with `error!`.
mod error;

// This mod MUST precede the others so that they see its macros.
mod fmt;

pub mod codec;
pub mod control;
pub mod dai;
pub mod devices;

pub use codec::{OutputDrive, Tad5x12, Tad5x12Config};
pub use control::{AudioChannel, AudioCodec, AudioProperty, PropertyValue};
pub use dai::{AudioCodecCfg, AudioRoute, DaiType, I2sConfig};
pub use error::Error;
