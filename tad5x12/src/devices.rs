//! Bring-up of the codec instances an application owns.
//!
//! Each board declares its codecs as [`Tad5x12Config`](crate::Tad5x12Config)
//! statics, builds one driver per entry at startup and hands the list to
//! [`init_all`].
//!
//! ```ignore
//! static CODECS: [Tad5x12Config; 2] = [
//!     Tad5x12Config::new(registers::I2C_ADDR_0),
//!     Tad5x12Config::new(registers::I2C_ADDR_1),
//! ];
//!
//! let mut codecs = [
//!     Tad5x12::new(bus.acquire(), delay, &CODECS[0]),
//!     Tad5x12::new(bus.acquire(), delay, &CODECS[1]),
//! ];
//! devices::init_all(&mut codecs)?;
//! ```

use crate::control::AudioCodec;

/// A codec that failed to come up during [`init_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitFailure<E> {
    /// Position of the failing codec in the list.
    pub index: usize,
    pub error: E,
}

/// Run [`AudioCodec::init`] on every codec in order, stopping at the first
/// failure. Codecs after the failing one are left untouched.
pub fn init_all<C: AudioCodec>(codecs: &mut [C]) -> Result<(), InitFailure<C::Error>> {
    for (index, codec) in codecs.iter_mut().enumerate() {
        if let Err(error) = codec.init() {
            error!("Codec {} failed to initialise", index);
            return Err(InitFailure { index, error });
        }
        debug!("Codec {} initialised", index);
    }
    info!("{} codec(s) ready", codecs.len());
    Ok(())
}
