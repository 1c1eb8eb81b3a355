//! Driver error type.

/// Errors returned by the codec configuration path.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The requested route, DAI type, word size, property or channel is not
    /// handled by this codec.
    #[error("unsupported operation")]
    Unsupported,
    /// A bus transaction failed.
    #[error("I2C transaction failed")]
    Io(E),
}

