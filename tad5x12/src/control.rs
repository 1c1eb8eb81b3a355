use crate::dai::AudioCodecCfg;

/// Runtime-adjustable codec property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioProperty {
    OutputVolume,
    OutputMute,
    InputVolume,
    InputMute,
}

/// Channel selector for [`AudioCodec::set_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioChannel {
    FrontLeft,
    FrontRight,
    Lfe,
    FrontCenter,
    RearLeft,
    RearRight,
    SideLeft,
    SideRight,
    /// Every channel the codec drives.
    All,
}

/// Value carried by a property update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PropertyValue {
    /// Codec-specific volume code.
    Volume(i32),
    Mute(bool),
}

/// Generic codec control contract, implemented by codec drivers and driven
/// by the application.
pub trait AudioCodec {
    /// Error type for control operations.
    type Error;

    /// Bring the chip out of reset into an idle, configurable state.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Apply a stream configuration.
    fn configure(&mut self, cfg: &AudioCodecCfg) -> Result<(), Self::Error>;

    /// Power the output path up. Failures are reported through the log only.
    fn start_output(&mut self);

    /// Power the output path down. Failures are reported through the log only.
    fn stop_output(&mut self);

    /// Set a property on one channel (or all of them).
    fn set_property(
        &mut self,
        property: AudioProperty,
        channel: AudioChannel,
        value: PropertyValue,
    ) -> Result<(), Self::Error>;

    /// Commit properties staged by [`set_property`](Self::set_property).
    fn apply_properties(&mut self) -> Result<(), Self::Error>;
}
