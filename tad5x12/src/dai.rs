//! Generic digital audio interface configuration.
//!
//! These types describe what the host asks a codec to do. They deliberately
//! cover more than the TAD5x12 supports so that a request can be expressed
//! and then rejected with [`Error::Unsupported`](crate::Error::Unsupported).

/// Direction of the audio data path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioRoute {
    /// Serial audio in, analog out.
    Playback,
    /// Analog in, serial audio out.
    Capture,
    /// Both directions at once.
    PlaybackCapture,
    /// Analog in routed straight to analog out.
    Bypass,
}

/// Serial audio frame format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiType {
    /// Philips I2S.
    I2s,
    /// Left-justified.
    LeftJustified,
    /// Right-justified.
    RightJustified,
    /// PCM short frame sync.
    PcmA,
    /// PCM long frame sync.
    PcmB,
    /// Time-division multiplexed.
    Tdm,
}

/// I2S-family stream parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sConfig {
    /// Bits per sample slot.
    pub word_size: u8,
    /// Number of channels in a frame.
    pub channels: u8,
    /// Frame clock (sample rate) in Hz.
    pub frame_clk_freq: u32,
}

impl Default for I2sConfig {
    fn default() -> Self {
        Self {
            word_size: 16,
            channels: 2,
            frame_clk_freq: 48_000,
        }
    }
}

/// Full codec configuration request passed to
/// [`AudioCodec::configure`](crate::AudioCodec::configure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioCodecCfg {
    /// Master clock frequency in Hz (0 if the codec derives its clocks from BCLK).
    pub mclk_freq: u32,
    pub dai_type: DaiType,
    pub dai_route: AudioRoute,
    pub dai_cfg: I2sConfig,
}

impl AudioCodecCfg {
    /// Playback over I2S with the given word size and default stream timing.
    pub const fn playback_i2s(word_size: u8) -> Self {
        Self {
            mclk_freq: 0,
            dai_type: DaiType::I2s,
            dai_route: AudioRoute::Playback,
            dai_cfg: I2sConfig {
                word_size,
                channels: 2,
                frame_clk_freq: 48_000,
            },
        }
    }
}
