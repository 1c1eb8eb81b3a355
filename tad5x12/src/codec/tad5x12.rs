//! TAD5x12 stereo audio DAC driver.
//!
//! The driver is generic over any [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`] implementation. It keeps no register
//! shadow: every control call goes straight to the chip.
//!
//! # Example
//!
//! ```ignore
//! let mut codec = Tad5x12::new(i2c, delay, &Tad5x12Config::DEFAULT);
//! codec.init()?;
//! codec.configure(&AudioCodecCfg::playback_i2s(24))?;
//! codec.start_output();
//! codec.set_property(AudioProperty::OutputVolume, AudioChannel::All, PropertyValue::Volume(180))?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::registers as reg;
use crate::control::{AudioChannel, AudioCodec, AudioProperty, PropertyValue};
use crate::dai::{AudioCodecCfg, AudioRoute, DaiType};
use crate::Error;

// ── Configuration ──────────────────────────────────────────────────────────

/// Drive strength of the OUT1P/OUT1N amplifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDrive {
    /// Line-level load (≥ 600 Ω).
    LineOut,
    /// Headphone load (16–32 Ω).
    #[default]
    Headphone,
    /// 4 Ω speaker load.
    FourOhm,
    /// Receiver / high-current load.
    Receiver,
}

impl OutputDrive {
    const fn bits(self) -> u8 {
        match self {
            OutputDrive::LineOut => reg::OUT_DRIVE_LINE,
            OutputDrive::Headphone => reg::OUT_DRIVE_HEADPHONE,
            OutputDrive::FourOhm => reg::OUT_DRIVE_4_OHM,
            OutputDrive::Receiver => reg::OUT_DRIVE_RECEIVER,
        }
    }

    /// `OUT1x_CFG1`/`OUT1x_CFG2` value: this drive with a 0 dB output level.
    pub const fn out_cfg(self) -> u8 {
        (self.bits() << reg::OUT_DRIVE_SHIFT) | reg::OUT_LVL_0DB
    }
}

/// Static per-instance configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tad5x12Config {
    /// 7-bit I2C address selected by the ADDR straps.
    pub address: u8,
    pub output_drive: OutputDrive,
}

impl Tad5x12Config {
    /// Both ADDR straps low, headphone drive.
    pub const DEFAULT: Self = Self::new(reg::I2C_ADDR_0);

    pub const fn new(address: u8) -> Self {
        Self {
            address,
            output_drive: OutputDrive::Headphone,
        }
    }

    pub const fn with_output_drive(self, output_drive: OutputDrive) -> Self {
        Self {
            output_drive,
            ..self
        }
    }
}

impl Default for Tad5x12Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── Field encodings ────────────────────────────────────────────────────────

fn pasi_format(dai_type: DaiType) -> Option<u8> {
    match dai_type {
        DaiType::I2s => Some(reg::PASI_FORMAT_I2S),
        DaiType::LeftJustified => Some(reg::PASI_FORMAT_LEFT_JUSTIFIED),
        _ => None,
    }
}

fn pasi_word_length(word_size: u8) -> Option<u8> {
    match word_size {
        16 => Some(reg::PASI_WLEN_16),
        20 => Some(reg::PASI_WLEN_20),
        24 => Some(reg::PASI_WLEN_24),
        32 => Some(reg::PASI_WLEN_32),
        _ => None,
    }
}

/// Lift a bus result into the driver error, logging which step failed.
fn io_step<T, E>(result: Result<T, E>, step: &'static str) -> Result<T, Error<E>> {
    result.map_err(|err| {
        error!("Failed to {}", step);
        Error::Io(err)
    })
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// TAD5x12 audio DAC driver.
pub struct Tad5x12<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    output_drive: OutputDrive,
}

impl<I2C, D> Tad5x12<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Default I2C address (both ADDR straps low).
    pub const DEFAULT_ADDRESS: u8 = reg::I2C_ADDR_0;

    /// Settle time after a software reset. The chip has no ready flag.
    const RESET_DELAY_MS: u32 = 1;

    pub fn new(i2c: I2C, delay: D, config: &Tad5x12Config) -> Self {
        Self {
            i2c,
            delay,
            address: config.address,
            output_drive: config.output_drive,
        }
    }

    /// The 7-bit I2C address this instance talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    // ── Low-level I2C helpers ──────────────────────────────────────────

    /// Write one register on the active page.
    pub fn write(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    /// Read one register on the active page.
    pub fn read(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    /// Read-modify-write: `new = (current & !mask) | (value & mask)`.
    ///
    /// The write is skipped when the register already holds `new`.
    pub fn write_masked(&mut self, register: u8, value: u8, mask: u8) -> Result<(), I2C::Error> {
        let current = self.read(register)?;
        let new_val = (current & !mask) | (value & mask);
        if new_val == current {
            return Ok(());
        }
        self.write(register, new_val)
    }

    /// Select the register page for subsequent accesses.
    pub fn set_page(&mut self, page: u8) -> Result<(), I2C::Error> {
        self.write(reg::PAGE_CFG, page)
    }

    fn sw_reset(&mut self) -> Result<(), I2C::Error> {
        self.write_masked(reg::SW_RESET, reg::SW_RESET_TRIGGER, reg::SW_RESET_TRIGGER)
    }

    // ── Volume ─────────────────────────────────────────────────────────

    /// Clamp a host volume request to the 8-bit digital volume code.
    pub fn clamp_volume(volume: i32) -> u8 {
        volume.clamp(0, i32::from(reg::DAC_DVOL_MAX)) as u8
    }

    /// Convert a gain in dB to the digital volume code (0.5 dB steps,
    /// 201 = 0 dB). The result never selects mute; NaN maps to the minimum.
    pub fn db_to_volume(db: f32) -> u8 {
        if db.is_nan() {
            return reg::DAC_DVOL_MIN;
        }
        let code = libm::roundf(f32::from(reg::DAC_DVOL_0DB) + 2.0 * db);
        code.clamp(f32::from(reg::DAC_DVOL_MIN), f32::from(reg::DAC_DVOL_MAX)) as u8
    }

    /// Write the ganged DAC digital volume.
    pub fn set_volume(&mut self, code: u8) -> Result<(), Error<I2C::Error>> {
        io_step(self.write(reg::DAC_CH1A_CFG0, code), "set output volume")?;
        debug!("Output volume set to {}", code);
        Ok(())
    }

    /// Set the output gain in dB (−100 dB to +27 dB, 0.5 dB steps).
    pub fn set_volume_db(&mut self, db: f32) -> Result<(), Error<I2C::Error>> {
        self.set_volume(Self::db_to_volume(db))
    }

    /// Mute the output through the digital volume.
    pub fn mute(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_volume(reg::DAC_DVOL_MUTE)
    }
}

// ── AudioCodec trait implementation ────────────────────────────────────────

impl<I2C, D> AudioCodec for Tad5x12<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = Error<I2C::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        io_step(self.set_page(0), "set page 0")?;
        debug!("Set to page 0");

        io_step(self.sw_reset(), "reset device")?;
        debug!("Device reset");

        self.delay.delay_ms(Self::RESET_DELAY_MS);

        // Exit sleep with the digital regulator and reference enabled
        io_step(
            self.write(reg::DEV_MISC_CFG, reg::DEV_MISC_WAKE),
            "exit sleep mode",
        )?;
        debug!("Exited sleep mode");

        Ok(())
    }

    fn configure(&mut self, cfg: &AudioCodecCfg) -> Result<(), Self::Error> {
        if cfg.dai_route != AudioRoute::Playback {
            error!("Unsupported route: {:?}", cfg.dai_route);
            return Err(Error::Unsupported);
        }

        let Some(format) = pasi_format(cfg.dai_type) else {
            error!("Unsupported DAI type: {:?}", cfg.dai_type);
            return Err(Error::Unsupported);
        };

        let Some(word_length) = pasi_word_length(cfg.dai_cfg.word_size) else {
            error!("Unsupported word size: {}", cfg.dai_cfg.word_size);
            return Err(Error::Unsupported);
        };

        io_step(self.set_page(0), "set page 0")?;

        io_step(
            self.write_masked(
                reg::PASI_CFG0,
                (format << reg::PASI_FORMAT_SHIFT) | (word_length << reg::PASI_WLEN_SHIFT),
                reg::PASI_FORMAT_WLEN_MASK,
            ),
            "set format and word length",
        )?;

        // OUT1P = left, OUT1N = right, common mode left at its reset value
        io_step(
            self.write_masked(
                reg::OUT1X_CFG0,
                reg::OUT1_CFG_STEREO_SINGLE_ENDED,
                reg::OUT1_CFG_MASK,
            ),
            "set output config",
        )?;

        let drive = self.output_drive.out_cfg();
        io_step(
            self.write(reg::OUT1X_CFG1, drive),
            "set output drive strength and gain on OUT1P",
        )?;
        io_step(
            self.write(reg::OUT1X_CFG2, drive),
            "set output drive strength and gain on OUT1N",
        )?;

        io_step(
            self.write(reg::CH_EN, reg::CH_EN_OUT1_OUT2),
            "enable output channels",
        )?;

        io_step(
            self.write_masked(reg::DSP_CFG1, reg::DAC_DVOL_GANG, reg::DAC_DVOL_GANG),
            "gang volume controls",
        )?;

        info!(
            "Configured {:?} playback, {} bit",
            cfg.dai_type,
            cfg.dai_cfg.word_size
        );
        Ok(())
    }

    fn start_output(&mut self) {
        if self.write(reg::PWR_CFG, reg::PWR_DAC_PDZ).is_err() {
            error!("Failed to power on DAC");
        }
    }

    fn stop_output(&mut self) {
        if self.write(reg::PWR_CFG, reg::PWR_ALL_OFF).is_err() {
            error!("Failed to power off DAC");
        }
    }

    fn set_property(
        &mut self,
        property: AudioProperty,
        channel: AudioChannel,
        value: PropertyValue,
    ) -> Result<(), Self::Error> {
        let volume = match (property, value) {
            (AudioProperty::OutputVolume, PropertyValue::Volume(volume)) => volume,
            _ => {
                error!("Unsupported property: {:?}", property);
                return Err(Error::Unsupported);
            }
        };

        if channel != AudioChannel::All {
            error!("Unsupported channel: {:?}", channel);
            return Err(Error::Unsupported);
        }

        self.set_volume(Self::clamp_volume(volume))
    }

    fn apply_properties(&mut self) -> Result<(), Self::Error> {
        // Nothing is staged: set_property writes through.
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
