//! TAD5x12 register addresses and bitfield definitions.
//!
//! All registers are 8-bit and live on page 0 unless noted. The I2C protocol
//! is `[register, value]` for writes and `write_read([register], [value])`
//! for reads.

// ── I2C addresses ──────────────────────────────────────────────────────────

/// ADDR1 = 0, ADDR0 = 0.
pub const I2C_ADDR_0: u8 = 0x50;
/// ADDR1 = 0, ADDR0 = 1.
pub const I2C_ADDR_1: u8 = 0x51;
/// ADDR1 = 1, ADDR0 = 0.
pub const I2C_ADDR_2: u8 = 0x52;
/// ADDR1 = 1, ADDR0 = 1.
pub const I2C_ADDR_3: u8 = 0x53;

// ── Paging and reset ───────────────────────────────────────────────────────

/// Page select. Present on every page; writing selects the active page.
pub const PAGE_CFG: u8 = 0x00;

/// Software reset.
/// - Bit 0 — SW_RESET (self-clearing)
pub const SW_RESET: u8 = 0x01;

/// Software reset trigger.
pub const SW_RESET_TRIGGER: u8 = 1 << 0;

// ── Device power state ─────────────────────────────────────────────────────

/// Device miscellaneous configuration.
/// - Bit 3 — DREG_VREF_EN (internal digital regulator and reference)
/// - Bit 0 — SLEEP_ENZ (0 = sleep, 1 = active)
pub const DEV_MISC_CFG: u8 = 0x02;

pub const SLEEP_ENZ: u8 = 1 << 0;
pub const DREG_VREF_EN: u8 = 1 << 3;

/// Value written by `init` to leave sleep mode.
pub const DEV_MISC_WAKE: u8 = SLEEP_ENZ | DREG_VREF_EN;

// ── Primary audio serial interface ─────────────────────────────────────────

/// PASI configuration 0.
/// - Bits 7:6 — PASI_FORMAT (0=TDM, 1=I2S, 2=LJ)
/// - Bits 5:4 — PASI_WLEN (0=16, 1=20, 2=24, 3=32 bit)
/// - Bits 3:0 — framing options (left untouched)
pub const PASI_CFG0: u8 = 0x1A;

pub const PASI_FORMAT_SHIFT: u8 = 6;
pub const PASI_WLEN_SHIFT: u8 = 4;
pub const PASI_FORMAT_WLEN_MASK: u8 = 0b1111_0000;

pub const PASI_FORMAT_I2S: u8 = 0b01;
pub const PASI_FORMAT_LEFT_JUSTIFIED: u8 = 0b10;

pub const PASI_WLEN_16: u8 = 0b00;
pub const PASI_WLEN_20: u8 = 0b01;
pub const PASI_WLEN_24: u8 = 0b10;
pub const PASI_WLEN_32: u8 = 0b11;

// ── OUT1 analog output stage ───────────────────────────────────────────────

/// OUT1 configuration 0.
/// - Bits 4:2 — OUT1_CFG (0=differential, 1=stereo single-ended, 2=mono SE P, ...)
/// - Bits 1:0 — OUT1_VCOM (common mode, default 0.6 × Vref)
pub const OUT1X_CFG0: u8 = 0x64;

pub const OUT1_CFG_MASK: u8 = 0b0001_1100;
/// Two single-ended outputs (OUT1P = left, OUT1N = right).
pub const OUT1_CFG_STEREO_SINGLE_ENDED: u8 = 0b001 << 2;

/// OUT1P drive and level.
/// - Bits 7:6 — OUT1P_DRIVE (0=line, 1=headphone, 2=4 Ω, 3=receiver)
/// - Bits 5:3 — OUT1P_LVL_CTRL (4 = 0 dB)
pub const OUT1X_CFG1: u8 = 0x65;

/// OUT1N drive and level, same layout as [`OUT1X_CFG1`].
pub const OUT1X_CFG2: u8 = 0x66;

pub const OUT_DRIVE_SHIFT: u8 = 6;
pub const OUT_DRIVE_LINE: u8 = 0b00;
pub const OUT_DRIVE_HEADPHONE: u8 = 0b01;
pub const OUT_DRIVE_4_OHM: u8 = 0b10;
pub const OUT_DRIVE_RECEIVER: u8 = 0b11;

/// Output level 0 dB, pre-shifted into bits 5:3.
pub const OUT_LVL_0DB: u8 = 0b100 << 3;

// ── DAC digital volume ─────────────────────────────────────────────────────

/// DAC channel 1A digital volume.
/// - 0 = mute, 1 = −100 dB, 201 = 0 dB, 255 = +27 dB (0.5 dB steps)
///
/// With [`DAC_DVOL_GANG`] set this volume applies to every DAC channel.
pub const DAC_CH1A_CFG0: u8 = 0x67;

pub const DAC_DVOL_MUTE: u8 = 0;
pub const DAC_DVOL_MIN: u8 = 1;
pub const DAC_DVOL_0DB: u8 = 201;
pub const DAC_DVOL_MAX: u8 = 255;

// ── DSP ────────────────────────────────────────────────────────────────────

/// DAC signal chain configuration.
/// - Bit 3 — DAC_DVOL_GANG (channel 1A volume controls all channels)
pub const DSP_CFG1: u8 = 0x73;

pub const DAC_DVOL_GANG: u8 = 1 << 3;

// ── Channel enable and power ───────────────────────────────────────────────

/// Channel enable.
/// - Bits 7:4 — input channels 1–4
/// - Bits 3:0 — output channels 1–4 (bit 3 = channel 1)
pub const CH_EN: u8 = 0x76;

/// Output channels 1 and 2 enabled, inputs off.
pub const CH_EN_OUT1_OUT2: u8 = 0b0000_1100;

/// Power configuration.
/// - Bit 7 — ADC_PDZ
/// - Bit 6 — DAC_PDZ
/// - Bit 5 — MICBIAS_PDZ
pub const PWR_CFG: u8 = 0x78;

pub const PWR_DAC_PDZ: u8 = 1 << 6;
pub const PWR_ALL_OFF: u8 = 0x00;
