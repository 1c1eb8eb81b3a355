//! Integration tests driving the codec through whole bring-up sequences.
//!
//! A software model of the chip keeps a register file and records every bus
//! access and delay in one ordered event log:
//!
//! ```text
//! AudioCodec::init/configure/... → Tad5x12 → RecordingBus ─┐
//!                                          → RecordingDelay ┴→ event log
//! ```

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embedded_hal::delay::DelayNs;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

    use crate::codec::registers as reg;
    use crate::codec::{Tad5x12, Tad5x12Config};
    use crate::control::{AudioChannel, AudioCodec, AudioProperty, PropertyValue};
    use crate::dai::AudioCodecCfg;
    use crate::devices::{self, InitFailure};
    use crate::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Write(u8, u8),
        Read(u8),
        DelayMs(u32),
        DelayNs(u32),
    }

    type EventLog = Rc<RefCell<Vec<Event>>>;

    // ── Chip model ────────────────────────────────────────────────────

    /// Register file behind an I2C bus. Writing the reset trigger clears
    /// every register, like the real part.
    struct RecordingBus {
        regs: [u8; 256],
        pointer: u8,
        fail_on_write: Option<u8>,
        log: EventLog,
    }

    impl RecordingBus {
        fn new(log: &EventLog) -> Self {
            Self {
                regs: [0; 256],
                pointer: 0,
                fail_on_write: None,
                log: Rc::clone(log),
            }
        }

        fn failing_on(log: &EventLog, register: u8) -> Self {
            Self {
                fail_on_write: Some(register),
                ..Self::new(log)
            }
        }

        fn reg(&self, register: u8) -> u8 {
            self.regs[register as usize]
        }
    }

    impl ErrorType for RecordingBus {
        type Error = ErrorKind;
    }

    impl I2c for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            assert_eq!(address, reg::I2C_ADDR_0);
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => match **bytes {
                        [register, value] => {
                            if self.fail_on_write == Some(register) {
                                return Err(ErrorKind::Other);
                            }
                            self.log.borrow_mut().push(Event::Write(register, value));
                            if register == reg::SW_RESET && value & reg::SW_RESET_TRIGGER != 0 {
                                self.regs = [0; 256];
                            } else {
                                self.regs[register as usize] = value;
                            }
                        }
                        [register] => self.pointer = register,
                        _ => return Err(ErrorKind::Other),
                    },
                    Operation::Read(buf) => {
                        self.log.borrow_mut().push(Event::Read(self.pointer));
                        for byte in buf.iter_mut() {
                            *byte = self.regs[self.pointer as usize];
                        }
                    }
                }
            }
            Ok(())
        }
    }

    struct RecordingDelay {
        log: EventLog,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayNs(ns));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    type ModelCodec = Tad5x12<RecordingBus, RecordingDelay>;

    fn model_codec(bus: RecordingBus, log: &EventLog) -> ModelCodec {
        let delay = RecordingDelay {
            log: Rc::clone(log),
        };
        Tad5x12::new(bus, delay, &Tad5x12Config::DEFAULT)
    }

    fn new_log() -> EventLog {
        Rc::new(RefCell::new(Vec::new()))
    }

    // ── Init sequencing ───────────────────────────────────────────────

    #[test]
    fn init_orders_page_reset_delay_wake() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::new(&log), &log);
        codec.init().unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Write(reg::PAGE_CFG, 0),
                Event::Read(reg::SW_RESET),
                Event::Write(reg::SW_RESET, reg::SW_RESET_TRIGGER),
                Event::DelayMs(1),
                Event::Write(reg::DEV_MISC_CFG, reg::SLEEP_ENZ | reg::DREG_VREF_EN),
            ]
        );
    }

    #[test]
    fn failed_reset_skips_delay_and_wake() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::failing_on(&log, reg::SW_RESET), &log);
        assert_eq!(codec.init(), Err(Error::Io(ErrorKind::Other)));

        let events = log.borrow();
        assert_eq!(
            *events,
            [Event::Write(reg::PAGE_CFG, 0), Event::Read(reg::SW_RESET)]
        );
        assert!(!events
            .iter()
            .any(|e| matches!(e, Event::DelayMs(_) | Event::DelayNs(_))));
    }

    #[test]
    fn failed_wake_reports_io_error_after_delay() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::failing_on(&log, reg::DEV_MISC_CFG), &log);
        assert_eq!(codec.init(), Err(Error::Io(ErrorKind::Other)));
        assert_eq!(log.borrow().last(), Some(&Event::DelayMs(1)));
    }

    // ── Full bring-up ─────────────────────────────────────────────────

    #[test]
    fn playback_bring_up_register_state() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::new(&log), &log);

        codec.init().unwrap();
        codec.configure(&AudioCodecCfg::playback_i2s(24)).unwrap();
        codec.start_output();
        codec
            .set_property(
                AudioProperty::OutputVolume,
                AudioChannel::All,
                PropertyValue::Volume(300),
            )
            .unwrap();
        codec.apply_properties().unwrap();

        let (bus, _) = codec.release();
        assert_eq!(bus.reg(reg::PAGE_CFG), 0);
        assert_eq!(bus.reg(reg::DEV_MISC_CFG), 0b0000_1001);
        assert_eq!(bus.reg(reg::PASI_CFG0) & 0xF0, 0x60);
        assert_eq!(bus.reg(reg::OUT1X_CFG0) & 0b0001_1100, 0b0000_0100);
        assert_eq!(bus.reg(reg::OUT1X_CFG1), 0x60);
        assert_eq!(bus.reg(reg::OUT1X_CFG2), 0x60);
        assert_eq!(bus.reg(reg::CH_EN), 0b0000_1100);
        assert_ne!(bus.reg(reg::DSP_CFG1) & reg::DAC_DVOL_GANG, 0);
        assert_eq!(bus.reg(reg::PWR_CFG), 0b0100_0000);
        assert_eq!(bus.reg(reg::DAC_CH1A_CFG0), 255);
    }

    #[test]
    fn configure_returns_to_page_zero() {
        let log = new_log();
        let mut bus = RecordingBus::new(&log);
        bus.regs[reg::PAGE_CFG as usize] = 1;
        let mut codec = model_codec(bus, &log);

        codec.configure(&AudioCodecCfg::playback_i2s(16)).unwrap();

        assert_eq!(log.borrow().first(), Some(&Event::Write(reg::PAGE_CFG, 0)));
        let (bus, _) = codec.release();
        assert_eq!(bus.reg(reg::PAGE_CFG), 0);
        assert_eq!(bus.reg(reg::CH_EN), 0b0000_1100);
    }

    #[test]
    fn reset_clears_previous_configuration() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::new(&log), &log);

        codec.configure(&AudioCodecCfg::playback_i2s(32)).unwrap();
        codec.start_output();
        codec.init().unwrap();

        let (bus, _) = codec.release();
        assert_eq!(bus.reg(reg::CH_EN), 0);
        assert_eq!(bus.reg(reg::PWR_CFG), 0);
        assert_eq!(bus.reg(reg::DEV_MISC_CFG), reg::DEV_MISC_WAKE);
    }

    #[test]
    fn stop_output_powers_dac_down() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::new(&log), &log);

        codec.start_output();
        codec.stop_output();

        assert_eq!(
            *log.borrow(),
            [
                Event::Write(reg::PWR_CFG, reg::PWR_DAC_PDZ),
                Event::Write(reg::PWR_CFG, reg::PWR_ALL_OFF),
            ]
        );
    }

    #[test]
    fn unsupported_request_leaves_bus_idle() {
        let log = new_log();
        let mut codec = model_codec(RecordingBus::new(&log), &log);

        assert_eq!(
            codec.configure(&AudioCodecCfg::playback_i2s(12)),
            Err(Error::Unsupported)
        );
        assert_eq!(
            codec.set_property(
                AudioProperty::OutputVolume,
                AudioChannel::FrontLeft,
                PropertyValue::Volume(100),
            ),
            Err(Error::Unsupported)
        );
        assert!(log.borrow().is_empty());
    }

    // ── Multi-instance bring-up ───────────────────────────────────────

    #[test]
    fn init_all_brings_up_every_codec() {
        let log = new_log();
        let mut codecs = [
            model_codec(RecordingBus::new(&log), &log),
            model_codec(RecordingBus::new(&log), &log),
        ];
        devices::init_all(&mut codecs).unwrap();

        let wakes = log
            .borrow()
            .iter()
            .filter(|e| **e == Event::Write(reg::DEV_MISC_CFG, reg::DEV_MISC_WAKE))
            .count();
        assert_eq!(wakes, 2);
    }

    #[test]
    fn init_all_stops_at_failing_codec() {
        let first = new_log();
        let second = new_log();
        let third = new_log();
        let mut codecs = [
            model_codec(RecordingBus::new(&first), &first),
            model_codec(RecordingBus::failing_on(&second, reg::PAGE_CFG), &second),
            model_codec(RecordingBus::new(&third), &third),
        ];

        assert_eq!(
            devices::init_all(&mut codecs),
            Err(InitFailure {
                index: 1,
                error: Error::Io(ErrorKind::Other),
            })
        );
        assert_eq!(first.borrow().len(), 5);
        assert!(second.borrow().is_empty());
        assert!(third.borrow().is_empty());
    }
}
