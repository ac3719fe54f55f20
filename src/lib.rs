#![no_std]

//! # BME280 Environmental Sensor Driver
//!
//! A register-level, `no_std` driver for the Bosch BME280 combined
//! pressure/temperature/humidity sensor.
//!
//! The driver is built around two ideas:
//! - **Staged registers**: configuration registers are composed in
//!   memory with `prepare_*` calls and transmitted explicitly with the
//!   matching `commit_*` call, so a full configuration costs one bus
//!   write per register instead of one per field.
//! - **Count-checked transfers**: the bus is reached only through the
//!   [`transport::Transport`] seam, which reports transferred byte
//!   counts; every short transfer surfaces as a typed error instead of
//!   silently corrupting device state.
//!
//! Compensation uses the datasheet's integer-only fixed-point formulas.
//! No FPU required.
//!
//! ## Units
//! - **Temperature**: Centigrade (°C * 100) -> 2189 = 21.89 °C
//! - **Pressure**: Q24.8 Pascal (Pa * 256) -> 26155218 = 102168.8 Pa
//! - **Humidity**: Q22.10 percent (%RH * 1024) -> 40292 = 39.3 %RH

mod calc;
pub mod calib;
pub mod settings;
pub mod transport;

pub use calib::Calibration;
pub use settings::{Filter, Mode, Oversampling, StandbyTime};
pub use transport::{I2cTransport, Transport};

/// Register addresses and fixed command values.
mod regs {
    pub const ID: u8 = 0xD0;
    pub const RESET: u8 = 0xE0;
    pub const CTRL_HUM: u8 = 0xF2;
    pub const STATUS: u8 = 0xF3;
    pub const CTRL_MEAS: u8 = 0xF4;
    pub const CONFIG: u8 = 0xF5;
    pub const DATA: u8 = 0xF7;
    pub const DATA_LEN: usize = 8;

    pub const RESET_COMMAND: u8 = 0xB6;
}

/// Addresses and sizes of the calibration register blocks.
pub(crate) mod calib_mem {
    pub const BLOCK_TP_ADDR: u8 = 0x88;
    pub const BLOCK_TP_LEN: usize = 25;
    pub const BLOCK_H1_ADDR: u8 = 0xA1;
    pub const BLOCK_HUM_ADDR: u8 = 0xE1;
    pub const BLOCK_HUM_LEN: usize = 7;
}

/// Silicon id the chip reports at register 0xD0. Diagnostic only, the
/// driver does not gate on it.
pub const CHIP_ID: u8 = 0x60;

/// Device address with the SDO pin tied to ground.
pub const ADDRESS_SDO_GND: u8 = 0x76;
/// Device address with the SDO pin tied to V_DDIO.
pub const ADDRESS_SDO_VDDIO: u8 = 0x77;

/// Errors returned by the driver.
///
/// Generic over the transport's error type, which passes through
/// unchanged; the driver does not interpret platform failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport accepted the write but transferred the wrong
    /// number of bytes.
    WriteAmount { expected: usize, written: usize },
    /// The transport accepted the read but transferred the wrong
    /// number of bytes.
    ReadAmount { expected: usize, read: usize },
    /// Transport-level failure, carried verbatim.
    Bus(E),
    /// The requested device address is reserved by the two-wire bus
    /// specification (0x00..=0x07 and 0x78..=0x7F).
    AddressReserved(u8),
}

/// Decoded status register (0xF3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// A conversion is running (bit 3).
    pub measuring: bool,
    /// NVM data is being copied to the image registers (bit 0).
    pub updating: bool,
}

impl Status {
    pub fn from_bits(byte: u8) -> Self {
        Self {
            measuring: byte & (1 << 3) != 0,
            updating: byte & 1 != 0,
        }
    }
}

/// Uncompensated ADC codes read from the burst measurement registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    /// 20-bit pressure code.
    pub pressure: u32,
    /// 20-bit temperature code.
    pub temperature: u32,
    /// 16-bit humidity code.
    pub humidity: u16,
}

/// Temperature in Centigrade * 100.
///
/// # Example
/// ```rust
/// use bme280_driver::Temperature;
/// let temp = Temperature(2189);
/// assert_eq!(temp.split(), (21, 89)); // 21.89 °C
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature(pub i32);

impl Temperature {
    /// Splits the fixed-point value into whole degrees and hundredths.
    pub fn split(&self) -> (i32, i32) {
        (self.0 / 100, self.0 % 100)
    }
}

/// Atmospheric pressure as Q24.8 Pascal (Pa * 256).
///
/// # Example
/// ```rust
/// use bme280_driver::Pressure;
/// let press = Pressure(26155218);
/// assert_eq!(press.pascals(), 102168); // 1021.7 hPa
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pressure(pub u32);

impl Pressure {
    /// Whole Pascals, fractional part discarded.
    pub fn pascals(&self) -> u32 {
        self.0 >> 8
    }
}

/// Relative humidity as Q22.10 percent (%RH * 1024).
///
/// # Example
/// ```rust
/// use bme280_driver::Humidity;
/// let hum = Humidity(40292);
/// assert_eq!(hum.split(), (39, 347)); // 39.347 %RH
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Humidity(pub u32);

impl Humidity {
    /// Splits the fixed-point value into whole percent and thousandths.
    pub fn split(&self) -> (u32, u32) {
        (self.0 >> 10, ((self.0 & 0x3FF) * 1000) >> 10)
    }
}

/// Compensated measurement triplet in physical units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub humidity: Humidity,
}

/// One BME280 on the bus.
///
/// Owns its transport; nothing is shared or global. The staged register
/// images hold the last `prepare_*` result until the matching `commit_*`
/// sends them. Not safe for concurrent use: serialize access per
/// device, and per bus across devices.
#[derive(Debug)]
pub struct Bme280<T> {
    transport: T,
    address: u8,
    ctrl_meas: Option<u8>,
    config: Option<u8>,
    ctrl_hum: Option<u8>,
    calibration: Calibration,
}

fn address_is_reserved(address: u8) -> bool {
    address & 0x78 == 0x00 || address & 0x78 == 0x78
}

impl<T> Bme280<T>
where
    T: Transport,
{
    /// Creates a driver for the device at `address`.
    ///
    /// Fails with [`Error::AddressReserved`] for bus-reserved addresses
    /// before any traffic is attempted. Does not touch the bus.
    pub fn new(transport: T, address: u8) -> Result<Self, Error<T::Error>> {
        if address_is_reserved(address) {
            return Err(Error::AddressReserved(address));
        }
        Ok(Self {
            transport,
            address,
            ctrl_meas: None,
            config: None,
            ctrl_hum: None,
            calibration: Calibration::default(),
        })
    }

    /// Releases the transport.
    pub fn free(self) -> T {
        self.transport
    }

    /// Reads the factory calibration from the sensor.
    ///
    /// Call once before the first compensated measurement.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        self.read_calibration()
    }

    /// Reads the three calibration blocks and unpacks the coefficients.
    ///
    /// The three bursts form one logical operation: the stored
    /// coefficients are replaced only after all of them succeed, so a
    /// failed burst never leaves a mixed old/new coefficient set.
    pub fn read_calibration(&mut self) -> Result<(), Error<T::Error>> {
        let mut block_tp = [0u8; calib_mem::BLOCK_TP_LEN];
        self.read_register(calib_mem::BLOCK_TP_ADDR, &mut block_tp)?;

        let mut block_h1 = [0u8; 1];
        self.read_register(calib_mem::BLOCK_H1_ADDR, &mut block_h1)?;

        let mut block_hum = [0u8; calib_mem::BLOCK_HUM_LEN];
        self.read_register(calib_mem::BLOCK_HUM_ADDR, &mut block_hum)?;

        self.calibration = Calibration::from_burst_buffers(&block_tp, block_h1[0], &block_hum);
        Ok(())
    }

    /// The coefficients from the last successful calibration read.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Reads the chip id register (expected value: [`CHIP_ID`]).
    pub fn chip_id(&mut self) -> Result<u8, Error<T::Error>> {
        let mut id = [0u8; 1];
        self.read_register(regs::ID, &mut id)?;
        Ok(id[0])
    }

    /// Soft-resets the sensor by writing the fixed command value.
    ///
    /// All configuration registers fall back to their defaults; staged
    /// images in this handle are unaffected.
    pub fn reset(&mut self) -> Result<(), Error<T::Error>> {
        self.write_register(&[regs::RESET, regs::RESET_COMMAND])
    }

    /// Reads and decodes the status register.
    pub fn status(&mut self) -> Result<Status, Error<T::Error>> {
        let mut status = [0u8; 1];
        self.read_register(regs::STATUS, &mut status)?;
        Ok(Status::from_bits(status[0]))
    }

    /// Stages the measurement control register (0xF4). No bus traffic.
    pub fn prepare_measure_control(
        &mut self,
        temperature: Oversampling,
        pressure: Oversampling,
        mode: Mode,
    ) {
        self.ctrl_meas = Some(settings::ctrl_meas_bits(
            temperature as u8,
            pressure as u8,
            mode as u8,
        ));
    }

    /// Sends the staged measurement control image; a zeroed image if
    /// nothing was staged.
    pub fn commit_measure_control(&mut self) -> Result<(), Error<T::Error>> {
        self.write_register(&[regs::CTRL_MEAS, self.ctrl_meas.unwrap_or(0)])
    }

    /// Stages the config register (0xF5). No bus traffic.
    pub fn prepare_config(&mut self, standby: StandbyTime, filter: Filter) {
        self.config = Some(settings::config_bits(standby as u8, filter as u8));
    }

    /// Sends the staged config image; a zeroed image if nothing was
    /// staged.
    pub fn commit_config(&mut self) -> Result<(), Error<T::Error>> {
        self.write_register(&[regs::CONFIG, self.config.unwrap_or(0)])
    }

    /// Stages the humidity control register (0xF2). No bus traffic.
    ///
    /// The sensor latches this value on the next write to the
    /// measurement control register, so commit humidity first.
    pub fn prepare_humidity_control(&mut self, oversampling: Oversampling) {
        self.ctrl_hum = Some(settings::ctrl_hum_bits(oversampling as u8));
    }

    /// Sends the staged humidity control image; a zeroed image if
    /// nothing was staged.
    pub fn commit_humidity_control(&mut self) -> Result<(), Error<T::Error>> {
        self.write_register(&[regs::CTRL_HUM, self.ctrl_hum.unwrap_or(0)])
    }

    /// Burst-reads the measurement registers and reassembles the ADC
    /// codes.
    pub fn raw_measurements(&mut self) -> Result<RawMeasurement, Error<T::Error>> {
        let mut data = [0u8; regs::DATA_LEN];
        self.read_register(regs::DATA, &mut data)?;

        let pressure =
            ((data[0] as u32) << 12) | ((data[1] as u32) << 4) | ((data[2] as u32) >> 4);
        let temperature =
            ((data[3] as u32) << 12) | ((data[4] as u32) << 4) | ((data[5] as u32) >> 4);
        let humidity = ((data[6] as u16) << 8) | data[7] as u16;

        Ok(RawMeasurement {
            pressure,
            temperature,
            humidity,
        })
    }

    /// Reads one raw triplet and compensates it with the stored
    /// calibration.
    pub fn measurements(&mut self) -> Result<Measurement, Error<T::Error>> {
        let raw = self.raw_measurements()?;
        Ok(self.calibration.compensate(&raw))
    }

    /// Sends one frame (register address plus values) in a single bus
    /// write and checks the transferred count.
    fn write_register(&mut self, frame: &[u8]) -> Result<(), Error<T::Error>> {
        let written = self
            .transport
            .write(self.address, frame)
            .map_err(Error::Bus)?;
        if written != frame.len() {
            return Err(Error::WriteAmount {
                expected: frame.len(),
                written,
            });
        }
        Ok(())
    }

    /// Sets the register pointer, then burst-reads into `buffer`.
    ///
    /// A failed pointer write returns its own error without attempting
    /// the read.
    fn read_register(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Error<T::Error>> {
        self.write_register(&[register])?;
        let read = self
            .transport
            .read(self.address, buffer)
            .map_err(Error::Bus)?;
        if read != buffer.len() {
            return Err(Error::ReadAmount {
                expected: buffer.len(),
                read,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

    const ADDR: u8 = 0x76;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Write(Vec<u8>),
        Read(usize),
    }

    enum Step {
        Write(core::result::Result<usize, i32>),
        Read(Vec<u8>, core::result::Result<usize, i32>),
    }

    /// Scripted transport that records every bus call.
    struct MockTransport {
        steps: VecDeque<Step>,
        log: Rc<RefCell<Vec<Call>>>,
    }

    impl MockTransport {
        fn new(steps: impl IntoIterator<Item = Step>) -> Self {
            Self {
                steps: steps.into_iter().collect(),
                log: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn log(&self) -> Rc<RefCell<Vec<Call>>> {
            Rc::clone(&self.log)
        }
    }

    impl Transport for MockTransport {
        type Error = i32;

        fn write(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<usize, i32> {
            assert_eq!(address, ADDR);
            self.log.borrow_mut().push(Call::Write(bytes.to_vec()));
            match self.steps.pop_front() {
                Some(Step::Write(result)) => result,
                _ => panic!("unexpected bus write"),
            }
        }

        fn read(&mut self, address: u8, buffer: &mut [u8]) -> core::result::Result<usize, i32> {
            assert_eq!(address, ADDR);
            self.log.borrow_mut().push(Call::Read(buffer.len()));
            match self.steps.pop_front() {
                Some(Step::Read(data, result)) => {
                    let n = data.len().min(buffer.len());
                    buffer[..n].copy_from_slice(&data[..n]);
                    result
                }
                _ => panic!("unexpected bus read"),
            }
        }
    }

    fn device(
        steps: impl IntoIterator<Item = Step>,
    ) -> (Bme280<MockTransport>, Rc<RefCell<Vec<Call>>>) {
        let transport = MockTransport::new(steps);
        let log = transport.log();
        (Bme280::new(transport, ADDR).unwrap(), log)
    }

    #[test]
    fn reserved_addresses_are_rejected_without_bus_traffic() {
        for address in (0x00..=0x07).chain(0x78..=0x7F) {
            let transport = MockTransport::new([]);
            let log = transport.log();
            let result = Bme280::new(transport, address);
            assert!(matches!(result, Err(Error::AddressReserved(a)) if a == address));
            assert!(log.borrow().is_empty());
        }
    }

    #[test]
    fn valid_addresses_are_accepted() {
        for address in [ADDRESS_SDO_GND, ADDRESS_SDO_VDDIO, 0x08, 0x77] {
            let transport = MockTransport::new([]);
            assert!(Bme280::new(transport, address).is_ok());
        }
    }

    #[test]
    fn prepare_stages_locally_without_bus_traffic() {
        let (mut bme, log) = device([]);
        bme.prepare_measure_control(Oversampling::X1, Oversampling::X1, Mode::Normal);
        bme.prepare_config(StandbyTime::Ms500, Filter::X2);
        bme.prepare_humidity_control(Oversampling::X8);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn commit_measure_control_sends_staged_frame() {
        let (mut bme, log) = device([Step::Write(Ok(2))]);
        bme.prepare_measure_control(Oversampling::X8, Oversampling::X8, Mode::Normal);
        bme.commit_measure_control().unwrap();

        let staged = (4 << 5) | (4 << 2) | 3;
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xF4, staged])]);
    }

    #[test]
    fn commit_config_sends_staged_frame() {
        let (mut bme, log) = device([Step::Write(Ok(2))]);
        bme.prepare_config(StandbyTime::Ms500, Filter::X2);
        bme.commit_config().unwrap();

        let staged = (4 << 5) | (1 << 2);
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xF5, staged])]);
    }

    #[test]
    fn commit_humidity_control_sends_staged_frame() {
        let (mut bme, log) = device([Step::Write(Ok(2))]);
        bme.prepare_humidity_control(Oversampling::X2);
        bme.commit_humidity_control().unwrap();

        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xF2, 2])]);
    }

    #[test]
    fn commit_without_prepare_sends_zeroed_image() {
        let (mut bme, log) = device([
            Step::Write(Ok(2)),
            Step::Write(Ok(2)),
            Step::Write(Ok(2)),
        ]);
        bme.commit_measure_control().unwrap();
        bme.commit_config().unwrap();
        bme.commit_humidity_control().unwrap();

        assert_eq!(
            &*log.borrow(),
            &[
                Call::Write(vec![0xF4, 0]),
                Call::Write(vec![0xF5, 0]),
                Call::Write(vec![0xF2, 0]),
            ]
        );
    }

    #[test]
    fn recommit_resends_identical_frame() {
        let (mut bme, log) = device([Step::Write(Ok(2)), Step::Write(Ok(2))]);
        bme.prepare_measure_control(Oversampling::X16, Oversampling::X1, Mode::Forced);
        bme.commit_measure_control().unwrap();
        bme.commit_measure_control().unwrap();

        let staged = (5 << 5) | (1 << 2) | 1;
        let frame = Call::Write(vec![0xF4, staged]);
        assert_eq!(&*log.borrow(), &[frame.clone(), frame]);
    }

    #[test]
    fn short_write_returns_write_amount_error() {
        let (mut bme, _log) = device([Step::Write(Ok(1))]);
        assert_eq!(
            bme.commit_measure_control(),
            Err(Error::WriteAmount {
                expected: 2,
                written: 1
            })
        );
    }

    #[test]
    fn platform_write_error_passes_through() {
        let (mut bme, _log) = device([Step::Write(Err(-7))]);
        assert_eq!(bme.commit_measure_control(), Err(Error::Bus(-7)));
    }

    #[test]
    fn reset_sends_fixed_command() {
        let (mut bme, log) = device([Step::Write(Ok(2))]);
        bme.reset().unwrap();
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xE0, 0xB6])]);
    }

    #[test]
    fn chip_id_sets_pointer_then_reads_one_byte() {
        let (mut bme, log) = device([Step::Write(Ok(1)), Step::Read(vec![CHIP_ID], Ok(1))]);
        assert_eq!(bme.chip_id(), Ok(CHIP_ID));
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xD0]), Call::Read(1)]);
    }

    #[test]
    fn failed_pointer_write_skips_the_read() {
        let (mut bme, log) = device([Step::Write(Ok(0))]);
        assert_eq!(
            bme.chip_id(),
            Err(Error::WriteAmount {
                expected: 1,
                written: 0
            })
        );
        // Only the pointer write reached the bus.
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xD0])]);
    }

    #[test]
    fn short_read_returns_read_amount_error() {
        let (mut bme, _log) = device([Step::Write(Ok(1)), Step::Read(vec![], Ok(0))]);
        assert_eq!(
            bme.chip_id(),
            Err(Error::ReadAmount {
                expected: 1,
                read: 0
            })
        );
    }

    #[test]
    fn status_decodes_documented_bits() {
        let (mut bme, log) = device([Step::Write(Ok(1)), Step::Read(vec![0b1001], Ok(1))]);
        assert_eq!(
            bme.status(),
            Ok(Status {
                measuring: true,
                updating: true
            })
        );
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xF3]), Call::Read(1)]);

        let (mut bme, _log) = device([Step::Write(Ok(1)), Step::Read(vec![0], Ok(1))]);
        assert_eq!(bme.status(), Ok(Status::default()));
    }

    fn calibration_steps() -> Vec<Step> {
        let mut block_tp = vec![0u8; 25];
        block_tp[..6].copy_from_slice(&[0, 1, 2, 3, 4, 5]);
        let block_hum = vec![0x68, 0x01, 0x00, 0x14, 0x25, 0x03, 0x1E];
        vec![
            Step::Write(Ok(1)),
            Step::Read(block_tp, Ok(25)),
            Step::Write(Ok(1)),
            Step::Read(vec![75], Ok(1)),
            Step::Write(Ok(1)),
            Step::Read(block_hum, Ok(7)),
        ]
    }

    #[test]
    fn calibration_read_issues_three_bursts_and_unpacks() {
        let (mut bme, log) = device(calibration_steps());
        bme.init().unwrap();

        assert_eq!(
            &*log.borrow(),
            &[
                Call::Write(vec![0x88]),
                Call::Read(25),
                Call::Write(vec![0xA1]),
                Call::Read(1),
                Call::Write(vec![0xE1]),
                Call::Read(7),
            ]
        );

        let calib = bme.calibration();
        assert_eq!(calib.dig_t1, 0x0100);
        assert_eq!(calib.dig_t2, 0x0302);
        assert_eq!(calib.dig_t3, 0x0504);
        assert_eq!(calib.dig_h1, 75);
        assert_eq!(calib.dig_h2, 360);
        assert_eq!(calib.dig_h4, 325);
        assert_eq!(calib.dig_h5, 50);
        assert_eq!(calib.dig_h6, 30);
    }

    #[test]
    fn failed_burst_leaves_previous_calibration_intact() {
        let mut steps = calibration_steps();
        // A second read attempt whose middle burst dies on the bus.
        steps.extend([
            Step::Write(Ok(1)),
            Step::Read(vec![0u8; 25], Ok(25)),
            Step::Write(Ok(1)),
            Step::Read(vec![], Err(-5)),
        ]);
        let (mut bme, _log) = device(steps);

        bme.read_calibration().unwrap();
        assert_eq!(bme.calibration().dig_t1, 0x0100);

        assert_eq!(bme.read_calibration(), Err(Error::Bus(-5)));
        // Coefficients still reflect the last complete read.
        assert_eq!(bme.calibration().dig_t1, 0x0100);
        assert_eq!(bme.calibration().dig_h4, 325);
    }

    #[test]
    fn raw_measurements_reassemble_adc_codes() {
        let data = vec![0x45, 0x31, 0x50, 0x7F, 0xC8, 0xF0, 0x6D, 0x5F];
        let (mut bme, log) = device([Step::Write(Ok(1)), Step::Read(data, Ok(8))]);

        let raw = bme.raw_measurements().unwrap();
        assert_eq!(raw.pressure, 283_413);
        assert_eq!(raw.temperature, 523_407);
        assert_eq!(raw.humidity, 27_999);
        assert_eq!(&*log.borrow(), &[Call::Write(vec![0xF7]), Call::Read(8)]);
    }

    /// Full pipeline over the embedded-hal adapter: calibration read,
    /// burst measurement read, fixed-point compensation.
    #[test]
    fn measurements_end_to_end_over_i2c() {
        let block_tp = vec![
            0x01, 0x6F, // T1 = 28417
            0x61, 0x68, // T2 = 26721
            0x32, 0x00, // T3 = 50
            0x9A, 0x94, // P1 = 38042
            0xC1, 0xD6, // P2 = -10559
            0xD0, 0x0B, // P3 = 3024
            0x16, 0x22, // P4 = 8726
            0x47, 0xFF, // P5 = -185
            0xF9, 0xFF, // P6 = -7
            0xAC, 0x26, // P7 = 9900
            0x0A, 0xD8, // P8 = -10230
            0xBD, 0x10, // P9 = 4285
            0x00, // reserved
        ];
        let block_hum = vec![0x68, 0x01, 0x00, 0x14, 0x25, 0x03, 0x1E];
        let data = vec![0x45, 0x31, 0x50, 0x7F, 0xC8, 0xF0, 0x6D, 0x5F];

        let expectations = [
            Transaction::write(ADDR, vec![0x88]),
            Transaction::read(ADDR, block_tp),
            Transaction::write(ADDR, vec![0xA1]),
            Transaction::read(ADDR, vec![0x4B]),
            Transaction::write(ADDR, vec![0xE1]),
            Transaction::read(ADDR, block_hum),
            Transaction::write(ADDR, vec![0xF7]),
            Transaction::read(ADDR, data),
        ];
        let transport = I2cTransport::new(I2cMock::new(&expectations));
        let mut bme = Bme280::new(transport, ADDR).unwrap();

        bme.init().unwrap();
        let measurement = bme.measurements().unwrap();
        assert_eq!(measurement.temperature, Temperature(2189));
        assert_eq!(measurement.pressure, Pressure(26_155_218));
        assert_eq!(measurement.humidity, Humidity(40_292));

        bme.free().free().done();
    }
}
