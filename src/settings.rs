//! Control-value encodings for the BME280 configuration registers.
//!
//! The enums carry the exact bit patterns the datasheet assigns to each
//! setting. The `*_bits` functions compose the full register images and
//! are the single place where field masking happens.

/// Oversampling settings for temperature, pressure and humidity.
///
/// Higher oversampling rates reduce noise through in-sensor averaging but
/// lengthen each measurement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Oversampling {
    /// No measurement performed. Disables the corresponding channel.
    Skipped = 0,
    /// 1x oversampling.
    #[default]
    X1 = 1,
    /// 2x oversampling.
    X2 = 2,
    /// 4x oversampling.
    X4 = 3,
    /// 8x oversampling.
    X8 = 4,
    /// 16x oversampling. Maximum precision, longest cycle.
    X16 = 5,
}

/// Sensor power mode, bits 1:0 of the measurement control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// No measurements, lowest power draw.
    #[default]
    Sleep = 0,
    /// Run a single measurement cycle, then return to sleep.
    Forced = 1,
    /// Cycle continuously, pausing for the configured standby time.
    Normal = 3,
}

/// Standby period between measurement cycles in normal mode,
/// bits 7:5 of the config register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StandbyTime {
    /// 0.5 ms
    #[default]
    Ms0_5 = 0,
    /// 62.5 ms
    Ms62_5 = 1,
    /// 125 ms
    Ms125 = 2,
    /// 250 ms
    Ms250 = 3,
    /// 500 ms
    Ms500 = 4,
    /// 1000 ms
    Ms1000 = 5,
    /// 10 ms
    Ms10 = 6,
    /// 20 ms
    Ms20 = 7,
}

/// IIR filter coefficient, bits 4:2 of the config register.
///
/// The filter smooths short-term disturbances in the pressure and
/// temperature readings. It has no effect on humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Filter {
    /// Filter disabled.
    #[default]
    Off = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
    X16 = 4,
}

/// Composes the measurement control register image (0xF4).
///
/// Pressure oversampling is masked to its 3-bit field and the mode to its
/// 2-bit field. The temperature field occupies the top of the byte, so
/// the shift truncates it naturally and no mask is needed.
pub(crate) fn ctrl_meas_bits(temp: u8, pressure: u8, mode: u8) -> u8 {
    (temp << 5) | ((pressure & 0x07) << 2) | (mode & 0x03)
}

/// Composes the config register image (0xF5).
///
/// Standby time sits at bits 7:5, the IIR filter coefficient at bits 4:2.
pub(crate) fn config_bits(standby: u8, filter: u8) -> u8 {
    ((standby & 0x07) << 5) | ((filter & 0x07) << 2)
}

/// Composes the humidity control register image (0xF2).
pub(crate) fn ctrl_hum_bits(oversampling: u8) -> u8 {
    oversampling & 0x07
}
