//! Fixed-point measurement compensation.
//!
//! The raw ADC codes are meaningless without the per-chip trimming
//! values; these routines apply the integer compensation formulas from
//! the Bosch datasheet (section 4.2.3). The shift amounts and the
//! multiplication order are part of the contract: intermediates are
//! sized deliberately (32-bit for temperature and humidity, 64-bit for
//! pressure) and must not be rearranged or replaced with floating point.

use crate::calib::Calibration;
use crate::{Humidity, Measurement, Pressure, RawMeasurement, Temperature};

/// Temperature result plus the fine-temperature intermediate that the
/// pressure and humidity formulas reuse.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct TempResult {
    pub(crate) fine: i32,
    pub(crate) centi_celsius: i32,
}

impl Calibration {
    /// Converts a raw ADC triplet into physical units.
    ///
    /// Pure function of the raw codes and the coefficients; no bus
    /// traffic, no cached state.
    pub fn compensate(&self, raw: &RawMeasurement) -> Measurement {
        let temps = self.compensate_temperature(raw.temperature);
        Measurement {
            temperature: Temperature(temps.centi_celsius),
            pressure: Pressure(self.compensate_pressure(raw.pressure, temps.fine)),
            humidity: Humidity(self.compensate_humidity(raw.humidity, temps.fine)),
        }
    }

    /// Temperature in 0.01 °C from the 20-bit ADC code.
    pub(crate) fn compensate_temperature(&self, raw: u32) -> TempResult {
        let raw = raw as i32;
        let var1 = (((raw >> 3) - ((self.dig_t1 as i32) << 1)) * self.dig_t2 as i32) >> 11;
        let var2 = (raw >> 4) - self.dig_t1 as i32;
        let var2 = (((var2 * var2) >> 12) * self.dig_t3 as i32) >> 14;
        let fine = var1 + var2;
        TempResult {
            fine,
            centi_celsius: (fine * 5 + 128) >> 8,
        }
    }

    /// Pressure in Pa as an unsigned Q24.8 value (Pa * 256).
    ///
    /// The quadratic correction overflows 32 bits, so the whole chain
    /// runs in i64. Returns 0 when the P1-derived divisor is zero, the
    /// degenerate case the datasheet defines to avoid division by zero.
    pub(crate) fn compensate_pressure(&self, raw: u32, fine: i32) -> u32 {
        let mut var1 = fine as i64 - 128_000;
        let mut var2 = var1 * var1 * self.dig_p6 as i64;
        var2 += (var1 * self.dig_p5 as i64) << 17;
        var2 += (self.dig_p4 as i64) << 35;
        var1 = ((var1 * var1 * self.dig_p3 as i64) >> 8) + ((var1 * self.dig_p2 as i64) << 12);
        var1 = (((1i64 << 47) + var1) * self.dig_p1 as i64) >> 33;
        if var1 == 0 {
            return 0;
        }
        let mut pressure = 1_048_576 - raw as i64;
        pressure = (((pressure << 31) - var2) * 3125) / var1;
        var1 = ((self.dig_p9 as i64) * (pressure >> 13) * (pressure >> 13)) >> 25;
        var2 = ((self.dig_p8 as i64) * pressure) >> 19;
        pressure = ((pressure + var1 + var2) >> 8) + ((self.dig_p7 as i64) << 4);
        pressure as u32
    }

    /// Relative humidity as an unsigned Q22.10 value (%RH * 1024).
    ///
    /// Clamped to 0..=100 %RH before the final scale-down.
    pub(crate) fn compensate_humidity(&self, raw: u16, fine: i32) -> u32 {
        let v = fine - 76_800;
        let v = ((((raw as i32) << 14) - ((self.dig_h4 as i32) << 20) - (self.dig_h5 as i32) * v
            + 16_384)
            >> 15)
            * (((((((v * self.dig_h6 as i32) >> 10)
                * (((v * self.dig_h3 as i32) >> 11) + 32_768))
                >> 10)
                + 2_097_152)
                * self.dig_h2 as i32
                + 8_192)
                >> 14);
        let v = v - (((((v >> 15) * (v >> 15)) >> 7) * self.dig_h1 as i32) >> 4);
        let v = v.clamp(0, 419_430_400);
        (v >> 12) as u32
    }
}
