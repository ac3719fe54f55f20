//! Factory-fused calibration coefficient store.
//!
//! Every BME280 carries an individual set of trimming values burned in
//! during production. They live in three non-contiguous register blocks
//! and are required by the compensation formulas in [`crate::calc`].

use crate::calib_mem;

/// The 18 trimming coefficients of one sensor.
///
/// Field widths and signedness follow the datasheet memory map; H4 and H5
/// are signed 12-bit values stored split across three bytes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    pub dig_h4: i16,
    pub dig_h5: i16,
    pub dig_h6: i8,
}

impl Calibration {
    /// Unpacks the coefficients from the three raw burst buffers.
    ///
    /// `tp` is the temperature/pressure block starting at 0x88, `h1` the
    /// single byte at 0xA1 and `hum` the humidity block starting at 0xE1.
    /// All 16-bit fields are little-endian. H4/H5 use the split-nibble
    /// layout: 0xE5 carries the low nibble of H4 and the low nibble of H5.
    pub(crate) fn from_burst_buffers(
        tp: &[u8; calib_mem::BLOCK_TP_LEN],
        h1: u8,
        hum: &[u8; calib_mem::BLOCK_HUM_LEN],
    ) -> Self {
        let word = |lo: u8, hi: u8| ((hi as u16) << 8) | lo as u16;
        Self {
            dig_t1: word(tp[0], tp[1]),
            dig_t2: word(tp[2], tp[3]) as i16,
            dig_t3: word(tp[4], tp[5]) as i16,
            dig_p1: word(tp[6], tp[7]),
            dig_p2: word(tp[8], tp[9]) as i16,
            dig_p3: word(tp[10], tp[11]) as i16,
            dig_p4: word(tp[12], tp[13]) as i16,
            dig_p5: word(tp[14], tp[15]) as i16,
            dig_p6: word(tp[16], tp[17]) as i16,
            dig_p7: word(tp[18], tp[19]) as i16,
            dig_p8: word(tp[20], tp[21]) as i16,
            dig_p9: word(tp[22], tp[23]) as i16,
            dig_h1: h1,
            dig_h2: word(hum[0], hum[1]) as i16,
            dig_h3: hum[2],
            // Sign extension happens through the i8 cast before the shift.
            dig_h4: ((hum[3] as i8 as i16) << 4) | (hum[4] & 0x0F) as i16,
            dig_h5: ((hum[5] as i8 as i16) << 4) | (hum[4] >> 4) as i16,
            dig_h6: hum[6] as i8,
        }
    }
}
