//! Conversion of raw 12-bit ADC codes into zero-centered samples.

/// The bits of a raw code carrying the conversion result.
pub const ADC_CODE_MASK: u16 = 0x0FFF;

/// The code half way between the lowest and highest 12-bit codes.
const ADC_ZERO: f32 = 2047.5;

/// Converts a raw 12-bit ADC code to a zero-centered sample in signed 16-bit
/// units, so that code 0 maps to -32768 and code 4095 to 32767.
/// Bits above the 12 lowest are ignored.
pub fn convert_adc_code(code: u16) -> f32 {
    let centered = (code & ADC_CODE_MASK) as f32 - ADC_ZERO;
    if centered < 0.0 {
        centered * (32768.0 / ADC_ZERO)
    } else {
        centered * (32767.0 / ADC_ZERO)
    }
}
