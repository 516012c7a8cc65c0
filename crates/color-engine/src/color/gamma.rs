//! sRGB transfer function
//!
//! Decoding an 8-bit channel uses a 256-entry table generated at compile time
//! by build.rs. Encoding goes through the exact IEC 61966-2-1 formula because
//! its input is a continuous value coming out of the XYZ matrix.

// Include the generated table from build.rs
include!(concat!(env!("OUT_DIR"), "/srgb_decode.rs"));

/// Decode an 8-bit sRGB channel to linear light.
#[inline]
pub fn decode_u8(channel: u8) -> f64 {
    SRGB8_TO_LINEAR[channel as usize]
}

/// Exact linear to sRGB conversion.
///
/// Negative linear values (out of gamut after the XYZ matrix) take the linear
/// segment and are clamped later when the channel is quantized.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Quantize a normalized sRGB value to a byte, rounding and clamping.
#[inline]
pub fn quantize(srgb: f64) -> u8 {
    (srgb * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb_to_linear(srgb: f64) -> f64 {
        if srgb <= 0.04045 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    }

    #[test]
    fn test_decode_table_matches_formula() {
        for i in 0..=255u8 {
            let exact = srgb_to_linear(i as f64 / 255.0);
            assert!(
                (decode_u8(i) - exact).abs() < 1e-15,
                "table entry {i} differs from formula: {} vs {exact}",
                decode_u8(i)
            );
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(decode_u8(0), 0.0);
        assert!((decode_u8(255) - 1.0).abs() < 1e-12);
        assert!((linear_to_srgb(0.0)).abs() < 1e-12);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_encode_inverts_decode() {
        for i in 0..=255u8 {
            assert_eq!(quantize(linear_to_srgb(decode_u8(i))), i);
        }
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(-0.2), 0);
        assert_eq!(quantize(1.7), 255);
        assert_eq!(quantize(0.5), 128);
    }
}
