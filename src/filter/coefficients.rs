//! Fixed filter coefficients for a capture rate of 16384 Hz.
//!
//! Generated offline:
//! * Low-pass: 95-tap windowed sinc, Kaiser window with beta = 7.857,
//!   cutoff 1575 Hz, normalized to unity gain at DC. Flat to within 0.001 dB
//!   below 1100 Hz, at least 80 dB down from 2048 Hz, the analysis Nyquist
//!   frequency at 4x oversampling.
//! * High-pass: 2nd order Butterworth, cutoff 30 Hz, bilinear transform.

/// The capture rate in Hz the coefficients below were designed for.
pub const DESIGN_CAPTURE_RATE: u32 = 16384;

pub const LOW_PASS_TAP_COUNT: usize = 95;

pub const LOW_PASS_TAPS: [f32; LOW_PASS_TAP_COUNT] = [
    -2.0570969284e-06,
    1.5349756617e-05,
    4.6406680277e-05,
    7.7373996570e-05,
    8.2694681603e-05,
    3.5653366335e-05,
    -7.3704105790e-05,
    -2.2142653325e-04,
    -3.4465547569e-04,
    -3.5785840586e-04,
    -1.9067329411e-04,
    1.6475628012e-04,
    6.1956124085e-04,
    9.9145895367e-04,
    1.0590631426e-03,
    6.5848784666e-04,
    -2.1178213382e-04,
    -1.3280033626e-03,
    -2.2663857258e-03,
    -2.5338782971e-03,
    -1.7758597705e-03,
    1.3907519587e-05,
    2.3791156067e-03,
    4.4640769392e-03,
    5.2765337481e-03,
    4.0871629215e-03,
    8.2430355062e-04,
    -3.7120114427e-03,
    -7.9571975320e-03,
    -1.0045405541e-02,
    -8.5190870165e-03,
    -3.0449588881e-03,
    5.1603029698e-03,
    1.3436596770e-02,
    1.8396462992e-02,
    1.7100764193e-02,
    8.3349023974e-03,
    -6.4786781759e-03,
    -2.3140079915e-02,
    -3.5493426318e-02,
    -3.7079947595e-02,
    -2.3178152184e-02,
    7.4051610783e-03,
    5.1416116319e-02,
    1.0149829774e-01,
    1.4780597910e-01,
    1.8047698693e-01,
    1.9225550417e-01,
    1.8047698693e-01,
    1.4780597910e-01,
    1.0149829774e-01,
    5.1416116319e-02,
    7.4051610783e-03,
    -2.3178152184e-02,
    -3.7079947595e-02,
    -3.5493426318e-02,
    -2.3140079915e-02,
    -6.4786781759e-03,
    8.3349023974e-03,
    1.7100764193e-02,
    1.8396462992e-02,
    1.3436596770e-02,
    5.1603029698e-03,
    -3.0449588881e-03,
    -8.5190870165e-03,
    -1.0045405541e-02,
    -7.9571975320e-03,
    -3.7120114427e-03,
    8.2430355062e-04,
    4.0871629215e-03,
    5.2765337481e-03,
    4.4640769392e-03,
    2.3791156067e-03,
    1.3907519587e-05,
    -1.7758597705e-03,
    -2.5338782971e-03,
    -2.2663857258e-03,
    -1.3280033626e-03,
    -2.1178213382e-04,
    6.5848784666e-04,
    1.0590631426e-03,
    9.9145895367e-04,
    6.1956124085e-04,
    1.6475628012e-04,
    -1.9067329411e-04,
    -3.5785840586e-04,
    -3.4465547569e-04,
    -2.2142653325e-04,
    -7.3704105790e-05,
    3.5653366335e-05,
    8.2694681603e-05,
    7.7373996570e-05,
    4.6406680277e-05,
    1.5349756617e-05,
    -2.0570969284e-06,
];

/// Feedforward coefficients `b0, b1, b2`.
pub const HIGH_PASS_B: [f32; 3] = [0.991897838708, -1.983795677416, 0.991897838708];
/// Feedback coefficients `a0, a1, a2`, with `a0` normalized to 1.
pub const HIGH_PASS_A: [f32; 3] = [1.0, -1.983730031321, 0.983861323511];
