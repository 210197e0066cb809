//! Refractive index of liquid water, Liebe 1993 version.

use num_complex::Complex64;

use crate::ValidityWindow;

/// Temperature of 0 °C in K.
const TEMP_0_C: f64 = 273.15;

/// Bounds inside which the Liebe 1993 fit is trusted.
///
/// The model treats pure water without salt and is not valid below 10 GHz;
/// the upper frequency limit of 1000 GHz is where the fit was cut off. The
/// parametrization is published for 0 °C to 100 °C, while the temperature
/// check reaches down to -40 °C so supercooled cloud water is accepted as
/// well.
pub const VALIDITY: ValidityWindow = ValidityWindow {
    temperature: (TEMP_0_C - 40.0)..=(TEMP_0_C + 100.0),
    frequency: 10.0..=1000.0,
};

/// Compute the complex refractive index of liquid water at one frequency.
///
/// `freq` is the frequency in GHz and `t` the water temperature in K. The
/// result is the principal square root of the double-Debye permittivity, so
/// its real part is positive and its imaginary part is positive for an
/// absorbing medium. The caller is responsible for staying inside
/// [`VALIDITY`].
///
/// From: H. J. Liebe, G. A. Hufford and T. Manabe, "A model for the complex
/// permittivity of water at frequencies below 1 THz", Int. J. Infrared and
/// Millimeter Waves, vol. 12, pp. 659-675, 1991, with the coefficients of
/// the 1993 propagation model (the relaxation parameters here use the paper
/// value 146, not the 146.4 found in some copies).
pub(crate) fn refractive_index(freq: f64, t: f64) -> Complex64 {
    let (e0, e1, e2, f1, f2) = relaxation_parameters(t);

    let eps = (e0 - e1) / Complex64::new(1.0, -(freq / f1))
        + (e1 - e2) / Complex64::new(1.0, -(freq / f2))
        + e2;

    eps.sqrt()
}

/// Compute the double-Debye relaxation parameters of pure water.
///
/// `t` is the water temperature in K. The returned tuple `(e0, e1, e2, f1,
/// f2)` holds the static, intermediate and high-frequency permittivities and
/// the two relaxation frequencies in GHz.
fn relaxation_parameters(t: f64) -> (f64, f64, f64, f64, f64) {
    let theta = 1.0 - 300.0 / t;

    let e0 = 77.66 - 103.3 * theta;
    let e1 = 0.0671 * e0;
    let e2 = 3.52;

    let f1 = 20.2 + 146.0 * theta + 316.0 * theta * theta;
    let f2 = 39.8 * f1;

    (e0, e1, e2, f1, f2)
}
