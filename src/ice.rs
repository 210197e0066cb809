//! Refractive index of water ice, Mätzler 2006 version.

use num_complex::Complex64;

use crate::ValidityWindow;

/// Bounds inside which the Mätzler 2006 fit is trusted.
///
/// The model treats pure ice without impurities and covers 10 MHz to 3 THz,
/// expressed here in GHz. The temperature range of the underlying fit,
/// 240 K to 273.15 K, is relaxed to 20 K to 280 K.
pub const VALIDITY: ValidityWindow = ValidityWindow {
    temperature: 20.0..=280.0,
    frequency: 0.01..=3000.0,
};

// Coefficients of the microwave absorption fit.
const B1: f64 = 0.0207;
const B2: f64 = 1.16e-11;
const B: f64 = 335.0;

/// Compute the complex refractive index of water ice at one frequency.
///
/// `freq` is the frequency in GHz and `t` the ice temperature in K. The
/// result is the principal square root of the permittivity, whose real part
/// is frequency independent and whose small positive imaginary part carries
/// the absorption. The caller is responsible for staying inside
/// [`VALIDITY`].
///
/// From: C. Mätzler, "Thermal microwave radiation: applications for remote
/// sensing", chapter 5.3, IET, 2006. Equivalent to the ice parts of Warren
/// and Brandt, "Optical constants of ice from the ultraviolet to the
/// microwave: a revised compilation", J. Geophys. Res., vol. 113, 2008.
pub(crate) fn refractive_index(freq: f64, t: f64) -> Complex64 {
    let (re_eps, alpha, beta_m, delta_beta) = permittivity_parameters(t);

    let beta = beta_m + B2 * freq * freq + delta_beta;
    let im_eps = alpha / freq + beta * freq;

    Complex64::new(re_eps, im_eps).sqrt()
}

/// Compute the temperature-dependent terms of the ice permittivity.
///
/// `t` is the ice temperature in K. The returned tuple `(re_eps, alpha,
/// beta_m, delta_beta)` holds the real part of the permittivity and the
/// three pieces from which the imaginary part is assembled: `alpha` scales
/// with the inverse of the frequency, while `beta_m` and `delta_beta` enter
/// the term proportional to it.
fn permittivity_parameters(t: f64) -> (f64, f64, f64, f64) {
    let re_eps = 3.1884 + 9.1e-4 * (t - 273.0);

    let theta = 300.0 / t - 1.0;
    let alpha = (0.00504 + 0.0062 * theta) * f64::exp(-22.1 * theta);

    let ebdt = f64::exp(B / t);
    let beta_m = (B1 / t) * ebdt / ((ebdt - 1.0) * (ebdt - 1.0));
    let delta_beta = f64::exp(-9.963 + 0.0372 * (t - 273.0));

    (re_eps, alpha, beta_m, delta_beta)
}
