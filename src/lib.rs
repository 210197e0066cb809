//! Complex refractive index of liquid water and water ice.
//!
//! Two empirical dielectric models behind matching array-in, array-out entry
//! points, for radiative transfer codes that need the refractive index
//! n = n' + i n'' of hydrometeors at microwave to sub-millimeter frequencies:
//!
//! - [`complex_n_water_liebe93`], liquid water following Liebe 1993
//! - [`complex_n_ice_matzler06`], water ice following Mätzler 2006
//!
//! Both take a frequency grid in GHz and a single temperature in K and
//! return one row of (real, imaginary) parts per grid frequency, taking the
//! principal square root of the model permittivity.
//!
//! Each parametrization is only trusted inside a published temperature and
//! frequency window. When the temperature or any grid frequency falls
//! outside a model's window, the whole result is filled with NaN instead of
//! partially computed rows, and no error is raised. The windows are exported
//! as [`WATER_LIEBE93_VALIDITY`] and [`ICE_MATZLER06_VALIDITY`] so callers
//! can check up front instead of probing for NaN.

pub(crate) mod ice;
pub(crate) mod liquid_water;


use std::ops::RangeInclusive;

use log::{debug, warn};
use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;

pub use ice::VALIDITY as ICE_MATZLER06_VALIDITY;
pub use liquid_water::VALIDITY as WATER_LIEBE93_VALIDITY;

/// Temperature and frequency bounds inside which a dielectric model is
/// physically trusted.
#[derive(Debug, Clone)]
pub struct ValidityWindow {
    /// Inclusive temperature bounds in K.
    pub temperature: RangeInclusive<f64>,
    /// Inclusive frequency bounds in GHz.
    pub frequency: RangeInclusive<f64>,
}

impl ValidityWindow {
    /// Whether `t` and every frequency of `f_grid` fall inside the window.
    ///
    /// Both bounds count as inside. An empty grid has no frequency outside
    /// the window, so only the temperature decides. A NaN temperature or
    /// frequency is never inside.
    pub fn contains(&self, f_grid: &[f64], t: f64) -> bool {
        self.temperature.contains(&t) && f_grid.iter().all(|f| self.frequency.contains(f))
    }
}

/// Compute the complex refractive index of liquid water, following Liebe
/// 1993.
///
/// `f_grid` is the frequency grid in GHz and `t` the water temperature in K.
/// Row `iv` of the result holds the real and imaginary parts of the
/// refractive index at `f_grid[iv]`; the real part is positive and the
/// imaginary part is positive for an absorbing medium.
///
/// The model treats pure water without salt and is not valid below 10 GHz.
/// If `t` or any grid frequency falls outside [`WATER_LIEBE93_VALIDITY`],
/// every entry of the result is NaN.
pub fn complex_n_water_liebe93(f_grid: &[f64], t: f64) -> Array2<f64> {
    if !WATER_LIEBE93_VALIDITY.contains(f_grid, t) {
        warn!("inputs outside the Liebe 93 window for liquid water (t = {t} K); returning NaN");
        return nan_matrix(f_grid.len());
    }
    debug!(
        "computing the Liebe 93 water index for {} frequencies at {t} K",
        f_grid.len()
    );

    index_matrix(f_grid, |freq| liquid_water::refractive_index(freq, t))
}

/// Compute the complex refractive index of water ice, following Mätzler
/// 2006 (equivalent to Warren 2008).
///
/// `f_grid` is the frequency grid in GHz and `t` the ice temperature in K.
/// Row `iv` of the result holds the real and imaginary parts of the
/// refractive index at `f_grid[iv]`; the real part is positive and the
/// imaginary part is positive for an absorbing medium.
///
/// The model treats pure ice without impurities. If `t` or any grid
/// frequency falls outside [`ICE_MATZLER06_VALIDITY`], every entry of the
/// result is NaN.
pub fn complex_n_ice_matzler06(f_grid: &[f64], t: f64) -> Array2<f64> {
    if !ICE_MATZLER06_VALIDITY.contains(f_grid, t) {
        warn!("inputs outside the Mätzler 06 window for ice (t = {t} K); returning NaN");
        return nan_matrix(f_grid.len());
    }
    debug!(
        "computing the Mätzler 06 ice index for {} frequencies at {t} K",
        f_grid.len()
    );

    index_matrix(f_grid, |freq| ice::refractive_index(freq, t))
}

/// Build an all-NaN result for inputs outside a model's validity window.
fn nan_matrix(num_freq: usize) -> Array2<f64> {
    Array2::from_elem([num_freq, 2], f64::NAN)
}

/// Evaluate a scalar index model over the whole frequency grid.
///
/// The rows are independent, so the grid is mapped in parallel. Row `iv` of
/// the output holds the real and imaginary parts for `f_grid[iv]`.
fn index_matrix<F>(f_grid: &[f64], model: F) -> Array2<f64>
where
    F: Fn(f64) -> Complex64 + Send + Sync,
{
    let mut results = Vec::new();
    f_grid
        .par_iter()
        .map(|&freq| model(freq))
        .collect_into_vec(&mut results);

    // Copy the intermediate results to the output matrix
    let mut complex_n = Array2::zeros([f_grid.len(), 2]);
    for (iv, n) in results.into_iter().enumerate() {
        complex_n[[iv, 0]] = n.re;
        complex_n[[iv, 1]] = n.im;
    }
    complex_n
}
