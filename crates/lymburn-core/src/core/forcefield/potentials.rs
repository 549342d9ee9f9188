/// Pair distances at or below this are treated as coincident particles.
pub const MIN_DISTANCE: f64 = f64::EPSILON;

/// Energy of the logarithmic repulsion, `-strength * ln(r)`.
#[inline]
pub fn logarithmic_energy(dist: f64, strength: f64) -> f64 {
    -strength * dist.ln()
}

/// Radial force divided by `r` for the logarithmic repulsion.
///
/// The force magnitude is `strength / r`, so the vector force on the first
/// particle is `strength * r_vec / r^2`.
#[inline]
pub fn logarithmic_force_divr(dist_sq: f64, strength: f64) -> f64 {
    strength / dist_sq
}

/// Energy of the inverse-distance repulsion, `strength / r`.
#[inline]
pub fn inverse_r_energy(dist: f64, strength: f64) -> f64 {
    strength / dist
}

/// Radial force divided by `r` for the inverse-distance repulsion.
#[inline]
pub fn inverse_r_force_divr(dist: f64, dist_sq: f64, strength: f64) -> f64 {
    strength / (dist_sq * dist)
}

/// XPLOR switching function and its radial derivative divided by `r`.
///
/// Returns `(S, S'/r)` for `r_on^2 < dist_sq <= r_cut^2`:
///
/// `S(r) = (rc^2 - r^2)^2 (rc^2 + 2 r^2 - 3 ron^2) / (rc^2 - ron^2)^3`
///
/// Callers handle the flat region `r <= r_on` where `S = 1` and `S' = 0`.
#[inline]
pub fn xplor_switch(dist_sq: f64, r_on_sq: f64, r_cut_sq: f64) -> (f64, f64) {
    let rc_minus_r = r_cut_sq - dist_sq;
    let denom = (r_cut_sq - r_on_sq).powi(3);
    let s = rc_minus_r * rc_minus_r * (r_cut_sq + 2.0 * dist_sq - 3.0 * r_on_sq) / denom;
    let ds_dr_divr = 12.0 * rc_minus_r * (r_on_sq - dist_sq) / denom;
    (s, ds_dr_divr)
}
