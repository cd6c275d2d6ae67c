//! Tick rounding shared by every displayed price.

/// Round to the nearest integer, exact halves toward +inf (`-0.5` rounds to `0`).
///
/// `f64::round` sends halves away from zero, which disagrees on negative ties, so
/// the fractional part is compared directly. `x - x.floor()` is exact in `f64`.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Snap `x` to the nearest multiple of `tick`. Non-finite input passes through.
#[inline]
pub fn round_to_tick(x: f64, tick: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    round_half_up(x / tick) * tick
}
