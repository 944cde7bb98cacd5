/// Deterministic pseudo-random value in `[0, 1)` for a given seed.
///
/// Not uniform and not cryptographic; it only has to look random on a visitor
/// counter. Same seed, same value, every time.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    let frac = x - x.floor();
    // tiny negative `x` rounds up to exactly 1.0
    if frac.is_finite() && frac < 1.0 {
        frac
    } else {
        0.0
    }
}
