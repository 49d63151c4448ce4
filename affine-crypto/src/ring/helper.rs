/// Computes the greatest common divisor of two numbers.
///
/// `gcd(a, 0) == a`. Callers pass non-negative operands.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Finds (g, x, y) such that a*x + m*y = g = gcd(a, m).
///
/// Recursion depth is O(log(min(a, m))), negligible for the moduli involved.
pub fn extended_gcd(a: i64, m: i64) -> (i64, i64, i64) {
    if m == 0 {
        return (a, 1, 0);
    }

    let (g, x1, y1) = extended_gcd(m, a % m);
    (g, y1, x1 - (a / m) * y1)
}

/// Modular inverse of `a` mod `m`, if it exists.
///
/// The Bézout coefficient can be negative, so the result is brought back
/// into `[0, m)` before returning. Expects non-negative `a`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(a, m);
    if g != 1 {
        None
    } else {
        // x·a ≡ 1 (mod m)
        Some((x % m + m) % m)
    }
}
