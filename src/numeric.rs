//! Numeric Classification
//!
//! Integer, prime and prime-power predicates used to validate plane orders.
//!
//! Inputs go through [`Numeric`], which makes the integer/float distinction
//! explicit: an `Int` is always integral, a `Float` is integral when it is
//! finite and has no fractional part. Predicates never fail; values that are
//! not integral (or do not fit in an `i64`) simply classify as "no".

/// A number that may be classified, tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// True for every `Int`, and for finite `Float`s with a zero fractional part
    pub fn is_integer(self) -> bool {
        match self {
            Numeric::Int(_) => true,
            Numeric::Float(x) => x.is_finite() && x.fract() == 0.0,
        }
    }

    /// The exact integer value, if there is one that fits in an `i64`
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Numeric::Int(n) => Some(n),
            Numeric::Float(x) => {
                // 2^63 is exactly representable; anything at or above it overflows
                if self.is_integer() && x >= i64::MIN as f64 && x < i64::MAX as f64 {
                    Some(x as i64)
                } else {
                    None
                }
            }
        }
    }
}

macro_rules! numeric_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Numeric {
            fn from(n: $t) -> Self { Numeric::Int(i64::from(n)) }
        })*
    };
}

numeric_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Numeric {
    fn from(x: f64) -> Self {
        Numeric::Float(x)
    }
}

impl From<f32> for Numeric {
    fn from(x: f32) -> Self {
        Numeric::Float(f64::from(x))
    }
}

/// Check if a number is a whole number
pub fn is_integer(x: impl Into<Numeric>) -> bool {
    x.into().is_integer()
}

/// Check if a number is prime (integral, > 1, no divisor in 2..=√x)
pub fn is_prime(x: impl Into<Numeric>) -> bool {
    match x.into().as_integer() {
        Some(n) if n > 1 => is_prime_u64(n as u64),
        _ => false,
    }
}

/// Check if a number is p^k for some prime p and k >= 1
pub fn is_prime_power(x: impl Into<Numeric>) -> bool {
    let n = match x.into().as_integer() {
        Some(n) if n > 1 => n as u64,
        _ => return false,
    };
    let max_exponent = 63 - n.leading_zeros(); // floor(log2 n)
    (1..=max_exponent).any(|k| match integer_root(n, k) {
        Some(root) => is_prime_u64(root),
        None => false,
    })
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 { return false; }
    if n < 4 { return true; }
    if n % 2 == 0 { return false; }
    let limit = isqrt(n);
    let mut i = 3;
    while i <= limit {
        if n % i == 0 { return false; }
        i += 2;
    }
    true
}

/// Largest r with r*r <= n
fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// The exact k-th root of n, if n is a perfect k-th power
fn integer_root(n: u64, k: u32) -> Option<u64> {
    if k == 1 {
        return Some(n);
    }
    let guess = (n as f64).powf(1.0 / f64::from(k)).round() as u64;
    // f64 rounding can land one off in either direction
    (guess.saturating_sub(1)..=guess + 1).find(|&r| r.checked_pow(k) == Some(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integer() {
        assert!(is_integer(41));
        assert!(is_integer(41.0));
        assert!(!is_integer(41.5));
        assert!(!is_integer(f64::NAN));
        assert!(!is_integer(f64::INFINITY));
    }

    #[test]
    fn test_as_integer_rejects_out_of_range_floats() {
        assert_eq!(Numeric::Float(7.0).as_integer(), Some(7));
        assert_eq!(Numeric::Float(1e30).as_integer(), None);
        assert!(Numeric::Float(1e30).is_integer());
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(-7));
        assert!(!is_prime(14));
        assert!(!is_prime(7920));
        assert!(is_prime(2));
        assert!(is_prime(241));
        assert!(is_prime(7919));
        assert!(is_prime(7.0));
        assert!(!is_prime(7.5));
    }

    #[test]
    fn test_is_prime_power() {
        assert!(!is_prime_power(0));
        assert!(!is_prime_power(1));
        assert!(!is_prime_power(-8));
        assert!(!is_prime_power(10));
        assert!(!is_prime_power(10_000));
        assert!(is_prime_power(2));
        assert!(is_prime_power(8));
        assert!(is_prime_power(243)); // 3^5
        assert!(is_prime_power(6561)); // 3^8
        assert!(is_prime_power(8.0));
    }

    #[test]
    fn test_isqrt_near_squares() {
        assert_eq!(isqrt(48), 6);
        assert_eq!(isqrt(49), 7);
        assert_eq!(isqrt(50), 7);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
    }
}
