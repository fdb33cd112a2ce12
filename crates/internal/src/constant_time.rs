//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of different
/// length compare unequal; the length itself is not treated as secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns `Choice(1)` when every byte of `bytes` is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8)
}

/// Constant-time `a < b` for equal-width big-endian integers
///
/// Scans every byte regardless of where the first difference occurs.
pub fn ct_lt_be<const N: usize>(a: &[u8; N], b: &[u8; N]) -> Choice {
    let mut lt = Choice::from(0);
    let mut decided = Choice::from(0);
    for (x, y) in a.iter().zip(b.iter()) {
        let x_lt = x.ct_lt(y);
        let x_gt = y.ct_lt(x);
        lt |= x_lt & !decided;
        decided |= x_lt | x_gt;
    }
    lt
}

/// Constant-time selection between two byte arrays
///
/// Returns `a` if `choice` is 0, `b` if `choice` is 1.
pub fn ct_select_bytes<const N: usize>(a: &[u8; N], b: &[u8; N], choice: Choice) -> [u8; N] {
    let mut out = [0u8; N];
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = u8::conditional_select(x, y, choice);
    }
    out
}

/// Apply a constant-time bitwise AND operation between two arrays
pub fn ct_and<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut result = [0u8; N];
    for i in 0..N {
        result[i] = a[i] & b[i];
    }
    result
}

/// Apply a constant-time bitwise OR operation between two arrays
pub fn ct_or<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut result = [0u8; N];
    for i in 0..N {
        result[i] = a[i] | b[i];
    }
    result
}
