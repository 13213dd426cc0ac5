//! Modulo-11 check digit arithmetic
//!
//! Both CPF and CNPJ end in two check digits computed over the preceding
//! base digits with a weighted sum modulo 11. One weighting rule serves
//! both kinds and both digits:
//!
//! - the starting weight for a base of length `L` is `L + 1`, shifted down
//!   by 8 for the longer CNPJ bases (`L > 11`), giving 10 for CPF (L=9),
//!   11 for CPF+D1 (L=10), 5 for CNPJ (L=12) and 6 for CNPJ+D1 (L=13);
//! - the weight decrements by one per position and wraps from 1 back to 9,
//!   so it stays within 2..=9 after the first CNPJ segment.
//!
//! That produces the standard tables, e.g. `5,4,3,2,9,8,7,6,5,4,3,2` for
//! the first CNPJ digit.

/// Starting weight for a base of the given length
fn initial_weight(len: usize) -> u32 {
    if len > 11 {
        len as u32 - 7
    } else {
        len as u32 + 1
    }
}

/// Compute a single check digit over the given base digits.
///
/// `initial = Σ(digit · weight) mod 11`; the digit is 0 when `initial < 2`,
/// otherwise `11 − initial`.
pub fn check_digit(base: &[u8]) -> u8 {
    let mut weight = initial_weight(base.len());
    let mut sum: u32 = 0;

    for &digit in base {
        sum += u32::from(digit) * weight;
        weight -= 1;
        if weight == 1 {
            weight = 9;
        }
    }

    let initial = sum % 11;
    if initial < 2 {
        0
    } else {
        (11 - initial) as u8
    }
}

/// Compute both check digits for a 9-digit (CPF) or 12-digit (CNPJ) base.
///
/// The second digit is computed over the base extended with the first, per
/// the standard algorithm. Appending the returned pair to `base` yields a
/// digit sequence whose checksum verifies.
pub fn check_digits(base: &[u8]) -> (u8, u8) {
    let first = check_digit(base);

    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);

    (first, check_digit(&extended))
}
