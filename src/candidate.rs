//! Parsing and classification of candidate document strings
//!
//! Turns a raw input string into a [`DocumentCandidate`]: a digit sequence
//! of the exact length the target kind requires, with punctuation stripped
//! and known placeholder sequences rejected up front.
//!
//! # Accepted Formats
//!
//! 1. **Raw digits**: `54156049019` (CPF), `32609453000106` (CNPJ)
//! 2. **Canonical punctuated form**: `541.560.490-19` (CPF),
//!    `32.609.453/0001-06` (CNPJ)
//!
//! Punctuation must sit at the exact canonical positions; partial or shifted
//! punctuation is a format error.
//!
//! # Examples
//!
//! ```
//! use cadastro_validator::{DocumentCandidate, DocumentKind};
//!
//! let candidate = DocumentCandidate::parse("541.560.490-19", DocumentKind::Cpf).unwrap();
//! assert_eq!(candidate.digits().len(), 11);
//! assert_eq!(candidate.base(), &[5, 4, 1, 5, 6, 0, 4, 9, 0]);
//! assert_eq!(candidate.stored_check_digits(), (1, 9));
//!
//! // Placeholder sequences are rejected before any checksum arithmetic
//! assert!(DocumentCandidate::parse("111.111.111-11", DocumentKind::Cpf).is_err());
//! ```

use crate::error::{Result, ValidationError};
use crate::types::DocumentKind;

/// A candidate document parsed into its digit sequence
///
/// Constructed fresh per validation call; holds no state beyond the call.
/// A successfully parsed candidate always holds exactly
/// `kind.digit_count()` digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCandidate {
    /// Original input string
    raw: String,
    /// Stripped digit sequence, one element per digit (0–9)
    digits: Vec<u8>,
    /// Kind the input was parsed as
    kind: DocumentKind,
}

impl DocumentCandidate {
    /// Parse an input string as the given document kind.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` — all-digit input of the wrong length
    /// - `InvalidFormat` — non-digit characters, or punctuation outside the
    ///   canonical positions
    /// - `KnownInvalid` — a single repeated digit (placeholder value)
    pub fn parse(input: &str, kind: DocumentKind) -> Result<Self> {
        let digits = if input.bytes().all(|b| b.is_ascii_digit()) {
            if input.len() != kind.digit_count() {
                return Err(ValidationError::InvalidLength {
                    expected: kind.digit_count(),
                    actual: input.len(),
                });
            }
            input.bytes().map(|b| b - b'0').collect()
        } else {
            strip_canonical(input, kind).ok_or_else(|| {
                ValidationError::InvalidFormat(format!(
                    "expected {} digits or the canonical {} pattern, got: {}",
                    kind.digit_count(),
                    kind,
                    input
                ))
            })?
        };

        if is_repeated_digit(&digits) {
            return Err(ValidationError::KnownInvalid(input.to_string()));
        }

        Ok(Self {
            raw: input.to_string(),
            digits,
            kind,
        })
    }

    /// Get the original input string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the full stripped digit sequence
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Get the kind this candidate was parsed as
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Get the base digits (everything before the two check digits)
    pub fn base(&self) -> &[u8] {
        &self.digits[..self.kind.base_count()]
    }

    /// Get the two check digits as stored in the input
    pub fn stored_check_digits(&self) -> (u8, u8) {
        let len = self.digits.len();
        (self.digits[len - 2], self.digits[len - 1])
    }
}

impl std::fmt::Display for DocumentCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Strip a canonically punctuated input down to its digits.
///
/// Returns `None` unless the input is exactly the canonical length with
/// every separator at its canonical position and digits everywhere else.
fn strip_canonical(input: &str, kind: DocumentKind) -> Option<Vec<u8>> {
    if input.len() != kind.formatted_len() {
        return None;
    }

    let mut digits = Vec::with_capacity(kind.digit_count());
    for (pos, byte) in input.bytes().enumerate() {
        match kind.separator_at(pos) {
            Some(sep) if byte == sep => {}
            Some(_) => return None,
            None => {
                if !byte.is_ascii_digit() {
                    return None;
                }
                digits.push(byte - b'0');
            }
        }
    }
    Some(digits)
}

/// Check whether the sequence is a single repeated digit.
///
/// These are well-known placeholder values (`111.111.111-11` and friends)
/// and are invalid even when the checksum arithmetic happens to pass.
fn is_repeated_digit(digits: &[u8]) -> bool {
    digits
        .first()
        .is_some_and(|first| digits.iter().all(|d| d == first))
}
