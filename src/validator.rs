//! Public validation operations
//!
//! Thin orchestration over [`DocumentCandidate::parse`] and the checksum
//! arithmetic. Malformed input is an expected case (user typos) and is
//! folded into `false`; only an unrecognized kind string in
//! [`validate_as`] surfaces as an error.

use crate::candidate::DocumentCandidate;
use crate::checksum;
use crate::error::Result;
use crate::types::DocumentKind;

/// Check whether `input` is a structurally valid CPF.
///
/// Accepts raw digits (`54156049019`) or the canonical punctuated form
/// (`541.560.490-19`). Verifies length, character set, the placeholder
/// blocklist and both check digits. Does not consult any registry.
pub fn is_valid_cpf(input: &str) -> bool {
    validate(input, DocumentKind::Cpf)
}

/// Check whether `input` is a structurally valid CNPJ.
///
/// Accepts raw digits (`32609453000106`) or the canonical punctuated form
/// (`32.609.453/0001-06`).
pub fn is_valid_cnpj(input: &str) -> bool {
    validate(input, DocumentKind::Cnpj)
}

/// Validate `input` as the given document kind.
///
/// Pure function of its arguments: no state is retained across calls and
/// the same input always yields the same result. Every parse failure —
/// wrong length, bad characters, misplaced punctuation, placeholder
/// sequence — returns `false` rather than an error.
pub fn validate(input: &str, kind: DocumentKind) -> bool {
    let candidate = match DocumentCandidate::parse(input, kind) {
        Ok(candidate) => candidate,
        Err(err) => {
            tracing::debug!(kind = %kind, error = %err, "Rejected candidate");
            return false;
        }
    };

    let computed = checksum::check_digits(candidate.base());
    let valid = candidate.stored_check_digits() == computed;
    if !valid {
        tracing::debug!(kind = %kind, "Check digit mismatch");
    }
    valid
}

/// Validate `input` with a string-keyed kind (`"CPF"` or `"CNPJ"`).
///
/// Kind names match case-insensitively. Unlike malformed document input,
/// an unrecognized kind is programmer error and is surfaced rather than
/// folded into `false`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidKind` when `kind` names neither
/// document kind.
pub fn validate_as(input: &str, kind: &str) -> Result<bool> {
    Ok(validate(input, kind.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_valid_cpf_both_forms() {
        assert!(is_valid_cpf("541.560.490-19"));
        assert!(is_valid_cpf("54156049019"));
    }

    #[test]
    fn test_invalid_cpf_check_digits() {
        assert!(!is_valid_cpf("890.278.300-62"));
        // One transcription error away from a valid number
        assert!(!is_valid_cpf("541.560.490-18"));
        assert!(!is_valid_cpf("541.560.491-19"));
    }

    #[test]
    fn test_valid_cnpj_both_forms() {
        assert!(is_valid_cnpj("32.609.453/0001-06"));
        assert!(is_valid_cnpj("32609453000106"));
    }

    #[test]
    fn test_invalid_cnpj_check_digits() {
        assert!(!is_valid_cnpj("47.102.248/0011-27"));
    }

    #[test]
    fn test_malformed_input_is_false_not_error() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("not a document"));
        assert!(!is_valid_cnpj("32.609.453/0001-0"));
    }

    #[test]
    fn test_kind_mismatch_is_false() {
        // A valid CNPJ is not a valid CPF and vice versa
        assert!(!validate("32.609.453/0001-06", DocumentKind::Cpf));
        assert!(!validate("541.560.490-19", DocumentKind::Cnpj));
    }

    #[test]
    fn test_validate_as_dispatch() {
        assert!(validate_as("541.560.490-19", "CPF").unwrap());
        assert!(validate_as("32.609.453/0001-06", "cnpj").unwrap());
        assert!(!validate_as("890.278.300-62", "CPF").unwrap());
    }

    #[test]
    fn test_validate_as_unknown_kind() {
        let result = validate_as("541.560.490-19", "RG");
        assert!(matches!(result, Err(ValidationError::InvalidKind(_))));
    }

    #[test]
    fn test_idempotence() {
        for _ in 0..3 {
            assert!(is_valid_cpf("184.409.850-88"));
            assert!(!is_valid_cpf("645.742.030-32"));
        }
    }
}
