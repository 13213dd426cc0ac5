//! Cadastro Validator
//!
//! Structural validation of Brazilian taxpayer identification numbers:
//! - **CPF** (Cadastro de Pessoas Físicas) — individual, 11 digits
//! - **CNPJ** (Cadastro Nacional da Pessoa Jurídica) — corporate, 14 digits
//!
//! Validation covers format (raw digits or the canonical punctuated form),
//! the well-known repeated-digit placeholder values, and the two embedded
//! modulo-11 check digits. It says nothing about whether a number was ever
//! issued or is active in any registry.
//!
//! # Example
//!
//! ```
//! use cadastro_validator::{is_valid_cnpj, is_valid_cpf, validate, DocumentKind};
//!
//! assert!(is_valid_cpf("541.560.490-19"));
//! assert!(is_valid_cpf("54156049019")); // raw digits work too
//! assert!(!is_valid_cpf("111.111.111-11")); // placeholder, never valid
//!
//! assert!(is_valid_cnpj("32.609.453/0001-06"));
//! assert!(validate("184.409.850-88", DocumentKind::Cpf));
//! ```

pub mod candidate;
pub mod checksum;
pub mod error;
pub mod types;
pub mod validator;

// Re-export commonly used items
pub use candidate::DocumentCandidate;
pub use error::{Result, ValidationError};
pub use types::{DocumentKind, CHECK_DIGIT_COUNT};
pub use validator::{is_valid_cnpj, is_valid_cpf, validate, validate_as};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        // Verify re-exports work
        let _kind = DocumentKind::Cpf;
        let _err = ValidationError::InvalidKind("x".to_string());
        assert!(is_valid_cpf("541.560.490-19"));
    }
}
