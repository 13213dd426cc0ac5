//! Core types for document validation

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of check digits embedded at the end of both document kinds
pub const CHECK_DIGIT_COUNT: usize = 2;

/// Document kinds supported by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas — individual taxpayer ID, 11 digits
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica — corporate taxpayer ID, 14 digits
    Cnpj,
}

impl DocumentKind {
    /// Total number of digits, check digits included
    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Number of base digits preceding the two check digits
    pub fn base_count(&self) -> usize {
        self.digit_count() - CHECK_DIGIT_COUNT
    }

    /// Byte length of the canonical punctuated form
    ///
    /// CPF: `DDD.DDD.DDD-DD` (14 bytes). CNPJ: `DD.DDD.DDD/DDDD-DD` (18 bytes).
    pub fn formatted_len(&self) -> usize {
        match self {
            DocumentKind::Cpf => 14,
            DocumentKind::Cnpj => 18,
        }
    }

    /// Separator positions in the canonical punctuated form
    pub(crate) fn separators(&self) -> &'static [(usize, u8)] {
        match self {
            DocumentKind::Cpf => &[(3, b'.'), (7, b'.'), (11, b'-')],
            DocumentKind::Cnpj => &[(2, b'.'), (6, b'.'), (10, b'/'), (15, b'-')],
        }
    }

    /// Separator expected at byte position `pos` of the canonical form, if any
    pub(crate) fn separator_at(&self, pos: usize) -> Option<u8> {
        self.separators()
            .iter()
            .find(|(sep_pos, _)| *sep_pos == pos)
            .map(|(_, sep)| *sep)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = ValidationError;

    /// Parse a kind name, case-insensitively (`"CPF"`, `"cnpj"`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidKind` for any other string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("CPF") {
            Ok(DocumentKind::Cpf)
        } else if s.eq_ignore_ascii_case("CNPJ") {
            Ok(DocumentKind::Cnpj)
        } else {
            Err(ValidationError::InvalidKind(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_counts() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cpf.base_count(), 9);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
        assert_eq!(DocumentKind::Cnpj.base_count(), 12);
    }

    #[test]
    fn test_formatted_lengths() {
        assert_eq!(DocumentKind::Cpf.formatted_len(), "000.000.000-00".len());
        assert_eq!(
            DocumentKind::Cnpj.formatted_len(),
            "00.000.000/0000-00".len()
        );
    }

    #[test]
    fn test_separator_positions_match_canonical_form() {
        for (kind, canonical) in [
            (DocumentKind::Cpf, "123.456.789-09"),
            (DocumentKind::Cnpj, "12.345.678/0001-95"),
        ] {
            for (pos, byte) in canonical.bytes().enumerate() {
                match kind.separator_at(pos) {
                    Some(sep) => assert_eq!(sep, byte),
                    None => assert!(byte.is_ascii_digit()),
                }
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("CPF".parse::<DocumentKind>().unwrap(), DocumentKind::Cpf);
        assert_eq!("cnpj".parse::<DocumentKind>().unwrap(), DocumentKind::Cnpj);
        assert!(matches!(
            "RG".parse::<DocumentKind>(),
            Err(ValidationError::InvalidKind(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentKind::Cpf.to_string(), "CPF");
        assert_eq!(DocumentKind::Cnpj.to_string(), "CNPJ");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&DocumentKind::Cnpj).unwrap();
        assert_eq!(json, "\"CNPJ\"");
        let parsed: DocumentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DocumentKind::Cnpj);
    }
}
