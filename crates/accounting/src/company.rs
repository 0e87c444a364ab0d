use serde::{Deserialize, Serialize};

use ledgerguard_core::{DomainError, DomainResult, Record, record_id};

record_id!(
    /// Company identifier.
    CompanyId
);

/// ISO 4217 style currency code (three ASCII uppercase letters).
///
/// Compared by value; two `EUR` codes are the same currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "currency code must be three uppercase letters, got {code:?}"
            )));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Company owning journal records; `currency` is its base (functional)
/// currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub currency: CurrencyCode,
}

impl Record for Company {
    type Id = CompanyId;

    fn id(&self) -> CompanyId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_codes_are_accepted() {
        for code in ["EUR", "USD", "CHF"] {
            assert_eq!(CurrencyCode::new(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn malformed_codes_are_rejected() {
        for code in ["", "EU", "EURO", "eur", "E1R", "€UR"] {
            assert!(CurrencyCode::new(code).is_err(), "{code:?} should fail");
        }
    }
}
