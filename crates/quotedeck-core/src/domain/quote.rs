use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// Normalized price snapshot for one symbol at fetch time.
///
/// Records are never mutated once produced; a refresh builds new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: Symbol,
    /// Display name, when the caller knows one. Searched alongside the symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub current_price: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
}

impl QuoteRecord {
    pub fn new(
        symbol: Symbol,
        current_price: f64,
        high: f64,
        low: f64,
        open: f64,
        previous_close: f64,
    ) -> Result<Self, ValidationError> {
        validate_finite("current_price", current_price)?;
        validate_finite("high", high)?;
        validate_finite("low", low)?;
        validate_finite("open", open)?;
        validate_finite("previous_close", previous_close)?;

        Ok(Self {
            symbol,
            name: None,
            current_price,
            high,
            low,
            open,
            previous_close,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Absolute move since the previous close.
    pub fn change(&self) -> f64 {
        self.current_price - self.previous_close
    }

    /// Percentage move since the previous close, if the previous close is non-zero.
    pub fn change_percent(&self) -> Option<f64> {
        if self.previous_close == 0.0 {
            return None;
        }
        Some(self.change() / self.previous_close * 100.0)
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}
