//! A matrix of FX rates.
//!
//! This is the data an [`FxMatrixId`](crate::FxMatrixId) resolves to. Rates
//! are supplied by the market data repository; only lookup lives here.

use std::collections::BTreeMap;

/// FX rates keyed by currency pair.
///
/// A rate `r` for `base/counter` means one unit of `base` buys `r` units of
/// `counter`. Lookups fall back to the inverse pair, and a currency against
/// itself is always `1.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxMatrix {
    rates: BTreeMap<(String, String), f64>,
}

impl FxMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matrix with a rate added or replaced.
    #[must_use]
    pub fn with_rate(mut self, base: &str, counter: &str, rate: f64) -> Self {
        self.rates.insert((base.to_string(), counter.to_string()), rate);
        self
    }

    /// Returns the rate to convert `base` into `counter`.
    pub fn rate(&self, base: &str, counter: &str) -> Option<f64> {
        if base == counter {
            return Some(1.0);
        }
        let key = |a: &str, b: &str| (a.to_string(), b.to_string());
        if let Some(rate) = self.rates.get(&key(base, counter)) {
            return Some(*rate);
        }
        self.rates
            .get(&key(counter, base))
            .filter(|rate| **rate != 0.0)
            .map(|rate| 1.0 / rate)
    }

    /// Returns the number of stored pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_and_inverse() {
        let matrix = FxMatrix::new().with_rate("EUR", "USD", 1.25);
        assert_eq!(matrix.rate("EUR", "USD"), Some(1.25));
        assert_eq!(matrix.rate("USD", "EUR"), Some(0.8));
        assert_eq!(matrix.rate("GBP", "GBP"), Some(1.0));
        assert_eq!(matrix.rate("GBP", "USD"), None);
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn test_empty() {
        assert!(FxMatrix::new().is_empty());
    }
}
