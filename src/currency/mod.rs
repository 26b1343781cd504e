//! Currency codes and the static conversion table.
//!
//! Rates are fixed configuration relative to a reference currency; nothing
//! here is live-fetched. Conversion is deliberately fail-soft: a currency
//! missing from the table is treated as 1:1 rather than an error, so a
//! dashboard always renders something.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::TripError;

/// Closed set of currencies the tracker understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Try,
    Usd,
    Eur,
    Gbp,
    /// Bosnia and Herzegovina convertible mark.
    Bam,
    /// Serbian dinar.
    Rsd,
    /// Macedonian denar.
    Mkd,
    /// Albanian lek.
    All,
}

impl Currency {
    /// Canonical ISO-style code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Bam => "BAM",
            Currency::Rsd => "RSD",
            Currency::Mkd => "MKD",
            Currency::All => "ALL",
        }
    }

    /// Display symbol used in budget messages and chart tooltips.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Try => "₺",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Bam => "KM",
            Currency::Rsd => "дин",
            Currency::Mkd => "den",
            Currency::All => "Lek",
        }
    }

    /// All supported currencies, in display order.
    pub const ALL_CODES: [Currency; 8] = [
        Currency::Try,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Bam,
        Currency::Rsd,
        Currency::Mkd,
        Currency::All,
    ];
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = TripError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TRY" => Ok(Currency::Try),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "BAM" => Ok(Currency::Bam),
            "RSD" => Ok(Currency::Rsd),
            "MKD" => Ok(Currency::Mkd),
            "ALL" => Ok(Currency::All),
            other => Err(TripError::UnknownCurrency(other.to_string())),
        }
    }
}

/// The reference currency all table rates are expressed against.
pub const REFERENCE: Currency = Currency::Try;

/// Built-in approximate rates, shared by callers that do not carry their
/// own table.
pub static APPROX_RATES: Lazy<ConversionTable> = Lazy::new(ConversionTable::approx);

/// Mapping of currency to its rate against [`REFERENCE`].
///
/// One unit of the keyed currency equals `rate` units of the reference
/// currency.
#[derive(Clone, Debug)]
pub struct ConversionTable {
    rates: HashMap<Currency, f64>,
}

impl ConversionTable {
    /// Builds a table from explicit rate pairs. Useful in tests and for
    /// deliberately sparse tables.
    pub fn with_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (Currency, f64)>,
    {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// The built-in static table of approximate rates to TRY.
    #[must_use]
    pub fn approx() -> Self {
        Self::with_rates([
            (Currency::Try, 1.0),
            (Currency::Usd, 34.5),
            (Currency::Eur, 36.5),
            (Currency::Gbp, 43.5),
            (Currency::Bam, 18.5),
            (Currency::Rsd, 0.31),
            (Currency::Mkd, 0.60),
            (Currency::All, 0.37),
        ])
    }

    /// Rate of `currency` against the reference, if the table carries one.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Converts `amount` between two currencies via the reference unit.
    ///
    /// Same-currency conversions return `amount` untouched, with no
    /// floating arithmetic applied. A currency absent from the table is
    /// treated as 1:1. No rounding happens here; callers round for
    /// display only.
    #[must_use]
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        if from == to {
            return amount;
        }
        let (Some(rate_from), Some(rate_to)) = (self.rate(from), self.rate(to)) else {
            return amount;
        };
        amount * rate_from / rate_to
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::approx()
    }
}
