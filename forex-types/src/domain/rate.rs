//! Rate domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Storage key of a rate record.
///
/// A record is created under its currency code, and update/delete address it
/// by this key afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RateId(String);

impl RateId {
    /// Creates a key from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the owned key.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A currency exchange-rate record.
///
/// Prices are opaque strings: they are stored and displayed exactly as
/// submitted. Only `code` is required on input; the remaining fields default
/// to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Rate {
    /// Currency identifier, used as the storage key on creation
    #[schema(example = "JPY")]
    pub code: String,
    /// Display name of the currency
    #[serde(default)]
    #[schema(example = "YEN")]
    pub name: String,
    /// Display glyph
    #[serde(default)]
    #[schema(example = "¥")]
    pub symbol: String,
    /// URL of a flag image
    #[serde(default)]
    #[schema(example = "https://d3onttu1dfuhsx.cloudfront.net/jp.svg")]
    pub flag: String,
    /// Buy price
    #[serde(default)]
    #[schema(example = "0.55")]
    pub buy: String,
    /// Sell price
    #[serde(default)]
    #[schema(example = "0.50")]
    pub sell: String,
}

impl Rate {
    /// Creates a rate with every field specified.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        flag: impl Into<String>,
        buy: impl Into<String>,
        sell: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            symbol: symbol.into(),
            flag: flag.into(),
            buy: buy.into(),
            sell: sell.into(),
        }
    }

    /// Returns the storage key this rate is created under.
    ///
    /// # Validation
    /// - Code cannot be empty or whitespace
    pub fn key(&self) -> Result<RateId, DomainError> {
        if self.code.is_empty() {
            return Err(DomainError::ValidationError(
                "Currency code cannot be empty".into(),
            ));
        }
        Ok(RateId::new(self.code.clone()))
    }
}

/// Partial update of a rate record.
///
/// Supplied fields replace the stored ones; omitted fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "0.60")]
    pub buy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell: Option<String>,
}

impl RatePatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.symbol.is_none()
            && self.flag.is_none()
            && self.buy.is_none()
            && self.sell.is_none()
    }

    /// Merges the supplied fields into `rate`.
    pub fn apply_to(&self, rate: &mut Rate) {
        let fields = [
            (&self.code, &mut rate.code),
            (&self.name, &mut rate.name),
            (&self.symbol, &mut rate.symbol),
            (&self.flag, &mut rate.flag),
            (&self.buy, &mut rate.buy),
            (&self.sell, &mut rate.sell),
        ];
        for (patch, field) in fields {
            if let Some(value) = patch {
                *field = value.clone();
            }
        }
    }
}

/// A rate record together with the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredRate {
    pub id: RateId,
    pub rate: Rate,
}

impl StoredRate {
    pub fn new(id: RateId, rate: Rate) -> Self {
        Self { id, rate }
    }
}

/// The rate set written to an empty store at startup.
pub fn default_rates() -> Vec<Rate> {
    vec![
        Rate::new(
            "USD",
            "US DOLLAR",
            "$",
            "https://d3onttu1dfuhsx.cloudfront.net/us.svg",
            "83.94",
            "82.46",
        ),
        Rate::new(
            "EURO",
            "EURO",
            "€",
            "https://upload.wikimedia.org/wikipedia/commons/b/b7/Flag_of_Europe.svg",
            "91.08",
            "90.66",
        ),
        Rate::new(
            "GBP",
            "POUND",
            "£",
            "https://d3onttu1dfuhsx.cloudfront.net/gb.svg",
            "106.6",
            "105.5",
        ),
    ]
}
