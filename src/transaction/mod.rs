mod date;

use std::fmt;
use chrono::NaiveDateTime;
use serde::Deserialize;

pub use date::parse_date;

pub const DEBIT: &str = "debit";
pub const CREDIT: &str = "credit";

/// Number of leading words kept by [`Transaction::short_description`]
const SHORT_DESCRIPTION_WORDS: usize = 4;

/// Transaction amount as supplied by the input document. Some exports write amounts as
/// strings, so the raw value is kept and coerced on demand.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    /// Any other JSON value such as `null` or an object. Never a valid amount.
    Other(serde_json::Value),
}

impl Amount {
    /// Coerce to a number. Strings may carry a `$` sign and thousands separators.
    /// Returns `None` when the value is not a finite number.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.trim().replace(['$', ','], "").parse::<f64>().ok()?,
            Amount::Other(_) => return None,
        };

        if value.is_finite() {
            Some(value)
        } else {
            None
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{n}"),
            Amount::Text(s) => write!(f, "{s}"),
            Amount::Other(v) => write!(f, "{v}"),
        }
    }
}

/// A single financial record
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    #[serde(rename = "transaction_id", alias = "id")]
    pub id: String,

    /// Kept as the original string, see [`parse_date`] for accepted formats
    #[serde(rename = "transaction_date", alias = "date")]
    pub date: String,

    #[serde(rename = "transaction_amount", alias = "amount")]
    pub amount: Amount,

    /// Usually "debit" or "credit" but any value is accepted
    #[serde(rename = "transaction_type", alias = "type")]
    pub transaction_type: String,

    #[serde(rename = "transaction_description", alias = "description", default)]
    pub description: String,

    #[serde(alias = "merchantName", default)]
    pub merchant_name: String,

    #[serde(alias = "cardType", default)]
    pub card_type: Option<String>,
}

impl Transaction {
    pub fn new(id: &str, date: &str, amount: impl Into<Amount>, transaction_type: &str, description: &str, merchant_name: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            amount: amount.into(),
            transaction_type: transaction_type.to_string(),
            description: description.to_string(),
            merchant_name: merchant_name.to_string(),
            card_type: None,
        }
    }

    pub fn with_card_type(mut self, card_type: &str) -> Transaction {
        self.card_type = Some(card_type.to_string());
        self
    }

    /// Parsed transaction date, `None` if the date string is not recognised
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    pub fn is_debit(&self) -> bool {
        self.transaction_type == DEBIT
    }

    pub fn is_credit(&self) -> bool {
        self.transaction_type == CREDIT
    }

    /// First few words of the description followed by "..."
    pub fn short_description(&self) -> String {
        let words: Vec<&str> = self.description.split_whitespace().collect();
        if words.len() <= SHORT_DESCRIPTION_WORDS {
            return words.join(" ");
        }
        words[..SHORT_DESCRIPTION_WORDS].join(" ") + "..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_coercion() {
        assert_eq!(Amount::Number(12.5).value(), Some(12.5));
        assert_eq!(Amount::from("42.10").value(), Some(42.10));
        assert_eq!(Amount::from(" $1,250.00 ").value(), Some(1250.0));
        assert_eq!(Amount::from("-3").value(), Some(-3.0));
        assert_eq!(Amount::from("twelve").value(), None);
        assert_eq!(Amount::from("").value(), None);
        assert_eq!(Amount::from("NaN").value(), None);
        assert_eq!(Amount::Number(f64::INFINITY).value(), None);
        assert_eq!(Amount::Other(serde_json::Value::Null).value(), None);
        assert_eq!(Amount::Other(serde_json::Value::Bool(true)).to_string(), "true");
    }

    #[test]
    fn test_deserialize_non_numeric_amount() {
        let t: Transaction = serde_json::from_str(r#"{"id": "1", "date": "2019-01-01", "amount": null, "type": "debit"}"#).unwrap();
        assert_eq!(t.amount, Amount::Other(serde_json::Value::Null));
        assert_eq!(t.amount.to_string(), "null");

        let t: Transaction = serde_json::from_str(r#"{"id": "2", "date": "2019-01-01", "amount": {"value": 5}, "type": "debit"}"#).unwrap();
        assert_eq!(t.amount.value(), None);
    }

    #[test]
    fn test_deserialize_original_field_names() {
        let json = r#"{
            "transaction_id": "1",
            "transaction_date": "2019-01-01",
            "transaction_amount": 95.0,
            "transaction_type": "debit",
            "transaction_description": "Payment for groceries",
            "merchant_name": "SuperMart",
            "card_type": "Visa"
        }"#;

        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "1");
        assert_eq!(t.amount, Amount::Number(95.0));
        assert_eq!(t.merchant_name, "SuperMart");
        assert_eq!(t.card_type.as_deref(), Some("Visa"));
        assert!(t.is_debit());
    }

    #[test]
    fn test_deserialize_short_field_names() {
        let json = r#"{"id": "7", "date": "2020-05-04", "amount": "19.99", "type": "credit", "description": "Refund", "merchantName": "Shop"}"#;

        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "7");
        assert_eq!(t.amount, Amount::Text("19.99".to_string()));
        assert_eq!(t.amount.value(), Some(19.99));
        assert_eq!(t.merchant_name, "Shop");
        assert_eq!(t.card_type, None);
        assert!(t.is_credit());
    }

    #[test]
    fn test_short_description() {
        let t = Transaction::new("1", "2019-01-01", 1.0, DEBIT, "Payment for groceries at the corner shop", "SuperMart");
        assert_eq!(t.short_description(), "Payment for groceries at...");

        let t = Transaction::new("2", "2019-01-01", 1.0, DEBIT, "Dinner  with friends", "Bistro");
        assert_eq!(t.short_description(), "Dinner with friends");
    }
}
