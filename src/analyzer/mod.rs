mod month;

use std::collections::BTreeSet;
use std::fmt;
use chrono::{Datelike, NaiveDateTime};
use log::{debug, warn};
use serde::Deserialize;

use crate::error::QueryError;
use crate::transaction::{parse_date, Transaction, CREDIT, DEBIT};

pub(crate) use month::month_name;
use month::MonthCounter;

/// How amounts that cannot be coerced to a number are treated
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Sums fail with [`QueryError::InvalidAmount`], amount filters skip the record
    #[default]
    Strict,
    /// The amount counts as zero everywhere
    Zero,
}

/// Which transaction type occurs more often
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantType {
    Debit,
    Credit,
    Equal,
}

impl fmt::Display for DominantType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DominantType::Debit => write!(f, "{DEBIT}"),
            DominantType::Credit => write!(f, "{CREDIT}"),
            DominantType::Equal => write!(f, "equal"),
        }
    }
}

/// Answers queries over an in-memory list of transactions. Insertion order is preserved and
/// transactions are never removed or reordered.
#[derive(Debug, Default)]
pub struct TransactionAnalyzer {
    transactions: Vec<Transaction>,
    amount_policy: AmountPolicy,
}

impl TransactionAnalyzer {
    pub fn new(transactions: Vec<Transaction>) -> TransactionAnalyzer {
        TransactionAnalyzer::with_amount_policy(transactions, AmountPolicy::default())
    }

    pub fn with_amount_policy(transactions: Vec<Transaction>, amount_policy: AmountPolicy) -> TransactionAnalyzer {
        debug!("Analyzer created with {} transactions, amount policy {:?}", transactions.len(), amount_policy);
        TransactionAnalyzer { transactions, amount_policy }
    }

    /// All transactions in insertion order. The slice borrows the analyzer, so it cannot be
    /// modified through this view.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction. Duplicated ids are allowed.
    pub fn add(&mut self, t: Transaction) {
        debug!("Adding transaction {}", t.id);
        self.transactions.push(t);
    }

    pub fn unique_types(&self) -> BTreeSet<String> {
        self.transactions.iter().map(|t| t.transaction_type.clone()).collect()
    }

    pub fn total_amount(&self) -> Result<f64, QueryError> {
        self.sum(self.transactions.iter())
    }

    /// Sum of amounts for transactions on the given date. `None` components match any value,
    /// `month` is 1-based. Transactions with unparseable dates are skipped.
    pub fn total_amount_by_date(&self, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Result<f64, QueryError> {
        self.sum(self.transactions.iter().filter(|t| {
            match self.date_of(t) {
                Some(date) => year.map_or(true, |y| date.year() == y)
                    && month.map_or(true, |m| date.month() == m)
                    && day.map_or(true, |d| date.day() == d),
                None => false,
            }
        }))
    }

    pub fn by_type(&self, transaction_type: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.transaction_type == transaction_type).collect()
    }

    /// Transactions dated between `start` and `end`, both inclusive
    pub fn in_date_range(&self, start: &str, end: &str) -> Result<Vec<&Transaction>, QueryError> {
        let start = parse_argument_date(start)?;
        let end = parse_argument_date(end)?;

        Ok(self.transactions.iter()
            .filter(|t| self.date_of(t).map_or(false, |date| start <= date && date <= end))
            .collect())
    }

    pub fn by_merchant(&self, merchant_name: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.merchant_name == merchant_name).collect()
    }

    pub fn average_amount(&self) -> Result<f64, QueryError> {
        if self.transactions.is_empty() {
            return Err(QueryError::EmptyCollection);
        }
        Ok(self.total_amount()? / self.transactions.len() as f64)
    }

    /// Transactions with `min <= amount <= max`
    pub fn by_amount_range(&self, min: f64, max: f64) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|t| match self.amount_of(t) {
                Ok(amount) => min <= amount && amount <= max,
                Err(_) => {
                    debug!("Skipping transaction {} with invalid amount", t.id);
                    false
                }
            })
            .collect()
    }

    pub fn total_debit_amount(&self) -> Result<f64, QueryError> {
        self.sum(self.transactions.iter().filter(|t| t.is_debit()))
    }

    /// Name of the month with the most transactions, counted across all years
    pub fn most_active_month(&self) -> Result<&'static str, QueryError> {
        self.busiest_month(self.transactions.iter())
    }

    /// Name of the month with the most debit transactions, counted across all years
    pub fn most_active_debit_month(&self) -> Result<&'static str, QueryError> {
        self.busiest_month(self.transactions.iter().filter(|t| t.is_debit()))
    }

    pub fn dominant_type(&self) -> DominantType {
        let debits = self.transactions.iter().filter(|t| t.is_debit()).count();
        let credits = self.transactions.iter().filter(|t| t.is_credit()).count();

        if debits > credits {
            DominantType::Debit
        } else if credits > debits {
            DominantType::Credit
        } else {
            DominantType::Equal
        }
    }

    /// Transactions strictly before `date`
    pub fn before_date(&self, date: &str) -> Result<Vec<&Transaction>, QueryError> {
        let target = parse_argument_date(date)?;

        Ok(self.transactions.iter()
            .filter(|t| self.date_of(t).map_or(false, |date| date < target))
            .collect())
    }

    /// First transaction with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.transactions.iter().map(|t| t.description.as_str()).collect()
    }

    fn sum<'a, I: Iterator<Item = &'a Transaction>>(&self, transactions: I) -> Result<f64, QueryError> {
        let mut total = 0.0;
        for t in transactions {
            total += self.amount_of(t)?;
        }
        Ok(total)
    }

    fn amount_of(&self, t: &Transaction) -> Result<f64, QueryError> {
        match (t.amount.value(), self.amount_policy) {
            (Some(amount), _) => Ok(amount),
            (None, AmountPolicy::Zero) => {
                warn!("Transaction {} has invalid amount \"{}\", counting it as 0", t.id, t.amount);
                Ok(0.0)
            }
            (None, AmountPolicy::Strict) => Err(QueryError::InvalidAmount {
                id: t.id.clone(),
                raw: t.amount.to_string(),
            }),
        }
    }

    fn date_of(&self, t: &Transaction) -> Option<NaiveDateTime> {
        let date = t.parsed_date();
        if date.is_none() {
            debug!("Transaction {} has unparseable date \"{}\"", t.id, t.date);
        }
        date
    }

    fn busiest_month<'a, I: Iterator<Item = &'a Transaction>>(&self, transactions: I) -> Result<&'static str, QueryError> {
        MonthCounter::count(transactions.filter_map(|t| self.date_of(t)))
            .busiest()
            .ok_or(QueryError::EmptyCollection)
    }
}

fn parse_argument_date(date: &str) -> Result<NaiveDateTime, QueryError> {
    parse_date(date).ok_or_else(|| QueryError::InvalidDate(date.to_string()))
}
