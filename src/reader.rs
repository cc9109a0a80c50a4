use std::fs::File;
use std::io;
use std::path::Path;
use anyhow::{bail, Context};
use log::info;
use serde::Deserialize;
use crate::transaction::{Amount, Transaction};

/// A transaction row in a csv file. Amounts are read as text and coerced later, like JSON
/// string amounts.
#[derive(Deserialize, Debug)]
pub(crate) struct CsvRow {
    #[serde(alias = "id")]
    pub(crate) transaction_id: String,
    #[serde(alias = "date")]
    pub(crate) transaction_date: String,
    #[serde(alias = "amount")]
    pub(crate) transaction_amount: String,
    #[serde(alias = "type")]
    pub(crate) transaction_type: String,
    #[serde(alias = "description", default)]
    pub(crate) transaction_description: String,
    #[serde(alias = "merchantName", default)]
    pub(crate) merchant_name: String,
    #[serde(alias = "cardType", default)]
    pub(crate) card_type: Option<String>,
}

impl From<CsvRow> for Transaction {
    fn from(item: CsvRow) -> Self {
        Transaction {
            id: item.transaction_id,
            date: item.transaction_date,
            amount: Amount::Text(item.transaction_amount),
            transaction_type: item.transaction_type,
            description: item.transaction_description,
            merchant_name: item.merchant_name,
            card_type: item.card_type.filter(|c| !c.is_empty()),
        }
    }
}

/// Load transactions from a `.json` file (an array of records) or a `.csv` file with a header row
pub fn read_transactions(path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let extension = path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let read: fn(File) -> anyhow::Result<Vec<Transaction>> = match extension.as_deref() {
        Some("json") => read_json,
        Some("csv") => read_csv,
        _ => bail!("Unsupported file type {:?}, expecting .json or .csv", path),
    };

    let file = File::open(path).with_context(|| format!("Unable to open {:?}", path))?;
    let transactions = read(file).with_context(|| format!("Unable to read transactions from {:?}", path))?;

    info!("Loaded {} transactions from {:?}", transactions.len(), path);
    Ok(transactions)
}

pub(crate) fn read_json<R: io::Read>(reader: R) -> anyhow::Result<Vec<Transaction>> {
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
}

pub(crate) fn read_csv<R: io::Read>(reader: R) -> anyhow::Result<Vec<Transaction>> {
    let mut transactions: Vec<Transaction> = vec![];
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    for (i, result) in rdr.deserialize().enumerate() {
        let row: CsvRow = result.with_context(|| format!("Invalid csv row {}", i + 1))?;
        transactions.push(row.into());
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests;
