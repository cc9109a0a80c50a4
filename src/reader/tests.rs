use std::path::PathBuf;
use crate::analyzer::{AmountPolicy, TransactionAnalyzer};
use crate::error::QueryError;
use crate::reader::{read_csv, read_json, read_transactions};
use crate::transaction::Amount;

#[test]
fn test_read_json_fixture() {
    let transactions = read_transactions(&fixture_filename("transactions.json")).unwrap();
    assert_eq!(transactions.len(), 5);

    let first = &transactions[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.amount, Amount::Number(95.0));
    assert_eq!(first.card_type.as_deref(), Some("Visa"));

    // String amounts are kept as text
    assert_eq!(transactions[2].amount, Amount::Text("110.00".to_string()));
    assert_eq!(transactions[4].card_type, None);
}

#[test]
fn test_read_csv_fixture() {
    let transactions = read_transactions(&fixture_filename("transactions.csv")).unwrap();
    assert_eq!(transactions.len(), 4);

    assert_eq!(transactions[1].amount.value(), Some(1500.0));
    assert_eq!(transactions[1].merchant_name, "Employer Inc.");
    assert_eq!(transactions[2].card_type, None);
    assert_eq!(transactions[3].amount.value(), None);
    assert!(transactions[3].parsed_date().is_some());
}

#[test]
fn test_read_csv_short_headers() {
    let data = "id,date,amount,type,description,merchantName\n7,2020-05-04,19.99,credit,Refund,Shop\n";
    let transactions = read_csv(data.as_bytes()).unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, "7");
    assert_eq!(transactions[0].merchant_name, "Shop");
}

#[test]
fn test_read_json_rejects_non_array() {
    assert!(read_json("{\"transaction_id\": \"1\"}".as_bytes()).is_err());
}

#[test]
fn test_read_json_null_amount() {
    let data = r#"[
        {"id": "1", "date": "2019-01-01", "amount": null, "type": "debit"},
        {"id": "2", "date": "2019-01-02", "amount": 5, "type": "debit"},
        {"id": "3", "date": "2019-01-03", "amount": false, "type": "credit"}
    ]"#;

    let transactions = read_json(data.as_bytes()).unwrap();
    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0].amount.value(), None);
    assert_eq!(transactions[1].amount.value(), Some(5.0));

    let strict = TransactionAnalyzer::new(transactions.clone());
    assert_eq!(strict.total_amount(), Err(QueryError::InvalidAmount { id: "1".to_string(), raw: "null".to_string() }));

    let zero = TransactionAnalyzer::with_amount_policy(transactions, AmountPolicy::Zero);
    assert_eq!(zero.total_amount(), Ok(5.0));
}

#[test]
fn test_unsupported_extension() {
    let result = read_transactions(&fixture_filename("transactions.csv").with_extension("txt"));
    assert!(result.is_err());
}

#[test]
fn test_missing_file() {
    assert!(read_transactions(&fixture_filename("missing.json")).is_err());
}

/// Return the path to a file within the test data directory
pub(crate) fn fixture_filename(filename: &str) -> PathBuf {
    let mut dir = fixture_dir();
    dir.push(filename);
    dir
}

pub(crate) fn fixture_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("fixture");
    dir
}
