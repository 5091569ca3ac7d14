//! CSV импорта Moze, 16 колонок:
//! Account,Currency,Type,Main Category,Subcategory,Price,Fee,Bonus,Name,Store,Date,Time,Project,Description,Tag,Target

use crate::{
    error::{AtmError, Result},
    model::{Record, RecordType},
};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

pub const MOZE_COLUMNS: [&str; 16] = [
    "Account",
    "Currency",
    "Type",
    "Main Category",
    "Subcategory",
    "Price",
    "Fee",
    "Bonus",
    "Name",
    "Store",
    "Date",
    "Time",
    "Project",
    "Description",
    "Tag",
    "Target",
];

const SUPPORTED: [RecordType; 3] = [RecordType::Expense, RecordType::Income, RecordType::Transfer];

/// Одна строка (нога) транзакции в Moze.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MozeRow {
    #[serde(rename = "Account")]
    pub account: Option<String>,
    #[serde(rename = "Currency")]
    pub currency: Option<String>,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Main Category")]
    pub main_category: String,
    #[serde(rename = "Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Price")]
    pub price: Option<Decimal>,
    #[serde(rename = "Fee")]
    pub fee: Option<Decimal>,
    #[serde(rename = "Bonus")]
    pub bonus: Option<Decimal>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Store")]
    pub store: Option<String>,
    /// YYYY/MM/DD
    #[serde(rename = "Date")]
    pub date: String,
    /// HH:MM
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Project")]
    pub project: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Tag")]
    pub tag: Option<String>,
    #[serde(rename = "Target")]
    pub target: Option<String>,
}

pub struct Moze;

impl Moze {
    /// Расход: одна строка-списание, доход: одна строка-зачисление, перевод: обе.
    pub fn rows(record: &Record) -> Result<Vec<MozeRow>> {
        let record_type = record.record_type();
        if !SUPPORTED.contains(&record_type) {
            return Err(AtmError::UnsupportedConversion(record_type));
        }

        let [main_category, subcategory] = record.categories();
        let date = record.date().format("%Y/%m/%d").to_string();
        let time = record.time().map(|t| t.format("%H:%M").to_string());

        let leg = |account: Option<&str>,
                   currency: Option<&str>,
                   price: Option<Decimal>,
                   kind: &str| MozeRow {
            account: account.map(str::to_owned),
            currency: currency.map(str::to_owned),
            kind: kind.to_owned(),
            main_category: main_category.clone(),
            subcategory: subcategory.clone(),
            price,
            fee: None,
            bonus: None,
            name: record.title().map(str::to_owned),
            store: record.shop().map(str::to_owned),
            date: date.clone(),
            time: time.clone(),
            project: record.project().map(str::to_owned),
            description: record.detail().map(str::to_owned),
            tag: None,
            target: None,
        };

        let debit = leg(
            record.from_account(),
            record.from_currency(),
            record.from_amount().map(|a| -a),
            "Expense",
        );
        let credit = leg(
            record.to_account(),
            record.to_currency(),
            record.to_amount(),
            "Income",
        );

        Ok(match record_type {
            RecordType::Transfer => vec![
                MozeRow { kind: "Transfer Out".into(), ..debit },
                MozeRow { kind: "Transfer In".into(), ..credit },
            ],
            RecordType::Expense => vec![debit],
            RecordType::Income => vec![credit],
        })
    }
}

impl crate::traits::WriteFormat for Moze {
    fn write<W: Write>(mut w: W, records: &[Record]) -> Result<()> {
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(&mut w);
        wrt.write_record(MOZE_COLUMNS)?;

        for record in records {
            for row in Moze::rows(record)? {
                wrt.serialize(row)?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}
