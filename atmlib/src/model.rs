//! Доменная модель: нормализованная запись между AndroMoney и Moze.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AtmError, Result};
use crate::formats::{andromoney::{AndroMoney, AndroMoneyRow}, moze::{Moze, MozeRow}};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordType {
    Income,
    Expense,
    Transfer,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordType::Income => "Income",
            RecordType::Expense => "Expense",
            RecordType::Transfer => "Transfer",
        })
    }
}

/// Сырые поля для прямого создания [`Record`]. Ничего не нормализуется.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordParts {
    pub from_account: Option<String>,
    pub to_account: Option<String>,
    pub from_amount: Option<Decimal>,
    pub to_amount: Option<Decimal>,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    /// [основная категория, подкатегория]
    pub categories: [String; 2],
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub shop: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
    pub project: Option<String>,
}

/// Одна транзакция. После создания только для чтения; тип вычисляется один раз.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    from_account: Option<String>,
    to_account: Option<String>,
    from_amount: Option<Decimal>,
    to_amount: Option<Decimal>,
    from_currency: Option<String>,
    to_currency: Option<String>,
    categories: [String; 2],
    date: NaiveDate,
    time: Option<NaiveTime>,
    shop: Option<String>,
    title: Option<String>,
    detail: Option<String>,
    project: Option<String>,
    record_type: RecordType,
}

fn present(s: &Option<String>) -> bool {
    s.as_deref().is_some_and(|s| !s.is_empty())
}

impl Record {
    pub fn new(p: RecordParts) -> Result<Self> {
        if !present(&p.from_account) && !present(&p.to_account) {
            return Err(AtmError::Validation { field: "account" });
        }
        if p.from_amount.is_none() && p.to_amount.is_none() {
            return Err(AtmError::Validation { field: "amount" });
        }
        if !present(&p.from_currency) && !present(&p.to_currency) {
            return Err(AtmError::Validation { field: "currency" });
        }

        let record_type = match (present(&p.from_account), present(&p.to_account)) {
            (true, true) => RecordType::Transfer,
            (true, false) => RecordType::Expense,
            _ => RecordType::Income,
        };

        Ok(Record {
            from_account: p.from_account,
            to_account: p.to_account,
            from_amount: p.from_amount,
            to_amount: p.to_amount,
            from_currency: p.from_currency,
            to_currency: p.to_currency,
            categories: p.categories,
            date: p.date,
            time: p.time,
            shop: p.shop,
            title: p.title,
            detail: p.detail,
            project: p.project,
            record_type,
        })
    }

    /// `Ok(None)`: строка-маркер SYSTEM, пропускается.
    pub fn from_andromoney(row: &AndroMoneyRow) -> Result<Option<Self>> {
        AndroMoney::record(row)
    }

    pub fn to_moze(&self) -> Result<Vec<MozeRow>> {
        Moze::rows(self)
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn from_account(&self) -> Option<&str> {
        self.from_account.as_deref()
    }

    pub fn to_account(&self) -> Option<&str> {
        self.to_account.as_deref()
    }

    pub fn from_amount(&self) -> Option<Decimal> {
        self.from_amount
    }

    pub fn to_amount(&self) -> Option<Decimal> {
        self.to_amount
    }

    pub fn from_currency(&self) -> Option<&str> {
        self.from_currency.as_deref()
    }

    pub fn to_currency(&self) -> Option<&str> {
        self.to_currency.as_deref()
    }

    pub fn categories(&self) -> &[String; 2] {
        &self.categories
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn shop(&self) -> Option<&str> {
        self.shop.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

impl TryFrom<RecordParts> for Record {
    type Error = AtmError;

    fn try_from(parts: RecordParts) -> Result<Self> {
        Record::new(parts)
    }
}
