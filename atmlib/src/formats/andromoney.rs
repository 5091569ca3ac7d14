//! CSV-экспорт AndroMoney. Используемые колонки:
//! Category,Sub-Category,Amount,Currency,Date,Time,Expense(Transfer Out),Income(Transfer In),Payee/Payer,Remark,Project
//! Остальные колонки (Id, uid, Periodic, ...) игнорируются.

use crate::{
    error::{AtmError, Result},
    model::{Record, RecordParts},
};
use chrono::{NaiveDate, NaiveTime};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::BufRead;

pub const SYSTEM_CATEGORY: &str = "SYSTEM";

pub const CURRENCY_ADVISORY: &str = "AndroMoney does not preserve the amount received when \
transferring between different currencies, adjust such records manually";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AndroMoneyRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub-Category", default)]
    pub sub_category: String,
    #[serde(rename = "Amount", default)]
    pub amount: Option<String>,
    #[serde(rename = "Currency")]
    pub currency: Option<String>,
    /// YYYYMMDD
    #[serde(rename = "Date")]
    pub date: String,
    /// HHMM, может отсутствовать
    #[serde(rename = "Time", default)]
    pub time: Option<String>,
    #[serde(rename = "Expense(Transfer Out)")]
    pub expense_account: Option<String>,
    #[serde(rename = "Income(Transfer In)")]
    pub income_account: Option<String>,
    #[serde(rename = "Payee/Payer", default)]
    pub payee: Option<String>,
    #[serde(rename = "Remark", default)]
    pub remark: Option<String>,
    #[serde(rename = "Project", default)]
    pub project: Option<String>,
}

pub struct AndroMoney;

impl AndroMoney {
    /// `Ok(None)` для маркера инициализации счёта (SYSTEM с нулевой суммой).
    pub fn record(row: &AndroMoneyRow) -> Result<Option<Record>> {
        tracing::info!("{CURRENCY_ADVISORY}");

        let amount = match row.amount.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => Some(
                a.parse::<Decimal>()
                    .map_err(|e| AtmError::Parse(format!("amount {a:?}: {e}")))?,
            ),
            _ => None,
        };

        if row.category == SYSTEM_CATEGORY {
            if amount.is_some_and(|a| a.is_zero()) {
                return Ok(None);
            }
            let account = [&row.income_account, &row.expense_account]
                .into_iter()
                .flatten()
                .find(|a| !a.is_empty())
                .cloned()
                .unwrap_or_default();
            return Err(AtmError::MalformedInput { account });
        }

        let date = parse_date(&row.date)?;
        let time = match row.time.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => Some(parse_time(t)?),
            _ => None,
        };

        // одна сумма и одна валюта на обе стороны, см. CURRENCY_ADVISORY
        let record = Record::new(RecordParts {
            from_account: row.expense_account.clone(),
            to_account: row.income_account.clone(),
            from_amount: amount,
            to_amount: amount,
            from_currency: row.currency.clone(),
            to_currency: row.currency.clone(),
            categories: [row.category.clone(), row.sub_category.clone()],
            date,
            time,
            shop: row.payee.clone(),
            title: None,
            detail: row.remark.clone(),
            project: row.project.clone(),
        })?;

        Ok(Some(record))
    }
}

/// Числовое поле: "20240115", "930" или "930.0" (так его отдают табличные выгрузки).
fn parse_numeric(raw: &str, what: &str) -> Result<u32> {
    let s = raw.trim();
    if let Ok(n) = s.parse::<u32>() {
        return Ok(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
        _ => Err(AtmError::Parse(format!("{what}: {raw:?} is not a number"))),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let n = parse_numeric(raw, "date")?;
    NaiveDate::from_ymd_opt((n / 10_000) as i32, n / 100 % 100, n % 100)
        .ok_or_else(|| AtmError::Parse(format!("date {raw:?} is not YYYYMMDD")))
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    let n = parse_numeric(raw, "time")?;
    NaiveTime::from_hms_opt(n / 100, n % 100, 0)
        .ok_or_else(|| AtmError::Parse(format!("time {raw:?} is not HHMM")))
}

impl crate::traits::ReadFormat for AndroMoney {
    fn read_after<R: BufRead>(mut r: R, preamble: usize) -> Result<Vec<Record>> {
        let offset = crate::convert::skip_lines(&mut r, preamble)?;

        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let headers = rdr.headers()?.clone();
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for rec in rdr.records() {
            let rec = rec?;
            // физическая строка начала записи, с учётом преамбулы
            let line = rec.position().map_or(0, |p| p.line()) + offset;
            let at = |e: AtmError| AtmError::Row { line, source: Box::new(e) };

            let row: AndroMoneyRow = rec.deserialize(Some(&headers)).map_err(|e| at(e.into()))?;
            match AndroMoney::record(&row).map_err(at)? {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!(line, "skipping SYSTEM account marker");
                    skipped += 1;
                }
            }
        }

        if !records.is_empty() {
            tracing::warn!(records = records.len(), "{CURRENCY_ADVISORY}");
        }
        tracing::debug!(records = records.len(), skipped, "AndroMoney rows read");
        Ok(records)
    }
}
