use atmlib::{
    formats::moze::{Moze, MOZE_COLUMNS},
    model::{Record, RecordParts, RecordType},
    traits::WriteFormat,
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

fn record(from: Option<&str>, to: Option<&str>) -> Record {
    Record::new(RecordParts {
        from_account: from.map(Into::into),
        to_account: to.map(Into::into),
        from_amount: Some(Decimal::new(50, 0)),
        to_amount: Some(Decimal::new(1500, 0)),
        from_currency: Some("USD".into()),
        to_currency: Some("TWD".into()),
        categories: ["Food".into(), "Lunch".into()],
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        time: Some(NaiveTime::from_hms_opt(8, 5, 0).unwrap()),
        shop: Some("Diner".into()),
        title: Some("Brunch".into()),
        detail: Some("with friends".into()),
        project: Some("Trip".into()),
    })
    .expect("valid record")
}

#[test]
fn transfer_renders_two_legs() {
    let rows = record(Some("Cash"), Some("Bank")).to_moze().expect("render");
    assert_eq!(rows.len(), 2);

    let (out, inn) = (&rows[0], &rows[1]);
    assert_eq!(out.kind, "Transfer Out");
    assert_eq!(out.account.as_deref(), Some("Cash"));
    assert_eq!(out.currency.as_deref(), Some("USD"));
    assert_eq!(out.price, Some(Decimal::new(-50, 0)));

    assert_eq!(inn.kind, "Transfer In");
    assert_eq!(inn.account.as_deref(), Some("Bank"));
    assert_eq!(inn.currency.as_deref(), Some("TWD"));
    assert_eq!(inn.price, Some(Decimal::new(1500, 0)));

    for row in &rows {
        assert_eq!(row.main_category, "Food");
        assert_eq!(row.subcategory, "Lunch");
        assert_eq!(row.name.as_deref(), Some("Brunch"));
        assert_eq!(row.store.as_deref(), Some("Diner"));
        assert_eq!(row.date, "2024/01/15");
        assert_eq!(row.time.as_deref(), Some("08:05"));
        assert_eq!(row.project.as_deref(), Some("Trip"));
        assert_eq!(row.description.as_deref(), Some("with friends"));
        assert_eq!((row.fee, row.bonus), (None, None));
        assert_eq!((&row.tag, &row.target), (&None, &None));
    }
}

#[test]
fn expense_and_income_pick_one_leg() {
    let transfer = record(Some("Cash"), Some("Bank")).to_moze().expect("render");

    let expense = record(Some("Cash"), Some("Bank"));
    let expense = Record::new(RecordParts {
        to_account: None,
        ..parts_of(&expense)
    })
    .expect("expense");
    assert_eq!(expense.record_type(), RecordType::Expense);
    let rows = Moze::rows(&expense).expect("render");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, "Expense");
    assert_eq!(rows[0].account, transfer[0].account);
    assert_eq!(rows[0].price, transfer[0].price);

    let income = record(None, Some("Bank"));
    assert_eq!(income.record_type(), RecordType::Income);
    let rows = Moze::rows(&income).expect("render");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, "Income");
    assert_eq!(rows[0].account, transfer[1].account);
    assert_eq!(rows[0].currency, transfer[1].currency);
    assert_eq!(rows[0].price, transfer[1].price);
}

fn parts_of(r: &Record) -> RecordParts {
    RecordParts {
        from_account: r.from_account().map(Into::into),
        to_account: r.to_account().map(Into::into),
        from_amount: r.from_amount(),
        to_amount: r.to_amount(),
        from_currency: r.from_currency().map(Into::into),
        to_currency: r.to_currency().map(Into::into),
        categories: r.categories().clone(),
        date: r.date(),
        time: r.time(),
        shop: r.shop().map(Into::into),
        title: r.title().map(Into::into),
        detail: r.detail().map(Into::into),
        project: r.project().map(Into::into),
    }
}

#[test]
fn missing_time_stays_empty() {
    let r = Record::new(RecordParts {
        time: None,
        ..parts_of(&record(Some("Cash"), None))
    })
    .expect("record");
    let rows = r.to_moze().expect("render");
    assert_eq!(rows[0].time, None);
}

#[test]
fn writes_csv_with_header() {
    let records = vec![record(Some("Cash"), None), record(Some("Cash"), Some("Bank"))];
    let mut out = Vec::new();
    Moze::write(&mut out, &records).expect("write moze");

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], MOZE_COLUMNS.join(","));
    assert_eq!(
        lines[1],
        "Cash,USD,Expense,Food,Lunch,-50,,,Brunch,Diner,2024/01/15,08:05,Trip,with friends,,"
    );
    assert!(lines[2].starts_with("Cash,USD,Transfer Out,"));
    assert!(lines[3].starts_with("Bank,TWD,Transfer In,Food,Lunch,1500,"));
}

#[test]
fn empty_input_still_writes_header() {
    let mut out = Vec::new();
    Moze::write(&mut out, &[]).expect("write moze");
    assert_eq!(String::from_utf8(out).unwrap().trim_end(), MOZE_COLUMNS.join(","));
}
