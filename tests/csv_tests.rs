mod common;
use common::{d, entry};
use rservicelog::core::export::ExportLogic;
use rservicelog::core::period::DateRange;
use rservicelog::models::Entry;
use rservicelog::export::{CSV_HEADER, ExportFormat, report_file_name, to_csv, to_json};

const HEADER_LINE: &str = "ID,Дата,Мастер,Автомобиль,Услуги,Работа,Запчасти,Итого\r\n";

#[test]
fn test_empty_input_is_header_only() {
    let none: &[Entry] = &[];
    let out = to_csv(none).unwrap();
    assert_eq!(out, HEADER_LINE);
    assert_eq!(CSV_HEADER.join(","), HEADER_LINE.trim_end());
}

#[test]
fn test_row_layout_and_crlf() {
    let mut e = entry(1736035200000, "2025-01-05", "Ivan", 100.0, 50.0);
    e.car = "Lada Vesta".into();
    e.services = vec!["Замена масла".into(), "Развал-схождение".into()];

    let out = to_csv(&[e]).unwrap();

    assert_eq!(
        out,
        format!(
            "{HEADER_LINE}1736035200000,2025-01-05,Ivan,\"Lada Vesta\",\"Замена масла; Развал-схождение\",100,50,150.00\r\n"
        )
    );
}

#[test]
fn test_numbers_raw_and_total_two_decimals() {
    let mut e = entry(7, "2025-01-05", "A", 12.5, 0.25);
    e.services.clear();

    let out = to_csv(&[e]).unwrap();
    let row = out.lines().nth(1).unwrap();

    assert_eq!(row, "7,2025-01-05,A,\"Car of A\",\"\",12.5,0.25,12.75");
}

#[test]
fn test_total_halves_round_away_from_zero() {
    let totals = [
        (10.0, 0.125, "10.13"),
        (0.5, 0.125, "0.63"),
        (0.25, 0.125, "0.38"),
        // 2.675 is stored as 2.67499.., not an exact half
        (2.675, 0.0, "2.67"),
        (100.0, 50.0, "150.00"),
    ];

    for (work, parts, expected) in totals {
        let out = to_csv(&[entry(1, "2025-01-05", "A", work, parts)]).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert!(
            row.ends_with(&format!(",{expected}")),
            "work={work} parts={parts}: {row}"
        );
    }
}

#[test]
fn test_quotes_are_doubled() {
    let mut e = entry(3, "2025-01-05", "A", 1.0, 0.0);
    e.car = "Kia \"Rio\", 2019".into();
    e.services = vec!["Wash \"premium\"".into()];

    let out = to_csv(&[e]).unwrap();
    assert!(out.contains("\"Kia \"\"Rio\"\", 2019\""));
    assert!(out.contains("\"Wash \"\"premium\"\"\""));
}

#[test]
fn test_round_trip_with_standard_reader() {
    let mut a = entry(1, "2025-01-05", "Ivan", 100.0, 50.0);
    a.car = "Kia \"Rio\", white, 2019".into();
    a.services = vec!["Oil, 5W-30".into(), "Filter \"OEM\"".into()];
    let mut b = entry(2, "2025-01-06", "Petr", 200.0, 0.0);
    b.car = "Lada".into();
    b.services = vec![];

    let out = to_csv(&[a.clone(), b.clone()]).unwrap();

    let mut rdr = csv::Reader::from_reader(out.as_bytes());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    assert_eq!(&rows[0][3], a.car);
    assert_eq!(&rows[0][4], a.services.join("; "));
    assert_eq!(&rows[0][7], "150.00");
    assert_eq!(&rows[1][3], b.car);
    assert_eq!(&rows[1][4], "");
}

#[test]
fn test_report_file_name() {
    let r = DateRange::new(d("2025-01-01"), d("2025-01-31"));
    assert_eq!(
        report_file_name(&r, ExportFormat::Csv),
        "report_2025-01-01_to_2025-01-31.csv"
    );
    assert_eq!(
        report_file_name(&r, ExportFormat::Json),
        "report_2025-01-01_to_2025-01-31.json"
    );
}

#[test]
fn test_render_filters_by_range() {
    let entries = vec![
        entry(1, "2025-01-05", "A", 1.0, 0.0),
        entry(2, "2025-02-05", "B", 2.0, 0.0),
    ];
    let r = DateRange::new(d("2025-01-01"), d("2025-01-31"));

    let out = ExportLogic::render(&entries, ExportFormat::Csv, &r).unwrap();
    assert_eq!(out.matches("\r\n").count(), 2);
    assert!(out.contains("\r\n1,2025-01-05,A,"));
    assert!(!out.contains(",B,"));
}

#[test]
fn test_json_export_includes_total() {
    let entries = vec![entry(9, "2025-01-05", "A", 100.0, 50.0)];
    let out = to_json(&entries).unwrap();

    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v[0]["id"], 9);
    assert_eq!(v[0]["workCost"], 100.0);
    assert_eq!(v[0]["total"], 150.0);
}
