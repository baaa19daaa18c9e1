use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Header row, in column order.
pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Дата",
    "Мастер",
    "Автомобиль",
    "Услуги",
    "Работа",
    "Запчасти",
    "Итого",
];

/// Always quoted, inner `"` doubled.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Plain numeric rendering: `100` stays `100`, `12.5` stays `12.5`.
fn raw_number(v: f64) -> String {
    v.to_string()
}

/// Two decimals with exact halves rounded away from zero (`10.125` → `10.13`).
///
/// `{:.2}` rounds exact ties to even. A value sits exactly on a tie at the
/// third decimal only when it is an odd multiple of 1/8, so only those are
/// nudged before formatting.
fn fixed2(v: f64) -> String {
    let eighths = v * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", v + v.signum() * 0.001);
    }
    format!("{v:.2}")
}

/// One CSV row, fields already escaped.
pub(crate) fn entry_to_row(e: &Entry) -> [String; 8] {
    [
        e.id.to_string(),
        e.date.clone(),
        e.master.clone(),
        quoted(&e.car),
        quoted(&e.services_joined()),
        raw_number(e.work_cost),
        raw_number(e.parts_markup),
        fixed2(e.total()),
    ]
}

/// Serialize entries as CSV text, CRLF after every row (header included).
///
/// `date` and `master` are written as stored, `car` and `services` are
/// always quoted. An empty input produces the header only.
pub fn to_csv<'a, I>(entries: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    // Quoting is done per field above, so the writer must not add its own.
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for e in entries {
        wtr.write_record(entry_to_row(e))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
