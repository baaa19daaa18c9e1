use crate::errors::AppResult;
use crate::models::Entry;
use serde::Serialize;

/// Flat row for JSON export: the stored fields plus the derived total.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub master: String,
    pub car: String,
    pub services: Vec<String>,
    pub work_cost: f64,
    pub parts_markup: f64,
    pub total: f64,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            date: e.date.clone(),
            master: e.master.clone(),
            car: e.car.clone(),
            services: e.services.clone(),
            work_cost: e.work_cost,
            parts_markup: e.parts_markup,
            total: e.total(),
        }
    }
}

/// Export JSON pretty-printed.
pub fn to_json<'a, I>(entries: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let rows: Vec<EntryExport> = entries.into_iter().map(EntryExport::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
