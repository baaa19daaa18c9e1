use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One service-log record, as persisted under the entries key.
///
/// Field names on disk follow the camelCase layout (`workCost`,
/// `partsMarkup`) so existing collections stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub date: String, // "YYYY-MM-DD"
    pub master: String,
    pub car: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub work_cost: f64,
    #[serde(default)]
    pub parts_markup: f64,
}

impl Entry {
    /// Labor + parts markup. Never stored, always recomputed.
    pub fn total(&self) -> f64 {
        self.work_cost + self.parts_markup
    }

    /// Parsed calendar date, `None` when the stored string is malformed.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn services_joined(&self) -> String {
        self.services.join("; ")
    }

    /// Apply a typed patch: every present field overwrites, `id` is kept.
    pub fn apply(&mut self, patch: &EntryPatch) {
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(master) = &patch.master {
            self.master = master.clone();
        }
        if let Some(car) = &patch.car {
            self.car = car.clone();
        }
        if let Some(services) = &patch.services {
            self.services = services.clone();
        }
        if let Some(work) = patch.work_cost {
            self.work_cost = work;
        }
        if let Some(parts) = patch.parts_markup {
            self.parts_markup = parts;
        }
    }
}

/// Input for `RecordStore::create`: an entry still without id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewEntry {
    pub date: String,
    pub master: String,
    pub car: String,
    pub services: Vec<String>,
    pub work_cost: f64,
    pub parts_markup: f64,
}

impl NewEntry {
    pub fn with_id(self, id: i64) -> Entry {
        Entry {
            id,
            date: self.date,
            master: self.master,
            car: self.car,
            services: self.services,
            work_cost: self.work_cost,
            parts_markup: self.parts_markup,
        }
    }
}

/// Partial update. `None` = keep the current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub master: Option<String>,
    pub car: Option<String>,
    pub services: Option<Vec<String>>,
    pub work_cost: Option<f64>,
    pub parts_markup: Option<f64>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.master.is_none()
            && self.car.is_none()
            && self.services.is_none()
            && self.work_cost.is_none()
            && self.parts_markup.is_none()
    }
}
