//! Log view: free-text search and grouping by technician.
//! No date restriction applies here.

use crate::models::Entry;

/// Case-insensitive substring match on `master` or `car`.
/// A blank query matches everything.
pub fn search<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|e| e.master.to_lowercase().contains(&q) || e.car.to_lowercase().contains(&q))
        .collect()
}

#[derive(Debug)]
pub struct MasterGroup<'a> {
    pub master: String,
    pub entries: Vec<&'a Entry>,
}

impl MasterGroup<'_> {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.total()).sum()
    }
}

/// Groups in first-encountered master order; entries keep their order.
pub fn group_by_master<'a>(entries: &[&'a Entry]) -> Vec<MasterGroup<'a>> {
    let mut groups: Vec<MasterGroup<'a>> = Vec::new();

    for &e in entries {
        match groups.iter_mut().find(|g| g.master == e.master) {
            Some(g) => g.entries.push(e),
            None => groups.push(MasterGroup {
                master: e.master.clone(),
                entries: vec![e],
            }),
        }
    }

    groups
}
