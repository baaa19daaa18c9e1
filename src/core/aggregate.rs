//! Revenue analytics over a date range.

use crate::models::Entry;
use crate::utils::date::days_in_range;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// Fraction of revenue kept by the business; the rest is paid out to
/// technicians. Same split for everybody.
pub const SERVICE_SHARE_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub total_revenue: f64,
    pub service_share: f64,
    pub master_payout: f64,
    pub job_count: usize,
    /// One slot per calendar day of the range, aligned with `daily_revenue`.
    pub days: Vec<NaiveDate>,
    pub daily_revenue: Vec<f64>,
    /// Per-master totals, in first-encountered order.
    pub by_technician: Vec<(String, f64)>,
}

impl AggregateResult {
    /// `by_technician` sorted by value, descending. Ties keep first-seen order.
    pub fn ranked_technicians(&self) -> Vec<(String, f64)> {
        let mut ranked = self.by_technician.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    pub fn technician_total(&self, master: &str) -> Option<f64> {
        self.by_technician
            .iter()
            .find(|(m, _)| m == master)
            .map(|(_, v)| *v)
    }

    /// Share of total revenue (0..=1) for every master, ranked.
    pub fn technician_shares(&self) -> Vec<(String, f64)> {
        self.ranked_technicians()
            .into_iter()
            .map(|(m, v)| {
                let share = if self.total_revenue > 0.0 {
                    v / self.total_revenue
                } else {
                    0.0
                };
                (m, share)
            })
            .collect()
    }
}

/// Entries whose date lies in `[start, end]`, storage order preserved.
/// Entries with a malformed date never match.
pub fn filter_by_range(entries: &[Entry], start: NaiveDate, end: NaiveDate) -> Vec<&Entry> {
    entries
        .iter()
        .filter(|e| e.naive_date().is_some_and(|d| start <= d && d <= end))
        .collect()
}

pub fn aggregate(entries: &[Entry], start: NaiveDate, end: NaiveDate) -> AggregateResult {
    let filtered = filter_by_range(entries, start, end);

    let days = days_in_range(start, end);
    let mut daily_revenue = vec![0.0; days.len()];
    let mut by_technician: Vec<(String, f64)> = Vec::new();
    let mut total_revenue = 0.0;

    for e in &filtered {
        let total = e.total();
        total_revenue += total;

        if let Some(d) = e.naive_date() {
            let idx = (d - start).num_days() as usize;
            if let Some(slot) = daily_revenue.get_mut(idx) {
                *slot += total;
            }
        }

        match by_technician.iter_mut().find(|(m, _)| *m == e.master) {
            Some((_, sum)) => *sum += total,
            None => by_technician.push((e.master.clone(), total)),
        }
    }

    AggregateResult {
        total_revenue,
        service_share: total_revenue * SERVICE_SHARE_RATIO,
        master_payout: total_revenue * (1.0 - SERVICE_SHARE_RATIO),
        job_count: filtered.len(),
        days,
        daily_revenue,
        by_technician,
    }
}
