// src/report.rs
//! Aggregate figures printed after a run.

use std::collections::BTreeMap;
use std::fmt;

use crate::data::ResultTable;
use crate::specs::results::{Projection, Role};

pub const GOLD: &str = "G";
pub const SILVER: &str = "S";
pub const BRONZE: &str = "B";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub date_min: Option<String>,
    pub date_max: Option<String>,
    /// Every tag seen, including "" and unknown ones.
    pub medals: BTreeMap<String, usize>,
}

impl Summary {
    pub fn medal(&self, tag: &str) -> usize {
        self.medals.get(tag).copied().unwrap_or(0)
    }

    pub fn gold(&self) -> usize { self.medal(GOLD) }
    pub fn silver(&self) -> usize { self.medal(SILVER) }
    pub fn bronze(&self) -> usize { self.medal(BRONZE) }
}

/// Dates compare as plain strings; only meaningful for ISO-like dates.
pub fn summarize(table: &ResultTable, projection: &Projection) -> Summary {
    let mut summary = Summary { rows: table.len(), ..Summary::default() };

    if let Some(ix) = projection.column_of(Role::Date) {
        let dates = table.column(ix).filter(|d| !d.is_empty());
        for d in dates {
            if summary.date_min.as_deref().is_none_or(|m| d < m) {
                summary.date_min = Some(s!(d));
            }
            if summary.date_max.as_deref().is_none_or(|m| d > m) {
                summary.date_max = Some(s!(d));
            }
        }
    }

    if let Some(ix) = projection.column_of(Role::Medal) {
        for tag in table.column(ix) {
            *summary.medals.entry(s!(tag)).or_insert(0) += 1;
        }
    }

    summary
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "获取到 {} 条比赛记录", self.rows)?;
        match (&self.date_min, &self.date_max) {
            (Some(lo), Some(hi)) => writeln!(f, "比赛时间范围: {lo} - {hi}")?,
            _ => writeln!(f, "比赛时间范围: -")?,
        }
        writeln!(f)?;
        writeln!(f, "奖牌统计:")?;
        writeln!(f, "金牌 (G): {}", self.gold())?;
        writeln!(f, "银牌 (S): {}", self.silver())?;
        write!(f, "铜牌 (B): {}", self.bronze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::results::{FULL, MINIMAL};

    fn full_table(medals: &[&str], dates: &[&str]) -> ResultTable {
        let n = medals.len().max(dates.len());
        let rows = (0..n)
            .map(|i| {
                let mut r = vec![s!(); FULL.len()];
                r[5] = s!(medals.get(i).copied().unwrap_or(""));
                r[7] = s!(dates.get(i).copied().unwrap_or(""));
                r
            })
            .collect();
        ResultTable { headers: FULL.headers(), rows }
    }

    #[test]
    fn medal_counts_surface_known_tags() {
        let s = summarize(&full_table(&["G", "G", "S", "B", "X", ""], &[]), &FULL);
        assert_eq!((s.gold(), s.silver(), s.bronze()), (2, 1, 1));
        assert_eq!(s.medal("X"), 1);
        assert_eq!(s.medal(""), 1);
        assert_eq!(s.rows, 6);
    }

    #[test]
    fn date_range_is_lexicographic() {
        let s = summarize(&full_table(&[], &["2012-07-29", "2008-08-10", "2016-08-09"]), &FULL);
        assert_eq!(s.date_min.as_deref(), Some("2008-08-10"));
        assert_eq!(s.date_max.as_deref(), Some("2016-08-09"));
    }

    #[test]
    fn empty_dates_are_skipped() {
        let s = summarize(&full_table(&[], &["", "2010-01-01", ""]), &FULL);
        assert_eq!(s.date_min, s.date_max);
        assert_eq!(s.date_min.as_deref(), Some("2010-01-01"));
    }

    #[test]
    fn empty_table_is_all_zero() {
        let s = summarize(&ResultTable { headers: MINIMAL.headers(), rows: vec![] }, &MINIMAL);
        assert_eq!(s, Summary::default());
        assert!(s.to_string().contains("金牌 (G): 0"));
    }
}
