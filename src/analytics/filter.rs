//! Entry selection by instant range, calendar period, or user-chosen dates

use chrono::{FixedOffset, NaiveDate};

use crate::models::{DateRange, Entry, EntryType, Period, Timestamp};

/// Entries whose timestamp lies within `range` (inclusive), in their
/// original order
pub fn filter_entries(entries: &[Entry], range: &DateRange) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}

/// Entries that fall within a calendar period in the given offset
pub fn entries_in_period(entries: &[Entry], period: &Period, offset: &FixedOffset) -> Vec<Entry> {
    filter_entries(entries, &period.date_range(offset))
}

/// Sort entries oldest first; entries sharing a timestamp keep their order
pub fn sort_by_date(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.date);
}

/// Filter used by entry listings and the dashboard
///
/// Dates are calendar days: the start date counts from local midnight and
/// the end date runs through the last instant of that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// `None` means both types
    pub entry_type: Option<EntryType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only entries of this type
    pub fn entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    /// Only entries on or after this day
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Only entries on or before this day
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Restrict to a calendar period
    pub fn period(self, period: &Period) -> Self {
        self.from(period.start_date()).to(period.end_date())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Instant range selected by the dates; unbounded sides are open
    pub fn range(&self, offset: &FixedOffset) -> DateRange {
        let start = self
            .start_date
            .map(|d| Timestamp::start_of_day(d, offset))
            .unwrap_or(Timestamp::MIN);
        let end = self
            .end_date
            .map(|d| Timestamp::end_of_day(d, offset))
            .unwrap_or(Timestamp::MAX);
        DateRange { start, end }
    }

    /// Matching entries in their original order
    ///
    /// A start date after the end date selects nothing.
    pub fn apply(&self, entries: &[Entry], offset: &FixedOffset) -> Vec<Entry> {
        let range = self.range(offset);
        if range.start > range.end {
            return Vec::new();
        }

        entries
            .iter()
            .filter(|e| self.entry_type.map_or(true, |t| e.entry_type == t))
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, Money, MonthIndex};
    use chrono::NaiveTime;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry_at(id: u64, entry_type: EntryType, day: NaiveDate, h: u32) -> Entry {
        let naive = day.and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap());
        Entry::new(
            EntryId::new(id),
            entry_type,
            Timestamp::from_local(naive, &utc()),
            Money::from_cents(100),
        )
    }

    fn ids(entries: &[Entry]) -> Vec<u64> {
        entries.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn test_filter_keeps_order_and_bounds() {
        let entries = vec![
            entry_at(1, EntryType::Expense, date(2025, 2, 1), 0),
            entry_at(2, EntryType::Expense, date(2025, 1, 31), 23),
            entry_at(3, EntryType::Saving, date(2024, 12, 31), 23),
            entry_at(4, EntryType::Saving, date(2025, 1, 1), 0),
            entry_at(5, EntryType::Expense, date(2025, 1, 15), 12),
        ];
        let period = Period::month(2025, MonthIndex::JANUARY);
        let range = period.date_range(&utc());

        let selected = filter_entries(&entries, &range);
        assert_eq!(ids(&selected), vec![2, 4, 5]);
        assert!(selected.iter().all(|e| range.start <= e.date && e.date <= range.end));

        assert_eq!(ids(&entries_in_period(&entries, &period, &utc())), vec![2, 4, 5]);
    }

    #[test]
    fn test_inclusive_range_edges() {
        let mut entries = vec![entry_at(1, EntryType::Expense, date(2025, 1, 1), 0)];
        let range = DateRange::new(entries[0].date, entries[0].date);
        assert_eq!(filter_entries(&entries, &range).len(), 1);

        entries[0].date = range.end.pred();
        assert!(filter_entries(&entries, &range).is_empty());
    }

    #[test]
    fn test_end_date_covers_whole_day() {
        let entries = vec![
            entry_at(1, EntryType::Expense, date(2025, 3, 10), 23),
            entry_at(2, EntryType::Expense, date(2025, 3, 11), 0),
        ];
        let filter = EntryFilter::new().from(date(2025, 3, 10)).to(date(2025, 3, 10));
        assert_eq!(ids(&filter.apply(&entries, &utc())), vec![1]);
    }

    #[test]
    fn test_type_filter() {
        let entries = vec![
            entry_at(1, EntryType::Expense, date(2025, 3, 10), 1),
            entry_at(2, EntryType::Saving, date(2025, 3, 10), 2),
        ];
        assert_eq!(ids(&EntryFilter::new().apply(&entries, &utc())), vec![1, 2]);
        assert_eq!(
            ids(&EntryFilter::new().entry_type(EntryType::Saving).apply(&entries, &utc())),
            vec![2]
        );
        assert!(EntryFilter::new().is_empty());
    }

    #[test]
    fn test_inverted_dates_select_nothing() {
        let entries = vec![entry_at(1, EntryType::Expense, date(2025, 3, 10), 1)];
        let filter = EntryFilter::new().from(date(2025, 3, 11)).to(date(2025, 3, 9));
        assert!(filter.apply(&entries, &utc()).is_empty());
    }

    #[test]
    fn test_sort_by_date_is_stable() {
        let mut entries = vec![
            entry_at(1, EntryType::Expense, date(2025, 3, 12), 0),
            entry_at(2, EntryType::Expense, date(2025, 3, 10), 0),
            entry_at(3, EntryType::Saving, date(2025, 3, 12), 0),
        ];
        sort_by_date(&mut entries);
        assert_eq!(ids(&entries), vec![2, 1, 3]);
    }
}
