//! Pure analytics over entry snapshots
//!
//! Nothing here touches storage: callers load entries, then filter,
//! aggregate and bucket them.

pub mod aggregate;
pub mod filter;
pub mod trend;

pub use aggregate::{
    category_breakdown, category_totals, CategoryShare, CategoryTotal, Dashboard, EntrySummary,
};
pub use filter::{entries_in_period, filter_entries, sort_by_date, EntryFilter};
pub use trend::{trend_buckets, TrendPoint};
