//! Text-column sniffing.
//!
//! Classification needs a text-bearing column. Instead of guessing types
//! at call time, this module inspects a [`RecordSet`] once and returns the
//! declared list of candidate column names: columns that are genuinely
//! string-typed (at least one non-null value that isn't numeric, boolean,
//! or a datetime) and whose name isn't an identifier-like column
//! (`Date`, `Id`, case-insensitive).
//!
//! # Examples
//!
//! ```
//! use sentira::document::record::{Record, RecordSet};
//! use sentira::document::schema::sniff_text_columns;
//!
//! let mut set = RecordSet::new(vec!["Date".into(), "Title".into()]);
//! set.push(
//!     Record::builder()
//!         .add_integer("Date", 1660000000)
//!         .add_text("Title", "A headline")
//!         .build(),
//! );
//!
//! assert_eq!(sniff_text_columns(&set), vec!["Title".to_string()]);
//! ```

use crate::document::record::RecordSet;

/// Column names excluded from text candidates, compared case-insensitively.
pub const EXCLUDED_COLUMNS: &[&str] = &["date", "id"];

/// Return the candidate text columns of a record set, in header order.
pub fn sniff_text_columns(set: &RecordSet) -> Vec<String> {
    set.columns()
        .iter()
        .filter(|name| !is_excluded(name) && is_text_column(set, name))
        .cloned()
        .collect()
}

fn is_excluded(name: &str) -> bool {
    let lower = name.to_lowercase();
    EXCLUDED_COLUMNS.contains(&lower.as_str())
}

/// A column is text-bearing when at least one of its values is
/// string-typed. Columns that are entirely numeric, boolean, datetime, or
/// null carry no usable text.
fn is_text_column(set: &RecordSet, name: &str) -> bool {
    set.records()
        .iter()
        .filter_map(|record| record.get_field(name))
        .any(|value| value.is_textual())
}
