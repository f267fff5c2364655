//! # Lookup
//!
//! The munch callback: find the key whose value is the sentinel.
//!
//! Records keep insertion order. Every match overwrites the answer, so the
//! last matching key in scan order (records in order, keys in insertion
//! order) wins.
//!
//! Insertion order is kept even for integer-like keys. A JavaScript
//! `Object.keys` lists those first in ascending order, so a record such as
//! `{"b": "lollipop", "1": "lollipop"}` answers `"1"` here where the game
//! host would scan `"1"` first and answer `"b"`.

use indexmap::IndexMap;

/// One host object, string keys to string values, insertion-ordered
pub type Record = IndexMap<String, String>;

/// Value the munch is looking for
pub const DEFAULT_SENTINEL: &str = "lollipop";

/// Key of the last value equal to `sentinel`, or `""` when none matches.
pub fn find_key_for_sentinel(records: &[Record], sentinel: &str) -> String {
    records
        .iter()
        .flat_map(|record| record.iter())
        .filter(|(_, value)| value.as_str() == sentinel)
        .last()
        .map(|(key, _)| key.clone())
        .unwrap_or_default()
}

/// [`find_key_for_sentinel`] with [`DEFAULT_SENTINEL`]; this is the
/// function registered through `tell_munch`.
pub fn find_key(records: &[Record]) -> String {
    find_key_for_sentinel(records, DEFAULT_SENTINEL)
}
