//! # Frequency Table Builder

use crate::types::{WsHashMap, hash_map_new};

/// Build a token -> occurrence-count table from an ordered token
/// sequence.
///
/// Pure function: duplicate tokens accumulate, and the resulting map
/// carries no ordering guarantees.
pub fn frequency_table<I>(tokens: I) -> WsHashMap<String, u64>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut table = hash_map_new();

    for token in tokens {
        *table.entry(token.into()).or_default() += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_accumulate() {
        let table = frequency_table(["world", "hello", "world", "world"]);

        assert_eq!(table.len(), 2);
        assert_eq!(table["hello"], 1);
        assert_eq!(table["world"], 3);
    }

    #[test]
    fn test_empty_sequence() {
        let table = frequency_table(Vec::<String>::new());

        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_string_is_a_token() {
        let table = frequency_table(["", "a", ""]);

        assert_eq!(table[""], 2);
        assert_eq!(table["a"], 1);
    }
}
