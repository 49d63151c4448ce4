use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of symbols in the cipher alphabet: the 26 uppercase Latin letters
/// plus the space character. All modular arithmetic of the cipher runs over
/// Z_27.
pub const ALPHABET_SIZE: u8 = 27;

/// Index assigned to the space character.
pub const SPACE_INDEX: u8 = 26;

lazy_static! {
    /// A static HashMap mapping an index (0 to 26) to its corresponding
    /// alphabet symbol (A-Z, space).
    pub static ref INDEX_TO_SYMBOL_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();
        let symbols: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ".chars().collect();

        for (index, &symbol) in symbols.iter().enumerate() {
            map.insert(index as u8, symbol);
        }

        map
    };

    /// A static HashMap mapping an alphabet symbol (A-Z, space) to its
    /// corresponding index (0 to 26). Characters absent from this map are not
    /// part of the alphabet and pass through the transforms verbatim.
    pub static ref SYMBOL_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&index, &symbol) in INDEX_TO_SYMBOL_MAP.iter() {
            map.insert(symbol, index);
        }

        map
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::quickcheck;

    #[test]
    fn test_table_covers_whole_alphabet() {
        assert_eq!(INDEX_TO_SYMBOL_MAP.len(), ALPHABET_SIZE as usize);
        assert_eq!(SYMBOL_TO_INDEX_MAP.len(), ALPHABET_SIZE as usize);

        assert_eq!(INDEX_TO_SYMBOL_MAP[&0], 'A');
        assert_eq!(INDEX_TO_SYMBOL_MAP[&25], 'Z');
        assert_eq!(INDEX_TO_SYMBOL_MAP[&SPACE_INDEX], ' ');

        assert_eq!(SYMBOL_TO_INDEX_MAP[&'A'], 0);
        assert_eq!(SYMBOL_TO_INDEX_MAP[&'Z'], 25);
        assert_eq!(SYMBOL_TO_INDEX_MAP[&' '], SPACE_INDEX);
    }

    #[test]
    fn test_lowercase_and_punctuation_are_outside_the_alphabet() {
        assert!(!SYMBOL_TO_INDEX_MAP.contains_key(&'a'));
        assert!(!SYMBOL_TO_INDEX_MAP.contains_key(&'z'));
        assert!(!SYMBOL_TO_INDEX_MAP.contains_key(&'0'));
        assert!(!SYMBOL_TO_INDEX_MAP.contains_key(&'!'));
    }

    quickcheck! {
        fn prop_tables_are_mutual_inverses(raw: u8) -> bool {
            let index = raw % ALPHABET_SIZE;
            let symbol = INDEX_TO_SYMBOL_MAP[&index];

            SYMBOL_TO_INDEX_MAP[&symbol] == index
        }
    }
}
