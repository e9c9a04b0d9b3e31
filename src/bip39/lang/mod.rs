/*
    Lookups against the English wordlist.

    The list is kept sorted so word -> index is a binary search.
    Matching is exact: no case folding or unicode normalisation.
*/

pub mod en;

pub use en::WORDS;

/**
    Returns the position of `word` in the wordlist, if it is there.
*/
pub fn index_of(word: &str) -> Option<u16> {
    WORDS.binary_search_by(|probe| (*probe).cmp(word)).ok().map(|i| i as u16)
}

/**
    Returns the word at `index`. Only the low 11 bits of the index are used.
*/
pub fn word_at(index: u16) -> &'static str {
    WORDS[(index & 0x7ff) as usize]
}
