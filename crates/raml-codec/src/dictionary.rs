//! Frequency-ranked dictionary of unique tokens.

use std::collections::HashMap;

use crate::config::TieBreak;
use crate::error::{CapacityError, Result};
use crate::width;

/// A unique word with its occurrence count. Rank is the entry's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictEntry<'a> {
    pub word: &'a [u8],
    pub count: u64,
}

/// Unique tokens ranked by descending count (rank 0 = most frequent).
#[derive(Debug, Clone, Default)]
pub struct Dictionary<'a> {
    entries: Vec<DictEntry<'a>>,
    ranks: HashMap<&'a [u8], u64>,
    token_count: u64,
}

impl<'a> Dictionary<'a> {
    /// Count every token and assign dense ranks in descending-count order.
    pub fn build<I>(tokens: I, tie_break: TieBreak) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        // first-seen order; `slots` maps a word to its position here
        let mut entries: Vec<DictEntry<'a>> = Vec::new();
        let mut slots: HashMap<&'a [u8], usize> = HashMap::new();
        let mut token_count: u64 = 0;

        for token in tokens {
            match slots.get(token) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    slots.insert(token, entries.len());
                    entries.push(DictEntry { word: token, count: 1 });
                }
            }
            token_count += 1;
        }

        if u64::try_from(entries.len()).is_err() {
            return Err(CapacityError::TooManyWords { count: entries.len() }.into());
        }
        if let Some(entry) = entries.iter().find(|e| u64::try_from(e.word.len()).is_err()) {
            return Err(CapacityError::WordTooLong { len: entry.word.len() }.into());
        }

        // sort_by is stable, so equal counts keep first-seen order
        match tie_break {
            TieBreak::FirstSeen => entries.sort_by(|a, b| b.count.cmp(&a.count)),
            TieBreak::Lexical => {
                entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(b.word)))
            }
        }

        let ranks = entries
            .iter()
            .enumerate()
            .map(|(rank, e)| (e.word, rank as u64))
            .collect();

        Ok(Self { entries, ranks, token_count })
    }

    /// Entries in rank order.
    pub fn entries(&self) -> &[DictEntry<'a>] {
        &self.entries
    }

    pub fn get(&self, rank: u64) -> Option<&DictEntry<'a>> {
        usize::try_from(rank).ok().and_then(|r| self.entries.get(r))
    }

    pub fn rank_of(&self, word: &[u8]) -> Option<u64> {
        self.ranks.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total tokens observed, counting repeats.
    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    pub fn max_word_len(&self) -> usize {
        self.entries.iter().map(|e| e.word.len()).max().unwrap_or(0)
    }

    /// Length-field class shared by every entry of this dictionary.
    pub fn width_class(&self) -> u8 {
        width::width_class(self.max_word_len() as u64)
    }
}
