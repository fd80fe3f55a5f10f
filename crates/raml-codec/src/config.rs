use serde::{Deserialize, Serialize};

/// How words with equal occurrence counts are ordered in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Earlier first occurrence gets the smaller rank.
    #[default]
    FirstSeen,
    /// Byte-wise ascending order of the word.
    Lexical,
}

/// Encoder settings. The decoder needs none of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub delimiter: u8,
    pub tie_break: TieBreak,
}

impl CodecConfig {
    pub fn new(delimiter: u8, tie_break: TieBreak) -> Self {
        Self { delimiter, tie_break }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: b' ',
            tie_break: TieBreak::FirstSeen,
        }
    }
}
