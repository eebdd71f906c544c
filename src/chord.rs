//! Chord input: parsing free-form text into `(fret, string, finger)` triples
//! and validating them before they are handed to a `Neck`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::NeckError;
use crate::neck::resolve_note;

/// One finger placement as entered by the user. Fret numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordNote {
    pub fret: usize,
    pub string: String,
    pub finger: String,
}

impl ChordNote {
    pub fn new(fret: usize, string: &str, finger: &str) -> Self {
        ChordNote {
            fret,
            string: string.to_string(),
            finger: finger.to_string(),
        }
    }
}

impl fmt::Display for ChordNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.fret, self.string, self.finger)
    }
}

/// Ordered set of placements applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    notes: Vec<ChordNote>,
}

impl Chord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, note: ChordNote) {
        self.notes.push(note);
    }

    pub fn notes(&self) -> &[ChordNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Borrowed triples in the shape `Neck::add_chord` takes.
    pub fn triples(&self) -> impl Iterator<Item = (usize, &str, &str)> + '_ {
        self.notes
            .iter()
            .map(|n| (n.fret, n.string.as_str(), n.finger.as_str()))
    }

    /// Check every note against a neck with `fret_count` frets, collecting all
    /// problems rather than stopping at the first one.
    pub fn validate(&self, fret_count: usize) -> Result<(), Vec<ChordIssue>> {
        let issues: Vec<ChordIssue> = self
            .notes
            .iter()
            .enumerate()
            .filter_map(|(i, note)| {
                resolve_note(note.fret, &note.string, &note.finger, fret_count)
                    .err()
                    .map(|error| ChordIssue {
                        position: i + 1,
                        note: note.clone(),
                        error,
                    })
            })
            .collect();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

impl FromIterator<ChordNote> for Chord {
    fn from_iter<I: IntoIterator<Item = ChordNote>>(iter: I) -> Self {
        Chord {
            notes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a ChordNote;
    type IntoIter = core::slice::Iter<'a, ChordNote>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// Errors from turning raw text into a `Chord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordParseError {
    /// No tokens at all.
    Empty,
    /// Token count is not a multiple of three.
    WrongTokenCount(usize),
    /// Fret token is not a non-negative integer.
    InvalidFret(String),
}

impl fmt::Display for ChordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordParseError::Empty => write!(f, "Empty chord - expected fret,string,finger triples"),
            ChordParseError::WrongTokenCount(n) => write!(
                f,
                "Got {} values - chord must be given as fret,string,finger triples (e.g. 1,G,index)",
                n
            ),
            ChordParseError::InvalidFret(token) => {
                write!(f, "Invalid fret '{}' - must be a whole number", token)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChordParseError {}

impl FromStr for Chord {
    type Err = ChordParseError;

    /// Parse `"1,G,index,2,D,ring"` style input. Whitespace around tokens and
    /// empty tokens (e.g. a trailing comma) are ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(ChordParseError::Empty);
        }
        if tokens.len() % 3 != 0 {
            return Err(ChordParseError::WrongTokenCount(tokens.len()));
        }
        tokens
            .chunks_exact(3)
            .map(|t| {
                let fret = t[0]
                    .parse::<usize>()
                    .map_err(|_| ChordParseError::InvalidFret(t[0].to_string()))?;
                Ok(ChordNote::new(fret, t[1], t[2]))
            })
            .collect()
    }
}

/// One invalid note found by [`Chord::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordIssue {
    /// 1-based position of the note within the chord.
    pub position: usize,
    pub note: ChordNote,
    pub error: NeckError,
}

impl fmt::Display for ChordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note {} {}: {}", self.position, self.note, self.error)
    }
}
