//! Common types for the fretboard core: errors returned by `Fret` and `Neck`.

use alloc::string::String;

/// Errors returned by Fret and Neck operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeckError {
    /// A neck needs at least one fret.
    InvalidFretCount,
    /// Chord fret (1-based) outside `[1, fret_count]`.
    FretOutOfRange { fret: usize, fret_count: usize },
    /// String slot index outside `[0, string_count)`.
    StringOutOfRange { index: usize, string_count: usize },
    /// String label not in the string name table.
    UnknownString(String),
    /// Finger label not in the finger name table.
    UnknownFinger(String),
}

impl core::fmt::Display for NeckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NeckError::InvalidFretCount => write!(f, "A neck needs at least one fret"),
            NeckError::FretOutOfRange { fret, fret_count } => {
                write!(f, "Fret {} is out of range - must be 1-{}", fret, fret_count)
            }
            NeckError::StringOutOfRange {
                index,
                string_count,
            } => write!(
                f,
                "String index {} is out of range - must be 0-{}",
                index,
                string_count.saturating_sub(1)
            ),
            NeckError::UnknownString(label) => write!(f, "Unknown string '{}'", label),
            NeckError::UnknownFinger(label) => write!(f, "Unknown finger '{}'", label),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NeckError {}
