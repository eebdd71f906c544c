//! The full fretboard: fret storage, chord application and text rendering.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};

use crate::common::NeckError;
use crate::config::{
    finger_from_label, string_index, DEFAULT_FRET_COUNT, OCTAVE_BOUNDARY,
    STRING_COUNT, STRING_NAMES,
};
use crate::finger::Finger;
use crate::fret::Fret;

/// Resolve a `(fret, string, finger)` triple into `(fret index, string index,
/// finger)` for a neck of `fret_count` frets.
pub(crate) fn resolve_note(
    fret: usize,
    string: &str,
    finger: &str,
    fret_count: usize,
) -> Result<(usize, usize, Finger), NeckError> {
    if fret == 0 || fret > fret_count {
        return Err(NeckError::FretOutOfRange { fret, fret_count });
    }
    let string_idx = string_index(string).ok_or_else(|| NeckError::UnknownString(string.into()))?;
    let finger = finger_from_label(finger).ok_or_else(|| NeckError::UnknownFinger(finger.into()))?;
    Ok((fret - 1, string_idx, finger))
}

/// An occupied cell, reported with the 1-based fret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub fret: usize,
    pub string: &'static str,
    pub finger: Finger,
}

/// Guitar neck made of `fret_count` frets over six strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neck {
    frets: Vec<Fret>,
}

impl Neck {
    /// Create an empty neck. Frets past index 11 are octave frets.
    pub fn new(fret_count: usize) -> Result<Self, NeckError> {
        if fret_count == 0 {
            return Err(NeckError::InvalidFretCount);
        }
        Ok(Self::build(fret_count))
    }

    fn build(fret_count: usize) -> Self {
        let frets = (0..fret_count)
            .map(|i| Fret::new(i >= OCTAVE_BOUNDARY, STRING_COUNT))
            .collect();
        Neck { frets }
    }

    pub fn fret_count(&self) -> usize {
        self.frets.len()
    }

    pub fn string_count(&self) -> usize {
        STRING_COUNT
    }

    pub fn frets(&self) -> &[Fret] {
        &self.frets
    }

    /// Apply a chord given as `(fret, string label, finger label)` triples.
    ///
    /// Frets are 1-based. Every triple is resolved before any fret is touched,
    /// so an invalid triple leaves the neck unchanged. When two triples hit the
    /// same cell the later one wins.
    pub fn add_chord<'a, I>(&mut self, chord: I) -> Result<(), NeckError>
    where
        I: IntoIterator<Item = (usize, &'a str, &'a str)>,
    {
        let fret_count = self.fret_count();
        let resolved = chord
            .into_iter()
            .map(|(fret, string, finger)| resolve_note(fret, string, finger, fret_count))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("applying chord with {} notes", resolved.len());
        for (fret, string, finger) in resolved {
            trace!("fret {} string {} -> {}", fret + 1, string, finger);
            self.frets[fret].set_note(string, finger)?;
        }
        Ok(())
    }

    /// Reset every cell to `Finger::None`.
    pub fn clear(&mut self) {
        self.frets.iter_mut().for_each(Fret::clear);
    }

    /// Occupied cells, ordered by fret then by rendering order of strings.
    pub fn placements(&self) -> Vec<Placement> {
        let mut out = Vec::new();
        for (i, fret) in self.frets.iter().enumerate() {
            for &(label, string) in STRING_NAMES.iter() {
                match fret.finger(string) {
                    Some(finger) if !finger.is_none() => out.push(Placement {
                        fret: i + 1,
                        string: label,
                        finger,
                    }),
                    _ => {}
                }
            }
        }
        out
    }

    /// One line per string, top line first: `"<label> |"` followed by every
    /// fret's cell for that string.
    pub fn render(&self) -> Vec<String> {
        STRING_NAMES
            .iter()
            .map(|&(label, string)| self.render_string(label, string))
            .collect()
    }

    fn render_string(&self, label: &str, string: usize) -> String {
        let mut line = format!("{} |", label);
        for fret in &self.frets {
            let finger = fret.strings()[string];
            // writing into a String cannot fail
            let _ = fret.write_cell(&mut line, finger);
        }
        line
    }
}

impl Default for Neck {
    fn default() -> Self {
        Self::build(DEFAULT_FRET_COUNT)
    }
}

impl fmt::Display for Neck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Serializable snapshot of a neck for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct NeckView {
    pub fret_count: usize,
    pub placements: Vec<Placement>,
    pub lines: Vec<String>,
}

impl From<&Neck> for NeckView {
    fn from(neck: &Neck) -> Self {
        NeckView {
            fret_count: neck.fret_count(),
            placements: neck.placements(),
            lines: neck.render(),
        }
    }
}
