//! A single fret position across every string of the neck.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::common::NeckError;
use crate::finger::Finger;

/// Finger state of one fret. Octave frets (past the 12th) are drawn with a
/// narrower cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fret {
    is_octave: bool,
    strings: Vec<Finger>,
}

impl Fret {
    /// Create an empty fret with `string_count` open slots.
    pub fn new(is_octave: bool, string_count: usize) -> Self {
        Fret {
            is_octave,
            strings: vec![Finger::None; string_count],
        }
    }

    pub fn is_octave(&self) -> bool {
        self.is_octave
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Immutable view of the per-string finger slots.
    pub fn strings(&self) -> &[Finger] {
        &self.strings
    }

    /// Finger stored for `string`, or `None` if the index is out of bounds.
    pub fn finger(&self, string: usize) -> Option<Finger> {
        self.strings.get(string).copied()
    }

    /// Overwrite the finger stored for `string`.
    pub fn set_note(&mut self, string: usize, finger: Finger) -> Result<(), NeckError> {
        let string_count = self.strings.len();
        let slot = self
            .strings
            .get_mut(string)
            .ok_or(NeckError::StringOutOfRange {
                index: string,
                string_count,
            })?;
        *slot = finger;
        Ok(())
    }

    /// Rendered text cell for `string`: `--X--|`, or `-X-|` on octave frets.
    pub fn get_note(&self, string: usize) -> Result<String, NeckError> {
        let finger = self.finger(string).ok_or(NeckError::StringOutOfRange {
            index: string,
            string_count: self.strings.len(),
        })?;
        let mut cell = String::with_capacity(6);
        // writing into a String cannot fail
        let _ = self.write_cell(&mut cell, finger);
        Ok(cell)
    }

    pub(crate) fn write_cell<W: Write>(&self, out: &mut W, finger: Finger) -> core::fmt::Result {
        if self.is_octave {
            write!(out, "-{}-|", finger.symbol())
        } else {
            write!(out, "--{}--|", finger.symbol())
        }
    }

    /// Reset every slot to `Finger::None`.
    pub fn clear(&mut self) {
        self.strings.fill(Finger::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_widths() {
        let mut wide = Fret::new(false, 6);
        let narrow = Fret::new(true, 6);
        wide.set_note(3, Finger::Ring).unwrap();

        assert_eq!(wide.get_note(0).unwrap(), "-----|");
        assert_eq!(wide.get_note(3).unwrap(), "--4--|");
        assert_eq!(narrow.get_note(5).unwrap(), "---|");
    }

    #[test]
    fn set_note_out_of_bounds() {
        let mut fret = Fret::new(false, 6);
        assert_eq!(
            fret.set_note(6, Finger::Index).unwrap_err(),
            NeckError::StringOutOfRange {
                index: 6,
                string_count: 6
            }
        );
        assert!(fret.get_note(6).is_err());
        assert!(fret.strings().iter().all(|f| f.is_none()));
    }

    #[test]
    fn none_clears_slot() {
        let mut fret = Fret::new(true, 6);
        fret.set_note(1, Finger::Pinky).unwrap();
        assert_eq!(fret.get_note(1).unwrap(), "-5-|");
        fret.set_note(1, Finger::None).unwrap();
        assert_eq!(fret.get_note(1).unwrap(), "---|");
    }
}
