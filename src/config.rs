use crate::finger::Finger;

pub const DEFAULT_FRET_COUNT: usize = 21;
pub const STRING_COUNT: usize = 6;
/// First fret index (0-based) drawn with the narrow octave cell.
pub const OCTAVE_BOUNDARY: usize = 12;

/// String labels in rendering order, top row first.
pub const STRING_NAMES: [(&str, usize); STRING_COUNT] = [
    ("e", 0),
    ("B", 1),
    ("G", 2),
    ("D", 3),
    ("A", 4),
    ("E", 5),
];

pub const FINGER_NAMES: [(&str, Finger); 5] = [
    ("thumb", Finger::Thumb),
    ("index", Finger::Index),
    ("middle", Finger::Middle),
    ("ring", Finger::Ring),
    ("pinky", Finger::Pinky),
];

/// Resolve a string label to its slot index. Labels are case-sensitive since
/// `e` and `E` name different strings.
pub fn string_index(label: &str) -> Option<usize> {
    STRING_NAMES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|&(_, index)| index)
}

/// Resolve a finger label to its `Finger`.
pub fn finger_from_label(label: &str) -> Option<Finger> {
    FINGER_NAMES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|&(_, finger)| finger)
}
