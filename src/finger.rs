//! Fingers of the fretting hand.

use core::fmt;

/// Which finger presses a string. `None` marks an open (unpressed) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Finger {
    #[default]
    None = 0,
    Thumb = 1,
    Index = 2,
    Middle = 3,
    Ring = 4,
    Pinky = 5,
}

impl Finger {
    /// Numeric code used on the rendered board.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Finger::code`]; `None` for codes outside `0..=5`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Finger::None),
            1 => Some(Finger::Thumb),
            2 => Some(Finger::Index),
            3 => Some(Finger::Middle),
            4 => Some(Finger::Ring),
            5 => Some(Finger::Pinky),
            _ => None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Finger::None)
    }

    /// Single character drawn inside a fret cell.
    pub fn symbol(self) -> char {
        if self.is_none() {
            '-'
        } else {
            (b'0' + self.code()) as char
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Finger::None => "none",
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        };
        f.write_str(name)
    }
}
