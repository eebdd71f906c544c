use fretboard::{Finger, Neck, FINGER_NAMES, STRING_COUNT, STRING_NAMES};
use proptest::prelude::*;

fn note(fret_count: usize) -> impl Strategy<Value = (usize, &'static str, &'static str)> {
    (
        1..=fret_count,
        prop::sample::select(STRING_NAMES.iter().map(|(s, _)| *s).collect::<Vec<_>>()),
        prop::sample::select(FINGER_NAMES.iter().map(|(f, _)| *f).collect::<Vec<_>>()),
    )
}

fn neck_with_chord() -> impl Strategy<Value = (usize, Vec<(usize, &'static str, &'static str)>)> {
    (1usize..30).prop_flat_map(|n| (Just(n), prop::collection::vec(note(n), 0..12)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fresh_neck_dimensions(fret_count in 1usize..64) {
        let neck = Neck::new(fret_count).unwrap();
        prop_assert_eq!(neck.frets().len(), fret_count);
        for (i, fret) in neck.frets().iter().enumerate() {
            prop_assert_eq!(fret.strings().len(), STRING_COUNT);
            prop_assert!(fret.strings().iter().all(|f| f.is_none()));
            prop_assert_eq!(fret.is_octave(), i > 11);
        }
    }

    #[test]
    fn cells_have_fixed_width((fret_count, chord) in neck_with_chord()) {
        let mut neck = Neck::new(fret_count).unwrap();
        neck.add_chord(chord.iter().copied()).unwrap();
        let lines = neck.render();
        prop_assert_eq!(lines.len(), STRING_COUNT);
        for (line, (label, _)) in lines.iter().zip(STRING_NAMES.iter()) {
            let body = line.strip_prefix(&format!("{} |", label)).unwrap();
            let mut rest = body;
            for fret in neck.frets() {
                let width = if fret.is_octave() { 4 } else { 6 };
                let (cell, tail) = rest.split_at(width);
                let bytes = cell.as_bytes();
                prop_assert_eq!(bytes[width - 1], b'|');
                let symbol = bytes[width / 2 - 1];
                prop_assert!(symbol == b'-' || (b'1'..=b'5').contains(&symbol));
                prop_assert_eq!(cell.replace(symbol as char, "-").replace('|', ""), "-".repeat(width - 1));
                rest = tail;
            }
            prop_assert!(rest.is_empty());
        }
    }

    #[test]
    fn render_is_idempotent((fret_count, chord) in neck_with_chord()) {
        let mut neck = Neck::new(fret_count).unwrap();
        neck.add_chord(chord.iter().copied()).unwrap();
        let first = neck.render();
        let snapshot = neck.clone();
        prop_assert_eq!(&first, &neck.render());
        prop_assert_eq!(neck, snapshot);
    }

    #[test]
    fn last_note_wins((fret_count, chord) in neck_with_chord()) {
        let mut neck = Neck::new(fret_count).unwrap();
        neck.add_chord(chord.iter().copied()).unwrap();
        for (i, &(fret, string, _)) in chord.iter().enumerate() {
            let later = chord[i + 1..].iter().any(|&(f, s, _)| f == fret && s == string);
            if later {
                continue;
            }
            let (_, finger) = FINGER_NAMES.iter().find(|(name, _)| *name == chord[i].2).unwrap();
            let (_, slot) = STRING_NAMES.iter().find(|(name, _)| *name == string).unwrap();
            prop_assert_eq!(neck.frets()[fret - 1].finger(*slot), Some(*finger));
        }
    }

    #[test]
    fn out_of_range_fret_rejected(fret_count in 1usize..30, over in 1usize..10) {
        let mut neck = Neck::new(fret_count).unwrap();
        prop_assert!(neck.add_chord([(fret_count + over, "e", "index")]).is_err());
        prop_assert!(neck.add_chord([(0, "e", "index")]).is_err());
        prop_assert!(neck.frets().iter().all(|f| f.strings().iter().all(|s| *s == Finger::None)));
    }
}
