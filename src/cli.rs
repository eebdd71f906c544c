//! Text front end for the neck: turning `--chord` arguments into validated
//! chords and the interactive prompt loop.

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::chord::Chord;
use crate::neck::Neck;

/// Parse and validate every chord argument. Nothing is returned unless all of
/// them are valid; otherwise every problem found is reported, one message per
/// entry.
pub fn parse_chords(inputs: &[String], fret_count: usize) -> Result<Vec<Chord>, Vec<String>> {
    let mut chords = Vec::with_capacity(inputs.len());
    let mut problems = Vec::new();
    for (i, input) in inputs.iter().enumerate() {
        match input.parse::<Chord>() {
            Ok(chord) => match chord.validate(fret_count) {
                Ok(()) => chords.push(chord),
                Err(issues) => problems.extend(
                    issues
                        .iter()
                        .map(|issue| format!("chord {}: {}", i + 1, issue)),
                ),
            },
            Err(e) => problems.push(format!("chord {}: {}", i + 1, e)),
        }
    }
    if problems.is_empty() {
        Ok(chords)
    } else {
        Err(problems)
    }
}

/// Interactive loop: show the board, read a chord line, apply it.
///
/// `clear` resets the board; an empty line or end of input stops the loop.
/// Invalid lines are reported and the prompt is shown again. Returns the
/// number of chords applied.
pub fn run_prompt<R: BufRead, W: Write>(
    neck: &mut Neck,
    mut input: R,
    output: &mut W,
) -> io::Result<usize> {
    let mut applied = 0;
    loop {
        writeln!(output, "{}", neck)?;
        write!(
            output,
            "Enter chord as fret,string,finger (e.g. 1,G,index), 'clear', or enter to quit: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if line.eq_ignore_ascii_case("clear") {
            debug!("clearing board");
            neck.clear();
            continue;
        }

        let chord = match line.parse::<Chord>() {
            Ok(chord) => chord,
            Err(e) => {
                writeln!(output, "Invalid input: {}", e)?;
                continue;
            }
        };
        if let Err(issues) = chord.validate(neck.fret_count()) {
            for issue in issues {
                writeln!(output, "Invalid {}", issue)?;
            }
            continue;
        }
        match neck.add_chord(chord.triples()) {
            Ok(()) => {
                applied += 1;
                info!("applied chord {} ({} notes)", applied, chord.len());
            }
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
    Ok(applied)
}
