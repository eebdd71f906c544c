use std::process::Command;

#[test]
fn show_json_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_fretboard"))
        .args(["show", "--chord", "1,G,index,2,D,ring,2,A,middle", "--format", "json"])
        .output()
        .expect("failed to run fretboard binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["fret_count"], 21);
    assert_eq!(v["placements"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["lines"].as_array().map(Vec::len), Some(6));
}

#[test]
fn show_text_blank_board() {
    let output = Command::new(env!("CARGO_BIN_EXE_fretboard"))
        .args(["show", "--frets", "13"])
        .output()
        .expect("failed to run fretboard binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], format!("e |{}---|", "-----|".repeat(12)));
}

#[test]
fn show_rejects_invalid_chord() {
    let output = Command::new(env!("CARGO_BIN_EXE_fretboard"))
        .args(["show", "--chord", "0,Z,index"])
        .output()
        .expect("failed to run fretboard binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("Fret 0 is out of range"));
}
