use std::process::{Command, Output};

fn seqdist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqdist"))
        .args(args)
        .output()
        .expect("the seqdist binary should run")
}

fn stdout(args: &[&str]) -> String {
    let output = seqdist(args);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn hamming() {
    assert_eq!(stdout(&["hamming-distance", "CAGATA", "GTCTAT"]), "6\n");
    assert_eq!(stdout(&["hamming-distance", "CAGATA", "cagata"]), "6\n");
    assert_eq!(stdout(&["hamming-distance", "CAGATA", "cagata", "--ignore-case"]), "0\n");
    assert_eq!(stdout(&["hamming-distance", "-i", "CA-ATA", "cagata"]), "0\n");
}

#[test]
fn distances() {
    assert_eq!(stdout(&["p-distance", "CAGATA", "GTCTAT"]), "1.0\n");
    assert_eq!(stdout(&["p-distance", "ACGTTGCAAGCT", "ACGATGCTAGCA"]), "0.25\n");
    let jc: f64 = stdout(&["jukes-cantor-distance", "ACGTTGCAAGCT", "ACGATGCTAGCA"]).trim_end().parse().unwrap();
    assert!((jc - 0.30409883108112323).abs() < 1e-12);

    let all = stdout(&["distances", "ACGTTGCAAGCT", "ACGATGCTAGCA"]);
    let names: Vec<_> = all.lines().map(|line| line.split('\t').next().unwrap()).collect();
    assert_eq!(names, ["p-distance", "jukes-cantor", "tajima-nei", "kimura", "tamura"]);

    let selected = stdout(&["distances", "ACGTTGCAAGCT", "ACGATGCTAGCA", "-m", "p-distance", "--model", "Kimura"]);
    let lines: Vec<_> = selected.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "p-distance\t0.25");
    let kimura: f64 = lines[1].strip_prefix("kimura\t").unwrap().parse().unwrap();
    assert!((kimura - 0.31712783136587674).abs() < 1e-12);
}

#[test]
fn undefined_distance() {
    let output = seqdist(&["jukes-cantor-distance", "CAGATA", "GTCTAT"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: cannot compute logarithm of a non-positive number\n"
    );

    let output = seqdist(&["distances", "ACGTTGCAAGCT", "ACGTTGCAAGCT", "-m", "tajima-nei", "-m", "p-distance"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "tajima-nei\tNA\np-distance\t0.0\n");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "Error: cannot divide by zero\n");
}

#[test]
fn length_mismatch() {
    let output = seqdist(&["kimura-distance", "ACGT", "ACG"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: cannot compare sequences with different lengths (4 and 3)\n"
    );
}

#[test]
fn frequencies() {
    assert_eq!(stdout(&["nt-frequency", "ACGTaa-N"]), "A\t0.375\nC\t0.125\nG\t0.125\nT\t0.125\n");
    assert_eq!(stdout(&["nt-frequency", "AAAA"]), "A\t1.0\nC\t0.0\nG\t0.0\nT\t0.0\n");
}

#[test]
fn conversions() {
    assert_eq!(stdout(&["reverse-complement", "TATCTG"]), "CAGATA\n");
    assert_eq!(stdout(&["reverse-complement", "TATCTG", "-c", "rc"]), "CAGATA\n");
    assert_eq!(stdout(&["reverse-complement", "ATAGAC", "-c", "r"]), "CAGATA\n");
    assert_eq!(stdout(&["reverse-complement", "GTCTAT", "--conversion", "complement"]), "CAGATA\n");
    assert_eq!(stdout(&["aa-one-to-three", "canne"]), "CysAlaAsnAsnGlu\n");
    assert_eq!(stdout(&["aa-three-to-one", "cysalaasnasnglu"]), "CANNE\n");

    assert!(!seqdist(&["reverse-complement", "CAGATA", "-c", "invalid"]).status.success());
    assert_eq!(seqdist(&["aa-three-to-one", "CysAl"]).status.code(), Some(1));
}

#[test]
#[cfg(feature = "rand")]
fn generation() {
    let first = stdout(&["random-sequence", "50", "-s", "42"]);
    assert_eq!(first.trim_end().len(), 50);
    assert!(first.trim_end().bytes().all(|b| b"ACGT".contains(&b)));
    assert_eq!(first, stdout(&["random-sequence", "50", "--seed", "42"]));

    let protein = stdout(&["random-sequence", "30", "-a", "aa", "-s", "1"]);
    assert_eq!(protein.trim_end().len(), 30);

    let sequence = first.trim_end();
    let mut shuffled: Vec<u8> = stdout(&["shuffle-sequence", sequence, "-s", "3"]).trim_end().bytes().collect();
    let mut original: Vec<u8> = sequence.bytes().collect();
    shuffled.sort_unstable();
    original.sort_unstable();
    assert_eq!(shuffled, original);

    let mutated = stdout(&["mutate-sequence", sequence, "-s", "3"]);
    let differences = sequence.bytes().zip(mutated.trim_end().bytes()).filter(|(a, b)| a != b).count();
    assert_eq!(differences, 1);

    assert!(!seqdist(&["random-sequence", "10", "-a", "rna"]).status.success());
}
