//! seqdist - pairwise evolutionary distances and sequence utilities
//!
//! ## Usage
//!
//! ```bash
//! seqdist kimura-distance ACGTTGCAAGCT ACGATGCTAGCA
//! seqdist distances ACGTTGCAAGCT ACGATGCTAGCA -m jukes-cantor -m tamura
//! seqdist reverse-complement TATCTG
//! seqdist random-sequence 100 -a aa -s 42
//! ```
//!
//! Results are written to stdout. Errors are written to stderr as
//! `Error: <message>` with exit code 1.

use clap::{Args, Parser, Subcommand};
use seqdist::{
    composition::nt_frequency,
    data::{
        convert::{Conversion, aa_one_to_three, aa_three_to_one, convert},
        err::{DistanceError, OrFail},
    },
    distance::{
        dna::{DistanceModel, PairStatistics, jukes_cantor_distance, kimura_distance, tajima_nei_distance, tamura_distance},
        hamming_distance, p_distance,
    },
};
use std::{
    fmt::Display,
    io::{self, Write},
};

#[cfg(feature = "rand")]
use seqdist::generate::{Alphabet, mutate_sequence, random_sequence, shuffle_sequence};

/// Pairwise evolutionary distances between aligned nucleotide sequences, plus
/// a few sequence utilities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Two aligned sequences of equal length
#[derive(Args, Debug)]
struct PairArgs {
    /// First aligned sequence
    seq1: String,
    /// Second aligned sequence
    seq2: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Number of positions where the sequences differ, skipping gaps
    HammingDistance {
        #[command(flatten)]
        pair:        PairArgs,
        /// Compare symbols regardless of case
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Proportion of differing positions (case-insensitive)
    PDistance(PairArgs),
    /// Jukes-Cantor corrected distance
    JukesCantorDistance(PairArgs),
    /// Tajima-Nei corrected distance
    TajimaNeiDistance(PairArgs),
    /// Kimura 2-parameter corrected distance
    KimuraDistance(PairArgs),
    /// Tamura corrected distance
    TamuraDistance(PairArgs),
    /// Several distances at once, one `model<TAB>distance` line each
    Distances {
        #[command(flatten)]
        pair:   PairArgs,
        /// Model to compute: p-distance, jukes-cantor, tajima-nei, kimura,
        /// or tamura. May be repeated; defaults to every model
        #[arg(short = 'm', long = "model")]
        models: Vec<DistanceModel>,
    },
    /// Relative frequency of A, C, G and T, one `base<TAB>frequency` line each
    NtFrequency {
        /// Nucleotide sequence
        sequence: String,
    },
    /// Reverse, complement, or reverse complement a nucleotide sequence
    ReverseComplement {
        /// Nucleotide sequence
        sequence:   String,
        /// Conversion to perform: reverse (r), complement (c), or
        /// reverse_complement (rc)
        #[arg(short = 'c', long = "conversion", default_value = "reverse_complement")]
        conversion: Conversion,
    },
    /// Convert one-letter amino acid codes to three-letter codes
    AaOneToThree {
        /// Amino acid sequence in one-letter code
        sequence: String,
    },
    /// Convert three-letter amino acid codes to one-letter codes
    AaThreeToOne {
        /// Amino acid sequence in three-letter code
        sequence: String,
    },
    /// Generate a random sequence
    #[cfg(feature = "rand")]
    RandomSequence {
        /// Length of the sequence
        length:   usize,
        /// Alphabet to draw from: nt or aa
        #[arg(short, long, default_value = "nt")]
        alphabet: Alphabet,
        /// Seed for reproducible output; taken from the clock if not given
        #[arg(short, long)]
        seed:     Option<u64>,
    },
    /// Shuffle a sequence, keeping its composition
    #[cfg(feature = "rand")]
    ShuffleSequence {
        /// Sequence to shuffle
        sequence: String,
        /// Seed for reproducible output; taken from the clock if not given
        #[arg(short, long)]
        seed:     Option<u64>,
    },
    /// Introduce random point substitutions into a sequence
    #[cfg(feature = "rand")]
    MutateSequence {
        /// Sequence to mutate
        sequence:  String,
        /// Number of substitutions
        #[arg(short, long, default_value_t = 1)]
        mutations: usize,
        /// Alphabet to draw substitutions from: nt or aa
        #[arg(short, long, default_value = "nt")]
        alphabet:  Alphabet,
        /// Seed for reproducible output; taken from the clock if not given
        #[arg(short, long)]
        seed:      Option<u64>,
    },
}

/// Displays a float with the shortest representation that round-trips, always
/// with a fractional part.
struct Float(f64);

impl Display for Float {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.to_string();
        if self.0.is_finite() && !s.contains('.') {
            write!(f, "{s}.0")
        } else {
            f.write_str(&s)
        }
    }
}

fn write_count(out: &mut impl Write, n: usize) -> io::Result<()> {
    let mut buffer = itoa::Buffer::new();
    out.write_all(buffer.format(n).as_bytes())?;
    out.write_all(b"\n")
}

fn write_sequence(out: &mut impl Write, sequence: &[u8]) -> io::Result<()> {
    out.write_all(sequence)?;
    out.write_all(b"\n")
}

#[cfg(feature = "rand")]
#[allow(clippy::cast_possible_truncation)]
fn seed_or_clock(seed: Option<u64>) -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    })
}

fn write_distances(out: &mut impl Write, pair: &PairArgs, models: Vec<DistanceModel>) -> io::Result<()> {
    let stats = PairStatistics::from_sequences(pair.seq1.as_bytes(), pair.seq2.as_bytes()).unwrap_or_fail();
    let models = if models.is_empty() {
        DistanceModel::ALL.to_vec()
    } else {
        models
    };

    let mut first_error = None;
    for model in models {
        match stats.distance(model) {
            Ok(d) => writeln!(out, "{model}\t{}", Float(d))?,
            Err(e) => {
                writeln!(out, "{model}\tNA")?;
                first_error.get_or_insert(e);
            }
        }
    }

    out.flush()?;
    if let Some(e) = first_error {
        Err::<(), _>(e).unwrap_or_fail();
    }
    Ok(())
}

fn run(command: Command, out: &mut impl Write) -> io::Result<()> {
    let distance = |pair: &PairArgs, f: fn(&[u8], &[u8]) -> Result<f64, DistanceError>| {
        f(pair.seq1.as_bytes(), pair.seq2.as_bytes()).unwrap_or_fail()
    };

    match command {
        Command::HammingDistance { pair, ignore_case } => {
            let d = hamming_distance(pair.seq1.as_bytes(), pair.seq2.as_bytes(), ignore_case).unwrap_or_fail();
            write_count(out, d)
        }
        Command::PDistance(pair) => writeln!(out, "{}", Float(distance(&pair, p_distance))),
        Command::JukesCantorDistance(pair) => writeln!(out, "{}", Float(distance(&pair, jukes_cantor_distance))),
        Command::TajimaNeiDistance(pair) => writeln!(out, "{}", Float(distance(&pair, tajima_nei_distance))),
        Command::KimuraDistance(pair) => writeln!(out, "{}", Float(distance(&pair, kimura_distance))),
        Command::TamuraDistance(pair) => writeln!(out, "{}", Float(distance(&pair, tamura_distance))),
        Command::Distances { pair, models } => write_distances(out, &pair, models),
        Command::NtFrequency { sequence } => {
            let frequencies = nt_frequency(sequence.as_bytes()).unwrap_or_fail();
            for (base, frequency) in frequencies.iter() {
                writeln!(out, "{base}\t{}", Float(frequency))?;
            }
            Ok(())
        }
        Command::ReverseComplement { sequence, conversion } => {
            write_sequence(out, &convert(sequence.as_bytes(), conversion).unwrap_or_fail())
        }
        Command::AaOneToThree { sequence } => write_sequence(out, &aa_one_to_three(sequence.as_bytes()).unwrap_or_fail()),
        Command::AaThreeToOne { sequence } => write_sequence(out, &aa_three_to_one(sequence.as_bytes()).unwrap_or_fail()),
        #[cfg(feature = "rand")]
        Command::RandomSequence { length, alphabet, seed } => {
            write_sequence(out, &random_sequence(length, alphabet, seed_or_clock(seed)))
        }
        #[cfg(feature = "rand")]
        Command::ShuffleSequence { sequence, seed } => {
            write_sequence(out, &shuffle_sequence(sequence.as_bytes(), seed_or_clock(seed)))
        }
        #[cfg(feature = "rand")]
        Command::MutateSequence {
            sequence,
            mutations,
            alphabet,
            seed,
        } => write_sequence(
            out,
            &mutate_sequence(sequence.as_bytes(), mutations, alphabet, seed_or_clock(seed)),
        ),
    }
}

fn main() {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(cli.command, &mut out).unwrap_or_fail();
    out.flush().unwrap_or_fail();
}
