use super::*;
use crate::assert_fp_eq;

/// Counts of each ordered column `(x, y)` in a pair of 5000 base alignments
/// with 3633 mismatches, 1202 of them transitions.
const LONG_PAIR_COUNTS: [(&[u8; 2], usize); 16] = [
    (b"AA", 306),
    (b"AC", 122),
    (b"AG", 363),
    (b"AT", 13),
    (b"CA", 501),
    (b"CC", 366),
    (b"CG", 93),
    (b"CT", 306),
    (b"GA", 224),
    (b"GC", 553),
    (b"GG", 335),
    (b"GT", 128),
    (b"TA", 558),
    (b"TC", 309),
    (b"TG", 463),
    (b"TT", 360),
];

/// Builds the long alignment by interleaving the columns round robin, so that
/// neither sequence is a run of blocks.
pub(crate) fn long_pair() -> (Vec<u8>, Vec<u8>) {
    let mut remaining = LONG_PAIR_COUNTS.map(|(_, n)| n);
    let (mut s1, mut s2) = (Vec::with_capacity(5000), Vec::with_capacity(5000));

    while remaining.iter().any(|&n| n > 0) {
        for (i, (column, _)) in LONG_PAIR_COUNTS.iter().enumerate() {
            if remaining[i] > 0 {
                remaining[i] -= 1;
                s1.push(column[0]);
                s2.push(column[1]);
            }
        }
    }

    (s1, s2)
}

static SHORT_1: &[u8] = b"ACGTTGCAAGCT";
static SHORT_2: &[u8] = b"ACGATGCTAGCA";

#[test]
fn long_pair_statistics() {
    let (s1, s2) = long_pair();
    assert_eq!(s1.len(), 5000);
    assert_eq!(hamming_distance(&s1, &s2, false), Ok(3633));
    assert_eq!(p_distance(&s1, &s2), Ok(0.7266));

    let tally = SubstitutionTally::from_sequences(&s1, &s2).unwrap();
    assert_eq!(tally.transitions(), 1202);
    assert_eq!(tally.transversions(), 2431);
    assert_eq!(tally.length(), 5000);
}

#[test]
fn long_pair_distances() {
    let (s1, s2) = long_pair();

    assert_fp_eq!(jukes_cantor_distance(&s1, &s2).unwrap(), 2.600502888125025, 1e-12);
    assert_fp_eq!(@absolute, tajima_nei_distance(&s1, &s2).unwrap(), 2.612489480361321, 1e-7);
    assert_fp_eq!(kimura_distance(&s1, &s2).unwrap(), 2.6031087353225875, 1e-12);
    assert_fp_eq!(tamura_distance(&s1, &s2).unwrap(), 2.603755899559136, 1e-12);
}

#[test]
fn short_pair_distances() {
    assert_eq!(p_distance(SHORT_1, SHORT_2), Ok(0.25));
    assert_fp_eq!(jukes_cantor_distance(SHORT_1, SHORT_2).unwrap(), 0.30409883108112323);
    assert_fp_eq!(tajima_nei_distance(SHORT_1, SHORT_2).unwrap(), 0.37240530544712647);
    assert_fp_eq!(kimura_distance(SHORT_1, SHORT_2).unwrap(), 0.31712783136587674);
    assert_fp_eq!(tamura_distance(SHORT_1, SHORT_2).unwrap(), 0.31712783136587674);
}

#[test]
fn corrections_exceed_p_distance() {
    let (s1, s2) = long_pair();
    for (a, b) in [(SHORT_1, SHORT_2), (s1.as_slice(), s2.as_slice())] {
        let p = p_distance(a, b).unwrap();
        for model in DistanceModel::ALL {
            assert!(model.compute(a, b).unwrap() >= p, "{model}");
        }
    }
}

#[test]
fn statistics_match_free_functions() {
    let (s1, s2) = long_pair();
    let stats = s1.distance_statistics(&s2).unwrap();

    assert_eq!(stats.p_distance(), 0.7266);
    assert_eq!(stats.jukes_cantor(), jukes_cantor_distance(&s1, &s2));
    assert_eq!(stats.tajima_nei(), tajima_nei_distance(&s1, &s2));
    assert_eq!(stats.kimura(), kimura_distance(&s1, &s2));
    assert_eq!(stats.tamura(), tamura_distance(&s1, &s2));
    assert_fp_eq!(stats.combined_frequencies().sum(), 1.0);

    for model in DistanceModel::ALL {
        assert_eq!(stats.distance(model), model.compute(&s1, &s2));
    }
}

#[test]
fn length_mismatch() {
    let expected = Err(DistanceError::LengthMismatch { left: 4, right: 3 });
    assert_eq!(hamming_distance(b"ACGT", b"ACG", true).map(|_| 0.0), expected);
    for model in DistanceModel::ALL {
        assert_eq!(model.compute(b"ACGT", b"ACG"), expected, "{model}");
    }
    assert_eq!(PairStatistics::from_sequences(b"ACGT", b"ACG"), Err(DistanceError::LengthMismatch { left: 4, right: 3 }));
}

#[test]
fn saturated_sequences() {
    let nonpositive_ln = Err(DistanceError::Domain(DomainError::NonPositiveLogarithm));

    assert_eq!(jukes_cantor_distance(b"ACGT", b"CATG"), nonpositive_ln);
    assert_eq!(kimura_distance(b"AAAA", b"GGGG"), nonpositive_ln);
    assert_eq!(
        kimura_distance(b"AAAA", b"CCCC"),
        Err(DistanceError::Domain(DomainError::NegativeSquareRoot))
    );
    assert_eq!(tamura_distance(b"ACGT", b"GTAC"), nonpositive_ln);
    assert_eq!(tajima_nei_distance(b"ACGT", b"CATG"), nonpositive_ln);
    assert_eq!(tajima_nei_distance(b"AACCGGTT", b"CCAATTGG"), nonpositive_ln);
    assert_eq!(tajima_nei_distance(b"ACGTACGT", b"TGCATGCA"), nonpositive_ln);
}

#[test]
fn degenerate_inputs() {
    let division_by_zero = Err(DistanceError::Domain(DomainError::DivisionByZero));

    // Identical sequences have no substitutions to weight.
    assert_eq!(tajima_nei_distance(SHORT_1, SHORT_1), division_by_zero);
    // No G or C in either sequence.
    assert_eq!(tamura_distance(b"AATT", b"ATTT"), division_by_zero);
    // Every position is a gap, so nothing is retained.
    assert_eq!(kimura_distance(b"A-", b"-C"), division_by_zero);
    assert_eq!(p_distance(b"", b""), division_by_zero);

    for model in DistanceModel::ALL {
        assert!(model.compute(b"", b"").unwrap_err().is_domain_error(), "{model}");
    }
}

#[test]
fn identical_sequences() {
    assert_eq!(jukes_cantor_distance(SHORT_1, SHORT_1), Ok(0.0));
    assert_eq!(kimura_distance(SHORT_1, SHORT_1), Ok(0.0));
    assert_eq!(tamura_distance(SHORT_1, SHORT_1), Ok(0.0));
}

#[test]
fn extension_trait() {
    let s1 = String::from_utf8(SHORT_1.to_vec()).unwrap();
    let s2 = SHORT_2.to_vec();

    assert_eq!(s1.distance_hamming(&s2, false), Ok(3));
    assert_eq!(s1.distance_p(&s2), p_distance(SHORT_1, SHORT_2));
    assert_eq!(s1.distance_jukes_cantor(&s2), jukes_cantor_distance(SHORT_1, SHORT_2));
    assert_eq!(s1.distance_tajima_nei(&s2), tajima_nei_distance(SHORT_1, SHORT_2));
    assert_eq!(s1.distance_kimura(&s2), kimura_distance(SHORT_1, SHORT_2));
    assert_eq!(s1.as_str().distance_tamura(SHORT_2), tamura_distance(SHORT_1, SHORT_2));
}

#[test]
fn model_names() {
    for model in DistanceModel::ALL {
        assert_eq!(model.name().parse::<DistanceModel>(), Ok(model));
    }
    assert_eq!("Jukes-Cantor".parse::<DistanceModel>(), Ok(DistanceModel::JukesCantor));
    assert_eq!(
        "k80".parse::<DistanceModel>(),
        Err(ConversionError::InvalidOption("k80".to_string()))
    );
}
