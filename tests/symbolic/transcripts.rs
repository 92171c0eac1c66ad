use ndarray::array;
use optn::symbolic::{
    Pattern, TranscriptEncoder, ordinal_patterns, transcripts, transcripts_from_patterns,
};
use optn::traits::Symbolizer;

#[test]
fn transcripts_of_order_three() {
    // Patterns: (0,2,1) (1,0,2) (2,0,1) (1,0,2) (0,2,1)
    let series = array![0.5, 2.0, 1.0, 3.0, 0.0, 4.0, 2.5];
    let t = transcripts(&series, 3, 1).unwrap();
    let expected = vec![
        Pattern::from([1, 2, 0]),
        Pattern::from([0, 2, 1]),
        Pattern::from([0, 2, 1]),
        Pattern::from([2, 0, 1]),
    ];
    assert_eq!(t, expected);
}

#[test]
fn transcript_length_is_one_less() {
    let series = crate::test_helpers::generate_uniform_noise(300, 3);
    let p = ordinal_patterns(&series, 4, 2).unwrap();
    let t = transcripts(&series, 4, 2).unwrap();
    assert_eq!(t.len(), p.len() - 1);
    assert_eq!(t, transcripts_from_patterns(&p));

    let one = vec![Pattern::from([1, 0])];
    assert!(transcripts_from_patterns(&one).is_empty());
    assert!(transcripts_from_patterns(&[]).is_empty());
}

#[test]
fn identity_sequence_maps_to_identity() {
    let id = Pattern::identity(5);
    assert_eq!(id.reindex(&id.inverse()), id);
    let t = transcripts_from_patterns(&[id.clone(), id.clone(), id.clone()]);
    assert_eq!(t, vec![id.clone(), id]);
}

#[test]
fn transcript_applied_to_pattern_yields_successor() {
    // s' = T reindexed by s
    let series = crate::test_helpers::generate_gaussian_noise(200, 0.0, 1.0, 11);
    let p = ordinal_patterns(&series, 4, 1).unwrap();
    let t = transcripts_from_patterns(&p);
    for (i, ti) in t.iter().enumerate() {
        assert_eq!(ti.reindex(&p[i]), p[i + 1]);
    }
}

#[test]
fn encoder_validates_and_matches_free_function() {
    assert!(TranscriptEncoder::new(3, 0).is_err());
    let series = array![1.0, 3.0, 2.0, 4.0, 2.0, 3.0];
    let enc = TranscriptEncoder::new(2, 1).unwrap();
    assert_eq!(enc.symbolize(&series).unwrap(), transcripts(&series, 2, 1).unwrap());
}
