use super::*;
use crate::pitch::{frequency, step_offset};
use quickcheck_macros::quickcheck;

fn single_event(source: &str) -> Event {
    let events = decode_all(source).unwrap();
    assert_eq!(events.len(), 1, "expected one event from {:?}", source);
    events[0]
}

#[test]
fn test_decode_tempo_and_volume() {
    let event = single_event("T132V15b4");
    assert_eq!(event.duration, 240.0 / (4.0 * 132.0));
    assert_eq!(event.volume, 15);
    assert_eq!(event.frequency, frequency(4, 11));
}

#[test]
fn test_decode_rest() {
    let event = single_event("p4");
    assert_eq!(event.frequency, 0.0);
    assert_eq!(event.duration, 240.0 / (4.0 * 120.0));
    assert_eq!(event.volume, 0);
    assert!(event.is_rest());
}

#[test]
fn test_r_is_a_rest_too() {
    assert_eq!(single_event("r8"), single_event("p8"));
}

#[test]
fn test_rest_default_length() {
    let event = single_event("r");
    assert_eq!(event.duration, 240.0 / (5.0 * 120.0));
}

#[test]
fn test_dotted_quarter() {
    let event = single_event("c4.");
    assert_eq!(event.duration, 240.0 / (6.0 * 120.0));
}

#[test]
fn test_double_dot_same_as_single() {
    assert_eq!(single_event("c4.."), single_event("c4."));
}

#[test]
fn test_dotted_rest() {
    let event = single_event("r16.");
    assert_eq!(event.duration, 240.0 / (24.0 * 120.0));
}

#[test]
fn test_separators_only() {
    assert!(decode_all(" , ; ").unwrap().is_empty());
    assert!(decode_all("").unwrap().is_empty());
    assert!(decode_all("\n\t").unwrap().is_empty());
}

#[test]
fn test_unknown_letter() {
    let err = decode_all("z").unwrap_err();
    match err {
        MmlError::DecodeError { token, number, dots, offset } => {
            assert_eq!(token, "z");
            assert_eq!(number, 0);
            assert_eq!(dots, 0);
            assert_eq!(offset, 0);
        }
        _ => panic!("Expected DecodeError"),
    }
}

#[test]
fn test_unknown_token_carries_number_and_dots() {
    let err = decode_all("c4 x8.").unwrap_err();
    assert_eq!(
        err,
        MmlError::DecodeError {
            token: "x".to_string(),
            number: 12,
            dots: 1,
            offset: 3,
        }
    );
}

#[test]
fn test_note_number_zero_divides_by_zero() {
    let err = decode_all("n0").unwrap_err();
    assert!(matches!(err, MmlError::DivisionByZero { ref token, offset: 0 } if token == "n"));

    let err = decode_all("n").unwrap_err();
    assert!(matches!(err, MmlError::DivisionByZero { .. }));
}

#[test]
fn test_zero_tempo_divides_by_zero() {
    let err = decode_all("T0c").unwrap_err();
    assert!(matches!(err, MmlError::DivisionByZero { offset: 2, .. }));
}

#[test]
fn test_zero_default_length_divides_by_zero() {
    let err = decode_all("l0r").unwrap_err();
    assert!(matches!(err, MmlError::DivisionByZero { .. }));
}

#[test]
fn test_note_number() {
    let event = single_event("n69");
    // 69 = octave 5, step 9
    assert_eq!(event.frequency, frequency(5, 9));
    assert_eq!(event.duration, 240.0 / (69.0 * 120.0));
    assert_eq!(event.volume, 15);
}

#[test]
fn test_note_number_ignores_default_length_and_octave() {
    assert_eq!(single_event("l8o2n24"), single_event("n24"));
}

#[test]
fn test_sharp_lookup_precedence() {
    let event = single_event("c+4");
    assert_eq!(event.frequency, frequency(4, 1));
    assert_eq!(event.duration, 240.0 / (4.0 * 120.0));
}

#[test]
fn test_flat_and_unicode_accidentals() {
    assert_eq!(single_event("d-").frequency, single_event("c+").frequency);
    assert_eq!(single_event("b♭").frequency, frequency(4, 10));
    assert_eq!(single_event("f#").frequency, frequency(4, 6));
}

#[test]
fn test_unknown_two_character_step() {
    let err = decode_all("e+4").unwrap_err();
    assert!(matches!(err, MmlError::DecodeError { ref token, number: 4, .. } if token == "e+"));
}

#[test]
fn test_octave_shifts() {
    let events = decode_all("a>a<<a").unwrap();
    let frequencies: Vec<f64> = events.iter().map(|e| e.frequency).collect();
    assert_eq!(frequencies, vec![440.0, frequency(5, 9), frequency(3, 9)]);
}

#[test]
fn test_octave_shifts_are_unbounded() {
    let event = single_event("o0<<<<c");
    assert_eq!(event.frequency, frequency(-4, 0));
}

#[test]
fn test_octave_directive() {
    assert_eq!(single_event("o2a").frequency, frequency(2, 9));
}

#[test]
fn test_default_length_directive() {
    let events = decode_all("l8cdr").unwrap();
    for event in &events {
        assert_eq!(event.duration, 240.0 / (8.0 * 120.0));
    }
    assert_eq!(events.len(), 3);
}

#[test]
fn test_directives_ignore_dots() {
    let event = single_event("l16.c");
    assert_eq!(event.duration, 240.0 / (16.0 * 120.0));

    let event = single_event("T100.c4");
    assert_eq!(event.duration, 240.0 / (4.0 * 100.0));
}

#[test]
fn test_volume_directive() {
    let events = decode_all("V3cV0dr").unwrap();
    assert_eq!(events[0].volume, 3);
    assert_eq!(events[1].volume, 0);
    assert_eq!(events[2].volume, 0);
}

#[test]
fn test_tie_does_not_merge() {
    let events = decode_all("d2.&d8").unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].duration, 240.0 / (3.0 * 120.0));
    assert_eq!(events[1].duration, 240.0 / (8.0 * 120.0));
}

#[test]
fn test_lazy_events_before_error() {
    let mut decoder = decode("c d z e");
    assert!(decoder.next().unwrap().is_ok());
    assert!(decoder.next().unwrap().is_ok());
    assert!(decoder.next().unwrap().is_err());
    assert!(decoder.next().is_none());
    assert!(decoder.next().is_none());
}

#[test]
fn test_exhausted_decoder_stays_exhausted() {
    let mut decoder = decode("c");
    assert!(decoder.next().is_some());
    assert!(decoder.next().is_none());
    assert!(decoder.next().is_none());
}

#[test]
fn test_partial_consumption() {
    let first: Vec<_> = decode("cdefgab").take(2).collect::<Result<_, _>>().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].frequency, frequency(4, step_offset("d").unwrap()));
}

#[test]
fn test_contexts_are_independent() {
    let mut shifted = decode("T60o6V2c r");
    let mut fresh = decode("c");
    let a = shifted.next().unwrap().unwrap();
    let b = fresh.next().unwrap().unwrap();
    assert_ne!(a, b);
    assert_eq!(b, single_event("c"));
}

#[test]
fn test_decoder_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Decoder<'static>>();
}

#[quickcheck]
fn prop_decoding_twice_is_identical(source: String) -> bool {
    let first: Vec<_> = decode(&source).collect();
    let second: Vec<_> = decode(&source).collect();
    first == second
}
