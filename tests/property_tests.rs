//! Property tests for the event codec and the state fold.
//!
//! Verifies invariants across a wide range of inputs using `proptest`.

use proptest::prelude::*;
use xb360ctrl::{apply, codec, reset, ControllerEvent, ControllerState};

fn any_event() -> impl Strategy<Value = ControllerEvent> {
    (any::<u32>(), any::<i16>(), any::<u8>(), any::<u8>())
        .prop_map(|(t, v, ty, n)| ControllerEvent::new(t, v, ty, n))
}

fn any_state() -> impl Strategy<Value = ControllerState> {
    proptest::collection::vec(any_event(), 0..32).prop_map(|events| {
        let mut state = ControllerState::default();
        for ev in &events {
            apply(&mut state, ev);
        }
        state
    })
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// decode(encode(e)) == e for every event.
    #[test]
    fn prop_codec_round_trip(ev in any_event()) {
        prop_assert_eq!(codec::decode(&codec::encode(&ev)).unwrap(), ev);
    }

    /// decode fails for any slice shorter than 8 bytes.
    #[test]
    fn prop_decode_too_short(data in proptest::collection::vec(any::<u8>(), 0..8)) {
        prop_assert!(
            codec::decode(&data).is_err(),
            "decode of {}-byte slice must fail",
            data.len()
        );
    }

    /// decode succeeds for any slice >= 8 bytes and only looks at the first 8.
    #[test]
    fn prop_decode_sufficient_length(data in proptest::collection::vec(any::<u8>(), 8..64)) {
        let head = codec::decode(&data[..8]).unwrap();
        prop_assert_eq!(codec::decode(&data).unwrap(), head);
    }

    /// Unknown button indices never change the state.
    #[test]
    fn prop_unknown_button_is_no_op(state in any_state(), n in 11u8..=255, v in any::<i16>()) {
        let mut after = state;
        apply(&mut after, &ControllerEvent::new(0, v, 1, n));
        prop_assert_eq!(after, state);
    }

    /// Unknown axis indices never change the state, whatever the type tag.
    #[test]
    fn prop_unknown_axis_is_no_op(
        state in any_state(),
        n in 8u8..=255,
        ty in any::<u8>().prop_filter("not a button", |t| *t != 1),
        v in any::<i16>()
    ) {
        let mut after = state;
        apply(&mut after, &ControllerEvent::new(0, v, ty, n));
        prop_assert_eq!(after, state);
    }

    /// Applying an event touches at most one field.
    #[test]
    fn prop_at_most_one_field_changes(state in any_state(), ev in any_event()) {
        let mut after = state;
        apply(&mut after, &ev);

        let buttons = xb360ctrl::Button::ALL
            .iter()
            .filter(|b| after.button(**b) != state.button(**b))
            .count();
        let axes = xb360ctrl::Axis::ALL
            .iter()
            .filter(|a| after.axis(**a) != state.axis(**a))
            .count();
        prop_assert!(buttons + axes <= 1);
    }

    /// reset is idempotent from any reachable state.
    #[test]
    fn prop_reset_idempotent(state in any_state()) {
        let mut once = state;
        reset(&mut once);
        let mut twice = once;
        reset(&mut twice);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once, ControllerState::default());
    }
}
