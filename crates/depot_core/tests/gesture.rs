use depot_core::{GestureState, REVEAL_WIDTH_PX, SNAP_THRESHOLD_PX};

fn dragged_to(offset: f32) -> GestureState {
    let mut gesture = GestureState::default();
    gesture.press(100.0);
    gesture.drag(100.0 + offset);
    gesture
}

#[test]
fn release_exactly_at_threshold_resolves_closed() {
    let mut gesture = dragged_to(SNAP_THRESHOLD_PX);
    assert_eq!(gesture.offset(), -60.0);
    gesture.release();
    assert!(!gesture.is_open());
    assert_eq!(gesture.offset(), 0.0);
}

#[test]
fn release_past_threshold_snaps_open() {
    let mut gesture = dragged_to(-61.0);
    gesture.release();
    assert!(gesture.is_open());
    assert_eq!(gesture.offset(), REVEAL_WIDTH_PX);
}

#[test]
fn rightward_motion_clamps_to_zero() {
    let mut gesture = GestureState::default();
    gesture.press(100.0);
    gesture.drag(180.0);
    assert_eq!(gesture.offset(), 0.0);
    gesture.drag(40.0);
    assert_eq!(gesture.offset(), -60.0);
    gesture.drag(250.0);
    assert_eq!(gesture.offset(), 0.0);
}

#[test]
fn press_and_release_without_move_stays_idle() {
    let mut gesture = GestureState::default();
    gesture.press(10.0);
    gesture.release();
    assert!(!gesture.is_open());
    assert_eq!(gesture.offset(), 0.0);
}

#[test]
fn pressing_an_open_row_and_releasing_closes_it() {
    let mut gesture = dragged_to(-75.0);
    gesture.release();
    assert!(gesture.is_open());

    gesture.press(20.0);
    gesture.release();
    assert!(!gesture.is_open());
}

#[test]
fn moves_without_a_press_are_ignored() {
    let mut gesture = GestureState::default();
    gesture.drag(-200.0);
    assert_eq!(gesture.offset(), 0.0);
    gesture.release();
    assert!(!gesture.is_open());
}
