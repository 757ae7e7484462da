use super::*;

// =============================================================
// InputState
// =============================================================

#[test]
fn default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn down_begins_a_stroke() {
    let mut state = InputState::Idle;
    assert_eq!(state.transition(PointerEvent::Down), Some(PointKind::Begin));
    assert_eq!(state, InputState::Stroking);
}

#[test]
fn move_while_stroking_records_move() {
    let mut state = InputState::Stroking;
    assert_eq!(state.transition(PointerEvent::Move), Some(PointKind::Move));
    assert_eq!(state, InputState::Stroking);
}

#[test]
fn move_while_idle_is_ignored() {
    let mut state = InputState::Idle;
    assert_eq!(state.transition(PointerEvent::Move), None);
    assert_eq!(state, InputState::Idle);
}

#[test]
fn up_ends_the_stroke() {
    let mut state = InputState::Stroking;
    assert_eq!(state.transition(PointerEvent::Up), Some(PointKind::End));
    assert_eq!(state, InputState::Idle);
}

#[test]
fn up_while_idle_is_ignored() {
    let mut state = InputState::Idle;
    assert_eq!(state.transition(PointerEvent::Up), None);
}

#[test]
fn leave_while_stroking_ends_the_stroke() {
    let mut state = InputState::Stroking;
    assert_eq!(state.transition(PointerEvent::Leave), Some(PointKind::End));
    assert_eq!(state, InputState::Idle);
}

#[test]
fn leave_while_idle_is_ignored() {
    let mut state = InputState::Idle;
    assert_eq!(state.transition(PointerEvent::Leave), None);
}

#[test]
fn down_while_stroking_restarts() {
    let mut state = InputState::Stroking;
    assert_eq!(state.transition(PointerEvent::Down), Some(PointKind::Begin));
    assert_eq!(state, InputState::Stroking);
}

#[test]
fn full_gesture_yields_begin_moves_end() {
    let mut state = InputState::Idle;
    let events = [
        PointerEvent::Move,
        PointerEvent::Down,
        PointerEvent::Move,
        PointerEvent::Move,
        PointerEvent::Up,
        PointerEvent::Move,
    ];
    let kinds: Vec<PointKind> = events.iter().filter_map(|e| state.transition(*e)).collect();
    assert_eq!(kinds, vec![PointKind::Begin, PointKind::Move, PointKind::Move, PointKind::End]);
}

// =============================================================
// Position
// =============================================================

#[test]
fn position_new_sets_fields() {
    let pos = Position::new(3.5, -2.0);
    assert_eq!(pos, Position { x: 3.5, y: -2.0 });
}
