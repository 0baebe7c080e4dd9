// End-to-end editing scenarios over the in-memory meshblock grid.

mod common;

use common::{code, session, SIZE};
use meshpaint::{DistrictPair, MeshblockId, MouseButton, PointerEvent, PointerEventHandler};

fn press(x: f64, y: f64) -> PointerEvent { PointerEvent::pressed(x, y, MouseButton::Primary) }

fn moved(x: f64, y: f64) -> PointerEvent { PointerEvent::moved(x, y) }

/// Center of the grid cell at (col, row).
fn center(col: f64, row: f64) -> (f64, f64) { ((col + 0.5) * SIZE, (row + 0.5) * SIZE) }

#[test]
fn activates_on_shared_edge() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));

    assert!(session.is_active());
    assert_eq!(session.district_pair(), DistrictPair::new(code("A"), code("B")).as_ref());
    assert!(session.target_district().is_none());
    assert_eq!(session.touched().count(), 0);
    assert!(session.overlay().is_some());
    assert_eq!(session.canvas().0, 1);
}

#[test]
fn first_touch_picks_other_district_and_reassigns() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    let (x, y) = center(0.0, 0.0);
    session.on_move(&moved(x, y));

    assert_eq!(session.target_district(), Some(&code("B")));
    assert_eq!(session.meshblocks().district(MeshblockId(1)), Some(code("B")));
    assert_eq!(session.notifier().0, vec!["M1: A -> B".to_string()]);
    assert_eq!(session.touched().collect::<Vec<_>>(), vec![MeshblockId(1)]);
    assert_eq!(session.meshblocks().repaint_requests(), 1);
}

#[test]
fn touched_meshblock_is_not_processed_again() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_move(&moved(5_000.0, 5_000.0));
    session.on_move(&moved(4_000.0, 5_000.0));
    session.on_move(&moved(4_500.0, 6_000.0));

    assert_eq!(session.notifier().0.len(), 1);
    assert_eq!(session.meshblocks().revision(), 1);
    assert_eq!(session.meshblocks().district(MeshblockId(1)), Some(code("B")));
}

#[test]
fn meshblock_already_on_target_side_is_left_alone() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_move(&moved(5_000.0, 5_000.0));
    let (x, y) = center(2.0, 0.0);
    session.on_move(&moved(x, y));

    assert_eq!(session.meshblocks().district(MeshblockId(3)), Some(code("B")));
    assert!(!session.was_touched(MeshblockId(3)));
    assert_eq!(session.touched().count(), 1);
    assert_eq!(session.notifier().0.len(), 1);
}

#[test]
fn secondary_press_ends_session() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_move(&moved(5_000.0, 5_000.0));
    session.on_press(&PointerEvent::pressed(0.0, 0.0, MouseButton::Secondary));

    assert!(!session.is_active());
    assert!(session.overlay().is_none());
    assert!(session.district_pair().is_none());
    assert!(session.target_district().is_none());
    assert_eq!(session.touched().count(), 0);
    assert_eq!(session.canvas().0, 2);
    // Edits are live; ending the session does not undo them.
    assert_eq!(session.meshblocks().district(MeshblockId(1)), Some(code("B")));
}

#[test]
fn second_primary_press_ends_session() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_press(&press(SIZE, 5_000.0));
    assert!(!session.is_active());
}

#[test]
fn new_session_starts_with_empty_touched_set_and_fresh_target() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_move(&moved(5_000.0, 5_000.0)); // M1 A -> B
    session.on_press(&press(SIZE, 5_000.0));   // end

    // M1 and M2 are both B now; the M4/M1 edge is A|B.
    session.on_press(&press(5_000.0, SIZE));
    assert!(session.is_active());
    assert_eq!(session.touched().count(), 0);
    assert!(session.target_district().is_none());

    // M1 can be painted back within the new session.
    session.on_move(&moved(5_000.0, 5_000.0));
    assert_eq!(session.meshblocks().district(MeshblockId(1)), Some(code("A")));
    assert_eq!(session.notifier().0.last().map(String::as_str), Some("M1: B -> A"));
}

#[test]
fn repeated_codes_still_make_a_pair() {
    // M1, M4, M5 are A and M2 is B around this vertex.
    let mut session = session();
    session.on_press(&press(SIZE, SIZE));
    assert_eq!(session.district_pair(), DistrictPair::new(code("A"), code("B")).as_ref());
}

#[test]
fn three_districts_do_not_activate() {
    // M2, M3 (B), M5 (A) and M6 (C) meet here.
    let mut session = session();
    session.on_press(&press(2.0 * SIZE, SIZE));
    assert!(!session.is_active());
    assert!(session.overlay().is_none());
    assert_eq!(session.canvas().0, 0);
}

#[test]
fn interior_point_does_not_activate() {
    let mut session = session();
    let (x, y) = center(0.0, 0.0);
    session.on_press(&press(x, y));
    assert!(!session.is_active());
}

#[test]
fn unassigned_meshblock_does_not_count_as_a_district() {
    // M7 (C) borders the unassigned M8.
    let mut session = session();
    session.on_press(&press(4.5 * SIZE, SIZE));
    assert!(!session.is_active());
}

#[test]
fn pair_stays_frozen_across_moves() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    let pair = session.district_pair().cloned();

    // Sweep over an A|C boundary and into C.
    for (x, y) in [(2.0 * SIZE, 1.5 * SIZE), center(2.0, 1.0), (2.0 * SIZE, SIZE)] {
        session.on_move(&moved(x, y));
        assert_eq!(session.district_pair().cloned(), pair);
    }
    // M6 is outside the pair and must not be painted.
    assert_eq!(session.meshblocks().district(MeshblockId(6)), Some(code("C")));
    assert!(!session.was_touched(MeshblockId(6)));
}

#[test]
fn first_touch_on_b_side_paints_towards_a() {
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    let (x, y) = center(1.0, 0.0);
    session.on_move(&moved(x, y)); // M2 B -> A
    let (x, y) = center(1.0, 1.0);
    session.on_move(&moved(x, y)); // M5 already A
    let (x, y) = center(2.0, 0.0);
    session.on_move(&moved(x, y)); // M3 B -> A

    assert_eq!(session.target_district(), Some(&code("A")));
    assert_eq!(session.notifier().0, vec!["M2: B -> A".to_string(), "M3: B -> A".to_string()]);
    assert!(!session.was_touched(MeshblockId(5)));
}

#[test]
fn edge_match_that_does_not_cover_cursor_is_discarded() {
    // 500 m inside M1: M2's edge is within snapping distance but M2 does not cover the cursor.
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_move(&moved(SIZE - 500.0, 5_000.0));

    assert_eq!(session.meshblocks().district(MeshblockId(1)), Some(code("B")));
    assert_eq!(session.meshblocks().district(MeshblockId(2)), Some(code("B")));
    assert_eq!(session.touched().collect::<Vec<_>>(), vec![MeshblockId(1)]);
}

#[test]
fn ambiguous_point_is_a_noop_frame() {
    // On the M1|M4 edge both cover the cursor.
    let mut session = session();
    session.on_press(&press(SIZE, 5_000.0));
    session.on_move(&moved(5_000.0, SIZE));
    assert_eq!(session.touched().count(), 0);
    assert!(session.target_district().is_none());
    assert_eq!(session.meshblocks().revision(), 0);
}

#[test]
fn idle_moves_drive_snap_indicator() {
    let mut session = session();
    session.on_move(&moved(SIZE, 5_000.0));
    let indicator = session.snap_indicator().cloned().unwrap();
    assert_eq!(indicator.meshblock, MeshblockId(1));
    assert_eq!(session.canvas().0, 1);

    // Same boundary again: no extra redraw.
    session.on_move(&moved(SIZE, 5_000.0));
    assert_eq!(session.canvas().0, 1);

    session.on_move(&moved(5_000.0, 5_000.0));
    assert!(session.snap_indicator().is_none());
    assert_eq!(session.canvas().0, 2);
    assert_eq!(session.meshblocks().revision(), 0);
}

#[test]
fn middle_press_never_changes_state() {
    let mut session = session();
    session.on_press(&PointerEvent::pressed(SIZE, 5_000.0, MouseButton::Middle));
    assert!(!session.is_active());
    session.on_press(&press(SIZE, 5_000.0));
    session.on_press(&PointerEvent::pressed(SIZE, 5_000.0, MouseButton::Middle));
    assert!(session.is_active());
}
