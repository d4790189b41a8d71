use super::*;
use crate::surface::RecordingSurface;

fn cycle() -> ToolCycle {
    ToolCycle::default()
}

#[test]
fn default_cycle_has_five_tools() {
    assert_eq!(cycle().tools().len(), 5);
    assert_eq!(cycle().tools()[0], "select");
}

#[test]
fn empty_list_is_rejected() {
    assert!(ToolCycle::new(Vec::new()).is_none());
}

#[test]
fn next_after_advances_in_order() {
    let c = cycle();
    assert_eq!(c.next_after(Some("select")), "hand");
    assert_eq!(c.next_after(Some("hand")), "draw");
    assert_eq!(c.next_after(Some("draw")), "eraser");
    assert_eq!(c.next_after(Some("eraser")), "geo");
}

#[test]
fn next_after_wraps_around() {
    assert_eq!(cycle().next_after(Some("geo")), "select");
}

#[test]
fn unknown_tool_restarts_at_first() {
    assert_eq!(cycle().next_after(Some("laser")), "select");
}

#[test]
fn missing_tool_restarts_at_first() {
    assert_eq!(cycle().next_after(None), "select");
}

#[test]
fn single_tool_cycle_stays_put() {
    let c = ToolCycle::new(vec!["draw".into()]).unwrap();
    assert_eq!(c.next_after(Some("draw")), "draw");
}

#[test]
fn advance_sets_next_tool_on_surface() {
    let mut surface = RecordingSurface::with_tool("draw");
    let next = cycle().advance(&mut surface);
    assert_eq!(next, "eraser");
    assert_eq!(surface.current_tool().as_deref(), Some("eraser"));
    assert_eq!(surface.tools_set(), vec!["eraser"]);
}

#[test]
fn advance_from_externally_set_tool_picks_index_zero() {
    let mut surface = RecordingSurface::with_tool("text");
    assert_eq!(cycle().advance(&mut surface), "select");
}

#[test]
fn repeated_advance_walks_full_cycle() {
    let c = cycle();
    let mut surface = RecordingSurface::with_tool("select");
    for _ in 0..5 {
        c.advance(&mut surface);
    }
    assert_eq!(surface.current_tool().as_deref(), Some("select"));
    assert_eq!(surface.tools_set(), vec!["hand", "draw", "eraser", "geo", "select"]);
}
