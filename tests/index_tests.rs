use cellfill::area::dom::{GridCell, GridDom, TableDom};
use cellfill::area::geometry::{Horizontal, Orientation, Rect, Vertical};
use cellfill::area::indices::{self, IndexPair, IndexRange};

fn dom_with_hidden_row() -> GridDom {
    let mut dom = GridDom::new(5, 3, 100.0, 20.0);
    dom.hide_row(2);
    dom
}

#[test]
fn test_cell_to_indices_without_hidden_rows() {
    let dom = GridDom::new(5, 3, 100.0, 20.0);
    let cell = dom.cell(3, 2).unwrap();
    assert_eq!(indices::cell_to_indices(&dom, &cell), Some(IndexPair::new(3, 2)));
}

#[test]
fn test_cell_to_indices_skips_hidden_rows() {
    let dom = dom_with_hidden_row();
    assert_eq!(
        indices::cell_to_indices(&dom, &GridCell::new(1, 0)),
        Some(IndexPair::new(1, 0))
    );
    assert_eq!(
        indices::cell_to_indices(&dom, &GridCell::new(3, 1)),
        Some(IndexPair::new(2, 1))
    );
    assert_eq!(
        indices::cell_to_indices(&dom, &GridCell::new(4, 1)),
        Some(IndexPair::new(3, 1))
    );
}

#[test]
fn test_cell_to_indices_rejects_hidden_and_foreign_cells() {
    let dom = dom_with_hidden_row();
    assert_eq!(indices::cell_to_indices(&dom, &GridCell::new(2, 0)), None);
    assert_eq!(indices::cell_to_indices(&dom, &GridCell::new(5, 0)), None);
    assert_eq!(indices::cell_to_indices(&dom, &GridCell::new(0, 3)), None);
}

#[test]
fn test_indices_to_cell_counts_displayed_rows() {
    let dom = dom_with_hidden_row();
    let anchor = dom.cell(0, 0).unwrap();
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [2, 1]), Some(GridCell::new(3, 1)));
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [0, 0]), Some(anchor));
}

#[test]
fn test_indices_to_cell_negative_offset() {
    let dom = dom_with_hidden_row();
    let anchor = dom.cell(4, 2).unwrap();
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [-1, -1]), Some(GridCell::new(3, 1)));
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [-2, 0]), Some(GridCell::new(1, 2)));
}

#[test]
fn test_indices_to_cell_out_of_range() {
    let dom = dom_with_hidden_row();
    let anchor = dom.cell(0, 0).unwrap();
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [4, 0]), None);
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [-1, 0]), None);
    assert_eq!(indices::indices_to_cell(&dom, &anchor, [0, 3]), None);
}

#[test]
fn test_bound_to_cell_picks_last_covered_cell() {
    let dom = dom_with_hidden_row();
    let anchor = dom.cell(0, 0).unwrap();
    assert_eq!(
        indices::bound_to_cell(&dom, &anchor, IndexPair::new(3, 2)),
        Some(GridCell::new(3, 1))
    );
    assert_eq!(indices::bound_to_cell(&dom, &anchor, IndexPair::new(0, 2)), None);
}

#[test]
fn test_resolve_range_orders_corners() {
    let dom = dom_with_hidden_row();
    let start = dom.cell(3, 2).unwrap();
    let end = dom.cell(0, 0).unwrap();
    let range = indices::resolve_range(&dom, &start, Some(&end)).unwrap();
    assert_eq!(range.start, IndexPair::new(0, 0));
    assert_eq!(range.end, IndexPair::new(3, 3));
    assert_eq!(range.len(), 9);
}

#[test]
fn test_resolve_range_single_cell() {
    let dom = GridDom::new(5, 3, 100.0, 20.0);
    let start = dom.cell(1, 1).unwrap();
    let expected = IndexRange::unit(IndexPair::new(1, 1));
    assert_eq!(indices::resolve_range(&dom, &start, None), Some(expected));
    assert_eq!(indices::resolve_range(&dom, &start, Some(&start)), Some(expected));
}

#[test]
fn test_resolve_range_unresolvable_start() {
    let dom = dom_with_hidden_row();
    assert_eq!(indices::resolve_range(&dom, &GridCell::new(2, 0), None), None);
}

#[test]
fn test_extension_range_replaces_grown_bound() {
    let main = IndexRange::new(IndexPair::new(1, 1), IndexPair::new(3, 2));

    let right = indices::extension_range(
        &main,
        IndexPair::new(2, 3),
        &Orientation::new(Some(Horizontal::Right), None),
    );
    assert_eq!(right, IndexRange::new(IndexPair::new(1, 1), IndexPair::new(3, 4)));

    let top = indices::extension_range(
        &main,
        IndexPair::new(0, 1),
        &Orientation::new(None, Some(Vertical::Top)),
    );
    assert_eq!(top, IndexRange::new(IndexPair::new(0, 1), IndexPair::new(3, 2)));

    let none = indices::extension_range(&main, IndexPair::new(2, 1), &Orientation::default());
    assert_eq!(none, main);
}

#[test]
fn test_index_range_helpers() {
    let range = IndexRange::spanning(IndexPair::new(2, 3), IndexPair::new(0, 1));
    assert_eq!(range.start, IndexPair::new(0, 1));
    assert_eq!(range.end, IndexPair::new(3, 4));
    assert_eq!(range.rows(), 3);
    assert_eq!(range.cols(), 3);
    assert!(range.contains(IndexPair::new(2, 1)));
    assert!(!range.contains(IndexPair::new(3, 1)));
    assert!(IndexRange::default().is_empty());
    assert_eq!(IndexPair::new(0, 0).offset(-1, 0), None);
}

#[test]
fn test_grid_dom_collapses_hidden_rows() {
    let dom = dom_with_hidden_row().with_origin_top(30.0);
    assert_eq!(dom.bounding_rect(&GridCell::new(3, 1)), Rect::new(100.0, 70.0, 100.0, 20.0));
    assert_eq!(dom.bounding_rect(&GridCell::new(2, 1)).height, 0.0);
    assert_eq!(dom.displayed_rows(0), vec![0, 1, 3, 4]);
    assert_eq!(dom.group_rect(0), Some(Rect::new(0.0, 30.0, 300.0, 80.0)));
    assert_eq!(dom.group_rect(1), None);
}
