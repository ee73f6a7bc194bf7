//! Scenario tests for the query language and matching rules.

use gridsift::{filter_rows, Cell, Column, RichContent, Row, Search};

// ============================================================================
// Test helpers
// ============================================================================

fn fruit_rows() -> Vec<Row> {
    vec![
        Row::from(["apple", "red"]),
        Row::from(["banana", "yellow"]),
        Row::from(["cherry", "red"]),
        Row::from(["grape", "green"]),
    ]
}

/// Indices of the rows a query keeps, in output order.
fn kept_indices(query: &str, rows: &[Row]) -> Vec<usize> {
    let search = Search::new(query).build();
    rows.iter()
        .enumerate()
        .filter(|(row_index, row)| search.matches(row, *row_index))
        .map(|(row_index, _)| row_index)
        .collect()
}

// ============================================================================
// Boolean operators
// ============================================================================

#[test]
fn and_is_set_intersection() {
    let rows = fruit_rows();
    let a: Vec<usize> = kept_indices("red", &rows);
    let b: Vec<usize> = kept_indices("apple", &rows);

    let both = kept_indices("red AND apple", &rows);
    let intersection: Vec<usize> = a.iter().copied().filter(|i| b.contains(i)).collect();
    assert_eq!(both, intersection);
    assert_eq!(both, vec![0]);
}

#[test]
fn or_is_set_union() {
    let rows = fruit_rows();
    let a = kept_indices("apple", &rows);
    let b = kept_indices("banana", &rows);

    let either = kept_indices("apple OR banana", &rows);
    let mut union: Vec<usize> = a;
    for i in b {
        if !union.contains(&i) {
            union.push(i);
        }
    }
    union.sort_unstable();
    assert_eq!(either, union);
    assert_eq!(either, vec![0, 1]);
}

#[test]
fn grouping_distributes_over_and() {
    let rows = fruit_rows();

    // (apple OR cherry) AND red == (apple AND red) ∪ (cherry AND red)
    let grouped = kept_indices("(apple OR cherry) AND red", &rows);
    let mut union = kept_indices("apple AND red", &rows);
    for i in kept_indices("cherry AND red", &rows) {
        if !union.contains(&i) {
            union.push(i);
        }
    }
    union.sort_unstable();
    assert_eq!(grouped, union);
    assert_eq!(grouped, vec![0, 2]);
}

#[test]
fn nested_groups_two_levels_deep() {
    let rows = fruit_rows();
    let kept = kept_indices("((apple OR cherry) AND red) OR banana", &rows);
    assert_eq!(kept, vec![0, 1, 2]);
}

#[test]
fn literal_true_false_and_empty() {
    let rows = fruit_rows();
    assert_eq!(kept_indices("true", &rows), vec![0, 1, 2, 3]);
    assert_eq!(kept_indices("false", &rows), Vec::<usize>::new());
    assert_eq!(kept_indices("", &rows), vec![0, 1, 2, 3]);
}

#[test]
fn concrete_fruit_scenario() {
    let rows = vec![
        Row::from(["apple", "red"]),
        Row::from(["banana", "yellow"]),
        Row::from(["cherry", "red"]),
    ];
    let search = Search::new("red AND (apple OR cherry)").build();
    assert_eq!(search.filter(&rows), vec![&rows[0], &rows[2]]);
}

// ============================================================================
// Order preservation
// ============================================================================

#[test]
fn output_preserves_input_order() {
    let rows = vec![
        Row::from(["match", "3"]),
        Row::from(["skip", "x"]),
        Row::from(["match", "1"]),
        Row::from(["skip", "y"]),
        Row::from(["match", "2"]),
    ];
    let kept = kept_indices("match", &rows);
    assert_eq!(kept, vec![0, 2, 4]);
}

// ============================================================================
// Literal metacharacters
// ============================================================================

#[test]
fn metacharacters_are_literal_search_text() {
    let rows = vec![
        Row::from(["v1.5"]),
        Row::from(["v145"]),
        Row::from(["a+b"]),
        Row::from(["aab"]),
        Row::from(["100$"]),
    ];
    assert_eq!(kept_indices("1.5", &rows), vec![0]);
    assert_eq!(kept_indices("a+b", &rows), vec![2]);
    assert_eq!(kept_indices("100$", &rows), vec![4]);
}

// ============================================================================
// Hidden columns
// ============================================================================

#[test]
fn hidden_column_match_toggled_by_option() {
    let rows = vec![Row::from(["apple", "hush"])];
    let columns = vec![
        Some(Column::new("fruit")),
        Some(Column::new("note").hide()),
    ];

    assert!(filter_rows("hush", &columns, true, &rows).is_empty());
    assert_eq!(filter_rows("hush", &columns, false, &rows).len(), 1);

    // The visible column still matches either way
    assert_eq!(filter_rows("apple", &columns, true, &rows).len(), 1);
}

#[test]
fn partial_column_descriptions_are_tolerated() {
    let rows = vec![Row::from(["a", "b", "c"])];

    // Shorter than the row, with an undescribed entry
    let columns = vec![Some(Column::new("first").hide()), None];
    let search = Search::new("c")
        .columns(columns.clone())
        .ignore_hidden_columns(true)
        .build();
    assert_eq!(search.count(&rows), 1);

    let search = Search::new("a")
        .columns(columns)
        .ignore_hidden_columns(true)
        .build();
    assert_eq!(search.count(&rows), 0);
}

// ============================================================================
// Selectors and rich content
// ============================================================================

#[test]
fn selector_override_hides_real_content() {
    let rows = fruit_rows();
    let search = Search::new("zzz")
        .selector(|_, _, _| "zzz".to_string())
        .build();
    assert_eq!(search.count(&rows), rows.len());

    let search = Search::new("apple")
        .selector(|_, _, _| "zzz".to_string())
        .build();
    assert_eq!(search.count(&rows), 0);
}

#[test]
fn rich_content_inner_text_matches() {
    let rows = vec![
        Row::new(vec![Some(Cell::new(RichContent::new("hello world")))]),
        Row::new(vec![Some(Cell::new(RichContent::empty()))]),
    ];
    assert_eq!(kept_indices("hello", &rows), vec![0]);
    assert_eq!(kept_indices("world", &rows), vec![0]);
}

#[test]
fn markup_in_rich_content_is_searchable_as_is() {
    let rows = vec![Row::new(vec![Some(Cell::new(RichContent::new(
        "<b>bold</b>",
    )))])];
    // No tag stripping: the markup itself is part of the text
    assert_eq!(kept_indices("<b>", &rows), vec![0]);
    assert_eq!(kept_indices("bold", &rows), vec![0]);
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn empty_inputs_are_graceful() {
    assert!(filter_rows("query", &[], false, &[]).is_empty());

    let rows = fruit_rows();
    assert_eq!(filter_rows("", &[], false, &rows), rows);
    assert_eq!(filter_rows("apple", &[], true, &rows).len(), 1);
}

#[test]
fn unbalanced_parens_terminate_and_match_literally() {
    let rows = vec![Row::from(["(orphan text"]), Row::from(["plain"])];
    // A lone "(" never resolves as a group; it becomes literal search text
    assert_eq!(kept_indices("(orphan", &rows), vec![0]);
}

#[test]
fn numbers_match_their_display_form() {
    let rows = vec![
        Row::from([42i64, 7]),
        Row::from([420, 1]),
        Row::from([7, 7]),
    ];
    assert_eq!(kept_indices("42", &rows), vec![0, 1]);
    assert_eq!(kept_indices("42 AND 7", &rows), vec![0]);
}
