//! End-to-end tests for the sort/limit/offset stage

use std::cmp::Ordering;

use rowsort::executor::{
    BudgetMonitor, ExecutionError, ExecutionResult, InputSource, NoopMonitor, OrderByOperator,
    OutputSink, RowComparator, ScalarValue, SortKeySpec, SortStrategy,
};
use rowsort::plan::{LimitDescriptor, LimitValue, RuntimeParameters, Schema, SortDirection};
use serde_json::{json, Value};

type Row = Vec<Value>;

fn column(index: usize) -> impl Fn(&Row) -> ScalarValue {
    move |row: &Row| ScalarValue::new(row[index].clone())
}

/// In-memory input over pre-built rows
struct MemSource {
    rows: Vec<Row>,
    cursor: usize,
    released: bool,
}

impl MemSource {
    fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            cursor: 0,
            released: false,
        }
    }
}

impl InputSource for MemSource {
    type Row = Row;

    fn next_row(&mut self) -> ExecutionResult<Option<Row>> {
        let row = self.rows.get(self.cursor).cloned();
        self.cursor += 1;
        Ok(row)
    }

    fn is_active(&self, _row: &Row) -> bool {
        true
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[derive(Default)]
struct MemSink {
    rows: Vec<Row>,
}

impl OutputSink for MemSink {
    type Row = Row;

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }
}

fn ten_rows() -> Vec<Row> {
    // Values 0..10 in scrambled scan order
    [9i64, 0, 7, 2, 5, 4, 3, 6, 1, 8]
        .iter()
        .map(|v| vec![json!(v)])
        .collect()
}

fn ints(sink: &MemSink) -> Vec<i64> {
    sink.rows.iter().map(|r| r[0].as_i64().unwrap()).collect()
}

fn single_key_asc(limit: Option<LimitDescriptor>) -> OrderByOperator<Row> {
    OrderByOperator::initialize(
        SortKeySpec::new().key(column(0), SortDirection::Ascending),
        limit,
        Schema::of(&["value"]),
    )
    .unwrap()
}

fn run(
    operator: &OrderByOperator<Row>,
    rows: Vec<Row>,
) -> (MemSource, MemSink, rowsort::executor::ExecutionSummary) {
    let mut source = MemSource::new(rows);
    let mut sink = MemSink::default();
    let summary = operator
        .execute(
            &mut source,
            &mut sink,
            &mut NoopMonitor,
            &RuntimeParameters::none(),
        )
        .unwrap();
    (source, sink, summary)
}

#[test]
fn output_is_sorted_under_the_comparator() {
    let operator = single_key_asc(None);
    let (_, sink, _) = run(&operator, ten_rows());

    let spec = SortKeySpec::new().key(column(0), SortDirection::Ascending);
    let comparator = RowComparator::new(&spec);
    for pair in sink.rows.windows(2) {
        let ord = comparator.compare(&pair[0], &pair[1]).unwrap();
        assert_ne!(ord, Ordering::Greater);
    }
}

#[test]
fn no_window_means_full_sorted_output() {
    let operator = single_key_asc(None);
    let (source, sink, summary) = run(&operator, ten_rows());

    assert_eq!(ints(&sink), (0..10).collect::<Vec<_>>());
    assert_eq!(summary.rows_emitted, 10);
    assert!(source.released);
}

#[test]
fn output_is_a_windowed_permutation_of_the_input() {
    let operator = single_key_asc(Some(LimitDescriptor::literal(6, 1)));
    let (_, sink, _) = run(&operator, ten_rows());

    let mut input: Vec<i64> = ten_rows().iter().map(|r| r[0].as_i64().unwrap()).collect();
    input.sort_unstable();

    // Every emitted row existed in the input, no duplicates fabricated
    let emitted = ints(&sink);
    for value in &emitted {
        assert!(input.contains(value));
    }
    let mut deduped = emitted.clone();
    deduped.dedup();
    assert_eq!(deduped, emitted);
    assert_eq!(emitted.len(), 6);
}

#[test]
fn limit_three_offset_zero() {
    let operator = single_key_asc(Some(LimitDescriptor::literal(3, 0)));
    let (_, sink, summary) = run(&operator, ten_rows());

    assert_eq!(ints(&sink), vec![0, 1, 2]);
    assert_eq!(summary.strategy, SortStrategy::Bounded { boundary: 3 });
    assert!(summary.limit_applied);
}

#[test]
fn limit_three_offset_two() {
    let operator = single_key_asc(Some(LimitDescriptor::literal(3, 2)));
    let (_, sink, summary) = run(&operator, ten_rows());

    // Ranks 2..=4 of the sorted order
    assert_eq!(ints(&sink), vec![2, 3, 4]);
    assert_eq!(summary.rows_skipped, 2);
    assert_eq!(summary.strategy, SortStrategy::Bounded { boundary: 5 });
}

#[test]
fn window_exceeding_input_takes_full_sort_path() {
    // limit 8 + offset 5 = 13 >= 10: full sort, 5 rows remain after the skip
    let operator = single_key_asc(Some(LimitDescriptor::literal(8, 5)));
    let (_, sink, summary) = run(&operator, ten_rows());

    assert_eq!(ints(&sink), vec![5, 6, 7, 8, 9]);
    assert_eq!(summary.strategy, SortStrategy::Full);
    assert_eq!(summary.rows_emitted, 5);
    assert!(!summary.limit_applied);
}

#[test]
fn multi_key_tie_break() {
    // Column 0 ascending, column 1 descending
    let operator = OrderByOperator::initialize(
        SortKeySpec::new()
            .key(column(0), SortDirection::Ascending)
            .key(column(1), SortDirection::Descending),
        None,
        Schema::of(&["name", "rank"]),
    )
    .unwrap();

    let rows: Vec<Row> = vec![
        vec![json!("A"), json!(2)],
        vec![json!("A"), json!(1)],
        vec![json!("B"), json!(1)],
    ];
    let (_, sink, _) = run(&operator, rows);

    let keys: Vec<(String, i64)> = sink
        .rows
        .iter()
        .map(|r| (r[0].as_str().unwrap().to_string(), r[1].as_i64().unwrap()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("A".to_string(), 2),
            ("A".to_string(), 1),
            ("B".to_string(), 1),
        ]
    );
}

#[test]
fn invalid_direction_fails_with_empty_sink() {
    let operator = OrderByOperator::initialize(
        SortKeySpec::new()
            .key(column(0), SortDirection::Ascending)
            .key(column(0), SortDirection::Invalid),
        Some(LimitDescriptor::literal(3, 0)),
        Schema::of(&["value"]),
    )
    .unwrap();

    // Duplicate first keys force the comparison to reach the invalid
    // direction
    let rows: Vec<Row> = vec![vec![json!(1)], vec![json!(1)], vec![json!(1)]];
    let mut source = MemSource::new(rows);
    let mut sink = MemSink::default();

    let err = operator
        .execute(
            &mut source,
            &mut sink,
            &mut NoopMonitor,
            &RuntimeParameters::none(),
        )
        .unwrap_err();

    assert_eq!(err.code(), "ROWSORT_INVALID_DIRECTION");
    assert!(sink.rows.is_empty());
    assert!(!source.released);
}

#[test]
fn reexecution_is_idempotent() {
    let operator = single_key_asc(Some(LimitDescriptor::literal(4, 3)));

    let (_, first, _) = run(&operator, ten_rows());
    let (_, second, _) = run(&operator, ten_rows());

    assert_eq!(ints(&first), ints(&second));
}

#[test]
fn parameterized_window_rebinds_per_execution() {
    let operator = OrderByOperator::initialize(
        SortKeySpec::new().key(column(0), SortDirection::Ascending),
        Some(LimitDescriptor::new(
            LimitValue::Parameter(0),
            LimitValue::Parameter(1),
        )),
        Schema::of(&["value"]),
    )
    .unwrap();

    let mut source = MemSource::new(ten_rows());
    let mut sink = MemSink::default();
    operator
        .execute(
            &mut source,
            &mut sink,
            &mut NoopMonitor,
            &RuntimeParameters::from_values(vec![json!(2), json!(0)]),
        )
        .unwrap();
    assert_eq!(ints(&sink), vec![0, 1]);

    let mut source = MemSource::new(ten_rows());
    let mut sink = MemSink::default();
    operator
        .execute(
            &mut source,
            &mut sink,
            &mut NoopMonitor,
            &RuntimeParameters::from_values(vec![json!(3), json!(7)]),
        )
        .unwrap();
    assert_eq!(ints(&sink), vec![7, 8, 9]);
}

#[test]
fn offset_without_limit_skips_and_emits_the_rest() {
    let operator = single_key_asc(Some(LimitDescriptor::literal(-1, 6)));
    let (_, sink, summary) = run(&operator, ten_rows());

    assert_eq!(ints(&sink), vec![6, 7, 8, 9]);
    assert_eq!(summary.rows_skipped, 6);
    assert_eq!(summary.strategy, SortStrategy::Full);
    assert!(!summary.limit_applied);
}

#[test]
fn duplicate_rows_survive_sorting_and_windowing() {
    let rows: Vec<Row> = [3i64, 1, 3, 1, 2]
        .iter()
        .map(|v| vec![json!(v)])
        .collect();
    let operator = single_key_asc(None);
    let (_, sink, _) = run(&operator, rows);

    assert_eq!(ints(&sink), vec![1, 1, 2, 3, 3]);
}

#[test]
fn cancellation_mid_scan_leaves_sink_untouched() {
    let operator = single_key_asc(None);
    let mut source = MemSource::new(ten_rows());
    let mut sink = MemSink::default();
    let mut monitor = BudgetMonitor::new(5);

    let err = operator
        .execute(
            &mut source,
            &mut sink,
            &mut monitor,
            &RuntimeParameters::none(),
        )
        .unwrap_err();

    assert_eq!(err, ExecutionError::Cancelled);
    assert!(err.is_abort());
    assert!(sink.rows.is_empty());
    assert!(!source.released);
}
