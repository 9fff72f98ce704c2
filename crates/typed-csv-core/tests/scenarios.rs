//! End-to-end decoding scenarios over in-memory streams.

use std::io::Cursor;

use typed_csv_core::{CsvConfig, CsvError, Result, Schema, Value, schema_records, typed_records};

fn decode_all<T: typed_csv_core::Record>(input: &str, config: &CsvConfig) -> Vec<Result<T>> {
    typed_records::<T, _>(Cursor::new(input.as_bytes()), config)
        .expect("start session")
        .collect()
}

#[test]
fn people_file_decodes_to_typed_tuples() {
    let results = decode_all::<(String, i32, String)>(
        "Alice,30,Engineer\nBob,25,Designer\n",
        &CsvConfig::default(),
    );
    let records: Vec<_> = results.into_iter().map(Result::unwrap).collect();
    assert_eq!(
        records,
        vec![
            ("Alice".to_string(), 30, "Engineer".to_string()),
            ("Bob".to_string(), 25, "Designer".to_string()),
        ]
    );
}

#[test]
fn blank_line_mid_stream_is_rejected() {
    let results = decode_all::<(String, String, String)>("a,b,c\n\nd,e,f\n", &CsvConfig::default());
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].as_ref().unwrap(),
        &("a".to_string(), "b".to_string(), "c".to_string())
    );
    assert!(matches!(results[1], Err(CsvError::EmptyRow { row: 2 })));
}

#[test]
fn short_row_is_too_few_columns() {
    let results = decode_all::<(String, String, String)>("1,2\n", &CsvConfig::default());
    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0],
        Err(CsvError::TooFewColumns { row: 1, .. })
    ));
}

#[test]
fn long_row_is_too_many_columns() {
    let results = decode_all::<(String, String)>("x,y\n1,2,3\n", &CsvConfig::default());
    assert!(matches!(
        results[1],
        Err(CsvError::TooManyColumns {
            row: 2,
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn header_row_is_skipped_without_validation() {
    let config = CsvConfig::default().with_row_skip_offset(1);
    let results = decode_all::<(String, i32)>("header1,header2\nAlice,30\n", &config);
    let records: Vec<_> = results.into_iter().map(Result::unwrap).collect();
    assert_eq!(records, vec![("Alice".to_string(), 30)]);
}

#[test]
fn non_numeric_cell_names_row_and_column() {
    let results = decode_all::<(String, i32, String)>(
        "Alice,30,Engineer\nBob,twenty,Designer\n",
        &CsvConfig::default(),
    );
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot read \"twenty\" as i32 at row 2, column 2"
    );
}

#[test]
fn final_row_without_trailing_delimiter() {
    let results = decode_all::<(String, u8)>("a,1\nb,2", &CsvConfig::default());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(Result::is_ok));
}

#[test]
fn trailing_blank_line_is_an_empty_row() {
    let results = decode_all::<(String,)>("a\n\n", &CsvConfig::default());
    assert!(matches!(results[1], Err(CsvError::EmptyRow { row: 2 })));
}

#[test]
fn empty_input_yields_nothing() {
    assert!(decode_all::<(String,)>("", &CsvConfig::default()).is_empty());
}

#[test]
fn quoted_cell_keeps_column_delimiter() {
    let results = decode_all::<(String, i32)>("\"Doe, Jane\",41\n", &CsvConfig::default());
    assert_eq!(results[0].as_ref().unwrap(), &("Doe, Jane".to_string(), 41));
}

#[test]
fn runtime_schema_matches_static_tuple() {
    let input = "Alice,30,Engineer\nBob,25,Designer\n";
    let schema: Schema = "string,int,string".parse().unwrap();
    let records = schema_records(Cursor::new(input.as_bytes()), &CsvConfig::default(), schema)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1].values(),
        &[
            Value::String("Bob".into()),
            Value::Int(25),
            Value::String("Designer".into())
        ]
    );
}

#[test]
fn independent_sessions_do_not_share_row_counters() {
    let config = CsvConfig::default();
    let mut first = typed_records::<(u8,), _>(Cursor::new("1\n2\n3\n"), &config).unwrap();
    let mut second = typed_records::<(u8,), _>(Cursor::new("1\n2\n3\n"), &config).unwrap();
    first.advance().unwrap();
    first.advance().unwrap();
    second.advance().unwrap();
    assert_eq!(first.row_number(), 2);
    assert_eq!(second.row_number(), 1);
}
