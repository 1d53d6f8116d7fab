use chrono::{NaiveDate, NaiveDateTime};
use piyostats::core::extractor::{
    HeaderCursor, extract, extract_blob, extract_named, is_event_line, parse_event_line, parse_header,
};
use piyostats::errors::AppError;
use piyostats::models::category::Category;
use piyostats::models::dialect::Dialect;

mod common;
use common::{DAILY_EXPORT_12, DAILY_EXPORT_13, MONTHLY_EXPORT};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

#[test]
fn test_daily_feeding_line() {
    let text = "【ぴよログ】2024/03/10(日)\n09:15 ミルク 120ml\n";
    let events = extract(&[text], Dialect::Daily).unwrap();

    assert_eq!(events.len(), 1);
    let ev = &events[0];
    assert_eq!(ev.owner_date, date(2024, 3, 10));
    assert_eq!(ev.timestamp, at("2024-03-10 09:15"));
    assert_eq!(ev.category, Category::Feeding);
    assert_eq!(ev.subtype, "ミルク");
    assert_eq!(ev.value, 120);
}

#[test]
fn test_daily_export_with_stool() {
    let events = extract(&[DAILY_EXPORT_12], Dialect::Daily).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[1].category, Category::Stool);
    assert_eq!(events[1].timestamp, at("2024-03-12 23:50"));
    assert_eq!(events[1].value, 2);
}

#[test]
fn test_daily_cursor_resets_per_blob() {
    let events = extract(&[DAILY_EXPORT_12, DAILY_EXPORT_13], Dialect::Daily).unwrap();

    let dates: Vec<NaiveDate> = events.iter().map(|e| e.owner_date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 12), date(2024, 3, 12), date(2024, 3, 13)]
    );
}

#[test]
fn test_monthly_export_attributes_lines_to_headers() {
    let events = extract(&[MONTHLY_EXPORT], Dialect::Monthly).unwrap();

    // おしっこ and the totals line are not events
    assert_eq!(events.len(), 5);

    let first_day: Vec<_> = events
        .iter()
        .filter(|e| e.owner_date == date(2024, 3, 10))
        .collect();
    assert_eq!(first_day.len(), 3);

    let second_day: Vec<_> = events
        .iter()
        .filter(|e| e.owner_date == date(2024, 3, 11))
        .collect();
    assert_eq!(second_day.len(), 2);
    assert!(second_day.iter().all(|e| e.category == Category::Stool));
    assert_eq!(second_day[0].value, 3);
    assert_eq!(second_day[1].value, 1);
}

#[test]
fn test_timestamp_date_always_matches_owner_date() {
    // a 01:30 entry logged under the previous day's header keeps that date
    let text = "----------\n2024/03/10(日)\n01:30 ミルク 80ml\n";
    let events = extract(&[text], Dialect::Monthly).unwrap();

    assert_eq!(events[0].timestamp, at("2024-03-10 01:30"));
    for ev in extract(&[MONTHLY_EXPORT], Dialect::Monthly).unwrap() {
        assert_eq!(ev.timestamp.date(), ev.owner_date);
    }
}

#[test]
fn test_monthly_handles_crlf_line_endings() {
    let text = "----------\r\n2024/03/10(日)\r\n09:15 ミルク 120ml\r\n";
    let events = extract(&[text], Dialect::Monthly).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value, 120);
}

#[test]
fn test_trailing_delimiter_is_ignored() {
    let text = "----------\n2024/03/10(日)\n09:15 ミルク 120ml\n----------";
    let events = extract(&[text], Dialect::Monthly).unwrap();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_stool_volume_markers() {
    let d = date(2024, 3, 10);
    let value = |line: &str| parse_event_line(line, d).unwrap().unwrap().value;

    assert_eq!(value("12:00 うんち"), 3);
    assert_eq!(value("12:00 うんち (多め)"), 4);
    assert_eq!(value("12:00 うんち (少なめ)"), 2);
    assert_eq!(value("12:00 うんち (ちょこっと)"), 1);
    assert_eq!(value("12:00 うんち (硬め)"), 3);
    assert_eq!(value("23:50 うんち (少なめ)"), 2);
}

#[test]
fn test_label_with_both_keywords_is_stool() {
    let ev = parse_event_line("10:00 ミルクうんち", date(2024, 3, 10))
        .unwrap()
        .unwrap();
    assert_eq!(ev.category, Category::Stool);
    assert_eq!(ev.value, 3);
}

#[test]
fn test_unclassified_label_is_dropped() {
    let line = "10:00 メモ ミルク飲まず";
    assert!(is_event_line(line));
    assert!(parse_event_line(line, date(2024, 3, 10)).unwrap().is_none());

    let text = format!("【ぴよログ】2024/03/10(日)\n{line}\n");
    assert!(extract(&[text], Dialect::Daily).unwrap().is_empty());
}

#[test]
fn test_event_line_classification() {
    assert!(is_event_line("09:15 ミルク 120ml"));
    assert!(is_event_line("23:59 うんち"));
    assert!(is_event_line("00:00 うんち"));

    assert!(!is_event_line(""));
    assert!(!is_event_line("24:00 ミルク 100ml"));
    assert!(!is_event_line("9:15 ミルク 100ml"));
    assert!(!is_event_line("09:60 ミルク 100ml"));
    assert!(!is_event_line(" 09:15 ミルク 100ml"));
    assert!(!is_event_line("09:15 おしっこ"));
    assert!(!is_event_line("ミルク合計 2回 200ml"));
}

#[test]
fn test_malformed_feeding_volume_is_a_parse_error() {
    let d = date(2024, 3, 10);

    for line in ["09:15 ミルク abcml", "09:15 ミルク", "09:15 ミルク -5ml"] {
        let err = parse_event_line(line, d).unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }), "{line}: {err}");
    }
}

#[test]
fn test_line_without_label_token_is_a_parse_error() {
    let line = "09:15ミルク";
    assert!(is_event_line(line));
    assert!(matches!(
        parse_event_line(line, date(2024, 3, 10)),
        Err(AppError::Parse { .. })
    ));

    let text = "【ぴよログ】2024/03/10(日)\n09:15ミルク\n";
    assert!(matches!(
        extract(&[text], Dialect::Daily),
        Err(AppError::Parse { .. })
    ));
}

#[test]
fn test_invalid_clock_token_is_a_parse_error() {
    let err = parse_event_line("09:155 ミルク 100ml", date(2024, 3, 10)).unwrap_err();
    assert!(matches!(err, AppError::Parse { .. }));
}

#[test]
fn test_parse_error_aborts_extraction() {
    let text = "【ぴよログ】2024/03/10(日)\n09:15 ミルク たくさん\n";
    assert!(matches!(
        extract(&[text], Dialect::Daily),
        Err(AppError::Parse { .. })
    ));
}

#[test]
fn test_header_parsing() {
    assert_eq!(
        parse_header("【ぴよログ】2024/03/10(日)", 6, "x").unwrap(),
        date(2024, 3, 10)
    );
    assert_eq!(
        parse_header("2024/03/11(月)", 0, "x").unwrap(),
        date(2024, 3, 11)
    );
    // BOM and trailing blanks are tolerated
    assert_eq!(
        parse_header("\u{feff}【ぴよログ】2024/03/10(日)  ", 6, "x").unwrap(),
        date(2024, 3, 10)
    );
}

#[test]
fn test_bad_daily_header_is_a_format_error() {
    let err = extract_blob("hello\n09:15 ミルク 120ml\n", Dialect::Daily, "day.txt").unwrap_err();
    match err {
        AppError::Format { source_name, .. } => assert_eq!(source_name, "day.txt"),
        other => panic!("unexpected error: {other}"),
    }

    let err = extract(&["【ぴよログ】2024/13/40(日)\n"], Dialect::Daily).unwrap_err();
    assert!(matches!(err, AppError::Format { .. }));
}

#[test]
fn test_bad_monthly_header_is_a_format_error() {
    let text = "----------\n2024年3月10日(日)\n09:15 ミルク 120ml\n";
    assert!(matches!(
        extract(&[text], Dialect::Monthly),
        Err(AppError::Format { .. })
    ));
}

#[test]
fn test_event_before_any_header_is_a_format_error() {
    let text = "09:15 ミルク 120ml\n----------\n2024/03/10(日)\n";
    assert!(matches!(
        extract(&[text], Dialect::Monthly),
        Err(AppError::Format { .. })
    ));
}

#[test]
fn test_daily_export_read_as_monthly_yields_nothing_dated() {
    // no delimiter means no date: the first event line fails
    assert!(extract(&[DAILY_EXPORT_12], Dialect::Monthly).is_err());
}

#[test]
fn test_cursor_state_machine() {
    let mut cursor = HeaderCursor::new(Dialect::Monthly);
    assert_eq!(cursor.current(), None);

    cursor.advance(0, "----------", Some("2024/03/10(日)"), "x").unwrap();
    assert_eq!(cursor.current(), Some(date(2024, 3, 10)));

    // ordinary lines leave the date alone
    cursor.advance(1, "09:15 ミルク 120ml", None, "x").unwrap();
    assert_eq!(cursor.current(), Some(date(2024, 3, 10)));

    let mut daily = HeaderCursor::new(Dialect::Daily);
    daily.advance(0, "【ぴよログ】2024/03/12(火)", None, "x").unwrap();
    daily.advance(1, "----------", Some("2024/03/20(水)"), "x").unwrap();
    assert_eq!(daily.current(), Some(date(2024, 3, 12)));
}

#[test]
fn test_named_sources_match_unnamed_extraction() {
    let named = extract_named(
        [("2024-03-12.txt", DAILY_EXPORT_12), ("2024-03-13.txt", DAILY_EXPORT_13)],
        Dialect::Daily,
    )
    .unwrap();
    let unnamed = extract(&[DAILY_EXPORT_12, DAILY_EXPORT_13], Dialect::Daily).unwrap();
    assert_eq!(named, unnamed);

    let err = extract_named([("broken.txt", "【ぴよログ】2024/13/40(日)\n")], Dialect::Daily)
        .unwrap_err();
    assert!(err.to_string().contains("broken.txt"), "{err}");

    let err = extract(&[DAILY_EXPORT_12, "【ぴよログ】bad(日)\n"], Dialect::Daily).unwrap_err();
    assert!(err.to_string().contains("input #2"), "{err}");
}
