use chrono::NaiveDate;
use piyostats::cli::commands::list::render_rows;
use piyostats::models::daily_aggregate::DailyAggregate;
use piyostats::utils::colors::{GREY, RESET, colorize_optional, strip_ansi, visible_len};
use piyostats::utils::table::{Column, Table};

#[test]
fn test_visible_len_ignores_colour_codes() {
    let grey = format!("{GREY}--{RESET}");
    assert_eq!(strip_ansi(&grey), "--");
    assert_eq!(visible_len(&grey), 2);
    assert_eq!(visible_len("ミルク"), 3);
    assert_eq!(visible_len(""), 0);
}

#[test]
fn test_coloured_cells_are_padded_like_plain_ones() {
    let mut table = Table::new(vec![Column::right("A", 5), Column::left("B", 3)]);
    table.add_row(vec![colorize_optional::<i64>(None), "x".to_string()]);
    table.add_row(vec![colorize_optional(Some(42)), "y".to_string()]);

    let out = strip_ansi(&table.render());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[1], "   -- x   ");
    assert_eq!(lines[2], "   42 y   ");
}

#[test]
fn test_rendered_rows_have_equal_visible_width() {
    let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
    let rows = vec![
        DailyAggregate {
            date: d(10),
            feeding_count: Some(2),
            feeding_volume_total: Some(200),
            stool_count: Some(1),
            stool_volume_total: Some(4),
            age_of_month: Some(1),
        },
        DailyAggregate {
            date: d(11),
            feeding_count: None,
            feeding_volume_total: None,
            stool_count: Some(2),
            stool_volume_total: Some(4),
            age_of_month: None,
        },
    ];

    let out = render_rows(&rows);
    let widths: Vec<usize> = out.lines().map(visible_len).collect();

    assert_eq!(widths.len(), 3);
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}
