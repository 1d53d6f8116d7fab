//! Fixed vocabulary of the piyolog text export.
//!
//! Every token the grammar keys on lives here as a constant or a lookup
//! table, so the matching rules can be audited and tested on their own.

use crate::models::category::Category;

pub const FEEDING_KEYWORD: &str = "ミルク";
pub const STOOL_KEYWORD: &str = "うんち";

/// Label keyword → category, checked in order. First hit wins, so a label
/// carrying both keywords is a stool event.
pub const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    (STOOL_KEYWORD, Category::Stool),
    (FEEDING_KEYWORD, Category::Feeding),
];

/// Unit suffix stripped from feeding volumes ("120ml").
pub const FEEDING_UNIT: &str = "ml";

/// Volume code of a stool line without a recognised annotation.
pub const STOOL_VOLUME_NORMAL: u32 = 3;

/// Annotation prefix → stool volume code.
pub const STOOL_VOLUME_MARKERS: &[(&str, u32)] = &[
    ("(多め", 4),       // more
    ("(少なめ", 2),     // less
    ("(ちょこっと", 1), // a little
];

/// Line that opens a new day in the monthly export.
pub const MONTHLY_DELIMITER: &str = "----------";

/// Width, in characters, of the "【ぴよログ】" banner on a daily export.
pub const DAILY_BANNER_CHARS: usize = 6;

/// Width, in characters, of the "(月)" weekday marker closing a header.
pub const WEEKDAY_SUFFIX_CHARS: usize = 3;

pub const HEADER_DATE_FORMAT: &str = "%Y/%m/%d";

/// True when the line mentions any category keyword.
pub fn mentions_category(line: &str) -> bool {
    CATEGORY_KEYWORDS
        .iter()
        .any(|(keyword, _)| line.contains(keyword))
}

/// Category of a label token, by substring containment.
pub fn classify(label: &str) -> Option<Category> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, category)| *category)
}

/// Volume code for the token following a stool label (if any).
pub fn stool_volume(annotation: Option<&str>) -> u32 {
    annotation
        .and_then(|token| {
            STOOL_VOLUME_MARKERS
                .iter()
                .find(|(marker, _)| token.starts_with(marker))
        })
        .map(|(_, code)| *code)
        .unwrap_or(STOOL_VOLUME_NORMAL)
}
