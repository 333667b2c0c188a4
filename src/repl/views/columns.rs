//! # Table Columns
//!
//! The fixed column set of the product table and how each cell is derived
//! from a record.

use crate::repl::models::ProductRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Gap between adjacent columns
pub const COLUMN_GAP: &str = "  ";

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Category,
    Availability,
    Price,
    Rating,
    Thumbnail,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::Category,
        Column::Availability,
        Column::Price,
        Column::Rating,
        Column::Thumbnail,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Category => "Category",
            Column::Availability => "Availability Status",
            Column::Price => "Price",
            Column::Rating => "Rating",
            Column::Thumbnail => "Thumbnail",
        }
    }

    /// Cell text for a record, before fitting to the column width
    pub fn cell(&self, record: &ProductRecord) -> String {
        match self {
            Column::Title => record.title.clone(),
            Column::Category => record.category.clone(),
            Column::Availability => availability_label(record.stock).to_string(),
            Column::Price => format_price(record.price),
            Column::Rating => record.rating.to_string(),
            Column::Thumbnail => {
                if record.thumbnail.is_empty() {
                    "-".to_string()
                } else {
                    record.thumbnail.clone()
                }
            }
        }
    }

    /// Fixed width of the column; `None` for the column that takes the rest
    fn fixed_width(&self) -> Option<usize> {
        match self {
            Column::Title => None,
            Column::Category => Some(14),
            Column::Availability => Some(19),
            Column::Price => Some(10),
            Column::Rating => Some(6),
            Column::Thumbnail => Some(22),
        }
    }
}

/// Minimum width of the title column
const MIN_TITLE_WIDTH: usize = 12;

pub fn availability_label(stock: u32) -> &'static str {
    if stock > 0 {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

/// `$` followed by the shortest decimal form of the price
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// Column widths for a table `total_width` cells wide
///
/// The title column absorbs the slack. When the table is too narrow the
/// title keeps its minimum width and the rightmost columns get clipped.
pub fn column_widths(total_width: usize) -> Vec<usize> {
    let fixed: usize = Column::ALL.iter().filter_map(|c| c.fixed_width()).sum();
    let gaps = COLUMN_GAP.len() * (Column::ALL.len() - 1);
    let title = total_width
        .saturating_sub(fixed + gaps)
        .max(MIN_TITLE_WIDTH);

    Column::ALL
        .iter()
        .map(|c| c.fixed_width().unwrap_or(title))
        .collect()
}

/// Pad or crop `text` to exactly `width` display cells
///
/// Cropped text ends with an ellipsis.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }

    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push(ELLIPSIS);
    used += 1;
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}
