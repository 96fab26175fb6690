pub mod config;
pub mod datasets;
pub mod export;
pub mod show;
pub mod sleep;

use crate::export::{FlatTable, ViewData};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Print a derived view as a table, optionally cut to the first `limit` rows.
pub(crate) fn print_view(title: &str, data: &ViewData, limit: Option<usize>) {
    let FlatTable { headers, rows } = data.to_table();
    print_rows(title, headers, rows, limit);
}

pub(crate) fn print_rows(
    title: &str,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    limit: Option<usize>,
) {
    let total = rows.len();
    let shown = limit.unwrap_or(total).min(total);

    let mut table = Table::new(headers);
    for row in rows.into_iter().take(shown) {
        table.add_row(row);
    }

    header(title);
    print!("{}", table.render());

    if shown < total {
        info(format!("{shown} of {total} rows shown"));
    } else {
        info(format!("{total} rows"));
    }
}
