use crate::core::calculator::overlaps::NO_OVERLAP_MESSAGE;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ViewData;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{color_for_sleep_hours, color_for_status, paint};
use crate::utils::hours2readable;
use crate::utils::time::format_timestamp;

pub fn handle_minutes(core: &Core, limit: Option<usize>) -> AppResult<()> {
    let minutes = core.sleep_by_minute()?;

    let headers = ["timestamp", "status", "awake"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = minutes
        .iter()
        .map(|m| {
            let color = color_for_status(m.status.is_awake());
            vec![
                format_timestamp(&m.timestamp),
                paint(m.status.as_str(), color),
                format!("{:.1}", m.awake),
            ]
        })
        .collect();

    super::print_rows("Sleep by minute", headers, rows, limit);
    Ok(())
}

pub fn handle_nights(core: &Core) -> AppResult<()> {
    let nights = core.sleep_by_night()?;

    let headers = ["night", "hours", "sleep", "month", "week"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = nights
        .iter()
        .map(|n| {
            let hours = n.inner.sleep_hours;
            vec![
                n.inner.night_date.to_string(),
                paint(&format!("{hours:.2}"), color_for_sleep_hours(hours)),
                hours2readable(hours),
                n.month.to_string(),
                n.week.to_string(),
            ]
        })
        .collect();

    let title = format!(
        "Sleep by night (weeks from {})",
        core.aggregator().reference()
    );
    super::print_rows(&title, headers, rows, None);
    Ok(())
}

pub fn handle_overlaps(core: &Core) -> AppResult<()> {
    match core.overlaps()? {
        None => success(NO_OVERLAP_MESSAGE),
        Some(overlaps) => {
            warning(format!("{} overlapping sleep session(s)", overlaps.len()));
            super::print_view("Overlaps", &ViewData::Overlaps(overlaps), None);
        }
    }
    Ok(())
}
