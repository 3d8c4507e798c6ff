//! # Window Module
//!
//! Computes the visible slice of the monthly timeline for the 1y/2y/3y/all
//! presets, with backward paging at a half-window stride.

use crate::models::{PeriodRow, WindowBounds};
use crate::utils::{month_key, parse_year_month, shift_month};

/// Compute the visible window over a monthly timeline.
///
/// `width_months == 0` means unbounded: the whole timeline is visible and
/// panning is disabled. Otherwise the window ends `offset_months` before the
/// most recent month and spans `width_months` inclusive, with calendar-month
/// arithmetic borrowing across years. Returns `None` for an empty timeline.
pub fn compute_window(
    timeline: &[PeriodRow],
    width_months: u32,
    offset_months: u32,
) -> Option<WindowBounds> {
    let first = timeline.first()?.period.clone();
    let last = &timeline.last()?.period;

    if width_months == 0 {
        return Some(WindowBounds {
            start: first,
            end: last.clone(),
            can_go_back: false,
            can_go_forward: false,
        });
    }

    let (last_year, last_month) = parse_year_month(last)?;
    let (end_year, end_month) = shift_month(last_year, last_month, -(offset_months as i32));
    let (start_year, start_month) = shift_month(end_year, end_month, -(width_months as i32 - 1));
    let start = month_key(start_year, start_month);
    let end = month_key(end_year, end_month);

    Some(WindowBounds {
        can_go_back: first < start,
        can_go_forward: offset_months > 0,
        start,
        end,
    })
}

/// Paging step in months: half the window width, at least one month.
/// Deliberately a half-window overlap; kept for parity with the dashboard UI.
pub fn pan_stride(width_months: u32) -> u32 {
    (width_months / 2).max(1)
}

/// Offset after stepping one page toward older data.
pub fn page_back(offset_months: u32, width_months: u32) -> u32 {
    offset_months + pan_stride(width_months)
}

/// Offset after stepping one page toward newer data, clamped at 0.
pub fn page_forward(offset_months: u32, width_months: u32) -> u32 {
    offset_months.saturating_sub(pan_stride(width_months))
}
