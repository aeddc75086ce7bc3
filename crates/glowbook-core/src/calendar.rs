// Rust guideline compliant 2026-10-12

//! Provider calendar views.
//!
//! Both views are pure functions of a booking slice and a reference date.
//! Status colors come from a [`StatusPalette`], so presentation code owns the
//! mapping while the aggregator only asks for a color per status.

use crate::{Booking, BookingStatus};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Days in a week view.
pub const DAYS_PER_WEEK: usize = 7;

/// Hour buckets per day.
pub const HOURS_PER_DAY: usize = 24;

/// Cells in a month grid (six full weeks).
pub const MONTH_GRID_CELLS: usize = 42;

/// Semantic color used to render a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    /// Pending.
    Warning,
    /// Confirmed.
    Primary,
    /// Completed.
    Success,
    /// Cancelled.
    Error,
    /// No-show.
    Neutral,
}

/// Maps a booking status to its display color.
pub trait StatusPalette {
    /// Returns the color for `status`.
    fn color(&self, status: BookingStatus) -> StatusColor;
}

/// The standard status-to-color table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPalette;

impl StatusPalette for DefaultPalette {
    fn color(&self, status: BookingStatus) -> StatusColor {
        match status {
            BookingStatus::Pending => StatusColor::Warning,
            BookingStatus::Confirmed => StatusColor::Primary,
            BookingStatus::Completed => StatusColor::Success,
            BookingStatus::Cancelled => StatusColor::Error,
            BookingStatus::NoShow => StatusColor::Neutral,
        }
    }
}

impl<F> StatusPalette for F
where
    F: Fn(BookingStatus) -> StatusColor,
{
    fn color(&self, status: BookingStatus) -> StatusColor {
        self(status)
    }
}

/// Pixel geometry for week-view blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetrics {
    /// Height of one hour row.
    pub hour_height: u32,
    /// Smallest height a block is drawn with.
    pub min_block_height: u32,
}

impl BlockMetrics {
    /// Height for a booking of `duration_minutes`, never below the floor.
    pub fn block_height(&self, duration_minutes: u32) -> u32 {
        let proportional =
            u64::from(duration_minutes) * u64::from(self.hour_height) / 60;
        let proportional = u32::try_from(proportional).unwrap_or(u32::MAX);
        proportional.max(self.min_block_height)
    }
}

impl Default for BlockMetrics {
    fn default() -> Self {
        Self {
            hour_height: 60,
            min_block_height: 20,
        }
    }
}

/// One booking drawn in the week view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarBlock {
    /// Booking ID.
    pub booking_id: String,
    /// Start time.
    pub time: NaiveTime,
    /// Length in minutes.
    pub duration_minutes: u32,
    /// Current status.
    pub status: BookingStatus,
    /// Status color.
    pub color: StatusColor,
    /// Rendered height in pixels.
    pub height: u32,
    /// Whether the booking is urgent.
    pub is_emergency: bool,
}

/// Bookings starting within one hour of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    /// Hour of day, 0..=23.
    pub hour: u32,
    /// Bookings stacked in this hour, ordered by start time then ID.
    pub blocks: Vec<CalendarBlock>,
}

/// One column of the week view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    /// Day index, 0 = Sunday.
    pub index: usize,
    /// Calendar date.
    pub date: NaiveDate,
    /// 24 hour buckets.
    pub hours: Vec<HourBucket>,
}

impl WeekDay {
    /// Total bookings on this day.
    pub fn booking_count(&self) -> usize {
        self.hours.iter().map(|h| h.blocks.len()).sum()
    }
}

/// A Sunday-first week of a provider's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    /// Sunday starting the week.
    pub start: NaiveDate,
    /// Exactly seven days.
    pub days: Vec<WeekDay>,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCell {
    /// Calendar date.
    pub date: NaiveDate,
    /// False for padding dates from adjacent months.
    pub is_current_month: bool,
    /// Bookings on this date.
    pub booking_count: usize,
    /// One color per booking, ordered by start time then ID.
    pub indicators: Vec<StatusColor>,
}

/// A six-week grid covering one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    /// Year of the displayed month.
    pub year: i32,
    /// Displayed month, 1..=12.
    pub month: u32,
    /// Exactly 42 cells, Sunday-first rows.
    pub cells: Vec<MonthCell>,
}

impl MonthView {
    /// Splits the grid into its six weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// Builds week and month views of a provider's bookings.
#[derive(Debug, Clone, Default)]
pub struct CalendarAggregator<P = DefaultPalette> {
    palette: P,
    metrics: BlockMetrics,
}

impl<P: StatusPalette> CalendarAggregator<P> {
    /// Creates an aggregator with a palette and block geometry.
    pub fn new(palette: P, metrics: BlockMetrics) -> Self {
        Self { palette, metrics }
    }

    /// Builds the week containing `reference`.
    ///
    /// Bookings outside the week are ignored. Returns `None` when the week
    /// extends past the representable date range.
    pub fn week_view(&self, bookings: &[Booking], reference: NaiveDate) -> Option<WeekView> {
        let start = week_start(reference)?;
        let mut days = (0..DAYS_PER_WEEK)
            .map(|index| {
                Some(WeekDay {
                    index,
                    date: start.checked_add_days(Days::new(index as u64))?,
                    hours: (0..HOURS_PER_DAY as u32)
                        .map(|hour| HourBucket {
                            hour,
                            blocks: Vec::new(),
                        })
                        .collect(),
                })
            })
            .collect::<Option<Vec<WeekDay>>>()?;

        for booking in sorted(bookings) {
            let offset = (booking.date - start).num_days();
            let Ok(index) = usize::try_from(offset) else {
                continue;
            };
            let Some(day) = days.get_mut(index) else {
                continue;
            };
            let hour = booking.time.hour() as usize;
            day.hours[hour].blocks.push(CalendarBlock {
                booking_id: booking.id.clone(),
                time: booking.time,
                duration_minutes: booking.duration_minutes,
                status: booking.status,
                color: self.palette.color(booking.status),
                height: self.metrics.block_height(booking.duration_minutes),
                is_emergency: booking.is_emergency,
            });
        }

        Some(WeekView { start, days })
    }

    /// Builds the month grid containing `reference`.
    ///
    /// Padding cells from adjacent months also carry their bookings. Returns
    /// `None` when the grid extends past the representable date range.
    pub fn month_view(&self, bookings: &[Booking], reference: NaiveDate) -> Option<MonthView> {
        let first = reference.with_day(1).unwrap_or(reference);
        let grid_start = week_start(first)?;

        let mut cells = (0..MONTH_GRID_CELLS)
            .map(|offset| {
                let date = grid_start.checked_add_days(Days::new(offset as u64))?;
                Some(MonthCell {
                    date,
                    is_current_month: date.year() == first.year() && date.month() == first.month(),
                    booking_count: 0,
                    indicators: Vec::new(),
                })
            })
            .collect::<Option<Vec<MonthCell>>>()?;

        for booking in sorted(bookings) {
            let offset = (booking.date - grid_start).num_days();
            let Some(cell) = usize::try_from(offset).ok().and_then(|i| cells.get_mut(i)) else {
                continue;
            };
            cell.booking_count += 1;
            cell.indicators.push(self.palette.color(booking.status));
        }

        Some(MonthView {
            year: first.year(),
            month: first.month(),
            cells,
        })
    }
}

/// Sunday on or before `date`, or `None` before the first representable Sunday.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

/// Moves a week-view reference date by `weeks` (negative goes back).
pub fn shift_weeks(reference: NaiveDate, weeks: i32) -> NaiveDate {
    let days = Days::new(u64::from(weeks.unsigned_abs()) * DAYS_PER_WEEK as u64);
    let shifted = if weeks >= 0 {
        reference.checked_add_days(days)
    } else {
        reference.checked_sub_days(days)
    };
    shifted.unwrap_or(reference)
}

/// Moves a month-view reference date by `months`, clamping the day to the
/// last valid day of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(reference: NaiveDate, months: i32) -> NaiveDate {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        reference.checked_add_months(delta)
    } else {
        reference.checked_sub_months(delta)
    };
    shifted.unwrap_or(reference)
}

fn sorted(bookings: &[Booking]) -> Vec<&Booking> {
    let mut ordered: Vec<&Booking> = bookings.iter().collect();
    ordered.sort_by(|a, b| {
        (a.date, a.time, a.id.as_str()).cmp(&(b.date, b.time, b.id.as_str()))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-17 is a Wednesday.
        assert_eq!(week_start(date(2024, 1, 17)), Some(date(2024, 1, 14)));
        assert_eq!(week_start(date(2024, 1, 14)), Some(date(2024, 1, 14)));
        assert_eq!(week_start(date(2024, 1, 20)), Some(date(2024, 1, 14)));
    }

    #[test]
    fn block_height_floor() {
        let metrics = BlockMetrics::default();
        assert_eq!(metrics.block_height(60), 60);
        assert_eq!(metrics.block_height(90), 90);
        assert_eq!(metrics.block_height(15), 20);
        assert_eq!(metrics.block_height(0), 20);
    }

    #[test]
    fn closures_work_as_palettes() {
        let mono = |_: BookingStatus| StatusColor::Neutral;
        assert_eq!(mono.color(BookingStatus::Pending), StatusColor::Neutral);
    }

    #[test]
    fn month_shift_clamps_day() {
        assert_eq!(shift_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_months(date(2023, 3, 31), -1), date(2023, 2, 28));
        assert_eq!(shift_months(date(2024, 12, 15), 1), date(2025, 1, 15));
    }

    #[test]
    fn week_shift_moves_seven_days() {
        assert_eq!(shift_weeks(date(2024, 1, 17), 1), date(2024, 1, 24));
        assert_eq!(shift_weeks(date(2024, 1, 17), -1), date(2024, 1, 10));
        assert_eq!(shift_weeks(date(2024, 1, 17), 0), date(2024, 1, 17));
    }
}
