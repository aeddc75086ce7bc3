// Rust guideline compliant 2026-10-12

//! Tests for the provider week and month views.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use glowbook_core::calendar::{BlockMetrics, DAYS_PER_WEEK, HOURS_PER_DAY, MONTH_GRID_CELLS};
use glowbook_core::{
    Booking, BookingStatus, CalendarAggregator, DefaultPalette, PriceQuote, StatusColor,
};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn booking_at(day: NaiveDate, hour: u32, minute: u32, duration: u32, status: BookingStatus) -> Booking {
    let mut booking = Booking::new(
        "user-1".to_string(),
        "provider-1".to_string(),
        "svc-1".to_string(),
        day,
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        duration,
        date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
    );
    booking.apply_quote(&PriceQuote::regular(50));
    booking.status = status;
    booking
}

fn aggregator() -> CalendarAggregator {
    CalendarAggregator::new(DefaultPalette, BlockMetrics::default())
}

#[test]
fn test_week_view_shape() {
    let view = aggregator().week_view(&[], date(2024, 1, 17)).unwrap();

    assert_eq!(view.start, date(2024, 1, 14));
    assert_eq!(view.start.weekday(), Weekday::Sun);
    assert_eq!(view.days.len(), DAYS_PER_WEEK);
    for (index, day) in view.days.iter().enumerate() {
        assert_eq!(day.index, index);
        assert_eq!(day.date, view.start + Duration::days(index as i64));
        assert_eq!(day.hours.len(), HOURS_PER_DAY);
        assert_eq!(day.booking_count(), 0);
    }
}

#[test]
fn test_week_view_places_blocks() {
    let bookings = vec![
        booking_at(date(2024, 1, 17), 14, 30, 90, BookingStatus::Confirmed),
        booking_at(date(2024, 1, 17), 14, 0, 15, BookingStatus::Pending),
        booking_at(date(2024, 1, 20), 9, 0, 60, BookingStatus::Completed),
        // Outside the week.
        booking_at(date(2024, 1, 21), 9, 0, 60, BookingStatus::Pending),
        booking_at(date(2024, 1, 13), 9, 0, 60, BookingStatus::Pending),
    ];

    let view = aggregator().week_view(&bookings, date(2024, 1, 17)).unwrap();
    let total: usize = view.days.iter().map(|d| d.booking_count()).sum();
    assert_eq!(total, 3);

    let wednesday = &view.days[3];
    let blocks = &wednesday.hours[14].blocks;
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    assert_eq!(blocks[0].color, StatusColor::Warning);
    assert_eq!(blocks[0].height, 20, "short bookings use the minimum height");
    assert_eq!(blocks[1].color, StatusColor::Primary);
    assert_eq!(blocks[1].height, 90);

    let saturday = &view.days[6];
    assert_eq!(saturday.hours[9].blocks[0].color, StatusColor::Success);
}

#[test]
fn test_month_view_january_2024() {
    let bookings = vec![
        booking_at(date(2024, 1, 15), 10, 0, 60, BookingStatus::Cancelled),
        booking_at(date(2024, 1, 15), 9, 0, 60, BookingStatus::NoShow),
        booking_at(date(2024, 2, 1), 9, 0, 60, BookingStatus::Pending),
    ];

    let view = aggregator().month_view(&bookings, date(2024, 1, 20)).unwrap();
    assert_eq!((view.year, view.month), (2024, 1));
    assert_eq!(view.cells.len(), MONTH_GRID_CELLS);
    assert_eq!(view.weeks().count(), 6);

    // 2024-01-01 is a Monday, so the grid starts on Sunday 2023-12-31.
    assert_eq!(view.cells[0].date, date(2023, 12, 31));
    assert!(!view.cells[0].is_current_month);
    assert!(view.cells[1].is_current_month);

    let fifteenth = view.cells.iter().find(|c| c.date == date(2024, 1, 15)).unwrap();
    assert_eq!(fifteenth.booking_count, 2);
    assert_eq!(
        fifteenth.indicators,
        vec![StatusColor::Neutral, StatusColor::Error],
        "indicators follow start time"
    );

    let padding = view.cells.iter().find(|c| c.date == date(2024, 2, 1)).unwrap();
    assert!(!padding.is_current_month);
    assert_eq!(padding.booking_count, 1);
}

#[test]
fn test_custom_palette() {
    let mono = CalendarAggregator::new(|_: BookingStatus| StatusColor::Neutral, BlockMetrics::default());
    let bookings = vec![booking_at(date(2024, 1, 17), 10, 0, 60, BookingStatus::Confirmed)];
    let view = mono.week_view(&bookings, date(2024, 1, 17)).unwrap();
    assert_eq!(view.days[3].hours[10].blocks[0].color, StatusColor::Neutral);
}

fn arb_status() -> impl Strategy<Value = BookingStatus> {
    prop_oneof![
        Just(BookingStatus::Pending),
        Just(BookingStatus::Confirmed),
        Just(BookingStatus::Completed),
        Just(BookingStatus::Cancelled),
        Just(BookingStatus::NoShow),
    ]
}

fn arb_bookings() -> impl Strategy<Value = Vec<Booking>> {
    proptest::collection::vec(
        (0i64..90, 0u32..24, 0u32..60, 1u32..240, arb_status()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(offset, hour, minute, duration, status)| {
                booking_at(date(2024, 1, 1) + Duration::days(offset), hour, minute, duration, status)
            })
            .collect()
    })
}

proptest! {
    /// Month grids always have 42 cells and count every booking that falls inside them.
    #[test]
    fn prop_month_grid_counts(bookings in arb_bookings(), offset in 0i64..90) {
        let reference = date(2024, 1, 1) + Duration::days(offset);
        let view = aggregator().month_view(&bookings, reference).unwrap();

        prop_assert_eq!(view.cells.len(), MONTH_GRID_CELLS);
        prop_assert_eq!(view.cells[0].date.weekday(), Weekday::Sun);
        for pair in view.cells.windows(2) {
            prop_assert_eq!(pair[0].date + Duration::days(1), pair[1].date);
        }
        let first = view.cells[0].date;
        let last = view.cells[MONTH_GRID_CELLS - 1].date;
        let inside = bookings.iter().filter(|b| b.date >= first && b.date <= last).count();
        let counted: usize = view.cells.iter().map(|c| c.booking_count).sum();
        prop_assert_eq!(counted, inside);
        for cell in &view.cells {
            prop_assert_eq!(cell.booking_count, cell.indicators.len());
        }
    }

    /// Views do not depend on the order bookings are supplied in.
    #[test]
    fn prop_views_are_order_independent(bookings in arb_bookings(), offset in 0i64..90) {
        let reference = date(2024, 1, 1) + Duration::days(offset);
        let mut reversed = bookings.clone();
        reversed.reverse();

        let agg = aggregator();
        let week_a = serde_json::to_string(&agg.week_view(&bookings, reference).unwrap()).unwrap();
        let week_b = serde_json::to_string(&agg.week_view(&reversed, reference).unwrap()).unwrap();
        prop_assert_eq!(week_a, week_b);

        let month_a = serde_json::to_string(&agg.month_view(&bookings, reference).unwrap()).unwrap();
        let month_b = serde_json::to_string(&agg.month_view(&reversed, reference).unwrap()).unwrap();
        prop_assert_eq!(month_a, month_b);
    }

    /// Every block sits in the bucket of its start hour and respects the height floor.
    #[test]
    fn prop_week_blocks_bucketed(bookings in arb_bookings(), offset in 0i64..90) {
        let reference = date(2024, 1, 1) + Duration::days(offset);
        let metrics = BlockMetrics::default();
        let view = aggregator().week_view(&bookings, reference).unwrap();

        for day in &view.days {
            for bucket in &day.hours {
                for block in &bucket.blocks {
                    prop_assert_eq!(chrono::Timelike::hour(&block.time), bucket.hour);
                    prop_assert!(block.height >= metrics.min_block_height);
                    prop_assert_eq!(block.height, metrics.block_height(block.duration_minutes));
                }
            }
        }
    }
}

#[test]
fn test_views_at_date_range_edges() {
    let agg = aggregator();

    // The grid for the last representable month runs into the following year.
    assert!(agg.month_view(&[], NaiveDate::MAX).is_none());

    for reference in [NaiveDate::MIN, NaiveDate::MAX] {
        if let Some(view) = agg.week_view(&[], reference) {
            assert_eq!(view.days.len(), DAYS_PER_WEEK);
        }
        if let Some(view) = agg.month_view(&[], reference) {
            assert_eq!(view.cells.len(), MONTH_GRID_CELLS);
        }
    }

    let near_end = NaiveDate::MAX - Duration::days(400);
    assert_eq!(agg.week_view(&[], near_end).unwrap().days.len(), DAYS_PER_WEEK);
    assert_eq!(agg.month_view(&[], near_end).unwrap().cells.len(), MONTH_GRID_CELLS);
}
