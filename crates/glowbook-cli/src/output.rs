// Rust guideline compliant 2026-10-12

//! Output formatting module for the Glowbook CLI.
//!
//! This module provides functionality for formatting bookings, slots,
//! reviews, and calendars in various output formats (JSON, table, plain text).

use crate::terminal::{paint, wrap_text, TerminalPalette};
use glowbook_app::{AppError, ErrorCode, ErrorEnvelope, ServiceQuote, SuccessEnvelope};
use glowbook_core::calendar::DAYS_PER_WEEK;
use glowbook_core::{Booking, Catalog, MonthView, RatingState, Review, Slot, WeekView};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Output formatter trait.
///
/// Defines the interface for formatting Glowbook data in different output formats.
pub trait OutputFormatter {
    /// Formats a single booking with all of its fields.
    fn format_booking(&self, booking: &Booking) -> String;

    /// Formats a list of bookings.
    fn format_bookings(&self, bookings: &[Booking]) -> String;

    /// Formats the offered emergency slots.
    fn format_slots(&self, slots: &[Slot]) -> String;

    /// Formats a price quote for a service.
    fn format_quote(&self, quote: &ServiceQuote) -> String;

    /// Formats a single review.
    fn format_review(&self, review: &Review) -> String;

    /// Formats a list of reviews.
    fn format_reviews(&self, reviews: &[Review]) -> String;

    /// Formats whether a booking can be rated.
    fn format_rating_state(&self, booking_id: &str, state: RatingState) -> String;

    /// Formats a provider's week.
    fn format_week(&self, view: &WeekView) -> String;

    /// Formats a provider's month grid.
    fn format_month(&self, view: &MonthView) -> String;

    /// Formats the provider and service catalog.
    fn format_catalog(&self, catalog: &Catalog) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps every result in the `{"status": "ok", "result": ...}` envelope and
/// every failure in the error envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(&self, result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_booking(&self, booking: &Booking) -> String {
        self.envelope(booking)
    }

    fn format_bookings(&self, bookings: &[Booking]) -> String {
        self.envelope(json!({
            "bookings": bookings,
            "total": bookings.len(),
        }))
    }

    fn format_slots(&self, slots: &[Slot]) -> String {
        self.envelope(json!({
            "slots": slots,
            "total": slots.len(),
        }))
    }

    fn format_quote(&self, quote: &ServiceQuote) -> String {
        self.envelope(quote)
    }

    fn format_review(&self, review: &Review) -> String {
        self.envelope(review)
    }

    fn format_reviews(&self, reviews: &[Review]) -> String {
        self.envelope(json!({
            "reviews": reviews,
            "total": reviews.len(),
        }))
    }

    fn format_rating_state(&self, booking_id: &str, state: RatingState) -> String {
        self.envelope(json!({
            "booking_id": booking_id,
            "state": state,
        }))
    }

    fn format_week(&self, view: &WeekView) -> String {
        self.envelope(view)
    }

    fn format_month(&self, view: &MonthView) -> String {
        self.envelope(view)
    }

    fn format_catalog(&self, catalog: &Catalog) -> String {
        self.envelope(catalog)
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let envelope = match error.downcast_ref::<AppError>() {
            Some(app_error) => ErrorEnvelope::from_error(app_error),
            None => match error.downcast_ref::<glowbook_core::Error>() {
                Some(core_error) => ErrorEnvelope::from_core(core_error),
                None => ErrorEnvelope {
                    code: ErrorCode::InvalidInput,
                    message: format!("{:#}", error),
                    details: None,
                },
            },
        };
        serde_json::to_string_pretty(&envelope)
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Table output formatter.
///
/// Formats data as human-readable tables; status text is colored outside
/// table cells only, so column widths stay exact.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn heading(&self, text: &str) -> String {
        paint(text, None, true, self.use_color)
    }
}

fn build_table(header: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn or_dash(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

fn booking_row(booking: &Booking) -> Vec<String> {
    vec![
        booking.id.clone(),
        booking.date.format("%Y-%m-%d").to_string(),
        booking.time.format("%H:%M").to_string(),
        booking.user_id.clone(),
        booking.provider_id.clone(),
        booking.service_id.clone(),
        booking.status.to_string(),
        booking.total_price.to_string(),
        if booking.is_emergency { "⚡" } else { "" }.to_string(),
    ]
}

fn month_title(view: &MonthView) -> String {
    view.cells
        .iter()
        .find(|cell| cell.is_current_month)
        .map(|cell| cell.date.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", view.year, view.month))
}

fn day_label(index: usize) -> &'static str {
    WEEKDAY_NAMES.get(index).copied().unwrap_or("?")
}

fn rating_state_label(state: RatingState) -> &'static str {
    match state {
        RatingState::NotYetRatable => "not yet ratable",
        RatingState::CanRate => "can rate",
        RatingState::AlreadyRated => "already rated",
    }
}

impl OutputFormatter for TableFormatter {
    fn format_booking(&self, booking: &Booking) -> String {
        let status = TerminalPalette.paint_status(booking.status, self.use_color);
        let mut output = format!("{} {}\n", self.heading("Booking"), booking.id);
        let rows = vec![
            ("Status", status),
            ("Client", booking.user_id.clone()),
            ("Provider", booking.provider_id.clone()),
            ("Service", booking.service_id.clone()),
            ("Date", booking.date.format("%Y-%m-%d").to_string()),
            ("Time", booking.time.format("%H:%M").to_string()),
            ("Duration", format!("{} min", booking.duration_minutes)),
            ("Base price", booking.base_price.to_string()),
            ("Markup", booking.emergency_markup.to_string()),
            ("Total", booking.total_price.to_string()),
            ("Emergency", yes_no(booking.is_emergency)),
            ("Reason", or_dash(booking.emergency_reason.as_ref())),
            ("Client notes", or_dash(booking.client_notes.as_ref())),
            ("Provider notes", or_dash(booking.provider_notes.as_ref())),
            ("Cancellation", or_dash(booking.cancellation_reason.as_ref())),
            ("Created", booking.created_at.format("%Y-%m-%d %H:%M").to_string()),
            ("Updated", booking.updated_at.format("%Y-%m-%d %H:%M").to_string()),
        ];
        for (label, value) in rows {
            output.push_str(&format!("  {:<15} {}\n", label, value));
        }
        output
    }

    fn format_bookings(&self, bookings: &[Booking]) -> String {
        if bookings.is_empty() {
            return "No bookings found.".to_string();
        }
        let header = strings(&[
            "ID", "Date", "Time", "Client", "Provider", "Service", "Status", "Total", "Urgent",
        ]);
        let rows: Vec<Vec<String>> = bookings.iter().map(booking_row).collect();
        build_table(header, rows)
    }

    fn format_slots(&self, slots: &[Slot]) -> String {
        if slots.is_empty() {
            return "No emergency slots available.".to_string();
        }
        let header = strings(&["Day", "Date", "Time"]);
        let rows: Vec<Vec<String>> = slots
            .iter()
            .map(|slot| {
                vec![
                    slot.day.to_string(),
                    slot.date.format("%Y-%m-%d").to_string(),
                    slot.time.format("%H:%M").to_string(),
                ]
            })
            .collect();
        build_table(header, rows)
    }

    fn format_quote(&self, quote: &ServiceQuote) -> String {
        let header = strings(&["Service", "Base", "Markup", "Total", "Emergency"]);
        let name = if quote.service.name.is_empty() {
            quote.service.id.clone()
        } else {
            format!("{} ({})", quote.service.name, quote.service.id)
        };
        let rows = vec![vec![
            name,
            quote.quote.base_price.to_string(),
            quote.quote.emergency_markup.to_string(),
            quote.quote.total_price.to_string(),
            yes_no(quote.quote.is_emergency),
        ]];
        build_table(header, rows)
    }

    fn format_review(&self, review: &Review) -> String {
        let mut output = format!(
            "{} {} for booking {}\n",
            self.heading("Review"),
            review.id,
            review.booking_id
        );
        output.push_str(&format!("  {:<10} {}\n", "Rating", stars(review.rating)));
        output.push_str(&format!("  {:<10} {}\n", "Client", review.user_id));
        output.push_str(&format!("  {:<10} {}\n", "Provider", review.provider_id));
        if let Some(comment) = &review.comment {
            output.push_str(&format!("  {:<10} {}\n", "Comment", wrap_text(comment, 13)));
        }
        if let Some(response) = &review.provider_response {
            output.push_str(&format!("  {:<10} {}\n", "Response", wrap_text(response, 13)));
        }
        output
    }

    fn format_reviews(&self, reviews: &[Review]) -> String {
        if reviews.is_empty() {
            return "No reviews found.".to_string();
        }
        let header = strings(&["ID", "Booking", "Client", "Rating", "Comment", "Responded"]);
        let rows: Vec<Vec<String>> = reviews
            .iter()
            .map(|review| {
                vec![
                    review.id.clone(),
                    review.booking_id.clone(),
                    review.user_id.clone(),
                    stars(review.rating),
                    or_dash(review.comment.as_ref()),
                    yes_no(review.provider_response.is_some()),
                ]
            })
            .collect();
        build_table(header, rows)
    }

    fn format_rating_state(&self, booking_id: &str, state: RatingState) -> String {
        format!("Booking {}: {}", booking_id, rating_state_label(state))
    }

    fn format_week(&self, view: &WeekView) -> String {
        let title = format!("Week of {}", view.start.format("%Y-%m-%d"));
        let mut header = vec!["Hour".to_string()];
        header.extend(
            view.days
                .iter()
                .map(|day| format!("{} {}", day_label(day.index), day.date.format("%m-%d"))),
        );

        let mut rows = Vec::new();
        for hour in 0..glowbook_core::calendar::HOURS_PER_DAY {
            let busy = view
                .days
                .iter()
                .any(|day| day.hours.get(hour).is_some_and(|b| !b.blocks.is_empty()));
            if !busy {
                continue;
            }
            let mut row = vec![format!("{:02}:00", hour)];
            for day in &view.days {
                let cell = day
                    .hours
                    .get(hour)
                    .map(|bucket| {
                        bucket
                            .blocks
                            .iter()
                            .map(|block| {
                                format!(
                                    "{} {} {}{}",
                                    block.time.format("%H:%M"),
                                    block.booking_id,
                                    block.status,
                                    if block.is_emergency { " ⚡" } else { "" }
                                )
                            })
                            .collect::<Vec<_>>()
                            .join("\n")
                    })
                    .unwrap_or_default();
                row.push(cell);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return format!("{}\nNo bookings this week.", self.heading(&title));
        }
        format!("{}\n{}", self.heading(&title), build_table(header, rows))
    }

    fn format_month(&self, view: &MonthView) -> String {
        let header = strings(&WEEKDAY_NAMES);
        let rows: Vec<Vec<String>> = view
            .weeks()
            .map(|week| {
                week.iter()
                    .map(|cell| {
                        let day = cell.date.format("%d").to_string();
                        let day = if cell.is_current_month {
                            day
                        } else {
                            format!("({})", day)
                        };
                        if cell.booking_count > 0 {
                            format!("{} [{}]", day, cell.booking_count)
                        } else {
                            day
                        }
                    })
                    .collect()
            })
            .collect();
        format!(
            "{}\n{}",
            self.heading(&month_title(view)),
            build_table(header, rows)
        )
    }

    fn format_catalog(&self, catalog: &Catalog) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", self.heading("Providers")));
        if catalog.providers.is_empty() {
            output.push_str("No providers.\n");
        } else {
            let header = strings(&["ID", "Name", "Premium", "Emergency"]);
            let rows: Vec<Vec<String>> = catalog
                .providers
                .iter()
                .map(|p| {
                    vec![
                        p.id.clone(),
                        p.name.clone(),
                        yes_no(p.is_premium),
                        yes_no(p.accepts_emergency),
                    ]
                })
                .collect();
            output.push_str(&build_table(header, rows));
            output.push('\n');
        }

        output.push_str(&format!("{}\n", self.heading("Services")));
        if catalog.services.is_empty() {
            output.push_str("No services.");
        } else {
            let header = strings(&["ID", "Provider", "Name", "Price", "Minutes"]);
            let rows: Vec<Vec<String>> = catalog
                .services
                .iter()
                .map(|s| {
                    vec![
                        s.id.clone(),
                        s.provider_id.clone(),
                        s.name.clone(),
                        s.base_price.to_string(),
                        s.duration_minutes.to_string(),
                    ]
                })
                .collect();
            output.push_str(&build_table(header, rows));
        }
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!(
            "{} {:#}",
            paint("Error:", Some(Color::Red), true, self.use_color),
            error
        )
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Plain text output formatter.
///
/// Formats data as simple, line-oriented text suitable for scripts.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_booking(&self, booking: &Booking) -> String {
        let mut output = format!(
            "{} {} {} {} {} {} {} total={}",
            booking.id,
            booking.status,
            booking.date.format("%Y-%m-%d"),
            booking.time.format("%H:%M"),
            booking.user_id,
            booking.provider_id,
            booking.service_id,
            booking.total_price
        );
        if booking.is_emergency {
            output.push_str(" emergency");
        }
        output
    }

    fn format_bookings(&self, bookings: &[Booking]) -> String {
        bookings
            .iter()
            .map(|booking| self.format_booking(booking))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_slots(&self, slots: &[Slot]) -> String {
        slots
            .iter()
            .map(|slot| {
                format!(
                    "{} {} {}",
                    slot.date.format("%Y-%m-%d"),
                    slot.time.format("%H:%M"),
                    slot.day
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_quote(&self, quote: &ServiceQuote) -> String {
        format!(
            "{} base={} markup={} total={}",
            quote.service.id,
            quote.quote.base_price,
            quote.quote.emergency_markup,
            quote.quote.total_price
        )
    }

    fn format_review(&self, review: &Review) -> String {
        let mut output = format!(
            "{} {} rating={}",
            review.id, review.booking_id, review.rating
        );
        if let Some(comment) = &review.comment {
            output.push_str(&format!(" comment={:?}", comment));
        }
        if let Some(response) = &review.provider_response {
            output.push_str(&format!(" response={:?}", response));
        }
        output
    }

    fn format_reviews(&self, reviews: &[Review]) -> String {
        reviews
            .iter()
            .map(|review| self.format_review(review))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_rating_state(&self, booking_id: &str, state: RatingState) -> String {
        format!("{} {}", booking_id, rating_state_label(state))
    }

    fn format_week(&self, view: &WeekView) -> String {
        let mut lines = Vec::new();
        for day in &view.days {
            lines.push(format!(
                "{} {} {}",
                day_label(day.index),
                day.date.format("%Y-%m-%d"),
                day.booking_count()
            ));
            for block in day.hours.iter().flat_map(|bucket| bucket.blocks.iter()) {
                lines.push(format!(
                    "  {} {} {} {}m",
                    block.time.format("%H:%M"),
                    block.booking_id,
                    block.status,
                    block.duration_minutes
                ));
            }
        }
        lines.join("\n")
    }

    fn format_month(&self, view: &MonthView) -> String {
        view.cells
            .iter()
            .filter(|cell| cell.is_current_month)
            .map(|cell| format!("{} {}", cell.date.format("%Y-%m-%d"), cell.booking_count))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_catalog(&self, catalog: &Catalog) -> String {
        let providers = catalog.providers.iter().map(|p| {
            format!(
                "provider {} premium={} emergency={}",
                p.id, p.is_premium, p.accepts_emergency
            )
        });
        let services = catalog.services.iter().map(|s| {
            format!(
                "service {} provider={} price={} minutes={}",
                s.id, s.provider_id, s.base_price, s.duration_minutes
            )
        });
        providers.chain(services).collect::<Vec<_>>().join("\n")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("error: {:#}", error)
    }
}

/// Creates an output formatter based on the specified format.
///
/// # Arguments
/// * `format` - The output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (for table format)
///
/// # Returns
/// A boxed formatter implementing the OutputFormatter trait
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
