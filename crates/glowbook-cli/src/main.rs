// Rust guideline compliant 2026-10-12

//! Glowbook CLI Application
//!
//! Command-line interface for booking beauty services, managing the booking
//! lifecycle, rating completed visits, and viewing provider calendars.

use anyhow::Result;
use clap::Parser;
use glowbook_app::{resolve_now, ListOptions, RepoContext};
use glowbook_cli::commands::{self, book::BookArgs, calendar::CalendarScope, ActorArgs};
use glowbook_cli::logging::{init_tracing, parse_log_level};
use glowbook_cli::terminal::print_error;
use glowbook_cli::{create_formatter, should_use_color, OutputFormatter};
use glowbook_core::{BookingStatus, Money, ProviderProfile};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "glow",
    version,
    about = "Glowbook: booking lifecycle and scheduling for beauty services",
    after_help = "Examples:\n  glow init\n  glow catalog add-provider prov-ana --name Ana --premium --emergency\n  glow catalog add-service svc-gel --provider prov-ana --price 80 --minutes 60\n  glow slots\n  glow book --user user-1 --provider prov-ana --service svc-gel --date 2024-01-15 --time 14:00 --emergency --reason \"Wedding today\"\n  glow confirm bkg-abc12345 --provider prov-ana\n  glow calendar week --provider prov-ana --offset 1\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Treat this local time as "now" (YYYY-MM-DDTHH:MM)
    #[arg(long, global = true)]
    at: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Glowbook repository
    Init,

    /// List emergency slots offered now
    Slots,

    /// Show the price of a service
    Quote {
        /// Service ID
        service: String,

        /// Include the emergency markup
        #[arg(long)]
        emergency: bool,
    },

    /// Book a service
    Book {
        /// Client making the booking
        #[arg(long)]
        user: String,

        /// Provider to book
        #[arg(long)]
        provider: String,

        /// Service to book
        #[arg(long)]
        service: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: String,

        /// Book an urgent slot
        #[arg(long)]
        emergency: bool,

        /// Why the slot is urgent
        #[arg(long)]
        reason: Option<String>,

        /// Notes for the provider
        #[arg(long)]
        notes: Option<String>,
    },

    /// List your bookings
    List {
        #[command(flatten)]
        actor: ActorArgs,

        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Only urgent bookings
        #[arg(long)]
        emergency: bool,
    },

    /// Show a booking
    Show {
        /// Booking ID
        id: String,

        #[command(flatten)]
        actor: ActorArgs,
    },

    /// Confirm a pending booking
    Confirm {
        /// Booking ID
        id: String,

        #[command(flatten)]
        actor: ActorArgs,
    },

    /// Mark a confirmed booking as completed
    Complete {
        /// Booking ID
        id: String,

        #[command(flatten)]
        actor: ActorArgs,
    },

    /// Mark a confirmed booking as a no-show
    NoShow {
        /// Booking ID
        id: String,

        #[command(flatten)]
        actor: ActorArgs,
    },

    /// Cancel a booking
    Cancel {
        /// Booking ID
        id: String,

        #[command(flatten)]
        actor: ActorArgs,

        /// Why the booking is cancelled
        #[arg(long)]
        reason: Option<String>,
    },

    /// Move a pending booking
    Reschedule {
        /// Booking ID
        id: String,

        #[command(flatten)]
        actor: ActorArgs,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// New time (HH:MM)
        #[arg(long)]
        time: String,
    },

    /// Rate a booking
    Review {
        /// Booking ID
        booking_id: String,

        /// Reviewing client
        #[arg(long)]
        user: String,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: u8,

        /// Optional comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// Change your review of a booking
    EditReview {
        /// Booking ID
        booking_id: String,

        /// Reviewing client
        #[arg(long)]
        user: String,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: u8,

        /// Optional comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// Show whether a booking can be rated
    ReviewState {
        /// Booking ID
        booking_id: String,

        #[command(flatten)]
        actor: ActorArgs,
    },

    /// List a provider's reviews
    Reviews {
        /// Provider ID
        #[arg(long)]
        provider: String,
    },

    /// Reply to the review of a booking
    Respond {
        /// Booking ID
        booking_id: String,

        /// Reviewed provider
        #[arg(long)]
        provider: String,

        /// Reply text
        text: String,
    },

    /// Show a provider's calendar
    Calendar {
        #[command(subcommand)]
        view: CalendarView,
    },

    /// Manage providers and services
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CalendarView {
    /// Sunday-first week view
    Week(CalendarArgs),

    /// Month grid
    Month(CalendarArgs),
}

#[derive(Debug, clap::Args)]
struct CalendarArgs {
    /// Provider ID
    #[arg(long)]
    provider: String,

    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Shift by this many weeks or months
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i32,
}

#[derive(Debug, clap::Subcommand)]
enum CatalogAction {
    /// Show providers and services
    List,

    /// Add or replace a provider
    AddProvider {
        /// Provider ID
        id: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Premium subscription active
        #[arg(long)]
        premium: bool,

        /// Accepts urgent bookings
        #[arg(long)]
        emergency: bool,
    },

    /// Add or replace a service
    AddService {
        /// Service ID
        id: String,

        /// Provider offering the service
        #[arg(long)]
        provider: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Price before markup
        #[arg(long)]
        price: Money,

        /// Length in minutes
        #[arg(long)]
        minutes: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match parse_log_level(&cli.log_level) {
        Ok(level) => init_tracing(level, cli.log_json),
        Err(err) => {
            eprintln!("{:#}", err);
            return ExitCode::FAILURE;
        }
    }

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => configured_format(cli.root.as_deref()),
    };
    let formatter = create_formatter(format, use_color);

    match run(cli.command, cli.root.as_deref(), cli.at.as_deref(), formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %format!("{:#}", err), "command failed");
            match format {
                "json" => println!("{}", formatter.format_error(&err)),
                "table" if use_color => print_error(&format!("{:#}", err)),
                _ => eprintln!("{}", formatter.format_error(&err)),
            }
            ExitCode::FAILURE
        }
    }
}

/// Output format from `config.toml`, or table when there is no repository.
fn configured_format(root: Option<&Path>) -> &'static str {
    let config = RepoContext::discover(root).and_then(|repo| repo.load_config());
    match config.map(|config| config.output_format) {
        Ok(glowbook_core::OutputFormat::Json) => "json",
        Ok(glowbook_core::OutputFormat::Plain) => "plain",
        _ => "table",
    }
}

fn run(
    command: Commands,
    root: Option<&Path>,
    at: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let now = resolve_now(at)?;

    match command {
        Commands::Init => commands::init::execute(root),
        Commands::Slots => commands::slots::execute(root, now, formatter),
        Commands::Quote { service, emergency } => {
            commands::quote::execute(root, &service, emergency, formatter)
        }
        Commands::Book {
            user,
            provider,
            service,
            date,
            time,
            emergency,
            reason,
            notes,
        } => {
            let args = BookArgs {
                user,
                provider,
                service,
                date,
                time,
                emergency,
                reason,
                notes,
            };
            commands::book::execute(root, args, now, formatter)
        }
        Commands::List {
            actor,
            status,
            from,
            to,
            emergency,
        } => {
            let options = ListOptions {
                status,
                from,
                to,
                emergency_only: emergency,
            };
            commands::list::execute(root, &actor, &options, formatter)
        }
        Commands::Show { id, actor } => commands::show::execute(root, &actor, &id, formatter),
        Commands::Confirm { id, actor } => commands::status::execute(
            root,
            &actor,
            &id,
            BookingStatus::Confirmed,
            None,
            now,
            formatter,
        ),
        Commands::Complete { id, actor } => commands::status::execute(
            root,
            &actor,
            &id,
            BookingStatus::Completed,
            None,
            now,
            formatter,
        ),
        Commands::NoShow { id, actor } => commands::status::execute(
            root,
            &actor,
            &id,
            BookingStatus::NoShow,
            None,
            now,
            formatter,
        ),
        Commands::Cancel { id, actor, reason } => commands::status::execute(
            root,
            &actor,
            &id,
            BookingStatus::Cancelled,
            reason,
            now,
            formatter,
        ),
        Commands::Reschedule {
            id,
            actor,
            date,
            time,
        } => commands::reschedule::execute(root, &actor, &id, &date, &time, now, formatter),
        Commands::Review {
            booking_id,
            user,
            rating,
            comment,
        } => {
            let args = commands::review::RatingArgs {
                booking_id,
                user,
                rating,
                comment,
            };
            commands::review::submit(root, args, now, formatter)
        }
        Commands::EditReview {
            booking_id,
            user,
            rating,
            comment,
        } => {
            let args = commands::review::RatingArgs {
                booking_id,
                user,
                rating,
                comment,
            };
            commands::review::edit(root, args, now, formatter)
        }
        Commands::ReviewState { booking_id, actor } => {
            commands::review::state(root, &actor, &booking_id, now, formatter)
        }
        Commands::Reviews { provider } => commands::review::list(root, &provider, formatter),
        Commands::Respond {
            booking_id,
            provider,
            text,
        } => commands::review::respond(root, &provider, &booking_id, text, now, formatter),
        Commands::Calendar { view } => {
            let (scope, args) = match view {
                CalendarView::Week(args) => (CalendarScope::Week, args),
                CalendarView::Month(args) => (CalendarScope::Month, args),
            };
            commands::calendar::execute(
                root,
                &args.provider,
                scope,
                args.date.as_deref(),
                args.offset,
                now,
                formatter,
            )
        }
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(root, formatter),
            CatalogAction::AddProvider {
                id,
                name,
                premium,
                emergency,
            } => commands::catalog::add_provider(
                root,
                ProviderProfile {
                    id,
                    name: name.unwrap_or_default(),
                    is_premium: premium,
                    accepts_emergency: emergency,
                },
            ),
            CatalogAction::AddService {
                id,
                provider,
                name,
                price,
                minutes,
            } => commands::catalog::add_service(root, &id, &provider, name, price, minutes),
        },
    }
}
