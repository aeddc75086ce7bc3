// Rust guideline compliant 2026-10-12

//! Integration tests for the booking, review and calendar services.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use glowbook_app::{
    Actor, AppError, BookingPolicy, BookingRequest, BookingService, CalendarService, ErrorCode,
    ErrorEnvelope, RepoContext, ReviewService,
};
use glowbook_core::calendar::BlockMetrics;
use glowbook_core::catalog::ProviderProfile;
use glowbook_core::{
    BookingFilter, BookingRepository, BookingStatus, BookingStore, Catalog, Error as CoreError,
    RatingState, ReviewStore, ServiceInfo,
};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

const PREMIUM: &str = "prov-ana";
const BASIC: &str = "prov-bo";

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(11, 0, 0)
        .unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn catalog() -> Catalog {
    Catalog {
        providers: vec![
            ProviderProfile {
                id: PREMIUM.to_string(),
                name: "Ana Nails".to_string(),
                is_premium: true,
                accepts_emergency: true,
            },
            ProviderProfile {
                id: BASIC.to_string(),
                name: "Bo Brows".to_string(),
                is_premium: false,
                accepts_emergency: true,
            },
        ],
        services: vec![
            ServiceInfo {
                id: "svc-gel".to_string(),
                provider_id: PREMIUM.to_string(),
                name: "Gel manicure".to_string(),
                base_price: 80,
                duration_minutes: 60,
            },
            ServiceInfo {
                id: "svc-brow".to_string(),
                provider_id: BASIC.to_string(),
                name: "Brow shaping".to_string(),
                base_price: 40,
                duration_minutes: 30,
            },
        ],
    }
}

struct Fixture {
    _temp_dir: TempDir,
    bookings: BookingStore,
    reviews: ReviewStore,
    catalog: Catalog,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (context, _) = RepoContext::init(temp_dir.path()).expect("Failed to init repo");
        Self {
            bookings: context.open_bookings().unwrap(),
            reviews: context.open_reviews().unwrap(),
            catalog: catalog(),
            _temp_dir: temp_dir,
        }
    }

    fn booking_service(&self) -> BookingService<'_> {
        BookingService::new(
            &self.bookings,
            &self.catalog,
            &self.catalog,
            BookingPolicy::default(),
        )
    }

    fn review_service(&self) -> ReviewService<'_> {
        ReviewService::new(&self.bookings, &self.reviews)
    }
}

fn regular_request(provider: &str, service: &str, day: u32, time: NaiveTime) -> BookingRequest {
    BookingRequest {
        provider_id: provider.to_string(),
        service_id: service.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        time,
        is_emergency: false,
        emergency_reason: None,
        client_notes: Some("  first visit ".to_string()),
    }
}

fn emergency_request(time: NaiveTime, reason: Option<&str>) -> BookingRequest {
    BookingRequest {
        provider_id: PREMIUM.to_string(),
        service_id: "svc-gel".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        time,
        is_emergency: true,
        emergency_reason: reason.map(str::to_string),
        client_notes: None,
    }
}

fn core_error(err: AppError) -> CoreError {
    match err {
        AppError::Core(core) => core,
        other => panic!("expected core error, got {:?}", other),
    }
}

#[test]
fn test_regular_booking_is_pending_at_base_price() {
    let fx = Fixture::new();
    let client = Actor::client("user-1");

    let booking = fx
        .booking_service()
        .create_booking(&client, regular_request(PREMIUM, "svc-gel", 20, hm(10, 30)), now())
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.user_id, "user-1");
    assert_eq!(booking.duration_minutes, 60);
    assert_eq!((booking.base_price, booking.total_price), (80, 80));
    assert!(!booking.is_emergency);
    assert_eq!(booking.client_notes.as_deref(), Some("first visit"));
    assert_eq!(fx.bookings.get(&booking.id).unwrap(), booking);
}

#[test]
fn test_emergency_booking_priced_with_markup() {
    let fx = Fixture::new();
    let client = Actor::client("user-1");

    let booking = fx
        .booking_service()
        .create_booking(&client, emergency_request(hm(13, 0), Some("Wedding tonight")), now())
        .unwrap();

    assert!(booking.is_emergency);
    assert_eq!(booking.emergency_markup, 20);
    assert_eq!(booking.total_price, 100);
    assert_eq!(booking.emergency_reason.as_deref(), Some("Wedding tonight"));
}

#[test]
fn test_emergency_requires_reason() {
    let fx = Fixture::new();
    let err = fx
        .booking_service()
        .create_booking(&Actor::client("user-1"), emergency_request(hm(13, 0), Some("  ")), now())
        .unwrap_err();
    assert!(matches!(core_error(err), CoreError::Validation(_)));
    assert!(fx.bookings.load_all().unwrap().is_empty());
}

#[test]
fn test_emergency_requires_premium_provider() {
    let fx = Fixture::new();
    let mut request = emergency_request(hm(13, 0), Some("Urgent"));
    request.provider_id = BASIC.to_string();
    request.service_id = "svc-brow".to_string();

    let err = fx
        .booking_service()
        .create_booking(&Actor::client("user-1"), request, now())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PremiumRequired);
}

#[test]
fn test_emergency_outside_slots_rejected() {
    let fx = Fixture::new();
    let service = fx.booking_service();
    let client = Actor::client("user-1");

    // Too soon.
    let err = service
        .create_booking(&client, emergency_request(hm(12, 0), Some("Urgent")), now())
        .unwrap_err();
    assert!(matches!(core_error(err), CoreError::Validation(_)));

    // Not on the hour.
    let err = service
        .create_booking(&client, emergency_request(hm(13, 30), Some("Urgent")), now())
        .unwrap_err();
    assert!(matches!(core_error(err), CoreError::Validation(_)));
}

#[test]
fn test_service_must_belong_to_provider() {
    let fx = Fixture::new();
    let err = fx
        .booking_service()
        .create_booking(
            &Actor::client("user-1"),
            regular_request(BASIC, "svc-gel", 20, hm(10, 0)),
            now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = fx
        .booking_service()
        .create_booking(
            &Actor::client("user-1"),
            regular_request(BASIC, "svc-none", 20, hm(10, 0)),
            now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn test_past_regular_booking_rejected() {
    let fx = Fixture::new();
    let err = fx
        .booking_service()
        .create_booking(
            &Actor::client("user-1"),
            regular_request(PREMIUM, "svc-gel", 14, hm(10, 0)),
            now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_providers_cannot_create_bookings() {
    let fx = Fixture::new();
    let err = fx
        .booking_service()
        .create_booking(
            &Actor::provider(PREMIUM),
            regular_request(PREMIUM, "svc-gel", 20, hm(10, 0)),
            now(),
        )
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPermitted);
}

#[test]
fn test_status_changes_follow_policy_and_fsm() {
    let fx = Fixture::new();
    let service = fx.booking_service();
    let client = Actor::client("user-1");
    let provider = Actor::provider(PREMIUM);
    let booking = service
        .create_booking(&client, regular_request(PREMIUM, "svc-gel", 20, hm(10, 0)), now())
        .unwrap();

    let err = service
        .change_status(&client, &booking.id, BookingStatus::Confirmed, None, now())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPermitted);

    let err = service
        .change_status(&Actor::provider(BASIC), &booking.id, BookingStatus::Confirmed, None, now())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPermitted);

    let confirmed = service
        .change_status(&provider, &booking.id, BookingStatus::Confirmed, None, now())
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let err = service
        .change_status(&provider, &booking.id, BookingStatus::Pending, None, now())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);

    let cancelled = service
        .change_status(
            &client,
            &booking.id,
            BookingStatus::Cancelled,
            Some("Feeling unwell".to_string()),
            now(),
        )
        .unwrap();
    assert_eq!(cancelled.cancellation_reason.as_deref(), Some("Feeling unwell"));
}

#[test]
fn test_reschedule_pending_only() {
    let fx = Fixture::new();
    let service = fx.booking_service();
    let client = Actor::client("user-1");
    let booking = service
        .create_booking(&client, regular_request(PREMIUM, "svc-gel", 20, hm(10, 0)), now())
        .unwrap();

    let new_date = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
    let moved = service
        .reschedule(&client, &booking.id, new_date, hm(15, 0), now())
        .unwrap();
    assert_eq!((moved.date, moved.time), (new_date, hm(15, 0)));

    let past = service
        .reschedule(&client, &booking.id, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), hm(15, 0), now())
        .unwrap_err();
    assert_eq!(past.code(), ErrorCode::ValidationError);

    service
        .change_status(&Actor::provider(PREMIUM), &booking.id, BookingStatus::Confirmed, None, now())
        .unwrap();
    let err = service
        .reschedule(&client, &booking.id, new_date, hm(16, 0), now())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_lists_are_scoped_to_actor() {
    let fx = Fixture::new();
    let service = fx.booking_service();
    service
        .create_booking(&Actor::client("user-1"), regular_request(PREMIUM, "svc-gel", 22, hm(9, 0)), now())
        .unwrap();
    service
        .create_booking(&Actor::client("user-1"), regular_request(BASIC, "svc-brow", 20, hm(9, 0)), now())
        .unwrap();
    service
        .create_booking(&Actor::client("user-2"), regular_request(PREMIUM, "svc-gel", 21, hm(9, 0)), now())
        .unwrap();

    let mine = service.list(&Actor::client("user-1"), &BookingFilter::default()).unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine[0].date < mine[1].date);

    let ana = service.list(&Actor::provider(PREMIUM), &BookingFilter::default()).unwrap();
    assert_eq!(ana.len(), 2);
    assert!(ana.iter().all(|b| b.provider_id == PREMIUM));

    let first = &mine[0];
    let err = service.get(&Actor::client("user-2"), &first.id).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPermitted);
}

fn completed_booking(fx: &Fixture) -> glowbook_core::Booking {
    let service = fx.booking_service();
    let booking = service
        .create_booking(&Actor::client("user-1"), regular_request(PREMIUM, "svc-gel", 20, hm(10, 0)), now())
        .unwrap();
    let provider = Actor::provider(PREMIUM);
    service
        .change_status(&provider, &booking.id, BookingStatus::Confirmed, None, now())
        .unwrap();
    service
        .change_status(&provider, &booking.id, BookingStatus::Completed, None, now())
        .unwrap()
}

#[test]
fn test_review_submission_is_idempotent() {
    let fx = Fixture::new();
    let booking = completed_booking(&fx);
    let reviews = fx.review_service();
    let client = Actor::client("user-1");
    let later = now() + Duration::days(10);

    assert_eq!(
        reviews.rating_state(&client, &booking.id, later).unwrap(),
        RatingState::CanRate
    );

    let first = reviews
        .submit(&client, &booking.id, 5, Some("Lovely".to_string()), later)
        .unwrap();
    let second = reviews.submit(&client, &booking.id, 2, None, later).unwrap();
    assert_eq!(first, second);
    assert_eq!(fx.reviews.load_all().unwrap().len(), 1);
    assert_eq!(
        reviews.rating_state(&client, &booking.id, later).unwrap(),
        RatingState::AlreadyRated
    );
}

#[test]
fn test_concurrent_review_submissions_all_succeed() {
    let fx = Fixture::new();
    let booking = completed_booking(&fx);
    let later = now() + Duration::days(10);

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = [5u8, 3u8]
        .into_iter()
        .map(|rating| {
            let bookings = fx.bookings.clone();
            let reviews = fx.reviews.clone();
            let barrier = Arc::clone(&barrier);
            let booking_id = booking.id.clone();
            thread::spawn(move || {
                let service = ReviewService::new(&bookings, &reviews);
                barrier.wait();
                service.submit(&Actor::client("user-1"), &booking_id, rating, None, later)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().expect("both submissions succeed"))
        .collect();
    assert_eq!(results[0], results[1]);
    assert_eq!(fx.reviews.load_all().unwrap().len(), 1);
}

#[test]
fn test_review_requires_eligibility_and_author() {
    let fx = Fixture::new();
    let service = fx.booking_service();
    let booking = service
        .create_booking(&Actor::client("user-1"), regular_request(PREMIUM, "svc-gel", 20, hm(10, 0)), now())
        .unwrap();
    let reviews = fx.review_service();

    let err = reviews
        .submit(&Actor::client("user-1"), &booking.id, 5, None, now())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let after = booking.scheduled_at() + Duration::hours(2);
    let err = reviews
        .submit(&Actor::client("user-2"), &booking.id, 5, None, after)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPermitted);

    let err = reviews
        .submit(&Actor::client("user-1"), &booking.id, 9, None, after)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    // Past and not cancelled: eligible even while still pending.
    reviews
        .submit(&Actor::client("user-1"), &booking.id, 4, None, after)
        .unwrap();
}

#[test]
fn test_edit_and_respond() {
    let fx = Fixture::new();
    let booking = completed_booking(&fx);
    let reviews = fx.review_service();
    let later = now() + Duration::days(10);
    reviews
        .submit(&Actor::client("user-1"), &booking.id, 3, None, later)
        .unwrap();

    let edited = reviews
        .edit(&Actor::client("user-1"), &booking.id, 4, Some("Better on reflection".to_string()), later)
        .unwrap();
    assert_eq!(edited.rating, 4);
    assert_eq!(edited.updated_at, Some(later));

    let err = reviews
        .edit(&Actor::client("user-2"), &booking.id, 1, None, later)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let responded = reviews
        .respond(&Actor::provider(PREMIUM), &booking.id, "Thank you!".to_string(), later)
        .unwrap();
    assert_eq!(responded.provider_response.as_deref(), Some("Thank you!"));

    let listed = reviews.list_for_provider(PREMIUM).unwrap();
    assert_eq!(listed, vec![responded]);
}

#[test]
fn test_calendar_for_provider_only() {
    let fx = Fixture::new();
    let service = fx.booking_service();
    service
        .create_booking(&Actor::client("user-1"), regular_request(PREMIUM, "svc-gel", 17, hm(14, 0)), now())
        .unwrap();

    let calendar = CalendarService::new(&fx.bookings, BlockMetrics::default());
    let reference = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();

    let week = calendar.week(&Actor::provider(PREMIUM), reference).unwrap();
    assert_eq!(week.days.len(), 7);
    assert_eq!(week.days[3].hours[14].blocks.len(), 1);

    let month = calendar.month(&Actor::provider(PREMIUM), reference).unwrap();
    assert_eq!(month.cells.len(), 42);

    let err = calendar.week(&Actor::client("user-1"), reference).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotPermitted);
}

#[test]
fn test_calendar_rejects_dates_past_the_range() {
    let fx = Fixture::new();
    let calendar = CalendarService::new(&fx.bookings, BlockMetrics::default());

    let err = calendar
        .month(&Actor::provider(PREMIUM), NaiveDate::MAX)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    // Near either end the week view either renders or reports invalid input.
    for reference in [NaiveDate::MIN, NaiveDate::MAX] {
        match calendar.week(&Actor::provider(PREMIUM), reference) {
            Ok(week) => assert_eq!(week.days.len(), 7),
            Err(err) => assert_eq!(err.code(), ErrorCode::InvalidInput),
        }
    }
}

#[test]
fn test_error_envelope_shape() {
    let err = AppError::from(CoreError::InvalidTransition {
        from: BookingStatus::Cancelled,
        to: BookingStatus::Confirmed,
    });
    let envelope = serde_json::to_value(ErrorEnvelope::from_error(&err)).unwrap();
    assert_eq!(envelope["code"], "invalid_transition");
    assert_eq!(envelope["details"]["to"], "confirmed");
}
