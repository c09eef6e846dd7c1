// libs/appointment-cell/tests/booking_test.rs

use assert_matches::assert_matches;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use appointment_cell::models::{AppointmentError, AppointmentStatus, BookAppointmentRequest};
use appointment_cell::services::BookingService;
use doctor_cell::services::MaskRegistry;
use shared_models::session::Session;
use shared_utils::test_utils::{TestConfig, TestSession};

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn early_morning() -> NaiveDateTime {
    fixed_today().and_hms_opt(6, 0, 0).unwrap()
}

struct TestSetup {
    bookings: BookingService,
    masks: MaskRegistry,
    session: Session,
}

impl TestSetup {
    fn new(config: TestConfig) -> Self {
        let config = config.to_app_config();
        Self {
            bookings: BookingService::new(&config),
            masks: MaskRegistry::new(&config),
            session: TestSession::with_email("patient@example.com"),
        }
    }

    fn open() -> Self {
        Self::new(TestConfig::always_available())
    }

    async fn book(
        &self,
        session: &Session,
        request: BookAppointmentRequest,
    ) -> Result<appointment_cell::models::Appointment, AppointmentError> {
        self.bookings
            .book_at(session, request, &self.masks, early_morning())
            .await
    }
}

fn request(doctor_id: &str, date: NaiveDate, slot_id: u32) -> BookAppointmentRequest {
    BookAppointmentRequest {
        doctor_id: doctor_id.to_string(),
        date,
        slot_id,
        patient_name: "Asha Patel".to_string(),
        patient_phone: "+91 98765 43210".to_string(),
        reason: Some("  Recurring headaches ".to_string()),
    }
}

// ==============================================================================
// BOOKING
// ==============================================================================

#[tokio::test]
async fn books_an_available_slot() {
    let setup = TestSetup::open();

    let appointment = setup
        .book(&setup.session, request("doc-001", fixed_today(), 3))
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Upcoming);
    assert_eq!(appointment.time, "10:00 AM");
    assert_eq!(appointment.doctor_name, "Dr. Ananya Rao");
    assert_eq!(appointment.patient_email.as_deref(), Some("patient@example.com"));
    assert_eq!(appointment.reason.as_deref(), Some("Recurring headaches"));
}

#[tokio::test]
async fn rejects_a_slot_already_taken_by_another_session() {
    let setup = TestSetup::open();
    let other = TestSession::random();
    let date = fixed_today() + Duration::days(2);

    setup.book(&setup.session, request("doc-002", date, 1)).await.unwrap();
    let second = setup.book(&other, request("doc-002", date, 1)).await;

    assert_matches!(second, Err(AppointmentError::SlotAlreadyBooked { slot_id: 1, .. }));
}

#[tokio::test]
async fn same_slot_with_another_doctor_is_fine() {
    let setup = TestSetup::open();
    let date = fixed_today() + Duration::days(2);

    assert_ok!(setup.book(&setup.session, request("doc-001", date, 4)).await);
    assert_ok!(setup.book(&setup.session, request("doc-003", date, 4)).await);
}

#[tokio::test]
async fn cancelling_frees_the_slot() {
    let setup = TestSetup::open();
    let other = TestSession::random();
    let date = fixed_today() + Duration::days(1);

    let first = setup.book(&setup.session, request("doc-001", date, 5)).await.unwrap();
    setup
        .bookings
        .update_status(&setup.session, first.id, AppointmentStatus::Cancelled)
        .await
        .unwrap();

    assert_ok!(setup.book(&other, request("doc-001", date, 5)).await);
}

#[tokio::test]
async fn completed_appointments_keep_their_slot() {
    let setup = TestSetup::open();
    let date = fixed_today() + Duration::days(1);

    let first = setup.book(&setup.session, request("doc-001", date, 6)).await.unwrap();
    setup
        .bookings
        .update_status(&setup.session, first.id, AppointmentStatus::Completed)
        .await
        .unwrap();

    let again = setup.book(&TestSession::random(), request("doc-001", date, 6)).await;
    assert_matches!(again, Err(AppointmentError::SlotAlreadyBooked { .. }));
}

#[tokio::test]
async fn rejects_slots_that_already_started_today() {
    let setup = TestSetup::open();
    let afternoon = fixed_today().and_hms_opt(13, 10, 0).unwrap();

    let result = setup
        .bookings
        .book_at(&setup.session, request("doc-001", fixed_today(), 1), &setup.masks, afternoon)
        .await;

    assert_matches!(result, Err(AppointmentError::SlotNotAvailable { slot_id: 1, .. }));
}

#[tokio::test]
async fn rejects_slots_closed_by_the_mask() {
    let setup = TestSetup::new(TestConfig::never_available());

    let result = setup
        .book(&setup.session, request("doc-001", fixed_today() + Duration::days(1), 2))
        .await;

    assert_matches!(result, Err(AppointmentError::SlotNotAvailable { .. }));
}

#[tokio::test]
async fn rejects_unknown_slot_ids() {
    let setup = TestSetup::open();

    // 9:00 AM - 5:00 PM has 16 slots
    for slot_id in [0, 17, 100] {
        let result = setup
            .book(&setup.session, request("doc-001", fixed_today(), slot_id))
            .await;
        assert_matches!(result, Err(AppointmentError::SlotNotFound { .. }));
    }
}

#[tokio::test]
async fn rejects_past_dates_and_unknown_doctors() {
    let setup = TestSetup::open();

    let past = setup
        .book(&setup.session, request("doc-001", fixed_today() - Duration::days(1), 1))
        .await;
    assert_matches!(past, Err(AppointmentError::PastDate(_)));

    let unknown = setup
        .book(&setup.session, request("doc-777", fixed_today(), 1))
        .await;
    assert_matches!(unknown, Err(AppointmentError::DoctorNotFound(_)));
}

#[tokio::test]
async fn validates_patient_fields() {
    let setup = TestSetup::open();

    let mut blank_name = request("doc-001", fixed_today(), 1);
    blank_name.patient_name = "   ".to_string();
    assert_matches!(
        setup.book(&setup.session, blank_name).await,
        Err(AppointmentError::ValidationError(_))
    );

    let mut bad_phone = request("doc-001", fixed_today(), 1);
    bad_phone.patient_phone = "call me".to_string();
    assert_matches!(
        setup.book(&setup.session, bad_phone).await,
        Err(AppointmentError::ValidationError(_))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_of_one_slot_admit_exactly_one() {
    let config = TestConfig::always_available().to_app_config();
    let bookings = Arc::new(BookingService::new(&config));
    let masks = Arc::new(MaskRegistry::new(&config));
    let date = fixed_today() + Duration::days(1);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let bookings = bookings.clone();
            let masks = masks.clone();
            tokio::spawn(async move {
                bookings
                    .book_at(&TestSession::random(), request("doc-005", date, 3), &masks, early_morning())
                    .await
            })
        })
        .collect();

    let mut booked = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => booked += 1,
            Err(err) => assert_matches!(err, AppointmentError::SlotAlreadyBooked { .. }),
        }
    }

    assert_eq!(booked, 1);
}

// ==============================================================================
// LISTING & LIFECYCLE
// ==============================================================================

#[tokio::test]
async fn lists_only_the_sessions_appointments_latest_first() {
    let setup = TestSetup::open();
    let other = TestSession::random();

    setup.book(&setup.session, request("doc-001", fixed_today(), 8)).await.unwrap();
    setup
        .book(&setup.session, request("doc-001", fixed_today() + Duration::days(3), 2))
        .await
        .unwrap();
    setup.book(&setup.session, request("doc-003", fixed_today(), 1)).await.unwrap();
    setup.book(&other, request("doc-002", fixed_today(), 1)).await.unwrap();

    let listed = setup.bookings.list(&setup.session).await;
    let keys: Vec<(NaiveDate, u32)> = listed.iter().map(|a| (a.date, a.slot_id)).collect();

    assert_eq!(
        keys,
        vec![
            (fixed_today() + Duration::days(3), 2),
            (fixed_today(), 1),
            (fixed_today(), 8),
        ]
    );
    assert_eq!(setup.bookings.list(&other).await.len(), 1);
    assert!(setup.bookings.list(&TestSession::random()).await.is_empty());
}

#[tokio::test]
async fn terminal_statuses_cannot_change() {
    let setup = TestSetup::open();

    let appointment = setup
        .book(&setup.session, request("doc-001", fixed_today(), 9))
        .await
        .unwrap();

    let cancelled = setup
        .bookings
        .update_status(&setup.session, appointment.id, AppointmentStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    let reopened = setup
        .bookings
        .update_status(&setup.session, appointment.id, AppointmentStatus::Upcoming)
        .await;
    assert_err!(reopened.clone());
    assert_matches!(
        reopened,
        Err(AppointmentError::InvalidStatusTransition {
            from: AppointmentStatus::Cancelled,
            to: AppointmentStatus::Upcoming,
        })
    );

    // Still listed; appointments are never deleted
    assert_eq!(setup.bookings.list(&setup.session).await.len(), 1);
}

#[tokio::test]
async fn other_sessions_cannot_see_or_update_an_appointment() {
    let setup = TestSetup::open();
    let intruder = TestSession::random();

    let appointment = setup
        .book(&setup.session, request("doc-001", fixed_today(), 10))
        .await
        .unwrap();

    assert_matches!(
        setup.bookings.get(&intruder, appointment.id).await,
        Err(AppointmentError::NotFound(_))
    );
    assert_matches!(
        setup
            .bookings
            .update_status(&intruder, appointment.id, AppointmentStatus::Cancelled)
            .await,
        Err(AppointmentError::NotFound(_))
    );
    assert_matches!(
        setup.bookings.get(&setup.session, Uuid::new_v4()).await,
        Err(AppointmentError::NotFound(_))
    );
}
