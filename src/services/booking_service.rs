//! Booking management service
//!
//! Creates bookings (and the pre-procedure notice that goes with each),
//! tracks session progress and expands auto-schedule requests into a series
//! of bookings.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use tracing::{info, trace, warn};
use ts_rs::TS;

use crate::errors::{ClinicError, Result};
use crate::storage::{
    Booking, BookingDetails, BookingStatus, ClinicData, MemoryStore, Notification,
    NotificationChannel, NotificationPriority, NotificationType, PaymentStatus, SessionProgress,
    TS_EXPORT_PATH,
};
use crate::utils::TimeParser;

// ============ Request DTOs ============

/// Body of `POST /bookings`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub patient_name: String,
    pub therapy_id: u32,
    pub practitioner_id: u32,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    #[serde(default)]
    pub total_days: Option<u32>,
    #[serde(default)]
    pub patient_age: Option<u32>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub patient_email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to the therapy price
    #[serde(default)]
    pub cost: Option<u32>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
}

/// Body of `PUT /bookings/{id}/progress`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub progress: SessionProgress,
    pub day: u32,
}

/// Query of `GET /bookings`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    pub progress: Option<SessionProgress>,
    /// Case-insensitive match on the patient name
    pub search: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ScheduleFrequency {
    #[default]
    Daily,
    Weekly,
    BiWeekly,
}

impl ScheduleFrequency {
    /// Days between two consecutive sessions
    pub fn step_days(self) -> u64 {
        match self {
            ScheduleFrequency::Daily => 1,
            ScheduleFrequency::Weekly => 7,
            ScheduleFrequency::BiWeekly => 14,
        }
    }
}

/// Body of `POST /bookings/auto-schedule`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct AutoScheduleRequest {
    pub patient_name: String,
    pub therapy_id: u32,
    pub practitioner_id: u32,
    /// YYYY-MM-DD
    pub start_date: String,
    /// HH:MM
    pub preferred_time: String,
    pub total_days: u32,
    #[serde(default)]
    pub frequency: ScheduleFrequency,
}

/// A create request that passed validation
struct NewBooking {
    patient_name: String,
    therapy_id: u32,
    practitioner_id: u32,
    date: NaiveDate,
    time: String,
    total_days: u32,
    patient_age: Option<u32>,
    patient_phone: Option<String>,
    patient_email: Option<String>,
    notes: Option<String>,
    cost: Option<u32>,
    payment_status: PaymentStatus,
}

const UPCOMING_SESSION_MESSAGE: &str =
    "Please prepare for your upcoming therapy session. Check pre-procedure instructions.";

// ============ Service ============

pub struct BookingService {
    store: Arc<MemoryStore>,
    max_auto_schedule_sessions: u32,
}

impl BookingService {
    pub fn new(store: Arc<MemoryStore>, max_auto_schedule_sessions: u32) -> Self {
        Self {
            store,
            max_auto_schedule_sessions,
        }
    }

    pub fn list_bookings(&self, filter: &BookingFilter) -> Vec<BookingDetails> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        self.store.read(|data| {
            data.bookings
                .iter()
                .filter(|b| filter.progress.is_none_or(|p| b.progress == p))
                .filter(|b| {
                    search
                        .as_ref()
                        .is_none_or(|s| b.patient_name.to_lowercase().contains(s))
                })
                .map(|b| data.details(b))
                .collect()
        })
    }

    pub fn get_booking(&self, id: u32) -> Result<BookingDetails> {
        self.store.read(|data| {
            data.booking(id)
                .map(|b| data.details(b))
                .ok_or_else(ClinicError::booking_not_found)
        })
    }

    /// Create a booking in the `scheduled` state and queue its pre-procedure notice
    pub fn create_booking(&self, req: CreateBookingRequest) -> Result<Booking> {
        let new = Self::validate(req)?;
        let booking = self.store.write(|data| Self::insert(data, new))?;
        info!(
            "BookingService: created booking {} for {} on {} {}",
            booking.id, booking.patient_name, booking.date, booking.time
        );
        Ok(booking)
    }

    /// Create `total_days` bookings spaced by the requested frequency
    ///
    /// Either every session is created or none is.
    pub fn auto_schedule(&self, req: AutoScheduleRequest) -> Result<Vec<Booking>> {
        if req.total_days == 0 || req.total_days > self.max_auto_schedule_sessions {
            return Err(ClinicError::validation(format!(
                "totalDays must be between 1 and {}",
                self.max_auto_schedule_sessions
            )));
        }

        let start = TimeParser::parse_date(&req.start_date)?;
        let step = req.frequency.step_days();

        let mut sessions = Vec::with_capacity(req.total_days as usize);
        for i in 0..u64::from(req.total_days) {
            let date = start
                .checked_add_days(Days::new(i * step))
                .ok_or_else(|| ClinicError::date_parse("Schedule runs past the supported date range"))?;
            sessions.push(Self::validate(CreateBookingRequest {
                patient_name: req.patient_name.clone(),
                therapy_id: req.therapy_id,
                practitioner_id: req.practitioner_id,
                date: date.format("%Y-%m-%d").to_string(),
                time: req.preferred_time.clone(),
                total_days: Some(req.total_days),
                ..Default::default()
            })?);
        }

        let created = self.store.write(|data| {
            // 先校验引用，避免写入一半
            Self::check_references(data, req.therapy_id, req.practitioner_id)?;
            sessions
                .into_iter()
                .map(|new| Self::insert(data, new))
                .collect::<Result<Vec<_>>>()
        })?;

        info!(
            "BookingService: auto-scheduled {} {} sessions for {} starting {}",
            created.len(),
            req.frequency.as_ref(),
            req.patient_name,
            start
        );
        Ok(created)
    }

    /// Record how far a booking has progressed
    pub fn update_progress(&self, id: u32, update: ProgressUpdate) -> Result<Booking> {
        self.store.write(|data| {
            let booking = data
                .booking_mut(id)
                .ok_or_else(ClinicError::booking_not_found)?;

            if update.day > booking.total_days {
                warn!(
                    "BookingService: rejected day {} for booking {} ({} total days)",
                    update.day, id, booking.total_days
                );
                return Err(ClinicError::invalid_progress(format!(
                    "day {} exceeds totalDays {}",
                    update.day, booking.total_days
                )));
            }

            booking.progress = update.progress;
            booking.day = update.day;
            trace!(
                "BookingService: booking {} now {} (day {}/{})",
                id,
                update.progress.as_ref(),
                update.day,
                booking.total_days
            );
            Ok(booking.clone())
        })
    }

    fn validate(req: CreateBookingRequest) -> Result<NewBooking> {
        let patient_name = req.patient_name.trim();
        if patient_name.is_empty() {
            return Err(ClinicError::validation("patientName is required"));
        }

        let total_days = req.total_days.unwrap_or(1);
        if total_days == 0 {
            return Err(ClinicError::validation("totalDays must be at least 1"));
        }

        Ok(NewBooking {
            patient_name: patient_name.to_string(),
            therapy_id: req.therapy_id,
            practitioner_id: req.practitioner_id,
            date: TimeParser::parse_date(&req.date)?,
            time: TimeParser::parse_clock_time(&req.time)?,
            total_days,
            patient_age: req.patient_age,
            patient_phone: req.patient_phone,
            patient_email: req.patient_email,
            notes: req.notes,
            cost: req.cost,
            payment_status: req.payment_status.unwrap_or_default(),
        })
    }

    fn check_references(data: &ClinicData, therapy_id: u32, practitioner_id: u32) -> Result<()> {
        if data.therapy(therapy_id).is_none() {
            return Err(ClinicError::validation(format!(
                "Therapy {} does not exist",
                therapy_id
            )));
        }
        if data.practitioner(practitioner_id).is_none() {
            return Err(ClinicError::validation(format!(
                "Practitioner {} does not exist",
                practitioner_id
            )));
        }
        Ok(())
    }

    fn insert(data: &mut ClinicData, new: NewBooking) -> Result<Booking> {
        Self::check_references(data, new.therapy_id, new.practitioner_id)?;
        let (therapy_name, therapy_price) = data
            .therapy(new.therapy_id)
            .map(|t| (t.name.clone(), t.price))
            .unwrap_or_default();

        let booking = data.push_booking(Booking {
            id: 0,
            patient_name: new.patient_name,
            therapy_id: new.therapy_id,
            practitioner_id: new.practitioner_id,
            date: new.date,
            time: new.time,
            status: BookingStatus::Confirmed,
            progress: SessionProgress::Scheduled,
            day: 0,
            total_days: new.total_days,
            patient_age: new.patient_age,
            patient_phone: new.patient_phone,
            patient_email: new.patient_email,
            notes: new.notes,
            cost: new.cost.unwrap_or(therapy_price),
            payment_status: new.payment_status,
        });

        data.push_notification(Notification {
            id: 0,
            booking_id: booking.id,
            kind: NotificationType::PreProcedure,
            title: format!("Upcoming {} Session", therapy_name),
            message: UPCOMING_SESSION_MESSAGE.to_string(),
            read: false,
            timestamp: Utc::now(),
            priority: NotificationPriority::Medium,
            channels: vec![NotificationChannel::InApp, NotificationChannel::Email],
            patient_name: booking.patient_name.clone(),
            therapy_name,
        });

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (Arc<MemoryStore>, BookingService) {
        let store = Arc::new(MemoryStore::with_demo_data());
        (store.clone(), BookingService::new(store, 10))
    }

    fn request() -> CreateBookingRequest {
        CreateBookingRequest {
            patient_name: "Asha Rao".into(),
            therapy_id: 2,
            practitioner_id: 3,
            date: "2025-02-01".into(),
            time: "9:30".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_booking_forces_initial_state() {
        let (store, svc) = service();
        let booking = svc.create_booking(request()).unwrap();

        assert_eq!(booking.id, 5);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.progress, SessionProgress::Scheduled);
        assert_eq!(booking.day, 0);
        assert_eq!(booking.total_days, 1);
        assert_eq!(booking.time, "09:30");
        assert_eq!(booking.cost, 150);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(store.booking(5), Some(booking));
    }

    #[test]
    fn test_create_booking_queues_notice() {
        let (store, svc) = service();
        let booking = svc.create_booking(request()).unwrap();

        let notice = store.notifications().pop().unwrap();
        assert_eq!(notice.id, 6);
        assert_eq!(notice.booking_id, booking.id);
        assert_eq!(notice.kind, NotificationType::PreProcedure);
        assert_eq!(notice.title, "Upcoming Shirodhara Session");
        assert_eq!(notice.message, UPCOMING_SESSION_MESSAGE);
        assert!(!notice.read);
        assert_eq!(notice.patient_name, "Asha Rao");
        assert_eq!(notice.therapy_name, "Shirodhara");
    }

    #[test]
    fn test_create_booking_rejects_bad_input() {
        let (store, svc) = service();

        let mut req = request();
        req.patient_name = "  ".into();
        assert!(matches!(svc.create_booking(req), Err(ClinicError::Validation(_))));

        let mut req = request();
        req.therapy_id = 99;
        assert!(matches!(svc.create_booking(req), Err(ClinicError::Validation(_))));

        let mut req = request();
        req.practitioner_id = 99;
        assert!(matches!(svc.create_booking(req), Err(ClinicError::Validation(_))));

        let mut req = request();
        req.date = "01/02/2025".into();
        assert!(matches!(svc.create_booking(req), Err(ClinicError::DateParse(_))));

        let mut req = request();
        req.total_days = Some(0);
        assert!(svc.create_booking(req).is_err());

        // nothing was written
        assert_eq!(store.counts().bookings, 4);
        assert_eq!(store.counts().notifications, 5);
    }

    #[test]
    fn test_update_progress() {
        let (_, svc) = service();
        let updated = svc
            .update_progress(
                3,
                ProgressUpdate {
                    progress: SessionProgress::InProgress,
                    day: 2,
                },
            )
            .unwrap();
        assert_eq!(updated.progress, SessionProgress::InProgress);
        assert_eq!(updated.day, 2);
    }

    #[test]
    fn test_update_progress_day_bound() {
        let (store, svc) = service();
        let over = ProgressUpdate {
            progress: SessionProgress::Completed,
            day: 6,
        };
        assert!(matches!(
            svc.update_progress(3, over),
            Err(ClinicError::InvalidProgress(_))
        ));
        assert_eq!(store.booking(3).unwrap().day, 0);

        let exact = ProgressUpdate {
            progress: SessionProgress::Completed,
            day: 5,
        };
        assert_eq!(svc.update_progress(3, exact).unwrap().day, 5);
    }

    #[test]
    fn test_update_progress_unknown_booking() {
        let (_, svc) = service();
        let update = ProgressUpdate {
            progress: SessionProgress::Completed,
            day: 1,
        };
        assert_eq!(
            svc.update_progress(404, update).unwrap_err(),
            ClinicError::booking_not_found()
        );
    }

    #[test]
    fn test_list_bookings_filters() {
        let (_, svc) = service();
        assert_eq!(svc.list_bookings(&BookingFilter::default()).len(), 4);

        let in_progress = svc.list_bookings(&BookingFilter {
            progress: Some(SessionProgress::InProgress),
            search: None,
        });
        let ids: Vec<u32> = in_progress.iter().map(|b| b.booking.id).collect();
        assert_eq!(ids, vec![2, 4]);

        let search = svc.list_bookings(&BookingFilter {
            progress: None,
            search: Some("SMITH".into()),
        });
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].booking.patient_name, "Jane Smith");
    }

    #[test]
    fn test_get_booking_joins_details() {
        let (_, svc) = service();
        let details = svc.get_booking(4).unwrap();
        assert_eq!(details.therapy.unwrap().name, "Udvartana");
        assert_eq!(details.practitioner.unwrap().name, "Dr. Meera Patel");
        assert!(svc.get_booking(99).unwrap_err().is_not_found());
    }

    #[test]
    fn test_auto_schedule_weekly() {
        let (store, svc) = service();
        let created = svc
            .auto_schedule(AutoScheduleRequest {
                patient_name: "Robert Johnson".into(),
                therapy_id: 3,
                practitioner_id: 1,
                start_date: "2025-01-28".into(),
                preferred_time: "08:00".into(),
                total_days: 3,
                frequency: ScheduleFrequency::Weekly,
            })
            .unwrap();

        let dates: Vec<String> = created.iter().map(|b| b.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-01-28", "2025-02-04", "2025-02-11"]);
        assert!(created.iter().all(|b| b.total_days == 3 && b.day == 0));
        assert_eq!(store.counts().bookings, 7);
        assert_eq!(store.counts().notifications, 8);
    }

    #[test]
    fn test_auto_schedule_bi_weekly_step() {
        assert_eq!(ScheduleFrequency::Daily.step_days(), 1);
        assert_eq!(ScheduleFrequency::BiWeekly.step_days(), 14);
        assert_eq!(
            serde_json::to_value(ScheduleFrequency::BiWeekly).unwrap(),
            "bi-weekly"
        );
    }

    #[test]
    fn test_auto_schedule_limits_are_all_or_nothing() {
        let (store, svc) = service();
        let mut req = AutoScheduleRequest {
            patient_name: "Jane Smith".into(),
            therapy_id: 1,
            practitioner_id: 2,
            start_date: "2025-03-01".into(),
            preferred_time: "10:00".into(),
            total_days: 11,
            frequency: ScheduleFrequency::Daily,
        };
        assert!(matches!(svc.auto_schedule(req.clone()), Err(ClinicError::Validation(_))));

        req.total_days = 4;
        req.therapy_id = 77;
        assert!(svc.auto_schedule(req).is_err());
        assert_eq!(store.counts().bookings, 4);
    }
}
