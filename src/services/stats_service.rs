//! Dashboard figures and per-entity reports derived from the store

use std::sync::Arc;

use serde::Serialize;
use ts_rs::TS;

use crate::storage::{
    Booking, BookingDetails, ClinicData, Feedback, MemoryStore, SessionProgress, TS_EXPORT_PATH,
};
use crate::utils::{mean, percentage};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct DaySessions {
    pub day: String,
    pub sessions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct TherapyShare {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub completed_sessions: usize,
    pub upcoming_sessions: usize,
    pub unread_notifications: usize,
    pub weekly_progress: Vec<DaySessions>,
    pub therapy_distribution: Vec<TherapyShare>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerPerformance {
    pub total_patients: usize,
    pub completed_sessions: usize,
    pub average_rating: f64,
    /// Share of ratings >= 4
    pub patient_satisfaction: f64,
    pub revenue: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct TherapyEffectivenessReport {
    pub total_sessions: usize,
    pub completion_rate: f64,
    pub average_rating: f64,
    pub common_improvements: String,
    pub side_effects: Vec<String>,
    pub recommendation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PatientHistory {
    pub bookings: Vec<BookingDetails>,
    pub feedback: Vec<Feedback>,
}

// 仪表盘静态序列
const WEEKLY_PROGRESS: [(&str, u32); 7] = [
    ("Mon", 3),
    ("Tue", 5),
    ("Wed", 4),
    ("Thu", 6),
    ("Fri", 4),
    ("Sat", 7),
    ("Sun", 2),
];

const THERAPY_DISTRIBUTION: [(&str, u32); 4] = [
    ("Abhyanga", 35),
    ("Shirodhara", 25),
    ("Panchakarma", 20),
    ("Udvartana", 20),
];

const SATISFIED_RATING: u8 = 4;

fn completed(bookings: &[&Booking]) -> usize {
    bookings
        .iter()
        .filter(|b| b.progress == SessionProgress::Completed)
        .count()
}

fn average_rating(feedback: &[&Feedback]) -> f64 {
    mean(feedback.iter().map(|f| f64::from(f.rating)))
}

/// Feedback attached to any of `bookings`
fn feedback_for<'a>(data: &'a ClinicData, bookings: &[&Booking]) -> Vec<&'a Feedback> {
    data.feedback
        .iter()
        .filter(|f| bookings.iter().any(|b| b.id == f.booking_id))
        .collect()
}

pub struct StatsService {
    store: Arc<MemoryStore>,
}

impl StatsService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        self.store.read(|data| {
            let progress_count = |p: SessionProgress| {
                data.bookings.iter().filter(|b| b.progress == p).count()
            };
            DashboardStats {
                total_bookings: data.bookings.len(),
                completed_sessions: progress_count(SessionProgress::Completed),
                upcoming_sessions: progress_count(SessionProgress::Scheduled),
                unread_notifications: data.notifications.iter().filter(|n| !n.read).count(),
                weekly_progress: WEEKLY_PROGRESS
                    .iter()
                    .map(|(day, sessions)| DaySessions {
                        day: day.to_string(),
                        sessions: *sessions,
                    })
                    .collect(),
                therapy_distribution: THERAPY_DISTRIBUTION
                    .iter()
                    .map(|(name, value)| TherapyShare {
                        name: name.to_string(),
                        value: *value,
                    })
                    .collect(),
            }
        })
    }

    /// Report over a practitioner's bookings; an unknown id yields zeros
    pub fn practitioner_performance(&self, practitioner_id: u32) -> PractitionerPerformance {
        self.store.read(|data| {
            let bookings: Vec<&Booking> = data
                .bookings
                .iter()
                .filter(|b| b.practitioner_id == practitioner_id)
                .collect();
            let feedback = feedback_for(data, &bookings);
            let satisfied = feedback
                .iter()
                .filter(|f| f.rating >= SATISFIED_RATING)
                .count();

            PractitionerPerformance {
                total_patients: bookings.len(),
                completed_sessions: completed(&bookings),
                average_rating: average_rating(&feedback),
                patient_satisfaction: percentage(satisfied, feedback.len()),
                revenue: bookings.iter().map(|b| u64::from(b.cost)).sum(),
            }
        })
    }

    /// Report over a therapy's bookings; an unknown id yields zeros
    pub fn therapy_effectiveness(&self, therapy_id: u32) -> TherapyEffectivenessReport {
        self.store.read(|data| {
            let bookings: Vec<&Booking> = data
                .bookings
                .iter()
                .filter(|b| b.therapy_id == therapy_id)
                .collect();
            let feedback = feedback_for(data, &bookings);
            let recommended = feedback.iter().filter(|f| f.would_recommend).count();

            TherapyEffectivenessReport {
                total_sessions: bookings.len(),
                completion_rate: percentage(completed(&bookings), bookings.len()),
                average_rating: average_rating(&feedback),
                common_improvements: feedback
                    .iter()
                    .map(|f| f.improvements.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                side_effects: feedback
                    .iter()
                    .map(|f| f.side_effects.trim())
                    .filter(|s| !s.is_empty() && *s != "None")
                    .map(str::to_string)
                    .collect(),
                recommendation_rate: percentage(recommended, feedback.len()),
            }
        })
    }

    /// Bookings and feedback recorded under exactly `patient_name`
    pub fn patient_history(&self, patient_name: &str) -> PatientHistory {
        self.store.read(|data| PatientHistory {
            bookings: data
                .bookings
                .iter()
                .filter(|b| b.patient_name == patient_name)
                .map(|b| data.details(b))
                .collect(),
            feedback: data
                .feedback
                .iter()
                .filter(|f| f.patient_name == patient_name)
                .cloned()
                .collect(),
        })
    }
}
