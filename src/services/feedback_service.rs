//! Patient feedback collection and rating analytics

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::errors::{ClinicError, Result};
use crate::storage::{Feedback, MemoryStore, TS_EXPORT_PATH, TherapyEffectiveness};
use crate::utils::{mean, percentage};

/// Body of `POST /feedback`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub booking_id: u32,
    pub patient_name: String,
    pub rating: u8,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub side_effects: String,
    #[serde(default)]
    pub improvements: String,
    #[serde(default)]
    pub therapy_effectiveness: Option<TherapyEffectiveness>,
    #[serde(default)]
    pub would_recommend: bool,
    #[serde(default)]
    pub follow_up_needed: bool,
}

/// Query of `GET /feedback`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct FeedbackFilter {
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalytics {
    pub total_feedback: usize,
    pub average_rating: f64,
    /// Buckets for ratings 5 down to 1
    pub rating_distribution: Vec<RatingBucket>,
    pub positive_feedback: usize,
    pub negative_feedback: usize,
    pub neutral_feedback: usize,
    pub recommendation_rate: f64,
    pub follow_up_needed: usize,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub struct FeedbackService {
    store: Arc<MemoryStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn list_feedback(&self, filter: &FeedbackFilter) -> Vec<Feedback> {
        self.store.read(|data| {
            data.feedback
                .iter()
                .filter(|f| filter.rating.is_none_or(|r| f.rating == r))
                .cloned()
                .collect()
        })
    }

    /// Record feedback for an existing booking, dated today
    pub fn create_feedback(&self, req: CreateFeedbackRequest) -> Result<Feedback> {
        if !(MIN_RATING..=MAX_RATING).contains(&req.rating) {
            return Err(ClinicError::invalid_rating(format!(
                "rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, req.rating
            )));
        }
        let patient_name = req.patient_name.trim().to_string();
        if patient_name.is_empty() {
            return Err(ClinicError::validation("patientName is required"));
        }

        let feedback = self.store.write(|data| {
            if data.booking(req.booking_id).is_none() {
                return Err(ClinicError::validation(format!(
                    "Booking {} does not exist",
                    req.booking_id
                )));
            }
            Ok(data.push_feedback(Feedback {
                id: 0,
                booking_id: req.booking_id,
                patient_name,
                rating: req.rating,
                symptoms: req.symptoms,
                side_effects: req.side_effects,
                improvements: req.improvements,
                date: Utc::now().date_naive(),
                therapy_effectiveness: req.therapy_effectiveness,
                would_recommend: req.would_recommend,
                follow_up_needed: req.follow_up_needed,
            }))
        })?;

        info!(
            "FeedbackService: feedback {} ({} stars) recorded for booking {}",
            feedback.id, feedback.rating, feedback.booking_id
        );
        Ok(feedback)
    }

    pub fn analytics(&self) -> FeedbackAnalytics {
        self.store.read(|data| summarize(&data.feedback))
    }
}

/// Rating statistics over a set of feedback entries
pub fn summarize(feedback: &[Feedback]) -> FeedbackAnalytics {
    let total = feedback.len();
    let count_where = |pred: &dyn Fn(&Feedback) -> bool| feedback.iter().filter(|f| pred(f)).count();

    let rating_distribution = (MIN_RATING..=MAX_RATING)
        .rev()
        .map(|rating| {
            let count = count_where(&|f| f.rating == rating);
            RatingBucket {
                rating,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    FeedbackAnalytics {
        total_feedback: total,
        average_rating: mean(feedback.iter().map(|f| f64::from(f.rating))),
        rating_distribution,
        positive_feedback: count_where(&|f| f.rating >= 4),
        negative_feedback: count_where(&|f| f.rating <= 2),
        neutral_feedback: count_where(&|f| f.rating == 3),
        recommendation_rate: percentage(count_where(&|f| f.would_recommend), total),
        follow_up_needed: count_where(&|f| f.follow_up_needed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (Arc<MemoryStore>, FeedbackService) {
        let store = Arc::new(MemoryStore::with_demo_data());
        (store.clone(), FeedbackService::new(store))
    }

    fn request(rating: u8) -> CreateFeedbackRequest {
        CreateFeedbackRequest {
            booking_id: 3,
            patient_name: "Robert Johnson".into(),
            rating,
            symptoms: "Less bloating".into(),
            side_effects: "None".into(),
            improvements: "More energy".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_analytics() {
        let (_, svc) = service();
        let a = svc.analytics();
        assert_eq!(a.total_feedback, 3);
        assert!((a.average_rating - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(a.positive_feedback, 3);
        assert_eq!(a.negative_feedback, 0);
        assert_eq!(a.neutral_feedback, 0);
        assert_eq!(a.recommendation_rate, 100.0);
        assert_eq!(a.follow_up_needed, 1);

        let ratings: Vec<u8> = a.rating_distribution.iter().map(|b| b.rating).collect();
        assert_eq!(ratings, vec![5, 4, 3, 2, 1]);
        assert_eq!(a.rating_distribution[0].count, 2);
        assert!((a.rating_distribution[1].percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_analytics_are_zero() {
        let a = summarize(&[]);
        assert_eq!(a.total_feedback, 0);
        assert_eq!(a.average_rating, 0.0);
        assert_eq!(a.recommendation_rate, 0.0);
        assert!(a.rating_distribution.iter().all(|b| b.count == 0 && b.percentage == 0.0));
    }

    #[test]
    fn test_create_feedback() {
        let (store, svc) = service();
        let f = svc.create_feedback(request(3)).unwrap();
        assert_eq!(f.id, 4);
        assert_eq!(f.date, Utc::now().date_naive());
        assert!(!f.would_recommend);
        assert_eq!(store.feedback().len(), 4);

        let a = svc.analytics();
        assert_eq!(a.neutral_feedback, 1);
        assert_eq!(a.recommendation_rate, 75.0);
    }

    #[test]
    fn test_create_feedback_validation() {
        let (store, svc) = service();
        assert!(matches!(
            svc.create_feedback(request(0)),
            Err(ClinicError::InvalidRating(_))
        ));
        assert!(matches!(
            svc.create_feedback(request(6)),
            Err(ClinicError::InvalidRating(_))
        ));

        let mut req = request(4);
        req.booking_id = 50;
        assert!(matches!(svc.create_feedback(req), Err(ClinicError::Validation(_))));

        let mut req = request(4);
        req.patient_name = String::new();
        assert!(svc.create_feedback(req).is_err());

        assert_eq!(store.feedback().len(), 3);
    }

    #[test]
    fn test_rating_filter() {
        let (_, svc) = service();
        assert_eq!(svc.list_feedback(&FeedbackFilter { rating: Some(5) }).len(), 2);
        assert!(svc.list_feedback(&FeedbackFilter { rating: Some(1) }).is_empty());
        assert_eq!(svc.list_feedback(&FeedbackFilter::default()).len(), 3);
    }
}
