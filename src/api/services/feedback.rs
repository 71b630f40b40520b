//! 反馈端点

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};

use crate::services::{CreateFeedbackRequest, FeedbackFilter, FeedbackService};

use super::helpers::{api_result, success_response};

pub async fn get_feedback(
    query: web::Query<FeedbackFilter>,
    feedback: web::Data<Arc<FeedbackService>>,
) -> ActixResult<impl Responder> {
    Ok(success_response(feedback.list_feedback(&query)))
}

pub async fn post_feedback(
    body: web::Json<CreateFeedbackRequest>,
    feedback: web::Data<Arc<FeedbackService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(feedback.create_feedback(body.into_inner())))
}

pub async fn get_feedback_analytics(
    feedback: web::Data<Arc<FeedbackService>>,
) -> ActixResult<impl Responder> {
    Ok(success_response(feedback.analytics()))
}
