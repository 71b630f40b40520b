//! 通知端点

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use tracing::trace;

use crate::services::{NotificationFilter, NotificationService};

use super::helpers::{api_result, success_response};
use super::types::MarkAllReadResponse;

pub async fn get_notifications(
    query: web::Query<NotificationFilter>,
    notifications: web::Data<Arc<NotificationService>>,
) -> ActixResult<impl Responder> {
    trace!("API: list notifications with filter {:?}", query);
    Ok(success_response(notifications.list_notifications(&query)))
}

pub async fn put_notification_read(
    path: web::Path<u32>,
    notifications: web::Data<Arc<NotificationService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(notifications.mark_read(path.into_inner())))
}

pub async fn put_all_read(
    notifications: web::Data<Arc<NotificationService>>,
) -> ActixResult<impl Responder> {
    Ok(success_response(MarkAllReadResponse {
        updated: notifications.mark_all_read(),
    }))
}
