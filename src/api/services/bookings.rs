//! 预约端点

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use tracing::{info, trace};

use crate::services::{
    AutoScheduleRequest, BookingFilter, BookingService, CreateBookingRequest, ProgressUpdate,
};

use super::helpers::{api_result, success_response};

/// 获取预约列表（支持 progress / search 过滤）
pub async fn get_bookings(
    query: web::Query<BookingFilter>,
    bookings: web::Data<Arc<BookingService>>,
) -> ActixResult<impl Responder> {
    trace!("API: list bookings with filter {:?}", query);
    let list = bookings.list_bookings(&query);
    trace!("API: returning {} bookings", list.len());
    Ok(success_response(list))
}

pub async fn get_booking(
    path: web::Path<u32>,
    bookings: web::Data<Arc<BookingService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(bookings.get_booking(path.into_inner())))
}

pub async fn post_booking(
    body: web::Json<CreateBookingRequest>,
    bookings: web::Data<Arc<BookingService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(bookings.create_booking(body.into_inner())))
}

/// 按频率批量排期
pub async fn post_auto_schedule(
    body: web::Json<AutoScheduleRequest>,
    bookings: web::Data<Arc<BookingService>>,
) -> ActixResult<impl Responder> {
    let req = body.into_inner();
    info!(
        "API: auto-schedule {} sessions for {}",
        req.total_days, req.patient_name
    );
    Ok(api_result(bookings.auto_schedule(req)))
}

pub async fn put_progress(
    path: web::Path<u32>,
    body: web::Json<ProgressUpdate>,
    bookings: web::Data<Arc<BookingService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(
        bookings.update_progress(path.into_inner(), body.into_inner()),
    ))
}
