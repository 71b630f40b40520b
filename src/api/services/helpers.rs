//! API 帮助函数

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

use crate::errors::ClinicError;

use super::error_code::ErrorCode;
use super::types::ApiError;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建成功响应（直接返回数据本身）
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, &data)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    json_response(
        status,
        &ApiError {
            error: message.to_string(),
            code,
        },
    )
}

/// 从 ClinicError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_clinic(err: &ClinicError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T: Serialize>(result: crate::errors::Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => {
            debug!("API request failed: {}", e.format_simple());
            error_from_clinic(&e)
        }
    }
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let resp = error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &err.to_string());
    InternalError::from_response(err, resp).into()
}

/// 请求体解析失败时返回 400 + JSON 错误体
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| bad_request(err))
}

/// 路径参数解析失败（如非数字 id）时返回 400
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| bad_request(err))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| bad_request(err))
}
