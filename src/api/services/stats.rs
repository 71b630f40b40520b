//! 仪表盘与患者历史端点

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use tracing::trace;

use crate::services::StatsService;

use super::helpers::success_response;

pub async fn get_dashboard_stats(
    stats: web::Data<Arc<StatsService>>,
) -> ActixResult<impl Responder> {
    Ok(success_response(stats.dashboard_stats()))
}

/// 路径中的姓名已由 actix 解码，按原样精确匹配
pub async fn get_patient_history(
    path: web::Path<String>,
    stats: web::Data<Arc<StatsService>>,
) -> ActixResult<impl Responder> {
    let name = path.into_inner();
    trace!("API: history for patient {:?}", name);
    Ok(success_response(stats.patient_history(&name)))
}
