//! 疗法与医师目录端点

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use tracing::trace;

use crate::services::{CatalogService, StatsService};

use super::helpers::{api_result, success_response};

pub async fn get_therapies(catalog: web::Data<Arc<CatalogService>>) -> ActixResult<impl Responder> {
    trace!("API: list therapies");
    Ok(success_response(catalog.list_therapies()))
}

pub async fn get_therapy(
    path: web::Path<u32>,
    catalog: web::Data<Arc<CatalogService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(catalog.get_therapy(path.into_inner())))
}

pub async fn get_therapy_effectiveness(
    path: web::Path<u32>,
    stats: web::Data<Arc<StatsService>>,
) -> ActixResult<impl Responder> {
    Ok(success_response(stats.therapy_effectiveness(path.into_inner())))
}

pub async fn get_practitioners(
    catalog: web::Data<Arc<CatalogService>>,
) -> ActixResult<impl Responder> {
    trace!("API: list practitioners");
    Ok(success_response(catalog.list_practitioners()))
}

pub async fn get_practitioner(
    path: web::Path<u32>,
    catalog: web::Data<Arc<CatalogService>>,
) -> ActixResult<impl Responder> {
    Ok(api_result(catalog.get_practitioner(path.into_inner())))
}

pub async fn get_practitioner_performance(
    path: web::Path<u32>,
    stats: web::Data<Arc<StatsService>>,
) -> ActixResult<impl Responder> {
    Ok(success_response(
        stats.practitioner_performance(path.into_inner()),
    ))
}
