//! 原材料接口

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use stockplan_errors::AppResult;

use super::conversions::{json_body, parse_id};
use super::dto::{ListResponse, RawMaterialRequest, RawMaterialResponse};
use crate::application::*;

pub async fn list_raw_materials(
    State(handler): State<Arc<ServiceHandler>>,
) -> AppResult<Json<ListResponse<RawMaterialResponse>>> {
    let raw_materials = handler.list_raw_materials(ListRawMaterialsQuery).await?;
    Ok(Json(ListResponse::new(
        raw_materials
            .into_iter()
            .map(RawMaterialResponse::from)
            .collect(),
    )))
}

pub async fn create_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    payload: Result<Json<RawMaterialRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RawMaterialResponse>)> {
    let request = json_body(payload)?;
    let raw_material = handler
        .create_raw_material(CreateRawMaterialCommand {
            code: request.code,
            name: request.name,
            quantity_stock: request.quantity_stock,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(raw_material.into())))
}

pub async fn get_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<Json<RawMaterialResponse>> {
    let raw_material = handler
        .get_raw_material(GetRawMaterialQuery {
            raw_material_id: parse_id(&id, "raw material")?,
        })
        .await?;
    Ok(Json(raw_material.into()))
}

pub async fn update_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
    payload: Result<Json<RawMaterialRequest>, JsonRejection>,
) -> AppResult<Json<RawMaterialResponse>> {
    let raw_material_id = parse_id(&id, "raw material")?;
    let request = json_body(payload)?;
    let raw_material = handler
        .update_raw_material(UpdateRawMaterialCommand {
            raw_material_id,
            code: request.code,
            name: request.name,
            quantity_stock: request.quantity_stock,
        })
        .await?;
    Ok(Json(raw_material.into()))
}

pub async fn delete_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    handler
        .delete_raw_material(DeleteRawMaterialCommand {
            raw_material_id: parse_id(&id, "raw material")?,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
