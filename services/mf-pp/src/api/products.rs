//! 产品与物料清单接口

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use stockplan_errors::AppResult;

use super::conversions::{json_body, parse_id};
use super::dto::{
    AddProductRawMaterialRequest, ListResponse, ProductRequest, ProductResponse,
    UpdateProductRawMaterialRequest,
};
use crate::application::*;
use crate::domain::views::ProductRawMaterialView;

pub async fn list_products(
    State(handler): State<Arc<ServiceHandler>>,
) -> AppResult<Json<ListResponse<ProductResponse>>> {
    let products = handler.list_products(ListProductsQuery).await?;
    Ok(Json(ListResponse::new(
        products.into_iter().map(ProductResponse::from).collect(),
    )))
}

pub async fn create_product(
    State(handler): State<Arc<ServiceHandler>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let request = json_body(payload)?;
    let product = handler
        .create_product(CreateProductCommand {
            code: request.code,
            name: request.name,
            unit_value: request.unit_value,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn get_product(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let product = handler
        .get_product(GetProductQuery {
            product_id: parse_id(&id, "product")?,
        })
        .await?;
    Ok(Json(product.into()))
}

pub async fn update_product(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> AppResult<Json<ProductResponse>> {
    let product_id = parse_id(&id, "product")?;
    let request = json_body(payload)?;
    let product = handler
        .update_product(UpdateProductCommand {
            product_id,
            code: request.code,
            name: request.name,
            unit_value: request.unit_value,
        })
        .await?;
    Ok(Json(product.into()))
}

pub async fn delete_product(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    handler
        .delete_product(DeleteProductCommand {
            product_id: parse_id(&id, "product")?,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_product_raw_materials(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<Json<ListResponse<ProductRawMaterialView>>> {
    let views = handler
        .list_product_raw_materials(ListProductRawMaterialsQuery {
            product_id: parse_id(&id, "product")?,
        })
        .await?;
    Ok(Json(ListResponse::new(views)))
}

pub async fn add_product_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
    payload: Result<Json<AddProductRawMaterialRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductRawMaterialView>)> {
    let product_id = parse_id(&id, "product")?;
    let request = json_body(payload)?;
    let view = handler
        .add_product_raw_material(CreateAssociationCommand {
            product_id,
            raw_material_id: request.raw_material_id,
            quantity_needed: request.quantity_needed,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_product_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    Path((id, raw_material_id)): Path<(String, String)>,
    payload: Result<Json<UpdateProductRawMaterialRequest>, JsonRejection>,
) -> AppResult<Json<ProductRawMaterialView>> {
    let product_id = parse_id(&id, "product")?;
    let raw_material_id = parse_id(&raw_material_id, "raw material")?;
    let request = json_body(payload)?;
    let view = handler
        .update_product_raw_material(UpdateAssociationCommand {
            product_id,
            raw_material_id,
            quantity_needed: request.quantity_needed,
        })
        .await?;
    Ok(Json(view))
}

pub async fn remove_product_raw_material(
    State(handler): State<Arc<ServiceHandler>>,
    Path((id, raw_material_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    handler
        .remove_product_raw_material(DeleteAssociationCommand {
            product_id: parse_id(&id, "product")?,
            raw_material_id: parse_id(&raw_material_id, "raw material")?,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
