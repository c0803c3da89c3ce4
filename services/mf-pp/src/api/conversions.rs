//! HTTP to Domain conversions

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use stockplan_errors::{AppError, AppResult};

// 解析路径中的 ID
pub fn parse_id<T: FromStr>(raw: &str, field_name: &str) -> AppResult<T> {
    T::from_str(raw.trim()).map_err(|_| AppError::validation(format!("Invalid {} UUID", field_name)))
}

// 请求体解析失败统一按校验错误返回
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProductId;

    #[test]
    fn test_parse_id() {
        let id = ProductId::new();
        let parsed: ProductId = parse_id(&id.to_string(), "product").unwrap();
        assert_eq!(parsed, id);

        let err = parse_id::<ProductId>("not-a-uuid", "product").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid product UUID");
    }
}
