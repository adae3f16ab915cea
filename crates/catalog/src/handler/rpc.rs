use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::requests::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::Value;
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

/// Request/response message envelope: a method name plus a JSON payload.
/// This is the surface an API gateway dispatches catalog calls to.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
struct IdPayload {
    id: i32,
}

fn parse_payload<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, HttpError> {
    // An omitted payload arrives as Null; treat it as an empty object so
    // field-level serde defaults still apply.
    let payload = if payload.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        payload
    };

    serde_json::from_value(payload)
        .map_err(|e| HttpError::BadRequest(format!("Invalid payload: {e}")))
}

fn validate_payload<T: Validate>(payload: &T) -> Result<(), HttpError> {
    payload
        .validate()
        .map_err(|e| HttpError::BadRequest(format!("Validation failed: {e}")))
}

pub async fn dispatch(
    query: &DynProductQueryService,
    command: &DynProductCommandService,
    req: RpcRequest,
) -> Result<Value, HttpError> {
    info!("📨 Handling RPC message: {}", req.method);

    let response = match req.method.as_str() {
        "create_product" => {
            let body: CreateProductRequest = parse_payload(req.payload)?;
            validate_payload(&body)?;
            serde_json::to_value(command.create_product(&body).await?)
        }

        "find_all_products" => {
            let body: FindAllProducts = parse_payload(req.payload)?;
            serde_json::to_value(query.find_all(&body).await?)
        }

        "find_one_product" => {
            let body: IdPayload = parse_payload(req.payload)?;
            serde_json::to_value(query.find_by_id(body.id).await?)
        }

        "update_product" => {
            let body: UpdateProductRequest = parse_payload(req.payload)?;
            validate_payload(&body)?;
            let id = body
                .id
                .ok_or_else(|| HttpError::BadRequest("Missing product id".to_string()))?;
            serde_json::to_value(command.update_product(id, &body).await?)
        }

        "delete_product" => {
            let body: IdPayload = parse_payload(req.payload)?;
            serde_json::to_value(command.trash_product(body.id).await?)
        }

        "validate_products" => {
            let ids: Vec<i32> = parse_payload(req.payload)?;
            serde_json::to_value(query.validate_products(&ids).await?)
        }

        other => {
            return Err(HttpError::BadRequest(format!("Unknown method: {other}")));
        }
    };

    response.map_err(|e| HttpError::Internal(format!("Failed to serialize response: {e}")))
}

#[utoipa::path(
    post,
    path = "/rpc",
    tag = "Rpc",
    request_body = RpcRequest,
    responses(
        (status = 200, description = "Operation result envelope"),
        (status = 400, description = "Unknown method or invalid payload"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn rpc_handler(
    Extension(query): Extension<DynProductQueryService>,
    Extension(command): Extension<DynProductCommandService>,
    Json(req): Json<RpcRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let value = dispatch(&query, &command, req).await?;
    Ok((StatusCode::OK, Json(value)))
}

pub fn rpc_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/rpc", post(rpc_handler))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::service::{
        DynProductCommandService, DynProductQueryService, MockProductCommandServiceTrait,
        MockProductQueryServiceTrait,
    };
    use crate::domain::response::{api::ApiResponse, product::ProductResponse};
    use serde_json::json;
    use shared::errors::ServiceError;

    fn response(id: i32) -> ApiResponse<ProductResponse> {
        ApiResponse {
            status: "success".into(),
            message: "ok".into(),
            data: ProductResponse {
                id,
                name: "Widget".into(),
                price: 10.0,
                description: None,
                available: true,
                created_at: None,
                updated_at: None,
            },
        }
    }

    fn services(
        query: MockProductQueryServiceTrait,
        command: MockProductCommandServiceTrait,
    ) -> (DynProductQueryService, DynProductCommandService) {
        (Arc::new(query), Arc::new(command))
    }

    #[tokio::test]
    async fn dispatches_find_one_by_method_name() {
        let mut query = MockProductQueryServiceTrait::new();
        query
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .returning(|_| Ok(response(7)));
        let (query, command) = services(query, MockProductCommandServiceTrait::new());

        let req = RpcRequest {
            method: "find_one_product".into(),
            payload: json!({"id": 7}),
        };

        let value = dispatch(&query, &command, req).await.unwrap();
        assert_eq!(value["data"]["id"], 7);
    }

    #[tokio::test]
    async fn update_requires_id_in_payload() {
        let (query, command) = services(
            MockProductQueryServiceTrait::new(),
            MockProductCommandServiceTrait::new(),
        );

        let req = RpcRequest {
            method: "update_product".into(),
            payload: json!({"name": "Widget"}),
        };

        let err = dispatch(&query, &command, req).await.unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[tokio::test]
    async fn find_all_without_payload_uses_paging_defaults() {
        use crate::domain::response::{api::ApiResponsePagination, meta::Meta};

        let mut query = MockProductQueryServiceTrait::new();
        query
            .expect_find_all()
            .withf(|req| req.page == 1 && req.limit == 10)
            .returning(|_| {
                Ok(ApiResponsePagination {
                    status: "success".into(),
                    message: "ok".into(),
                    data: vec![],
                    meta: Meta {
                        total: 0,
                        page: 1,
                        last_page: 0,
                    },
                })
            });
        let (query, command) = services(query, MockProductCommandServiceTrait::new());

        let req = RpcRequest {
            method: "find_all_products".into(),
            payload: Value::Null,
        };

        let value = dispatch(&query, &command, req).await.unwrap();
        assert_eq!(value["meta"]["page"], 1);
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let (query, command) = services(
            MockProductQueryServiceTrait::new(),
            MockProductCommandServiceTrait::new(),
        );

        let req = RpcRequest {
            method: "restore_product".into(),
            payload: Value::Null,
        };

        let err = dispatch(&query, &command, req).await.unwrap_err();
        match err {
            HttpError::BadRequest(msg) => assert!(msg.contains("Unknown method")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn service_not_found_maps_through() {
        let mut query = MockProductQueryServiceTrait::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(ServiceError::NotFound(42)));
        let (query, command) = services(query, MockProductCommandServiceTrait::new());

        let req = RpcRequest {
            method: "find_one_product".into(),
            payload: json!({"id": 42}),
        };

        let err = dispatch(&query, &command, req).await.unwrap_err();
        match err {
            HttpError::NotFound(msg) => assert_eq!(msg, "Product not found 42"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn validate_accepts_bare_id_array() {
        let mut query = MockProductQueryServiceTrait::new();
        query
            .expect_validate_products()
            .withf(|ids| ids == [1, 2])
            .returning(|_| {
                Ok(ApiResponse {
                    status: "success".into(),
                    message: "ok".into(),
                    data: vec![],
                })
            });
        let (query, command) = services(query, MockProductCommandServiceTrait::new());

        let req = RpcRequest {
            method: "validate_products".into(),
            payload: json!([1, 2]),
        };

        dispatch(&query, &command, req).await.unwrap();
    }
}
