use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::adapter::driver::request_dto::{QuantityRequest, ValidationError, WineRequest};
use crate::adapter::driver::response_dto::WineResponse;
use crate::application::service::WineStockService;
use crate::application::ApplicationError;
use crate::domain::error::DomainError;
use crate::domain::model::WineId;
use crate::domain::port::RepositoryError;

/// REST API用のエラーレスポンスDTO
#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

// アプリケーションサービスを含む状態
pub type AppState = AppStateInner;

#[derive(Clone)]
pub struct AppStateInner {
    pub wine_service: Arc<WineStockService>,
}

// REST APIルーターを作成
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/wines", post(create_wine).get(list_wines))
        // GETのパスセグメントは銘柄名、DELETE/PUTは識別子
        // パラメータ名は同一セグメントで統一する必要がある
        .route(
            "/api/v1/wines/:id",
            get(find_by_name).delete(delete_by_id).put(update_wine),
        )
        .route("/api/v1/wines/:id/increment", patch(increment))
}

// ヘルスチェックエンドポイント
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "wine-stock-management",
        "version": "0.1.0"
    }))
}

// ワイン登録エンドポイント
async fn create_wine(
    State(state): State<AppState>,
    Json(request): Json<WineRequest>,
) -> Result<(StatusCode, Json<WineResponse>), (StatusCode, Json<ApiError>)> {
    let wine = request.to_wine().map_err(map_validation_error)?;

    match state.wine_service.create_wine(wine).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(WineResponse::from_wine(&created)))),
        Err(err) => Err(map_application_error(err)),
    }
}

// ワイン一覧取得エンドポイント
async fn list_wines(
    State(state): State<AppState>,
) -> Result<Json<Vec<WineResponse>>, (StatusCode, Json<ApiError>)> {
    match state.wine_service.list_all().await {
        Ok(wines) => {
            let response: Vec<WineResponse> = wines.iter().map(WineResponse::from_wine).collect();
            Ok(Json(response))
        }
        Err(err) => Err(map_application_error(err)),
    }
}

// 銘柄名でのワイン取得エンドポイント
async fn find_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<WineResponse>, (StatusCode, Json<ApiError>)> {
    match state.wine_service.find_by_name(&name).await {
        Ok(wine) => Ok(Json(WineResponse::from_wine(&wine))),
        Err(err) => Err(map_application_error(err)),
    }
}

// ワイン削除エンドポイント
async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    let id = parse_wine_id(&id)?;

    match state.wine_service.delete_by_id(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err(map_application_error(err)),
    }
}

// 在庫増分エンドポイント
async fn increment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<QuantityRequest>,
) -> Result<Json<WineResponse>, (StatusCode, Json<ApiError>)> {
    let id = parse_wine_id(&id)?;

    match state.wine_service.increment(id, request.quantity).await {
        Ok(wine) => Ok(Json(WineResponse::from_wine(&wine))),
        Err(err) => Err(map_application_error(err)),
    }
}

// ワイン更新エンドポイント
async fn update_wine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<WineRequest>,
) -> Result<Json<WineResponse>, (StatusCode, Json<ApiError>)> {
    let id = parse_wine_id(&id)?;
    let wine = request.to_wine().map_err(map_validation_error)?;

    match state.wine_service.update(id, wine).await {
        Ok(updated) => Ok(Json(WineResponse::from_wine(&updated))),
        Err(err) => Err(map_application_error(err)),
    }
}

// パス上の識別子文字列をWineIdに変換
fn parse_wine_id(raw: &str) -> Result<WineId, (StatusCode, Json<ApiError>)> {
    raw.parse::<i64>().map(WineId::from_i64).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("無効なワインID形式です: {}", raw),
                code: "INVALID_ID".to_string(),
            }),
        )
    })
}

// 検証エラーをHTTPエラーにマッピング
fn map_validation_error(err: ValidationError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: format!("{}", err),
            code: "VALIDATION_ERROR".to_string(),
        }),
    )
}

// アプリケーションエラーをHTTPエラーにマッピング
fn map_application_error(err: ApplicationError) -> (StatusCode, Json<ApiError>) {
    match err {
        ApplicationError::DomainError(domain_err) => map_domain_error(domain_err),
        ApplicationError::RepositoryError(RepositoryError::DuplicateName(name)) => (
            StatusCode::CONFLICT,
            Json(ApiError {
                error: format!("ワイン名が他のレコードと衝突しています: {}", name),
                code: "DUPLICATE_NAME".to_string(),
            }),
        ),
        ApplicationError::RepositoryError(repo_err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError {
                error: format!("{}", repo_err),
                code: "REPOSITORY_ERROR".to_string(),
            }),
        ),
        ApplicationError::AlreadyRegistered(name) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("Wine with name {} already registered in the system.", name),
                code: "WINE_ALREADY_REGISTERED".to_string(),
            }),
        ),
        ApplicationError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            Json(ApiError {
                error: msg,
                code: "WINE_NOT_FOUND".to_string(),
            }),
        ),
    }
}

// ドメインエラーを適切なHTTPステータスコードとエラーコードにマッピング
fn map_domain_error(domain_err: DomainError) -> (StatusCode, Json<ApiError>) {
    match domain_err {
        DomainError::StockExceeded { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("{}", domain_err),
                code: "STOCK_EXCEEDED".to_string(),
            }),
        ),
        DomainError::InvalidWineType(_) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: format!("{}", domain_err),
                code: "INVALID_WINE_TYPE".to_string(),
            }),
        ),
    }
}

#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_map_application_error_not_found() {
        let app_error =
            ApplicationError::NotFound("Wine with id 99 not found in the system.".to_string());
        let (status, Json(api_error)) = map_application_error(app_error);

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.code, "WINE_NOT_FOUND");
        assert_eq!(api_error.error, "Wine with id 99 not found in the system.");
    }

    #[test]
    fn test_map_application_error_already_registered() {
        let app_error = ApplicationError::AlreadyRegistered("Cabernet Sauvignon".to_string());
        let (status, Json(api_error)) = map_application_error(app_error);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.code, "WINE_ALREADY_REGISTERED");
    }

    #[test]
    fn test_map_stock_exceeded_to_bad_request() {
        let app_error = ApplicationError::DomainError(DomainError::StockExceeded {
            attempted: 61,
            max: 50,
        });
        let (status, Json(api_error)) = map_application_error(app_error);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.code, "STOCK_EXCEEDED");
    }

    #[test]
    fn test_map_duplicate_name_to_conflict() {
        // 更新時の名前衝突はストアの一意制約から返り、409として区別される
        let app_error = ApplicationError::RepositoryError(RepositoryError::DuplicateName(
            "Cabernet Sauvignon".to_string(),
        ));
        let (status, Json(api_error)) = map_application_error(app_error);

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(api_error.code, "DUPLICATE_NAME");
    }

    #[test]
    fn test_map_repository_error_to_internal_server_error() {
        let app_error = ApplicationError::RepositoryError(RepositoryError::ConnectionFailed(
            "connection refused".to_string(),
        ));
        let (status, Json(api_error)) = map_application_error(app_error);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.code, "REPOSITORY_ERROR");
    }

    #[test]
    fn test_parse_wine_id_rejects_non_numeric() {
        let result = parse_wine_id("abc");
        let (status, Json(api_error)) = result.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.code, "INVALID_ID");
    }

    #[test]
    fn test_api_error_structure() {
        let api_error = ApiError {
            error: "テストエラー".to_string(),
            code: "TEST_ERROR".to_string(),
        };

        // JSON シリアライゼーションのテスト
        let json = serde_json::to_string(&api_error).unwrap();
        assert!(json.contains("テストエラー"));
        assert!(json.contains("TEST_ERROR"));

        // JSON デシリアライゼーションのテスト
        let deserialized: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.error, "テストエラー");
        assert_eq!(deserialized.code, "TEST_ERROR");
    }
}
