use wine_stock_management::adapter::driven::{ConsoleLogger, MySqlWineRepository};
use wine_stock_management::adapter::driver::rest_api::{create_router, AppStateInner};
use wine_stock_management::adapter::{DatabaseConfig, DatabaseMigration};
use wine_stock_management::application::service::WineStockService;

use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== ワイン在庫管理システム REST API ===");
    println!();

    // .envファイルから環境変数を読み込む
    dotenvy::dotenv().ok();

    // データベース設定を読み込む
    let config = DatabaseConfig::from_env()?;
    println!(
        "データベース設定を読み込みました: {}:{}",
        config.host, config.port
    );

    // 接続プールを作成
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.connection_string())
        .await?;
    println!("データベース接続プールを作成しました");

    // マイグレーションを実行
    let migration = DatabaseMigration::new(pool.clone());
    migration.run().await?;
    println!("データベースマイグレーションを実行しました");

    // MySQLリポジトリとロガーを作成
    let wine_repository = Arc::new(MySqlWineRepository::new(pool.clone()));
    let logger = Arc::new(ConsoleLogger::new());

    // ワイン在庫サービスを作成（コンストラクタ注入）
    let wine_service = WineStockService::new(wine_repository, logger);

    // アプリケーション状態を作成
    let app_state = AppStateInner {
        wine_service: Arc::new(wine_service),
    };

    // REST APIルーターを作成
    let app = create_router()
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // サーバーを起動
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("REST APIサーバーが起動しました: http://localhost:3000");
    println!("ヘルスチェック: GET http://localhost:3000/health");
    println!("API仕様:");
    println!("  POST   /api/v1/wines - ワイン登録");
    println!("  GET    /api/v1/wines - ワイン一覧取得");
    println!("  GET    /api/v1/wines/:name - 銘柄名でワイン取得");
    println!("  DELETE /api/v1/wines/:id - ワイン削除");
    println!("  PATCH  /api/v1/wines/:id/increment - 在庫増分");
    println!("  PUT    /api/v1/wines/:id - ワイン更新");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}
