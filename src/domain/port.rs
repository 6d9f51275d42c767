// 出力ポート
// ドメイン層が外部に依存する機能をトレイトとして定義
// アダプター層でこれらのトレイトを実装する

use crate::domain::model::{Wine, WineId};
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// ロガートレイト
/// ログ出力を抽象化するポート
pub trait Logger: Send + Sync {
    /// デバッグレベルのログを出力
    fn debug(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 情報レベルのログを出力
    fn info(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 警告レベルのログを出力
    fn warn(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// エラーレベルのログを出力
    fn error(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );
}

/// リポジトリエラー型
/// リポジトリ操作で発生するエラーを表現する
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// データベース接続に失敗
    ConnectionFailed(String),
    /// 操作に失敗
    OperationFailed(String),
    /// データの取得に失敗
    FetchFailed(String),
    /// 銘柄名の一意制約違反
    /// 更新による名前の衝突をストア側で検出した場合に返す
    DuplicateName(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            RepositoryError::OperationFailed(msg) => write!(f, "Operation failed: {}", msg),
            RepositoryError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            RepositoryError::DuplicateName(name) => {
                write!(f, "Unique constraint violated for wine name: {}", name)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// ワインリポジトリトレイト
/// ワインエンティティの永続化を抽象化する
/// save/delete_by_id の直後の find_by_id/find_by_name は強整合であることを前提とする
#[async_trait]
pub trait WineRepository: Send + Sync {
    /// ワインを保存する
    /// 識別子が未割り当ての場合は挿入し、ストアが採番した識別子を設定して返す
    /// 識別子が割り当て済みの場合は該当レコードを上書きする
    ///
    /// # Returns
    /// * `Ok(Wine)` - 識別子が設定された保存済みワイン
    /// * `Err(RepositoryError)` - 保存失敗
    async fn save(&self, wine: &Wine) -> Result<Wine, RepositoryError>;

    /// 識別子でワインを検索する
    ///
    /// # Returns
    /// * `Ok(Some(Wine))` - ワインが見つかった
    /// * `Ok(None)` - ワインが見つからなかった
    /// * `Err(RepositoryError)` - 検索失敗
    async fn find_by_id(&self, id: WineId) -> Result<Option<Wine>, RepositoryError>;

    /// 銘柄名でワインを検索する
    ///
    /// # Returns
    /// * `Ok(Some(Wine))` - ワインが見つかった
    /// * `Ok(None)` - ワインが見つからなかった
    /// * `Err(RepositoryError)` - 検索失敗
    async fn find_by_name(&self, name: &str) -> Result<Option<Wine>, RepositoryError>;

    /// すべてのワインを取得する
    /// 識別子の昇順で並べて返す
    ///
    /// # Returns
    /// * `Ok(Vec<Wine>)` - ワインのリスト（空の場合もある）
    /// * `Err(RepositoryError)` - 取得失敗
    async fn find_all(&self) -> Result<Vec<Wine>, RepositoryError>;

    /// 識別子でワインを削除する
    ///
    /// # Returns
    /// * `Ok(())` - 削除成功
    /// * `Err(RepositoryError)` - 削除失敗
    async fn delete_by_id(&self, id: WineId) -> Result<(), RepositoryError>;
}
