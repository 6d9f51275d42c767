use crate::adapter::database_error::DatabaseError;
use crate::domain::model::{Wine, WineId, WineType};
use crate::domain::port::{RepositoryError, WineRepository};
use async_trait::async_trait;

// MySQL関連のインポート
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};

/// MySQLワインリポジトリ
/// MySQLデータベースを使用してワインを永続化する
/// winesテーブルは銘柄名に一意インデックスを持ち、
/// サービス層の一意性チェックの最終的な守り手となる
#[derive(Clone)]
pub struct MySqlWineRepository {
    pool: Pool<MySql>,
}

impl MySqlWineRepository {
    /// 新しいMySQLワインリポジトリを作成
    ///
    /// # Arguments
    /// * `pool` - MySQLコネクションプール
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    /// 行をワインエンティティに変換する
    fn row_to_wine(row: &MySqlRow) -> Result<Wine, RepositoryError> {
        let wine_type = WineType::from_string(row.get("wine_type")).map_err(|e| {
            RepositoryError::FetchFailed(format!("ワインタイプの解析に失敗しました: {}", e))
        })?;

        Ok(Wine::with_id(
            WineId::from_i64(row.get("id")),
            row.get("name"),
            row.get("brand"),
            row.get::<u32, _>("max_quantity"),
            row.get::<u32, _>("quantity"),
            wine_type,
        ))
    }

    /// sqlxのエラーをDatabaseErrorに分類する
    /// 一意制約違反は専用のバリアントに振り分ける
    fn classify_error(err: sqlx::Error, name: &str) -> DatabaseError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DatabaseError::UniqueViolation(name.to_string())
            }
            _ => DatabaseError::QueryError(format!("ワインの保存に失敗しました: {}", err)),
        }
    }
}

#[async_trait]
impl WineRepository for MySqlWineRepository {
    async fn save(&self, wine: &Wine) -> Result<Wine, RepositoryError> {
        match wine.id() {
            // 識別子未割り当て: INSERTし、自動採番された識別子を設定して返す
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO wines (name, brand, max_quantity, quantity, wine_type)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(wine.name())
                .bind(wine.brand())
                .bind(wine.max())
                .bind(wine.quantity())
                .bind(wine.wine_type().as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| Self::classify_error(e, wine.name()))
                .map_err(RepositoryError::from)?;

                let id = WineId::from_i64(result.last_insert_id() as i64);
                let mut saved = wine.clone();
                saved.set_id(id);
                Ok(saved)
            }
            // 識別子割り当て済み: 該当レコードを上書きする
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE wines
                    SET name = ?, brand = ?, max_quantity = ?, quantity = ?, wine_type = ?
                    WHERE id = ?
                    "#,
                )
                .bind(wine.name())
                .bind(wine.brand())
                .bind(wine.max())
                .bind(wine.quantity())
                .bind(wine.wine_type().as_str())
                .bind(id.as_i64())
                .execute(&self.pool)
                .await
                .map_err(|e| Self::classify_error(e, wine.name()))
                .map_err(RepositoryError::from)?;

                Ok(wine.clone())
            }
        }
    }

    async fn find_by_id(&self, id: WineId) -> Result<Option<Wine>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, brand, max_quantity, quantity, wine_type FROM wines WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError(format!("ワインの取得に失敗しました: {}", e)))
        .map_err(RepositoryError::from)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_wine(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Wine>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, brand, max_quantity, quantity, wine_type FROM wines WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError(format!("ワインの取得に失敗しました: {}", e)))
        .map_err(RepositoryError::from)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_wine(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Wine>, RepositoryError> {
        // 識別子の昇順で並べる
        let rows = sqlx::query(
            "SELECT id, name, brand, max_quantity, quantity, wine_type FROM wines ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError(format!("ワイン一覧の取得に失敗しました: {}", e)))
        .map_err(RepositoryError::from)?;

        let mut wines = Vec::new();
        for row in rows {
            wines.push(Self::row_to_wine(&row)?);
        }

        Ok(wines)
    }

    async fn delete_by_id(&self, id: WineId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM wines WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::QueryError(format!("ワインの削除に失敗しました: {}", e)))
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
