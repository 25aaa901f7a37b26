use async_trait::async_trait;
use sqlx::{Row, Sqlite};
use crate::storage::enums::storage_error::StorageError;
use crate::storage::storage::{apply_set, matches_filter};
use crate::storage::structs::sqlite_collection::SqliteCollection;
use crate::storage::traits::document_collection::DocumentCollection;
use crate::storage::types::Document;

/// Builds the SQL narrowing for `filter`.
///
/// Only scalar values under plain keys are compared in SQL; the literal
/// `'$.key'` path lets SQLite use the expression indexes on `name` and `sid`.
/// Every candidate is still checked with [`matches_filter`], so the SQL part
/// may over-select but never drops a real match.
fn sql_filter(filter: &Document) -> Result<(String, Vec<String>), StorageError> {
    let mut clause = String::new();
    let mut values = Vec::new();
    for (key, value) in filter {
        let plain_key = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        let scalar = value.is_string() || value.is_number() || value.is_boolean();
        if plain_key && scalar {
            clause.push_str(&format!(" AND json_extract(body, '$.{key}') = json_extract(?, '$')"));
            values.push(serde_json::to_string(value)?);
        }
    }
    Ok((clause, values))
}

impl SqliteCollection {
    /// Every `(id, document)` pair of this collection matching `filter`, oldest first.
    async fn matching<'e, E>(&self, executor: E, filter: &Document) -> Result<Vec<(i64, Document)>, StorageError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let (clause, values) = sql_filter(filter)?;
        let statement = format!("SELECT id, body FROM documents WHERE collection = ?{clause} ORDER BY id ASC");
        let mut query = sqlx::query(&statement).bind(&self.name);
        for value in values {
            query = query.bind(value);
        }
        let rows = query.fetch_all(executor).await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id")?;
            let body: String = row.try_get("body")?;
            let document: Document = serde_json::from_str(&body)?;
            if matches_filter(&document, filter) {
                documents.push((id, document));
            }
        }
        Ok(documents)
    }
}

#[async_trait]
impl DocumentCollection for SqliteCollection {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn find_one(&self, filter: &Document) -> Result<Option<Document>, StorageError> {
        Ok(self.matching(&self.pool, filter).await?.pop().map(|(_, document)| document))
    }

    async fn find(&self, filter: &Document) -> Result<Vec<Document>, StorageError> {
        Ok(self.matching(&self.pool, filter).await?.into_iter().map(|(_, document)| document).collect())
    }

    async fn insert(&self, document: Document) -> Result<(), StorageError> {
        let body = serde_json::to_string(&document)?;
        sqlx::query("INSERT INTO documents (collection, body) VALUES (?, ?)")
            .bind(&self.name)
            .bind(body)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The read and the write share one `IMMEDIATE` transaction, so concurrent
    /// partial updates of the same document merge instead of overwriting each other.
    async fn update(&self, filter: &Document, set: &Document) -> Result<bool, StorageError> {
        let mut transaction = self.pool.begin_with("BEGIN IMMEDIATE").await?;
        let Some((id, mut document)) = self.matching(&mut *transaction, filter).await?.pop() else {
            transaction.rollback().await?;
            return Ok(false);
        };
        apply_set(&mut document, set);
        let body = serde_json::to_string(&document)?;
        let result = sqlx::query("UPDATE documents SET body = ? WHERE id = ?")
            .bind(body)
            .bind(id)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, filter: &Document) -> Result<u64, StorageError> {
        let mut transaction = self.pool.begin_with("BEGIN IMMEDIATE").await?;
        let matching = self.matching(&mut *transaction, filter).await?;
        let mut removed = 0;
        for (id, _) in matching {
            removed += sqlx::query("DELETE FROM documents WHERE id = ?")
                .bind(id)
                .execute(&mut *transaction)
                .await?
                .rows_affected();
        }
        transaction.commit().await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn test_sql_filter_pushes_down_plain_scalars_only() {
        let filter = json!({"sid": "abc", "count": 2, "nested": {"a": 1}, "odd key": "x", "empty": null});
        let (clause, values) = sql_filter(filter.as_object().unwrap()).unwrap();
        assert_eq!(clause, " AND json_extract(body, '$.sid') = json_extract(?, '$') AND json_extract(body, '$.count') = json_extract(?, '$')");
        assert_eq!(values, vec!["\"abc\"".to_string(), "2".to_string()]);
    }
}
