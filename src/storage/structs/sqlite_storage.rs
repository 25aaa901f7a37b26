use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: Pool<Sqlite>,
}
