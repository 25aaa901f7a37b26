use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct SqliteCollection {
    pub(crate) name: String,
    pub(crate) pool: Pool<Sqlite>,
}
