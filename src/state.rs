use crate::db::{DbPool, OrmConn};

/// Handler state; `orm` wraps the same connection pool as `pool`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}
