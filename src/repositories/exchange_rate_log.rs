use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::models::NewExchangeRateLog;
use crate::schema::exchange_rate_logs::dsl::*;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Provisions the log table on first use; the sink owns the identifier.
pub fn ensure_table(conn: &mut PgPoolConn) -> Result<(), diesel::result::Error> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS exchange_rate_logs (
            id SERIAL PRIMARY KEY,
            value VARCHAR NOT NULL,
            coin_type VARCHAR NOT NULL
        )",
    )
    .execute(conn)?;
    Ok(())
}

pub fn create(
    conn: &mut PgPoolConn,
    new_rec: &NewExchangeRateLog,
) -> Result<i32, diesel::result::Error> {
    diesel::insert_into(exchange_rate_logs)
        .values(new_rec)
        .returning(id)
        .get_result(conn)
}
