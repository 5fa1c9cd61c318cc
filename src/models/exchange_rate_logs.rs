use diesel::prelude::*;

use crate::schema::exchange_rate_logs;

/// One persisted quote observation. Insert-only; the sink assigns `id`.
#[derive(Queryable, Debug, Clone)]
pub struct ExchangeRateLog {
    pub id: i32,
    pub value: String,
    pub coin_type: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = exchange_rate_logs)]
pub struct NewExchangeRateLog {
    pub value: String,
    pub coin_type: String,
}
