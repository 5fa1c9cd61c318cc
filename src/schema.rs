diesel::table! {
    exchange_rate_logs (id) {
        id -> Int4,
        value -> Varchar,
        coin_type -> Varchar,
    }
}
