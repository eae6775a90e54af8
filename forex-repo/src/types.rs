//! Database row structs shared by the SQLite and PostgreSQL adapters.

use sqlx::FromRow;

use forex_types::{Rate, RateId, StoredRate};

/// Rate row from database.
#[derive(FromRow)]
pub struct DbRate {
    pub id: String,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub flag: String,
    pub buy: String,
    pub sell: String,
}

impl DbRate {
    pub fn into_domain(self) -> StoredRate {
        StoredRate::new(
            RateId::new(self.id),
            Rate {
                code: self.code,
                name: self.name,
                symbol: self.symbol,
                flag: self.flag,
                buy: self.buy,
                sell: self.sell,
            },
        )
    }
}
