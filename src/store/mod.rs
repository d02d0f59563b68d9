pub mod postgres;

use crate::models::Seat;

pub use postgres::PgSeatStore;

/// Persistent owner of every seat record.
///
/// Listings are always ordered by `(row_number, seat_number)` so that
/// allocation is reproducible for a given store state.
#[async_trait::async_trait]
pub trait SeatStore: Send + Sync {
    async fn count(&self) -> anyhow::Result<i64>;

    /// Inserts the seats, leaving any already present untouched.
    async fn insert_all(&self, seats: &[Seat]) -> anyhow::Result<()>;

    async fn list_all(&self) -> anyhow::Result<Vec<Seat>>;

    async fn list_available(&self) -> anyhow::Result<Vec<Seat>>;

    /// Marks every seat in `ids` reserved, but only if all of them are still
    /// available. Returns `false` and changes nothing otherwise.
    async fn reserve_all(&self, ids: &[i32]) -> anyhow::Result<bool>;
}
