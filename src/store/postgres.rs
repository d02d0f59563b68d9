use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::database::Database;
use crate::models::Seat;
use crate::store::SeatStore;

#[derive(Clone)]
pub struct PgSeatStore {
    db: Database,
}

impl PgSeatStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeatStore for PgSeatStore {
    async fn count(&self) -> anyhow::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM seats")
            .fetch_one(&self.db.pool)
            .await
            .context("count seats")
    }

    async fn insert_all(&self, seats: &[Seat]) -> anyhow::Result<()> {
        let mut tx = self.db.pool.begin().await.context("begin seed transaction")?;

        for seat in seats {
            sqlx::query(
                "INSERT INTO seats (id, row_number, seat_number, status)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(seat.id)
            .bind(seat.row_number)
            .bind(seat.seat_number)
            .bind(seat.status)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("insert seat {}", seat.id))?;
        }

        tx.commit().await.context("commit seed transaction")?;
        Ok(())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Seat>> {
        sqlx::query_as::<_, Seat>(
            "SELECT id, row_number, seat_number, status
             FROM seats
             ORDER BY row_number, seat_number",
        )
        .fetch_all(&self.db.pool)
        .await
        .context("list seats")
    }

    async fn list_available(&self) -> anyhow::Result<Vec<Seat>> {
        sqlx::query_as::<_, Seat>(
            "SELECT id, row_number, seat_number, status
             FROM seats
             WHERE status = FALSE
             ORDER BY row_number, seat_number",
        )
        .fetch_all(&self.db.pool)
        .await
        .context("list available seats")
    }

    async fn reserve_all(&self, ids: &[i32]) -> anyhow::Result<bool> {
        let mut tx = self.db.pool.begin().await.context("begin reservation transaction")?;

        // Lock in id order so overlapping reservations queue instead of deadlocking
        sqlx::query("SELECT id FROM seats WHERE id = ANY($1) ORDER BY id FOR UPDATE")
            .bind(ids)
            .execute(&mut *tx)
            .await
            .context("lock seats")?;

        // Rows already flipped by a concurrent writer fail the status check,
        // so they are missing from RETURNING.
        let reserved: Vec<i32> = sqlx::query_scalar(
            "UPDATE seats
             SET status = TRUE
             WHERE id = ANY($1) AND status = FALSE
             RETURNING id",
        )
        .bind(ids)
        .fetch_all(&mut *tx)
        .await
        .context("reserve seats")?;

        if reserved.len() != ids.len() {
            debug!(
                "reservation lost: wanted {} seats, got {}",
                ids.len(),
                reserved.len()
            );
            tx.rollback().await.context("rollback reservation")?;
            return Ok(false);
        }

        tx.commit().await.context("commit reservation")?;
        Ok(true)
    }
}
