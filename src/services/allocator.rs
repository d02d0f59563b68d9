use std::sync::Arc;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::Seat;
use crate::store::SeatStore;

/// Picks `count` seats out of `available`.
///
/// The lowest row holding at least `count` available seats wins, taking its
/// first seats by seat number. When no row is large enough the first `count`
/// seats in (row, seat) order are taken across rows. `None` means fewer than
/// `count` seats are available.
pub fn select_seats(available: &[Seat], count: usize) -> Option<Vec<Seat>> {
    if count == 0 || available.len() < count {
        return None;
    }

    let mut ordered: Vec<&Seat> = available.iter().collect();
    ordered.sort_by_key(|s| s.order_key());

    let same_row = ordered
        .chunk_by(|a, b| a.row_number == b.row_number)
        .find(|row| row.len() >= count);

    let picked = match same_row {
        Some(row) => &row[..count],
        None => &ordered[..count],
    };

    Some(picked.iter().map(|s| (*s).clone()).collect())
}

/// Reserves groups of seats against a [`SeatStore`].
#[derive(Clone)]
pub struct SeatAllocator {
    store: Arc<dyn SeatStore>,
}

impl SeatAllocator {
    pub fn new(store: Arc<dyn SeatStore>) -> Self {
        Self { store }
    }

    /// Books `count` seats, all or nothing, returning them in selection order.
    ///
    /// Reservation is conditional on every chosen seat still being available.
    /// If another booking got there first the choice is recomputed from fresh
    /// availability. Seats never return to available, so every lost race
    /// shrinks the pool and the loop ends in a booking or `InsufficientSeats`.
    pub async fn book(&self, count: u32) -> Result<Vec<Seat>, AppError> {
        if count == 0 {
            return Err(AppError::InvalidSeatCount("must be at least 1".to_string()));
        }

        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            let available = self.store.list_available().await?;
            let Some(mut selected) = select_seats(&available, count as usize) else {
                info!(
                    "Booking of {} seats rejected, only {} available",
                    count,
                    available.len()
                );
                return Err(AppError::InsufficientSeats {
                    requested: count,
                    available: available.len(),
                });
            };

            let ids: Vec<i32> = selected.iter().map(|s| s.id).collect();
            if self.store.reserve_all(&ids).await? {
                for seat in &mut selected {
                    seat.status = true;
                }
                info!("Booked {} seats: {:?}", count, ids);
                return Ok(selected);
            }

            warn!("Seats {:?} taken concurrently (attempt {})", ids, attempt);
        }
    }
}
