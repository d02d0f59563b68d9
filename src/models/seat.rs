use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single bookable seat. `status` is `true` once the seat is reserved.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Seat {
    pub id: i32,
    pub row_number: i32,
    pub seat_number: i32,
    pub status: bool,
}

impl Seat {
    pub fn available(id: i32, row_number: i32, seat_number: i32) -> Self {
        Self { id, row_number, seat_number, status: false }
    }

    pub fn is_available(&self) -> bool {
        !self.status
    }

    pub fn label(&self) -> String {
        format!("Row {} Seat {}", self.row_number, self.seat_number)
    }

    // Total order used by every listing
    pub fn order_key(&self) -> (i32, i32) {
        (self.row_number, self.seat_number)
    }
}

/// Fixed car layout: every row holds `seats_per_standard_row` seats
/// except the last one, which holds `seats_in_last_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeatLayout {
    pub row_count: i32,
    pub seats_per_standard_row: i32,
    pub seats_in_last_row: i32,
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self { row_count: 11, seats_per_standard_row: 7, seats_in_last_row: 3 }
    }
}

impl SeatLayout {
    pub const MAX_ROWS: i32 = 1_000;
    pub const MAX_SEATS_PER_ROW: i32 = 100;

    pub fn seats_in_row(&self, row_number: i32) -> i32 {
        if row_number == self.row_count {
            self.seats_in_last_row
        } else {
            self.seats_per_standard_row
        }
    }

    pub fn total_seats(&self) -> i32 {
        (self.row_count - 1) * self.seats_per_standard_row + self.seats_in_last_row
    }

    pub fn seat_id(&self, row_number: i32, seat_number: i32) -> i32 {
        (row_number - 1) * self.seats_per_standard_row + seat_number
    }

    /// Every seat of the car, available, in (row, seat) order.
    pub fn seats(&self) -> Vec<Seat> {
        (1..=self.row_count)
            .flat_map(|row| {
                (1..=self.seats_in_row(row))
                    .map(move |seat| Seat::available(self.seat_id(row, seat), row, seat))
            })
            .collect()
    }
}
