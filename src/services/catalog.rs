use std::sync::Arc;
use tracing::{info, warn};

use crate::models::SeatLayout;
use crate::store::SeatStore;

/// What [`SeatCatalog::initialize`] found in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Seeded,
    AlreadySeeded,
    /// The store holds seats but not as many as the layout describes.
    LayoutMismatch { stored: i64, expected: i64 },
}

/// Seeds the seat store with the car layout on first start.
pub struct SeatCatalog {
    store: Arc<dyn SeatStore>,
    layout: SeatLayout,
}

impl SeatCatalog {
    pub fn new(store: Arc<dyn SeatStore>, layout: SeatLayout) -> Self {
        Self { store, layout }
    }

    /// Creates every seat as available when the store is empty.
    ///
    /// A store holding any seat is left as is, even if it is only partially
    /// seeded or was seeded with another layout.
    pub async fn initialize(&self) -> anyhow::Result<CatalogState> {
        let stored = self.store.count().await?;
        let expected = i64::from(self.layout.total_seats());

        if stored > 0 {
            if stored != expected {
                warn!(
                    "Seat store holds {} seats but the configured layout has {}; leaving it unchanged",
                    stored, expected
                );
                return Ok(CatalogState::LayoutMismatch { stored, expected });
            }
            info!("Seat store already holds {} seats, skipping seeding", stored);
            return Ok(CatalogState::AlreadySeeded);
        }

        let seats = self.layout.seats();
        self.store.insert_all(&seats).await?;
        info!(
            "Seeded {} seats across {} rows",
            seats.len(),
            self.layout.row_count
        );
        Ok(CatalogState::Seeded)
    }
}
