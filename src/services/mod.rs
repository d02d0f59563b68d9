pub mod allocator;
pub mod catalog;

pub use allocator::{select_seats, SeatAllocator};
pub use catalog::{CatalogState, SeatCatalog};
