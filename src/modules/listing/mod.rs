//! Client-side filtering and sorting for list screens.

pub mod controller;
pub mod filter;

pub use controller::{ListingController, LoadState};
pub use filter::{derive_view, CategoryFilter, FilterState, Listable, SortBy};
