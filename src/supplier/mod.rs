//! Raw stamp suppliers.
//!
//! A supplier yields the stamps for one post in whatever order its storage
//! returns them. Aggregation makes no assumption about that order.

pub mod client;
pub mod file;

pub use client::HttpSupplier;
pub use file::FileSupplier;

use crate::stamp::Stamp;
use crate::utils::error::SupplyError;

/// Source of raw stamp records
pub trait StampSupplier {
    /// Fetch all stamps for the supplier's post
    fn fetch_stamps(&self) -> Result<Vec<Stamp>, SupplyError>;

    /// Short description used in logs
    fn describe(&self) -> String;
}

impl<S: StampSupplier + ?Sized> StampSupplier for Box<S> {
    fn fetch_stamps(&self) -> Result<Vec<Stamp>, SupplyError> {
        (**self).fetch_stamps()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
