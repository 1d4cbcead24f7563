//! Domain types for the bond dashboard.
//!
//! - [`BondId`]: validated bond identifier (e.g. `CMAX-2022-001`)
//! - [`BondInfo`]: reference data for a bond issue
//! - [`Currency`]: ISO currency codes seen in CMAX issues

mod bond;
mod bond_id;
mod currency;

pub use bond::BondInfo;
pub use bond_id::BondId;
pub use currency::Currency;
