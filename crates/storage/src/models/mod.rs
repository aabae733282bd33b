mod admin;
mod rider;

pub use admin::Admin;
pub use rider::{NewRider, Rider, numeric_or_zero};
