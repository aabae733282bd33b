pub mod admins;
pub mod riders;
