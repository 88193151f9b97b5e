pub mod pinger;
pub mod target;
