pub mod clock;
pub mod log;
pub mod stats;
pub mod status;
pub mod store;
