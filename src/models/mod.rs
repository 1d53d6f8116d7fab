pub mod category;
pub mod daily_aggregate;
pub mod dialect;
pub mod log_event;
