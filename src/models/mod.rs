pub mod dataset;
pub mod record;
pub mod sleep;
pub mod sleep_status;
