mod clean;
mod generate;
mod status;

pub use clean::run_clean;
pub use generate::run_generate;
pub use status::run_status;
