pub mod cleaner;
pub mod generation_result;
pub mod redirect_planner;
pub mod redirect_writer;
pub mod source_reader;
pub mod status_checker;

pub use cleaner::{find_year_directories, remove_directories};
pub use generation_result::{GenerationResult, RedirectAction};
pub use redirect_planner::{plan_redirects, PlannedRedirect, RedirectSettings};
pub use redirect_writer::{generate_redirects, render_redirect, WriteMode};
pub use source_reader::find_source_entries;
pub use status_checker::check_redirect_status;
