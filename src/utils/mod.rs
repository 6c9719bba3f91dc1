pub mod file_utils;
pub mod print_utils;
pub mod prompt_utils;
