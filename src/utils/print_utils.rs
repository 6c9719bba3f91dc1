pub fn print_success(message: &str) {
    println!("✅ {message}");
}

pub fn print_info(message: &str) {
    println!("ℹ️  {message}");
}

pub fn print_warning(message: &str) {
    println!("⚠️  {message}");
}

/// Warnings that must not mix into stdout reports such as `--json`.
pub fn eprint_warning(message: &str) {
    eprintln!("⚠️  {message}");
}
