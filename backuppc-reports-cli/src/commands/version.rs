//! Version command.

/// Print the program version
pub fn cmd_version() {
    println!("version {}", env!("CARGO_PKG_VERSION"));
}
