use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Klinika";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flat service fee charged at the cashier, in rupiah.
///
/// The charge is deliberately not derived from doctor or medicine data;
/// itemized billing is a possible extension, not current behavior.
pub const FLAT_SERVICE_FEE: i64 = 65_000;

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    "info".to_string()
}

/// Get the application data directory
/// ~/Klinika/ on all platforms (user-visible, single local user)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Path of the clinic database file, created on first run
pub fn database_path() -> PathBuf {
    app_data_dir().join("klinika.db")
}
