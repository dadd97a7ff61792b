//! Logging setup for applications embedding vista-rs.

/// Installs an `env_logger` logger honouring `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("vista-rs logging initialized");
    }
}
