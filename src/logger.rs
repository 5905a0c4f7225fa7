use log::LevelFilter;

/// Initialize the logger at `level`; `RUST_LOG` directives refine it per module
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
