//! logger.rs
//! Inicialización de env_logger para el hub.

/// `RUST_LOG` tiene prioridad; `default_level` solo aplica cuando no está definida.
pub fn init_logger(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);

    env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    log::debug!("(init_logger) Logger inicializado, nivel por defecto={}", default_level);
}
