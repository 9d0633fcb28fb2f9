use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;

use crate::config::hub_config::AppConfig;
use crate::logger::init_logger;
use crate::services::delivery_simulator::{DeliverySimulator, RngEntropy};
use crate::services::message_store::MessageStore;
use crate::services::messaging_service::MessagingService;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

/// Arma el servicio con sus dependencias explícitas (store único + fuente de aleatoriedad).
fn build_messaging_service(config: &AppConfig) -> MessagingService {
    let store = MessageStore::new();
    let simulator = DeliverySimulator::new(config.success_rates.clone());
    let entropy = RngEntropy::from_seed_option(config.simulation_seed);

    MessagingService::new(store, simulator, Box::new(entropy))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio

    let config = AppConfig::from_env().context("Configuración inválida")?;
    init_logger(&config.log_level);

    match config.simulation_seed {
        Some(seed) => log::info!("Simulación de entrega con semilla fija={}", seed),
        None => log::info!("Simulación de entrega con semilla aleatoria"),
    }

    let messaging_service = build_messaging_service(&config);

    let bind_addr = (config.host.clone(), config.port);
    let workers = config.workers;
    log::info!("Levantando servidor en {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(messaging_service.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(app::init_app)
    })
    .workers(workers)
    .bind(bind_addr.clone())
    .with_context(|| format!("No se pudo abrir {}:{}", bind_addr.0, bind_addr.1))?
    .run()
    .await
    .context("El servidor terminó con error")?;

    Ok(())
}
