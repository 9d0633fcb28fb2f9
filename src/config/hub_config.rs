//! config/hub_config.rs
//! Configuración del hub (servidor, paginación, simulación), leída del entorno.

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::message_model::Channel;

/// Tasa de éxito por canal para la simulación de entrega.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessRateTable {
    pub rates: HashMap<Channel, f64>,
    /// Se usa para cualquier canal que no esté en `rates`.
    pub default_rate: f64,
}

impl SuccessRateTable {
    pub fn rate_for(&self, channel: Channel) -> f64 {
        self.rates
            .get(&channel)
            .copied()
            .unwrap_or(self.default_rate)
    }

    #[allow(dead_code)]
    pub fn with_rate(mut self, channel: Channel, rate: f64) -> Self {
        self.rates.insert(channel, rate);
        self
    }
}

impl Default for SuccessRateTable {
    fn default() -> Self {
        let rates = HashMap::from([
            (Channel::Email, 0.95),
            (Channel::Sms, 0.90),
            (Channel::Push, 0.85),
            (Channel::InApp, 0.98),
            (Channel::Webhook, 0.92),
        ]);
        SuccessRateTable {
            rates,
            default_rate: 0.80,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub log_level: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// Si viene, la simulación es reproducible.
    pub simulation_seed: Option<u64>,
    pub success_rates: SuccessRateTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8084,
            workers: 1,
            log_level: "info".to_string(),
            default_page_size: 20,
            max_page_size: 100,
            simulation_seed: None,
            success_rates: SuccessRateTable::default(),
        }
    }
}

impl AppConfig {
    /// Lee la config de las variables de entorno del proceso.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria (útil en tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let host = lookup("HUB_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "HUB_PORT")?.unwrap_or(defaults.port);
        let workers = parse_var(&lookup, "HUB_WORKERS")?.unwrap_or(defaults.workers);
        let log_level = lookup("HUB_LOG_LEVEL").unwrap_or(defaults.log_level);
        let default_page_size =
            parse_var(&lookup, "HUB_DEFAULT_PAGE_SIZE")?.unwrap_or(defaults.default_page_size);
        let max_page_size =
            parse_var(&lookup, "HUB_MAX_PAGE_SIZE")?.unwrap_or(defaults.max_page_size);
        let simulation_seed = parse_var(&lookup, "HUB_SIMULATION_SEED")?;

        if workers == 0 {
            return Err(anyhow!("HUB_WORKERS debe ser mayor que 0"));
        }
        if default_page_size == 0 || default_page_size > max_page_size {
            return Err(anyhow!(
                "HUB_DEFAULT_PAGE_SIZE={} fuera de rango (1..={})",
                default_page_size,
                max_page_size
            ));
        }

        let mut success_rates = defaults.success_rates;
        for channel in Channel::ALL {
            let key = format!("HUB_SUCCESS_RATE_{}", channel.as_str().to_uppercase());
            if let Some(rate) = parse_var::<f64, _>(&lookup, &key)? {
                success_rates.rates.insert(channel, check_rate(&key, rate)?);
            }
        }
        if let Some(rate) = parse_var::<f64, _>(&lookup, "HUB_SUCCESS_RATE_DEFAULT")? {
            success_rates.default_rate = check_rate("HUB_SUCCESS_RATE_DEFAULT", rate)?;
        }

        Ok(AppConfig {
            host,
            port,
            workers,
            log_level,
            default_page_size,
            max_page_size,
            simulation_seed,
            success_rates,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("Valor inválido para {}: '{}'", key, raw))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

fn check_rate(key: &str, rate: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(anyhow!("{} debe estar entre 0 y 1, se recibió {}", key, rate))
    }
}
