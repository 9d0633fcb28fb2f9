//! services/delivery_simulator.rs
//! Simulación de entrega por canal. No hay proveedores reales detrás.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::hub_config::SuccessRateTable;
use crate::models::message_model::{Channel, ChannelDeliveryStatus};

pub const MOCK_FAILURE_MESSAGE: &str = "Mock delivery failure for demo purposes";
pub const MAX_REPORTED_ATTEMPTS: u32 = 3;

/// Fuente de aleatoriedad inyectable. En tests se reemplaza por una secuencia fija.
pub trait EntropySource: Send {
    /// Valor uniforme en [0, 1).
    fn next_unit(&mut self) -> f64;
    /// Entero uniforme en [low, high].
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Implementación sobre `StdRng`.
pub struct RngEntropy {
    rng: StdRng,
}

impl RngEntropy {
    pub fn from_os() -> Self {
        RngEntropy {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RngEntropy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_os(),
        }
    }
}

impl EntropySource for RngEntropy {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeliverySimulator {
    success_rates: SuccessRateTable,
}

impl DeliverySimulator {
    pub fn new(success_rates: SuccessRateTable) -> Self {
        DeliverySimulator { success_rates }
    }

    /// Una sola tirada por invocación. Un fallo es un resultado válido, nunca un error.
    pub fn deliver(&self, channel: Channel, entropy: &mut dyn EntropySource) -> ChannelDeliveryStatus {
        let success_rate = self.success_rates.rate_for(channel);
        let draw = entropy.next_unit();

        if draw <= success_rate {
            log::debug!(
                "(deliver) Canal '{}' entregado (draw={:.4}, rate={:.2})",
                channel,
                draw,
                success_rate
            );
            return ChannelDeliveryStatus::delivered(channel, Utc::now());
        }

        // Número reportado, no se reintenta de verdad.
        let attempts = entropy.next_in_range(1, MAX_REPORTED_ATTEMPTS);
        log::warn!(
            "(deliver) Canal '{}' falló (draw={:.4}, rate={:.2}, attempts={})",
            channel,
            draw,
            success_rate,
            attempts
        );
        ChannelDeliveryStatus::failed(channel, attempts, MOCK_FAILURE_MESSAGE)
    }
}
