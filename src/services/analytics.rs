//! services/analytics.rs
//! Contadores de entrega de un mensaje.

use crate::models::message_model::{ChannelDeliveryStatus, DeliveryAnalytics};

/// Los contadores por canal se escalan por el número de destinatarios
/// (`total = destinatarios * canales`). Los canales no se simulan por destinatario,
/// así que es un multiplicador, no un conteo real. Se mantiene por compatibilidad.
///
/// `pending` siempre es 0: la agregación termina antes de calcular las analíticas.
pub fn compute_analytics<'a, I>(recipient_count: usize, outcomes: I) -> DeliveryAnalytics
where
    I: IntoIterator<Item = &'a ChannelDeliveryStatus>,
{
    let (mut channels, mut delivered, mut failed) = (0u64, 0u64, 0u64);
    for outcome in outcomes {
        channels += 1;
        if outcome.is_delivered() {
            delivered += 1;
        } else {
            failed += 1;
        }
    }

    let recipients = recipient_count as u64;
    DeliveryAnalytics::new(
        recipients * channels,
        delivered * recipients,
        failed * recipients,
        0,
    )
}
