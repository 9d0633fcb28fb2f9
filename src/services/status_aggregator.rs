//! services/status_aggregator.rs
//! Combina los resultados por canal en un único estado del mensaje.

use crate::models::message_model::{ChannelDeliveryStatus, MessageStatus};

/// Precedencia: todos entregados > alguno entregado > todos fallidos > en proceso.
/// Función pura: no consulta reloj ni aleatoriedad.
pub fn calculate_overall_status(delivered: usize, failed: usize, total_channels: usize) -> MessageStatus {
    if total_channels == 0 {
        // Sin canales resueltos no puede haber "delivered".
        return MessageStatus::Processing;
    }
    if delivered == total_channels {
        MessageStatus::Delivered
    } else if delivered > 0 {
        MessageStatus::PartiallyDelivered
    } else if failed == total_channels {
        MessageStatus::Failed
    } else {
        MessageStatus::Processing
    }
}

pub fn aggregate<'a, I>(outcomes: I) -> MessageStatus
where
    I: IntoIterator<Item = &'a ChannelDeliveryStatus>,
{
    let (mut delivered, mut failed, mut total) = (0usize, 0usize, 0usize);
    for outcome in outcomes {
        total += 1;
        if outcome.is_delivered() {
            delivered += 1;
        } else if outcome.is_failed() {
            failed += 1;
        }
    }
    calculate_overall_status(delivered, failed, total)
}
