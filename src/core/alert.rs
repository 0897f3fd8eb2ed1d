use crate::config::Settings;
use crate::domain::model::{AlertKind, Notification};

// Slack for the float error of `current / previous - 1` at an exact threshold drop.
const THRESHOLD_EPSILON: f64 = 1e-9;

/// Fractional change of `current` against `previous`.
/// `None` when the reference price cannot be divided by.
pub fn variation(current: f64, previous: f64) -> Option<f64> {
    if !previous.is_finite() || previous <= 0.0 || !current.is_finite() {
        return None;
    }
    Some(current / previous - 1.0)
}

/// Picks and renders the notification for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRules {
    pub trigger_hour: u32,
    pub drop_threshold: f64,
    pub asset_label: String,
}

impl AlertRules {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            trigger_hour: settings.trigger_hour,
            drop_threshold: settings.drop_threshold,
            asset_label: settings.asset_label.clone(),
        }
    }

    pub fn is_trigger_hour(&self, hour: u32) -> bool {
        hour == self.trigger_hour
    }

    /// Day-over-day notification: an opportunity alert when the price fell by at
    /// least the threshold, a plain daily quote otherwise.
    pub fn daily_comparison(&self, current: f64, previous: f64) -> Option<Notification> {
        let change = variation(current, previous)?;

        if change <= -self.drop_threshold + THRESHOLD_EPSILON {
            let drop_pct = change.abs() * 100.0;
            Some(Notification {
                title: "Alerta de Oportunidade".to_string(),
                message: format!(
                    "🚨 QUEDA DE {:.1}%!\nOntem: ${:.2}\nAgora: ${:.2}",
                    drop_pct, previous, current
                ),
                kind: AlertKind::OpportunityDrop,
            })
        } else {
            Some(Notification {
                title: format!("Cotação {}h", self.trigger_hour),
                message: format!(
                    "{}: ${:.2}\nSem queda de {}% desde ontem.",
                    self.asset_label,
                    current,
                    self.threshold_pct()
                ),
                kind: AlertKind::DailyQuote,
            })
        }
    }

    pub fn hourly_quote(&self, current: f64, hour: u32) -> Notification {
        Notification {
            title: "Cotação Atual".to_string(),
            message: format!("{}: ${:.2} às {}h", self.asset_label, current, hour),
            kind: AlertKind::HourlyQuote,
        }
    }

    pub fn test_push(&self) -> Notification {
        Notification {
            title: "Teste de Notificação".to_string(),
            message: "🚀 TESTE: o robô está vivo!".to_string(),
            kind: AlertKind::TestPush,
        }
    }

    // 0.03 -> 3, 0.025 -> 2.5
    fn threshold_pct(&self) -> f64 {
        (self.drop_threshold * 1000.0).round() / 10.0
    }
}
