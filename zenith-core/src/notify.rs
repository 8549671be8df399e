use std::rc::Rc;

use crate::models::Severity;

/// Канал коротких уведомлений пользователю.
///
/// В браузере по умолчанию используется глобальная `showNotification`, а при
/// её отсутствии временный баннер (см. `zenith-wasm`).
pub trait Notifier {
    /// Показывает сообщение с указанной важностью.
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

#[derive(Debug, Default, Clone, Copy)]
/// Уведомления только в журнал: для окружений без интерфейса.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(severity = severity.as_str(), "{message}"),
            Severity::Info | Severity::Success => {
                tracing::info!(severity = severity.as_str(), "{message}")
            }
        }
    }
}
