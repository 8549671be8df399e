//! Выбор способа показать уведомление и оформление собственного баннера.
//! Модуль не зависит от DOM и собирается на любой платформе.

use std::time::Duration;

use zenith_core::models::Severity;

const TOAST_BASE: &str = "fixed top-4 right-4 z-50 px-4 py-2 rounded-lg text-white";

/// Что произошло с глобальной `showNotification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GlobalNotifier {
    /// Шаблон её не определил.
    Missing,
    /// Вызов прошёл.
    Delivered,
    /// Функция есть, но бросила исключение.
    Threw,
}

/// Как показать сообщение.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    /// Уже показано глобальной функцией.
    Global,
    /// Собственный баннер, который убирается через `dismiss_after`.
    Banner { dismiss_after: Duration },
}

pub(crate) fn delivery(global: GlobalNotifier, banner_duration: Duration) -> Delivery {
    match global {
        GlobalNotifier::Delivered => Delivery::Global,
        GlobalNotifier::Missing | GlobalNotifier::Threw => Delivery::Banner {
            dismiss_after: banner_duration,
        },
    }
}

pub(crate) fn toast_class(severity: Severity) -> String {
    let color = match severity {
        Severity::Success => "bg-green-500",
        Severity::Error => "bg-red-500",
        Severity::Info => "bg-blue-500",
    };
    format!("{TOAST_BASE} {color}")
}
