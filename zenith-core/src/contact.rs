//! Форма обратной связи.
//!
//! Отправка пока имитируется ([`SimulatedSubmitter`]): сервер для формы не
//! готов. Настоящая реализация подставляется через [`ContactSubmitter`] и
//! сохраняет тот же порядок действий в интерфейсе: блокировка кнопки со
//! спиннером, сброс формы, баннер успеха, возврат кнопки, скрытие баннера.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::timing::Delay;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Поля формы в порядке разметки.
pub struct ContactSubmission {
    /// Пары `name` → `value`.
    pub fields: Vec<(String, String)>,
}

impl ContactSubmission {
    /// Значение поля по имени.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("contact submission failed: {0}")]
/// Ошибка отправки формы.
pub struct SubmitError(pub String);

/// Отправка формы.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    /// Отправляет форму.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Имитация отправки: всегда успешна после фиксированной паузы.
pub struct SimulatedSubmitter<D> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> SimulatedSubmitter<D> {
    /// Имитация с паузой `latency`.
    pub fn new(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

#[async_trait(?Send)]
impl<D: Delay> ContactSubmitter for SimulatedSubmitter<D> {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.delay.sleep(self.latency).await;
        info!(fields = submission.fields.len(), "contact form submitted (simulated)");
        Ok(())
    }
}

/// Форма на странице.
pub trait ContactFormView {
    /// Дескриптор показанного баннера.
    type Banner;

    /// Текущие значения полей.
    fn read(&self) -> ContactSubmission;
    /// `true`: кнопка отключена и показывает спиннер; `false`: исходный текст.
    fn set_busy(&self, busy: bool);
    /// Очищает поля.
    fn reset(&self);
    /// Вставляет баннер успеха перед формой.
    fn show_success(&self) -> Self::Banner;
    /// Убирает баннер.
    fn dismiss(&self, banner: Self::Banner);
}

/// Контроллер формы обратной связи.
pub struct ContactFormController<S, V, D> {
    submitter: S,
    view: V,
    delay: D,
    banner_duration: Duration,
}

impl<S, V, D> ContactFormController<S, V, D>
where
    S: ContactSubmitter,
    V: ContactFormView,
    D: Delay,
{
    /// Создаёт контроллер.
    pub fn new(submitter: S, view: V, delay: D, banner_duration: Duration) -> Self {
        Self {
            submitter,
            view,
            delay,
            banner_duration,
        }
    }

    /// Обрабатывает `submit`. Ошибка отправки пишется в журнал, кнопка
    /// возвращается в исходное состояние при любом исходе.
    pub async fn submit(&self) -> bool {
        let submission = self.view.read();
        self.view.set_busy(true);

        let banner = match self.submitter.submit(&submission).await {
            Ok(()) => {
                self.view.reset();
                Some(self.view.show_success())
            }
            Err(err) => {
                error!(error = %err, "failed to submit contact form");
                None
            }
        };
        self.view.set_busy(false);

        let Some(banner) = banner else {
            return false;
        };
        self.delay.sleep(self.banner_duration).await;
        self.view.dismiss(banner);
        true
    }
}
