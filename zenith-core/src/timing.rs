use std::time::Duration;

use async_trait::async_trait;

/// Таймер для пауз интерфейса (снятие пульсации, автоскрытие баннеров).
///
/// Задержки нужны только для темпа UX и ни на что не влияют по смыслу.
#[async_trait(?Send)]
pub trait Delay {
    /// Завершается через `duration`.
    async fn sleep(&self, duration: Duration);
}
