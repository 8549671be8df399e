use thiserror::Error;

/// Тексты, которые видит пользователь.
pub mod messages {
    /// У кнопки нет `data-post-id`.
    pub const POST_NOT_IDENTIFIED: &str = "Erro: Post não identificado";
    /// Кнопка лайка отключена для анонимного посетителя.
    pub const LOGIN_REQUIRED: &str = "Faça login para curtir";
    /// Сервер отклонил лайк и не прислал текст.
    pub const LIKE_FAILED: &str = "Erro ao curtir";
    /// Сервер отклонил шаринг, либо не удалось скопировать ссылку.
    pub const SHARE_FAILED: &str = "Erro ao compartilhar";
    /// Любая сетевая ошибка или нечитаемый ответ.
    pub const CONNECTION_ERROR: &str = "Erro de conexão";
    /// Ссылка скопирована в буфер обмена.
    pub const LINK_COPIED: &str = "Link copiado!";
    /// Лайк поставлен, сервер не прислал текст.
    pub const LIKED: &str = "Curtido!";
    /// Лайк снят, сервер не прислал текст.
    pub const UNLIKED: &str = "Curtida removida!";
    /// Комментарии пока не реализованы.
    pub const COMMENTS_IN_DEVELOPMENT: &str = "Funcionalidade de comentários em desenvolvimento";
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Ошибки одного вызова серверного API.
pub enum ApiError {
    /// Запрос не дошёл до сервера или ответ не был получен.
    #[error("network error: {0}")]
    Network(String),

    /// Ответ получен, но тело не является ожидаемым JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Ошибки обработки действия пользователя (лайк, шаринг).
pub enum InteractionError {
    /// У кнопки нет идентификатора поста; запрос не отправлялся.
    #[error("post id is missing")]
    MissingPostId,

    /// Кнопка отключена (посетитель не вошёл); запрос не отправлялся.
    #[error("login required")]
    LoginRequired,

    /// Сервер ответил статусом, отличным от `success`.
    #[error("rejected by server: {}", message.as_deref().unwrap_or("<no message>"))]
    Rejected {
        /// Текст сервера, если он был.
        message: Option<String>,
    },

    /// Сетевая ошибка или нечитаемый ответ.
    #[error("connection failed: {0}")]
    Connection(#[from] ApiError),

    /// Не удалось записать ссылку в буфер обмена.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl InteractionError {
    /// Текст уведомления для пользователя. `fallback` используется, когда
    /// сервер отклонил запрос без собственного сообщения.
    pub fn user_message(&self, fallback: &'static str) -> String {
        match self {
            Self::MissingPostId => messages::POST_NOT_IDENTIFIED.to_string(),
            Self::LoginRequired => messages::LOGIN_REQUIRED.to_string(),
            Self::Rejected { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .unwrap_or(fallback)
                .to_string(),
            Self::Connection(_) => messages::CONNECTION_ERROR.to_string(),
            Self::Clipboard(_) => messages::SHARE_FAILED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Ошибки key/value хранилища (`localStorage` или его замена).
pub enum StorageError {
    /// Хранилище недоступно (приватный режим, запрет политики и т.п.).
    #[error("storage is not available")]
    Unavailable,

    /// Запись отклонена (например, превышена квота).
    #[error("failed to write '{key}': {message}")]
    Write {
        /// Ключ записи.
        key: String,
        /// Описание причины.
        message: String,
    },
}
