use thiserror::Error;

/// Startup configuration errors. Any of them stops the process before polling begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Переменная окружения {key} должна быть целым числом, получено \"{value}\"")]
    InvalidNumber { key: &'static str, value: String },
}

/// Errors a single polling cycle can end with.
///
/// The display strings are user-facing: they end up in the error-report
/// notification sent to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("Ошибка подключения к эндпоинту: {0}")]
    Transport(String),

    #[error("Эндпоинт недоступен, код ответа {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Ответ API не является корректным JSON: {0}")]
    MalformedPayload(String),

    #[error("Неверный тип {what}: ожидался {expected}")]
    TypeMismatch {
        what: &'static str,
        expected: &'static str,
    },

    #[error("Отсутствует ключ \"{0}\" в ответе API")]
    MissingField(&'static str),

    #[error("Неизвестный статус \"{status}\" у работы \"{homework}\"")]
    UnknownStatus { status: String, homework: String },
}
