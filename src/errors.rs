use std::fmt;

/// Fixed message shown when an authenticated action is attempted without a session.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Login required to create shortened URLs";

/// Generic text shown for transport and decoding failures.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// 客户端校验失败，不会发出网络请求
    Validation(String),
    /// 401 on an authenticated action
    AuthRequired(String),
    /// Non-2xx response carrying the server's `{error}` text
    Api { status: u16, message: String },
    /// Transport, decode or runtime failure
    Unexpected(String),
    /// Session accessed before the application context provisioned it
    ContextMissing(&'static str),
    Config(String),
    Io(String),
}

impl ClientError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "C001",
            ClientError::AuthRequired(_) => "C002",
            ClientError::Api { .. } => "C003",
            ClientError::Unexpected(_) => "C004",
            ClientError::ContextMissing(_) => "C005",
            ClientError::Config(_) => "C006",
            ClientError::Io(_) => "C007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "Validation Error",
            ClientError::AuthRequired(_) => "Authentication Required",
            ClientError::Api { .. } => "API Error",
            ClientError::Unexpected(_) => "Unexpected Error",
            ClientError::ContextMissing(_) => "Missing Application Context",
            ClientError::Config(_) => "Configuration Error",
            ClientError::Io(_) => "I/O Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ClientError::Validation(msg) => msg,
            ClientError::AuthRequired(msg) => msg,
            ClientError::Api { message, .. } => message,
            ClientError::Unexpected(detail) => detail,
            ClientError::ContextMissing(what) => what,
            ClientError::Config(msg) => msg,
            ClientError::Io(msg) => msg,
        }
    }

    /// HTTP status attached to the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::AuthRequired(_) => Some(401),
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text rendered inline next to a form or in place of the table.
    ///
    /// Server messages are shown verbatim; transport failures collapse to a
    /// generic sentence so raw socket errors never reach the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unexpected(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            ClientError::ContextMissing(what) => {
                format!("{} used outside of the application context", what)
            }
            other => other.message().to_string(),
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClientError {}

// 便捷的构造函数
impl ClientError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn auth_required() -> Self {
        ClientError::AuthRequired(LOGIN_REQUIRED_MESSAGE.to_string())
    }

    pub fn api<T: Into<String>>(status: u16, msg: T) -> Self {
        ClientError::Api {
            status,
            message: msg.into(),
        }
    }

    pub fn unexpected<T: Into<String>>(msg: T) -> Self {
        ClientError::Unexpected(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClientError::Config(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        ClientError::Io(msg.into())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Unexpected(err.to_string())
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ClientError::auth_required().status(), Some(401));
        assert_eq!(ClientError::api(403, "Forbidden").status(), Some(403));
        assert_eq!(ClientError::validation("bad").status(), None);
        assert!(ClientError::api(401, "Session has expired").is_unauthorized());
        assert!(!ClientError::unexpected("connection refused").is_unauthorized());
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = ClientError::unexpected("tcp connect error: Connection refused (os error 111)");
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);

        let err = ClientError::api(400, "Invalid URL format");
        assert_eq!(err.user_message(), "Invalid URL format");

        assert_eq!(
            ClientError::auth_required().user_message(),
            LOGIN_REQUIRED_MESSAGE
        );
    }

    #[test]
    fn test_format_simple() {
        let err = ClientError::validation("Passwords do not match");
        assert_eq!(
            err.format_simple(),
            "Validation Error: Passwords do not match"
        );
        assert_eq!(err.to_string(), err.format_simple());
        assert_eq!(err.code(), "C001");
    }
}
