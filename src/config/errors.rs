use std::fmt;

#[derive(Debug)]
pub enum ApplicationError {
    InvalidSetting { setting_name: String, reason: String },
    ParseError { setting_name: String, error: String },
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { setting_name, reason } => {
                write!(f, "Invalid setting '{}': {}", setting_name, reason)
            }
            Self::ParseError { setting_name, error } => {
                write!(f, "Failed to parse setting '{}': {}", setting_name, error)
            }
        }
    }
}

impl std::error::Error for ApplicationError {}

impl ApplicationError {
    pub fn invalid(setting_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: reason.into(),
        }
    }
}
