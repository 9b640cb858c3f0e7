#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
pub enum ParseJsonPointerError {
    #[error("json pointer must be empty or start with `/`: `{pointer}`")]
    NotAbsolute { pointer: String },
    #[error("invalid escape sequence at byte {offset} in `{pointer}`")]
    InvalidEscape { pointer: String, offset: usize },
}
