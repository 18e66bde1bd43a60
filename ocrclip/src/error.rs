use thiserror::Error;

/// 参数校验错误
///
/// 在任何识别任务开始前报告, 出现时整个批处理不会执行
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No Path Specified")]
    NoPath,
    #[error("File path not found: {0}")]
    PathNotFound(String),
    #[error("Invalid Language!")]
    InvalidLanguage,
}
