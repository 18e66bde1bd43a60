mod language;
mod settings;

pub use language::{LANGUAGE_CODES, SUPPORTED_LANGUAGES, is_supported_language};
pub use settings::{DEFAULT_FLUSH_DELAY, DEFAULT_LANGUAGE, DEFAULT_TESSERACT, Settings};
