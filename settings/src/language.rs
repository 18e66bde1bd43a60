use std::collections::HashSet;

use lazy_static::lazy_static;

/// 识别引擎支持的语言代码
pub const LANGUAGE_CODES: &[&str] = &[
    "afr", "ara", "aze", "bel", "ben", "bul", "cat", "ces", "chi_sim", "chi_tra", "chr", "dan",
    "deu", "ell", "eng", "enm", "epo", "epo_alt", "equ", "est", "eus", "fin", "fra", "frk", "frm",
    "glg", "grc", "heb", "hin", "hrv", "hun", "ind", "isl", "ita", "ita_old", "jpn", "kan", "kor",
    "lav", "lit", "mal", "mkd", "mlt", "msa", "nld", "nor", "pol", "por", "ron", "rus", "slk",
    "slv", "spa", "spa_old", "sqi", "srp", "swa", "swe", "tam", "tel", "tgl", "tha", "tur", "ukr",
    "vie",
];

lazy_static! {
    /// 支持的语言集合, 首次访问时初始化, 之后只读
    pub static ref SUPPORTED_LANGUAGES: HashSet<&'static str> =
        LANGUAGE_CODES.iter().copied().collect();
}

/// 判断语言代码是否受支持
///
/// # 参数
///
/// * `code` - 语言代码
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_language() {
        assert!(is_supported_language("eng"));
        assert!(is_supported_language("chi_sim"));
        assert!(is_supported_language("vie"));
    }

    #[test]
    fn test_unsupported_language() {
        assert!(!is_supported_language(""));
        assert!(!is_supported_language("ENG"));
        assert!(!is_supported_language("klingon"));
    }

    #[test]
    fn test_language_codes_unique() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), LANGUAGE_CODES.len());
    }
}
