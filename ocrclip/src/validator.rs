use std::path::PathBuf;

use settings::is_supported_language;

use crate::error::ValidationError;

/// 校验命令行参数
///
/// 依次检查: 至少有一个非空路径, 语言代码受支持, 第一个路径存在.
/// 其余路径在各自的识别任务中检查.
///
/// # 参数
///
/// * `paths` - 图片路径
/// * `lang` - 语言代码, 未指定时使用默认语言
pub fn validate(paths: &[PathBuf], lang: Option<&str>) -> Result<(), ValidationError> {
    let first = match paths.first() {
        Some(first) if !first.as_os_str().is_empty() => first,
        _ => return Err(ValidationError::NoPath),
    };

    if let Some(lang) = lang {
        if !is_supported_language(lang) {
            return Err(ValidationError::InvalidLanguage);
        }
    }

    if !first.exists() {
        return Err(ValidationError::PathNotFound(first.display().to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_file() -> tempfile::NamedTempFile {
        tempfile::Builder::new().suffix(".png").tempfile().unwrap()
    }

    #[test]
    fn test_no_path() {
        assert_eq!(validate(&[], None), Err(ValidationError::NoPath));
        assert_eq!(validate(&[], Some("klingon")), Err(ValidationError::NoPath));
        assert_eq!(
            validate(&[PathBuf::new()], Some("eng")),
            Err(ValidationError::NoPath)
        );
        assert_eq!(ValidationError::NoPath.to_string(), "No Path Specified");
    }

    #[test]
    fn test_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let error = validate(&[missing.clone()], None).unwrap_err();
        assert_eq!(
            error,
            ValidationError::PathNotFound(missing.display().to_string())
        );
        assert_eq!(
            error.to_string(),
            format!("File path not found: {}", missing.display())
        );
    }

    #[test]
    fn test_invalid_language() {
        let file = existing_file();
        let error = validate(&[file.path().to_path_buf()], Some("xyz")).unwrap_err();
        assert_eq!(error, ValidationError::InvalidLanguage);
        assert_eq!(error.to_string(), "Invalid Language!");
    }

    #[test]
    fn test_invalid_language_with_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        assert_eq!(
            validate(&[missing], Some("xyz")),
            Err(ValidationError::InvalidLanguage)
        );
    }

    #[test]
    fn test_only_first_path_checked() {
        let file = existing_file();
        let paths = vec![
            file.path().to_path_buf(),
            PathBuf::from("does/not/exist.png"),
        ];
        assert_eq!(validate(&paths, None), Ok(()));
        assert_eq!(validate(&paths, Some("eng")), Ok(()));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path() {
        use std::{ffi::OsStr, fs, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join(OsStr::from_bytes(b"scan\xff.png"));
        // 部分文件系统 (如 macOS APFS) 不允许非 UTF-8 文件名
        if fs::write(&image, b"png").is_err() {
            return;
        }
        assert_eq!(validate(&[image], Some("eng")), Ok(()));
    }
}
