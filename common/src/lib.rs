use std::path::{Path, PathBuf};

//常用函数

/// 语言数据文件扩展名
pub const TRAINEDDATA_EXTENSION: &str = "traineddata";

/// 文本输出文件扩展名
pub const TEXT_EXTENSION: &str = "txt";

/// 获取语言数据文件名
///
/// 例如 `eng` 对应 `eng.traineddata`
///
/// # 参数
///
/// - `lang` - 语言代码
pub fn traineddata_file_name(lang: &str) -> String {
    format!("{}.{}", lang, TRAINEDDATA_EXTENSION)
}

/// 图片路径转为同目录同名的文本文件路径
///
/// `a/b/photo.jpg` 转为 `a/b/photo.txt`, 没有扩展名时直接追加 `.txt`
///
/// # 参数
///
/// - `image_path` - 图片路径
pub fn text_file_path(image_path: &Path) -> PathBuf {
    image_path.with_extension(TEXT_EXTENSION)
}

/// 移除字符串最后一个字符
///
/// 识别引擎输出的文本末尾总会带一个换行符, 打印时需要去掉
///
/// # 参数
///
/// - `s` - 字符串
pub fn remove_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((index, _)) => &s[..index],
        None => s,
    }
}
