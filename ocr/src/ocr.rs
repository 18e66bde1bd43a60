use std::path::{Path, PathBuf};

use anyhow::Result;

/// OCR 结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResult {
    pub text: String,
}

/// OCR 识别请求, 识别结果为纯文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrRequest {
    pub image_path: PathBuf,
    pub lang: String,
}

impl OcrRequest {
    /// 创建纯文本识别请求
    ///
    /// # 参数
    ///
    /// * `image_path` - 图片路径
    /// * `lang` - 语言代码
    pub fn plain_text(image_path: &Path, lang: &str) -> Self {
        Self {
            image_path: image_path.to_path_buf(),
            lang: lang.to_string(),
        }
    }
}

/// OCR 接口
pub trait Ocr {
    /// 识别图片中的文字
    ///
    /// 识别过程中通过 `progress` 多次汇报 [0, 1] 区间内的进度
    ///
    /// # 参数
    ///
    /// * `request` - 识别请求
    /// * `progress` - 进度回调
    fn recognize(&self, request: &OcrRequest, progress: &mut dyn FnMut(f32)) -> Result<OcrResult>;
}
