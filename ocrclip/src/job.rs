use std::path::{Path, PathBuf};

/// 识别任务的公共选项, 由命令行参数和配置文件合并得到
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOptions {
    pub lang: String,
    pub print: bool,
    pub clean_up: bool,
    pub write: bool,
}

/// 单张图片的识别任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub image_path: PathBuf,
    pub lang: String,
    pub print: bool,
    pub clean_up: bool,
    pub write: bool,
}

impl JobRequest {
    /// 创建识别任务
    ///
    /// # 参数
    ///
    /// * `image_path` - 图片路径
    /// * `options` - 任务选项
    pub fn new(image_path: &Path, options: &JobOptions) -> Self {
        Self {
            image_path: image_path.to_path_buf(),
            lang: options.lang.clone(),
            print: options.print,
            clean_up: options.clean_up,
            write: options.write,
        }
    }
}
