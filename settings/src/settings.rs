use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 默认识别语言
pub const DEFAULT_LANGUAGE: &str = "eng";
/// 默认识别引擎程序
pub const DEFAULT_TESSERACT: &str = "tesseract";
/// 默认批处理结束后的输出等待时长 (单位: 毫秒)
pub const DEFAULT_FLUSH_DELAY: u64 = 1000;

fn default_tesseract() -> String {
    DEFAULT_TESSERACT.to_string()
}

fn default_flush_delay() -> u64 {
    DEFAULT_FLUSH_DELAY
}

/// 配置文件
///
/// 所有字段都可省略, 命令行参数优先于配置文件
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[schemars(title = "默认识别语言")]
    #[serde(default)]
    pub language: Option<String>,
    #[schemars(title = "识别引擎程序路径")]
    #[serde(default = "default_tesseract")]
    pub tesseract: String,
    #[schemars(title = "语言数据目录")]
    #[serde(default)]
    pub tessdata_dir: Option<PathBuf>,
    #[schemars(title = "批处理结束后的输出等待时长 (毫秒)")]
    #[serde(default = "default_flush_delay")]
    pub flush_delay: u64,
    #[schemars(title = "识别引擎附加参数")]
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: None,
            tesseract: default_tesseract(),
            tessdata_dir: None,
            flush_delay: DEFAULT_FLUSH_DELAY,
            extra_args: vec![],
        }
    }
}

impl Settings {
    /// 通过文件名加载配置
    ///
    /// # 参数
    ///
    /// * `settings_file` - 配置文件名
    pub fn load(settings_file: &Path) -> Result<Settings> {
        let settings_data = fs::read(settings_file).context("读取配置文件失败")?;
        // 空文件视为默认配置
        if settings_data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Settings::default());
        }
        let settings = serde_yaml::from_slice::<Settings>(settings_data.as_slice())
            .context("解析配置文件失败, 请检查格式是否正确")?;
        Ok(settings)
    }

    /// 配置文件存在时加载, 否则使用默认配置
    ///
    /// # 参数
    ///
    /// * `settings_file` - 配置文件名
    pub fn load_or_default(settings_file: &Path) -> Result<Settings> {
        if !settings_file.exists() {
            debug!("配置文件 {} 不存在, 使用默认配置", settings_file.display());
            return Ok(Settings::default());
        }
        let settings = Settings::load(settings_file)?;
        debug!("配置文件 {} 加载成功: {:?}", settings_file.display(), settings);
        Ok(settings)
    }
}
