use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing::Level;

/// 识别图片中的文字并复制到剪贴板
///
/// 完整语言列表: https://github.com/naptha/tesseract.js/blob/master/docs/tesseract_lang_list.md
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, override_usage = "ocrclip PATHS [OPTIONS]")]
pub struct Args {
    /// 待识别的图片路径, 可以有多个
    pub paths: Vec<PathBuf>,

    /// 图片中文字的语言 (默认 eng)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// 识别完成后删除当前目录下的语言数据文件 (.traineddata)
    #[arg(short, long, default_value_t = false)]
    pub clean_up: bool,

    /// 打印识别出的文字
    #[arg(short, long, default_value_t = false)]
    pub print: bool,

    /// 将识别出的文字写入图片同目录同名的文本文件
    #[arg(short, long, default_value_t = false)]
    pub write: bool,

    /// 配置文件路径, 文件不存在时使用默认配置
    #[arg(long, default_value = "ocrclip.yaml")]
    pub config: PathBuf,

    /// tesseract 程序路径, 覆盖配置文件
    #[arg(long)]
    pub tesseract: Option<String>,

    /// 语言数据目录, 覆盖配置文件
    #[arg(long)]
    pub tessdata_dir: Option<PathBuf>,

    /// 批处理结束后等待输出完成的时长, 覆盖配置文件 (单位: 毫秒)
    #[arg(long)]
    pub flush_delay: Option<u64>,

    /// 日志等级 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: Level,

    /// 日志文件路径, 不指定时只输出到控制台
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// 追加日志到文件
    #[arg(long, default_value_t = false)]
    pub append_log: bool,
}

impl Args {
    /// 创建命令行参数解析器
    pub fn new() -> Self {
        Self::parse()
    }

    /// 打印帮助信息
    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}
