use std::{
    io::{Write, stderr, stdout},
    time::Duration,
};

use anyhow::Result;
use ocr::TesseractOcr;
use settings::{DEFAULT_LANGUAGE, Settings};
use tracing::{debug, error, warn};

use crate::{
    args::Args, clipboard::SystemClipboard, job::JobOptions, log::init_log,
    recognizer::Recognizer, validator::validate,
};

mod args;
mod clipboard;
mod error;
mod job;
mod log;
mod progress;
mod recognizer;
mod runner;
#[cfg(test)]
mod testing;
mod validator;

/// 合并命令行参数和配置文件得到任务选项
///
/// # 参数
///
/// * `args` - 命令行参数
/// * `settings` - 配置
fn job_options(args: &Args, settings: &Settings) -> JobOptions {
    JobOptions {
        lang: args
            .lang
            .clone()
            .or_else(|| settings.language.clone())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        print: args.print,
        clean_up: args.clean_up,
        write: args.write,
    }
}

/// 程序入口
fn application() -> Result<()> {
    let args = Args::new();

    init_log(&args)?;

    let settings = Settings::load_or_default(&args.config)?;

    let lang = args.lang.as_deref().or(settings.language.as_deref());
    if let Err(e) = validate(&args.paths, lang) {
        eprintln!("\n{}", e);
        Args::print_help()?;
        return Ok(());
    }

    let options = job_options(&args, &settings);
    debug!("任务选项: {:?}", options);

    // OCR 识别
    let ocr = TesseractOcr::new(args.tesseract.as_deref().unwrap_or(&settings.tesseract))
        .with_tessdata_dir(args.tessdata_dir.clone().or(settings.tessdata_dir.clone()))
        .with_extra_args(settings.extra_args.clone());
    if !ocr.is_available() {
        warn!("未检测到可用的 tesseract 程序, 识别任务可能全部失败");
    }

    let recognizer = Recognizer::new(&ocr, Box::new(SystemClipboard::new()), stdout());
    let flush_delay = Duration::from_millis(args.flush_delay.unwrap_or(settings.flush_delay));
    runner::run(recognizer, &args.paths, &options, flush_delay)
}

/// 报告程序异常
///
/// 日志记录器尚未初始化 (如日志文件无法打开) 时直接写入 `fallback`
///
/// # 参数
///
/// * `e` - 异常
/// * `logger_ready` - 日志记录器是否已初始化
/// * `fallback` - 日志不可用时的输出
fn report_failure(e: &anyhow::Error, logger_ready: bool, mut fallback: impl Write) {
    if logger_ready {
        error!("程序存在异常: {:#}", e);
    } else {
        let _ = writeln!(fallback, "程序存在异常: {:#}", e);
    }
}

fn main() {
    if let Err(e) = application() {
        report_failure(&e, tracing::dispatcher::has_been_set(), stderr());
        std::process::exit(1);
    }
}
