use std::{io::Write, path::PathBuf, process, thread, time::Duration};

use tracing::info;

use crate::{
    job::{JobOptions, JobRequest},
    recognizer::{JobOutcome, Recognizer},
};

/// 批处理统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub delivered: usize,
    pub failed: usize,
}

/// 按输入顺序依次执行识别任务
///
/// 上一个任务 (包括复制, 打印, 写文件) 全部完成后才开始下一个任务,
/// 单个任务失败不影响后续任务
///
/// # 参数
///
/// * `recognizer` - 识别器
/// * `paths` - 图片路径
/// * `options` - 任务选项
pub fn run_batch<W: Write>(
    recognizer: &mut Recognizer<W>,
    paths: &[PathBuf],
    options: &JobOptions,
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for (index, path) in paths.iter().enumerate() {
        info!("任务 {}/{}: {}", index + 1, paths.len(), path.display());
        match recognizer.recognize(&JobRequest::new(path, options)) {
            JobOutcome::Delivered => summary.delivered += 1,
            JobOutcome::Failed => summary.failed += 1,
        }
    }
    summary
}

/// 执行批处理并释放识别器
///
/// 剪贴板随识别器一起释放, 释放时才会把剪贴板内容交给系统剪贴板管理器,
/// 必须在 `process::exit` 之前完成
///
/// # 参数
///
/// * `recognizer` - 识别器
/// * `paths` - 图片路径
/// * `options` - 任务选项
pub fn complete_batch<W: Write>(
    mut recognizer: Recognizer<W>,
    paths: &[PathBuf],
    options: &JobOptions,
) -> BatchSummary {
    let summary = run_batch(&mut recognizer, paths, options);
    drop(recognizer);
    summary
}

/// 执行批处理, 等待输出完成后退出进程
///
/// 不论任务成功与否, 进程都以状态码 0 退出
///
/// # 参数
///
/// * `recognizer` - 识别器
/// * `paths` - 图片路径
/// * `options` - 任务选项
/// * `flush_delay` - 退出前的等待时长
pub fn run<W: Write>(
    recognizer: Recognizer<W>,
    paths: &[PathBuf],
    options: &JobOptions,
    flush_delay: Duration,
) -> ! {
    let summary = complete_batch(recognizer, paths, options);
    info!(
        "批处理完成, 成功: {}, 失败: {}",
        summary.delivered, summary.failed
    );
    thread::sleep(flush_delay);
    process::exit(0)
}
