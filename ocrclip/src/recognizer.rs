use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use common::{remove_last_char, text_file_path, traineddata_file_name};
use ocr::{Ocr, OcrRequest};
use tracing::{debug, error, info};

use crate::{clipboard::Clipboard, job::JobRequest, progress::ProgressReporter};

/// 复制完成提示
pub const COPY_FINISHED: &str = "Finished copying to clipboard!";

/// 任务结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Delivered, // 已复制到剪贴板
    Failed,    // 任务失败, 错误已记录
}

/// 识别器
///
/// 调用识别引擎完成单张图片的识别, 然后依次执行:
/// 清理语言数据, 复制到剪贴板, 打印结果, 写入文本文件
///
/// 识别器持有剪贴板, 释放识别器时剪贴板随之释放
pub struct Recognizer<'a, W: Write> {
    ocr: &'a dyn Ocr,
    clipboard: Box<dyn Clipboard + 'a>,
    out: W,
    work_dir: PathBuf,
    show_progress: bool,
}

impl<'a, W: Write> Recognizer<'a, W> {
    /// 创建识别器实例
    ///
    /// # 参数
    ///
    /// * `ocr` - 文字识别器
    /// * `clipboard` - 剪贴板
    /// * `out` - 识别结果和提示信息的输出
    pub fn new(ocr: &'a dyn Ocr, clipboard: Box<dyn Clipboard + 'a>, out: W) -> Self {
        Self {
            ocr,
            clipboard,
            out,
            work_dir: PathBuf::from("."),
            show_progress: true,
        }
    }

    /// 指定语言数据文件所在目录, 默认为当前目录
    #[cfg(test)]
    pub fn with_work_dir(mut self, work_dir: &Path) -> Self {
        self.work_dir = work_dir.to_path_buf();
        self
    }

    /// 是否显示进度条
    #[cfg(test)]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 输出
    #[cfg(test)]
    pub fn out(&self) -> &W {
        &self.out
    }

    /// 执行识别任务
    ///
    /// 所有错误都在这里记录, 不会向外传递, 保证批处理继续执行下一个任务
    ///
    /// # 参数
    ///
    /// * `job` - 识别任务
    pub fn recognize(&mut self, job: &JobRequest) -> JobOutcome {
        info!("开始识别: {}", job.image_path.display());
        match self.run_job(job) {
            Ok(()) => JobOutcome::Delivered,
            Err(e) => {
                error!("识别 {} 失败: {:#}", job.image_path.display(), e);
                JobOutcome::Failed
            }
        }
    }

    fn run_job(&mut self, job: &JobRequest) -> Result<()> {
        // 只有第一个路径经过预先校验, 其余路径在这里检查
        if !job.image_path.exists() {
            bail!("File path not found: {}", job.image_path.display());
        }

        let mut reporter = if self.show_progress {
            ProgressReporter::new()?
        } else {
            ProgressReporter::hidden()?
        };
        let request = OcrRequest::plain_text(&job.image_path, &job.lang);
        let result = self.ocr.recognize(&request, &mut |p| reporter.update(p));
        reporter.finish();
        let text = result.context("识别引擎出错")?.text;

        if job.clean_up {
            self.clean_up(&job.lang)?;
        }

        self.clipboard.set_text(&text)?;

        if job.print {
            writeln!(self.out, "\nResult:\n{}", remove_last_char(&text))?;
        }
        writeln!(self.out, "{}", COPY_FINISHED)?;
        self.out.flush()?;

        if job.write {
            let text_path = text_file_path(&job.image_path);
            match fs::write(&text_path, &text) {
                Ok(()) => debug!("识别结果已写入 {}", text_path.display()),
                Err(e) => error!("写入文本文件 {} 失败: {}", text_path.display(), e),
            }
        }

        Ok(())
    }

    /// 删除语言数据文件
    ///
    /// # 参数
    ///
    /// * `lang` - 语言代码
    fn clean_up(&self, lang: &str) -> Result<()> {
        let traineddata = self.work_dir.join(traineddata_file_name(lang));
        fs::remove_file(&traineddata)
            .with_context(|| format!("删除语言数据文件 {} 失败", traineddata.display()))?;
        debug!("已删除语言数据文件 {}", traineddata.display());
        Ok(())
    }
}
