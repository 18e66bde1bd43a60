use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::ocr::{Ocr, OcrRequest, OcrResult};

/// 进程已启动
const PROGRESS_STARTED: f32 = 0.1;
/// 进程输出已读取完毕
const PROGRESS_COLLECTED: f32 = 0.9;
/// 识别完成
const PROGRESS_DONE: f32 = 1.0;

/// 基于 Tesseract 命令行程序的 OCR 实现
///
/// 每次识别启动一个 `tesseract <image> stdout -l <lang>` 进程
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    program: PathBuf,
    tessdata_dir: Option<PathBuf>,
    extra_args: Vec<String>,
}

impl TesseractOcr {
    /// 创建 TesseractOcr 实例
    ///
    /// # 参数
    ///
    /// * `program` - tesseract 程序路径, 可以只写程序名
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            tessdata_dir: None,
            extra_args: vec![],
        }
    }

    /// 指定语言数据目录
    pub fn with_tessdata_dir(mut self, tessdata_dir: Option<PathBuf>) -> Self {
        self.tessdata_dir = tessdata_dir;
        self
    }

    /// 追加传给 tesseract 的参数
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    /// 检查 tesseract 程序是否可用
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// 构建识别命令
    ///
    /// # 参数
    ///
    /// * `request` - 识别请求
    fn command(&self, request: &OcrRequest) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(&request.image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&request.lang);
        if let Some(tessdata_dir) = &self.tessdata_dir {
            command.arg("--tessdata-dir").arg(tessdata_dir);
        }
        command.args(&self.extra_args);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Ocr for TesseractOcr {
    fn recognize(&self, request: &OcrRequest, progress: &mut dyn FnMut(f32)) -> Result<OcrResult> {
        let mut command = self.command(request);
        debug!("执行识别命令: {:?}", command);

        let child = command
            .spawn()
            .with_context(|| format!("启动识别程序 {} 失败", self.program.display()))?;
        progress(PROGRESS_STARTED);

        let output = child.wait_with_output().context("等待识别程序结束失败")?;
        progress(PROGRESS_COLLECTED);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "识别程序异常退出 ({}): {}",
                output.status,
                stderr.trim()
            ));
        }

        let text = String::from_utf8(output.stdout).context("识别结果不是有效的 UTF-8 文本")?;
        progress(PROGRESS_DONE);

        debug!("识别结果长度: {}", text.len());
        Ok(OcrResult { text })
    }
}
