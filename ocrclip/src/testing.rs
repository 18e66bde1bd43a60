use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{Result, anyhow, bail};
use ocr::{Ocr, OcrRequest, OcrResult};

use crate::{clipboard::Clipboard, recognizer::Recognizer};

/// 按预设结果依次返回的识别器
pub struct FakeOcr {
    results: RefCell<VecDeque<Result<&'static str, &'static str>>>,
    requests: RefCell<Vec<OcrRequest>>,
}

impl FakeOcr {
    pub fn new(results: Vec<Result<&'static str, &'static str>>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<OcrRequest> {
        self.requests.borrow().clone()
    }
}

impl Ocr for FakeOcr {
    fn recognize(&self, request: &OcrRequest, progress: &mut dyn FnMut(f32)) -> Result<OcrResult> {
        self.requests.borrow_mut().push(request.clone());
        progress(0.01);
        progress(0.5);
        match self.results.borrow_mut().pop_front() {
            Some(Ok(text)) => {
                progress(1.0);
                Ok(OcrResult {
                    text: text.to_string(),
                })
            }
            Some(Err(message)) => Err(anyhow!(message)),
            None => bail!("没有预设的识别结果"),
        }
    }
}

/// 内存剪贴板
///
/// 克隆体共享写入记录, 交给识别器后仍可在测试中查看;
/// 所有克隆体都释放后 `released` 变为 true
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    texts: Rc<RefCell<Vec<String>>>,
    holder: Rc<ReleaseFlag>,
    fail: bool,
}

#[derive(Default)]
struct ReleaseFlag(Rc<Cell<bool>>);

impl Drop for ReleaseFlag {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// 已写入的文本
    pub fn texts(&self) -> Vec<String> {
        self.texts.borrow().clone()
    }

    /// 释放标记, 所有克隆体释放后为 true
    pub fn released(&self) -> Rc<Cell<bool>> {
        self.holder.0.clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            bail!("剪贴板不可用");
        }
        self.texts.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// 在目录下创建一个图片文件, 返回路径
pub fn image_in(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
    path
}

/// 创建不显示进度条, 输出到内存的识别器
pub fn quiet_recognizer<'a>(
    ocr: &'a FakeOcr,
    clipboard: &MemoryClipboard,
) -> Recognizer<'a, Vec<u8>> {
    Recognizer::new(ocr, Box::new(clipboard.clone()), Vec::new()).with_progress(false)
}
