use anyhow::{Context, Result};
use tracing::debug;

/// 剪贴板接口
pub trait Clipboard {
    /// 将文本写入剪贴板
    ///
    /// # 参数
    ///
    /// * `text` - 文本
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// 系统剪贴板
///
/// 首次写入时才连接系统剪贴板, 连接在整个批处理期间保持.
/// 释放时 (Linux 下) 才把剪贴板内容交给系统剪贴板管理器,
/// 因此必须在进程退出前释放
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new().context("连接系统剪贴板失败")?;
                debug!("系统剪贴板连接成功");
                clipboard
            }
        };
        self.inner
            .insert(clipboard)
            .set_text(text)
            .context("写入剪贴板失败")
    }
}
