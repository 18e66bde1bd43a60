use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 进度条总长度
pub const PROGRESS_TOTAL: u64 = 100;

const PROGRESS_TEMPLATE: &str = "recognizing [{bar:40}] {percent}% {elapsed}";

/// 识别进度条
///
/// 绑定单个识别任务, 每次只前进一格, 结束时补齐到 100
pub struct ProgressReporter {
    bar: ProgressBar,
    percent: u64, // 最近一次前进时的整数百分比
}

impl ProgressReporter {
    /// 创建输出到标准输出的进度条
    pub fn new() -> Result<Self> {
        Self::with_draw_target(ProgressDrawTarget::stdout())
    }

    /// 创建不显示的进度条
    pub fn hidden() -> Result<Self> {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    /// 创建进度条
    ///
    /// # 参数
    ///
    /// * `target` - 绘制目标
    pub fn with_draw_target(target: ProgressDrawTarget) -> Result<Self> {
        let bar = ProgressBar::with_draw_target(Some(PROGRESS_TOTAL), target);
        bar.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("=> "));
        Ok(Self { bar, percent: 0 })
    }

    /// 处理一次进度事件
    ///
    /// 只有换算后的整数百分比非零且大于上次前进时的百分比才前进一格,
    /// 相同百分比和接近 0 的进度不会让进度条前进
    ///
    /// # 参数
    ///
    /// * `progress` - [0, 1] 区间内的进度, 超出部分按边界处理
    pub fn update(&mut self, progress: f32) {
        let next = (progress.clamp(0.0, 1.0) * PROGRESS_TOTAL as f32).floor();
        // NaN 不满足任何比较
        if next >= 1.0 && next > self.percent as f32 {
            self.bar.inc(1);
            self.percent = next as u64;
        }
    }

    /// 结束进度条, 不足 100 时一次补齐
    pub fn finish(&mut self) {
        let position = self.bar.position();
        if position < PROGRESS_TOTAL {
            self.bar.inc(PROGRESS_TOTAL - position);
        }
        self.percent = PROGRESS_TOTAL;
        self.bar.finish();
    }

    /// 已前进的格数
    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
