use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use schemars::schema_for;
use settings::Settings;

const SETTINGS_SCHEMA_FILE: &str = "settings.schema.json";

/// 生成配置文件的 JSON Schema, 用于编辑器补全
///
/// 可通过第一个参数指定输出目录, 默认为当前目录
fn main() -> Result<()> {
    let output_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir).context("创建输出目录失败")?;

    let settings_schema = serde_json::to_string_pretty(&schema_for!(Settings))?;
    let output_file = output_dir.join(SETTINGS_SCHEMA_FILE);
    fs::write(&output_file, settings_schema).context("写入配置文件 Schema 失败")?;

    println!("已生成 {}", output_file.display());
    Ok(())
}
