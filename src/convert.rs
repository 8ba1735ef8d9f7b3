use std::path::PathBuf;
use std::time::Instant;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::export::{VolDocument, write_json_file};
use crate::parser_registry::ParserRegistry;

/// 一次转换的结果摘要
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub shape: [usize; 3],
    pub voxel_count: usize,
    pub output_bytes: u64,
}

/// 读取 VOL 文件并写出 JSON
///
/// ## 流程
/// 1. 根据扩展名从注册表中找到解析器
/// 2. 解析头部与体素数据
/// 3. 反转坐标轴并展平
/// 4. 以 4 空格缩进写出 JSON
pub fn convert(config: &ConvertConfig) -> Result<ConversionReport> {
    let registry = ParserRegistry::new();
    convert_with(&registry, config)
}

pub fn convert_with(registry: &ParserRegistry, config: &ConvertConfig) -> Result<ConversionReport> {
    config.validate()?;
    let input = config.input_path();
    let output = config.output_path();

    let parser = registry.require_parser_for_file(&input)?;
    tracing::info!(input = %input.display(), parser = parser.name(), "[转换] 开始解析");

    let parse_start = Instant::now();
    let volume = parser.parse_from_file(&input)?;
    tracing::info!(
        shape = ?volume.grid.get_shape(),
        "[转换] 文件解析完成，耗时 {}ms",
        parse_start.elapsed().as_millis()
    );

    let write_start = Instant::now();
    let document = VolDocument::from_volume(&volume);
    let output_bytes = write_json_file(&output, &document)?;
    tracing::info!(
        output = %output.display(),
        bytes = output_bytes,
        "[转换] JSON 写出完成，耗时 {}ms",
        write_start.elapsed().as_millis()
    );

    Ok(ConversionReport {
        input,
        output,
        shape: volume.grid.get_shape(),
        voxel_count: document.data.len(),
        output_bytes,
    })
}
