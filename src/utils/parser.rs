use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::volume::Volume;

/// 体素网格解析器 trait
/// 不同文件格式需要实现这个 trait
pub trait VoxelGridParser: Send + Sync {
    /// 获取支持的文件扩展名（不含点号），例如: "vol"
    fn supported_extensions(&self) -> Vec<&'static str>;

    /// 检查文件扩展名是否被支持
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// 从字节流解析，流位于文件起始处
    fn parse(&self, reader: &mut dyn Read) -> Result<Volume>;

    /// 从文件路径解析体素网格数据
    fn parse_from_file(&self, file_path: &Path) -> Result<Volume> {
        let file = File::open(file_path)?;
        let mut reader = BufReader::new(file);
        self.parse(&mut reader)
    }

    /// 获取解析器名称（用于日志和错误信息）
    fn name(&self) -> &'static str;
}
