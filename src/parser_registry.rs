use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::parser::VoxelGridParser;

/// 解析器注册表
/// 管理所有可用的体素网格解析器，并根据文件扩展名匹配对应的解析器
pub struct ParserRegistry {
    parsers: Vec<Box<dyn VoxelGridParser>>,
}

impl ParserRegistry {
    /// 创建新的解析器注册表，自动注册所有可用的解析器
    pub fn new() -> Self {
        let parsers = crate::parsers::get_all_parsers();
        Self { parsers }
    }

    /// 根据文件扩展名查找匹配的解析器
    /// extension: 文件扩展名（不含点号），例如 "vol"
    pub fn find_parser(&self, extension: &str) -> Option<&dyn VoxelGridParser> {
        self.parsers
            .iter()
            .find(|parser| parser.supports(extension))
            .map(|p| p.as_ref())
    }

    /// 根据文件路径查找匹配的解析器
    /// 自动提取文件扩展名
    pub fn find_parser_for_file(&self, file_path: &Path) -> Option<(&dyn VoxelGridParser, String)> {
        let extension = file_path.extension().and_then(|ext| ext.to_str())?.to_string();

        self.find_parser(&extension)
            .map(|parser| (parser, extension))
    }

    /// 同 find_parser_for_file，找不到时返回带支持列表的错误
    pub fn require_parser_for_file(&self, file_path: &Path) -> Result<&dyn VoxelGridParser> {
        self.find_parser_for_file(file_path)
            .map(|(parser, _)| parser)
            .ok_or_else(|| Error::UnsupportedFormat {
                file: file_path.display().to_string(),
                supported: self.supported_extensions(),
            })
    }

    /// 获取所有支持的扩展名列表
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut extensions = Vec::new();
        for parser in &self.parsers {
            extensions.extend(
                parser
                    .supported_extensions()
                    .iter()
                    .map(|s| s.to_lowercase()),
            );
        }
        extensions.sort();
        extensions.dedup();
        extensions
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_vol_parser_by_path() {
        let registry = ParserRegistry::new();
        let (parser, ext) = registry
            .find_parser_for_file(Path::new("data/Skull.VOL"))
            .unwrap();
        assert_eq!(parser.name(), "VOL Parser");
        assert_eq!(ext, "VOL");
    }

    #[test]
    fn unknown_extension_lists_supported() {
        let registry = ParserRegistry::new();
        assert!(registry.find_parser_for_file(Path::new("Skull")).is_none());

        let err = registry
            .require_parser_for_file(Path::new("CHGDIFF.vasp"))
            .err()
            .unwrap();
        match err {
            Error::UnsupportedFormat { supported, .. } => assert_eq!(supported, vec!["vol"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
