mod vol;

pub use vol::{VolParser, read_header, read_voxel_grid};

/// 获取所有可用的解析器
pub fn get_all_parsers() -> Vec<Box<dyn crate::utils::parser::VoxelGridParser>> {
    vec![Box::new(VolParser::new())]
}
