//! VOL 体数据文件转 JSON
//!
//! VOL 文件由 28 字节大端头部和 dimX*dimY*dimZ 个 u8 体素组成，
//! 输出 JSON 包含头部字段与轴反转后展平的 `data` 数组。

pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod parser_registry;
pub mod parsers;
pub mod utils;
pub mod volume;
pub mod voxel_grid;

pub use config::ConvertConfig;
pub use convert::{ConversionReport, convert};
pub use error::{Error, Result};
pub use volume::{VolHeader, Volume};
pub use voxel_grid::VoxelGrid;
