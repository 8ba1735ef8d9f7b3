use serde::{Serialize, Serializer};

use crate::voxel_grid::VoxelGrid;

/// VOL 文件头部，7 个定长大端字段
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolHeader {
    pub dim_x: i32,
    pub dim_y: i32,
    pub dim_z: i32,
    pub saved_border_size: i32,
    /// 物理尺寸，输出时按 f64 写出
    #[serde(serialize_with = "widen_f32")]
    pub true_size_x: f32,
    #[serde(serialize_with = "widen_f32")]
    pub true_size_y: f32,
    #[serde(serialize_with = "widen_f32")]
    pub true_size_z: f32,
}

impl VolHeader {
    /// 头部字节数
    pub const SIZE: usize = 28;

    /// 字段名，按文件中的顺序
    pub const FIELD_NAMES: [&'static str; 7] = [
        "dimX",
        "dimY",
        "dimZ",
        "savedBorderSize",
        "trueSizeX",
        "trueSizeY",
        "trueSizeZ",
    ];
}

fn widen_f32<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(f64::from(*value))
}

/// 解码后的 VOL 文件：头部 + 形状为 (dimX, dimY, dimZ) 的体素网格
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub header: VolHeader,
    pub grid: VoxelGrid,
}
