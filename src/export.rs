use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::volume::{VolHeader, Volume};

/// 输出文档：头部字段 + 轴反转后展平的 data
#[derive(Debug, Serialize)]
pub struct VolDocument<'a> {
    #[serde(flatten)]
    pub header: &'a VolHeader,
    pub data: Vec<u8>,
}

impl<'a> VolDocument<'a> {
    pub fn from_volume(volume: &'a Volume) -> Self {
        Self {
            header: &volume.header,
            data: volume.grid.reversed_axes_flat(),
        }
    }
}

/// 以 4 空格缩进写出 JSON
pub fn write_json<W: Write>(writer: W, document: &VolDocument<'_>) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)?;
    Ok(())
}

pub fn to_json_string(document: &VolDocument<'_>) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, document)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// 写出到文件，返回写入的字节数
pub fn write_json_file(path: &Path, document: &VolDocument<'_>) -> Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, document)?;
    writer.flush()?;
    Ok(writer.get_ref().metadata()?.len())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::voxel_grid::VoxelGrid;

    fn unit_volume(value: u8) -> Volume {
        Volume {
            header: VolHeader {
                dim_x: 1,
                dim_y: 1,
                dim_z: 1,
                saved_border_size: 0,
                true_size_x: 1.0,
                true_size_y: 1.0,
                true_size_z: 1.0,
            },
            grid: VoxelGrid::new([1, 1, 1], vec![value]).unwrap(),
        }
    }

    #[test]
    fn single_voxel_document() {
        let volume = unit_volume(42);
        let text = to_json_string(&VolDocument::from_volume(&volume)).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            json!({
                "dimX": 1, "dimY": 1, "dimZ": 1, "savedBorderSize": 0,
                "trueSizeX": 1.0, "trueSizeY": 1.0, "trueSizeZ": 1.0,
                "data": [42]
            })
        );
    }

    #[test]
    fn uses_four_space_indent_and_field_order() {
        let volume = unit_volume(7);
        let text = to_json_string(&VolDocument::from_volume(&volume)).unwrap();
        assert!(text.starts_with("{\n    \"dimX\": 1,\n    \"dimY\": 1,"));
        assert!(text.contains("\n    \"trueSizeX\": 1.0,"));
        assert!(text.contains("\n    \"data\": [\n        7\n    ]"));

        let dim_x = text.find("\"dimX\"").unwrap();
        let border = text.find("\"savedBorderSize\"").unwrap();
        let data = text.find("\"data\"").unwrap();
        assert!(dim_x < border && border < data);
    }

    #[test]
    fn data_is_axis_reversed() {
        let mut volume = unit_volume(0);
        volume.header.dim_x = 2;
        volume.header.dim_y = 2;
        volume.header.dim_z = 2;
        volume.grid = VoxelGrid::new([2, 2, 2], (0..8).collect()).unwrap();

        let document = VolDocument::from_volume(&volume);
        assert_eq!(document.data, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }
}
