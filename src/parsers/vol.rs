use std::io::{self, ErrorKind, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};
use crate::utils::parser::VoxelGridParser;
use crate::volume::{VolHeader, Volume};
use crate::voxel_grid::{VoxelGrid, element_count};

/// VOL 文件格式解析器
/// 28 字节大端头部 + dimX*dimY*dimZ 个 u8 体素（x 最慢，z 最快）
pub struct VolParser;

impl VolParser {
    pub fn new() -> Self {
        VolParser
    }
}

impl Default for VolParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelGridParser for VolParser {
    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["vol"]
    }

    fn name(&self) -> &'static str {
        "VOL Parser"
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Volume> {
        let header = read_header(reader)?;
        let grid = read_voxel_grid(reader, &header)?;
        Ok(Volume { header, grid })
    }
}

fn read_i32_field(reader: &mut dyn Read, field: &'static str) -> Result<i32> {
    let value = reader
        .read_i32::<BigEndian>()
        .map_err(|e| header_error(e, field))?;
    tracing::info!("{} {}", field, value);
    Ok(value)
}

fn read_f32_field(reader: &mut dyn Read, field: &'static str) -> Result<f32> {
    let value = reader
        .read_f32::<BigEndian>()
        .map_err(|e| header_error(e, field))?;
    tracing::info!("{} {}", field, value);
    Ok(value)
}

fn header_error(err: io::Error, field: &'static str) -> Error {
    if err.kind() == ErrorKind::UnexpectedEof {
        Error::MissingHeaderField { field }
    } else {
        Error::Io(err)
    }
}

/// 按固定顺序读取 7 个头部字段
pub fn read_header(reader: &mut dyn Read) -> Result<VolHeader> {
    let [dim_x, dim_y, dim_z, border, size_x, size_y, size_z] = VolHeader::FIELD_NAMES;
    Ok(VolHeader {
        dim_x: read_i32_field(reader, dim_x)?,
        dim_y: read_i32_field(reader, dim_y)?,
        dim_z: read_i32_field(reader, dim_z)?,
        saved_border_size: read_i32_field(reader, border)?,
        true_size_x: read_f32_field(reader, size_x)?,
        true_size_y: read_f32_field(reader, size_y)?,
        true_size_z: read_f32_field(reader, size_z)?,
    })
}

fn dimension(axis: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::NegativeDimension { axis, value })
}

/// 读取紧跟头部的体素数据，shape 为 (dimX, dimY, dimZ)
pub fn read_voxel_grid(reader: &mut dyn Read, header: &VolHeader) -> Result<VoxelGrid> {
    let shape = [
        dimension("dimX", header.dim_x)?,
        dimension("dimY", header.dim_y)?,
        dimension("dimZ", header.dim_z)?,
    ];
    let size = element_count(shape)?;

    // 容量上限避免头部声明过大时提前分配
    let mut data = Vec::with_capacity(size.min(1 << 24));
    Read::take(&mut *reader, size as u64).read_to_end(&mut data)?;
    if data.len() < size {
        return Err(Error::TruncatedVoxelData {
            expected: size,
            actual: data.len(),
        });
    }

    let mut probe = [0u8; 1];
    if reader.read(&mut probe)? > 0 {
        tracing::warn!(expected = size, "体素数据之后还有多余字节，已忽略");
    }

    VoxelGrid::new(shape, data)
}

impl VolHeader {
    /// 按 VOL 头部布局写出
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<BigEndian>(self.dim_x)?;
        writer.write_i32::<BigEndian>(self.dim_y)?;
        writer.write_i32::<BigEndian>(self.dim_z)?;
        writer.write_i32::<BigEndian>(self.saved_border_size)?;
        writer.write_f32::<BigEndian>(self.true_size_x)?;
        writer.write_f32::<BigEndian>(self.true_size_y)?;
        writer.write_f32::<BigEndian>(self.true_size_z)?;
        Ok(())
    }
}

impl Volume {
    /// 写出完整的 VOL 文件（头部 + 体素）
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.header.write_to(writer)?;
        writer.write_all(self.grid.get_data())
    }
}
