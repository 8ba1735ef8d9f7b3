//! 转换过程中的错误类型

use thiserror::Error;

/// 转换操作的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 文件读写错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 头部字段不足 4 字节
    #[error("头部字段 {field} 读取失败: 剩余字节不足 4 个")]
    MissingHeaderField { field: &'static str },

    #[error("维度 {axis} 为负数: {value}")]
    NegativeDimension { axis: &'static str, value: i32 },

    /// dimX*dimY*dimZ 溢出 usize
    #[error("网格尺寸溢出: shape {shape:?}")]
    GridTooLarge { shape: [usize; 3] },

    #[error("体素数据被截断: 需要 {expected} 字节，实际只有 {actual} 字节")]
    TruncatedVoxelData { expected: usize, actual: usize },

    #[error("数据量不匹配: shape {shape:?} 需要 {expected} 个元素，但提供了 {actual} 个")]
    ShapeMismatch {
        shape: [usize; 3],
        expected: usize,
        actual: usize,
    },

    #[error("不支持的文件格式: {file} (支持: {supported:?})")]
    UnsupportedFormat {
        file: String,
        supported: Vec<String>,
    },

    #[error("配置无效: {0}")]
    InvalidConfig(String),
}
