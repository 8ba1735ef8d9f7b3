use crate::error::{Error, Result};

/// 体素网格数据结构
/// 表示三维规则网格上的 8 位密度采样
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    /// 网格维度 [nx, ny, nz]
    pub shape: [usize; 3],
    /// 数据数组，按 C 语言顺序存储 (z变化最快，y其次，x最慢)
    /// 索引计算: index = (i * ny + j) * nz + k
    pub data: Vec<u8>,
}

impl VoxelGrid {
    /// 创建新的体素网格
    pub fn new(shape: [usize; 3], data: Vec<u8>) -> Result<Self> {
        let total_elements = element_count(shape)?;

        if data.len() != total_elements {
            return Err(Error::ShapeMismatch {
                shape,
                expected: total_elements,
                actual: data.len(),
            });
        }

        Ok(VoxelGrid { shape, data })
    }

    /// 获取整个数据向量的引用
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// 获取 shape
    pub fn get_shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 读取 (i, j, k) 处的体素，越界返回 None
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<u8> {
        let [nx, ny, nz] = self.shape;
        if i >= nx || j >= ny || k >= nz {
            return None;
        }
        self.data.get((i * ny + j) * nz + k).copied()
    }

    /// 反转全部坐标轴后按行主序展平
    ///
    /// 结果的 shape 为 [nz, ny, nx]，x 变化最快：
    /// 输出索引 (k * ny + j) * nx + i 取自源索引 (i * ny + j) * nz + k
    pub fn reversed_axes_flat(&self) -> Vec<u8> {
        let [nx, ny, nz] = self.shape;
        let mut out = Vec::with_capacity(self.data.len());

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    out.push(self.data[(i * ny + j) * nz + k]);
                }
            }
        }

        out
    }
}

/// 计算 shape 的元素总数，溢出时返回错误
pub fn element_count(shape: [usize; 3]) -> Result<usize> {
    shape[0]
        .checked_mul(shape[1])
        .and_then(|n| n.checked_mul(shape[2]))
        .ok_or(Error::GridTooLarge { shape })
}
