use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("boundary {boundary} exceeds word width {bits} / 边界 {boundary} 超出字宽 {bits}")]
  Boundary { boundary: u32, bits: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
