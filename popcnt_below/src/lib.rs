#![cfg_attr(docsrs, feature(doc_cfg))]

//! Count set bits below a bit boundary
//! 统计位边界以下的置位数
//!
//! ```rust
//! use popcnt_below::popcnt_below;
//!
//! assert_eq!(popcnt_below(0b1111, 2), 2);
//! assert_eq!(popcnt_below(0b1010, 3), 1);
//! assert_eq!(popcnt_below(u64::MAX, 64), 64);
//! assert_eq!(popcnt_below(u64::MAX, 0), 0);
//! ```

pub mod error;
mod word;

pub use error::{Error, Result};
pub use word::Word;

/// Count set bits by repeatedly clearing the lowest one.
/// Runs in time proportional to the number of set bits.
/// 逐次清除最低置位计数，耗时与置位数成正比。
#[inline]
#[must_use]
pub fn kernighan<W: Word>(mut w: W) -> u32 {
  let mut cnt = 0;
  while w != W::ZERO {
    w = w.clear_lowest();
    cnt += 1;
  }
  cnt
}

#[cfg(not(feature = "kernighan"))]
#[inline(always)]
fn cnt1<W: Word>(w: W) -> u32 {
  w.count_ones()
}

#[cfg(feature = "kernighan")]
#[inline(always)]
fn cnt1<W: Word>(w: W) -> u32 {
  kernighan(w)
}

/// Number of set bits among the `boundary` low bits of `value`.
/// 统计 `value` 低 `boundary` 位中的置位数。
///
/// `boundary == 0` yields 0. Any `boundary >= W::BITS` counts the whole word.
/// `boundary == 0` 返回 0；`boundary >= W::BITS` 统计整个字。
#[inline]
#[must_use]
pub fn cnt1_below<W: Word>(value: W, boundary: u32) -> u32 {
  if boundary == 0 {
    return 0;
  }
  let w = if boundary < W::BITS {
    // Align the in-scope bits to the top, dropping everything above the boundary
    // 将边界内的位对齐到高位，丢弃边界以上的位
    value.shl(W::BITS - boundary)
  } else {
    value
  };
  cnt1(w)
}

/// Like [`cnt1_below`], but rejects `boundary > W::BITS`.
/// 同 [`cnt1_below`]，但拒绝 `boundary > W::BITS`。
///
/// # Errors
/// Returns `Error::Boundary` if `boundary` exceeds the word width
#[inline]
pub fn try_cnt1_below<W: Word>(value: W, boundary: u32) -> Result<u32> {
  if boundary > W::BITS {
    return Err(Error::Boundary {
      boundary,
      bits: W::BITS,
    });
  }
  Ok(cnt1_below(value, boundary))
}

/// Number of set bits among the `boundary` low bits of a `u64`.
/// 统计 `u64` 低 `boundary` 位中的置位数。
///
/// Boundaries above 64 are clamped to 64.
/// 大于 64 的边界按 64 处理。
#[inline]
#[must_use]
pub fn popcnt_below(value: u64, boundary: u32) -> u32 {
  cnt1_below(value, boundary)
}

/// # Errors
/// Returns `Error::Boundary` if `boundary > 64`
#[inline]
pub fn try_popcnt_below(value: u64, boundary: u32) -> Result<u32> {
  try_cnt1_below(value, boundary)
}
