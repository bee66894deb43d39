//! Unsigned machine words
//! 无符号机器字

use std::fmt::Debug;

/// Unsigned word whose low bits can be counted
/// 可统计低位置位数的无符号字
pub trait Word: Copy + Eq + Debug + Send + Sync + 'static {
  /// Width in bits / 位宽
  const BITS: u32;
  const ZERO: Self;

  /// Logical left shift, `n` must be < `BITS`
  /// 逻辑左移，`n` 必须小于 `BITS`
  fn shl(self, n: u32) -> Self;

  /// Clear the lowest set bit, zero stays zero
  /// 清除最低置位，零保持为零
  fn clear_lowest(self) -> Self;

  /// Hardware population count / 硬件置位计数
  fn count_ones(self) -> u32;
}

macro_rules! impl_word {
  ($($t:ty),*) => {
    $(
      impl Word for $t {
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;

        #[inline(always)]
        fn shl(self, n: u32) -> Self {
          self << n
        }

        #[inline(always)]
        fn clear_lowest(self) -> Self {
          self & self.wrapping_sub(1)
        }

        #[inline(always)]
        fn count_ones(self) -> u32 {
          <$t>::count_ones(self)
        }
      }
    )*
  };
}

impl_word!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
  use super::Word;

  #[test]
  fn bits_match_size() {
    assert_eq!(<u8 as Word>::BITS, 8);
    assert_eq!(<u16 as Word>::BITS, 16);
    assert_eq!(<u32 as Word>::BITS, 32);
    assert_eq!(<u64 as Word>::BITS, 64);
    assert_eq!(<u128 as Word>::BITS, 128);
    assert_eq!(<usize as Word>::BITS, usize::BITS);
  }

  #[test]
  fn clear_lowest() {
    assert_eq!(0b1011_0000u8.clear_lowest(), 0b1010_0000);
    assert_eq!(1u64.clear_lowest(), 0);
    assert_eq!(u64::MAX.clear_lowest(), u64::MAX - 1);
    assert_eq!((1u128 << 127).clear_lowest(), 0);
    assert_eq!(0u8.clear_lowest(), 0);
    assert_eq!(0u64.clear_lowest(), 0);
    assert_eq!(0u128.clear_lowest(), 0);
  }

  #[test]
  fn shl_drops_high_bits() {
    assert_eq!(Word::shl(0xF0u8, 4), 0);
    assert_eq!(Word::shl(0x0Fu8, 4), 0xF0);
    assert_eq!(Word::shl(u64::MAX, 63), 1 << 63);
  }
}
