extern crate std;

use std::io::{IoSlice, Write};

use crate::{FixedVec, HybridVec};

/// Write is implemented for `FixedVec<u8, N>` by appending to the vector.
///
/// If the vector is full, [`Write::write`] will return `Ok(0)`.
impl<const N: usize> Write for FixedVec<u8, N> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let num = core::cmp::min(self.remaining_capacity(), buf.len());
        self.extend_from_slice(&buf[..num]);
        Ok(num)
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let mut num = 0;
        for buf in bufs {
            if self.is_full() {
                break;
            }
            num += self.write(buf)?;
        }
        Ok(num)
    }
}

/// Write is implemented for `HybridVec<u8, N>` by appending to the vector.
/// The vector will grow as needed.
impl<const N: usize> Write for HybridVec<u8, N> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let num = bufs.iter().map(|b| b.len()).sum::<usize>();
        if self.len() + num > N {
            self.prepare(self.len() + num);
        }
        for buf in bufs {
            self.extend_from_slice(buf);
        }
        Ok(num)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }
}
