//! Owned, SIMD-aligned matrix buffers.
//!
//! Every test case owns its buffers (A, C and the reference snapshot) as
//! `AlignedBuf` values: the allocation is released by `Drop` on every exit
//! path, including `?` early returns, so a failed second or third
//! allocation cannot leak the first.
//!
//! # Example
//!
//! ```
//! use herkbench_core::AlignedBuf;
//!
//! let mut c = AlignedBuf::<f64>::zeroed(16).unwrap();
//! c.fill(1.0);
//! assert_eq!(c.iter().sum::<f64>(), 16.0);
//! ```

use std::alloc;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::AllocError;
use crate::scalar::Scalar;

/// Alignment for all buffer allocations (AVX-512 = 64 bytes).
pub const ALIGNMENT: usize = 64;

/// Heap buffer of `len` scalars, 64-byte aligned, zero-initialised.
pub struct AlignedBuf<T: Scalar> {
    ptr: NonNull<T>,
    len: usize,
    layout: alloc::Layout,
}

// Safety: AlignedBuf uniquely owns its allocation, like Vec<T>.
unsafe impl<T: Scalar> Send for AlignedBuf<T> {}
unsafe impl<T: Scalar> Sync for AlignedBuf<T> {}

impl<T: Scalar> AlignedBuf<T> {
    /// Allocate `len` elements, all set to zero.
    pub fn zeroed(len: usize) -> Result<Self, AllocError> {
        let layout = alloc::Layout::array::<T>(len)
            .and_then(|l| l.align_to(ALIGNMENT))
            .map(|l| l.pad_to_align())
            .map_err(|_| AllocError::Overflow { elements: len })?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
                layout,
            });
        }

        let raw = unsafe { alloc::alloc(layout) } as *mut T;
        let ptr = NonNull::new(raw).ok_or(AllocError::OutOfMemory {
            bytes: layout.size(),
        })?;
        for i in 0..len {
            unsafe { ptr.as_ptr().add(i).write(T::zero()) };
        }
        Ok(Self { ptr, len, layout })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes actually reserved (including alignment padding).
    pub fn byte_capacity(&self) -> usize {
        self.layout.size()
    }
}

impl<T: Scalar> Deref for AlignedBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Scalar> DerefMut for AlignedBuf<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Scalar> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        if self.layout.size() > 0 {
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
        }
    }
}

impl<T: Scalar> std::fmt::Debug for AlignedBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("len", &self.len)
            .field("bytes", &self.layout.size())
            .finish()
    }
}
