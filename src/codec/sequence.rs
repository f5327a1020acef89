//! Counted sequences.
//!
//! A sequence is an `i32` element count followed by each element's encoding
//! in iteration order. Count `-1` denotes an absent sequence, which is
//! distinct from a present empty one (count `0`). As with strings and byte
//! arrays, only `Option<Vec<T>>` destinations accept the nil sentinel.

use std::io::Read;

use bytes::BufMut;
use tracing::warn;

use crate::codec::{BudgetedReader, Decodable, Encodable, Sizeable};
use crate::error::{Result, WireError};

impl<T: Sizeable> Sizeable for Vec<T> {
    fn wire_size(&self) -> usize {
        4 + self.iter().map(Sizeable::wire_size).sum::<usize>()
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        debug_assert!(self.len() <= i32::MAX as usize);
        buf.put_i32(self.len() as i32);
        for item in self {
            item.encode(buf);
        }
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        match sequence_count(src)? {
            Some(count) => decode_elements(src, count),
            None => Err(WireError::TypeMismatch {
                expected: "sequence",
                wire: "nil sequence",
            }),
        }
    }
}

impl<T: Sizeable> Sizeable for Option<Vec<T>> {
    fn wire_size(&self) -> usize {
        match self {
            Some(items) => items.wire_size(),
            None => 4,
        }
    }
}

impl<T: Encodable> Encodable for Option<Vec<T>> {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        match self {
            Some(items) => items.encode(buf),
            None => buf.put_i32(-1),
        }
    }
}

impl<T: Decodable> Decodable for Option<Vec<T>> {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        match sequence_count(src)? {
            Some(count) => Ok(Some(decode_elements(src, count)?)),
            None => Ok(None),
        }
    }
}

fn sequence_count<R: Read>(src: &mut BudgetedReader<R>) -> Result<Option<usize>> {
    let count = i32::decode(src)?;
    match count {
        -1 => Ok(None),
        c if c < -1 => {
            warn!(count = c, "sequence count prefix below the nil sentinel");
            Err(WireError::MalformedLength(c))
        }
        c => Ok(Some(c as usize)),
    }
}

fn decode_elements<T: Decodable, R: Read>(
    src: &mut BudgetedReader<R>,
    count: usize,
) -> Result<Vec<T>> {
    // cap the preallocation by the bytes actually left in the frame so a
    // hostile count prefix cannot drive a huge allocation
    let mut items = Vec::with_capacity(count.min(src.remaining()));
    for _ in 0..count {
        items.push(T::decode(src)?);
    }
    Ok(items)
}
