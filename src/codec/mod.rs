//! Type-driven encode/decode engine.
//!
//! Three capability traits form a closed set over the wire kinds the Kafka
//! protocol uses (fixed-width integers, length-prefixed strings and byte
//! arrays, counted sequences, and composite structs):
//!
//! - [`Sizeable`] computes the exact encoded length without any I/O,
//! - [`Encodable`] appends exactly that many bytes to a buffer,
//! - [`Decodable`] consumes them back through a [`BudgetedReader`].
//!
//! Dispatch is static: each field of a protocol struct picks its codec at
//! compile time through these impls, and composite types visit their fields
//! in declaration order. There is no runtime type inspection anywhere on the
//! data path.
//!
//! The engine is stateless and re-entrant. Concurrent encodes and decodes on
//! independent buffers and sources need no coordination.

pub mod primitive;
pub mod reader;
pub mod sequence;
pub mod varlen;

use std::io::Read;

use bytes::{BufMut, BytesMut};

pub use reader::BudgetedReader;

use crate::error::Result;

/// Exact encoded length, computed without performing any I/O.
///
/// Request headers must declare their total size before the body is
/// serialized, so this must agree byte-for-byte with [`Encodable::encode`].
pub trait Sizeable {
    fn wire_size(&self) -> usize;
}

/// Append the wire encoding of `self` to `buf`.
///
/// Encoding a well-formed value cannot fail; exactly
/// [`Sizeable::wire_size`] bytes are appended.
pub trait Encodable: Sizeable {
    fn encode<B: BufMut>(&self, buf: &mut B);
}

/// Reconstruct a value from a budget-tracked byte source.
pub trait Decodable: Sized {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self>;
}

/// Encoded length of `value` in bytes. Never blocks, never fails.
pub fn sizeof<T: Sizeable + ?Sized>(value: &T) -> usize {
    value.wire_size()
}

/// Append the encoding of `value` to `buf`, returning the byte count written.
pub fn write<T: Encodable + ?Sized>(value: &T, buf: &mut BytesMut) -> usize {
    let n = value.wire_size();
    value.encode(buf);
    n
}

/// Decode one `T` from `src`, consuming at most `budget` bytes.
///
/// Returns the value and the unconsumed remainder of the budget. A non-zero
/// remainder means the source carried trailing bytes the schema did not
/// account for; whether that is a version mismatch is for the caller to
/// judge.
pub fn read<T, R>(src: R, budget: usize) -> Result<(T, usize)>
where
    T: Decodable,
    R: Read,
{
    let mut reader = BudgetedReader::new(src, budget);
    let value = T::decode(&mut reader)?;
    Ok((value, reader.remaining()))
}

/// Declares a protocol struct together with its codec implementations.
///
/// The field list written here is the schema: encode, decode, and sizeof all
/// visit the fields in exactly this order, and each field dispatches to the
/// codec matching its type. A struct with zero fields encodes and decodes as
/// zero bytes.
#[macro_export]
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $ty,)*
        }

        impl $crate::codec::Sizeable for $name {
            fn wire_size(&self) -> usize {
                0 $(+ $crate::codec::Sizeable::wire_size(&self.$field))*
            }
        }

        impl $crate::codec::Encodable for $name {
            fn encode<B: ::bytes::BufMut>(&self, buf: &mut B) {
                $($crate::codec::Encodable::encode(&self.$field, buf);)*
            }
        }

        impl $crate::codec::Decodable for $name {
            fn decode<R: ::std::io::Read>(
                src: &mut $crate::codec::BudgetedReader<R>,
            ) -> $crate::error::Result<Self> {
                $(let $field = <$ty as $crate::codec::Decodable>::decode(src)?;)*
                Ok(Self { $($field,)* })
            }
        }
    };
}
