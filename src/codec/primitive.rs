//! Fixed-width primitives.
//!
//! All integers are big-endian two's complement, per the Kafka protocol.
//! `bool` rides on a single byte: zero is false, anything else is true.

use std::io::Read;

use bytes::BufMut;

use crate::codec::{BudgetedReader, Decodable, Encodable, Sizeable};
use crate::error::Result;

macro_rules! fixed_width {
    ($ty:ty, $width:expr, $put:ident) => {
        impl Sizeable for $ty {
            fn wire_size(&self) -> usize {
                $width
            }
        }

        impl Encodable for $ty {
            fn encode<B: BufMut>(&self, buf: &mut B) {
                buf.$put(*self);
            }
        }

        impl Decodable for $ty {
            fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
                let mut raw = [0u8; $width];
                src.read_exact(&mut raw)?;
                Ok(<$ty>::from_be_bytes(raw))
            }
        }
    };
}

fixed_width!(i8, 1, put_i8);
fixed_width!(i16, 2, put_i16);
fixed_width!(i32, 4, put_i32);
fixed_width!(i64, 8, put_i64);

impl Sizeable for bool {
    fn wire_size(&self) -> usize {
        1
    }
}

impl Encodable for bool {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(*self as u8);
    }
}

impl Decodable for bool {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        let mut raw = [0u8; 1];
        src.read_exact(&mut raw)?;
        Ok(raw[0] != 0)
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use proptest::prelude::*;

    use crate::codec::{read, sizeof, write};
    use crate::error::WireError;

    fn round_trip<T>(value: T)
    where
        T: super::Encodable + super::Decodable + PartialEq + std::fmt::Debug,
    {
        let mut buf = BytesMut::new();
        let written = write(&value, &mut buf);
        assert_eq!(written, sizeof(&value));
        assert_eq!(written, buf.len());

        let (decoded, leftover): (T, usize) = read(&buf[..], buf.len()).unwrap();
        assert_eq!(leftover, 0);
        assert_eq!(decoded, value);
    }

    #[test]
    fn integer_widths() {
        assert_eq!(sizeof(&42i8), 1);
        assert_eq!(sizeof(&42i16), 2);
        assert_eq!(sizeof(&42i32), 4);
        assert_eq!(sizeof(&42i64), 8);
    }

    #[test]
    fn big_endian_layout() {
        let mut buf = BytesMut::new();
        write(&0x0102i16, &mut buf);
        assert_eq!(&buf[..], &[0x01, 0x02]);

        buf.clear();
        write(&-1i32, &mut buf);
        assert_eq!(&buf[..], &[0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn bool_as_single_byte() {
        let mut buf = BytesMut::new();
        write(&true, &mut buf);
        write(&false, &mut buf);
        assert_eq!(&buf[..], &[1, 0]);

        // any non-zero byte decodes as true
        let (flag, _): (bool, usize) = read(&[7u8][..], 1).unwrap();
        assert!(flag);
    }

    #[test]
    fn decode_fails_on_short_budget() {
        let data = [0u8, 0, 0, 42];
        let err = read::<i32, _>(&data[..], 2).unwrap_err();
        assert!(matches!(err, WireError::BudgetExceeded { .. }));
    }

    proptest! {
        #[test]
        fn i16_round_trips(v in any::<i16>()) {
            round_trip(v);
        }

        #[test]
        fn i32_round_trips(v in any::<i32>()) {
            round_trip(v);
        }

        #[test]
        fn i64_round_trips(v in any::<i64>()) {
            round_trip(v);
        }
    }
}
