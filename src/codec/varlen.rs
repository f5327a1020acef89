//! Length-prefixed strings and byte arrays.
//!
//! Strings carry an `i16` length prefix and UTF-8 payload; byte arrays carry
//! an `i32` prefix and raw payload. In both cases `-1` means null and `0`
//! means present-but-empty; the two are distinct states and survive a round
//! trip. Nullability lives in the destination type: `String` and `Bytes`
//! reject the null sentinel, `Option<String>` and `Option<Bytes>` accept it.

use std::io::Read;

use bytes::{BufMut, Bytes};
use tracing::warn;

use crate::codec::{BudgetedReader, Decodable, Encodable, Sizeable};
use crate::error::{Result, WireError};

impl Sizeable for String {
    fn wire_size(&self) -> usize {
        2 + self.len()
    }
}

impl Encodable for String {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        self.as_str().encode(buf);
    }
}

impl Sizeable for str {
    fn wire_size(&self) -> usize {
        2 + self.len()
    }
}

impl Encodable for str {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        debug_assert!(self.len() <= i16::MAX as usize);
        buf.put_i16(self.len() as i16);
        buf.put_slice(self.as_bytes());
    }
}

impl Decodable for String {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        match string_payload(src)? {
            Some(s) => Ok(s),
            None => Err(WireError::TypeMismatch {
                expected: "string",
                wire: "null string",
            }),
        }
    }
}

impl Sizeable for Option<String> {
    fn wire_size(&self) -> usize {
        match self {
            Some(s) => s.wire_size(),
            None => 2,
        }
    }
}

impl Encodable for Option<String> {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        match self {
            Some(s) => s.encode(buf),
            None => buf.put_i16(-1),
        }
    }
}

impl Decodable for Option<String> {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        string_payload(src)
    }
}

fn string_payload<R: Read>(src: &mut BudgetedReader<R>) -> Result<Option<String>> {
    let len = i16::decode(src)?;
    match len {
        -1 => Ok(None),
        l if l < -1 => {
            warn!(len = l, "string length prefix below the null sentinel");
            Err(WireError::MalformedLength(l as i32))
        }
        l => {
            let payload = src.read_raw(l as usize)?;
            Ok(Some(String::from_utf8(payload)?))
        }
    }
}

impl Sizeable for Bytes {
    fn wire_size(&self) -> usize {
        4 + self.len()
    }
}

impl Encodable for Bytes {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        debug_assert!(self.len() <= i32::MAX as usize);
        buf.put_i32(self.len() as i32);
        buf.put_slice(self);
    }
}

impl Decodable for Bytes {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        match bytes_payload(src)? {
            Some(b) => Ok(b),
            None => Err(WireError::TypeMismatch {
                expected: "bytes",
                wire: "nil bytes",
            }),
        }
    }
}

impl Sizeable for Option<Bytes> {
    fn wire_size(&self) -> usize {
        match self {
            Some(b) => b.wire_size(),
            None => 4,
        }
    }
}

impl Encodable for Option<Bytes> {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        match self {
            Some(b) => b.encode(buf),
            None => buf.put_i32(-1),
        }
    }
}

impl Decodable for Option<Bytes> {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        bytes_payload(src)
    }
}

fn bytes_payload<R: Read>(src: &mut BudgetedReader<R>) -> Result<Option<Bytes>> {
    let len = i32::decode(src)?;
    match len {
        -1 => Ok(None),
        l if l < -1 => {
            warn!(len = l, "byte-array length prefix below the null sentinel");
            Err(WireError::MalformedLength(l))
        }
        l => Ok(Some(Bytes::from(src.read_raw(l as usize)?))),
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Bytes, BytesMut};
    use proptest::prelude::*;

    use crate::codec::{read, sizeof, write};
    use crate::error::WireError;

    #[test]
    fn string_layout() {
        let mut buf = BytesMut::new();
        let n = write(&"Hello World!".to_string(), &mut buf);
        assert_eq!(n, 14); // 2-byte prefix + 12 payload bytes
        assert_eq!(&buf[..2], &[0, 12]);
        assert_eq!(&buf[2..], b"Hello World!");
    }

    #[test]
    fn null_and_empty_strings_stay_distinct() {
        let mut buf = BytesMut::new();
        write(&None::<String>, &mut buf);
        assert_eq!(&buf[..], &[0xff, 0xff]);
        let (decoded, _): (Option<String>, usize) = read(&buf[..], 2).unwrap();
        assert_eq!(decoded, None);

        buf.clear();
        write(&Some(String::new()), &mut buf);
        assert_eq!(&buf[..], &[0, 0]);
        let (decoded, _): (Option<String>, usize) = read(&buf[..], 2).unwrap();
        assert_eq!(decoded, Some(String::new()));
    }

    #[test]
    fn nil_byte_array_is_four_bytes() {
        let nil: Option<Bytes> = None;
        assert_eq!(sizeof(&nil), 4);

        let mut buf = BytesMut::new();
        write(&nil, &mut buf);
        assert_eq!(&buf[..], &[0xff, 0xff, 0xff, 0xff]);

        let (decoded, leftover): (Option<Bytes>, usize) = read(&buf[..], 4).unwrap();
        assert_eq!(decoded, None);
        assert_eq!(leftover, 0);
    }

    #[test]
    fn length_below_sentinel_is_malformed() {
        let err = read::<Option<String>, _>(&[0xff, 0xfe][..], 2).unwrap_err();
        assert!(matches!(err, WireError::MalformedLength(-2)));

        let err = read::<Option<Bytes>, _>(&[0xff, 0xff, 0xff, 0xfe][..], 4).unwrap_err();
        assert!(matches!(err, WireError::MalformedLength(-2)));
    }

    #[test]
    fn null_into_non_nullable_destination_is_a_type_mismatch() {
        let err = read::<String, _>(&[0xff, 0xff][..], 2).unwrap_err();
        assert!(matches!(err, WireError::TypeMismatch { .. }));

        let err = read::<Bytes, _>(&[0xff, 0xff, 0xff, 0xff][..], 4).unwrap_err();
        assert!(matches!(err, WireError::TypeMismatch { .. }));
    }

    #[test]
    fn payload_longer_than_budget_fails() {
        // prefix declares 5 bytes but the budget only covers the prefix + 2
        let data = [0u8, 5, b'a', b'b'];
        let err = read::<String, _>(&data[..], 4).unwrap_err();
        assert!(matches!(err, WireError::BudgetExceeded { .. }));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let data = [0u8, 2, 0xc3, 0x28];
        let err = read::<String, _>(&data[..], 4).unwrap_err();
        assert!(matches!(err, WireError::InvalidUtf8(_)));
    }

    proptest! {
        #[test]
        fn string_round_trips(s in ".{0,64}") {
            let value = s.to_string();
            let mut buf = BytesMut::new();
            let written = write(&value, &mut buf);
            prop_assert_eq!(written, sizeof(&value));
            prop_assert_eq!(written, buf.len());

            let (decoded, leftover): (String, usize) = read(&buf[..], buf.len()).unwrap();
            prop_assert_eq!(leftover, 0);
            prop_assert_eq!(decoded, value);
        }

        #[test]
        fn bytes_round_trip(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
            let value = Some(Bytes::from(raw));
            let mut buf = BytesMut::new();
            let written = write(&value, &mut buf);
            prop_assert_eq!(written, sizeof(&value));

            let (decoded, leftover): (Option<Bytes>, usize) = read(&buf[..], buf.len()).unwrap();
            prop_assert_eq!(leftover, 0);
            prop_assert_eq!(decoded, value);
        }
    }
}
