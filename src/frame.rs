//! Frame assembly and length-prefix framing.
//!
//! Every unit exchanged with a broker is a frame: a 4-byte big-endian length
//! followed by that many bytes of payload. [`encode_request`] assembles a
//! complete request frame with the header's `size` field computed up front
//! via `sizeof` (no back-patching), and [`FrameCodec`] is the
//! `tokio_util::codec` seam that splits a TCP stream into length-stripped
//! frames for the connection layer above this crate.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

use crate::codec::{write, Encodable, Sizeable};
use crate::error::WireError;
use crate::messages::RequestHeader;

/// Ceiling on a declared frame length. Anything larger means a
/// desynchronized or hostile stream.
pub const MAX_FRAME_LEN: i32 = 100_000_000;

/// Assemble a complete request frame: header (size, api key, api version,
/// correlation id, client id) followed by the encoded body.
///
/// The header's `size` field counts every byte after itself, so it is the
/// header's own width minus the 4-byte size field, plus the body.
pub fn encode_request<T: Encodable>(
    api_key: i16,
    api_version: i16,
    correlation_id: i32,
    client_id: &str,
    body: &T,
) -> BytesMut {
    let mut header = RequestHeader {
        size: 0,
        api_key,
        api_version,
        correlation_id,
        client_id: client_id.to_string(),
    };
    header.size = (header.wire_size() - 4 + body.wire_size()) as i32;

    let mut buf = BytesMut::with_capacity(4 + header.size as usize);
    write(&header, &mut buf);
    write(body, &mut buf);
    debug!(
        api_key,
        api_version,
        correlation_id,
        size = header.size,
        "encoded request frame"
    );
    buf
}

/// Length-prefix framing codec.
///
/// Decoding yields each complete frame's payload with the length prefix
/// stripped; encoding prepends it. Partial input is not an error, just "not
/// yet".
pub struct FrameCodec;

impl Decoder for FrameCodec {
    type Item = Bytes;
    type Error = WireError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Bytes>, WireError> {
        if src.len() < 4 {
            return Ok(None);
        }

        // peek at the declared length without consuming it
        let declared = i32::from_be_bytes([src[0], src[1], src[2], src[3]]);
        if !(0..=MAX_FRAME_LEN).contains(&declared) {
            warn!(declared, "rejecting frame with unreasonable declared length");
            return Err(WireError::MalformedLength(declared));
        }

        let total = 4 + declared as usize;
        if src.len() < total {
            return Ok(None);
        }

        let mut frame = src.split_to(total);
        frame.advance(4);
        Ok(Some(frame.freeze()))
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = WireError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), WireError> {
        dst.put_i32(item.len() as i32);
        dst.extend_from_slice(&item);
        Ok(())
    }
}
