//! # kafka-wire
//!
//! Wire-protocol codec for the Kafka binary protocol: the machinery that
//! turns typed request/response structures into the exact byte sequences a
//! broker expects, and back.
//!
//! ## Protocol structure
//!
//! Kafka speaks a binary protocol over TCP. Every request is framed as:
//!
//! ```text
//! RequestMessage => MessageSize RequestHeader RequestBody
//! MessageSize => int32
//! RequestHeader => api_key api_version correlation_id client_id
//! api_key => int16
//! api_version => int16
//! correlation_id => int32
//! client_id => string
//! ```
//!
//! All integers are big-endian. Strings carry an `int16` length prefix,
//! byte arrays an `int32` prefix, sequences an `int32` count; `-1` in any
//! prefix means null/absent rather than empty.
//!
//! ## The three operations
//!
//! - [`write`](codec::write) appends a value's encoding to a buffer and
//!   returns the byte count,
//! - [`sizeof`](codec::sizeof) computes that count without any I/O,
//! - [`read`](codec::read) consumes a bounded byte budget from a stream and
//!   reconstructs the value, returning the unconsumed remainder.
//!
//! For every supported value the three agree exactly: `sizeof(x)` equals the
//! bytes `write(x)` produces, and decoding them reproduces `x` with zero
//! budget left over.
//!
//! ## Example
//!
//! ```
//! use kafka_wire::codec::{read, sizeof, write};
//! use kafka_wire::messages::TopicMetadataRequestV6;
//! use bytes::BytesMut;
//!
//! let request = TopicMetadataRequestV6 {
//!     topics: vec!["events".to_string()],
//!     allow_auto_topic_creation: false,
//! };
//!
//! let mut buf = BytesMut::new();
//! let written = write(&request, &mut buf);
//! assert_eq!(written, sizeof(&request));
//!
//! let (decoded, leftover): (TopicMetadataRequestV6, usize) =
//!     read(&buf[..], buf.len()).unwrap();
//! assert_eq!(decoded, request);
//! assert_eq!(leftover, 0);
//! ```

pub mod api_versions;
pub mod codec;
pub mod error;
pub mod frame;
pub mod messages;


pub use api_versions::{api_key_name, ApiVersion, ApiVersionRegistry};
pub use codec::{read, sizeof, write, BudgetedReader, Decodable, Encodable, Sizeable};
pub use error::{Result, WireError};
pub use frame::{encode_request, FrameCodec, MAX_FRAME_LEN};

/// Kafka API keys — core messaging APIs.
pub const API_KEY_PRODUCE: i16 = 0;
pub const API_KEY_FETCH: i16 = 1;
pub const API_KEY_LIST_OFFSETS: i16 = 2;
pub const API_KEY_METADATA: i16 = 3;

/// Kafka API keys — consumer group APIs.
pub const API_KEY_OFFSET_COMMIT: i16 = 8;
pub const API_KEY_OFFSET_FETCH: i16 = 9;
pub const API_KEY_FIND_COORDINATOR: i16 = 10;
pub const API_KEY_JOIN_GROUP: i16 = 11;
pub const API_KEY_HEARTBEAT: i16 = 12;
pub const API_KEY_LEAVE_GROUP: i16 = 13;
pub const API_KEY_SYNC_GROUP: i16 = 14;

/// Kafka API keys — admin and negotiation APIs.
pub const API_KEY_DESCRIBE_GROUPS: i16 = 15;
pub const API_KEY_LIST_GROUPS: i16 = 16;
pub const API_KEY_SASL_HANDSHAKE: i16 = 17;
pub const API_KEY_API_VERSIONS: i16 = 18;
pub const API_KEY_CREATE_TOPICS: i16 = 19;
pub const API_KEY_DELETE_TOPICS: i16 = 20;
