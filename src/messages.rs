//! Versioned protocol message schemas.
//!
//! One struct per API and wire version, declared with [`wire_struct!`] so
//! the field list written here is the wire layout: fields encode and decode
//! in declaration order with no padding. Several versions of the same
//! logical message coexist (e.g. metadata V1 and V6); adding a version means
//! adding a declaration, never touching the codec engine.

use bytes::Bytes;

use crate::api_versions::ApiVersion;
use crate::wire_struct;

wire_struct! {
    /// Header leading every request frame.
    ///
    /// `size` counts every byte of the frame after the size field itself and
    /// must be computed with `sizeof` before the body is written.
    pub struct RequestHeader {
        pub size: i32,
        pub api_key: i16,
        pub api_version: i16,
        pub correlation_id: i32,
        pub client_id: String,
    }
}

wire_struct! {
    /// Legacy message-set entry (magic byte 0/1).
    pub struct Message {
        pub crc: i32,
        pub magic_byte: i8,
        pub attributes: i8,
        pub timestamp: i64,
        pub key: Option<Bytes>,
        pub value: Option<Bytes>,
    }
}

// ---------------------------------------------------------------------------
// Metadata API (api key 3)
// ---------------------------------------------------------------------------

/// V1 metadata request: just the topic names to describe.
pub type TopicMetadataRequestV1 = Vec<String>;

wire_struct! {
    pub struct BrokerMetadataV1 {
        pub node_id: i32,
        pub host: String,
        pub port: i32,
        pub rack: String,
    }
}

wire_struct! {
    pub struct PartitionMetadataV1 {
        pub partition_error_code: i16,
        pub partition_id: i32,
        pub leader: i32,
        pub replicas: Vec<i32>,
        pub isr: Vec<i32>,
    }
}

wire_struct! {
    pub struct TopicMetadataV1 {
        pub topic_error_code: i16,
        pub topic_name: String,
        pub internal: bool,
        pub partitions: Vec<PartitionMetadataV1>,
    }
}

wire_struct! {
    pub struct MetadataResponseV1 {
        pub brokers: Vec<BrokerMetadataV1>,
        pub controller_id: i32,
        pub topics: Vec<TopicMetadataV1>,
    }
}

wire_struct! {
    pub struct TopicMetadataRequestV6 {
        pub topics: Vec<String>,
        pub allow_auto_topic_creation: bool,
    }
}

wire_struct! {
    /// V6 adds the offline replica list on top of the V1 partition shape.
    pub struct PartitionMetadataV6 {
        pub partition_error_code: i16,
        pub partition_id: i32,
        pub leader: i32,
        pub replicas: Vec<i32>,
        pub isr: Vec<i32>,
        pub offline_replicas: Vec<i32>,
    }
}

wire_struct! {
    pub struct TopicMetadataV6 {
        pub topic_error_code: i16,
        pub topic_name: String,
        pub internal: bool,
        pub partitions: Vec<PartitionMetadataV6>,
    }
}

wire_struct! {
    pub struct MetadataResponseV6 {
        pub brokers: Vec<BrokerMetadataV1>,
        pub cluster_id: String,
        pub controller_id: i32,
        pub topics: Vec<TopicMetadataV6>,
    }
}

// ---------------------------------------------------------------------------
// ListOffsets API (api key 2)
// ---------------------------------------------------------------------------

wire_struct! {
    pub struct ListOffsetRequestPartitionV1 {
        pub partition: i32,
        /// Target timestamp; `-1` means latest offset, `-2` earliest.
        pub time: i64,
    }
}

wire_struct! {
    pub struct ListOffsetRequestTopicV1 {
        pub topic_name: String,
        pub partitions: Vec<ListOffsetRequestPartitionV1>,
    }
}

wire_struct! {
    pub struct ListOffsetRequestV1 {
        pub replica_id: i32,
        pub topics: Vec<ListOffsetRequestTopicV1>,
    }
}

wire_struct! {
    pub struct PartitionOffsetV1 {
        pub partition: i32,
        pub error_code: i16,
        pub timestamp: i64,
        pub offset: i64,
    }
}

wire_struct! {
    pub struct ListOffsetResponseTopicV1 {
        pub topic_name: String,
        pub partition_offsets: Vec<PartitionOffsetV1>,
    }
}

/// The V1 response body is itself a topic sequence.
pub type ListOffsetResponseV1 = Vec<ListOffsetResponseTopicV1>;

// ---------------------------------------------------------------------------
// ApiVersions API (api key 18)
// ---------------------------------------------------------------------------

wire_struct! {
    /// The V0 request has no body at all: zero fields, zero bytes.
    pub struct ApiVersionsRequestV0 {}
}

wire_struct! {
    pub struct ApiVersionsResponseV0 {
        pub error_code: i16,
        pub api_versions: Vec<ApiVersion>,
    }
}
