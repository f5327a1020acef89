//! API version descriptors and negotiation.
//!
//! An [`ApiVersion`] names one API and the inclusive version range a peer
//! supports for it. These triples ride in ApiVersions responses and feed
//! version negotiation; they are never on the encode/decode hot path.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use bytes::BufMut;

use crate::codec::{BudgetedReader, Decodable, Encodable, Sizeable};
use crate::error::Result;

/// Supported version range for one Kafka API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ApiVersion {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
}

impl ApiVersion {
    pub fn new(api_key: i16, min_version: i16, max_version: i16) -> Self {
        Self {
            api_key,
            min_version,
            max_version,
        }
    }

    /// Human-readable API name; an unknown key renders as its raw number.
    pub fn name(&self) -> String {
        match api_key_name(self.api_key) {
            Some(name) => name.to_string(),
            None => self.api_key.to_string(),
        }
    }

    /// `"v<min>"`, e.g. `"v2"`.
    pub fn min_label(&self) -> String {
        format!("v{}", self.min_version)
    }

    /// `"v<max>"`, e.g. `"v5"`.
    pub fn max_label(&self) -> String {
        format!("v{}", self.max_version)
    }

    /// Whether `version` falls inside the supported range.
    pub fn supports(&self, version: i16) -> bool {
        version >= self.min_version && version <= self.max_version
    }

    /// Highest version both sides speak, given the peer's ceiling.
    pub fn negotiate(&self, peer_max: i16) -> i16 {
        self.max_version.min(peer_max)
    }
}

/// The general verbose form, e.g. `"Fetch[v2:v5]"`.
impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}:{}]",
            self.name(),
            self.min_label(),
            self.max_label()
        )
    }
}

impl Sizeable for ApiVersion {
    fn wire_size(&self) -> usize {
        6
    }
}

impl Encodable for ApiVersion {
    fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i16(self.api_key);
        buf.put_i16(self.min_version);
        buf.put_i16(self.max_version);
    }
}

impl Decodable for ApiVersion {
    fn decode<R: Read>(src: &mut BudgetedReader<R>) -> Result<Self> {
        Ok(Self {
            api_key: i16::decode(src)?,
            min_version: i16::decode(src)?,
            max_version: i16::decode(src)?,
        })
    }
}

/// Name of a Kafka API key, if known.
pub fn api_key_name(api_key: i16) -> Option<&'static str> {
    Some(match api_key {
        0 => "Produce",
        1 => "Fetch",
        2 => "ListOffsets",
        3 => "Metadata",
        4 => "LeaderAndIsr",
        5 => "StopReplica",
        6 => "UpdateMetadata",
        7 => "ControlledShutdown",
        8 => "OffsetCommit",
        9 => "OffsetFetch",
        10 => "FindCoordinator",
        11 => "JoinGroup",
        12 => "Heartbeat",
        13 => "LeaveGroup",
        14 => "SyncGroup",
        15 => "DescribeGroups",
        16 => "ListGroups",
        17 => "SaslHandshake",
        18 => "ApiVersions",
        19 => "CreateTopics",
        20 => "DeleteTopics",
        21 => "DeleteRecords",
        22 => "InitProducerId",
        23 => "OffsetForLeaderEpoch",
        24 => "AddPartitionsToTxn",
        25 => "AddOffsetsToTxn",
        26 => "EndTxn",
        27 => "WriteTxnMarkers",
        28 => "TxnOffsetCommit",
        29 => "DescribeAcls",
        30 => "CreateAcls",
        31 => "DeleteAcls",
        32 => "DescribeConfigs",
        33 => "AlterConfigs",
        36 => "SaslAuthenticate",
        37 => "CreatePartitions",
        42 => "DeleteGroups",
        _ => return None,
    })
}

/// Catalog of the API versions this crate's schema set speaks.
pub struct ApiVersionRegistry {
    versions: HashMap<i16, ApiVersion>,
}

impl ApiVersionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            versions: HashMap::new(),
        };

        registry.register(2, 1, 1); // ListOffsets
        registry.register(3, 1, 6); // Metadata
        registry.register(18, 0, 0); // ApiVersions

        registry
    }

    fn register(&mut self, api_key: i16, min_version: i16, max_version: i16) {
        self.versions
            .insert(api_key, ApiVersion::new(api_key, min_version, max_version));
    }

    pub fn get(&self, api_key: i16) -> Option<&ApiVersion> {
        self.versions.get(&api_key)
    }

    pub fn is_supported(&self, api_key: i16, version: i16) -> bool {
        self.versions
            .get(&api_key)
            .is_some_and(|v| v.supports(version))
    }

    pub fn negotiate(&self, api_key: i16, peer_max: i16) -> Option<i16> {
        self.versions.get(&api_key).map(|v| v.negotiate(peer_max))
    }

    /// All rows sorted by API key, ready for an ApiVersions response.
    pub fn all(&self) -> Vec<ApiVersion> {
        let mut rows: Vec<_> = self.versions.values().copied().collect();
        rows.sort_by_key(|v| v.api_key);
        rows
    }
}

impl Default for ApiVersionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
