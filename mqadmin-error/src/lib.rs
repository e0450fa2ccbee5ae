/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Unified error taxonomy for the mq-admin toolkit.
//!
//! Every administrative operation returns [`AdminResult`]. The variants of
//! [`AdminError`] form a closed set: per-shard transport failures
//! (`BrokerUnreachable`, `BrokerTimeout`) are recovered locally by fan-out
//! operations, broker-side rejections keep the broker's code and remark
//! verbatim, and `NoConsumptionData` distinguishes "the group has no recorded
//! progress" from a transport fault.

use cheetah_string::CheetahString;
use thiserror::Error;

pub type AdminResult<T> = Result<T, AdminError>;

/// Broker response code meaning the consumer group has no active online
/// state. Both the new-protocol reset fallback and the message-track
/// classifier key on it.
pub const CODE_CONSUMER_NOT_ONLINE: i32 = 206;

#[derive(Debug, Error, Clone)]
pub enum AdminError {
    /// The discovery service does not know the topic. Unrecoverable for this
    /// call; surfaced immediately.
    #[error("No route info of topic '{topic}'")]
    RouteNotFound { topic: CheetahString },

    /// The discovery service itself could not be reached. The caller may
    /// retry the whole operation.
    #[error("Discovery service unavailable: {reason}")]
    DiscoveryUnavailable { reason: String },

    /// Transport-level failure talking to one broker.
    #[error("Broker {broker_addr} unreachable: {reason}")]
    BrokerUnreachable {
        broker_addr: CheetahString,
        reason: String,
    },

    /// The per-call budget elapsed before the broker answered.
    #[error("Broker {broker_addr} did not answer within {timeout_millis}ms")]
    BrokerTimeout {
        broker_addr: CheetahString,
        timeout_millis: u64,
    },

    /// The broker answered with an error code. Code and remark are preserved
    /// verbatim for diagnostics.
    #[error("Broker request rejected: code={code} remark={remark}")]
    BrokerRejected {
        broker_addr: Option<CheetahString>,
        code: i32,
        remark: String,
    },

    /// Every shard failed or every shard returned an empty table: the group
    /// has no recorded consumption progress (typically it is not online).
    #[error("No consumption data found (group={group:?}, topic={topic:?})")]
    NoConsumptionData {
        group: Option<CheetahString>,
        topic: Option<CheetahString>,
    },
}

impl AdminError {
    pub fn route_not_found(topic: impl Into<CheetahString>) -> Self {
        Self::RouteNotFound { topic: topic.into() }
    }

    pub fn discovery_unavailable(reason: impl Into<String>) -> Self {
        Self::DiscoveryUnavailable {
            reason: reason.into(),
        }
    }

    pub fn broker_unreachable(broker_addr: impl Into<CheetahString>, reason: impl Into<String>) -> Self {
        Self::BrokerUnreachable {
            broker_addr: broker_addr.into(),
            reason: reason.into(),
        }
    }

    pub fn broker_timeout(broker_addr: impl Into<CheetahString>, timeout_millis: u64) -> Self {
        Self::BrokerTimeout {
            broker_addr: broker_addr.into(),
            timeout_millis,
        }
    }

    pub fn broker_rejected(
        broker_addr: Option<CheetahString>,
        code: i32,
        remark: impl Into<String>,
    ) -> Self {
        Self::BrokerRejected {
            broker_addr,
            code,
            remark: remark.into(),
        }
    }

    pub fn consumer_not_online(group: impl Into<CheetahString>) -> Self {
        Self::BrokerRejected {
            broker_addr: None,
            code: CODE_CONSUMER_NOT_ONLINE,
            remark: format!("the consumer group '{}' not online", group.into()),
        }
    }

    pub fn no_consumption_data(group: Option<CheetahString>, topic: Option<CheetahString>) -> Self {
        Self::NoConsumptionData { group, topic }
    }

    /// Whether this failure means "the consumer group is not online" rather
    /// than a transport fault. Covers the broker's explicit not-online
    /// rejection and the empty-merged-table outcome of aggregation.
    pub fn is_not_online_signal(&self) -> bool {
        match self {
            Self::BrokerRejected { code, .. } => *code == CODE_CONSUMER_NOT_ONLINE,
            Self::NoConsumptionData { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_online_signal_covers_rejection_code_and_empty_data() {
        assert!(AdminError::consumer_not_online("g").is_not_online_signal());
        assert!(AdminError::no_consumption_data(Some("g".into()), None).is_not_online_signal());
        assert!(!AdminError::broker_rejected(None, 1, "system error").is_not_online_signal());
        assert!(!AdminError::broker_timeout("127.0.0.1:10911", 3000).is_not_online_signal());
        assert!(!AdminError::route_not_found("t").is_not_online_signal());
    }

    #[test]
    fn rejection_preserves_broker_diagnostics_verbatim() {
        let err = AdminError::broker_rejected(Some("127.0.0.1:10911".into()), 17, "topic not exist");
        let text = err.to_string();
        assert!(text.contains("code=17"));
        assert!(text.contains("topic not exist"));
    }

    #[test]
    fn timeout_reports_budget_and_address() {
        let err = AdminError::broker_timeout("10.0.0.3:10911", 9000);
        assert_eq!(
            err.to_string(),
            "Broker 10.0.0.3:10911 did not answer within 9000ms"
        );
    }
}
