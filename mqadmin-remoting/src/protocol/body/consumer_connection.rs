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

use std::collections::HashMap;
use std::collections::HashSet;

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

use crate::protocol::body::connection::Connection;
use crate::protocol::heartbeat::consume_type::ConsumeType;
use crate::protocol::heartbeat::message_model::MessageModel;
use crate::protocol::heartbeat::subscription_data::SubscriptionData;

/// Snapshot of a consumer group's live state as reported by one broker:
/// connected clients, consume mode, and the per-topic subscriptions. The
/// administration layer only reads it; there is no shared mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerConnection {
    pub connection_set: HashSet<Connection>,
    pub subscription_table: HashMap<CheetahString, SubscriptionData>,
    pub consume_type: ConsumeType,
    pub message_model: MessageModel,
}

impl ConsumerConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_online(&self) -> bool {
        !self.connection_set.is_empty()
    }

    pub fn subscription_for(&self, topic: &str) -> Option<&SubscriptionData> {
        self.subscription_table.get(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_connection_snapshot_is_offline() {
        assert!(!ConsumerConnection::new().is_online());
    }

    #[test]
    fn subscription_lookup_by_topic() {
        let mut cc = ConsumerConnection::new();
        cc.subscription_table
            .insert("t".into(), SubscriptionData::new("t", "*"));
        assert!(cc.subscription_for("t").is_some());
        assert!(cc.subscription_for("other").is_none());
    }

    #[test]
    fn serializes_consume_type_with_wire_name() {
        let mut cc = ConsumerConnection::new();
        cc.consume_type = ConsumeType::ConsumePassively;
        cc.connection_set.insert(Connection::new("client-1", "10.1.1.1:53222"));
        let json = serde_json::to_string(&cc).unwrap();
        assert!(json.contains(r#""consumeType":"CONSUME_PASSIVELY""#));
    }
}
