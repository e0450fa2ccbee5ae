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

use mqadmin_common::message::message_queue::MessageQueue;
use serde::Deserialize;
use serde::Serialize;
use serde_json_any_key::*;

use crate::protocol::admin::offset_wrapper::OffsetWrapper;

/// Consumption progress of one group, keyed by queue. A single broker reports
/// a partial table; the aggregator merges partial tables from all brokers of
/// a topic (keys never collide because `MessageQueue` embeds the broker name).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeStats {
    #[serde(with = "any_key_map")]
    pub offset_table: HashMap<MessageQueue, OffsetWrapper>,
    /// Broker-locally measured consumption rate; summed across brokers with
    /// no cross-broker synchronization.
    pub consume_tps: f64,
}

impl ConsumeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lag across all queues.
    pub fn compute_total_diff(&self) -> i64 {
        self.offset_table.values().map(OffsetWrapper::diff).sum()
    }

    /// Fold another broker's partial table into this one.
    pub fn merge(&mut self, other: ConsumeStats) {
        self.offset_table.extend(other.offset_table);
        self.consume_tps += other.consume_tps;
    }

    /// Drop entries whose queue does not belong to `topic`.
    pub fn retain_topic(&mut self, topic: &str) {
        self.offset_table.retain(|mq, _| mq.topic == topic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(entries: &[(&str, &str, i32, i64, i64)], tps: f64) -> ConsumeStats {
        let mut stats = ConsumeStats::new();
        for (topic, broker, queue_id, broker_offset, consumer_offset) in entries {
            stats.offset_table.insert(
                MessageQueue::from_parts(*topic, *broker, *queue_id),
                OffsetWrapper::new(*broker_offset, *consumer_offset),
            );
        }
        stats.consume_tps = tps;
        stats
    }

    #[test]
    fn total_diff_sums_per_queue_lag() {
        let stats = stats_of(&[("t", "broker-a", 0, 100, 90), ("t", "broker-a", 1, 50, 30)], 0.0);
        assert_eq!(stats.compute_total_diff(), 30);
    }

    #[test]
    fn merge_unions_tables_and_sums_tps() {
        let mut left = stats_of(&[("t", "broker-a", 0, 10, 5)], 12.5);
        let right = stats_of(&[("t", "broker-b", 0, 20, 7)], 7.5);
        left.merge(right);
        assert_eq!(left.offset_table.len(), 2);
        assert!((left.consume_tps - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn merge_never_collides_across_brokers_with_same_queue_id() {
        let mut left = stats_of(&[("t", "broker-a", 0, 10, 5)], 0.0);
        left.merge(stats_of(&[("t", "broker-b", 0, 99, 98)], 0.0));
        assert_eq!(left.offset_table.len(), 2);
    }

    #[test]
    fn retain_topic_drops_foreign_entries() {
        let mut stats = stats_of(&[("t1", "broker-a", 0, 10, 5), ("t2", "broker-a", 0, 10, 5)], 0.0);
        stats.retain_topic("t1");
        assert_eq!(stats.offset_table.len(), 1);
        assert!(stats.offset_table.keys().all(|mq| mq.topic == "t1"));
    }

    #[test]
    fn encodes_queue_keyed_table_as_json() {
        let stats = stats_of(&[("t", "broker-a", 1, 42, 40)], 1.0);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("offsetTable"));
        assert!(json.contains("consumeTps"));
        let decoded: ConsumeStats = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.offset_table.len(), 1);
    }
}
