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

use std::fmt;

use mqadmin_common::message::message_queue::MessageQueue;
use serde::Deserialize;
use serde::Serialize;

/// Per-queue audit record of one offset reset.
///
/// `broker_offset` and `consumer_offset` snapshot the queue before the
/// operation, `timestamp_offset` is the offset resolved for the target
/// timestamp, and `rollback_offset` is what was actually applied. When the
/// rewind-safety check declines to move the offset, `rollback_offset` equals
/// the prior `consumer_offset` and the record is a self-consistent no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RollbackStats {
    pub queue: MessageQueue,
    pub broker_offset: i64,
    pub consumer_offset: i64,
    pub timestamp_offset: i64,
    pub rollback_offset: i64,
}

impl fmt::Display for RollbackStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RollbackStats [queue={}, broker_offset={}, consumer_offset={}, timestamp_offset={}, \
             rollback_offset={}]",
            self.queue, self.broker_offset, self.consumer_offset, self.timestamp_offset, self.rollback_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_record_keeps_prior_consumer_offset() {
        let stats = RollbackStats {
            queue: MessageQueue::from_parts("t", "broker-a", 0),
            broker_offset: 100,
            consumer_offset: 40,
            timestamp_offset: 50,
            rollback_offset: 40,
        };
        assert_eq!(stats.rollback_offset, stats.consumer_offset);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""timestampOffset":50"#));
        assert!(json.contains(r#""rollbackOffset":40"#));
    }
}
