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

use serde::Deserialize;
use serde::Serialize;

/// Per-queue offset snapshot as reported by one broker.
///
/// `broker_offset >= consumer_offset` under normal operation. The inverse
/// indicates stale broker-local data and is tolerated, never asserted: the
/// snapshot is best-effort by design.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OffsetWrapper {
    /// Highest offset physically stored in the queue.
    pub broker_offset: i64,
    /// Last offset the consumer group committed for the queue.
    pub consumer_offset: i64,
    pub last_timestamp: i64,
}

impl OffsetWrapper {
    pub fn new(broker_offset: i64, consumer_offset: i64) -> Self {
        Self {
            broker_offset,
            consumer_offset,
            last_timestamp: 0,
        }
    }

    /// Lag of the consumer behind the stored log.
    pub fn diff(&self) -> i64 {
        self.broker_offset - self.consumer_offset
    }
}
