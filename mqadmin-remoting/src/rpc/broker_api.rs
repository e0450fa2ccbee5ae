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

use cheetah_string::CheetahString;
use mqadmin_common::message::message_queue::MessageQueue;
use mqadmin_error::AdminResult;

use crate::protocol::admin::consume_stats::ConsumeStats;
use crate::protocol::admin::topic_stats_table::TopicStatsTable;
use crate::protocol::body::consumer_connection::ConsumerConnection;
use crate::protocol::body::group_list::GroupList;
use crate::protocol::body::reset_offset_body::ResetOffsetBody;

/// Outcome of the broker-side atomic reset. The broker either rewinds all
/// queues it hosts and returns the new offsets, or signals that the group has
/// no active online state for the new protocol — the one condition under
/// which callers fall back to the legacy per-queue procedure.
#[derive(Debug, Clone)]
pub enum ResetOffsetOutcome {
    OffsetTable(HashMap<MessageQueue, i64>),
    NotOnline,
}

impl From<ResetOffsetBody> for ResetOffsetOutcome {
    /// A decoded success body carries the rewound offsets; transports map
    /// the broker's not-online response code to `NotOnline` themselves.
    fn from(body: ResetOffsetBody) -> Self {
        ResetOffsetOutcome::OffsetTable(body.offset_table)
    }
}

/// Broker RPC surface consumed by the administration layer. Implementations
/// own the transport; every call honors the explicit `timeout_millis` budget.
/// `update_consumer_offset` is the only mutating primitive and is
/// at-least-once: callers always send the final absolute offset, never a
/// delta, so redelivery is idempotent.
#[allow(async_fn_in_trait)]
pub trait BrokerApi: Send + Sync {
    /// Consumption progress of `group` on this broker, optionally narrowed
    /// to one topic.
    async fn get_consume_stats(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        topic: Option<&CheetahString>,
        timeout_millis: u64,
    ) -> AdminResult<ConsumeStats>;

    /// Stored-offset ranges of `topic`'s queues on this broker.
    async fn get_topic_stats_info(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<TopicStatsTable>;

    /// Offset of the first message stored at or after `timestamp` in one
    /// queue. May require an on-disk scan at the broker; callers budget
    /// accordingly.
    async fn search_offset_by_timestamp(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        queue_id: i32,
        timestamp: i64,
        timeout_millis: u64,
    ) -> AdminResult<i64>;

    /// Commit `offset` as the group's position in one queue.
    async fn update_consumer_offset(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        queue: &MessageQueue,
        offset: i64,
        timeout_millis: u64,
    ) -> AdminResult<()>;

    /// Live connections and subscriptions of `group` on this broker.
    async fn get_consumer_connection_list(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<ConsumerConnection>;

    /// Consumer groups with a subscription for `topic` on this broker.
    async fn query_topic_consume_by_who(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<GroupList>;

    /// Broker-side atomic reset of the group's offsets on all queues this
    /// broker hosts for `topic`.
    async fn invoke_broker_to_reset_offset(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        is_force: bool,
        timeout_millis: u64,
    ) -> AdminResult<ResetOffsetOutcome>;
}
