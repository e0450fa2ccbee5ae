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

//! Timestamp-targeted offset resets.
//!
//! Two strategies exist: a broker-side atomic rewind (the "new" protocol)
//! and a per-queue client-driven procedure used when the broker reports the
//! group has no active online state for the new protocol. The selector
//! attempts the atomic protocol first and falls back only on that specific
//! signal, never on generic errors.

use std::collections::HashMap;

use cheetah_string::CheetahString;
use mqadmin_common::message::message_queue::MessageQueue;
use mqadmin_error::AdminError;
use mqadmin_error::AdminResult;
use mqadmin_remoting::code::response_code::ResponseCode;
use mqadmin_remoting::protocol::admin::offset_wrapper::OffsetWrapper;
use mqadmin_remoting::protocol::admin::rollback_stats::RollbackStats;
use mqadmin_remoting::rpc::broker_api::BrokerApi;
use mqadmin_remoting::rpc::broker_api::ResetOffsetOutcome;
use mqadmin_remoting::rpc::name_server_api::NameServerApi;
use tracing::info;

use crate::admin::admin_session::AdminSession;
use crate::core::concurrent::concurrent_query_limited;

/// Result of one queue's rewind inside the per-queue procedure. Successes
/// and failures travel together so the caller can retry selectively.
#[derive(Debug)]
pub struct QueueResetOutcome {
    pub queue: MessageQueue,
    pub result: Result<RollbackStats, AdminError>,
}

/// Which strategy performed the reset, with its respective result shape.
#[derive(Debug)]
pub enum ResetOffsetResult {
    /// Broker-side atomic rewind: final offset of every rewound queue.
    Atomic(HashMap<MessageQueue, i64>),
    /// Per-queue fallback: full audit record (or error) per queue.
    PerQueue(Vec<QueueResetOutcome>),
}

/// Rewind-safety policy: without `force` the committed position may only
/// move backward. Ties apply — recommitting the same offset is a harmless
/// no-op and keeps the audit record self-consistent.
pub(crate) fn should_apply_offset(force: bool, resolved_offset: i64, consumer_offset: i64) -> bool {
    force || resolved_offset <= consumer_offset
}

impl<N: NameServerApi, B: BrokerApi> AdminSession<N, B> {
    /// Attempt the broker-side atomic reset; on the specific "group not
    /// online for new-protocol reset" signal, run the legacy per-queue
    /// procedure instead.
    pub async fn reset_consumer_offset(
        &self,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        force: bool,
        timeout_millis: Option<u64>,
    ) -> AdminResult<ResetOffsetResult> {
        match self
            .invoke_reset_offset_on_route(topic, group, timestamp, force, timeout_millis)
            .await?
        {
            ResetOffsetOutcome::OffsetTable(table) => Ok(ResetOffsetResult::Atomic(table)),
            ResetOffsetOutcome::NotOnline => {
                info!(
                    "group {} not online for broker-side reset of {}, falling back to per-queue procedure",
                    group, topic
                );
                let outcomes = self
                    .reset_offset_by_timestamp_legacy(topic, group, timestamp, force, timeout_millis)
                    .await?;
                Ok(ResetOffsetResult::PerQueue(outcomes))
            }
        }
    }

    /// Broker-side atomic reset across all brokers of the topic. Fails with
    /// the broker's not-online rejection when any broker signals it; callers
    /// wanting the automatic fallback use [`Self::reset_consumer_offset`].
    pub async fn reset_offset_by_timestamp(
        &self,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        force: bool,
        timeout_millis: Option<u64>,
    ) -> AdminResult<HashMap<MessageQueue, i64>> {
        match self
            .invoke_reset_offset_on_route(topic, group, timestamp, force, timeout_millis)
            .await?
        {
            ResetOffsetOutcome::OffsetTable(table) => Ok(table),
            ResetOffsetOutcome::NotOnline => Err(AdminError::consumer_not_online(group.clone())),
        }
    }

    async fn invoke_reset_offset_on_route(
        &self,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        force: bool,
        timeout_millis: Option<u64>,
    ) -> AdminResult<ResetOffsetOutcome> {
        let timeout = self.operation_timeout(timeout_millis);
        let route = self.router.resolve_route(topic, timeout).await?;
        let shards = Self::shard_addresses(&route);

        let calls = shards.iter().map(|(_, broker_addr)| {
            self.fetcher
                .invoke_reset_offset(broker_addr, topic, group, timestamp, force, timeout)
        });
        let results = concurrent_query_limited(calls, self.config.max_fanout).await;

        let mut merged = HashMap::new();
        for result in results {
            match result? {
                ResetOffsetOutcome::OffsetTable(table) => merged.extend(table),
                ResetOffsetOutcome::NotOnline => return Ok(ResetOffsetOutcome::NotOnline),
            }
        }
        Ok(ResetOffsetOutcome::OffsetTable(merged))
    }

    /// Per-queue reset: resolve the offset implied by `timestamp` for every
    /// queue of the topic, apply the rewind-safety policy, and commit queue
    /// by queue.
    ///
    /// Brokers fan out concurrently; queues on one broker proceed in order.
    /// Every per-queue outcome — success or failure — is joined before
    /// returning, and one queue's failure never blocks the rest.
    pub async fn reset_offset_by_timestamp_legacy(
        &self,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        force: bool,
        timeout_millis: Option<u64>,
    ) -> AdminResult<Vec<QueueResetOutcome>> {
        let timeout = self.operation_timeout(timeout_millis);
        let route = self.router.resolve_route(topic, timeout).await?;
        let shards: Vec<(CheetahString, CheetahString, u32)> = route
            .broker_datas
            .iter()
            .filter_map(|bd| {
                bd.select_broker_addr()
                    .map(|addr| (bd.broker_name.clone(), addr, route.read_queue_nums_for(&bd.broker_name)))
            })
            .collect();

        let jobs = shards.iter().map(|(broker_name, broker_addr, queue_count)| {
            self.reset_broker_queues(
                broker_name,
                broker_addr,
                *queue_count,
                topic,
                group,
                timestamp,
                force,
                timeout,
            )
        });
        let per_broker = concurrent_query_limited(jobs, self.config.max_fanout).await;

        Ok(per_broker.into_iter().flatten().collect())
    }

    #[allow(clippy::too_many_arguments)]
    async fn reset_broker_queues(
        &self,
        broker_name: &CheetahString,
        broker_addr: &CheetahString,
        queue_count: u32,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        force: bool,
        timeout: u64,
    ) -> Vec<QueueResetOutcome> {
        let stats = match self.fetcher.fetch_consume_stats(broker_addr, group, None, timeout).await {
            Ok(stats) => stats,
            Err(error) => return per_queue_failures(topic, broker_name, queue_count, error),
        };

        let mut consumed: Vec<(MessageQueue, OffsetWrapper)> = stats
            .offset_table
            .into_iter()
            .filter(|(queue, _)| queue.topic == *topic && queue.broker_name == *broker_name)
            .collect();
        consumed.sort_by(|a, b| a.0.cmp(&b.0));

        let mut outcomes = Vec::new();
        if consumed.is_empty() {
            // The group never consumed this topic here. Seed the "before"
            // snapshot from the stored ranges instead.
            let topic_stats = match self.fetcher.fetch_topic_stats(broker_addr, topic, timeout).await {
                Ok(topic_stats) => topic_stats,
                Err(error) => return per_queue_failures(topic, broker_name, queue_count, error),
            };
            for queue_id in 0..queue_count as i32 {
                let queue = MessageQueue::from_parts(topic.clone(), broker_name.clone(), queue_id);
                match topic_stats.offset_table.get(&queue) {
                    Some(range) => {
                        let before = OffsetWrapper::new(range.max_offset, range.min_offset);
                        outcomes.push(
                            self.reset_queue(broker_addr, group, queue, before, timestamp, force, timeout)
                                .await,
                        );
                    }
                    None => {
                        let error = AdminError::broker_rejected(
                            Some(broker_addr.clone()),
                            ResponseCode::SystemError.to_i32(),
                            format!("no stored offset range reported for {queue}"),
                        );
                        outcomes.push(QueueResetOutcome {
                            queue,
                            result: Err(error),
                        });
                    }
                }
            }
        } else {
            for (queue, before) in consumed {
                outcomes.push(
                    self.reset_queue(broker_addr, group, queue, before, timestamp, force, timeout)
                        .await,
                );
            }
        }
        outcomes
    }

    #[allow(clippy::too_many_arguments)]
    async fn reset_queue(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        queue: MessageQueue,
        before: OffsetWrapper,
        timestamp: i64,
        force: bool,
        timeout: u64,
    ) -> QueueResetOutcome {
        let resolved = match self
            .fetcher
            .search_offset_by_timestamp(broker_addr, &queue, timestamp, timeout)
            .await
        {
            Ok(offset) => offset,
            Err(error) => {
                return QueueResetOutcome {
                    queue,
                    result: Err(error),
                }
            }
        };

        let mut record = RollbackStats {
            queue: queue.clone(),
            broker_offset: before.broker_offset,
            consumer_offset: before.consumer_offset,
            timestamp_offset: resolved,
            rollback_offset: before.consumer_offset,
        };

        if should_apply_offset(force, resolved, before.consumer_offset) {
            if let Err(error) = self
                .fetcher
                .commit_offset(broker_addr, group, &queue, resolved, timeout)
                .await
            {
                return QueueResetOutcome {
                    queue,
                    result: Err(error),
                };
            }
            record.rollback_offset = resolved;
            info!("rewound {} of group {} to offset {}", queue, group, resolved);
        }

        QueueResetOutcome {
            queue,
            result: Ok(record),
        }
    }
}

fn per_queue_failures(
    topic: &CheetahString,
    broker_name: &CheetahString,
    queue_count: u32,
    error: AdminError,
) -> Vec<QueueResetOutcome> {
    (0..queue_count as i32)
        .map(|queue_id| QueueResetOutcome {
            queue: MessageQueue::from_parts(topic.clone(), broker_name.clone(), queue_id),
            result: Err(error.clone()),
        })
        .collect()
}
