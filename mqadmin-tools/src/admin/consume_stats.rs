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

//! Consumption-state aggregation across all brokers of a topic.

use cheetah_string::CheetahString;
use mqadmin_error::AdminError;
use mqadmin_error::AdminResult;
use mqadmin_remoting::protocol::admin::consume_stats::ConsumeStats;
use mqadmin_remoting::protocol::admin::topic_stats_table::TopicStatsTable;
use mqadmin_remoting::rpc::broker_api::BrokerApi;
use mqadmin_remoting::rpc::name_server_api::NameServerApi;
use tracing::warn;

use crate::admin::admin_session::AdminSession;
use crate::core::concurrent::concurrent_query_limited;

/// One shard that contributed nothing to an aggregation, and why.
#[derive(Debug, Clone)]
pub struct ShardFailure {
    pub broker_name: CheetahString,
    pub broker_addr: CheetahString,
    pub error: AdminError,
}

/// Best-effort merged view: whatever the reachable shards reported, plus the
/// shards that failed. The aggregation as a whole only fails when *no* shard
/// contributed a non-empty table.
#[derive(Debug, Default)]
pub struct ConsumeStatsAggregate {
    pub stats: ConsumeStats,
    pub failed_shards: Vec<ShardFailure>,
}

impl ConsumeStatsAggregate {
    pub fn is_partial(&self) -> bool {
        !self.failed_shards.is_empty()
    }
}

impl<N: NameServerApi, B: BrokerApi> AdminSession<N, B> {
    /// Aggregate `group`'s consumption progress, optionally narrowed to one
    /// topic.
    ///
    /// Routing goes through the group's retry topic, which every broker
    /// serving the group hosts. Each distinct broker is queried once,
    /// concurrently; per-broker tables merge without key collisions and
    /// throughput estimates sum. A broker that fails contributes nothing and
    /// is recorded in `failed_shards` — `NoConsumptionData` is returned only
    /// when the merged table ends up empty, which is how a group that is not
    /// online manifests (as opposed to a transport fault, which is visible
    /// per shard).
    pub async fn examine_consume_stats(
        &self,
        group: &CheetahString,
        topic: Option<&CheetahString>,
        timeout_millis: Option<u64>,
    ) -> AdminResult<ConsumeStatsAggregate> {
        let timeout = self.operation_timeout(timeout_millis);
        let route = self.router.resolve_group_route(group, timeout).await?;
        let shards = Self::shard_addresses(&route);

        let fetches = shards.iter().map(|(broker_name, broker_addr)| async move {
            self.fetcher
                .fetch_consume_stats(broker_addr, group, topic, timeout)
                .await
                .map_err(|error| ShardFailure {
                    broker_name: broker_name.clone(),
                    broker_addr: broker_addr.clone(),
                    error,
                })
        });
        let results = concurrent_query_limited(fetches, self.config.max_fanout).await;

        let mut merged = ConsumeStats::new();
        let mut failed_shards = Vec::new();
        for result in results {
            match result {
                Ok(partial) => merged.merge(partial),
                Err(failure) => {
                    warn!(
                        "consume stats of group {} unavailable on {} ({}): {}",
                        group, failure.broker_name, failure.broker_addr, failure.error
                    );
                    failed_shards.push(failure);
                }
            }
        }

        if let Some(topic) = topic {
            merged.retain_topic(topic);
        }
        if merged.offset_table.is_empty() {
            return Err(AdminError::no_consumption_data(Some(group.clone()), topic.cloned()));
        }

        Ok(ConsumeStatsAggregate {
            stats: merged,
            failed_shards,
        })
    }

    /// Merged stored-offset ranges of `topic` across its brokers. Same
    /// fan-out and partial-failure shape as the consumption aggregation.
    pub async fn examine_topic_stats(
        &self,
        topic: &CheetahString,
        timeout_millis: Option<u64>,
    ) -> AdminResult<TopicStatsTable> {
        let timeout = self.operation_timeout(timeout_millis);
        let route = self.router.resolve_route(topic, timeout).await?;
        let shards = Self::shard_addresses(&route);

        let fetches = shards.iter().map(|(broker_name, broker_addr)| async move {
            self.fetcher
                .fetch_topic_stats(broker_addr, topic, timeout)
                .await
                .map_err(|error| (broker_name.clone(), error))
        });
        let results = concurrent_query_limited(fetches, self.config.max_fanout).await;

        let mut merged = TopicStatsTable::new();
        for result in results {
            match result {
                Ok(partial) => merged.merge(partial),
                Err((broker_name, error)) => {
                    warn!("topic stats of {} unavailable on {}: {}", topic, broker_name, error);
                }
            }
        }

        if merged.offset_table.is_empty() {
            return Err(AdminError::no_consumption_data(None, Some(topic.clone())));
        }
        Ok(merged)
    }
}
