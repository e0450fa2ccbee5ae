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

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use cheetah_string::CheetahString;
use mqadmin_common::message::message_queue::MessageQueue;
use mqadmin_error::AdminError;
use mqadmin_error::AdminResult;
use mqadmin_remoting::protocol::admin::consume_stats::ConsumeStats;
use mqadmin_remoting::protocol::admin::topic_stats_table::TopicStatsTable;
use mqadmin_remoting::protocol::body::consumer_connection::ConsumerConnection;
use mqadmin_remoting::protocol::body::group_list::GroupList;
use mqadmin_remoting::rpc::broker_api::BrokerApi;
use mqadmin_remoting::rpc::broker_api::ResetOffsetOutcome;

use crate::base::admin_config::AdminConfig;

/// Per-broker call layer. Each call carries the operation's explicit budget;
/// timestamp-to-offset search widens it by the configured factor because the
/// broker may need an on-disk scan. Budget exhaustion surfaces as
/// `BrokerTimeout` for that shard alone.
pub struct BrokerStatsFetcher<B> {
    broker_api: Arc<B>,
    config: AdminConfig,
}

impl<B: BrokerApi> BrokerStatsFetcher<B> {
    pub fn new(broker_api: Arc<B>, config: AdminConfig) -> Self {
        Self { broker_api, config }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    async fn with_budget<T>(
        &self,
        broker_addr: &CheetahString,
        budget_millis: u64,
        call: impl Future<Output = AdminResult<T>>,
    ) -> AdminResult<T> {
        match tokio::time::timeout(Duration::from_millis(budget_millis), call).await {
            Ok(result) => result,
            Err(_) => Err(AdminError::broker_timeout(broker_addr.clone(), budget_millis)),
        }
    }

    pub async fn fetch_consume_stats(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        topic: Option<&CheetahString>,
        timeout_millis: u64,
    ) -> AdminResult<ConsumeStats> {
        self.with_budget(
            broker_addr,
            timeout_millis,
            self.broker_api
                .get_consume_stats(broker_addr, group, topic, timeout_millis),
        )
        .await
    }

    pub async fn fetch_topic_stats(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<TopicStatsTable> {
        self.with_budget(
            broker_addr,
            timeout_millis,
            self.broker_api.get_topic_stats_info(broker_addr, topic, timeout_millis),
        )
        .await
    }

    /// `timeout_millis` is the operation budget; the actual search budget is
    /// widened by the configured factor.
    pub async fn search_offset_by_timestamp(
        &self,
        broker_addr: &CheetahString,
        queue: &MessageQueue,
        timestamp: i64,
        timeout_millis: u64,
    ) -> AdminResult<i64> {
        let budget = self.config.search_offset_timeout_for(timeout_millis);
        self.with_budget(
            broker_addr,
            budget,
            self.broker_api
                .search_offset_by_timestamp(broker_addr, &queue.topic, queue.queue_id, timestamp, budget),
        )
        .await
    }

    /// The only mutating call. Always carries the final absolute offset so
    /// at-least-once delivery of the request stays idempotent.
    pub async fn commit_offset(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        queue: &MessageQueue,
        offset: i64,
        timeout_millis: u64,
    ) -> AdminResult<()> {
        self.with_budget(
            broker_addr,
            timeout_millis,
            self.broker_api
                .update_consumer_offset(broker_addr, group, queue, offset, timeout_millis),
        )
        .await
    }

    pub async fn fetch_consumer_connection(
        &self,
        broker_addr: &CheetahString,
        group: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<ConsumerConnection> {
        self.with_budget(
            broker_addr,
            timeout_millis,
            self.broker_api
                .get_consumer_connection_list(broker_addr, group, timeout_millis),
        )
        .await
    }

    pub async fn fetch_groups_for_topic(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<GroupList> {
        self.with_budget(
            broker_addr,
            timeout_millis,
            self.broker_api.query_topic_consume_by_who(broker_addr, topic, timeout_millis),
        )
        .await
    }

    pub async fn invoke_reset_offset(
        &self,
        broker_addr: &CheetahString,
        topic: &CheetahString,
        group: &CheetahString,
        timestamp: i64,
        is_force: bool,
        timeout_millis: u64,
    ) -> AdminResult<ResetOffsetOutcome> {
        self.with_budget(
            broker_addr,
            timeout_millis,
            self.broker_api
                .invoke_broker_to_reset_offset(broker_addr, topic, group, timestamp, is_force, timeout_millis),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Broker double whose searches hang until past any budget.
    struct StallingBroker;

    impl BrokerApi for StallingBroker {
        async fn get_consume_stats(
            &self,
            _broker_addr: &CheetahString,
            _group: &CheetahString,
            _topic: Option<&CheetahString>,
            _timeout_millis: u64,
        ) -> AdminResult<ConsumeStats> {
            Ok(ConsumeStats::new())
        }

        async fn get_topic_stats_info(
            &self,
            _broker_addr: &CheetahString,
            _topic: &CheetahString,
            _timeout_millis: u64,
        ) -> AdminResult<TopicStatsTable> {
            Ok(TopicStatsTable::new())
        }

        async fn search_offset_by_timestamp(
            &self,
            _broker_addr: &CheetahString,
            _topic: &CheetahString,
            _queue_id: i32,
            _timestamp: i64,
            _timeout_millis: u64,
        ) -> AdminResult<i64> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(0)
        }

        async fn update_consumer_offset(
            &self,
            _broker_addr: &CheetahString,
            _group: &CheetahString,
            _queue: &MessageQueue,
            _offset: i64,
            _timeout_millis: u64,
        ) -> AdminResult<()> {
            Ok(())
        }

        async fn get_consumer_connection_list(
            &self,
            _broker_addr: &CheetahString,
            _group: &CheetahString,
            _timeout_millis: u64,
        ) -> AdminResult<ConsumerConnection> {
            Ok(ConsumerConnection::new())
        }

        async fn query_topic_consume_by_who(
            &self,
            _broker_addr: &CheetahString,
            _topic: &CheetahString,
            _timeout_millis: u64,
        ) -> AdminResult<GroupList> {
            Ok(GroupList::default())
        }

        async fn invoke_broker_to_reset_offset(
            &self,
            _broker_addr: &CheetahString,
            _topic: &CheetahString,
            _group: &CheetahString,
            _timestamp: i64,
            _is_force: bool,
            _timeout_millis: u64,
        ) -> AdminResult<ResetOffsetOutcome> {
            Ok(ResetOffsetOutcome::NotOnline)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_search_maps_to_broker_timeout_with_widened_budget() {
        let fetcher = BrokerStatsFetcher::new(Arc::new(StallingBroker), AdminConfig::default());
        let addr = CheetahString::from("127.0.0.1:10911");
        let queue = MessageQueue::from_parts("t", "broker-a", 0);
        let err = fetcher
            .search_offset_by_timestamp(&addr, &queue, 1_700_000_000_000, 1000)
            .await
            .unwrap_err();
        match err {
            AdminError::BrokerTimeout {
                broker_addr,
                timeout_millis,
            } => {
                assert_eq!(broker_addr, addr);
                // The widened search budget applies, not the base timeout.
                assert_eq!(timeout_millis, 3000);
            }
            other => panic!("expected BrokerTimeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fast_calls_pass_through_untouched() {
        let fetcher = BrokerStatsFetcher::new(Arc::new(StallingBroker), AdminConfig::default());
        let addr = CheetahString::from("127.0.0.1:10911");
        let stats = fetcher
            .fetch_consume_stats(&addr, &CheetahString::from("g"), None, 1000)
            .await
            .unwrap();
        assert!(stats.offset_table.is_empty());
    }
}
