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

//! Per-group consumption classification of one stored message.

use cheetah_string::CheetahString;
use mqadmin_common::message::message_view::MessageView;
use mqadmin_error::AdminError;
use mqadmin_error::AdminResult;
use mqadmin_remoting::protocol::body::consumer_connection::ConsumerConnection;
use mqadmin_remoting::protocol::body::group_list::GroupList;
use mqadmin_remoting::protocol::heartbeat::consume_type::ConsumeType;
use mqadmin_remoting::rpc::broker_api::BrokerApi;
use mqadmin_remoting::rpc::name_server_api::NameServerApi;

use crate::admin::admin_session::AdminSession;
use crate::admin::api::message_track::MessageTrack;
use crate::admin::api::track_type::TrackType;
use crate::core::concurrent::concurrent_query;
use crate::route::topic_router::master_broker_addr;

impl<N: NameServerApi, B: BrokerApi> AdminSession<N, B> {
    /// Live connection snapshot of `group`, read from the first addressable
    /// broker of the group's retry-topic route. Every broker sees all of a
    /// group's connections, so one answer suffices. A group with no live
    /// connections is reported with the broker's not-online rejection.
    pub async fn examine_consumer_connection_info(
        &self,
        group: &CheetahString,
        timeout_millis: Option<u64>,
    ) -> AdminResult<ConsumerConnection> {
        let timeout = self.operation_timeout(timeout_millis);
        let route = self.router.resolve_group_route(group, timeout).await?;
        for broker_data in &route.broker_datas {
            if let Some(broker_addr) = broker_data.select_broker_addr() {
                let connection = self.fetcher.fetch_consumer_connection(&broker_addr, group, timeout).await?;
                if connection.is_online() {
                    return Ok(connection);
                }
                break;
            }
        }
        Err(AdminError::consumer_not_online(group.clone()))
    }

    /// Consumer groups subscribed to `topic`, read from one shard of its
    /// route.
    pub async fn query_topic_consume_by_who(
        &self,
        topic: &CheetahString,
        timeout_millis: Option<u64>,
    ) -> AdminResult<GroupList> {
        let timeout = self.operation_timeout(timeout_millis);
        let route = self.router.resolve_route(topic, timeout).await?;
        for broker_data in &route.broker_datas {
            if let Some(broker_addr) = broker_data.select_broker_addr() {
                return self.fetcher.fetch_groups_for_topic(&broker_addr, topic, timeout).await;
            }
        }
        Err(AdminError::route_not_found(topic.clone()))
    }

    /// Classify `msg` against every consumer group subscribed to its topic.
    /// Groups classify concurrently and independently: one group's failure
    /// is recorded in its own track and never aborts the batch. Tracks come
    /// back ordered by group name.
    pub async fn message_track_detail(
        &self,
        msg: &MessageView,
        timeout_millis: Option<u64>,
    ) -> AdminResult<Vec<MessageTrack>> {
        let group_list = self.query_topic_consume_by_who(&msg.topic, timeout_millis).await?;
        let mut groups: Vec<CheetahString> = group_list.group_list.into_iter().collect();
        groups.sort();

        let mut tracks =
            concurrent_query(groups.iter().map(|group| self.track_single(msg, group, timeout_millis))).await;
        tracks.sort_by(|a, b| a.consumer_group.cmp(&b.consumer_group));
        Ok(tracks)
    }

    async fn track_single(
        &self,
        msg: &MessageView,
        group: &CheetahString,
        timeout_millis: Option<u64>,
    ) -> MessageTrack {
        let mut track = MessageTrack::new(group.clone());

        let connection = match self.examine_consumer_connection_info(group, timeout_millis).await {
            Ok(connection) => connection,
            Err(error) => {
                if error.is_not_online_signal() {
                    track.track_type = TrackType::NotOnline;
                }
                track.exception_desc = Some(error.to_string());
                return track;
            }
        };

        match connection.consume_type {
            // Actively pulling consumers self-report no committed-offset
            // semantics the admin layer can verify.
            ConsumeType::ConsumeActively => {
                track.track_type = TrackType::Pull;
            }
            ConsumeType::ConsumePassively => match self.consumed(msg, group, timeout_millis).await {
                Ok(true) => {
                    track.track_type = TrackType::Consumed;
                    if let Some(subscription) = connection.subscription_for(&msg.topic) {
                        if !subscription.matches_tag(msg.tags()) {
                            track.track_type = TrackType::ConsumedButFiltered;
                        }
                    }
                }
                Ok(false) => {
                    track.track_type = TrackType::NotConsumeYet;
                }
                Err(error) => {
                    if error.is_not_online_signal() {
                        track.track_type = TrackType::NotOnline;
                    }
                    track.exception_desc = Some(error.to_string());
                }
            },
        }
        track
    }

    /// Whether `group` has consumed past `msg`: its committed offset on the
    /// message's queue must strictly exceed the message's offset, and the
    /// queue's current master address must equal the address that stored the
    /// message — offsets from a different physical queue instance after a
    /// failover/renaming are not comparable.
    async fn consumed(
        &self,
        msg: &MessageView,
        group: &CheetahString,
        timeout_millis: Option<u64>,
    ) -> AdminResult<bool> {
        let aggregate = self.examine_consume_stats(group, None, timeout_millis).await?;
        let route = self
            .router
            .resolve_route(&msg.topic, self.operation_timeout(timeout_millis))
            .await?;

        for (queue, wrapper) in &aggregate.stats.offset_table {
            if queue.topic == msg.topic && queue.queue_id == msg.queue_id {
                if let Some(master_addr) = master_broker_addr(&route, &queue.broker_name) {
                    if *master_addr == msg.store_host && wrapper.consumer_offset > msg.queue_offset {
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }
}
