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

use std::sync::Arc;

use cheetah_string::CheetahString;
use mqadmin_remoting::protocol::route::topic_route_data::TopicRouteData;
use mqadmin_remoting::rpc::broker_api::BrokerApi;
use mqadmin_remoting::rpc::name_server_api::NameServerApi;

use crate::base::admin_config::AdminConfig;
use crate::fetcher::broker_stats_fetcher::BrokerStatsFetcher;
use crate::route::topic_router::TopicRouter;

/// Explicit administrative session: owns its configuration and the two RPC
/// boundaries, and is the only context operations run in. One session per
/// administrative client; nothing is registered process-wide and no state
/// survives an individual operation.
///
/// The operations themselves live in sibling modules, one per concern:
/// `consume_stats`, `reset_offset`, `message_track`.
pub struct AdminSession<N, B> {
    pub(crate) config: AdminConfig,
    pub(crate) router: TopicRouter<N>,
    pub(crate) fetcher: BrokerStatsFetcher<B>,
}

impl<N: NameServerApi, B: BrokerApi> AdminSession<N, B> {
    pub fn new(name_server: Arc<N>, broker_api: Arc<B>) -> Self {
        Self::with_config(name_server, broker_api, AdminConfig::default())
    }

    pub fn with_config(name_server: Arc<N>, broker_api: Arc<B>, config: AdminConfig) -> Self {
        Self {
            router: TopicRouter::new(name_server),
            fetcher: BrokerStatsFetcher::new(broker_api, config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Effective budget of one operation: the caller's per-call override, or
    /// the session default.
    pub(crate) fn operation_timeout(&self, timeout_millis: Option<u64>) -> u64 {
        timeout_millis.unwrap_or(self.config.timeout_millis)
    }

    /// One `(broker_name, address)` pair per addressable broker group of a
    /// route — the fan-out targets of every multi-shard operation.
    pub(crate) fn shard_addresses(route: &TopicRouteData) -> Vec<(CheetahString, CheetahString)> {
        route
            .broker_datas
            .iter()
            .filter_map(|bd| bd.select_broker_addr().map(|addr| (bd.broker_name.clone(), addr)))
            .collect()
    }
}
