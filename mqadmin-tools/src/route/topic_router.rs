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
use mqadmin_common::mix_all;
use mqadmin_error::AdminError;
use mqadmin_error::AdminResult;
use mqadmin_remoting::protocol::route::topic_route_data::TopicRouteData;
use mqadmin_remoting::rpc::name_server_api::NameServerApi;

/// Resolves a topic to its current shard map. Stateless: callers resolve
/// immediately before each fan-out and never reuse a route across retries,
/// since shard membership can change between calls.
pub struct TopicRouter<N> {
    name_server: Arc<N>,
}

impl<N: NameServerApi> TopicRouter<N> {
    pub fn new(name_server: Arc<N>) -> Self {
        Self { name_server }
    }

    pub async fn resolve_route(
        &self,
        topic: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<TopicRouteData> {
        match self.name_server.get_topic_route_info(topic, timeout_millis).await? {
            Some(route) if !route.broker_datas.is_empty() => Ok(route),
            _ => Err(AdminError::route_not_found(topic.clone())),
        }
    }

    /// Route a group-scoped operation via the group's retry topic: every
    /// broker serving the group hosts it, so its route enumerates exactly
    /// the brokers that may hold the group's offsets.
    pub async fn resolve_group_route(
        &self,
        group: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<TopicRouteData> {
        let retry_topic = mix_all::get_retry_topic(group);
        self.resolve_route(&retry_topic, timeout_millis).await
    }
}

/// Master address of `broker_name` inside an already-resolved route. Used to
/// guard offset comparisons against a renamed/failed-over queue instance.
pub fn master_broker_addr<'a>(route: &'a TopicRouteData, broker_name: &str) -> Option<&'a CheetahString> {
    route.broker_data_for(broker_name).and_then(|bd| bd.master_addr())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mqadmin_remoting::protocol::route::route_data_view::BrokerData;
    use mqadmin_remoting::protocol::route::route_data_view::QueueData;

    use super::*;

    struct FixedRoutes {
        routes: HashMap<CheetahString, TopicRouteData>,
        discovery_down: bool,
    }

    impl NameServerApi for FixedRoutes {
        async fn get_topic_route_info(
            &self,
            topic: &CheetahString,
            _timeout_millis: u64,
        ) -> AdminResult<Option<TopicRouteData>> {
            if self.discovery_down {
                return Err(AdminError::discovery_unavailable("connection refused"));
            }
            Ok(self.routes.get(topic).cloned())
        }
    }

    fn one_broker_route() -> TopicRouteData {
        let mut route = TopicRouteData::new();
        route.queue_datas.push(QueueData::new("broker-a", 2, 2));
        route.broker_datas.push(BrokerData::new(
            "c1",
            "broker-a",
            HashMap::from([(0u64, CheetahString::from("127.0.0.1:10911"))]),
        ));
        route
    }

    #[tokio::test]
    async fn unknown_topic_is_route_not_found() {
        let router = TopicRouter::new(Arc::new(FixedRoutes {
            routes: HashMap::new(),
            discovery_down: false,
        }));
        let err = router
            .resolve_route(&CheetahString::from("missing"), 1000)
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::RouteNotFound { .. }));
    }

    #[tokio::test]
    async fn discovery_outage_is_surfaced_distinctly() {
        let router = TopicRouter::new(Arc::new(FixedRoutes {
            routes: HashMap::new(),
            discovery_down: true,
        }));
        let err = router
            .resolve_route(&CheetahString::from("t"), 1000)
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::DiscoveryUnavailable { .. }));
    }

    #[tokio::test]
    async fn group_route_goes_through_the_retry_topic() {
        let router = TopicRouter::new(Arc::new(FixedRoutes {
            routes: HashMap::from([(CheetahString::from("%RETRY%g1"), one_broker_route())]),
            discovery_down: false,
        }));
        let route = router
            .resolve_group_route(&CheetahString::from("g1"), 1000)
            .await
            .unwrap();
        assert_eq!(route.broker_datas.len(), 1);
    }

    #[test]
    fn master_broker_addr_reads_the_master_replica() {
        let route = one_broker_route();
        assert_eq!(master_broker_addr(&route, "broker-a").unwrap(), "127.0.0.1:10911");
        assert!(master_broker_addr(&route, "broker-b").is_none());
    }
}
