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

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

use crate::protocol::route::route_data_view::BrokerData;
use crate::protocol::route::route_data_view::QueueData;

/// Shard map of one topic: which broker groups serve it and how many queues
/// each hosts. Produced by the discovery service, read-only downstream, and
/// re-resolved before every fan-out — shard layout can change between calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicRouteData {
    pub order_topic_conf: Option<CheetahString>,
    pub queue_datas: Vec<QueueData>,
    pub broker_datas: Vec<BrokerData>,
}

impl TopicRouteData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_data_for(&self, broker_name: &str) -> Option<&QueueData> {
        self.queue_datas.iter().find(|qd| qd.broker_name == broker_name)
    }

    pub fn broker_data_for(&self, broker_name: &str) -> Option<&BrokerData> {
        self.broker_datas.iter().find(|bd| bd.broker_name == broker_name)
    }

    /// Readable queue count declared for `broker_name`, zero when the broker
    /// is not part of this route.
    pub fn read_queue_nums_for(&self, broker_name: &str) -> u32 {
        self.queue_data_for(broker_name).map_or(0, |qd| qd.read_queue_nums)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn route_with(brokers: &[(&str, u32)]) -> TopicRouteData {
        let mut route = TopicRouteData::new();
        for (name, queues) in brokers {
            route.queue_datas.push(QueueData::new(*name, *queues, *queues));
            route.broker_datas.push(BrokerData::new(
                "c1",
                *name,
                HashMap::from([(0u64, CheetahString::from(format!("{name}:10911")))]),
            ));
        }
        route
    }

    #[test]
    fn queue_data_lookup_by_broker_name() {
        let route = route_with(&[("broker-a", 4), ("broker-b", 2)]);
        assert_eq!(route.read_queue_nums_for("broker-a"), 4);
        assert_eq!(route.read_queue_nums_for("broker-b"), 2);
        assert_eq!(route.read_queue_nums_for("broker-c"), 0);
    }

    #[test]
    fn broker_data_lookup_by_broker_name() {
        let route = route_with(&[("broker-a", 4)]);
        assert!(route.broker_data_for("broker-a").is_some());
        assert!(route.broker_data_for("broker-x").is_none());
    }
}
