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
use mqadmin_common::mix_all;
use rand::seq::IteratorRandom;
use serde::Deserialize;
use serde::Serialize;

/// One broker group serving a topic: a named master with optional replicas,
/// keyed by broker id (`0` = master).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrokerData {
    pub cluster: CheetahString,
    pub broker_name: CheetahString,
    pub broker_addrs: HashMap<u64, CheetahString>,
}

impl BrokerData {
    pub fn new(
        cluster: impl Into<CheetahString>,
        broker_name: impl Into<CheetahString>,
        broker_addrs: HashMap<u64, CheetahString>,
    ) -> Self {
        Self {
            cluster: cluster.into(),
            broker_name: broker_name.into(),
            broker_addrs,
        }
    }

    /// Address of the master replica, if it is currently registered.
    pub fn master_addr(&self) -> Option<&CheetahString> {
        self.broker_addrs.get(&mix_all::MASTER_ID)
    }

    /// Prefer the master; fall back to a random replica when the master is
    /// absent from the route (mid-failover).
    pub fn select_broker_addr(&self) -> Option<CheetahString> {
        match self.master_addr() {
            Some(addr) => Some(addr.clone()),
            None => self.broker_addrs.values().choose(&mut rand::rng()).cloned(),
        }
    }
}

/// Queue layout of a topic on one broker group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueueData {
    pub broker_name: CheetahString,
    pub read_queue_nums: u32,
    pub write_queue_nums: u32,
    pub perm: u32,
}

impl QueueData {
    pub fn new(broker_name: impl Into<CheetahString>, read_queue_nums: u32, write_queue_nums: u32) -> Self {
        Self {
            broker_name: broker_name.into(),
            read_queue_nums,
            write_queue_nums,
            perm: 6,
        }
    }
}
