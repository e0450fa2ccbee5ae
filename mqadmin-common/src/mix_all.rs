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

/// Broker id of the master replica inside a broker group.
pub const MASTER_ID: u64 = 0;

/// Prefix of the per-group retry topic. Every broker that serves a consumer
/// group hosts its retry topic, so routing by it locates the group's brokers.
pub const RETRY_GROUP_TOPIC_PREFIX: &str = "%RETRY%";

pub fn get_retry_topic(group: &str) -> CheetahString {
    CheetahString::from(format!("{RETRY_GROUP_TOPIC_PREFIX}{group}"))
}
