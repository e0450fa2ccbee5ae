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
use mqadmin_error::AdminResult;

use crate::protocol::route::topic_route_data::TopicRouteData;

/// Route/discovery service surface. `Ok(None)` means the service answered
/// but does not know the topic; transport failures map to
/// `AdminError::DiscoveryUnavailable`.
#[allow(async_fn_in_trait)]
pub trait NameServerApi: Send + Sync {
    async fn get_topic_route_info(
        &self,
        topic: &CheetahString,
        timeout_millis: u64,
    ) -> AdminResult<Option<TopicRouteData>>;
}
