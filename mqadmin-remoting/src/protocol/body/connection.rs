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

/// One live client connection of a consumer group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub client_id: CheetahString,
    pub client_addr: CheetahString,
    pub language: CheetahString,
    pub version: i32,
}

impl Connection {
    pub fn new(client_id: impl Into<CheetahString>, client_addr: impl Into<CheetahString>) -> Self {
        Self {
            client_id: client_id.into(),
            client_addr: client_addr.into(),
            language: CheetahString::default(),
            version: 0,
        }
    }
}
