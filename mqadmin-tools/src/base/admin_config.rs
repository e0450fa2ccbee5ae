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

use serde::Deserialize;
use serde::Serialize;

/// Per-session configuration. Owned by one `AdminSession`; there is no
/// process-wide configuration or client registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConfig {
    /// Default per-call RPC budget in milliseconds.
    pub timeout_millis: u64,
    /// Multiplier applied to `timeout_millis` for timestamp-to-offset
    /// search, which may require an on-disk scan at the broker.
    pub search_offset_timeout_factor: u32,
    /// Upper bound on concurrently outstanding broker calls per fan-out.
    pub max_fanout: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            timeout_millis: 6000,
            search_offset_timeout_factor: 3,
            max_fanout: 32,
        }
    }
}

impl AdminConfig {
    pub fn with_timeout(timeout_millis: u64) -> Self {
        Self {
            timeout_millis,
            ..Default::default()
        }
    }

    /// Widened budget for a timestamp-to-offset search issued with
    /// `base_millis` as the operation timeout.
    pub fn search_offset_timeout_for(&self, base_millis: u64) -> u64 {
        base_millis * u64::from(self.search_offset_timeout_factor)
    }
}
