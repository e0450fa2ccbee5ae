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

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Classification of one (message, consumer group) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackType {
    /// Committed offset is past the message and the subscription matched.
    #[serde(rename = "CONSUMED")]
    Consumed,
    /// Committed offset is past the message but the tag filter excluded it.
    #[serde(rename = "CONSUMED_BUT_FILTERED")]
    ConsumedButFiltered,
    /// Actively pulling group: no broker-verifiable offset semantics, no
    /// deeper check is attempted.
    #[serde(rename = "PULL")]
    Pull,
    #[serde(rename = "NOT_CONSUME_YET")]
    NotConsumeYet,
    #[serde(rename = "NOT_ONLINE")]
    NotOnline,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Consumed => write!(f, "CONSUMED"),
            TrackType::ConsumedButFiltered => write!(f, "CONSUMED_BUT_FILTERED"),
            TrackType::Pull => write!(f, "PULL"),
            TrackType::NotConsumeYet => write!(f, "NOT_CONSUME_YET"),
            TrackType::NotOnline => write!(f, "NOT_ONLINE"),
            TrackType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_serde_agree_on_wire_names() {
        for verdict in [
            TrackType::Consumed,
            TrackType::ConsumedButFiltered,
            TrackType::Pull,
            TrackType::NotConsumeYet,
            TrackType::NotOnline,
            TrackType::Unknown,
        ] {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json, format!("\"{verdict}\""));
        }
    }
}
