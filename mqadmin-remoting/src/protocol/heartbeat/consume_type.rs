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

/// How a consumer group receives messages. Actively pulling consumers manage
/// their own progress; passively pushed consumers commit offsets the broker
/// can report.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum ConsumeType {
    #[default]
    #[serde(rename = "CONSUME_ACTIVELY")]
    ConsumeActively,
    #[serde(rename = "CONSUME_PASSIVELY")]
    ConsumePassively,
}

impl fmt::Display for ConsumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumeType::ConsumeActively => write!(f, "PULL"),
            ConsumeType::ConsumePassively => write!(f, "PUSH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&ConsumeType::ConsumeActively).unwrap(),
            r#""CONSUME_ACTIVELY""#
        );
        assert_eq!(
            serde_json::to_string(&ConsumeType::ConsumePassively).unwrap(),
            r#""CONSUME_PASSIVELY""#
        );
    }

    #[test]
    fn displays_as_transport_style() {
        assert_eq!(ConsumeType::ConsumeActively.to_string(), "PULL");
        assert_eq!(ConsumeType::ConsumePassively.to_string(), "PUSH");
    }
}
