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

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

/// The slice of a stored message the administration layer needs: where the
/// message lives (`topic`/`queue_id`/`queue_offset` plus the address of the
/// broker that stored it) and what it carries for filter evaluation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub msg_id: CheetahString,
    pub topic: CheetahString,
    pub queue_id: i32,
    pub queue_offset: i64,
    pub tags: Option<CheetahString>,
    pub store_host: CheetahString,
    pub store_timestamp: i64,
}

impl MessageView {
    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }
}

impl fmt::Display for MessageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MessageView [msg_id={}, topic={}, queue_id={}, queue_offset={}, store_host={}]",
            self.msg_id, self.topic, self.queue_id, self.queue_offset, self.store_host
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_accessor_exposes_borrowed_value() {
        let mut view = MessageView {
            topic: "t".into(),
            queue_id: 0,
            queue_offset: 10,
            ..Default::default()
        };
        assert_eq!(view.tags(), None);
        view.tags = Some("tag-a".into());
        assert_eq!(view.tags(), Some("tag-a"));
    }

    #[test]
    fn round_trips_through_json() {
        let view = MessageView {
            msg_id: "AC1403".into(),
            topic: "t".into(),
            queue_id: 2,
            queue_offset: 77,
            tags: Some("tag-a".into()),
            store_host: "127.0.0.1:10911".into(),
            store_timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains(r#""queueOffset":77"#));
        let decoded: MessageView = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.store_host, view.store_host);
        assert_eq!(decoded.queue_offset, 77);
    }
}
