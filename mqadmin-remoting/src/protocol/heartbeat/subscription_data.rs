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

use std::collections::HashSet;

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

/// A consumer group's declared tag subscription for one topic, as reported
/// by broker connection metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionData {
    pub topic: CheetahString,
    pub sub_string: CheetahString,
    pub tags_set: HashSet<CheetahString>,
    pub sub_version: i64,
}

impl SubscriptionData {
    pub const SUB_ALL: &'static str = "*";

    pub fn new(topic: impl Into<CheetahString>, sub_string: impl Into<CheetahString>) -> Self {
        Self {
            topic: topic.into(),
            sub_string: sub_string.into(),
            tags_set: HashSet::new(),
            sub_version: 0,
        }
    }

    /// Tag-filter evaluation: a wildcard subscription, an empty tag set, or a
    /// set containing the message's tag all match. A tagless message only
    /// matches wildcard/empty subscriptions.
    pub fn matches_tag(&self, tag: Option<&str>) -> bool {
        if self.tags_set.is_empty() || self.tags_set.contains(Self::SUB_ALL) {
            return true;
        }
        match tag {
            Some(tag) => self.tags_set.contains(tag),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(tags: &[&str]) -> SubscriptionData {
        let mut data = SubscriptionData::new("t", tags.join("||"));
        data.tags_set = tags.iter().map(|t| CheetahString::from(*t)).collect();
        data
    }

    #[test]
    fn empty_tag_set_matches_everything() {
        let data = SubscriptionData::new("t", "");
        assert!(data.matches_tag(Some("a")));
        assert!(data.matches_tag(None));
    }

    #[test]
    fn wildcard_matches_everything() {
        let data = subscription(&["*"]);
        assert!(data.matches_tag(Some("whatever")));
        assert!(data.matches_tag(None));
    }

    #[test]
    fn explicit_set_matches_only_members() {
        let data = subscription(&["a", "b"]);
        assert!(data.matches_tag(Some("a")));
        assert!(data.matches_tag(Some("b")));
        assert!(!data.matches_tag(Some("c")));
        assert!(!data.matches_tag(None));
    }
}
