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

/// One ordered partition of a topic, hosted by a specific broker.
///
/// The broker name is part of the identity, so queues reported by different
/// brokers never collide when merged into one table.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct MessageQueue {
    pub topic: CheetahString,
    pub broker_name: CheetahString,
    pub queue_id: i32,
}

impl MessageQueue {
    pub fn from_parts(
        topic: impl Into<CheetahString>,
        broker_name: impl Into<CheetahString>,
        queue_id: i32,
    ) -> Self {
        Self {
            topic: topic.into(),
            broker_name: broker_name.into(),
            queue_id,
        }
    }
}

impl fmt::Display for MessageQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MessageQueue [topic={}, broker_name={}, queue_id={}]",
            self.topic, self.broker_name, self.queue_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_sets_all_fields() {
        let mq = MessageQueue::from_parts("order-topic", "broker-a", 3);
        assert_eq!(mq.topic, "order-topic");
        assert_eq!(mq.broker_name, "broker-a");
        assert_eq!(mq.queue_id, 3);
    }

    #[test]
    fn queues_on_different_brokers_are_distinct() {
        let a = MessageQueue::from_parts("t", "broker-a", 0);
        let b = MessageQueue::from_parts("t", "broker-b", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_topic_then_broker_then_queue_id() {
        let mut queues = vec![
            MessageQueue::from_parts("t", "broker-b", 0),
            MessageQueue::from_parts("t", "broker-a", 1),
            MessageQueue::from_parts("t", "broker-a", 0),
        ];
        queues.sort();
        assert_eq!(queues[0].broker_name, "broker-a");
        assert_eq!(queues[0].queue_id, 0);
        assert_eq!(queues[1].queue_id, 1);
        assert_eq!(queues[2].broker_name, "broker-b");
    }

    #[test]
    fn display_includes_identity() {
        let mq = MessageQueue::from_parts("t", "broker-a", 2);
        assert_eq!(
            format!("{mq}"),
            "MessageQueue [topic=t, broker_name=broker-a, queue_id=2]"
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mq = MessageQueue::from_parts("t", "broker-a", 1);
        let json = serde_json::to_string(&mq).unwrap();
        assert!(json.contains(r#""brokerName":"broker-a""#));
        assert!(json.contains(r#""queueId":1"#));
    }
}
