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

/// Broker response codes the administration layer interprets. Unknown codes
/// map to `SystemError`; the raw value is always preserved alongside in
/// `AdminError::BrokerRejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    SystemError,
    SystemBusy,
    TopicNotExist,
    ConsumerNotOnline,
    ConsumeMsgTimeout,
    NoMessage,
}

impl ResponseCode {
    pub fn to_i32(self) -> i32 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::SystemError => 1,
            ResponseCode::SystemBusy => 2,
            ResponseCode::TopicNotExist => 17,
            ResponseCode::ConsumerNotOnline => 206,
            ResponseCode::ConsumeMsgTimeout => 207,
            ResponseCode::NoMessage => 208,
        }
    }

    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }
}

impl From<i32> for ResponseCode {
    fn from(code: i32) -> Self {
        match code {
            0 => ResponseCode::Success,
            2 => ResponseCode::SystemBusy,
            17 => ResponseCode::TopicNotExist,
            206 => ResponseCode::ConsumerNotOnline,
            207 => ResponseCode::ConsumeMsgTimeout,
            208 => ResponseCode::NoMessage,
            _ => ResponseCode::SystemError,
        }
    }
}
