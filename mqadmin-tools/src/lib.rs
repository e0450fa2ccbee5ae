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

//! Consumption-state and offset-reset subsystem of the mq-admin toolkit.
//!
//! Everything runs through an [`admin::admin_session::AdminSession`]: an
//! explicit, request-scoped context owning its configuration and the two RPC
//! boundaries (discovery + broker). The session exposes
//!
//! - consumption-state aggregation across all brokers of a topic
//!   ([`admin::consume_stats`]),
//! - timestamp-targeted offset resets with rewind-safety and per-queue
//!   failure isolation ([`admin::reset_offset`]),
//! - per-group consumption classification of one message
//!   ([`admin::message_track`]).
//!
//! No state survives a call: shard topology is re-resolved per operation so
//! the subsystem never acts on stale routing.

pub mod admin;
pub mod base;
pub mod core;
pub mod fetcher;
pub mod route;
