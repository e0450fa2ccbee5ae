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

//! Concurrent fan-out across broker shards.
//!
//! Results arrive in completion order, not submission order. Callers that
//! need positional identity carry it inside the future's output.

use std::future::Future;

use futures::stream::FuturesUnordered;
use futures::StreamExt;

/// Drive all `queries` concurrently and collect every output.
pub async fn concurrent_query<F, T>(queries: impl Iterator<Item = F>) -> Vec<T>
where
    F: Future<Output = T>,
{
    let mut futures = queries.collect::<FuturesUnordered<_>>();
    let mut results = Vec::with_capacity(futures.len());

    while let Some(result) = futures.next().await {
        results.push(result);
    }

    results
}

/// Drive `queries` with at most `max_concurrent` outstanding at a time.
/// Keeps a fan-out over many shards from overwhelming the transport.
pub async fn concurrent_query_limited<F, T>(
    queries: impl Iterator<Item = F>,
    max_concurrent: usize,
) -> Vec<T>
where
    F: Future<Output = T>,
{
    let mut futures = FuturesUnordered::new();
    let mut queries = queries.peekable();
    let mut results = Vec::new();

    for _ in 0..max_concurrent.max(1) {
        match queries.next() {
            Some(query) => futures.push(query),
            None => break,
        }
    }

    while let Some(result) = futures.next().await {
        results.push(result);

        if let Some(query) = queries.next() {
            futures.push(query);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn concurrent_query_collects_all_outputs() {
        let results = concurrent_query((0..5).map(|i| async move { i * 2 })).await;
        assert_eq!(results.len(), 5);
        let sum: i32 = results.iter().sum();
        assert_eq!(sum, 20);
    }

    #[tokio::test]
    async fn limited_query_completes_everything_beyond_the_cap() {
        let results = concurrent_query_limited((0..10).map(|i| async move { i }), 3).await;
        assert_eq!(results.len(), 10);
    }

    #[tokio::test]
    async fn zero_cap_is_treated_as_one() {
        let results = concurrent_query_limited((0..2).map(|i| async move { i }), 0).await;
        assert_eq!(results.len(), 2);
    }
}
