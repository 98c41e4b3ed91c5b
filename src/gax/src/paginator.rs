// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Converts list operations into streams.
//!
//! List requests accept an opaque `page` cursor, and list responses return
//! the cursor for the following page in the `opc-next-page` header. The
//! [Paginator] feeds each cursor into the next request, and stops when the
//! header is absent.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// A list request.
pub trait PageableRequest {
    /// Sets the `page` query parameter.
    fn set_page(&mut self, page: Option<String>);
}

/// A list response.
pub trait PageableResponse {
    type PageItem;

    /// The value of the `opc-next-page` header.
    fn next_page(&self) -> Option<&str>;

    /// Consumes the page and returns its items.
    fn into_items(self) -> Vec<Self::PageItem>;
}

/// A stream of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), Option<String>>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page cursor and a function
    /// to fetch each page.
    ///
    /// The stream ends after the first error, or after a page without a
    /// next page cursor. Empty cursors are treated as absent.
    pub fn new<F>(seed: Option<String>, execute: impl Fn(Option<String>) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed), move |state| {
            let execute = execute.clone();
            async move {
                let page = match state {
                    ControlFlow::Continue(page) => page,
                    ControlFlow::Break(_) => return None,
                };
                match execute(page).await {
                    Ok(response) => {
                        let next = match response.next_page() {
                            Some(p) if !p.is_empty() => ControlFlow::Continue(Some(p.to_string())),
                            _ => ControlFlow::Break(()),
                        };
                        Some((Ok(response), next))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts this stream of pages into a stream of items.
    pub fn items(self) -> impl Stream<Item = Result<T::PageItem, E>> + Send
    where
        T::PageItem: Send,
    {
        self.flat_map(|page| {
            let items: Vec<Result<T::PageItem, E>> = match page {
                Ok(p) => p.into_items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        })
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}
