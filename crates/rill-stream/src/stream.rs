//! Shell-first materialization of markup into bytes.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use rill_markup::{Chunk, DeferredResult, Markup};

use crate::CancelFlag;

type Resolution = BoxFuture<'static, DeferredResult>;

/// Materialize a markup sequence into a cancellable byte stream.
///
/// The shell (everything synchronously available) is flushed first, in
/// document order, with each deferred chunk standing in as its placeholder
/// text. Deferred chunks then resolve concurrently; each resolved fragment
/// is appended as soon as its computation settles, and fragments may carry
/// further deferred chunks of their own, which join the same pool.
///
/// The stream ends only once the shell and every transitively spawned
/// resolution has flushed. A failed computation flushes its error content
/// through the same path as a successful one; failures never surface as
/// stream errors.
pub fn stream(markup: Markup) -> HtmlStream {
    let cancel = CancelFlag::new();
    let (tx, rx) = mpsc::unbounded();
    let driver = Box::pin(drive(markup, tx, cancel.clone()));

    HtmlStream {
        driver: Some(driver),
        rx,
        cancel,
    }
}

async fn drive(markup: Markup, tx: UnboundedSender<Vec<u8>>, cancel: CancelFlag) {
    let mut resolutions = FuturesUnordered::new();
    emit(markup, &tx, &cancel, &mut resolutions);

    // Nested resolutions land in the same pool, so draining it to empty is
    // the join over the whole task tree rooted at this invocation.
    while let Some(settled) = resolutions.next().await {
        if cancel.is_canceled() {
            continue;
        }
        let fragment = match settled {
            Ok(markup) | Err(markup) => markup,
        };
        emit(fragment, &tx, &cancel, &mut resolutions);
    }
}

/// Flush one sequence: text immediately, deferred chunks as placeholder
/// stand-ins plus a queued resolution.
fn emit(
    markup: Markup,
    tx: &UnboundedSender<Vec<u8>>,
    cancel: &CancelFlag,
    resolutions: &mut FuturesUnordered<Resolution>,
) {
    for chunk in markup {
        match chunk {
            Chunk::Text(text) => enqueue(tx, cancel, text),
            Chunk::Deferred(deferred) => {
                let (stand_in, future) = deferred.into_parts();
                enqueue(tx, cancel, stand_in);
                resolutions.push(future);
            }
        }
    }
}

fn enqueue(tx: &UnboundedSender<Vec<u8>>, cancel: &CancelFlag, text: String) {
    if cancel.is_canceled() || text.is_empty() {
        return;
    }
    // The receiver half only disappears once the stream is dropped; at that
    // point dropped bytes are unobservable anyway.
    let _ = tx.unbounded_send(text.into_bytes());
}

/// A cancellable stream of UTF-8 encoded output.
///
/// The stream drives its own rendering: polling it advances both the
/// render work and the delivery of finished bytes, so it runs on any
/// executor and can back an HTTP response body directly.
pub struct HtmlStream {
    driver: Option<BoxFuture<'static, ()>>,
    rx: UnboundedReceiver<Vec<u8>>,
    cancel: CancelFlag,
}

impl HtmlStream {
    /// Cancel the stream.
    ///
    /// No further bytes are enqueued by any in-flight resolution, queued
    /// but undelivered bytes are discarded, and the stream ends on the
    /// next poll. Bytes already delivered are untouched: the consumer
    /// always observes a prefix of the uncancelled output.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
    }

    /// Drain the stream to completion and decode it as UTF-8.
    pub async fn into_string(mut self) -> String {
        let mut out = String::new();
        while let Some(bytes) = self.next().await {
            out.push_str(&String::from_utf8_lossy(&bytes));
        }
        out
    }
}

impl std::fmt::Debug for HtmlStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlStream")
            .field("cancel", &self.cancel)
            .field("driving", &self.driver.is_some())
            .finish_non_exhaustive()
    }
}

impl Stream for HtmlStream {
    type Item = Vec<u8>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Vec<u8>>> {
        let this = self.get_mut();

        if this.cancel.is_canceled() {
            this.driver = None;
            this.rx.close();
            return Poll::Ready(None);
        }

        if let Some(driver) = this.driver.as_mut() {
            if driver.as_mut().poll(cx).is_ready() {
                // Dropping the driver drops the sender, which lets the
                // receiver report the end of the stream once drained.
                this.driver = None;
            }
        }

        this.rx.poll_next_unpin(cx)
    }
}
