//! Streams a demo page to stdout, chunk by chunk.
//!
//! The page has a synchronous shell, an island loader script, and a
//! three-level nested suspension; each chunk is printed with the time it
//! arrived so the shell-first / resolve-later behavior is visible.

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use futures::StreamExt;
use rill_sdk::prelude::*;
use tokio::time::sleep;

fn delayed(
    content: Markup,
    millis: u64,
) -> impl Future<Output = DeferredResult> + Send + 'static {
    async move {
        sleep(Duration::from_millis(millis)).await;
        Ok(content)
    }
}

fn demo_page(tokens: &TokenSource) -> Result<Markup> {
    let islands = register_islands(
        concat!(env!("CARGO_MANIFEST_DIR"), "/islands"),
        "/islands/",
    )?;

    let deep = suspend(
        Markup::raw("<p>Loading deeply nested\u{23f3}</p>"),
        delayed(Markup::raw("<p>Loaded deeply nested\u{2705}</p>"), 200),
        tokens,
    )?;
    let nested = suspend(
        Markup::raw("<span>Loading nested\u{23f3}</span>"),
        delayed(
            Markup::build()
                .lit("<div>Loaded nested\u{2705} ")
                .val(deep)
                .lit("</div>")
                .finish(),
            250,
        ),
        tokens,
    )?;
    let section = suspend(
        Markup::raw("<p>Loading #1\u{23f3}</p>"),
        delayed(
            Markup::build()
                .lit("<p>Loaded #1\u{2705} ")
                .val(nested)
                .lit("</p>")
                .finish(),
            300,
        ),
        tokens,
    )?;

    Ok(Markup::build()
        .lit("<h1>This is the header loaded in the initial shell</h1>")
        .val(section)
        .lit("<footer>Footer</footer>")
        .val(islands)
        .finish())
}

type Handler = fn(&TokenSource) -> Result<Markup>;

#[tokio::main]
async fn main() -> Result<()> {
    let mut router: Router<Handler> = Router::new();
    router.get("/", demo_page);

    let found = router
        .handle(Method::Get, "/")
        .ok_or_else(|| anyhow!("no route for GET /"))?;

    let tokens = TokenSource::new();
    let page = (found.handler)(&tokens)?;

    let started = Instant::now();
    let mut body = stream(page);
    while let Some(chunk) = body.next().await {
        println!(
            "[{:>4}ms] {}",
            started.elapsed().as_millis(),
            String::from_utf8_lossy(&chunk)
        );
    }

    Ok(())
}
