//! The suspension handle and its injection fragment.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use rill_markup::{Chunk, DeferredChunk, DeferredResult, Markup};

use crate::{SuspenseError, TokenSource};

/// A suspension: a placeholder paired with pending content.
///
/// The handle is dual-natured. Coerced to text (via
/// [`render_placeholder`](Self::render_placeholder) or by embedding it in a
/// synchronously consumed template) it is the placeholder wrapped in a
/// uniquely tagged container. Turned into a deferred chunk (via
/// [`into_deferred`](Self::into_deferred) or [`From<SuspendHandle> for
/// Value`](rill_markup::Value)) it resolves to the out-of-band injection
/// fragment once the content settles, on success and failure alike.
pub struct SuspendHandle {
    token: String,
    placeholder: String,
    content: BoxFuture<'static, DeferredResult>,
}

/// Pair a synchronous placeholder with pending content.
///
/// Issues a fresh token from `tokens` and renders the placeholder up
/// front. A placeholder containing deferred content is rejected: the
/// stand-in must be available before the content it stands in for.
pub fn suspend(
    placeholder: Markup,
    content: impl Future<Output = DeferredResult> + Send + 'static,
    tokens: &TokenSource,
) -> Result<SuspendHandle, SuspenseError> {
    Ok(SuspendHandle {
        token: tokens.issue(),
        placeholder: render_inert(placeholder)?,
        content: Box::pin(content),
    })
}

impl SuspendHandle {
    /// Get the token correlating placeholder and injection fragment.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Render the placeholder wrapped in its tagged container.
    ///
    /// This is all a consumer ever observes if the content never settles.
    pub fn render_placeholder(&self) -> String {
        format!(
            r#"<div id="placeholder-{}">{}</div>"#,
            self.token, self.placeholder
        )
    }

    /// Convert into a deferred chunk resolving to the injection fragment.
    ///
    /// Success and failure content route through the same fragment builder;
    /// downstream consumers cannot tell the two apart.
    pub fn into_deferred(self) -> DeferredChunk {
        let stand_in = self.render_placeholder();
        let token = self.token;
        let content = self.content;

        DeferredChunk::new(async move {
            let markup = match content.await {
                Ok(markup) | Err(markup) => markup,
            };
            Ok(injection_fragment(&token, markup))
        })
        .with_placeholder(stand_in)
    }
}

impl From<SuspendHandle> for rill_markup::Value {
    fn from(handle: SuspendHandle) -> Self {
        handle.into_deferred().into()
    }
}

impl fmt::Debug for SuspendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuspendHandle")
            .field("token", &self.token)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

/// Render a markup sequence that must not contain deferred content.
fn render_inert(markup: Markup) -> Result<String, SuspenseError> {
    let mut out = String::new();
    for chunk in markup {
        match chunk {
            Chunk::Text(text) => out.push_str(&text),
            Chunk::Deferred(_) => return Err(SuspenseError::DeferredPlaceholder),
        }
    }
    Ok(out)
}

/// Build the out-of-band injection fragment for `content`.
///
/// A hidden template tagged `content-{token}` wraps the content, followed
/// by a script that swaps it in for the matching placeholder. The script
/// checks that both elements still exist so it stays a no-op after
/// arbitrary other DOM mutations, then removes the template and itself.
///
/// The content stays lazy inside the fragment: nested deferred chunks pass
/// through for the materializer to resolve one level down.
fn injection_fragment(token: &str, content: Markup) -> Markup {
    let open = format!(r#"<template id="content-{token}">"#);
    let swap = format!(
        "</template><script>(function(){{\
const content=document.getElementById('content-{token}');\
const placeholder=document.getElementById('placeholder-{token}');\
if(content&&placeholder){{\
placeholder.replaceWith(content.content.cloneNode(true));\
content.remove();\
document.currentScript.remove();\
}}\
}})()</script>"
    );

    Markup::build().lit(open).val(content).lit(swap).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;

    fn loading() -> Markup {
        Markup::raw("<p>Loading</p>")
    }

    #[test]
    fn test_placeholder_renders_in_tagged_container() {
        let tokens = TokenSource::sequential("t");
        let handle = suspend(loading(), async { Ok(Markup::empty()) }, &tokens).unwrap();

        assert_eq!(handle.token(), "t-0");
        assert_eq!(
            handle.render_placeholder(),
            r#"<div id="placeholder-t-0"><p>Loading</p></div>"#
        );
    }

    #[test]
    fn test_pending_forever_only_shows_placeholder() {
        let tokens = TokenSource::sequential("t");
        let handle = suspend(loading(), future::pending(), &tokens).unwrap();

        assert_eq!(
            handle.render_placeholder(),
            r#"<div id="placeholder-t-0"><p>Loading</p></div>"#
        );
    }

    #[test]
    fn test_handle_embeds_as_placeholder_in_synchronous_templates() {
        let tokens = TokenSource::sequential("t");
        let handle = suspend(loading(), future::pending(), &tokens).unwrap();
        let page = Markup::build()
            .lit("<main>")
            .val(handle)
            .lit("</main>")
            .finish();

        assert_eq!(
            page.into_text(),
            r#"<main><div id="placeholder-t-0"><p>Loading</p></div></main>"#
        );
    }

    #[test]
    fn test_placeholder_with_deferred_content_is_rejected() {
        let tokens = TokenSource::sequential("t");
        let nested = DeferredChunk::new(async { Ok(Markup::empty()) });
        let placeholder = Markup::build().val(nested).finish();

        let result = suspend(placeholder, async { Ok(Markup::empty()) }, &tokens);

        assert!(matches!(result, Err(SuspenseError::DeferredPlaceholder)));
    }

    #[test]
    fn test_resolved_content_becomes_injection_fragment() {
        let tokens = TokenSource::sequential("t");
        let handle = suspend(
            loading(),
            async { Ok(Markup::raw("<p>Loaded</p>")) },
            &tokens,
        )
        .unwrap();

        let fragment = block_on(handle.into_deferred().settle()).into_text();

        assert!(fragment.starts_with(r#"<template id="content-t-0"><p>Loaded</p></template>"#));
        assert!(fragment.contains("getElementById('placeholder-t-0')"));
        assert!(fragment.contains("placeholder.replaceWith(content.content.cloneNode(true))"));
        assert!(fragment.ends_with("</script>"));
    }

    #[test]
    fn test_failure_routes_through_the_same_fragment() {
        let tokens = TokenSource::sequential("t");
        let handle = suspend(
            loading(),
            async { Err(Markup::raw("<p>Failed</p>")) },
            &tokens,
        )
        .unwrap();

        let fragment = block_on(handle.into_deferred().settle()).into_text();

        assert!(fragment.starts_with(r#"<template id="content-t-0"><p>Failed</p></template>"#));
        assert!(fragment.contains("getElementById('content-t-0')"));
    }

    #[test]
    fn test_each_suspension_gets_its_own_token() {
        let tokens = TokenSource::sequential("t");
        let first = suspend(loading(), future::pending(), &tokens).unwrap();
        let second = suspend(loading(), future::pending(), &tokens).unwrap();

        assert_ne!(first.token(), second.token());
    }
}
