//! One-shot, depth-first markup sequences.

use std::collections::VecDeque;

use crate::{Chunk, MarkupError, Value};

/// One pending entry in the traversal queue.
///
/// Literal spans and unexpanded slot values are kept distinct so a value
/// is only expanded once the iterator reaches it.
#[derive(Debug)]
enum Node {
    Literal(String),
    Pending(Value),
}

/// A lazy sequence of output chunks.
///
/// Built by interleaving literal text spans with slot values. Iterating
/// flattens nested markup and lists depth-first, in document order, and
/// yields [`Chunk::Deferred`] for pending content without resolving it.
///
/// The sequence is single-pass: iteration consumes it, and consuming it
/// twice is not possible by construction.
#[derive(Debug, Default)]
pub struct Markup {
    queue: VecDeque<Node>,
}

impl Markup {
    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a sequence holding a single literal span, emitted as-is.
    pub fn raw(text: impl Into<String>) -> Self {
        let mut queue = VecDeque::with_capacity(1);
        queue.push_back(Node::Literal(text.into()));
        Self { queue }
    }

    /// Start building a sequence span by span.
    pub fn build() -> MarkupBuilder {
        MarkupBuilder::new()
    }

    /// Interleave literal spans with values: `S[0] V[0] S[1] … V[n-1] S[n]`.
    ///
    /// Requires exactly one more literal span than values; anything else is
    /// a malformed template and fails before any output is produced.
    pub fn from_parts<S>(
        literals: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, MarkupError>
    where
        S: Into<String>,
    {
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        let values: Vec<Value> = values.into_iter().collect();

        if literals.len() != values.len() + 1 {
            return Err(MarkupError::TemplateShape {
                literals: literals.len(),
                values: values.len(),
            });
        }

        let mut queue = VecDeque::with_capacity(literals.len() + values.len());
        let mut values = values.into_iter();
        for literal in literals {
            queue.push_back(Node::Literal(literal));
            if let Some(value) = values.next() {
                queue.push_back(Node::Pending(value));
            }
        }

        Ok(Self { queue })
    }

    /// Coerce the whole sequence to text.
    ///
    /// Deferred chunks are substituted with their placeholder text; this is
    /// what a consumer sees when it drains a sequence without resolving
    /// anything asynchronous.
    pub fn into_text(self) -> String {
        let mut out = String::new();
        for chunk in self {
            match chunk {
                Chunk::Text(text) => out.push_str(&text),
                Chunk::Deferred(deferred) => out.push_str(deferred.placeholder()),
            }
        }
        out
    }

    /// Prepend the contents of `other`, preserving its internal order.
    fn splice_front(&mut self, other: impl DoubleEndedIterator<Item = Node>) {
        for node in other.rev() {
            self.queue.push_front(node);
        }
    }
}

impl Iterator for Markup {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        loop {
            match self.queue.pop_front()? {
                Node::Literal(text) => return Some(Chunk::Text(text)),
                Node::Pending(value) => match value {
                    Value::Text(text) => return Some(Chunk::Text(text)),
                    Value::Deferred(deferred) => return Some(Chunk::Deferred(deferred)),
                    Value::Markup(markup) => self.splice_front(markup.queue.into_iter()),
                    Value::List(values) => {
                        self.splice_front(values.into_iter().map(Node::Pending));
                    }
                },
            }
        }
    }
}

/// Builder for markup sequences that cannot be misshapen.
///
/// [`Markup::from_parts`] validates the literal/value interleaving at
/// runtime; the builder sidesteps the question by appending spans and
/// values explicitly.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    queue: VecDeque<Node>,
}

impl MarkupBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal text span, emitted as-is.
    pub fn lit(mut self, text: impl Into<String>) -> Self {
        self.queue.push_back(Node::Literal(text.into()));
        self
    }

    /// Append a slot value.
    pub fn val(mut self, value: impl Into<Value>) -> Self {
        self.queue.push_back(Node::Pending(value.into()));
        self
    }

    /// Finish building.
    pub fn finish(self) -> Markup {
        Markup { queue: self.queue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeferredChunk;

    #[test]
    fn test_empty_markup_renders_nothing() {
        assert_eq!(Markup::empty().into_text(), "");
    }

    #[test]
    fn test_literal_only_template_is_identity() {
        let markup = Markup::from_parts(["<h1>hello</h1>"], []).unwrap();

        assert_eq!(markup.into_text(), "<h1>hello</h1>");
    }

    #[test]
    fn test_interleaves_literals_and_values() {
        let markup = Markup::from_parts(
            ["<li>", "</li><li>", "</li>"],
            vec![Value::from("a"), Value::from(1)],
        )
        .unwrap();

        assert_eq!(markup.into_text(), "<li>a</li><li>1</li>");
    }

    #[test]
    fn test_primitive_coercion() {
        let markup = Markup::build()
            .val("hello")
            .val(123)
            .val(true)
            .finish();

        assert_eq!(markup.into_text(), "hello123true");
    }

    #[test]
    fn test_template_shape_mismatch_is_an_error() {
        let result = Markup::from_parts(["a", "b"], vec![]);

        assert!(matches!(
            result,
            Err(MarkupError::TemplateShape {
                literals: 2,
                values: 0
            })
        ));
    }

    #[test]
    fn test_nested_markup_flattens_inline() {
        let inner = Markup::raw("hello");
        let markup = Markup::from_parts(["<p>", "</p>"], vec![inner.into()]).unwrap();

        assert_eq!(markup.into_text(), "<p>hello</p>");
    }

    #[test]
    fn test_nesting_is_associative() {
        let deep = Markup::from_parts(["a", "b"], vec![Value::from("x")]).unwrap();
        let mid = Markup::from_parts(["(", ")"], vec![deep.into()]).unwrap();
        let outer = Markup::from_parts(["[", "]"], vec![mid.into()]).unwrap();

        // Same output as concatenating every span in document order.
        assert_eq!(outer.into_text(), "[(axb)]");
    }

    #[test]
    fn test_list_flattens_in_order() {
        let items: Vec<Value> = ["a", "b", "c"]
            .iter()
            .map(|item| {
                Markup::from_parts(["<li>", "</li>"], vec![Value::from(*item)])
                    .unwrap()
                    .into()
            })
            .collect();
        let markup = Markup::from_parts(["<ul>", "</ul>"], vec![items.into()]).unwrap();

        assert_eq!(
            markup.into_text(),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_list_equals_individual_concatenation() {
        let render = |item: &str| {
            Markup::from_parts(["<li>", "</li>"], vec![Value::from(item)])
                .unwrap()
                .into_text()
        };
        let expected: String = ["a", "b", "c"].iter().map(|item| render(item)).collect();

        let items: Vec<Value> = ["a", "b", "c"]
            .iter()
            .map(|item| {
                Markup::from_parts(["<li>", "</li>"], vec![Value::from(*item)])
                    .unwrap()
                    .into()
            })
            .collect();
        let flat = Markup::build().val(items).finish();

        assert_eq!(flat.into_text(), expected);
    }

    #[test]
    fn test_deferred_chunk_is_a_terminal_leaf() {
        let deferred = DeferredChunk::new(async { Ok(Markup::raw("late")) })
            .with_placeholder("soon");
        let mut markup = Markup::build().lit("now ").val(deferred).finish();

        assert!(matches!(markup.next(), Some(Chunk::Text(text)) if text == "now "));
        assert!(matches!(markup.next(), Some(Chunk::Deferred(_))));
        assert!(markup.next().is_none());
    }

    #[test]
    fn test_into_text_substitutes_deferred_placeholder() {
        let deferred = DeferredChunk::new(async { Ok(Markup::raw("late")) })
            .with_placeholder("<p>soon</p>");
        let markup = Markup::build().lit("<div>").val(deferred).lit("</div>").finish();

        assert_eq!(markup.into_text(), "<div><p>soon</p></div>");
    }

    #[test]
    fn test_deferred_survives_nested_markup_expansion() {
        let deferred = DeferredChunk::new(async { Ok(Markup::empty()) });
        let inner = Markup::build().val(deferred).finish();
        let mut outer = Markup::build().val(inner).finish();

        assert!(matches!(outer.next(), Some(Chunk::Deferred(_))));
    }
}
