//! Template slot values.

use crate::{DeferredChunk, Markup};

/// Anything a template slot accepts.
///
/// Primitives are coerced to their textual representation. Nested markup
/// and lists are flattened in order when the owning sequence is iterated;
/// deferred chunks pass through unexpanded.
#[derive(Debug)]
pub enum Value {
    /// Literal text, emitted as-is (no escaping).
    Text(String),
    /// A nested markup sequence, flattened inline.
    Markup(Markup),
    /// An ordered list, each element expanded in list order.
    List(Vec<Value>),
    /// Pending asynchronous content; a terminal leaf of expansion.
    Deferred(DeferredChunk),
}

/// One atomic unit produced by iterating a markup sequence.
#[derive(Debug)]
pub enum Chunk {
    /// Output text.
    Text(String),
    /// An unresolved deferred leaf.
    Deferred(DeferredChunk),
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Markup> for Value {
    fn from(markup: Markup) -> Self {
        Value::Markup(markup)
    }
}

impl From<DeferredChunk> for Value {
    fn from(chunk: DeferredChunk) -> Self {
        Value::Deferred(chunk)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);
