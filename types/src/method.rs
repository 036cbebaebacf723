use std::fmt;
use std::sync::Arc;

use crate::{Result, Value};

type MethodFn = dyn Fn(&Value, &[Value]) -> Result<Value> + Send + Sync;

/// An invocable record member.
///
/// The closure receives the value it was looked up on (the receiver) and the
/// call arguments. Two methods are equal only when they share an allocation.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn invoke(&self, receiver: &Value, args: &[Value]) -> Result<Value> {
        (self.0)(receiver, args)
    }

    #[must_use]
    pub fn ptr_eq(a: &Method, b: &Method) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}
