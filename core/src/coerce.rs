//! Leaving a pipeline as a different type.

use std::mem::{self, ManuallyDrop};

use prefix_types::{CombinatorError, Result, Value};

/// Checked exit from a dynamic pipeline into a concrete type.
///
/// ```
/// use prefix_core::coerce;
/// use prefix_types::Value;
///
/// assert_eq!(coerce::<f64>()(Value::from(92)), Ok(92.0));
/// assert!(coerce::<String>()(Value::from(92)).is_err());
/// ```
pub fn coerce<U>() -> impl Fn(Value) -> Result<U>
where
    U: TryFrom<Value, Error = CombinatorError>,
{
    U::try_from
}

/// Reinterpret a `T` as a `U` without looking at it.
///
/// Sizes are checked at compile time; nothing else is.
///
/// # Safety
///
/// Every bit pattern `T` can hold must be a valid `U`, and `U` must not
/// require stricter alignment than `T`. Ownership of anything `T` points to
/// passes to the returned `U`; `T`'s destructor does not run.
pub unsafe fn unsafe_coerce<T, U>() -> impl Fn(T) -> U {
    const {
        assert!(
            mem::size_of::<T>() == mem::size_of::<U>(),
            "unsafe_coerce requires equally sized types"
        );
    }
    |value| {
        let value = ManuallyDrop::new(value);
        // SAFETY: sizes match (checked above); validity is the caller's
        // obligation per this function's contract.
        unsafe { mem::transmute_copy::<ManuallyDrop<T>, U>(&value) }
    }
}
