// Author: Dustin Pilgrim
// License: MIT

use crate::{HfcError, Value};

fn type_error(expected: &str, value: &Value, code: u32) -> HfcError {
    HfcError::TypeError {
        message: format!("Expected {}, got {} {:?}", expected, value.type_name(), value),
        line: 0,
        hint: Some(format!("Use a {} value in your config", expected)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(type_error("integer", &value, 402)),
        }
    }
}

/// Narrower integers go through `i64` and are range-checked.
macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = HfcError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| HfcError::TypeError {
                        message: format!("Integer {} out of range for {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(403),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, u8, u16, u32, u64, usize);

/// Integers widen to floats; floats never narrow to integers.
impl TryFrom<Value> for f64 {
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Integer(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, 404)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for bool {
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(type_error("boolean", &value, 405)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = HfcError>,
{
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            _ => Err(type_error("list", &value, 406)),
        }
    }
}

/// `name =` reads as `None`.
impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = HfcError>,
{
    type Error = HfcError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            other => T::try_from(other).map(Some),
        }
    }
}
