use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::ModelResult;

/// Opt-in deep validation. Deserialization never calls this on its own.
pub trait Validate {
    fn validate(&self) -> ModelResult<()>;
}

macro_rules! impl_validate_noop {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> ModelResult<()> {
                    Ok(())
                }
            }
        )*
    };
}

impl_validate_noop!(
    String, bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Value
);

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> ModelResult<()> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> ModelResult<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for BTreeMap<String, T> {
    fn validate(&self) -> ModelResult<()> {
        self.values().try_for_each(Validate::validate)
    }
}

impl<T: Validate, S> Validate for HashMap<String, T, S> {
    fn validate(&self) -> ModelResult<()> {
        self.values().try_for_each(Validate::validate)
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> ModelResult<()> {
        (**self).validate()
    }
}
