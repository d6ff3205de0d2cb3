//! Macros for use within the library. They are not publicly available.

/// Constructs a ranged integer, returning a `ComponentRange` error if the value is out of range.
macro_rules! ensure_ranged {
    ($type:ty : $value:ident) => {
        match <$type>::new($value) {
            Some(val) => val,
            None => return Err(crate::error::ComponentRange::unconditional(stringify!($value))),
        }
    };

    ($type:ty : $value:ident ($name:literal)) => {
        match <$type>::new($value) {
            Some(val) => val,
            None => return Err(crate::error::ComponentRange::unconditional($name)),
        }
    };
}

/// `unreachable!()`, but better.
macro_rules! bug {
    () => {
        compile_error!("provide an error message to help fix a possible bug")
    };
    ($descr:literal) => {
        panic!(concat!("internal error: ", $descr))
    };
}

pub(crate) use {bug, ensure_ranged};
