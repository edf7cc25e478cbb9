//! Display and Debug implementations for ValueHolder

use std::fmt;

use super::ValueHolder;

const ABSENT: &str = "<absent>";

impl fmt::Debug for ValueHolder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "ValueHolder({:?})", v),
            None => write!(f, "ValueHolder({})", ABSENT),
        }
    }
}

impl fmt::Display for ValueHolder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "{}", ABSENT),
        }
    }
}
