//! `serde` support: a cell serializes as its current value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{AtomicCell, PlainCell};
use crate::kind::Kind;

impl<T: Kind + Serialize> Serialize for AtomicCell<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T: Kind + Deserialize<'de>> Deserialize<'de> for AtomicCell<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T: Kind + Serialize> Serialize for PlainCell<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T: Kind + Deserialize<'de>> Deserialize<'de> for PlainCell<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
