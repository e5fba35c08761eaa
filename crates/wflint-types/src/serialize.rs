//! `serde` output for types, tagged by `kind`.
//!
//! ```text
//! {"kind": "number"}
//! {"kind": "array", "elem": {...}, "deref": false}
//! {"kind": "object", "props": {"a": {...}}, "strict": true}
//! {"kind": "object", "mapped": {...}}
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::array::ArrayType;
use crate::expr_type::ExprType;
use crate::object::ObjectType;

impl Serialize for ExprType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExprType::Object(obj) => obj.serialize(serializer),
            ExprType::Array(arr) => arr.serialize(serializer),
            scalar => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("kind", scalar.kind_name())?;
                map.end()
            }
        }
    }
}

impl Serialize for ObjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(value) = self.mapped_type() {
            let mut map = serializer.serialize_map(Some(2))?;
            map.serialize_entry("kind", "object")?;
            map.serialize_entry("mapped", value)?;
            return map.end();
        }

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("kind", "object")?;
        map.serialize_entry("props", &Props(self))?;
        map.serialize_entry("strict", &self.is_strict())?;
        map.end()
    }
}

impl Serialize for ArrayType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("kind", "array")?;
        map.serialize_entry("elem", self.elem())?;
        map.serialize_entry("deref", &self.is_deref())?;
        map.end()
    }
}

struct Props<'a>(&'a ObjectType);

impl Serialize for Props<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.props().into_iter().flatten())
    }
}
