// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discrete elements that populate finite sets.
//!
//! Exercises describe their points as numbers, labels, or small tuples
//! (e.g. `[0, 1]` for a grid cell). [`Element`] covers all of these with
//! value equality, so `Element::Int(1)` from two different submissions
//! compare equal. The JSON form is untagged: `1`, `0.5`, `"a"`, `true` and
//! `[0, 1]` are all valid elements.
//!
//! Numbers follow JSON semantics: `1` and `1.0` are the same element. Any
//! integral value in `i64` range becomes [`Element::Int`]; everything else
//! is an [`Element::Number`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-integral (or out-of-`i64`-range) number usable as a set element.
///
/// Equality and hashing use the bit pattern, with `-0.0` folded into `0.0`
/// and every NaN folded into one canonical NaN. Ordering is
/// [`f64::total_cmp`], which agrees with that equality.
#[derive(Debug, Clone, Copy)]
pub struct Real(f64);

impl Real {
    fn canonical(v: f64) -> Self {
        if v.is_nan() {
            Real(f64::NAN)
        } else if v == 0.0 {
            Real(0.0)
        } else {
            Real(v)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Serialize for Real {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// An opaque, comparable member of a finite set.
///
/// Numbers order numerically across [`Element::Int`] and
/// [`Element::Number`]. Otherwise elements order by kind first: booleans,
/// numbers, text, tuples.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Element {
    Bool(bool),
    Int(i64),
    Number(Real),
    Text(String),
    Tuple(Vec<Element>),
}

impl Element {
    /// Returns the kind name as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Bool(_) => "bool",
            Element::Int(_) => "int",
            Element::Number(_) => "number",
            Element::Text(_) => "text",
            Element::Tuple(_) => "tuple",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Element::Bool(_) => 0,
            Element::Int(_) | Element::Number(_) => 1,
            Element::Text(_) => 2,
            Element::Tuple(_) => 3,
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Bool(a), Element::Bool(b)) => a.cmp(b),
            (Element::Int(a), Element::Int(b)) => a.cmp(b),
            (Element::Number(a), Element::Number(b)) => a.cmp(b),
            // Int and Number are never equal; ties from rounding go to Int.
            (Element::Int(a), Element::Number(b)) => {
                (*a as f64).total_cmp(&b.get()).then(Ordering::Less)
            }
            (Element::Number(a), Element::Int(b)) => {
                a.get().total_cmp(&(*b as f64)).then(Ordering::Greater)
            }
            (Element::Text(a), Element::Text(b)) => a.cmp(b),
            (Element::Tuple(a), Element::Tuple(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Bool(b) => write!(f, "{b}"),
            Element::Int(i) => write!(f, "{i}"),
            Element::Number(n) => write!(f, "{}", n.get()),
            Element::Text(s) => f.write_str(s),
            Element::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ElementVisitor)
    }
}

struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a bool, number, string or array of elements")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Element, E> {
        Ok(Element::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Element, E> {
        Ok(Element::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Element, E> {
        Ok(i64::try_from(v)
            .map(Element::Int)
            .unwrap_or_else(|_| Element::from(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Element, E> {
        Ok(Element::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Element, E> {
        Ok(Element::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Element, E> {
        Ok(Element::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Element, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Element::Tuple(items))
    }
}

/// Bounds of the `i64` range as `f64`: `[-2^63, 2^63)`.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        if v.fract() == 0.0 && (I64_MIN_F64..I64_END_F64).contains(&v) {
            Element::Int(v as i64)
        } else {
            Element::Number(Real::canonical(v))
        }
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Element::Int(v)
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Element::Int(i64::from(v))
    }
}

impl From<bool> for Element {
    fn from(v: bool) -> Self {
        Element::Bool(v)
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Element::Text(v.to_string())
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Element::Text(v)
    }
}

impl From<char> for Element {
    fn from(v: char) -> Self {
        Element::Text(v.to_string())
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(v: Vec<T>) -> Self {
        Element::Tuple(v.into_iter().map(Into::into).collect())
    }
}
