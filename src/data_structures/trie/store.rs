// Copyright (c) 2025 Trieful Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Value storage strategies.
//!
//! Every trie node may own a value slot. The strategy decides how a slot is
//! created, how further values are folded into it, how values are taken back
//! out, and what a lookup exposes. A strategy leaving the slot at `None` after
//! [`StoreStrategy::remove`] signals that the path no longer holds a value.

use std::fmt;
use std::mem;

use num_traits::ops::saturating::{SaturatingAdd, SaturatingSub};
use num_traits::Num;
use serde::{Deserialize, Serialize};

/// The value slot held by a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<V> {
    /// Every value added at the path, in insertion order.
    List(Vec<V>),

    /// A single aggregate value.
    Value(V),
}

impl<V> Slot<V> {
    /// The raw values held by the slot.
    pub fn values(&self) -> &[V] {
        match self {
            Slot::List(values) => values,
            Slot::Value(value) => std::slice::from_ref(value),
        }
    }
}

/// The value a lookup exposes for a stored path.
#[derive(Debug, PartialEq)]
pub enum Stored<'a, V> {
    /// Exactly one value.
    One(&'a V),

    /// Several values, in insertion order.
    Many(&'a [V]),
}

impl<'a, V> Stored<'a, V> {
    /// Returns the value if exactly one is exposed.
    pub fn one(&self) -> Option<&'a V> {
        match *self {
            Stored::One(value) => Some(value),
            Stored::Many(_) => None,
        }
    }

    /// All exposed values as a slice.
    pub fn as_slice(&self) -> &'a [V] {
        match *self {
            Stored::One(value) => std::slice::from_ref(value),
            Stored::Many(values) => values,
        }
    }
}

impl<V> Clone for Stored<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Stored<'_, V> {}

impl<V: fmt::Display> fmt::Display for Stored<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stored::One(value) => write!(f, "{value}"),
            Stored::Many(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Serializable tag naming a built-in strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Keep every value in a list.
    #[default]
    Append,
    /// Keep only the latest value.
    Overwrite,
    /// Keep a running numeric total.
    Sum,
    /// Count how many times the path was added.
    Count,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreKind::Append => "append",
            StoreKind::Overwrite => "overwrite",
            StoreKind::Sum => "sum",
            StoreKind::Count => "count",
        };
        f.write_str(name)
    }
}

/// How a node's value slot is maintained.
///
/// The numeric variants carry their arithmetic so the trie itself places no
/// numeric bounds on `V`; they are only constructible for integer-like `V`.
/// Their arithmetic saturates at the bounds of `V` instead of overflowing.
///
/// Every operation computes the new slot contents before writing them, so a
/// slot is never left half-updated.
pub enum StoreStrategy<V> {
    /// Append to a list; remove the first matching value; expose a single
    /// value unwrapped.
    Append,

    /// Replace the slot on add; empty it on any remove.
    Overwrite,

    /// Add values into a running total and subtract them on remove. A total
    /// never empties the slot, even when it reaches zero.
    Sum {
        /// `slot + value`
        plus: fn(&V, &V) -> V,
        /// `slot - value`
        minus: fn(&V, &V) -> V,
    },

    /// Ignore the value and count adds; the slot empties when the count
    /// drops to zero.
    Count {
        /// absent → 1, n → n + 1
        increment: fn(Option<&V>) -> V,
        /// n → n - 1, or `None` at zero
        decrement: fn(&V) -> Option<V>,
    },
}

impl<V> StoreStrategy<V> {
    /// The default list-appending strategy.
    pub fn append() -> Self {
        StoreStrategy::Append
    }

    /// The overwriting strategy.
    pub fn overwrite() -> Self {
        StoreStrategy::Overwrite
    }

    /// The numeric running-total strategy.
    pub fn sum() -> Self
    where
        V: Num + SaturatingAdd + SaturatingSub,
    {
        StoreStrategy::Sum {
            plus: plus::<V>,
            minus: minus::<V>,
        }
    }

    /// The counting strategy.
    pub fn count() -> Self
    where
        V: Num + SaturatingAdd + SaturatingSub,
    {
        StoreStrategy::Count {
            increment: increment::<V>,
            decrement: decrement::<V>,
        }
    }

    /// Builds the strategy named by `kind`.
    pub fn from_kind(kind: StoreKind) -> Self
    where
        V: Num + SaturatingAdd + SaturatingSub,
    {
        match kind {
            StoreKind::Append => Self::append(),
            StoreKind::Overwrite => Self::overwrite(),
            StoreKind::Sum => Self::sum(),
            StoreKind::Count => Self::count(),
        }
    }

    /// The tag naming this strategy.
    pub fn kind(&self) -> StoreKind {
        match self {
            StoreStrategy::Append => StoreKind::Append,
            StoreStrategy::Overwrite => StoreKind::Overwrite,
            StoreStrategy::Sum { .. } => StoreKind::Sum,
            StoreStrategy::Count { .. } => StoreKind::Count,
        }
    }

    /// Folds `value` into `slot`, creating the slot when absent.
    pub fn add(&self, slot: &mut Option<Slot<V>>, value: V)
    where
        V: Clone,
    {
        let next = match self {
            StoreStrategy::Append => match slot {
                Some(Slot::List(values)) => {
                    values.push(value);
                    return;
                }
                Some(Slot::Value(prev)) => Slot::List(vec![prev.clone(), value]),
                None => Slot::List(vec![value]),
            },
            StoreStrategy::Overwrite => Slot::Value(value),
            StoreStrategy::Sum { plus, .. } => match slot.as_ref().and_then(single) {
                Some(total) => Slot::Value(plus(total, &value)),
                None => Slot::Value(value),
            },
            StoreStrategy::Count { increment, .. } => {
                Slot::Value(increment(slot.as_ref().and_then(single)))
            }
        };
        *slot = Some(next);
    }

    /// Takes `value` back out of `slot`. A slot left at `None` means the path
    /// no longer holds a value.
    ///
    /// Removing a value the slot never held leaves an append slot untouched.
    /// Removing from an absent slot does nothing.
    pub fn remove(&self, slot: &mut Option<Slot<V>>, value: &V)
    where
        V: PartialEq,
    {
        let Some(current) = slot.as_mut() else {
            return;
        };

        let next = match self {
            StoreStrategy::Append => match current {
                Slot::List(values) => {
                    if let Some(pos) = values.iter().position(|v| v == value) {
                        values.remove(pos);
                    }
                    if !values.is_empty() {
                        return;
                    }
                    None
                }
                Slot::Value(stored) if stored != value => return,
                Slot::Value(_) => None,
            },
            StoreStrategy::Overwrite => None,
            StoreStrategy::Sum { minus, .. } => match single(current) {
                Some(total) => Some(Slot::Value(minus(total, value))),
                None => return,
            },
            StoreStrategy::Count { decrement, .. } => {
                single(current).and_then(decrement).map(Slot::Value)
            }
        };
        *slot = next;
    }

    /// What a lookup of `slot` exposes.
    pub fn get<'a>(&self, slot: &'a Slot<V>) -> Stored<'a, V> {
        match slot.values() {
            [single] => Stored::One(single),
            values => Stored::Many(values),
        }
    }
}

fn single<V>(slot: &Slot<V>) -> Option<&V> {
    slot.values().last()
}

fn plus<V: SaturatingAdd>(total: &V, value: &V) -> V {
    total.saturating_add(value)
}

fn minus<V: SaturatingSub>(total: &V, value: &V) -> V {
    total.saturating_sub(value)
}

fn increment<V: Num + SaturatingAdd>(count: Option<&V>) -> V {
    match count {
        Some(n) => n.saturating_add(&V::one()),
        None => V::one(),
    }
}

fn decrement<V: Num + SaturatingSub>(count: &V) -> Option<V> {
    let count = count.saturating_sub(&V::one());
    if count.is_zero() {
        None
    } else {
        Some(count)
    }
}

impl<V> Clone for StoreStrategy<V> {
    fn clone(&self) -> Self {
        match self {
            StoreStrategy::Append => StoreStrategy::Append,
            StoreStrategy::Overwrite => StoreStrategy::Overwrite,
            StoreStrategy::Sum { plus, minus } => StoreStrategy::Sum {
                plus: *plus,
                minus: *minus,
            },
            StoreStrategy::Count {
                increment,
                decrement,
            } => StoreStrategy::Count {
                increment: *increment,
                decrement: *decrement,
            },
        }
    }
}

impl<V> Default for StoreStrategy<V> {
    fn default() -> Self {
        StoreStrategy::Append
    }
}

/// Strategies compare by variant; the carried arithmetic is not compared.
impl<V> PartialEq for StoreStrategy<V> {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl<V> Eq for StoreStrategy<V> {}

impl<V> fmt::Debug for StoreStrategy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreStrategy").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_strategy() {
        let store = StoreStrategy::<i32>::append();
        let mut slot = None;

        store.add(&mut slot, 1);
        assert_eq!(slot.as_ref().map(|s| store.get(s)), Some(Stored::One(&1)));

        store.add(&mut slot, 2);
        assert_eq!(slot.as_ref().map(|s| store.get(s)), Some(Stored::Many(&[1, 2])));

        // Missing values leave the slot alone.
        store.remove(&mut slot, &7);
        assert_eq!(slot, Some(Slot::List(vec![1, 2])));

        store.remove(&mut slot, &1);
        assert_eq!(slot.as_ref().map(|s| store.get(s)), Some(Stored::One(&2)));
        store.remove(&mut slot, &2);
        assert!(slot.is_none());

        // Removing from an absent slot does nothing.
        store.remove(&mut slot, &2);
        assert!(slot.is_none());
    }

    #[test]
    fn test_append_removes_first_match_only() {
        let store = StoreStrategy::<&str>::append();
        let mut slot = None;
        for value in ["a", "b", "a"] {
            store.add(&mut slot, value);
        }

        store.remove(&mut slot, &"a");
        assert_eq!(slot, Some(Slot::List(vec!["b", "a"])));
    }

    #[test]
    fn test_append_onto_single_value() {
        let store = StoreStrategy::<u8>::append();
        let mut slot = Some(Slot::Value(1));

        store.remove(&mut slot, &2);
        assert_eq!(slot, Some(Slot::Value(1)));

        store.add(&mut slot, 2);
        assert_eq!(slot, Some(Slot::List(vec![1, 2])));
    }

    #[test]
    fn test_overwrite_strategy() {
        let store = StoreStrategy::<String>::overwrite();
        let mut slot = None;
        store.add(&mut slot, "first".to_string());
        store.add(&mut slot, "second".to_string());
        assert_eq!(slot, Some(Slot::Value("second".to_string())));

        // Removal is unconditional.
        store.remove(&mut slot, &"unrelated".to_string());
        assert!(slot.is_none());
    }

    #[test]
    fn test_sum_strategy() {
        let store = StoreStrategy::<i64>::sum();
        let mut slot = None;
        store.add(&mut slot, 5);
        store.add(&mut slot, 7);
        assert_eq!(slot, Some(Slot::Value(12)));

        store.remove(&mut slot, &12);
        assert_eq!(slot, Some(Slot::Value(0)));

        store.remove(&mut slot, &3);
        assert_eq!(slot, Some(Slot::Value(-3)));
    }

    #[test]
    fn test_sum_saturates_at_bounds() {
        let store = StoreStrategy::<u32>::sum();
        let mut slot = None;
        store.add(&mut slot, 1);

        store.remove(&mut slot, &5);
        assert_eq!(slot, Some(Slot::Value(0)));

        store.add(&mut slot, u32::MAX);
        store.add(&mut slot, 10);
        assert_eq!(slot, Some(Slot::Value(u32::MAX)));
    }

    #[test]
    fn test_count_strategy() {
        let store = StoreStrategy::<u32>::count();
        let mut slot = None;
        for value in [10, 20, 30] {
            store.add(&mut slot, value);
        }
        assert_eq!(slot, Some(Slot::Value(3)));

        store.remove(&mut slot, &0);
        assert_eq!(slot, Some(Slot::Value(2)));
        store.remove(&mut slot, &0);
        store.remove(&mut slot, &0);
        assert!(slot.is_none());
    }

    #[test]
    fn test_count_saturates_at_max() {
        let store = StoreStrategy::<u8>::count();
        let mut slot = Some(Slot::Value(u8::MAX));

        store.add(&mut slot, 1);
        assert_eq!(slot, Some(Slot::Value(u8::MAX)));

        store.remove(&mut slot, &1);
        assert_eq!(slot, Some(Slot::Value(u8::MAX - 1)));
    }

    #[test]
    fn test_strategy_identity() {
        assert_eq!(StoreStrategy::<u8>::count(), StoreStrategy::<u8>::count());
        assert_ne!(StoreStrategy::<u8>::count(), StoreStrategy::<u8>::sum());
        assert_eq!(StoreStrategy::<u8>::default(), StoreStrategy::<u8>::append());
        assert_eq!(StoreStrategy::<u8>::from_kind(StoreKind::Overwrite).kind(), StoreKind::Overwrite);
        assert_eq!(
            format!("{:?}", StoreStrategy::<u8>::count()),
            "StoreStrategy(Count)"
        );
    }

    #[test]
    fn test_stored_accessors() {
        let many = [1, 2, 3];
        assert_eq!(Stored::One(&4).one(), Some(&4));
        assert_eq!(Stored::Many(&many).one(), None);
        assert_eq!(Stored::Many(&many).as_slice(), &[1, 2, 3]);
        assert_eq!(Stored::Many(&many).to_string(), "[1, 2, 3]");
        assert_eq!(Stored::One(&4).to_string(), "4");
    }
}
