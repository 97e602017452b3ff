//! Element policies: how a graph compares, swaps, releases and prints the
//! identities it stores.
//!
//! The policy is a type parameter of the graph, so every call is resolved
//! statically. A policy is a value rather than a bare trait bound on `T` so
//! the same element type can be stored under different notions of equality
//! (for example case-insensitive strings).

use core::cmp::Ordering;
use core::fmt;

use num_traits::Float;

/// Capability set a graph needs from its element type.
pub trait ElementPolicy<T> {
    /// Total order over identities. `Ordering::Equal` means "same vertex".
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Exchanges two identities during table compaction.
    #[inline]
    fn swap(&self, a: &mut T, b: &mut T) {
        core::mem::swap(a, b);
    }

    /// Releases an identity owned by the graph.
    #[inline]
    fn release(&self, value: T) {
        drop(value);
    }

    /// Renders an identity.
    fn print(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns `true` if `a` and `b` name the same vertex.
    #[inline(always)]
    fn matches(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Uses the element's own `Ord` and `Display`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalPolicy;

impl<T: Ord + fmt::Display> ElementPolicy<T> for NaturalPolicy {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn print(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Policy for floating point identities.
///
/// Orders with `partial_cmp` and places NaN above every number, with all NaNs
/// equal to each other, so a NaN vertex can still be found again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatPolicy;

impl<F: Float + fmt::Display> ElementPolicy<F> for FloatPolicy {
    fn compare(&self, a: &F, b: &F) -> Ordering {
        a.partial_cmp(b)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    }

    fn print(&self, value: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Policy assembled from a comparison and a printing closure.
#[derive(Clone, Copy)]
pub struct FnPolicy<C, W> {
    compare: C,
    print: W,
}

impl<C, W> FnPolicy<C, W> {
    /// Builds a policy from `compare` and `print`.
    pub fn new(compare: C, print: W) -> Self {
        Self { compare, print }
    }
}

impl<C, W> fmt::Debug for FnPolicy<C, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy").finish_non_exhaustive()
    }
}

impl<T, C, W> ElementPolicy<T> for FnPolicy<C, W>
where
    C: Fn(&T, &T) -> Ordering,
    W: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    fn print(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.print)(value, f)
    }
}

/// Adapter that renders a value through a policy with `{}`.
pub struct Printed<'a, T, P> {
    policy: &'a P,
    value: &'a T,
}

impl<'a, T, P> Printed<'a, T, P> {
    /// Pairs `value` with the policy used to print it.
    pub fn new(policy: &'a P, value: &'a T) -> Self {
        Self { policy, value }
    }
}

impl<T, P: ElementPolicy<T>> fmt::Display for Printed<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.policy.print(self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_policy() {
        assert!(ElementPolicy::<i32>::matches(&NaturalPolicy, &4, &4));
        assert_eq!(NaturalPolicy.compare(&"a", &"b"), Ordering::Less);
        assert_eq!(Printed::new(&NaturalPolicy, &42).to_string(), "42");
    }

    #[test]
    fn test_float_policy_nan_is_findable() {
        let p = FloatPolicy;
        assert!(p.matches(&f64::NAN, &f64::NAN));
        assert_eq!(p.compare(&1.0_f32, &f32::NAN), Ordering::Less);
        assert_eq!(p.compare(&2.5_f64, &1.5), Ordering::Greater);
    }

    #[test]
    fn test_fn_policy_case_insensitive() {
        let p = FnPolicy::new(
            |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
            |v: &String, f: &mut fmt::Formatter<'_>| write!(f, "<{v}>"),
        );
        assert!(p.matches(&"See".to_string(), &"sEE".to_string()));
        assert_eq!(Printed::new(&p, &"x".to_string()).to_string(), "<x>");
    }

    #[test]
    fn test_default_swap_exchanges() {
        let (mut a, mut b) = (1, 2);
        ElementPolicy::<i32>::swap(&NaturalPolicy, &mut a, &mut b);
        assert_eq!((a, b), (2, 1));
    }
}
