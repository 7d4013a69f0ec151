use derive_more::Display;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;

use crate::cost::Cost;

/// A floating-point `Cost`.
///
/// `OrderedFloat` gives floats the total order search ranks rely on. The
/// upper bound is infinity, so it doubles as the "unreachable" cost.
#[derive(Copy, Clone, Default, Debug, Display)]
#[repr(transparent)]
#[display("${_0}")]
pub struct FloatCost<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Cost for FloatCost<F> where F: FloatCore + std::fmt::Debug + std::fmt::Display {}

impl<F> FloatCost<F>
where
    F: FloatCore,
{
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }

    #[inline(always)]
    pub fn infinity() -> Self {
        Self(OrderedFloat(F::infinity()))
    }
}

impl<F: FloatCore> std::ops::Add for FloatCost<F> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

// Comparisons are forwarded to `OrderedFloat`. Deriving them would demand
// `F: Eq + Ord`, which floats don't have.
impl<F: FloatCore> PartialEq for FloatCost<F> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<F: FloatCore> Eq for FloatCost<F> {}
impl<F: FloatCore> PartialOrd for FloatCost<F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<F: FloatCore> Ord for FloatCost<F> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// Float addition already saturates at infinity.
impl<F: FloatCore> SaturatingAdd for FloatCost<F> {
    #[inline(always)]
    fn saturating_add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }
}

impl<F: FloatCore> Zero for FloatCost<F> {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0 == OrderedFloat(F::zero())
    }
    #[inline(always)]
    fn zero() -> Self {
        Self::new(F::zero())
    }
}
impl<F: FloatCore> UpperBounded for FloatCost<F> {
    fn max_value() -> Self {
        Self::infinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert!(FloatCost::new(0.0f32).is_zero());
        assert!(FloatCost::<f32>::zero().is_zero());
        assert!(!FloatCost::new(0.5f32).is_zero());
    }

    #[test]
    fn order() {
        assert!(FloatCost::new(0.0f32) <= FloatCost::new(0.0f32));
        assert!(FloatCost::new(0.0f32) == FloatCost::new(0.0f32));
        assert!(FloatCost::new(0.1f32) < FloatCost::infinity());
    }

    #[test]
    fn fractional_steps_accumulate() {
        let g = FloatCost::new(0.5f64).saturating_add(&FloatCost::new(0.25f64));
        assert!(g < FloatCost::new(1.0f64));
        assert!(g.valid());
        assert_eq!(format!("{g}"), "$0.75");
    }

    #[test]
    fn infinity_is_not_a_valid_cost() {
        let f = FloatCost::new(1.0f64).saturating_add(&FloatCost::infinity());
        assert!(f == FloatCost::max_value());
        assert!(!f.valid());
    }

    #[test]
    fn searches_accept_float_costs() {
        use crate::algorithms::astar::a_star_search;
        use crate::algorithms::ucs::uniform_cost_search;
        use crate::problem::SearchProblem;
        use crate::problems::graph::GraphProblem;

        type Graph = GraphProblem<char, &'static str, FloatCost<f64>>;
        let problem: Graph = GraphProblem::new('a')
            .with_edge('a', "ab", 'b', FloatCost::new(0.5))
            .with_edge('b', "bc", 'c', FloatCost::new(0.25))
            .with_edge('a', "ac", 'c', FloatCost::new(1.0))
            .with_goal('c');
        let h = |s: &char, _p: &Graph| -> FloatCost<f64> {
            if *s == 'c' {
                FloatCost::zero()
            } else {
                FloatCost::new(0.25)
            }
        };

        assert_eq!(uniform_cost_search(&problem), vec!["ab", "bc"]);
        let actions = a_star_search(&problem, &h);
        assert_eq!(actions, vec!["ab", "bc"]);
        assert_eq!(problem.cost_of_actions(&actions), Ok(FloatCost::new(0.75)));
    }
}
