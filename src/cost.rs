/// The accumulated cost of a path.
///
/// Costs are added along paths and compared to rank frontier nodes, so they
/// need a total order and a `zero()` for the empty path.
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
{
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }
}

macro_rules! unsigned_cost {
    ($($t:ty),*) => {
        $(impl Cost for $t {})*
    };
}

unsigned_cost!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_costs_saturate_into_invalid() {
        assert!(0u32.valid());
        assert!(!u32::MAX.valid());
        assert!(!u8::MAX.saturating_add(1u8).valid());
    }
}
