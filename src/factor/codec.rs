//! The addressing scheme of a `Factor`'s value table.
//!
//! A factor over variables `[X0, X1, ..., Xn]` with cardinalities `[c0, c1, ..., cn]` stores its
//! values in a flat array using a mixed radix encoding in which the *first* variable is the least
//! significant digit. The stride of `Xi` is `c0 * c1 * ... * c(i-1)`, so `X0` cycles fastest:
//!
//! ```text
//! k = s0 + c0 * (s1 + c1 * (s2 + ...))
//! ```
//!
//! Every other operation in the crate reads and writes tables through this module.

use super::Factor;
use crate::variable::VariableId;


/// The number of entries in a table with the given cardinalities. The empty product is 1.
///
/// # Preconditions
/// the product fits in a `usize`, which holds for the scope of any constructed `Factor`
pub fn table_size(cardinals: &[usize]) -> usize {
    cardinals.iter().product()
}


/// The number of entries in a table with the given cardinalities, or `None` if it overflows
pub fn checked_table_size(cardinals: &[usize]) -> Option<usize> {
    cardinals.iter().try_fold(1usize, |acc, &c| acc.checked_mul(c))
}


/// The stride of each digit of the encoding: `strides[i] = cardinals[0] * ... * cardinals[i-1]`
pub fn strides(cardinals: &[usize]) -> Vec<usize> {
    let mut acc = 1;
    cardinals.iter()
             .map(|&c| {
                 let stride = acc;
                 acc *= c;
                 stride
             })
             .collect()
}


/// Encode a complete tuple of states as a flat index.
///
/// Returns `None` if `states` does not have one entry per cardinality, or if any state is out of
/// range for its variable.
pub fn encode(cardinals: &[usize], states: &[usize]) -> Option<usize> {
    if states.len() != cardinals.len() {
        return None;
    }

    let mut index = 0;
    let mut stride = 1;
    for (&s, &c) in states.iter().zip(cardinals) {
        if s >= c {
            return None;
        }
        index += s * stride;
        stride *= c;
    }

    Some(index)
}


/// Decode a flat index into the tuple of states it addresses.
///
/// # Preconditions
/// `index < table_size(cardinals)`
pub fn decode(cardinals: &[usize], index: usize) -> Vec<usize> {
    debug_assert!(index < table_size(cardinals));

    let mut rest = index;
    cardinals.iter()
             .map(|&c| {
                 let s = rest % c;
                 rest /= c;
                 s
             })
             .collect()
}


/// Project the encoding of `variables` onto the encoding of `factor`.
///
/// The result holds, for each entry of `variables`, the stride of that variable within `factor`,
/// or 0 when `factor` does not contain it. Walking a table over `variables` while accumulating
/// these strides visits the matching entry of `factor` at every step.
pub fn strides_within(factor: &Factor, variables: &[VariableId]) -> Vec<usize> {
    let own = strides(factor.cardinals());
    variables.iter()
             .map(|&v| var_index(factor, v).map_or(0, |p| own[p]))
             .collect()
}


/// Group the flat indices of `factor` by the state of the variable at `position`.
///
/// The result has `cardinals[position]` groups. Group `g` lists, in increasing order, every flat
/// index at which the variable at `position` is in state `g`. Each group has
/// `table_size / cardinals[position]` entries, and the `i`-th entry of every group addresses the
/// same assignment of the remaining variables.
///
/// With `stride` the stride of the variable, state `g` owns the run
/// `[g * stride, (g + 1) * stride)` of every block of `cardinality * stride` indices.
///
/// # Panics
/// if `position` is not a valid position in `factor`'s scope
pub fn state_indices(factor: &Factor, position: usize) -> Vec<Vec<usize>> {
    let cardinals = factor.cardinals();
    assert!(
        position < cardinals.len(),
        "position {} is out of range for a factor over {} variables", position, cardinals.len()
    );

    let cardinality = cardinals[position];
    let stride = table_size(&cardinals[..position]);
    let total = table_size(cardinals);
    let block = cardinality * stride;

    let mut groups: Vec<Vec<usize>> = (0..cardinality)
        .map(|_| Vec::with_capacity(total / cardinality))
        .collect();

    for start in (0..total).step_by(block) {
        for (g, group) in groups.iter_mut().enumerate() {
            let run = start + g * stride;
            group.extend(run..run + stride);
        }
    }

    groups
}


/// Find the position of `variable` in the scope of `factor`.
///
/// Returns `None` if the variable is not in the scope.
pub fn var_index(factor: &Factor, variable: VariableId) -> Option<usize> {
    factor.variables().iter().position(|&v| v == variable)
}
