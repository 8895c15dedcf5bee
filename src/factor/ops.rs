//! Factor product and marginalization.
//!
//! Both operations read their inputs and allocate a fresh result; neither mutates an input.

use super::{codec, sets, Factor, Table};
use crate::util::{FactorError, Result};
use crate::variable::VariableId;

use tracing::{debug, trace};


/// Product of two `Factor`s.
///
/// Defined in Koller & Friedman Section 4.2.1
///
/// The scope of the result is the union of the two scopes laid out by
/// [`sets::union_with_cardinalities`]: shared variables first, then those only in `left`, then
/// those only in `right`. Every entry of the result is the product of the entries of `left` and
/// `right` that agree with it on their own variables. When the scopes are disjoint this is the
/// outer product, with `left` cycling fastest.
///
/// The identity `Factor` is the multiplicative identity. A scalar `Factor` (no scope, one value)
/// scales the other operand.
///
/// # Errors
/// * `FactorError::CardinalityMismatch` if a shared variable has a different number of states in
///   each `Factor`
/// * `FactorError::TableOverflow` if the result has more entries than fit in a `usize`
pub fn product(left: &Factor, right: &Factor) -> Result<Factor> {
    if left.is_identity() {
        return Ok(right.clone());
    } else if right.is_identity() {
        return Ok(left.clone());
    } else if left.variables().is_empty() {
        return Ok(scale(right, left.values()[0]));
    } else if right.variables().is_empty() {
        return Ok(scale(left, right.values()[0]));
    }

    let (left_pos, right_pos) = sets::intersection(left.variables(), right.variables());

    for (&i, &j) in left_pos.iter().zip(right_pos.iter()) {
        let (lc, rc) = (left.cardinals()[i], right.cardinals()[j]);
        if lc != rc {
            debug!(variable = left.variables()[i], left = lc, right = rc, "cardinality mismatch in product");
            return Err(FactorError::CardinalityMismatch {
                variable: left.variables()[i],
                left: lc,
                right: rc
            });
        }
    }

    let (variables, cardinals) = sets::union_with_cardinalities(left, right, &left_pos, &right_pos);
    trace!(?variables, ?cardinals, shared = left_pos.len(), "factor product");

    // Walk the result table in order, carrying the matching offset into each input. Each digit of
    // the result advances an input by that variable's stride in the input (0 if absent) and
    // rewinds it when the digit wraps.
    let left_strides = codec::strides_within(left, &variables);
    let right_strides = codec::strides_within(right, &variables);

    let size = codec::checked_table_size(&cardinals)
        .ok_or_else(|| FactorError::TableOverflow { cardinals: cardinals.clone() })?;
    let mut values = Table::zeros(size);
    let mut states = vec![0; cardinals.len()];
    let (mut l, mut r) = (0, 0);

    for k in 0..size {
        values[k] = left.values()[l] * right.values()[r];

        for d in 0..states.len() {
            states[d] += 1;
            l += left_strides[d];
            r += right_strides[d];

            if states[d] < cardinals[d] {
                break;
            }

            l -= left_strides[d] * cardinals[d];
            r -= right_strides[d] * cardinals[d];
            states[d] = 0;
        }
    }

    Ok(Factor::from_parts(variables, cardinals, values))
}


fn scale(factor: &Factor, weight: f64) -> Factor {
    Factor::from_parts(
        factor.variables().to_vec(),
        factor.cardinals().to_vec(),
        factor.values().mapv(|v| v * weight)
    )
}


/// Marginalize a `Factor` over the given variable.
///
/// Defined in Koller & Friedman 9.3.1
///
/// The result has the scope of `factor` with `variable` removed, the order of the remaining
/// variables preserved. Each value is the sum, over every state of `variable`, of the matching
/// entries of `factor`. Marginalizing the last variable of a `Factor` leaves a scalar `Factor`
/// holding the total.
///
/// # Errors
/// * `FactorError::VariableNotFound` if `variable` is not in the scope of `factor`
pub fn marginalize(factor: &Factor, variable: VariableId) -> Result<Factor> {
    let position = match codec::var_index(factor, variable) {
        Some(p) => p,
        None => {
            debug!(variable, scope = ?factor.variables(), "cannot marginalize a variable out of scope");
            return Err(FactorError::VariableNotFound(variable));
        }
    };

    let mut variables = factor.variables().to_vec();
    let mut cardinals = factor.cardinals().to_vec();
    variables.remove(position);
    cardinals.remove(position);

    // the i-th entry of each group differs only in the state of `variable`
    let groups = codec::state_indices(factor, position);
    let values: Table = (0..groups[0].len())
        .map(|i| groups.iter().map(|group| factor.values()[group[i]]).sum::<f64>())
        .collect();

    trace!(variable, remaining = ?variables, "marginalized factor");

    Ok(Factor::from_parts(variables, cardinals, values))
}
