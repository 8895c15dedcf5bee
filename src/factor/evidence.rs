//! Conditioning `Factor`s on observed evidence, and normalization.

use super::{codec, Factor};
use crate::util::{FactorError, Result};
use crate::variable::VariableId;

use tracing::{trace, warn};


/// Condition a list of `Factor`s on observed `(variable, state)` pairs.
///
/// For each assertion, every `Factor` whose scope contains the variable has each entry in which
/// the variable is *not* in the observed state set to zero. Entries consistent with the
/// observation keep their value; nothing is renormalized. Factors without the variable are left
/// alone, and an assertion whose state is out of range for a `Factor` is skipped for that
/// `Factor`.
///
/// Repeated assertions are applied in order, so asserting two different states of one variable
/// zeroes every entry for that variable.
pub fn observe_evidence(evidence: &[(VariableId, usize)], factors: &mut [Factor]) {
    for &(variable, state) in evidence {
        for factor in factors.iter_mut() {
            let position = match codec::var_index(factor, variable) {
                Some(p) => p,
                None => continue
            };

            let cardinality = factor.cardinals()[position];
            if state >= cardinality {
                warn!(variable, state, cardinality, "ignoring evidence for a state out of range");
                continue;
            }

            let groups = codec::state_indices(factor, position);
            let values = factor.values_mut();
            for (_, group) in groups.iter().enumerate().filter(|&(s, _)| s != state) {
                for &k in group {
                    values[k] = 0.;
                }
            }

            trace!(variable, state, "observed evidence");
        }
    }
}


/// Rescale the values of a `Factor` so that they sum to one.
///
/// # Errors
/// * `FactorError::DegenerateNormalization` if the values sum to zero or to a non-finite
///   number, e.g. after evidence has eliminated every state, or for the identity `Factor`
pub fn normalize(factor: &Factor) -> Result<Factor> {
    let z = factor.sum();

    if z == 0. || ! z.is_finite() {
        warn!(sum = z, scope = ?factor.variables(), "cannot normalize factor");
        return Err(FactorError::DegenerateNormalization { sum: z });
    }

    Ok(Factor::from_parts(
        factor.variables().to_vec(),
        factor.cardinals().to_vec(),
        factor.values().mapv(|v| v / z)
    ))
}
