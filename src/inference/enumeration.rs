//! Defines a `ConditionalInferenceEngine` that answers conditional queries by enumerating the full
//! joint distribution.

use super::query::joint;
use super::ConditionalInferenceEngine;
use crate::factor::evidence::{normalize, observe_evidence};
use crate::factor::ops::marginalize;
use crate::factor::sets::difference;
use crate::factor::Factor;
use crate::util::{FactorError, Result};
use crate::variable::{Assignment, VariableId};

use tracing::debug;

pub struct EnumerationEngine {

    /// the joint distribution of the factors, with every entry inconsistent with the evidence
    /// set to zero
    observed: Factor

}


impl EnumerationEngine {

    /// Build an engine over a 'bag of factors' conditioned on `evidence`.
    ///
    /// The joint is computed once here; each query then only sums out and normalizes.
    ///
    /// # Errors
    /// any error of [`joint`]
    pub fn new(factors: &[Factor], evidence: &Assignment) -> Result<Self> {
        let mut observed = vec![joint(factors)?];
        observe_evidence(&evidence.to_evidence(), &mut observed);

        debug!(evidence = evidence.len(), scope = ?observed[0].variables(), "built enumeration engine");
        Ok(EnumerationEngine { observed: observed.remove(0) })
    }

    /// The scope of the underlying joint distribution
    pub fn variables(&self) -> &[VariableId] {
        self.observed.variables()
    }

}


impl ConditionalInferenceEngine for EnumerationEngine {

    fn infer(&self, variables: &[VariableId]) -> Result<Factor> {
        // check input arguments
        if let Some(&v) = variables.iter().find(|&&v| ! self.observed.contains(v)) {
            return Err(FactorError::VariableNotFound(v));
        }

        let eliminate = difference(self.observed.variables(), variables);
        let phi = eliminate.iter()
                           .try_fold(self.observed.clone(), |acc, &var| marginalize(&acc, var))?;

        normalize(&phi)
    }

}
