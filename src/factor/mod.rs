//! Definition of the factor module
//!
//! A `Factor` represents a real valued function over the joint states of a set of discrete
//! variables. The values are held in a flat table addressed through the mixed radix encoding
//! described in [`codec`].

pub mod codec;
pub mod evidence;
pub mod ops;
pub mod sets;

use crate::util::{FactorError, Result};
use crate::variable::{Assignment, Variable, VariableId};

use itertools::Itertools;
use ndarray::prelude as nd;

use std::fmt;

/// The flat table of values held by a `Factor`
pub type Table = nd::Array1<f64>;


#[derive(Clone, Debug, PartialEq)]
pub struct Factor {
    /// The scope of the `Factor`. The order defines the layout of `values`.
    variables: Vec<VariableId>,

    /// The number of states of each variable in the scope
    cardinals: Vec<usize>,

    /// One value per joint state of the scope
    values: Table
}


impl Factor {

    /// Get the identity factor. It has an empty scope and no values.
    pub fn identity() -> Self {
        Factor {
            variables: Vec::new(),
            cardinals: Vec::new(),
            values: Table::zeros(0)
        }
    }


    /// Create a new `Factor` with every value set to zero
    ///
    /// # Errors
    /// * `FactorError::ScopeMismatch` if `variables` and `cardinals` differ in length
    /// * `FactorError::DuplicateVariable` if a variable is listed twice
    /// * `FactorError::ZeroCardinality` if a variable has no states
    /// * `FactorError::TableOverflow` if the table would have more than `usize::MAX` entries
    pub fn new(variables: Vec<VariableId>, cardinals: Vec<usize>) -> Result<Self> {
        let size = check_scope(&variables, &cardinals)?;

        if variables.is_empty() {
            return Ok(Factor::identity());
        }

        Ok(Factor { variables, cardinals, values: Table::zeros(size) })
    }


    /// Create a new `Factor` with the given values.
    ///
    /// `values[k]` is the value of the joint state that decodes from `k`, see [`codec`].
    ///
    /// # Errors
    /// Any error of `Factor::new`, and `FactorError::ValueCountMismatch` if there is not exactly
    /// one value per joint state. An empty scope accepts either no values (the identity) or a
    /// single value (a scalar factor).
    pub fn with_values(
        variables: Vec<VariableId>,
        cardinals: Vec<usize>,
        values: Vec<f64>
    ) -> Result<Self> {
        let size = check_scope(&variables, &cardinals)?;

        if variables.is_empty() && values.is_empty() {
            return Ok(Factor::identity());
        }

        if values.len() != size {
            return Err(FactorError::ValueCountMismatch { expected: size, got: values.len() });
        }

        Ok(Factor { variables, cardinals, values: Table::from(values) })
    }


    /// Create a zero valued `Factor` over the given `Variable`s
    pub fn from_scope(scope: &[Variable]) -> Result<Self> {
        Factor::new(
            scope.iter().map(|v| v.id()).collect(),
            scope.iter().map(|v| v.cardinality()).collect()
        )
    }


    /// Assemble a `Factor` from parts that are already known to be consistent
    pub(crate) fn from_parts(variables: Vec<VariableId>, cardinals: Vec<usize>, values: Table) -> Self {
        debug_assert_eq!(variables.len(), cardinals.len());
        debug_assert!(variables.is_empty() || values.len() == codec::table_size(&cardinals));

        Factor { variables, cardinals, values }
    }


    /// Check if the `Factor` is the identity `Factor`
    pub fn is_identity(&self) -> bool {
        self.variables.is_empty() && self.values.is_empty()
    }


    /// Check if the `Factor` is a constant with no scope, e.g. the result of marginalizing every
    /// variable out of a `Factor`
    pub fn is_scalar(&self) -> bool {
        self.variables.is_empty() && self.values.len() == 1
    }


    /// The variables in the scope of the `Factor`, in layout order
    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }


    /// The cardinality of each variable in the scope
    pub fn cardinals(&self) -> &[usize] {
        &self.cardinals
    }


    /// The flat value table
    pub fn values(&self) -> &Table {
        &self.values
    }


    pub(crate) fn values_mut(&mut self) -> &mut Table {
        &mut self.values
    }


    /// The scope as `Variable`s
    pub fn scope(&self) -> Vec<Variable> {
        self.variables.iter()
                      .zip(self.cardinals.iter())
                      .map(|(&v, &c)| Variable::new(v, c))
                      .collect()
    }


    /// The number of values in the table
    pub fn len(&self) -> usize {
        self.values.len()
    }


    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Check if `variable` is in the scope of this `Factor`
    pub fn contains(&self, variable: VariableId) -> bool {
        self.variables.contains(&variable)
    }


    /// The cardinality of `variable`, if it is in scope
    pub fn cardinality_of(&self, variable: VariableId) -> Option<usize> {
        codec::var_index(self, variable).map(|p| self.cardinals[p])
    }


    /// The sum of all values in the table
    pub fn sum(&self) -> f64 {
        self.values.sum()
    }


    /// Retrieve the value for a complete assignment over the scope of this `Factor`
    ///
    /// # Args
    /// * `assignment`: a full assignment to the scope of the `Factor`. The assignment's scope may
    ///   be a superset of the `Factor`'s scope.
    ///
    /// # Errors
    /// * `FactorError::IncompleteAssignment` if a variable in scope is not assigned, or the
    ///   `Factor` is the identity
    /// * `FactorError::StateOutOfRange` if an assigned state does not exist
    pub fn value(&self, assignment: &Assignment) -> Result<f64> {
        let k = self.flat_index(assignment)?;
        Ok(self.values[k])
    }


    /// Overwrite the value for a complete assignment over the scope of this `Factor`
    ///
    /// # Errors
    /// The same as `Factor::value`
    pub fn set_value(&mut self, assignment: &Assignment, value: f64) -> Result<()> {
        let k = self.flat_index(assignment)?;
        self.values[k] = value;
        Ok(())
    }


    fn flat_index(&self, assignment: &Assignment) -> Result<usize> {
        if self.is_identity() {
            return Err(FactorError::IncompleteAssignment);
        }

        let mut states = Vec::with_capacity(self.variables.len());
        for (&v, &c) in self.variables.iter().zip(self.cardinals.iter()) {
            let s = assignment.get(v).ok_or(FactorError::IncompleteAssignment)?;
            if s >= c {
                return Err(FactorError::StateOutOfRange { variable: v, state: s, cardinality: c });
            }
            states.push(s);
        }

        codec::encode(&self.cardinals, &states).ok_or(FactorError::IncompleteAssignment)
    }


    /// Product of this `Factor` and another. See [`ops::product`].
    pub fn product(&self, other: &Self) -> Result<Self> {
        ops::product(self, other)
    }


    /// Sum this `Factor` over every state of `variable`. See [`ops::marginalize`].
    pub fn marginalize(&self, variable: VariableId) -> Result<Self> {
        ops::marginalize(self, variable)
    }


    /// Rescale the values of this `Factor` to sum to one. See [`evidence::normalize`].
    pub fn normalize(&self) -> Result<Self> {
        evidence::normalize(self)
    }


    /// A copy of this `Factor` with every entry inconsistent with `variable = state` set to zero.
    /// See [`evidence::observe_evidence`].
    pub fn observe(&self, variable: VariableId, state: usize) -> Self {
        let mut observed = vec![self.clone()];
        evidence::observe_evidence(&[(variable, state)], &mut observed);
        observed.remove(0)
    }

}


/// Validate a scope, returning the size of its table
fn check_scope(variables: &[VariableId], cardinals: &[usize]) -> Result<usize> {
    if variables.len() != cardinals.len() {
        return Err(FactorError::ScopeMismatch {
            variables: variables.len(),
            cardinals: cardinals.len()
        });
    }

    if let Some(v) = variables.iter().duplicates().next() {
        return Err(FactorError::DuplicateVariable(*v));
    }

    if let Some((&v, _)) = variables.iter().zip(cardinals).find(|&(_, &c)| c == 0) {
        return Err(FactorError::ZeroCardinality(v));
    }

    codec::checked_table_size(cardinals)
        .ok_or_else(|| FactorError::TableOverflow { cardinals: cardinals.to_vec() })
}


impl fmt::Display for Factor {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "variables:   {}", self.variables.iter().join(" "))?;
        writeln!(f, "cardinality: {}", self.cardinals.iter().join(" "))?;
        write!(f, "values:      {}", self.values.iter().join(" "))
    }

}
