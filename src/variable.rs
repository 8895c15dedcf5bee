//! Definition of the variable module
//!
//! Variables are identified by a non-negative integer id. A `Variable` couples an id with the
//! number of states the random variable may take, and an `Assignment` maps variable ids to states.

use crate::factor::codec;

use indexmap::IndexMap;
use indexmap::map::Iter;

use std::iter::FromIterator;

/// The identifier of a random variable
pub type VariableId = usize;


/// A discrete random variable: an identifier together with its cardinality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    id: VariableId,
    cardinality: usize
}

impl Variable {

    /// Construct a new `Variable` with the given number of states
    pub fn new(id: VariableId, cardinality: usize) -> Self {
        Variable { id, cardinality }
    }

    /// Construct a new `Variable` with two states
    pub fn binary(id: VariableId) -> Self {
        Variable::new(id, 2)
    }

    /// Construct a new `Variable` with `cardinality` states, tagged `0..cardinality`
    pub fn discrete(id: VariableId, cardinality: usize) -> Self {
        Variable::new(id, cardinality)
    }

    /// Get the identifier of the `Variable`
    pub fn id(&self) -> VariableId {
        self.id
    }

    /// Get the number of states of the `Variable`
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }
}


/// An `Assignment` of states to some set of variables.
///
/// Insertion order is preserved, so an `Assignment` can double as an ordered list of evidence.
/// Setting a variable twice keeps its original position and overwrites the state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    values: IndexMap<VariableId, usize>
}

impl Assignment {

    /// Construct an empty `Assignment`
    pub fn new() -> Self {
        Assignment { values: IndexMap::new() }
    }

    /// Assign `state` to `var`
    pub fn set(&mut self, var: VariableId, state: usize) {
        self.values.insert(var, state);
    }

    /// Retrieve the state assigned to `var`, if any
    pub fn get(&self, var: VariableId) -> Option<usize> {
        self.values.get(&var).cloned()
    }

    /// Remove the assignment to `var`, returning the state it held
    pub fn unset(&mut self, var: VariableId) -> Option<usize> {
        self.values.shift_remove(&var)
    }

    /// Check if `var` is assigned
    pub fn contains(&self, var: VariableId) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the `(variable, state)` pairs in insertion order
    pub fn iter(&self) -> Iter<VariableId, usize> {
        self.values.iter()
    }

    /// The assignment as a list of `(variable, state)` evidence pairs
    pub fn to_evidence(&self) -> Vec<(VariableId, usize)> {
        self.values.iter().map(|(&v, &s)| (v, s)).collect()
    }
}

impl FromIterator<(VariableId, usize)> for Assignment {

    fn from_iter<I: IntoIterator<Item = (VariableId, usize)>>(iter: I) -> Self {
        Assignment { values: iter.into_iter().collect() }
    }

}


/// Enumerate every complete `Assignment` to the given scope.
///
/// Assignments are produced in flat-index order: the first variable cycles fastest. The `k`-th
/// assignment therefore addresses `values[k]` of a factor with the same scope.
pub fn all_assignments<'a>(
    variables: &'a [VariableId],
    cardinals: &'a [usize]
) -> impl Iterator<Item = Assignment> + 'a {
    let size = if variables.is_empty() { 0 } else { codec::table_size(cardinals) };

    (0..size).map(move |k| {
        variables.iter()
                 .cloned()
                 .zip(codec::decode(cardinals, k))
                 .collect()
    })
}
