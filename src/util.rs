//! Defines the `Error` type for the bnfactor library

use crate::variable::VariableId;

use thiserror::Error;

use std::result;

pub type Result<T> = result::Result<T, FactorError>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FactorError {

    /// A requested variable is not in the scope of the `Factor`
    #[error("Variable {0} is not in the scope of the factor")]
    VariableNotFound(VariableId),

    /// Two `Factor`s disagree on the number of states of a variable they share
    #[error("Cardinality mismatch for variable {variable}: {left} != {right}")]
    CardinalityMismatch {
        variable: VariableId,
        left: usize,
        right: usize
    },

    /// An operation over a list of `Factor`s was given an empty list
    #[error("No factors supplied")]
    NoFactors,

    /// The values of a `Factor` sum to zero (or to something non-finite), so there is no
    /// normalizing constant
    #[error("Cannot normalize a factor whose values sum to {sum}")]
    DegenerateNormalization { sum: f64 },

    /// Represents a variable that was present multiple times in a situation where it should only
    /// have been present once
    #[error("Variable {0} appears more than once")]
    DuplicateVariable(VariableId),

    /// A variable was declared with no states
    #[error("Variable {0} has a cardinality of zero")]
    ZeroCardinality(VariableId),

    /// The variable and cardinality lists have different lengths
    #[error("Scope has {variables} variables but {cardinals} cardinalities")]
    ScopeMismatch { variables: usize, cardinals: usize },

    /// The joint states of the scope cannot be counted in a `usize`
    #[error("A table over cardinalities {cardinals:?} has too many entries")]
    TableOverflow { cardinals: Vec<usize> },

    /// The value table does not have one entry per joint state of the scope
    #[error("Expected {expected} values, got {got}")]
    ValueCountMismatch { expected: usize, got: usize },

    /// Represents an incomplete assignment where a complete assignment was required.
    #[error("Missing assignments to the required variables")]
    IncompleteAssignment,

    /// An assignment names a state the variable does not have
    #[error("State {state} is out of range for variable {variable} with {cardinality} states")]
    StateOutOfRange {
        variable: VariableId,
        state: usize,
        cardinality: usize
    },

    /// Represents an attempt to build a factor with an incompatible `Initialization`
    #[error("An invalid initialization was provided")]
    InvalidInitialization

}
