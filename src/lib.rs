pub mod factor;
pub mod genetics;
pub mod inference;
pub mod init;
pub mod util;
pub mod variable;

pub use crate::factor::codec::{state_indices, var_index};
pub use crate::factor::evidence::{normalize, observe_evidence};
pub use crate::factor::ops::{marginalize, product};
pub use crate::factor::sets::{difference, intersection, union_with_cardinalities};
pub use crate::factor::{Factor, Table};
pub use crate::inference::{joint, marginal, ConditionalInferenceEngine, EnumerationEngine};
pub use crate::init::Initialization;
pub use crate::util::{FactorError, Result};
pub use crate::variable::{all_assignments, Assignment, Variable, VariableId};
