use thiserror::Error;
use wick_primitives::{ContractionError, OperatorId};

/// User input the session refused. Nothing is mutated when one of these is
/// returned; the message is shown in the status bar as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	#[error("Need at least one operator.")]
	NoOperators,

	#[error("No operator is selected.")]
	NothingSelected,

	#[error("Unknown operator {0}.")]
	UnknownOperator(OperatorId),

	/// Carries the operator description, e.g. `Input States #1`.
	#[error("{0} already participates in a contraction.")]
	AlreadyPaired(String),

	#[error("No contraction to remove for {0}.")]
	NothingToRemove(String),

	#[error("Clipboard is empty; copy a field first.")]
	EmptyRegister,

	#[error(transparent)]
	Contraction(#[from] ContractionError),
}

/// Result alias for session commands.
pub type Result<T> = std::result::Result<T, EditError>;
