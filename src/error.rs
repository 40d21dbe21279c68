use std::fmt;

/// Error types for gate construction and operation validation.
///
/// All variants abort the current apply call; the state vector keeps the
/// result of every operation strictly preceding the failing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The operation label is not in the dispatch table
    UnknownGate { label: String },
    /// Parameter-list length does not match the gate's declared count
    BadParameterCount {
        label: &'static str,
        required: usize,
        given: usize,
    },
    /// Wire-list length does not match the gate's arity
    BadWireCount {
        label: &'static str,
        arity: usize,
        given: usize,
    },
    /// A wire index is >= the qubit count
    WireOutOfRange { wire: usize, num_qubits: usize },
    /// The same wire appears twice in one operation
    DuplicateWire { wire: usize },
    /// State buffer length is not exactly 2^num_qubits
    BadBufferLength { num_qubits: usize, len: usize },
    /// The parallel operation sequences have different lengths
    LengthMismatch {
        ops: usize,
        wires: usize,
        params: usize,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::UnknownGate { label } => {
                write!(f, "{} is not a supported gate type", label)
            }
            ApplyError::BadParameterCount {
                label,
                required,
                given,
            } => write!(
                f,
                "{}: requires {} parameters but got {} parameters instead",
                label, required, given
            ),
            ApplyError::BadWireCount {
                label,
                arity,
                given,
            } => write!(
                f,
                "{}: requires {} wires but got {} wires instead",
                label, arity, given
            ),
            ApplyError::WireOutOfRange { wire, num_qubits } => write!(
                f,
                "wire {} is out of range (num_qubits = {})",
                wire, num_qubits
            ),
            ApplyError::DuplicateWire { wire } => {
                write!(f, "wire {} appears more than once in one operation", wire)
            }
            ApplyError::BadBufferLength { num_qubits, len } => write!(
                f,
                "state vector length {} is not 2^{}",
                len, num_qubits
            ),
            ApplyError::LengthMismatch { ops, wires, params } => write!(
                f,
                "operation sequences differ in length: {} labels, {} wire lists, {} parameter lists",
                ops, wires, params
            ),
        }
    }
}

impl std::error::Error for ApplyError {}
