//! Label-to-constructor resolution for the gate catalogue.
//!
//! The mapping is fixed at compile time and covers exactly the labels in
//! [`LABELS`]; matching is case-sensitive.

use crate::error::ApplyError;
use crate::gate::Gate;

/// Every label the dispatcher recognizes.
pub const LABELS: [&str; 20] = [
    "PauliX", "PauliY", "PauliZ", "Hadamard", "S", "T", "RX", "RY", "RZ", "PhaseShift", "Rot",
    "CNOT", "SWAP", "CZ", "CRX", "CRY", "CRZ", "CRot", "Toffoli", "CSWAP",
];

/// Required parameter count for a label, or `None` if the label is unknown.
pub fn param_count(label: &str) -> Option<usize> {
    match label {
        "PauliX" | "PauliY" | "PauliZ" | "Hadamard" | "S" | "T" | "CNOT" | "SWAP" | "CZ"
        | "Toffoli" | "CSWAP" => Some(0),
        "RX" | "RY" | "RZ" | "PhaseShift" | "CRX" | "CRY" | "CRZ" => Some(1),
        "Rot" | "CRot" => Some(3),
        _ => None,
    }
}

fn expect_params(
    label: &'static str,
    params: &[f64],
    required: usize,
) -> Result<(), ApplyError> {
    if params.len() != required {
        return Err(ApplyError::BadParameterCount {
            label,
            required,
            given: params.len(),
        });
    }
    Ok(())
}

/// Resolve a gate label and build the gate instance from its parameters.
///
/// # Errors
/// [`ApplyError::UnknownGate`] for an unrecognized label,
/// [`ApplyError::BadParameterCount`] when the parameter-list length differs
/// from the gate's declared count (extra parameters are rejected, not
/// ignored).
pub fn construct_gate(label: &str, params: &[f64]) -> Result<Gate, ApplyError> {
    match label {
        "PauliX" => expect_params("PauliX", params, 0).map(|_| Gate::PauliX),
        "PauliY" => expect_params("PauliY", params, 0).map(|_| Gate::PauliY),
        "PauliZ" => expect_params("PauliZ", params, 0).map(|_| Gate::PauliZ),
        "Hadamard" => expect_params("Hadamard", params, 0).map(|_| Gate::Hadamard),
        "S" => expect_params("S", params, 0).map(|_| Gate::S),
        "T" => expect_params("T", params, 0).map(|_| Gate::T),
        "RX" => expect_params("RX", params, 1).map(|_| Gate::rx(params[0])),
        "RY" => expect_params("RY", params, 1).map(|_| Gate::ry(params[0])),
        "RZ" => expect_params("RZ", params, 1).map(|_| Gate::rz(params[0])),
        "PhaseShift" => expect_params("PhaseShift", params, 1).map(|_| Gate::phase_shift(params[0])),
        "Rot" => expect_params("Rot", params, 3).map(|_| Gate::rot(params[0], params[1], params[2])),
        "CNOT" => expect_params("CNOT", params, 0).map(|_| Gate::CNOT),
        "SWAP" => expect_params("SWAP", params, 0).map(|_| Gate::SWAP),
        "CZ" => expect_params("CZ", params, 0).map(|_| Gate::CZ),
        "CRX" => expect_params("CRX", params, 1).map(|_| Gate::crx(params[0])),
        "CRY" => expect_params("CRY", params, 1).map(|_| Gate::cry(params[0])),
        "CRZ" => expect_params("CRZ", params, 1).map(|_| Gate::crz(params[0])),
        "CRot" => {
            expect_params("CRot", params, 3).map(|_| Gate::crot(params[0], params[1], params[2]))
        }
        "Toffoli" => expect_params("Toffoli", params, 0).map(|_| Gate::Toffoli),
        "CSWAP" => expect_params("CSWAP", params, 0).map(|_| Gate::CSWAP),
        _ => Err(ApplyError::UnknownGate {
            label: label.to_string(),
        }),
    }
}
