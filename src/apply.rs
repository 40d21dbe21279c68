//! Operation validation and the driver loop.
//!
//! The driver owns no state: it borrows the amplitude buffer exclusively
//! for one call, resolves each operation through the dispatcher, computes
//! the index sets, and invokes the gate kernel slice by slice.

use num_complex::Complex64;

use crate::dispatch::construct_gate;
use crate::error::ApplyError;
use crate::gate::Gate;
use crate::index::{bit_patterns, indices_excluding};

/// Apply a sequence of operations to `state` in place.
///
/// The operation list is given as three parallel sequences: labels, wire
/// lists, and parameter lists. Operations are applied strictly left to
/// right; on error the call aborts with the state mutated only by the
/// operations strictly preceding the failing one.
///
/// # Errors
/// Any variant of [`ApplyError`]; numerical issues (NaN, underflow) are
/// never errors and propagate as arithmetic results.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use statevec_rs::{apply, state::zero_state};
///
/// // Bell pair: H on wire 0, then CNOT on [0, 1]
/// let mut state = zero_state(2);
/// apply(
///     &mut state,
///     &["Hadamard", "CNOT"],
///     &[vec![0], vec![0, 1]],
///     &[vec![], vec![]],
///     2,
/// )
/// .unwrap();
/// assert!((state[0].re - state[3].re).abs() < 1e-12);
/// ```
pub fn apply<S: AsRef<str>>(
    state: &mut [Complex64],
    ops: &[S],
    wires: &[Vec<usize>],
    params: &[Vec<f64>],
    num_qubits: usize,
) -> Result<(), ApplyError> {
    if ops.len() != wires.len() || ops.len() != params.len() {
        return Err(ApplyError::LengthMismatch {
            ops: ops.len(),
            wires: wires.len(),
            params: params.len(),
        });
    }
    check_buffer_length(state, num_qubits)?;

    for ((op, op_wires), op_params) in ops.iter().zip(wires.iter()).zip(params.iter()) {
        apply_operation(state, op.as_ref(), op_wires, op_params, num_qubits)?;
    }
    Ok(())
}

/// Validate and apply a single operation to `state` in place.
pub fn apply_operation(
    state: &mut [Complex64],
    label: &str,
    wires: &[usize],
    params: &[f64],
    num_qubits: usize,
) -> Result<(), ApplyError> {
    check_buffer_length(state, num_qubits)?;
    let gate = construct_gate(label, params)?;
    validate_wires(&gate, wires, num_qubits)?;

    let kernel_offsets = bit_patterns(wires, num_qubits);
    let complement = indices_excluding(wires, num_qubits)?;
    let outer = bit_patterns(&complement, num_qubits);

    let mut indices = vec![0usize; kernel_offsets.len()];
    for &base in &outer {
        for (slot, &offset) in indices.iter_mut().zip(kernel_offsets.iter()) {
            *slot = base + offset;
        }
        gate.apply(state, &indices);
    }
    Ok(())
}

fn check_buffer_length(state: &[Complex64], num_qubits: usize) -> Result<(), ApplyError> {
    let expected = 1usize.checked_shl(num_qubits as u32);
    if expected != Some(state.len()) {
        return Err(ApplyError::BadBufferLength {
            num_qubits,
            len: state.len(),
        });
    }
    Ok(())
}

fn validate_wires(gate: &Gate, wires: &[usize], num_qubits: usize) -> Result<(), ApplyError> {
    let arity = gate.num_qubits();
    if wires.len() != arity {
        return Err(ApplyError::BadWireCount {
            label: gate.label(),
            arity,
            given: wires.len(),
        });
    }
    for (pos, &wire) in wires.iter().enumerate() {
        if wire >= num_qubits {
            return Err(ApplyError::WireOutOfRange { wire, num_qubits });
        }
        if wires[..pos].contains(&wire) {
            return Err(ApplyError::DuplicateWire { wire });
        }
    }
    Ok(())
}
