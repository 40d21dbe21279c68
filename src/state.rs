use num_complex::Complex64;

/// Creates the |0...0> state of `num_qubits` qubits (index 0 set to 1).
pub fn zero_state(num_qubits: usize) -> Vec<Complex64> {
    basis_state(num_qubits, 0)
}

/// Creates the computational basis state `e_index` of `num_qubits` qubits.
///
/// # Panics
/// Panics if `index >= 2^num_qubits`.
pub fn basis_state(num_qubits: usize, index: usize) -> Vec<Complex64> {
    let total = 1usize << num_qubits;
    assert!(index < total, "index {} is out of range for {} qubits", index, num_qubits);
    let mut state = vec![Complex64::new(0.0, 0.0); total];
    state[index] = Complex64::new(1.0, 0.0);
    state
}

/// Sum of squared amplitude magnitudes.
pub fn norm_sqr(state: &[Complex64]) -> f64 {
    state.iter().map(|c| c.norm_sqr()).sum()
}

/// L2 norm of the state vector.
pub fn norm(state: &[Complex64]) -> f64 {
    norm_sqr(state).sqrt()
}
