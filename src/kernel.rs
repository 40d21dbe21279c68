//! Primitive amplitude operations shared by the gate kernels.
//!
//! These functions mutate a handful of amplitudes in place. The indices they
//! receive are absolute positions in the state vector, already offset for
//! the slice being processed.

use ndarray::Array2;
use num_complex::Complex64;

/// Largest local dimension in the catalogue (a 3-qubit gate touches 8
/// amplitudes), sizing the stack-local scratch of [`apply_matrix`].
pub const MAX_GATE_DIM: usize = 8;

/// Swap the amplitudes at indices `i` and `j`.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use statevec_rs::kernel::swap_rows;
///
/// let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// swap_rows(&mut state, 0, 1);
/// assert_eq!(state[1], Complex64::new(1.0, 0.0));
/// ```
pub fn swap_rows(state: &mut [Complex64], i: usize, j: usize) {
    state.swap(i, j);
}

/// Multiply the amplitude at index `i` by a scalar factor.
///
/// Used by the diagonal kernels (PauliZ, S, T, PhaseShift, RZ and their
/// controlled forms).
pub fn mul_row(state: &mut [Complex64], i: usize, factor: Complex64) {
    state[i] *= factor;
}

/// Apply a dense 2x2 matrix `[[m00, m01], [m10, m11]]` to the amplitude
/// pair at indices `i` and `j`:
///
/// - `new_i = m00 * state[i] + m01 * state[j]`
/// - `new_j = m10 * state[i] + m11 * state[j]`
pub fn mix_rows(
    state: &mut [Complex64],
    i: usize,
    j: usize,
    m00: Complex64,
    m01: Complex64,
    m10: Complex64,
    m11: Complex64,
) {
    let v0 = state[i];
    let v1 = state[j];
    state[i] = m00 * v0 + m01 * v1;
    state[j] = m10 * v0 + m11 * v1;
}

/// Apply a dense `d x d` unitary to the `d` amplitudes at `indices`.
///
/// The gather into the scratch buffer completes for all indices before any
/// scatter write; the two phases must not interleave, or non-diagonal
/// matrices read partially updated amplitudes.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use statevec_rs::kernel::apply_matrix;
///
/// // X matrix applied generically: |0> -> |1>
/// let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
/// let x = Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap();
/// apply_matrix(&mut state, &[0, 1], &x);
/// assert!((state[1] - one).norm() < 1e-12);
/// ```
pub fn apply_matrix(state: &mut [Complex64], indices: &[usize], matrix: &Array2<Complex64>) {
    let dim = indices.len();
    debug_assert!(dim <= MAX_GATE_DIM);
    debug_assert_eq!(matrix.nrows(), dim);
    debug_assert_eq!(matrix.ncols(), dim);

    let mut scratch = [Complex64::new(0.0, 0.0); MAX_GATE_DIM];
    for (slot, &index) in scratch.iter_mut().zip(indices.iter()) {
        *slot = state[index];
    }

    for (i, &index) in indices.iter().enumerate() {
        let mut acc = Complex64::new(0.0, 0.0);
        for (j, amp) in scratch[..dim].iter().enumerate() {
            acc += matrix[[i, j]] * amp;
        }
        state[index] = acc;
    }
}
