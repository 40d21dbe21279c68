//! Shared test utilities for statevec-rs integration tests.

use ndarray::Array2;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use statevec_rs::construct_gate;
use statevec_rs::index::{bit_patterns, indices_excluding};
use statevec_rs::kernel::apply_matrix;

// ==================== JSON Data Structures ====================

#[derive(Deserialize)]
#[allow(dead_code)]
pub struct ScenarioData {
    pub cases: Vec<ScenarioCase>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
pub struct ScenarioCase {
    pub label: String,
    pub num_qubits: usize,
    pub ops: Vec<OpSpec>,
    #[serde(default)]
    pub input_state_re: Option<Vec<f64>>,
    #[serde(default)]
    pub input_state_im: Option<Vec<f64>>,
    pub output_state_re: Vec<f64>,
    pub output_state_im: Vec<f64>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
pub struct OpSpec {
    pub name: String,
    pub wires: Vec<usize>,
    pub params: Vec<f64>,
}

#[allow(dead_code)]
pub fn load_scenario_data() -> ScenarioData {
    let data = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/apply.json"
    ))
    .unwrap();
    serde_json::from_str(&data).unwrap()
}

/// Convert JSON state (re/im vectors) to a complex amplitude vector.
#[allow(dead_code)]
pub fn state_from_json(re: &[f64], im: &[f64]) -> Vec<Complex64> {
    re.iter()
        .zip(im.iter())
        .map(|(&r, &i)| Complex64::new(r, i))
        .collect()
}

// ==================== State Comparison ====================

/// Assert that two state vectors are close element-wise.
#[allow(dead_code)]
pub fn assert_states_close(a: &[Complex64], b: &[Complex64], tol: f64) {
    assert_eq!(
        a.len(),
        b.len(),
        "state vectors have different lengths: {} vs {}",
        a.len(),
        b.len()
    );
    for (i, (av, bv)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (av - bv).norm();
        assert!(
            diff < tol,
            "states differ at index {}: got {:?}, expected {:?}, diff = {}",
            i,
            av,
            bv,
            diff
        );
    }
}

// ==================== Random States ====================

/// Deterministic normalized random state on `num_qubits` qubits.
#[allow(dead_code)]
pub fn random_state(num_qubits: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state: Vec<Complex64> = (0..1usize << num_qubits)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let norm = statevec_rs::state::norm(&state);
    for amp in state.iter_mut() {
        *amp /= norm;
    }
    state
}

// ==================== Reference Implementations ====================

/// Apply one operation through the generic gather/scatter path, slice by
/// slice, using the gate's dense matrix instead of its specialized kernel.
#[allow(dead_code)]
pub fn apply_generic(
    state: &mut [Complex64],
    label: &str,
    wires: &[usize],
    params: &[f64],
    num_qubits: usize,
) {
    let gate = construct_gate(label, params).unwrap();
    let matrix = gate.matrix();
    let kernel_offsets = bit_patterns(wires, num_qubits);
    let complement = indices_excluding(wires, num_qubits).unwrap();
    let outer = bit_patterns(&complement, num_qubits);

    let mut indices = vec![0usize; kernel_offsets.len()];
    for &base in &outer {
        for (slot, &offset) in indices.iter_mut().zip(kernel_offsets.iter()) {
            *slot = base + offset;
        }
        apply_matrix(state, &indices, &matrix);
    }
}

/// Embed a 2^k local matrix acting on `wires` into the full 2^N space.
///
/// Built directly from bit arithmetic on row/column indices, independent of
/// the engine's offset decomposition, so the two can be checked against
/// each other.
#[allow(dead_code)]
pub fn embed_full_matrix(
    matrix: &Array2<Complex64>,
    wires: &[usize],
    num_qubits: usize,
) -> Array2<Complex64> {
    let total = 1usize << num_qubits;
    let k = wires.len();
    let mut full = Array2::zeros((total, total));

    for row in 0..total {
        // local row index, MSB-first over the wire ordering
        let mut local_row = 0usize;
        for &wire in wires {
            local_row = (local_row << 1) | ((row >> (num_qubits - 1 - wire)) & 1);
        }
        for local_col in 0..1usize << k {
            let mut col = row;
            for (j, &wire) in wires.iter().enumerate() {
                let bit = (local_col >> (k - 1 - j)) & 1;
                let mask = 1usize << (num_qubits - 1 - wire);
                col = (col & !mask) | (bit << (num_qubits - 1 - wire));
            }
            full[[row, col]] = matrix[[local_row, local_col]];
        }
    }
    full
}

/// Dense matrix-vector product.
#[allow(dead_code)]
pub fn mat_vec(matrix: &Array2<Complex64>, vec: &[Complex64]) -> Vec<Complex64> {
    let n = matrix.nrows();
    let mut result = vec![Complex64::new(0.0, 0.0); n];
    for i in 0..n {
        let mut acc = Complex64::new(0.0, 0.0);
        for j in 0..matrix.ncols() {
            acc += matrix[[i, j]] * vec[j];
        }
        result[i] = acc;
    }
    result
}

/// Check M * M^dagger = I within `tol`.
#[allow(dead_code)]
pub fn assert_unitary(matrix: &Array2<Complex64>, tol: f64, label: &str) {
    let n = matrix.nrows();
    assert_eq!(n, matrix.ncols(), "{}: matrix is not square", label);
    for i in 0..n {
        for j in 0..n {
            let mut acc = Complex64::new(0.0, 0.0);
            for l in 0..n {
                acc += matrix[[i, l]] * matrix[[j, l]].conj();
            }
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(
                (acc - Complex64::new(expected, 0.0)).norm() < tol,
                "{}: M M^dagger differs from identity at [{},{}]: {:?}",
                label,
                i,
                j,
                acc
            );
        }
    }
}
