use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use crate::kernel;

/// The closed catalogue of named quantum gates.
///
/// Parameterized variants store the complex scalars precomputed at
/// construction time; [`Gate::matrix`] rebuilds the dense unitary from
/// them, and [`Gate::apply`] is the specialized in-place kernel.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    S,
    T,
    RX { c: Complex64, js: Complex64 },
    RY { c: Complex64, s: Complex64 },
    RZ { phase0: Complex64, phase1: Complex64 },
    PhaseShift { shift: Complex64 },
    Rot { r1: Complex64, r2: Complex64, r3: Complex64, r4: Complex64 },
    CNOT,
    SWAP,
    CZ,
    CRX { c: Complex64, js: Complex64 },
    CRY { c: Complex64, s: Complex64 },
    CRZ { phase0: Complex64, phase1: Complex64 },
    CRot { r1: Complex64, r2: Complex64, r3: Complex64, r4: Complex64 },
    Toffoli,
    CSWAP,
}

impl Gate {
    /// X-axis rotation by `theta`.
    pub fn rx(theta: f64) -> Gate {
        Gate::RX {
            c: Complex64::new((theta / 2.0).cos(), 0.0),
            js: Complex64::new(0.0, -(theta / 2.0).sin()),
        }
    }

    /// Y-axis rotation by `theta`.
    pub fn ry(theta: f64) -> Gate {
        Gate::RY {
            c: Complex64::new((theta / 2.0).cos(), 0.0),
            s: Complex64::new((theta / 2.0).sin(), 0.0),
        }
    }

    /// Z-axis rotation by `theta`: diag(e^(-i theta/2), e^(i theta/2)).
    pub fn rz(theta: f64) -> Gate {
        Gate::RZ {
            phase0: Complex64::from_polar(1.0, -theta / 2.0),
            phase1: Complex64::from_polar(1.0, theta / 2.0),
        }
    }

    /// Phase shift: diag(1, e^(i phi)).
    pub fn phase_shift(phi: f64) -> Gate {
        Gate::PhaseShift {
            shift: Complex64::from_polar(1.0, phi),
        }
    }

    /// General single-qubit rotation, ZYZ Euler angles (phi, theta, omega).
    pub fn rot(phi: f64, theta: f64, omega: f64) -> Gate {
        let (r1, r2, r3, r4) = rot_entries(phi, theta, omega);
        Gate::Rot { r1, r2, r3, r4 }
    }

    /// Controlled [`Gate::rx`].
    pub fn crx(theta: f64) -> Gate {
        Gate::CRX {
            c: Complex64::new((theta / 2.0).cos(), 0.0),
            js: Complex64::new(0.0, -(theta / 2.0).sin()),
        }
    }

    /// Controlled [`Gate::ry`].
    pub fn cry(theta: f64) -> Gate {
        Gate::CRY {
            c: Complex64::new((theta / 2.0).cos(), 0.0),
            s: Complex64::new((theta / 2.0).sin(), 0.0),
        }
    }

    /// Controlled [`Gate::rz`].
    pub fn crz(theta: f64) -> Gate {
        Gate::CRZ {
            phase0: Complex64::from_polar(1.0, -theta / 2.0),
            phase1: Complex64::from_polar(1.0, theta / 2.0),
        }
    }

    /// Controlled [`Gate::rot`].
    pub fn crot(phi: f64, theta: f64, omega: f64) -> Gate {
        let (r1, r2, r3, r4) = rot_entries(phi, theta, omega);
        Gate::CRot { r1, r2, r3, r4 }
    }

    /// The unique case-sensitive label this gate is dispatched under.
    pub fn label(&self) -> &'static str {
        match self {
            Gate::PauliX => "PauliX",
            Gate::PauliY => "PauliY",
            Gate::PauliZ => "PauliZ",
            Gate::Hadamard => "Hadamard",
            Gate::S => "S",
            Gate::T => "T",
            Gate::RX { .. } => "RX",
            Gate::RY { .. } => "RY",
            Gate::RZ { .. } => "RZ",
            Gate::PhaseShift { .. } => "PhaseShift",
            Gate::Rot { .. } => "Rot",
            Gate::CNOT => "CNOT",
            Gate::SWAP => "SWAP",
            Gate::CZ => "CZ",
            Gate::CRX { .. } => "CRX",
            Gate::CRY { .. } => "CRY",
            Gate::CRZ { .. } => "CRZ",
            Gate::CRot { .. } => "CRot",
            Gate::Toffoli => "Toffoli",
            Gate::CSWAP => "CSWAP",
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::PauliX
            | Gate::PauliY
            | Gate::PauliZ
            | Gate::Hadamard
            | Gate::S
            | Gate::T
            | Gate::RX { .. }
            | Gate::RY { .. }
            | Gate::RZ { .. }
            | Gate::PhaseShift { .. }
            | Gate::Rot { .. } => 1,
            Gate::CNOT
            | Gate::SWAP
            | Gate::CZ
            | Gate::CRX { .. }
            | Gate::CRY { .. }
            | Gate::CRZ { .. }
            | Gate::CRot { .. } => 2,
            Gate::Toffoli | Gate::CSWAP => 3,
        }
    }

    /// Number of real parameters the gate is constructed from.
    pub fn num_params(&self) -> usize {
        match self {
            Gate::RX { .. }
            | Gate::RY { .. }
            | Gate::RZ { .. }
            | Gate::PhaseShift { .. }
            | Gate::CRX { .. }
            | Gate::CRY { .. }
            | Gate::CRZ { .. } => 1,
            Gate::Rot { .. } | Gate::CRot { .. } => 3,
            _ => 0,
        }
    }

    /// Dense row-major unitary of shape (2^k, 2^k).
    ///
    /// Used for auditing and tests, and as the generic fallback through
    /// [`crate::kernel::apply_matrix`].
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);

        match self {
            Gate::PauliX => {
                Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap()
            }
            Gate::PauliY => {
                Array2::from_shape_vec((2, 2), vec![zero, -i, i, zero]).unwrap()
            }
            Gate::PauliZ => {
                Array2::from_shape_vec((2, 2), vec![one, zero, zero, -one]).unwrap()
            }
            Gate::Hadamard => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                Array2::from_shape_vec((2, 2), vec![s, s, s, -s]).unwrap()
            }
            Gate::S => Array2::from_shape_vec((2, 2), vec![one, zero, zero, i]).unwrap(),
            Gate::T => {
                let shift = Complex64::from_polar(1.0, FRAC_PI_4);
                Array2::from_shape_vec((2, 2), vec![one, zero, zero, shift]).unwrap()
            }
            Gate::RX { c, js } => {
                Array2::from_shape_vec((2, 2), vec![*c, *js, *js, *c]).unwrap()
            }
            Gate::RY { c, s } => {
                Array2::from_shape_vec((2, 2), vec![*c, -*s, *s, *c]).unwrap()
            }
            Gate::RZ { phase0, phase1 } => {
                Array2::from_shape_vec((2, 2), vec![*phase0, zero, zero, *phase1]).unwrap()
            }
            Gate::PhaseShift { shift } => {
                Array2::from_shape_vec((2, 2), vec![one, zero, zero, *shift]).unwrap()
            }
            Gate::Rot { r1, r2, r3, r4 } => {
                Array2::from_shape_vec((2, 2), vec![*r1, *r2, *r3, *r4]).unwrap()
            }
            Gate::CNOT => {
                let mut m = Array2::eye(4);
                m[[2, 2]] = zero;
                m[[2, 3]] = one;
                m[[3, 2]] = one;
                m[[3, 3]] = zero;
                m
            }
            Gate::SWAP => {
                let mut m = Array2::eye(4);
                m[[1, 1]] = zero;
                m[[1, 2]] = one;
                m[[2, 1]] = one;
                m[[2, 2]] = zero;
                m
            }
            Gate::CZ => {
                let mut m = Array2::eye(4);
                m[[3, 3]] = -one;
                m
            }
            Gate::CRX { c, js } => controlled_block(*c, *js, *js, *c),
            Gate::CRY { c, s } => controlled_block(*c, -*s, *s, *c),
            Gate::CRZ { phase0, phase1 } => controlled_block(*phase0, zero, zero, *phase1),
            Gate::CRot { r1, r2, r3, r4 } => controlled_block(*r1, *r2, *r3, *r4),
            Gate::Toffoli => {
                let mut m = Array2::eye(8);
                m[[6, 6]] = zero;
                m[[6, 7]] = one;
                m[[7, 6]] = one;
                m[[7, 7]] = zero;
                m
            }
            Gate::CSWAP => {
                let mut m = Array2::eye(8);
                m[[5, 5]] = zero;
                m[[5, 6]] = one;
                m[[6, 5]] = one;
                m[[6, 6]] = zero;
                m
            }
        }
    }

    /// Specialized in-place kernel.
    ///
    /// `indices` holds the 2^k absolute positions for one slice, ordered so
    /// that `indices[p]` is local basis state `p` (MSB-first over the
    /// operation's wire ordering). Semantically identical to gathering
    /// those amplitudes, multiplying by [`Gate::matrix`], and scattering
    /// back; each arm touches only the amplitudes its matrix sparsity
    /// requires.
    pub fn apply(&self, state: &mut [Complex64], indices: &[usize]) {
        debug_assert_eq!(indices.len(), 1 << self.num_qubits());

        match self {
            Gate::PauliX => kernel::swap_rows(state, indices[0], indices[1]),
            Gate::PauliY => {
                let v0 = state[indices[0]];
                state[indices[0]] = Complex64::new(0.0, -1.0) * state[indices[1]];
                state[indices[1]] = Complex64::new(0.0, 1.0) * v0;
            }
            Gate::PauliZ => kernel::mul_row(state, indices[1], Complex64::new(-1.0, 0.0)),
            Gate::Hadamard => {
                let v0 = state[indices[0]];
                let v1 = state[indices[1]];
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                state[indices[0]] = s * (v0 + v1);
                state[indices[1]] = s * (v0 - v1);
            }
            Gate::S => kernel::mul_row(state, indices[1], Complex64::new(0.0, 1.0)),
            Gate::T => {
                kernel::mul_row(state, indices[1], Complex64::from_polar(1.0, FRAC_PI_4))
            }
            Gate::RX { c, js } => {
                kernel::mix_rows(state, indices[0], indices[1], *c, *js, *js, *c)
            }
            Gate::RY { c, s } => {
                kernel::mix_rows(state, indices[0], indices[1], *c, -*s, *s, *c)
            }
            Gate::RZ { phase0, phase1 } => {
                kernel::mul_row(state, indices[0], *phase0);
                kernel::mul_row(state, indices[1], *phase1);
            }
            Gate::PhaseShift { shift } => kernel::mul_row(state, indices[1], *shift),
            Gate::Rot { r1, r2, r3, r4 } => {
                kernel::mix_rows(state, indices[0], indices[1], *r1, *r2, *r3, *r4)
            }
            Gate::CNOT => kernel::swap_rows(state, indices[2], indices[3]),
            Gate::SWAP => kernel::swap_rows(state, indices[1], indices[2]),
            Gate::CZ => kernel::mul_row(state, indices[3], Complex64::new(-1.0, 0.0)),
            Gate::CRX { c, js } => {
                kernel::mix_rows(state, indices[2], indices[3], *c, *js, *js, *c)
            }
            Gate::CRY { c, s } => {
                kernel::mix_rows(state, indices[2], indices[3], *c, -*s, *s, *c)
            }
            Gate::CRZ { phase0, phase1 } => {
                kernel::mul_row(state, indices[2], *phase0);
                kernel::mul_row(state, indices[3], *phase1);
            }
            Gate::CRot { r1, r2, r3, r4 } => {
                kernel::mix_rows(state, indices[2], indices[3], *r1, *r2, *r3, *r4)
            }
            Gate::Toffoli => kernel::swap_rows(state, indices[6], indices[7]),
            Gate::CSWAP => kernel::swap_rows(state, indices[5], indices[6]),
        }
    }
}

/// ZYZ Euler entries for Rot(phi, theta, omega).
fn rot_entries(phi: f64, theta: f64, omega: f64) -> (Complex64, Complex64, Complex64, Complex64) {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    (
        Complex64::from_polar(c, (-phi - omega) / 2.0),
        Complex64::from_polar(-s, (phi - omega) / 2.0),
        Complex64::from_polar(s, (omega - phi) / 2.0),
        Complex64::from_polar(c, (phi + omega) / 2.0),
    )
}

/// 4x4 matrix acting as identity on the control-0 block and as the given
/// 2x2 matrix on the control-1 block.
fn controlled_block(
    m00: Complex64,
    m01: Complex64,
    m10: Complex64,
    m11: Complex64,
) -> Array2<Complex64> {
    let mut m = Array2::eye(4);
    m[[2, 2]] = m00;
    m[[2, 3]] = m01;
    m[[3, 2]] = m10;
    m[[3, 3]] = m11;
    m
}
