#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;
pub mod matrix {
    pub mod matrix;
    pub mod matrix_index;
    pub mod matrix_inverse;
    pub mod matrix_ops;
    pub mod solve_linear;
    pub mod triangularize;
}
pub mod polynomial {
    pub mod polynomial;
    pub mod polynomial_special;
}
pub mod rings {
    pub mod element;
    pub mod fraction;
}

pub mod utils;

#[cfg(feature = "python")]
mod python;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    m.add_class::<python::PyPolynomial>()?;
    m.add_function(wrap_pyfunction!(python::py_solve_linear, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_eye, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_zeros, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_polynomial_integrate, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_legendre, m)?)?;
    Ok(())
}
