use pyo3::exceptions::{PyIndexError, PyNotImplementedError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;
use std::str::FromStr;

use crate::error::AlgebraError;
use crate::matrix::matrix::{eye, zeros, Matrix};
use crate::matrix::solve_linear::solve_linear;
use crate::matrix::triangularize::{triangularize, Position};
use crate::polynomial::polynomial::Polynomial;
use crate::polynomial::polynomial_special::{legendre, polynomial_integrate};

impl From<AlgebraError> for PyErr {
    fn from(error: AlgebraError) -> PyErr {
        match error {
            AlgebraError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            AlgebraError::Unsupported(_) => PyNotImplementedError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    inner: Matrix<f64>,
}

impl From<Matrix<f64>> for PyMatrix {
    fn from(inner: Matrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<PyMatrix> {
        Ok(Matrix::from_list(lines)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    pub fn __add__(&self, rhs: &Bound<PyAny>) -> PyResult<PyMatrix> {
        if let Ok(other) = rhs.extract::<PyRef<PyMatrix>>() {
            return Ok((&self.inner + &other.inner)?.into());
        }
        Ok(self.inner.add_scalar(&rhs.extract::<f64>()?).into())
    }

    pub fn __sub__(&self, rhs: &Bound<PyAny>) -> PyResult<PyMatrix> {
        if let Ok(other) = rhs.extract::<PyRef<PyMatrix>>() {
            return Ok((&self.inner - &other.inner)?.into());
        }
        Ok(self.inner.sub_scalar(&rhs.extract::<f64>()?).into())
    }

    pub fn __mul__(&self, rhs: &Bound<PyAny>) -> PyResult<PyMatrix> {
        if let Ok(other) = rhs.extract::<PyRef<PyMatrix>>() {
            return Ok((&self.inner * &other.inner)?.into());
        }
        Ok(self.inner.mul_scalar(&rhs.extract::<f64>()?).into())
    }

    pub fn __rmul__(&self, lhs: f64) -> PyMatrix {
        self.inner.mul_scalar(&lhs).into()
    }

    pub fn __truediv__(&self, value: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.div_scalar(&value)?.into())
    }

    pub fn __neg__(&self) -> PyMatrix {
        (-&self.inner).into()
    }

    pub fn __pow__(&self, p: i64, _modulo: Option<i64>) -> PyResult<PyMatrix> {
        Ok(self.inner.power(p)?.into())
    }

    pub fn __eq__(&self, other: &PyMatrix) -> bool {
        self.inner == other.inner
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(*self.inner.get(row, col)?)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> PyResult<()> {
        Ok(self.inner.set(row, col, value)?)
    }

    pub fn det(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn tr(&self) -> PyResult<f64> {
        Ok(self.inner.trace()?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    #[pyo3(signature = (pos = "upper"))]
    pub fn triangularize(&self, pos: &str) -> PyResult<PyMatrix> {
        let pos = Position::from_str(pos)?;
        Ok(triangularize(&self.inner, pos, None)?.into())
    }
}

#[derive(Debug, Clone)]
#[pyclass(name = "Polynomial", frozen)]
pub struct PyPolynomial {
    inner: Polynomial<f64>,
}

impl From<Polynomial<f64>> for PyPolynomial {
    fn from(inner: Polynomial<f64>) -> Self {
        PyPolynomial { inner }
    }
}

#[pymethods]
impl PyPolynomial {
    #[new]
    pub fn new(factors: Vec<f64>) -> Self {
        Polynomial::new(factors).into()
    }

    #[getter]
    pub fn factors(&self) -> Vec<f64> {
        self.inner.factors().to_vec()
    }

    #[getter]
    pub fn degree(&self) -> usize {
        self.inner.degree()
    }

    pub fn __call__(&self, x: f64) -> f64 {
        self.inner.eval(&x)
    }

    pub fn __add__(&self, rhs: &Bound<PyAny>) -> PyResult<PyPolynomial> {
        if let Ok(other) = rhs.extract::<PyRef<PyPolynomial>>() {
            return Ok((&self.inner + &other.inner).into());
        }
        Ok(self.inner.add_scalar(&rhs.extract::<f64>()?).into())
    }

    pub fn __sub__(&self, rhs: &Bound<PyAny>) -> PyResult<PyPolynomial> {
        if let Ok(other) = rhs.extract::<PyRef<PyPolynomial>>() {
            return Ok((&self.inner - &other.inner).into());
        }
        Ok(self.inner.add_scalar(&-rhs.extract::<f64>()?).into())
    }

    pub fn __mul__(&self, rhs: &Bound<PyAny>) -> PyResult<PyPolynomial> {
        if let Ok(other) = rhs.extract::<PyRef<PyPolynomial>>() {
            return Ok((&self.inner * &other.inner).into());
        }
        Ok(self.inner.mul_scalar(&rhs.extract::<f64>()?).into())
    }

    pub fn __truediv__(&self, value: f64) -> PyResult<PyPolynomial> {
        Ok(self.inner.div_scalar(&value)?.into())
    }

    pub fn __neg__(&self) -> PyPolynomial {
        (-&self.inner).into()
    }

    pub fn __pow__(&self, p: i64, _modulo: Option<i64>) -> PyResult<PyPolynomial> {
        Ok(self.inner.pow(p)?.into())
    }

    pub fn __eq__(&self, other: &PyPolynomial) -> bool {
        self.inner == other.inner
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    #[pyo3(signature = (n = 1))]
    pub fn diff(&self, n: usize) -> PyPolynomial {
        self.inner.diff(n).into()
    }
}

/// Returns `(solvable, particular, homogeneous)`.
#[pyfunction(name = "solve_linear")]
pub fn py_solve_linear(
    a: &PyMatrix,
    b: &PyMatrix,
) -> PyResult<(bool, Option<PyMatrix>, Option<Vec<PyMatrix>>)> {
    let sols = solve_linear(&a.inner, &b.inner)?;
    Ok((
        sols.solvable,
        sols.particular.map(PyMatrix::from),
        sols.homogeneous
            .map(|h| h.into_iter().map(PyMatrix::from).collect()),
    ))
}

#[pyfunction(name = "eye")]
pub fn py_eye(n: usize) -> PyResult<PyMatrix> {
    Ok(eye::<f64>(n)?.into())
}

#[pyfunction(name = "zeros")]
#[pyo3(signature = (n, m = 1))]
pub fn py_zeros(n: usize, m: usize) -> PyResult<PyMatrix> {
    Ok(zeros::<f64>(n, m)?.into())
}

#[pyfunction(name = "polynomial_integrate")]
pub fn py_polynomial_integrate(p: &PyPolynomial) -> PyPolynomial {
    polynomial_integrate(&p.inner).into()
}

#[pyfunction(name = "legendre")]
pub fn py_legendre(n: usize) -> PyPolynomial {
    legendre::<f64>(n).into()
}
