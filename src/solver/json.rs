#![allow(non_snake_case)]

use crate::{
    algebra::*,
    solver::{DirectSolver, DirectSolverSettings},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// A linear system $Ax = b$ together with solver settings, in the
/// form read from and written to JSON files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub struct JsonLinearSystem<T: FloatT> {
    pub A: Matrix<T>,
    pub b: Vec<T>,
    pub settings: DirectSolverSettings<T>,
}

impl<T> JsonLinearSystem<T>
where
    T: FloatT + Serialize + DeserializeOwned,
{
    pub fn new(A: Matrix<T>, b: Vec<T>, settings: DirectSolverSettings<T>) -> Self {
        Self { A, b, settings }
    }

    /// Solver configured with this system's settings.
    pub fn solver(&self) -> DirectSolver<T> {
        DirectSolver::new(self.settings.clone())
    }

    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(&self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let system = serde_json::from_str(&buffer)?;
        Ok(system)
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    #[rustfmt::skip]
    let A = Matrix::from(
        &[[ 4., -2.,  2.],
          [-2., 10., -7.],
          [ 2., -7., 30.]]);
    let b = vec![4., 1., 25.];

    let system = JsonLinearSystem::new(A, b, DirectSolverSettings::default());
    let solution = system.solver().solve(&system.A, &system.b).unwrap();

    // write the system to a file
    let mut file = tempfile::tempfile().unwrap();
    system.write_to_file(&mut file).unwrap();

    // read the system back from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let system2 = JsonLinearSystem::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(system, system2);

    let solution2 = system2.solver().solve(&system2.A, &system2.b).unwrap();
    assert_eq!(solution.x, solution2.x);
    assert_eq!(solution.method, solution2.method);
}
