use crate::error;
use crate::lang::{Error, Slot};

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Scalars live in fixed slots. Arrays exist only for the plain
/// letters and only after `DIM`.

#[derive(Debug)]
pub struct Var {
    vars: Vec<f64>,
    arrays: Vec<Option<Vec<f64>>>,
    max_array_len: usize,
}

impl Default for Var {
    fn default() -> Var {
        Var::new(super::Limits::default().max_array_len)
    }
}

impl Var {
    pub fn new(max_array_len: usize) -> Var {
        Var {
            vars: vec![0.0; Slot::COUNT],
            arrays: vec![None; 26],
            max_array_len,
        }
    }

    pub fn clear(&mut self) {
        self.vars.iter_mut().for_each(|v| *v = 0.0);
        self.arrays.iter_mut().for_each(|a| *a = None);
    }

    pub fn fetch(&self, slot: Slot) -> f64 {
        self.vars[slot.index()]
    }

    pub fn store(&mut self, slot: Slot, value: f64) {
        self.vars[slot.index()] = value;
    }

    /// Allocates `bound + 1` zeroed cells, discarding any previous array.
    pub fn dimension_array(&mut self, letter: char, bound: f64) -> Result<()> {
        let id = Var::array_id(letter)?;
        let bound = bound as i64;
        let len = if bound < 0 { 1 } else { bound as u64 + 1 };
        if len > self.max_array_len as u64 {
            return Err(error!(OutOfMemory; &format!("ARRAY {} TOO LARGE", letter)));
        }
        self.arrays[id] = Some(vec![0.0; len as usize]);
        Ok(())
    }

    pub fn fetch_array(&self, letter: char, index: f64) -> Result<f64> {
        let id = Var::array_id(letter)?;
        let array = match &self.arrays[id] {
            Some(array) => array,
            None => return Err(Var::undimensioned(letter)),
        };
        match Var::cell(array.len(), index) {
            Some(cell) => Ok(array[cell]),
            None => Err(Var::out_of_bounds(letter, index)),
        }
    }

    pub fn store_array(&mut self, letter: char, index: f64, value: f64) -> Result<()> {
        let id = Var::array_id(letter)?;
        let array = match &mut self.arrays[id] {
            Some(array) => array,
            None => return Err(Var::undimensioned(letter)),
        };
        match Var::cell(array.len(), index) {
            Some(cell) => {
                array[cell] = value;
                Ok(())
            }
            None => Err(Var::out_of_bounds(letter, index)),
        }
    }

    fn array_id(letter: char) -> Result<usize> {
        if letter.is_ascii_uppercase() {
            Ok((letter as u8 - b'A') as usize)
        } else {
            Err(error!(InternalError; "BAD ARRAY NAME"))
        }
    }

    fn cell(len: usize, index: f64) -> Option<usize> {
        let index = index as i64;
        if index < 0 || index as u64 >= len as u64 {
            None
        } else {
            Some(index as usize)
        }
    }

    fn undimensioned(letter: char) -> Error {
        error!(UndimensionedArray; &format!("ARRAY {} NOT DIMENSIONED", letter))
    }

    fn out_of_bounds(letter: char, index: f64) -> Error {
        error!(SubscriptOutOfRange; &format!("ARRAY {} INDEX {} OUT OF BOUNDS", letter, index as i64))
    }
}
