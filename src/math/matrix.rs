use rand::Rng;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a matrix with draws from the open interval (-bound, bound).
    ///
    /// Draws are taken column by column (every row of column 0, then column 1,
    /// ...), so a seeded generator always produces the same weights for the
    /// same shape.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, bound: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for j in 0..cols {
            for i in 0..rows {
                res.data[i][j] = Matrix::sample_open_interval(rng, bound);
            }
        }

        res
    }

    /// `2(u - 0.5)·bound` for `u` in [0, 1) covers [-bound, bound); the closed
    /// end is redrawn.
    fn sample_open_interval<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
        loop {
            let x = 2.0 * (rng.gen::<f64>() - 0.5) * bound;
            if x > -bound && x < bound {
                return x;
            }
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    /// True when every row has `cols` entries and there are `rows` rows.
    pub fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows == rows
            && self.cols == cols
            && self.data.len() == rows
            && self.data.iter().all(|row| row.len() == cols)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|x| x.is_finite()))
    }

    /// Clamps every entry into `[-limit, limit]` in place.
    pub fn clamp_symmetric(&mut self, limit: f64) {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x = x.clamp(-limit, limit);
            }
        }
    }

    pub fn max_abs(&self) -> f64 {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .fold(0.0, |acc: f64, x| acc.max(x.abs()))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
