//! Delimited-file persistence for [`Matrix`].

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use log::{debug, warn};
use num_traits::Zero;

use crate::matrix::Matrix;

impl<T> Matrix<T> {
    /// Loads a delimited text file, skipping the first `skip` records.
    ///
    /// The first data row fixes the column count. Shorter rows are padded
    /// with zeros, as are empty or unparseable fields; a row wider than the
    /// first is an error. `sep` is the field delimiter byte.
    pub fn load<P: AsRef<Path>>(path: P, sep: u8, skip: usize) -> Result<Matrix<T>>
    where
        T: FromStr + Zero + Clone,
    {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(sep)
            .from_path(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        let mut m = Matrix::new();
        for (n, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("could not read record {} of {}", n, path.display()))?;
            if n < skip {
                continue;
            }
            let mut row: Vec<T> = record
                .iter()
                .map(|field| field.trim().parse::<T>().unwrap_or_else(|_| T::zero()))
                .collect();
            if m.cols() > 0 {
                if row.len() > m.cols() {
                    bail!(
                        "record {} of {} has {} fields, expected {}",
                        n,
                        path.display(),
                        row.len(),
                        m.cols()
                    );
                }
                if row.len() < m.cols() {
                    warn!(
                        "padding record {} of {} from {} to {} fields",
                        n,
                        path.display(),
                        row.len(),
                        m.cols()
                    );
                    row.resize(m.cols(), T::zero());
                }
            }
            m.push_row(&row);
        }
        debug!(
            "loaded {} x {} matrix from {}",
            m.rows(),
            m.cols(),
            path.display()
        );
        Ok(m)
    }

    /// Writes the matrix as delimited text: an optional header line, one
    /// line per row, and a final trailing newline.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
        header: &[String],
        sep: char,
        row_sep: char,
    ) -> Result<()>
    where
        T: fmt::Display,
    {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("could not create {}", path.display()))?;
        let mut w = BufWriter::new(file);
        if !header.is_empty() {
            write!(w, "{}{}", header.join(sep.to_string().as_str()), row_sep)?;
        }
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if c > 0 {
                    write!(w, "{}", sep)?;
                }
                write!(w, "{}", self[(r, c)])?;
            }
            write!(w, "{}", row_sep)?;
        }
        writeln!(w)?;
        w.flush()?;
        debug!(
            "saved {} x {} matrix to {}",
            self.rows(),
            self.cols(),
            path.display()
        );
        Ok(())
    }
}
