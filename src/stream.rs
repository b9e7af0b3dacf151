//! Delimited text output and token-stream input for the dense containers.
//!
//! `Display` uses a tab delimiter, breaks between rows, and appends the
//! shape annotation to the last line; the `write_*` functions expose the
//! delimiter and allow the unformatted flat form. Reading fills existing
//! storage token by token and never reshapes.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use crate::capability::Sequence;
use crate::matrix::Matrix;
use crate::subset::Subset;
use crate::volume::Volume;

/// Writes a matrix as delimited text. Formatted output breaks between rows
/// and appends a ` [R x C]` annotation to the last row's line; unformatted
/// output joins every element with the delimiter only.
pub fn write_matrix<W, T>(w: &mut W, m: &Matrix<T>, delimiter: char, formatted: bool) -> io::Result<()>
where
    W: Write,
    T: fmt::Display,
{
    for r in 0..m.rows() {
        if r > 0 {
            if formatted {
                writeln!(w)?;
            } else {
                write!(w, "{}", delimiter)?;
            }
        }
        for c in 0..m.cols() {
            if c > 0 {
                write!(w, "{}", delimiter)?;
            }
            write!(w, "{}", m[(r, c)])?;
        }
    }
    if formatted {
        write!(w, " [{} x {}]", m.rows(), m.cols())?;
    }
    Ok(())
}

/// Writes a volume as delimited text, layer by layer. The formatted
/// annotation is ` [L x R x C]`.
pub fn write_volume<W, T>(w: &mut W, v: &Volume<T>, delimiter: char, formatted: bool) -> io::Result<()>
where
    W: Write,
    T: fmt::Display,
{
    let mut first_row = true;
    for l in 0..v.layers() {
        for r in 0..v.rows() {
            if !first_row {
                if formatted {
                    writeln!(w)?;
                } else {
                    write!(w, "{}", delimiter)?;
                }
            }
            first_row = false;
            for c in 0..v.cols() {
                if c > 0 {
                    write!(w, "{}", delimiter)?;
                }
                write!(w, "{}", v[(l, r, c)])?;
            }
        }
    }
    if formatted {
        write!(w, " [{} x {} x {}]", v.layers(), v.rows(), v.cols())?;
    }
    Ok(())
}

/// Writes the elements of a view joined by the delimiter. Formatted output
/// closes with a ` [N]` length annotation on its own line.
pub fn write_subset<W, C>(w: &mut W, view: &Subset<'_, C>, delimiter: char, formatted: bool) -> io::Result<()>
where
    W: Write,
    C: Sequence,
    C::Elem: fmt::Display,
{
    for (n, v) in view.iter().enumerate() {
        if n > 0 {
            write!(w, "{}", delimiter)?;
        }
        write!(w, "{}", v)?;
    }
    if formatted {
        write!(w, "\n [{}]", view.len())?;
    }
    Ok(())
}

/// Fills an existing matrix from a token stream, flat order, without
/// reshaping. Tokens are separated by the delimiter or whitespace. Running
/// out of tokens or failing to parse one is an error; the matrix content is
/// unspecified after a failure.
pub fn read_matrix<R, T>(reader: &mut R, m: &mut Matrix<T>, delimiter: char) -> Result<()>
where
    R: BufRead,
    T: FromStr,
{
    let needed = m.size();
    let mut filled = 0;
    for line in reader.lines() {
        let line = line?;
        for token in line
            .split(|ch: char| ch == delimiter || ch.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            if filled == needed {
                return Ok(());
            }
            m[filled] = token
                .parse::<T>()
                .map_err(|_| anyhow!("could not parse value '{}'", token))?;
            filled += 1;
        }
    }
    if filled < needed {
        bail!("expected {} values, found {}", needed, filled);
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols() {
                if c > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self[(r, c)])?;
            }
        }
        write!(f, " [{} x {}]", self.rows(), self.cols())
    }
}

impl<T: fmt::Display> fmt::Display for Volume<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in 0..self.layers() {
            for r in 0..self.rows() {
                if l > 0 || r > 0 {
                    writeln!(f)?;
                }
                for c in 0..self.cols() {
                    if c > 0 {
                        write!(f, "\t")?;
                    }
                    write!(f, "{}", self[(l, r, c)])?;
                }
            }
        }
        write!(f, " [{} x {} x {}]", self.layers(), self.rows(), self.cols())
    }
}

impl<'a, C> fmt::Display for Subset<'a, C>
where
    C: Sequence,
    C::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, v) in self.iter().enumerate() {
            if n > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "\n [{}]", self.len())
    }
}
