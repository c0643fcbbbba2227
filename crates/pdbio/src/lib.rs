//! Minimal reading and writing of PDB files. Only the fields needed to weigh
//! and move atoms are parsed; every other record, and every other column of
//! the atom records, is written back out exactly as it was read.

use std::{
    error::Error,
    fmt::Display,
    fs::{read_to_string, write},
    io,
    ops::Range,
    path::Path,
    str::FromStr,
};

pub mod element;


/// the shortest ATOM/HETATM record that still contains the z coordinate
const MIN_ATOM_LEN: usize = 54;

#[derive(Debug)]
pub enum PdbError {
    Io(io::Error),
    Parse { line: usize, msg: String },
    UnknownElement { line: usize, name: String },
    LengthMismatch { atoms: usize, positions: usize },
    /// `value` cannot be written in the 8.3 coordinate columns of the atom
    /// at index `atom`
    CoordinateOverflow { atom: usize, value: f64 },
}

impl PdbError {
    fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }
}

impl Display for PdbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdbError::Io(e) => write!(f, "{e}"),
            PdbError::Parse { line, msg } => write!(f, "line {line}: {msg}"),
            PdbError::UnknownElement { line, name } => write!(
                f,
                "line {line}: failed to determine the element of atom `{name}`"
            ),
            PdbError::LengthMismatch { atoms, positions } => {
                write!(f, "{atoms} atoms but {positions} positions")
            }
            PdbError::CoordinateOverflow { atom, value } => write!(
                f,
                "coordinate {value} of atom {} does not fit in the PDB \
                 coordinate columns",
                atom + 1
            ),
        }
    }
}

impl Error for PdbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PdbError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PdbError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// An ATOM or HETATM record
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub name: String,
    pub res_name: String,
    pub chain: String,
    pub res_seq: String,
    pub i_code: String,
    pub atomic_number: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// overrides the standard atomic weight, used for deuterium
    pub weight: Option<f64>,
    /// the original record, used to reproduce the unparsed columns
    record: String,
}

/// return the trimmed columns `range` of `line`, using 0-based byte offsets
fn field(line: &str, range: Range<usize>) -> &str {
    line.get(range).unwrap_or("").trim()
}

impl Atom {
    /// parse an ATOM/HETATM record. `lineno` is only used for error messages
    fn parse(line: &str, lineno: usize) -> Result<Self, PdbError> {
        if !line.is_ascii() {
            return Err(PdbError::parse(lineno, "non-ASCII atom record"));
        }
        if line.len() < MIN_ATOM_LEN {
            return Err(PdbError::parse(
                lineno,
                "atom record too short to contain coordinates",
            ));
        }
        let coord = |range: Range<usize>, label: &str| {
            field(line, range).parse::<f64>().map_err(|e| {
                PdbError::parse(
                    lineno,
                    format!("invalid {label} coordinate: {e}"),
                )
            })
        };
        let x = coord(30..38, "x")?;
        let y = coord(38..46, "y")?;
        let z = coord(46..54, "z")?;

        let name = &line[12..16];
        let res_name = field(line, 17..20);
        let element = field(line, 76..78);
        let found = if element.is_empty() {
            element::infer(name, res_name)
        } else {
            element::lookup(element)
        };
        let Some((atomic_number, weight)) = found else {
            return Err(PdbError::UnknownElement {
                line: lineno,
                name: name.trim().to_owned(),
            });
        };

        Ok(Self {
            name: name.trim().to_owned(),
            res_name: res_name.to_owned(),
            chain: field(line, 21..22).to_owned(),
            res_seq: field(line, 22..26).to_owned(),
            i_code: field(line, 26..27).to_owned(),
            atomic_number,
            x,
            y,
            z,
            weight,
            record: line.to_owned(),
        })
    }

    pub fn coord(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(element::WEIGHTS[self.atomic_number])
    }

    pub fn label(&self) -> &str {
        element::NUMBER_TO_SYMBOL[self.atomic_number]
    }

    /// whether `self` and `other` belong to the same residue
    fn same_residue(&self, other: &Self) -> bool {
        self.chain == other.chain
            && self.res_seq == other.res_seq
            && self.i_code == other.i_code
            && self.res_name == other.res_name
    }
}

/// the width of each coordinate field
const COORD_WIDTH: usize = 8;

/// map values that round to zero onto 0.0 to avoid writing `-0.000`
fn clean_zero(x: f64) -> f64 {
    if (x * 1000.0).round() == 0.0 { 0.0 } else { x }
}

/// whether `x` can be written in the 8.3 coordinate format without widening
/// the field
fn coord_fits(x: f64) -> bool {
    x.is_finite() && format!("{:8.3}", clean_zero(x)).len() <= COORD_WIDTH
}

/// write `x` in the 8.3 coordinate format, without producing `-0.000`
fn write_coord(f: &mut std::fmt::Formatter<'_>, x: f64) -> std::fmt::Result {
    write!(f, "{:8.3}", clean_zero(x))
}

impl Display for Atom {
    /// reproduce the original record with the current coordinates spliced
    /// into columns 31-54
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.record[..30])?;
        write_coord(f, self.x)?;
        write_coord(f, self.y)?;
        write_coord(f, self.z)?;
        write!(f, "{}", &self.record[MIN_ATOM_LEN..])
    }
}

/// A group of consecutive atoms sharing a chain, residue number, insertion
/// code, and residue name
#[derive(Clone, Debug, PartialEq)]
pub struct Residue {
    pub name: String,
    pub chain: String,
    pub seq: String,
    pub i_code: String,
    /// the indices of the residue's atoms in [Structure::atoms]
    pub atoms: Range<usize>,
}

#[derive(Clone, Debug, PartialEq)]
enum Line {
    Atom(usize),
    Other(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    lines: Vec<Line>,
}

impl FromStr for Structure {
    type Err = PdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Self::default();
        let mut models = 0;
        for (i, line) in s.lines().enumerate() {
            match line.get(..6) {
                Some("ATOM  " | "HETATM") => {
                    ret.atoms.push(Atom::parse(line, i + 1)?);
                    ret.lines.push(Line::Atom(ret.atoms.len() - 1));
                    continue;
                }
                Some("MODEL ") => models += 1,
                _ => {}
            }
            ret.lines.push(Line::Other(line.to_owned()));
        }
        if models > 1 {
            log::warn!(
                "found {models} models, all of them will be treated as a \
                 single structure"
            );
        }
        Ok(ret)
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            match line {
                Line::Atom(i) => writeln!(f, "{}", self.atoms[*i])?,
                Line::Other(s) => writeln!(f, "{s}")?,
            }
        }
        Ok(())
    }
}

impl Structure {
    /// read and parse the PDB file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PdbError> {
        let path = path.as_ref();
        let s = read_to_string(path).map_err(|e| {
            PdbError::Io(io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", path.display()),
            ))
        })?;
        let ret: Self = s.parse()?;
        log::debug!("read {} atoms from {}", ret.atoms.len(), path.display());
        Ok(ret)
    }

    /// write `self` to `path` in PDB format
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), PdbError> {
        let path = path.as_ref();
        write(path, self.to_string()).map_err(|e| {
            PdbError::Io(io::Error::new(
                e.kind(),
                format!("failed to write {}: {e}", path.display()),
            ))
        })
    }

    /// group the atoms in `self` into residues, in order
    pub fn residues(&self) -> Vec<Residue> {
        let mut ret: Vec<Residue> = Vec::new();
        for (i, atom) in self.atoms.iter().enumerate() {
            if let Some(last) = ret.last_mut() {
                if atom.same_residue(&self.atoms[last.atoms.start]) {
                    last.atoms.end = i + 1;
                    continue;
                }
            }
            ret.push(Residue {
                name: atom.res_name.clone(),
                chain: atom.chain.clone(),
                seq: atom.res_seq.clone(),
                i_code: atom.i_code.clone(),
                atoms: i..i + 1,
            });
        }
        ret
    }

    /// collect the masses of every atom, residue by residue
    pub fn masses(&self) -> Vec<f64> {
        self.residues()
            .into_iter()
            .flat_map(|r| self.atoms[r.atoms].iter().map(Atom::weight))
            .collect()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(Atom::coord).collect()
    }

    /// replace the coordinates of every atom with those in `positions`. the
    /// structure is left unchanged if any coordinate cannot be written in the
    /// PDB coordinate columns
    pub fn set_positions(
        &mut self,
        positions: &[[f64; 3]],
    ) -> Result<(), PdbError> {
        if positions.len() != self.atoms.len() {
            return Err(PdbError::LengthMismatch {
                atoms: self.atoms.len(),
                positions: positions.len(),
            });
        }
        for (i, p) in positions.iter().enumerate() {
            if let Some(&value) = p.iter().find(|&&x| !coord_fits(x)) {
                return Err(PdbError::CoordinateOverflow { atom: i, value });
            }
        }
        for (atom, &[x, y, z]) in self.atoms.iter_mut().zip(positions) {
            atom.x = x;
            atom.y = y;
            atom.z = z;
        }
        Ok(())
    }
}
