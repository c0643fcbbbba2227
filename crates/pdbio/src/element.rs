//! element symbols and standard atomic weights

pub const NUMBER_TO_SYMBOL: [&str; 55] = [
    "X", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn",
    "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb",
    "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe",
];

/// IUPAC conventional atomic weights, indexed by atomic number
pub const WEIGHTS: [f64; 55] = [
    0.0, 1.008, 4.0026, 6.94, 9.0122, 10.81, 12.011, 14.007, 15.999, 18.998,
    20.180, 22.990, 24.305, 26.982, 28.085, 30.974, 32.06, 35.45, 39.948,
    39.098, 40.078, 44.956, 47.867, 50.942, 51.996, 54.938, 55.845, 58.933,
    58.693, 63.546, 65.38, 69.723, 72.630, 74.922, 78.971, 79.904, 83.798,
    85.468, 87.62, 88.906, 91.224, 92.906, 95.95, 98.0, 101.07, 102.91,
    106.42, 107.87, 112.41, 114.82, 118.71, 121.76, 127.60, 126.90, 131.29,
];

pub const DEUTERIUM: f64 = 2.014;

fn titlecase(s: &str) -> String {
    let mut cs = s.chars();
    match cs.next() {
        Some(c) => c
            .to_uppercase()
            .chain(cs.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// look up an element symbol, ignoring case, and return its atomic number
/// and, for deuterium, the isotope weight
pub fn lookup(symbol: &str) -> Option<(usize, Option<f64>)> {
    let sym = titlecase(symbol.trim());
    if sym == "D" {
        return Some((1, Some(DEUTERIUM)));
    }
    NUMBER_TO_SYMBOL
        .iter()
        .skip(1)
        .position(|&s| s == sym)
        .map(|i| (i + 1, None))
}

/// residue names of the standard amino acids, none of which contain an element
/// other than hydrogen whose symbol starts with H or D
const AMINO_ACIDS: [&str; 22] = [
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "SEC", "PYL",
];

/// infer the element from the four-column atom name field of an atom in
/// residue `res_name`. names of one-letter elements start in the second
/// column (" CA " is a carbon), while two-letter elements start in the first
/// ("CA  " is calcium). four-character names starting with H are hydrogens
/// ("HG11"), as are names starting with H in amino acids ("HE1 "), and a
/// leading digit is a hydrogen counter ("1HB ")
pub fn infer(name: &str, res_name: &str) -> Option<(usize, Option<f64>)> {
    let first = name.chars().next()?;
    if first == ' ' || first.is_ascii_digit() {
        let c = name.chars().nth(1).filter(char::is_ascii_alphabetic)?;
        return lookup(&c.to_string());
    }
    if (first == 'H' || first == 'D')
        && (name.trim_end().len() == 4
            || AMINO_ACIDS.contains(&res_name.trim()))
    {
        return lookup(&first.to_string());
    }
    let two: String = name.chars().take(2).collect();
    if two.chars().all(|c| c.is_ascii_alphabetic()) {
        if let Some(got) = lookup(&two) {
            return Some(got);
        }
    }
    lookup(&first.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titlecase() {
        assert_eq!(super::titlecase("AL"), "Al");
        assert_eq!(super::titlecase("Al"), "Al");
        assert_eq!(super::titlecase("al"), "Al");
        assert_eq!(super::titlecase("H"), "H");
        assert_eq!(super::titlecase("h"), "H");
    }

    #[test]
    fn symbols() {
        assert_eq!(lookup("C"), Some((6, None)));
        assert_eq!(lookup("FE"), Some((26, None)));
        assert_eq!(lookup(" o"), Some((8, None)));
        assert_eq!(lookup("D"), Some((1, Some(DEUTERIUM))));
        assert_eq!(lookup("X"), None);
        assert_eq!(lookup("Qq"), None);
    }

    #[test]
    fn names() {
        assert_eq!(infer(" CA ", "ALA"), Some((6, None)));
        assert_eq!(infer("CA  ", "CA"), Some((20, None)));
        assert_eq!(infer(" N  ", "GLY"), Some((7, None)));
        assert_eq!(infer("HG11", "VAL"), Some((1, None)));
        assert_eq!(infer("1HB ", "ALA"), Some((1, None)));
        assert_eq!(infer("OXT ", "GLY"), Some((8, None)));
        assert_eq!(infer("FE  ", "HEM"), Some((26, None)));
        assert_eq!(infer(" 1  ", "UNK"), None);
    }

    #[test]
    fn hydrogen_names() {
        // left-justified hydrogens in amino acids
        assert_eq!(infer("HE1 ", "HIS"), Some((1, None)));
        assert_eq!(infer("HE2 ", "PHE"), Some((1, None)));
        assert_eq!(infer("HG  ", "SER"), Some((1, None)));
        assert_eq!(infer("HD1 ", "HIS"), Some((1, None)));
        assert_eq!(infer("DE1 ", "TRP"), Some((1, Some(DEUTERIUM))));
        // outside of amino acids a two-letter element wins
        assert_eq!(infer("HE  ", "HE"), Some((2, None)));
        assert_eq!(infer("HE1 ", "LIG"), Some((2, None)));
    }
}
