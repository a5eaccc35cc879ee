use phf::{Map, phf_map};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),

    #[error("unknown descriptor scheme '{0}'")]
    UnknownScheme(String),
}

/// External chemistry collaborator: maps an element symbol and a scheme key
/// to a fixed-width numeric descriptor.
///
/// Every symbol must produce the same width under a given scheme; the
/// atom-bond builder verifies this when assembling the node feature matrix.
pub trait ChemistryOracle {
    fn atom_descriptor(&self, element: &str, scheme: &str) -> Result<Vec<f64>, DescriptorError>;

    /// Descriptor width of a scheme, without resolving a symbol.
    fn descriptor_width(&self, scheme: &str) -> Result<usize, DescriptorError>;
}

struct ElementProperties {
    atomic_number: f64,
    period: f64,
    group: f64,
    electronegativity: f64,
    covalent_radius: f64,
    ionization_energy: f64,
    electron_affinity: f64,
    atomic_mass: f64,
}

impl ElementProperties {
    fn descriptor(&self) -> Vec<f64> {
        vec![
            self.atomic_number,
            self.period,
            self.group,
            self.electronegativity,
            self.covalent_radius,
            self.ionization_energy,
            self.electron_affinity,
            self.atomic_mass,
        ]
    }
}

const BASIC_WIDTH: usize = 8;

/// One-hot ordering, by atomic number. Also the coverage of the property
/// table below.
const ELEMENT_ORDER: [&str; 20] = [
    "H", "Li", "B", "C", "N", "O", "F", "Na", "Mg", "Si", "P", "S", "Cl", "K", "Ca", "Fe", "Zn",
    "Se", "Br", "I",
];

static ELEMENT_PROPERTIES: Map<&'static str, ElementProperties> = phf_map! {
    "H" => ElementProperties { atomic_number: 1.0, period: 1.0, group: 1.0, electronegativity: 2.20, covalent_radius: 0.31, ionization_energy: 13.598, electron_affinity: 0.754, atomic_mass: 1.008 },
    "Li" => ElementProperties { atomic_number: 3.0, period: 2.0, group: 1.0, electronegativity: 0.98, covalent_radius: 1.28, ionization_energy: 5.392, electron_affinity: 0.618, atomic_mass: 6.94 },
    "B" => ElementProperties { atomic_number: 5.0, period: 2.0, group: 13.0, electronegativity: 2.04, covalent_radius: 0.84, ionization_energy: 8.298, electron_affinity: 0.277, atomic_mass: 10.81 },
    "C" => ElementProperties { atomic_number: 6.0, period: 2.0, group: 14.0, electronegativity: 2.55, covalent_radius: 0.76, ionization_energy: 11.260, electron_affinity: 1.262, atomic_mass: 12.011 },
    "N" => ElementProperties { atomic_number: 7.0, period: 2.0, group: 15.0, electronegativity: 3.04, covalent_radius: 0.71, ionization_energy: 14.534, electron_affinity: -0.07, atomic_mass: 14.007 },
    "O" => ElementProperties { atomic_number: 8.0, period: 2.0, group: 16.0, electronegativity: 3.44, covalent_radius: 0.66, ionization_energy: 13.618, electron_affinity: 1.461, atomic_mass: 15.999 },
    "F" => ElementProperties { atomic_number: 9.0, period: 2.0, group: 17.0, electronegativity: 3.98, covalent_radius: 0.57, ionization_energy: 17.423, electron_affinity: 3.401, atomic_mass: 18.998 },
    "Na" => ElementProperties { atomic_number: 11.0, period: 3.0, group: 1.0, electronegativity: 0.93, covalent_radius: 1.66, ionization_energy: 5.139, electron_affinity: 0.548, atomic_mass: 22.990 },
    "Mg" => ElementProperties { atomic_number: 12.0, period: 3.0, group: 2.0, electronegativity: 1.31, covalent_radius: 1.41, ionization_energy: 7.646, electron_affinity: 0.0, atomic_mass: 24.305 },
    "Si" => ElementProperties { atomic_number: 14.0, period: 3.0, group: 14.0, electronegativity: 1.90, covalent_radius: 1.11, ionization_energy: 8.152, electron_affinity: 1.390, atomic_mass: 28.085 },
    "P" => ElementProperties { atomic_number: 15.0, period: 3.0, group: 15.0, electronegativity: 2.19, covalent_radius: 1.07, ionization_energy: 10.487, electron_affinity: 0.746, atomic_mass: 30.974 },
    "S" => ElementProperties { atomic_number: 16.0, period: 3.0, group: 16.0, electronegativity: 2.58, covalent_radius: 1.05, ionization_energy: 10.360, electron_affinity: 2.077, atomic_mass: 32.06 },
    "Cl" => ElementProperties { atomic_number: 17.0, period: 3.0, group: 17.0, electronegativity: 3.16, covalent_radius: 1.02, ionization_energy: 12.968, electron_affinity: 3.613, atomic_mass: 35.45 },
    "K" => ElementProperties { atomic_number: 19.0, period: 4.0, group: 1.0, electronegativity: 0.82, covalent_radius: 2.03, ionization_energy: 4.341, electron_affinity: 0.501, atomic_mass: 39.098 },
    "Ca" => ElementProperties { atomic_number: 20.0, period: 4.0, group: 2.0, electronegativity: 1.00, covalent_radius: 1.76, ionization_energy: 6.113, electron_affinity: 0.025, atomic_mass: 40.078 },
    "Fe" => ElementProperties { atomic_number: 26.0, period: 4.0, group: 8.0, electronegativity: 1.83, covalent_radius: 1.32, ionization_energy: 7.902, electron_affinity: 0.151, atomic_mass: 55.845 },
    "Zn" => ElementProperties { atomic_number: 30.0, period: 4.0, group: 12.0, electronegativity: 1.65, covalent_radius: 1.22, ionization_energy: 9.394, electron_affinity: 0.0, atomic_mass: 65.38 },
    "Se" => ElementProperties { atomic_number: 34.0, period: 4.0, group: 16.0, electronegativity: 2.55, covalent_radius: 1.20, ionization_energy: 9.752, electron_affinity: 2.021, atomic_mass: 78.971 },
    "Br" => ElementProperties { atomic_number: 35.0, period: 4.0, group: 17.0, electronegativity: 2.96, covalent_radius: 1.20, ionization_energy: 11.814, electron_affinity: 3.364, atomic_mass: 79.904 },
    "I" => ElementProperties { atomic_number: 53.0, period: 5.0, group: 17.0, electronegativity: 2.66, covalent_radius: 1.39, ionization_energy: 10.451, electron_affinity: 3.059, atomic_mass: 126.904 },
};

/// Built-in chemistry oracle backed by a compile-time element table.
///
/// Schemes:
/// - `"basic"`: 8 numeric element properties (atomic number, period, group,
///   Pauling electronegativity, covalent radius, first ionization energy,
///   electron affinity, atomic mass).
/// - `"one_hot"`: one-hot over the supported element list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementPropertyOracle;

impl ElementPropertyOracle {
    pub fn new() -> Self {
        Self
    }
}

impl ChemistryOracle for ElementPropertyOracle {
    fn atom_descriptor(&self, element: &str, scheme: &str) -> Result<Vec<f64>, DescriptorError> {
        match scheme {
            "basic" => ELEMENT_PROPERTIES
                .get(element)
                .map(ElementProperties::descriptor)
                .ok_or_else(|| DescriptorError::UnknownElement(element.to_string())),
            "one_hot" => {
                let slot = ELEMENT_ORDER
                    .iter()
                    .position(|&symbol| symbol == element)
                    .ok_or_else(|| DescriptorError::UnknownElement(element.to_string()))?;
                let mut descriptor = vec![0.0; ELEMENT_ORDER.len()];
                descriptor[slot] = 1.0;
                Ok(descriptor)
            }
            _ => Err(DescriptorError::UnknownScheme(scheme.to_string())),
        }
    }

    fn descriptor_width(&self, scheme: &str) -> Result<usize, DescriptorError> {
        match scheme {
            "basic" => Ok(BASIC_WIDTH),
            "one_hot" => Ok(ELEMENT_ORDER.len()),
            _ => Err(DescriptorError::UnknownScheme(scheme.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_descriptor_has_declared_width_for_every_element() {
        let oracle = ElementPropertyOracle::new();
        let width = oracle.descriptor_width("basic").unwrap();
        for symbol in ELEMENT_ORDER {
            assert_eq!(oracle.atom_descriptor(symbol, "basic").unwrap().len(), width);
        }
    }

    #[test]
    fn basic_descriptor_leads_with_atomic_number() {
        let oracle = ElementPropertyOracle::new();
        assert_eq!(oracle.atom_descriptor("C", "basic").unwrap()[0], 6.0);
        assert_eq!(oracle.atom_descriptor("H", "basic").unwrap()[0], 1.0);
    }

    #[test]
    fn one_hot_descriptor_marks_exactly_one_slot() {
        let oracle = ElementPropertyOracle::new();
        let descriptor = oracle.atom_descriptor("N", "one_hot").unwrap();
        assert_eq!(descriptor.iter().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(descriptor.iter().filter(|&&v| v == 0.0).count(), descriptor.len() - 1);
    }

    #[test]
    fn unknown_element_is_reported() {
        let oracle = ElementPropertyOracle::new();
        assert_eq!(
            oracle.atom_descriptor("Xx", "basic"),
            Err(DescriptorError::UnknownElement("Xx".to_string()))
        );
    }

    #[test]
    fn unknown_scheme_is_reported() {
        let oracle = ElementPropertyOracle::new();
        assert_eq!(
            oracle.atom_descriptor("C", "cgcnn"),
            Err(DescriptorError::UnknownScheme("cgcnn".to_string()))
        );
        assert!(oracle.descriptor_width("cgcnn").is_err());
    }
}
