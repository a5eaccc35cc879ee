use crate::core::models::bond::{Bond, BondOrder};

/// Width shared by bonded and non-bonded edge feature vectors.
pub const EDGE_FEATURE_WIDTH: usize = 21;

const ORDER_OFFSET: usize = 7;
const LENGTH_OFFSET: usize = 11;
const RING_OFFSET: usize = 13;

/// The bonded block ends here; non-bonded values occupy the tail that the
/// bonded encoding reserves as zeros.
const NON_BONDED_OFFSET: usize = 15;

/// Typical bond length by order, in Angstrom. A fixed approximation table,
/// not a measurement of the conformer.
pub fn typical_bond_length(order: BondOrder) -> f64 {
    match order {
        BondOrder::Single => 1.0,
        BondOrder::Double => 1.4,
        BondOrder::Triple => 1.8,
        BondOrder::Aromatic => 1.5,
    }
}

/// Feature vector of a bonded edge: direction one-hot (7) + order one-hot
/// (4) + [typical length, length squared] + ring one-hot (2) + 6 reserved
/// zero slots. Both half-edges of a bond share one vector.
pub fn encode_bonded(bond: &Bond) -> Vec<f64> {
    let mut features = vec![0.0; EDGE_FEATURE_WIDTH];
    features[bond.direction.encoding_index()] = 1.0;
    features[ORDER_OFFSET + bond.order.encoding_index()] = 1.0;
    let length = typical_bond_length(bond.order);
    features[LENGTH_OFFSET] = length;
    features[LENGTH_OFFSET + 1] = length * length;
    features[RING_OFFSET + bond.in_ring as usize] = 1.0;
    features
}

/// Feature vector of a cutoff non-bonded edge: 15 zero slots, then the two
/// partial charges, their product, and the inverse-distance ladder
/// [1/d, 1/d^6, 1/d^12]. `dist` must be positive; coincident pairs are
/// rejected by the builder before encoding.
pub fn encode_non_bonded(charge_i: f64, charge_j: f64, dist: f64) -> Vec<f64> {
    let mut features = vec![0.0; EDGE_FEATURE_WIDTH];
    features[NON_BONDED_OFFSET] = charge_i;
    features[NON_BONDED_OFFSET + 1] = charge_j;
    features[NON_BONDED_OFFSET + 2] = charge_i * charge_j;
    features[NON_BONDED_OFFSET + 3] = 1.0 / dist;
    features[NON_BONDED_OFFSET + 4] = 1.0 / dist.powi(6);
    features[NON_BONDED_OFFSET + 5] = 1.0 / dist.powi(12);
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondDirection;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn bonded_encoding_has_shared_width() {
        let bond = Bond::new(0, 1, BondOrder::Single);
        assert_eq!(encode_bonded(&bond).len(), EDGE_FEATURE_WIDTH);
        assert_eq!(encode_non_bonded(0.1, -0.1, 2.0).len(), EDGE_FEATURE_WIDTH);
    }

    #[test]
    fn bonded_encoding_sets_direction_order_length_ring() {
        let bond = Bond::new(0, 1, BondOrder::Double)
            .with_direction(BondDirection::BeginWedge)
            .with_ring_flag(true);
        let features = encode_bonded(&bond);

        assert_eq!(features[1], 1.0); // BeginWedge slot
        assert_eq!(features[ORDER_OFFSET + 1], 1.0); // Double slot
        assert!(f64_approx_equal(features[LENGTH_OFFSET], 1.4));
        assert!(f64_approx_equal(features[LENGTH_OFFSET + 1], 1.96));
        assert_eq!(features[RING_OFFSET], 0.0);
        assert_eq!(features[RING_OFFSET + 1], 1.0);
    }

    #[test]
    fn bonded_encoding_reserves_zero_tail() {
        let bond = Bond::new(2, 3, BondOrder::Aromatic);
        let features = encode_bonded(&bond);
        assert!(features[NON_BONDED_OFFSET..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn aromatic_order_occupies_its_own_slot() {
        let aromatic = encode_bonded(&Bond::new(0, 1, BondOrder::Aromatic));
        let single = encode_bonded(&Bond::new(0, 1, BondOrder::Single));
        assert_eq!(aromatic[ORDER_OFFSET + 3], 1.0);
        assert_eq!(aromatic[ORDER_OFFSET], 0.0);
        assert_eq!(single[ORDER_OFFSET], 1.0);
    }

    #[test]
    fn typical_lengths_follow_the_approximation_table() {
        assert!(f64_approx_equal(typical_bond_length(BondOrder::Single), 1.0));
        assert!(f64_approx_equal(typical_bond_length(BondOrder::Double), 1.4));
        assert!(f64_approx_equal(typical_bond_length(BondOrder::Triple), 1.8));
        assert!(f64_approx_equal(
            typical_bond_length(BondOrder::Aromatic),
            1.5
        ));
    }

    #[test]
    fn non_bonded_encoding_pads_bonded_block_with_zeros() {
        let features = encode_non_bonded(0.2, -0.3, 2.0);
        assert!(features[..NON_BONDED_OFFSET].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn non_bonded_encoding_carries_charges_and_inverse_distances() {
        let features = encode_non_bonded(0.2, -0.3, 2.0);
        assert!(f64_approx_equal(features[15], 0.2));
        assert!(f64_approx_equal(features[16], -0.3));
        assert!(f64_approx_equal(features[17], -0.06));
        assert!(f64_approx_equal(features[18], 0.5));
        assert!(f64_approx_equal(features[19], 1.0 / 64.0));
        assert!(f64_approx_equal(features[20], 1.0 / 4096.0));
    }
}
