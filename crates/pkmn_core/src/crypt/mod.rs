//! Creature record obfuscation: block shuffling plus an XOR mask.

pub mod pk3;
pub mod pk4;

/// Block permutations in canonical order. `BLOCK_ORDERS[sel][physical]` is the
/// logical block (Growth=0, Attacks=1, EVs=2, Misc=3) stored at that position.
#[rustfmt::skip]
pub const BLOCK_ORDERS: [[u8; 4]; 24] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3], [0, 2, 3, 1], [0, 3, 1, 2], [0, 3, 2, 1],
    [1, 0, 2, 3], [1, 0, 3, 2], [1, 2, 0, 3], [1, 2, 3, 0], [1, 3, 0, 2], [1, 3, 2, 0],
    [2, 0, 1, 3], [2, 0, 3, 1], [2, 1, 0, 3], [2, 1, 3, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [3, 1, 0, 2], [3, 1, 2, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

/// Physical order to canonical order.
pub(crate) fn unshuffle(data: &mut [u8], block: usize, order: &[u8; 4]) {
    let src = data.to_vec();
    for (physical, &logical) in order.iter().enumerate() {
        let logical = usize::from(logical);
        data[logical * block..(logical + 1) * block]
            .copy_from_slice(&src[physical * block..(physical + 1) * block]);
    }
}

/// Canonical order to physical order.
pub(crate) fn shuffle(data: &mut [u8], block: usize, order: &[u8; 4]) {
    let src = data.to_vec();
    for (physical, &logical) in order.iter().enumerate() {
        let logical = usize::from(logical);
        data[physical * block..(physical + 1) * block]
            .copy_from_slice(&src[logical * block..(logical + 1) * block]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_table_holds_every_permutation_once() {
        let mut seen = std::collections::HashSet::new();
        for order in BLOCK_ORDERS {
            let mut sorted = order;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3]);
            assert!(seen.insert(order));
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn shuffle_places_logical_blocks_at_their_physical_slot() {
        // Selector 9 stores Attacks, EVs, Misc, Growth.
        let mut data = [0u8, 1, 2, 3];
        shuffle(&mut data, 1, &BLOCK_ORDERS[9]);
        assert_eq!(data, [1, 2, 3, 0]);
        unshuffle(&mut data, 1, &BLOCK_ORDERS[9]);
        assert_eq!(data, [0, 1, 2, 3]);
    }
}
