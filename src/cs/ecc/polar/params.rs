//! Validated, immutable polar code parameters.

use super::bit_reverse::bit_reverse;
use crate::cs::ecc::Result;
use crate::error::Error;
use log::{debug, warn};
use std::fmt::{Display, Formatter};

/// Structural description of a polar code shared by its encoder and decoder.
///
/// Construction validates every invariant up front; once built the value is
/// never mutated, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParameters {
    /// Codeword length (N), a power of 2
    block_size: usize,
    /// log2(N)
    block_power: u32,
    /// Information bit count (K)
    num_info_bits: usize,
    /// Frozen positions in caller order, N - K entries
    frozen_bit_positions: Vec<usize>,
    /// Value of each frozen position, zero-padded to the positions' length
    frozen_bit_values: Vec<u8>,
    /// Complement of the frozen positions, ascending
    info_bit_positions: Vec<usize>,
}

impl CodeParameters {
    /// Create and validate polar code parameters
    ///
    /// # Arguments
    ///
    /// * `block_size` - Codeword length (N), must be a power of 2
    /// * `num_info_bits` - Information length (K), at most N
    /// * `frozen_bit_positions` - The N - K distinct frozen positions, each below N
    /// * `frozen_bit_values` - Value (0 or 1) per frozen position; missing trailing values are 0
    ///
    /// # Returns
    ///
    /// The parameters, or [`Error::InvalidCodeConfiguration`] naming the violated constraint
    pub fn new(
        block_size: usize,
        num_info_bits: usize,
        frozen_bit_positions: Vec<usize>,
        frozen_bit_values: Vec<u8>,
    ) -> Result<Self> {
        let params = Self::build(
            block_size,
            num_info_bits,
            frozen_bit_positions,
            frozen_bit_values,
        )
        .inspect_err(|err| warn!("rejected polar code configuration: {}", err))?;

        debug!(
            "polar code parameters: N={} n={} K={} frozen={}",
            params.block_size,
            params.block_power,
            params.num_info_bits,
            params.frozen_bit_positions.len()
        );
        Ok(params)
    }

    /// Create parameters from a per-position frozen indicator.
    ///
    /// The block size is the mask length and K is the number of `false` entries.
    /// Frozen positions are taken in ascending order.
    pub fn from_frozen_mask(frozen_mask: &[bool], frozen_bit_values: Vec<u8>) -> Result<Self> {
        let frozen_bit_positions: Vec<usize> = frozen_mask
            .iter()
            .enumerate()
            .filter(|&(_, &frozen)| frozen)
            .map(|(position, _)| position)
            .collect();
        let num_info_bits = frozen_mask.len() - frozen_bit_positions.len();

        Self::new(
            frozen_mask.len(),
            num_info_bits,
            frozen_bit_positions,
            frozen_bit_values,
        )
    }

    fn build(
        block_size: usize,
        num_info_bits: usize,
        frozen_bit_positions: Vec<usize>,
        mut frozen_bit_values: Vec<u8>,
    ) -> Result<Self> {
        if !block_size.is_power_of_two() {
            return Err(Error::configuration(format!(
                "block size {} is not a power of 2",
                block_size
            )));
        }

        if num_info_bits > block_size {
            return Err(Error::configuration(format!(
                "{} information bits exceed block size {}",
                num_info_bits, block_size
            )));
        }

        let num_frozen = block_size - num_info_bits;
        if frozen_bit_positions.len() != num_frozen {
            return Err(Error::configuration(format!(
                "expected {} frozen bit positions, got {}",
                num_frozen,
                frozen_bit_positions.len()
            )));
        }

        if frozen_bit_values.len() > frozen_bit_positions.len() {
            return Err(Error::configuration(format!(
                "{} frozen bit values given for {} frozen positions",
                frozen_bit_values.len(),
                frozen_bit_positions.len()
            )));
        }

        if let Some(value) = frozen_bit_values.iter().find(|&&value| value > 1) {
            return Err(Error::configuration(format!(
                "frozen bit value {} is not a bit",
                value
            )));
        }

        let mut frozen = vec![false; block_size];
        for &position in &frozen_bit_positions {
            if position >= block_size {
                return Err(Error::configuration(format!(
                    "frozen position {} out of range for block size {}",
                    position, block_size
                )));
            }
            if frozen[position] {
                return Err(Error::configuration(format!(
                    "frozen position {} appears more than once",
                    position
                )));
            }
            frozen[position] = true;
        }

        frozen_bit_values.resize(frozen_bit_positions.len(), 0);

        let info_bit_positions: Vec<usize> = frozen
            .iter()
            .enumerate()
            .filter(|&(_, &is_frozen)| !is_frozen)
            .map(|(position, _)| position)
            .collect();

        if info_bit_positions.len() != num_info_bits {
            return Err(Error::configuration(format!(
                "derived {} information positions, expected {}",
                info_bit_positions.len(),
                num_info_bits
            )));
        }

        Ok(CodeParameters {
            block_size,
            block_power: block_size.trailing_zeros(),
            num_info_bits,
            frozen_bit_positions,
            frozen_bit_values,
            info_bit_positions,
        })
    }

    /// Get the code length (N)
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Get log2 of the code length
    pub fn block_power(&self) -> u32 {
        self.block_power
    }

    /// Get the information length (K)
    pub fn num_info_bits(&self) -> usize {
        self.num_info_bits
    }

    /// Get the number of frozen bits (N - K)
    pub fn num_frozen_bits(&self) -> usize {
        self.frozen_bit_positions.len()
    }

    /// Get the code rate (K/N)
    pub fn rate(&self) -> f64 {
        self.num_info_bits as f64 / self.block_size as f64
    }

    pub fn frozen_bit_positions(&self) -> &[usize] {
        &self.frozen_bit_positions
    }

    /// Frozen values, one per entry of [`Self::frozen_bit_positions`]
    pub fn frozen_bit_values(&self) -> &[u8] {
        &self.frozen_bit_values
    }

    /// Information positions in ascending order
    pub fn info_bit_positions(&self) -> &[usize] {
        &self.info_bit_positions
    }

    /// Whether `position` is frozen. Positions outside the block are not.
    pub fn is_frozen(&self, position: usize) -> bool {
        position < self.block_size && self.info_bit_positions.binary_search(&position).is_err()
    }

    /// Value a frozen position must take, or `None` for information and out-of-range positions
    pub fn frozen_bit_value(&self, position: usize) -> Option<u8> {
        self.frozen_bit_positions
            .iter()
            .position(|&frozen| frozen == position)
            .map(|index| self.frozen_bit_values[index])
    }

    /// Per-position frozen indicator of length N
    pub fn frozen_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.block_size];
        for &position in &self.frozen_bit_positions {
            mask[position] = true;
        }
        mask
    }

    /// Bit-reverse `index` over `block_power` bits.
    ///
    /// A code of length 1 has no bits to reverse and maps 0 to itself.
    pub fn bit_reversed_index(&self, index: usize) -> Result<usize> {
        if index >= self.block_size {
            return Err(Error::argument(format!(
                "index {} out of range for block size {}",
                index, self.block_size
            )));
        }
        if self.block_power == 0 {
            return Ok(index);
        }
        bit_reverse(index, self.block_power)
    }

    /// Bit-reversal permutation of `0..N`
    pub fn bit_reversal_permutation(&self) -> Result<Vec<usize>> {
        (0..self.block_size)
            .map(|index| self.bit_reversed_index(index))
            .collect()
    }
}

impl Display for CodeParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Polar({},{}) rate={:.3} frozen={}",
            self.block_size,
            self.num_info_bits,
            self.rate(),
            self.num_frozen_bits()
        )
    }
}

/// Create polar code parameters with every frozen bit set to 0
///
/// # Arguments
///
/// * `block_size` - Codeword length (N)
/// * `num_info_bits` - Information length (K)
/// * `frozen_bit_positions` - The N - K frozen positions
pub fn create_code_parameters(
    block_size: usize,
    num_info_bits: usize,
    frozen_bit_positions: Vec<usize>,
) -> Result<CodeParameters> {
    CodeParameters::new(block_size, num_info_bits, frozen_bit_positions, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn assert_config_error(result: Result<CodeParameters>) {
        assert!(matches!(result, Err(Error::InvalidCodeConfiguration(_))));
    }

    #[test]
    fn test_code_parameters_creation() {
        let params = CodeParameters::new(8, 4, vec![0, 1, 2, 4], vec![0, 0, 0, 0]).unwrap();
        assert_eq!(params.block_size(), 8);
        assert_eq!(params.block_power(), 3);
        assert_eq!(params.num_info_bits(), 4);
        assert_eq!(params.num_frozen_bits(), 4);
        assert_eq!(params.info_bit_positions(), &[3, 5, 6, 7]);
        assert_eq!(params.frozen_bit_positions(), &[0, 1, 2, 4]);
        assert!((params.rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_frozen_values_zero_padded() {
        let params = CodeParameters::new(8, 4, vec![0, 1, 2, 3], vec![1]).unwrap();
        assert_eq!(params.frozen_bit_values(), &[1, 0, 0, 0]);

        let params = create_code_parameters(8, 6, vec![0, 1]).unwrap();
        assert_eq!(params.frozen_bit_values(), &[0, 0]);
    }

    #[test]
    fn test_invalid_block_size() {
        assert_config_error(CodeParameters::new(6, 2, vec![0, 1, 2, 3], vec![]));
        assert_config_error(CodeParameters::new(0, 0, vec![], vec![]));
        assert_config_error(CodeParameters::new(100, 100, vec![], vec![]));
    }

    #[test]
    fn test_invalid_frozen_layout() {
        // Wrong number of frozen positions
        assert_config_error(CodeParameters::new(8, 4, vec![0, 1, 2], vec![]));
        assert_config_error(CodeParameters::new(8, 4, vec![0, 1, 2, 3, 4], vec![]));
        // Too many information bits
        assert_config_error(CodeParameters::new(8, 9, vec![], vec![]));
        // Repeated position
        assert_config_error(CodeParameters::new(8, 4, vec![0, 1, 1, 2], vec![]));
        // Out of range position
        assert_config_error(CodeParameters::new(8, 4, vec![0, 1, 2, 8], vec![]));
        // More values than positions
        assert_config_error(CodeParameters::new(8, 6, vec![0, 1], vec![0, 0, 1]));
        // Value that is not a bit
        assert_config_error(CodeParameters::new(8, 6, vec![0, 1], vec![0, 2]));
    }

    #[test]
    fn test_degenerate_codes() {
        let all_info = CodeParameters::new(4, 4, vec![], vec![]).unwrap();
        assert_eq!(all_info.info_bit_positions(), &[0, 1, 2, 3]);

        let all_frozen = CodeParameters::new(4, 0, vec![3, 2, 1, 0], vec![1, 1]).unwrap();
        assert!(all_frozen.info_bit_positions().is_empty());
        assert_eq!(all_frozen.frozen_bit_values(), &[1, 1, 0, 0]);

        let single = CodeParameters::new(1, 1, vec![], vec![]).unwrap();
        assert_eq!(single.block_power(), 0);
        assert_eq!(single.bit_reversal_permutation().unwrap(), vec![0]);
    }

    #[test]
    fn test_unsorted_frozen_positions() {
        let params = CodeParameters::new(8, 4, vec![4, 0, 2, 1], vec![1, 0, 1]).unwrap();
        assert_eq!(params.info_bit_positions(), &[3, 5, 6, 7]);
        assert_eq!(params.frozen_bit_positions(), &[4, 0, 2, 1]);
        assert_eq!(params.frozen_bit_value(4), Some(1));
        assert_eq!(params.frozen_bit_value(2), Some(1));
        assert_eq!(params.frozen_bit_value(1), Some(0));
        assert_eq!(params.frozen_bit_value(3), None);
        assert_eq!(params.frozen_bit_value(8), None);
    }

    #[test]
    fn test_frozen_lookup_and_mask() {
        let params = create_code_parameters(8, 4, vec![0, 1, 2, 4]).unwrap();
        assert!(params.is_frozen(0));
        assert!(params.is_frozen(4));
        assert!(!params.is_frozen(3));
        assert!(!params.is_frozen(8));
        assert_eq!(
            params.frozen_mask(),
            vec![true, true, true, false, true, false, false, false]
        );

        let rebuilt = CodeParameters::from_frozen_mask(&params.frozen_mask(), vec![]).unwrap();
        assert_eq!(rebuilt, params);
    }

    #[test]
    fn test_from_frozen_mask_invalid_length() {
        assert_config_error(CodeParameters::from_frozen_mask(&[true, false, false], vec![]));
    }

    #[test]
    fn test_random_frozen_sets_partition_block() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for power in 0..=8u32 {
            let n = 1usize << power;
            for k in 0..=n {
                let mut positions: Vec<usize> = (0..n).collect();
                positions.shuffle(&mut rng);
                positions.truncate(n - k);

                let params = create_code_parameters(n, k, positions.clone()).unwrap();
                assert_eq!(params.block_power(), power);
                assert_eq!(params.info_bit_positions().len(), k);
                assert!(params.info_bit_positions().windows(2).all(|w| w[0] < w[1]));

                let mut union: Vec<usize> = params
                    .info_bit_positions()
                    .iter()
                    .chain(params.frozen_bit_positions())
                    .copied()
                    .collect();
                union.sort_unstable();
                assert_eq!(union, (0..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_bit_reversal_permutation() {
        let params = create_code_parameters(8, 4, vec![0, 1, 2, 4]).unwrap();
        assert_eq!(
            params.bit_reversal_permutation().unwrap(),
            vec![0, 4, 2, 6, 1, 5, 3, 7]
        );
        assert_eq!(params.bit_reversed_index(1).unwrap(), 4);
        assert!(matches!(
            params.bit_reversed_index(8),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        let params = create_code_parameters(8, 4, vec![0, 1, 2, 4]).unwrap();
        assert_eq!(params.to_string(), "Polar(8,4) rate=0.500 frozen=4");
    }
}
