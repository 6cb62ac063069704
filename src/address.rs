//! Decorative pointer generation.
//!
//! Produces random 64-bit addresses rendered as `0x`-prefixed two-digit
//! hex groups. The top two groups are fixed at zero and the next nibble
//! is masked to `0..8`, keeping the value in the canonical user-space
//! range; the lowest nibble is rounded down to a multiple of the
//! requested alignment.

use rand::Rng;

/// Byte alignments a generated address can honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    One,
    Two,
    Four,
    Eight,
}

impl Alignment {
    pub const ALL: [Alignment; 4] = [
        Alignment::One,
        Alignment::Two,
        Alignment::Four,
        Alignment::Eight,
    ];

    pub fn bytes(self) -> u8 {
        match self {
            Alignment::One => 1,
            Alignment::Two => 2,
            Alignment::Four => 4,
            Alignment::Eight => 8,
        }
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn random_hex<R: Rng>(rng: &mut R, align: u8) -> char {
    let num = rng.gen_range(0..16u8);
    HEX_DIGITS[usize::from(num / align * align)] as char
}

/// Generate one address string whose lowest nibble is a multiple of
/// `align`. Layout: `0x` then eight underscore-separated byte groups.
pub fn random_addr<R: Rng>(rng: &mut R, align: Alignment) -> String {
    let mut out = format!("0x00_00_{:x}", rng.gen_range(0..16u8) & 7);
    for idx in (2..=11u32).rev() {
        if idx % 2 == 0 {
            out.push('_');
        }
        out.push(random_hex(rng, 1));
    }
    out.push(random_hex(rng, align.bytes()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    lazy_static! {
        static ref ADDR_RX: Regex =
            Regex::new(r"^0x00_00_[0-7][0-9a-f](_[0-9a-f]{2}){5}$").unwrap();
    }

    #[test]
    fn addresses_match_the_fixed_grouping() {
        let mut rng = StdRng::seed_from_u64(7);
        for align in Alignment::ALL {
            for _ in 0..200 {
                let addr = random_addr(&mut rng, align);
                assert!(ADDR_RX.is_match(&addr), "bad layout: {}", addr);
            }
        }
    }

    #[test]
    fn final_nibble_honors_the_alignment() {
        let mut rng = StdRng::seed_from_u64(42);
        for align in Alignment::ALL {
            for _ in 0..200 {
                let addr = random_addr(&mut rng, align);
                let last = addr.chars().last().unwrap();
                let nibble = last.to_digit(16).unwrap() as u8;
                assert_eq!(nibble % align.bytes(), 0, "addr {} align {}", addr, align.bytes());
            }
        }
    }

    #[test]
    fn eight_aligned_addresses_end_in_zero_or_eight() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let addr = random_addr(&mut rng, Alignment::Eight);
            let last = addr.chars().last().unwrap();
            assert!(last == '0' || last == '8', "addr {}", addr);
        }
    }
}
