/// Complement a single nucleotide, including the IUPAC ambiguity
/// codes in both cases. Gap and unknown markers (`.`, `-`, `?`) map
/// to themselves; any other byte becomes `N`.
#[inline]
pub fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        b'R' => b'Y',
        b'Y' => b'R',
        b'S' => b'S',
        b'W' => b'W',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'N' => b'N',
        b'r' => b'y',
        b'y' => b'r',
        b's' => b's',
        b'w' => b'w',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        b'n' => b'n',
        b'.' | b'-' | b'?' => base,
        _ => b'N',
    }
}

/// Reverse complement of a nucleotide sequence.
///
/// # Examples
///
/// ```
/// use idba_gfa::seq::reverse_complement;
///
/// assert_eq!(reverse_complement(b"AACG"), b"CGTT");
/// assert_eq!(reverse_complement(b"acgX"), b"Ncgt");
/// ```
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_base(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &[u8] = b"ACGTacgtRYSWKMBVDHNryswkmbvdhn.-?";

    #[test]
    fn complement_pairs() {
        assert_eq!(reverse_complement(b"AAAC"), b"GTTT");
        assert_eq!(reverse_complement(b"ACGT"), b"ACGT");
        assert_eq!(reverse_complement(b"RYKMBVDH"), b"DHBVKMRY");
        assert_eq!(reverse_complement(b"a-c.g?"), b"?c.g-t");
    }

    #[test]
    fn unknown_symbols_become_n() {
        assert_eq!(reverse_complement(b"AXZ"), b"NNT");
        assert_eq!(complement_base(b'U'), b'N');
        assert_eq!(complement_base(b'*'), b'N');
    }

    #[test]
    fn involutive_over_alphabet() {
        for &b in ALPHABET {
            assert_eq!(complement_base(complement_base(b)), b);
        }
        assert_eq!(reverse_complement(&reverse_complement(ALPHABET)), ALPHABET);
        let seq = b"GATTACAgattacaNNRY";
        assert_eq!(reverse_complement(&reverse_complement(seq)), &seq[..]);
    }

    #[test]
    fn empty_sequence() {
        assert!(reverse_complement(b"").is_empty());
    }
}
