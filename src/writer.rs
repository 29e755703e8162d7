use std::io::{self, Write};

use crate::gfa::{Line, Link, Segment, GFA};

// Write segment
pub fn write_segment<T: Write>(seg: &Segment, stream: &mut T) -> io::Result<()> {
    write!(stream, "S\t{}\t", seg.id)?;
    stream.write_all(seg.sequence)?;
    if let Some(depth) = seg.depth {
        stream.write_all(b"\tRC:")?;
        stream.write_all(depth)?;
    }
    Ok(())
}

pub fn segment_string(seg: &Segment) -> String {
    let mut result = Vec::new();
    write_segment(seg, &mut result).expect("writing to a Vec can't fail");
    String::from_utf8_lossy(&result).into_owned()
}

// Write link
pub fn write_link<T: Write>(link: &Link, stream: &mut T) -> io::Result<()> {
    write!(
        stream,
        "L\t{}\t{}\t{}\t{}\t{}",
        link.from.id, link.from.orient, link.to.id, link.to.orient, link.overlap
    )
}

pub fn link_string(link: &Link) -> String {
    let mut result = Vec::new();
    write_link(link, &mut result).expect("writing to a Vec can't fail");
    String::from_utf8_lossy(&result).into_owned()
}

/// Write every line of the GFA, newline-terminated. There is no
/// header line.
pub fn write_gfa<T: Write>(gfa: &GFA, stream: &mut T) -> io::Result<()> {
    for line in gfa.lines_iter() {
        match line {
            Line::Segment(seg) => write_segment(&seg, stream)?,
            Line::Link(link) => write_link(&link, stream)?,
        }
        stream.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use bstr::{BString, ByteSlice};

    use crate::connections::resolve_connections;
    use crate::fasta::{DepthMap, SequenceStore};
    use crate::gfa::SignedSegment;
    use crate::overlap::Overlap;

    #[test]
    fn print_segment() {
        let segment = Segment::new(13, b"GCCCTA".as_bstr());
        assert_eq!(segment_string(&segment), "S\t13\tGCCCTA");

        let segment = segment.with_depth(b"42.5".as_bstr());
        assert_eq!(segment_string(&segment), "S\t13\tGCCCTA\tRC:42.5");
    }

    #[test]
    fn print_link() {
        let link = Link::new(
            SignedSegment::forward(13),
            SignedSegment::backward(552),
            Overlap(99),
        );
        assert_eq!(link_string(&link), "L\t13\t+\t552\t-\t99M");
    }

    fn render(gfa: &GFA) -> String {
        let mut out = Vec::new();
        write_gfa(gfa, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_gfa() {
        let mut sequences = SequenceStore::new();
        sequences.insert(2, BString::from("CGTTTT"));
        sequences.insert(1, BString::from("AAACGT"));
        let mut depths = DepthMap::new();
        depths.insert(2, BString::from("7"));

        let adjacency =
            resolve_connections(b"1_0_x_y 2_0_a_b\n", &sequences, 4).unwrap();
        let gfa = GFA::from_parts(&sequences, &depths, &adjacency, Overlap(3));

        assert_eq!(
            render(&gfa),
            "S\t1\tAAACGT\n\
             S\t2\tCGTTTT\tRC:7\n\
             L\t1\t+\t2\t+\t3M\n\
             L\t2\t-\t1\t-\t3M\n"
        );
    }

    fn render_from(seqs: &[(u64, &str)], hints: &str, k: usize) -> String {
        let mut sequences = SequenceStore::new();
        for (id, seq) in seqs {
            sequences.insert(*id, BString::from(*seq));
        }
        let adjacency =
            resolve_connections(hints.as_bytes(), &sequences, k).unwrap();
        let depths = DepthMap::new();
        let overlap = Overlap::from_kmer(k).unwrap();
        render(&GFA::from_parts(&sequences, &depths, &adjacency, overlap))
    }

    #[test]
    fn output_is_deterministic() {
        let hints = "3_0_a_b 1_1_c_d\n1_0_a_b 2_0_c_d\n2_1_a_b 3_1_c_d\n";
        let a = render_from(
            &[(1, "ACGTT"), (2, "TTGCA"), (3, "CAGGT")],
            hints,
            3,
        );
        let b = render_from(
            &[(3, "CAGGT"), (2, "TTGCA"), (1, "ACGTT")],
            hints,
            3,
        );
        assert_eq!(a, b);
        assert!(a.starts_with("S\t1\tACGTT\nS\t2\tTTGCA\nS\t3\tCAGGT\n"));
        assert!(a.contains("L\t1\t+\t2\t+\t2M\n"));
    }

    #[test]
    fn empty_graph_writes_nothing() {
        assert_eq!(render(&GFA::new()), "");
    }
}
