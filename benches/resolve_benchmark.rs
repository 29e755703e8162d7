use bstr::BString;

use idba_gfa::connections::resolve_connections;
use idba_gfa::fasta::SequenceStore;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// A chain of contigs where each one starts with the last k-1 bases
/// of the previous one, with one hint per neighbouring pair.
fn chain_input(contigs: u64, length: usize, kmer: usize) -> (SequenceStore, Vec<u8>) {
    const BASES: &[u8] = b"ACGT";
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next_base = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        BASES[(state % 4) as usize]
    };

    let mut store = SequenceStore::new();
    let mut hints = Vec::new();
    let mut previous: Vec<u8> = Vec::new();

    for id in 1..=contigs {
        let mut seq: Vec<u8> = if previous.is_empty() {
            Vec::new()
        } else {
            previous[previous.len() - (kmer - 1)..].to_vec()
        };
        while seq.len() < length {
            seq.push(next_base());
        }
        if id > 1 {
            hints.extend_from_slice(format!("{}_0_0_1 {}_0_0_1\n", id - 1, id).as_bytes());
        }
        store.insert(id, BString::from(seq.clone()));
        previous = seq;
    }

    (store, hints)
}

macro_rules! bench_chain {
    ($name:ident, $contigs:literal, $length:literal, $kmer:literal) => {
        fn $name(c: &mut Criterion) {
            let (store, hints) = chain_input($contigs, $length, $kmer);
            c.bench_with_input(
                BenchmarkId::new(stringify!($name), $contigs),
                &(store, hints),
                |b, (store, hints)| {
                    b.iter(|| resolve_connections(hints, store, $kmer).unwrap());
                },
            );
        }
    };
}

bench_chain!(chain_1k, 1000, 500, 31);
bench_chain!(chain_10k, 10000, 500, 31);
bench_chain!(chain_10k_k100, 10000, 2000, 100);

criterion_group!(
    name = resolve_benches;
    config = Criterion::default().sample_size(25);
    targets = chain_1k, chain_10k, chain_10k_k100
);

criterion_main!(resolve_benches);
