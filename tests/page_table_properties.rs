//! Property tests for the hash page table.

use hashpt::{FrameNumber, HashPageTable, PageNumber, VirtualAddress};
use proptest::prelude::*;

/// Addresses and frames small enough that no translation overflows.
fn addr() -> impl Strategy<Value = u64> {
    0u64..(1 << 40)
}

fn frame() -> impl Strategy<Value = u64> {
    0u64..(1 << 20)
}

fn geometry() -> impl Strategy<Value = (usize, u64)> {
    (1usize..64, 1u64..8192)
}

proptest! {
    #[test]
    fn hash_is_page_mod_table_size((table_size, page_size) in geometry(), a in addr()) {
        let table = HashPageTable::new(table_size, page_size).unwrap();
        let expected = ((a / page_size) % table_size as u64) as usize;
        prop_assert_eq!(table.hash(VirtualAddress::new(a)), expected);
        prop_assert_eq!(table.hash(VirtualAddress::new(a)), expected);
    }

    #[test]
    fn added_pages_translate((table_size, page_size) in geometry(), a in addr(), f in frame()) {
        let mut table = HashPageTable::new(table_size, page_size).unwrap();
        table.add_page_entry(VirtualAddress::new(a), FrameNumber::new(f)).unwrap();

        let t = table.lookup_page(VirtualAddress::new(a)).unwrap();
        prop_assert_eq!(t.frame_number, FrameNumber::new(f));
        prop_assert_eq!(t.offset, a % page_size);
        prop_assert_eq!(t.physical_address.0, f * page_size + a % page_size);
    }

    #[test]
    fn re_adding_a_page_updates_in_place(a in addr(), f1 in frame(), f2 in frame()) {
        let mut table = HashPageTable::new(8, 4096).unwrap();
        let va = VirtualAddress::new(a);
        table.add_page_entry(va, FrameNumber::new(f1)).unwrap();
        table.add_page_entry(va, FrameNumber::new(f2)).unwrap();

        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table.statistics_snapshot().collisions, 0);
        prop_assert_eq!(table.lookup_page(va).unwrap().frame_number, FrameNumber::new(f2));
    }

    #[test]
    fn collisions_count_extra_pages_per_bucket(
        pages in proptest::collection::btree_set(0u64..10_000, 1..64),
        table_size in 1usize..16,
    ) {
        let page_size = 4096;
        let mut table = HashPageTable::new(table_size, page_size).unwrap();
        for &p in &pages {
            table.add_page_entry(VirtualAddress::new(p * page_size), FrameNumber::new(p)).unwrap();
        }

        let used_buckets = table.dump_table().len() as u64;
        prop_assert_eq!(table.statistics_snapshot().collisions, pages.len() as u64 - used_buckets);
        prop_assert_eq!(table.len(), pages.len());
    }

    #[test]
    fn every_lookup_is_a_hit_or_a_miss(
        added in proptest::collection::vec(0u64..256, 0..32),
        probes in proptest::collection::vec(0u64..256, 0..64),
    ) {
        let page_size = 16;
        let mut table = HashPageTable::new(7, page_size).unwrap();
        for &p in &added {
            table.add_page_entry(VirtualAddress::new(p * page_size), FrameNumber::new(p)).unwrap();
        }

        let mut expected_hits = 0u64;
        for &p in &probes {
            let found = table.lookup_page(VirtualAddress::new(p * page_size + 3)).is_some();
            prop_assert_eq!(found, added.contains(&p));
            if found {
                expected_hits += 1;
            }
        }

        let stats = table.statistics_snapshot();
        prop_assert_eq!(stats.lookups, probes.len() as u64);
        prop_assert_eq!(stats.hits + stats.misses, stats.lookups);
        prop_assert_eq!(stats.hits, expected_hits);
        if stats.lookups > 0 {
            prop_assert_eq!(stats.hit_rate(), Some(stats.hits as f64 / stats.lookups as f64));
        } else {
            prop_assert_eq!(stats.hit_rate(), None);
        }
    }

    #[test]
    fn bucket_pages_are_unique(pages in proptest::collection::vec(0u64..64, 0..128)) {
        let mut table = HashPageTable::new(4, 4096).unwrap();
        for (i, &p) in pages.iter().enumerate() {
            table.add_page_entry(VirtualAddress::new(p * 4096), FrameNumber::new(i as u64)).unwrap();
        }

        for (index, entries) in table.dump_table() {
            let mut seen: Vec<PageNumber> = entries.iter().map(|e| e.page_number).collect();
            let total = seen.len();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), total, "duplicate page in bucket {}", index);
        }
    }
}
