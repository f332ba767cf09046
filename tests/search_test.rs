// MD5 Chess - Free and Open Source Software Statement
//
// File: tests/search_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Prefix search tests against the door "abc".

#[cfg(test)]
mod tests {
    use md5chess::core::md5_hex;
    use md5chess::solver::search::{next_hash, next_hash_until, HashSearch};
    use std::sync::atomic::AtomicBool;

    #[test]
    fn test_next_hash_for_abc_0() {
        let (remainder, next) = next_hash("abc", 0);
        assert_eq!(&remainder[..2], "15");
        assert_eq!(next, 3231930);
        assert_eq!(remainder.len(), 27, "Remainder should be the digest minus 5 chars");
    }

    #[test]
    fn test_next_hash_for_abc_3231930() {
        let (remainder, next) = next_hash("abc", 3231930);
        assert_eq!(&remainder[..4], "8f82");
        assert_eq!(next, 5017309);
    }

    #[test]
    fn test_next_hash_resumes_at_match() {
        // Starting exactly on a matching index returns that index
        let (remainder, next) = next_hash("abc", 5017308);
        assert!(remainder.starts_with("8f82"));
        assert_eq!(next, 5017309);
    }

    #[test]
    fn test_next_hash_remainder_is_digest_suffix() {
        let (remainder, next) = next_hash("abc", 5017309);
        let digest = md5_hex(&format!("abc{}", next - 1));
        assert_eq!(&digest[..5], "00000");
        assert_eq!(&digest[5..], remainder);
    }

    #[test]
    fn test_hash_search_counts_every_index() {
        let mut search = HashSearch::new("abc", 3231000);
        let hit = search.find_next();
        assert_eq!(hit.index, 3231929);
        assert_eq!(hit.next_index(), search.next_index());
        assert_eq!(search.stats().hashes_computed, 930);
        assert_eq!(search.stats().matches_found, 1);
    }

    #[test]
    fn test_hash_search_iterator_order() {
        let indices: Vec<u64> = HashSearch::new("abc", 3231000).take(3).map(|hit| hit.index).collect();
        assert_eq!(indices, vec![3231929, 5017308, 5278568]);
    }

    #[test]
    fn test_next_hash_until_not_stopped() {
        let stop = AtomicBool::new(false);
        let result = next_hash_until("abc", 3231900, &stop);
        let (remainder, next) = result.expect("Search should find a match");
        assert!(remainder.starts_with("15"));
        assert_eq!(next, 3231930);
    }

    #[test]
    fn test_next_hash_until_stopped() {
        let stop = AtomicBool::new(true);
        assert_eq!(next_hash_until("abc", 0, &stop), None);
    }
}
