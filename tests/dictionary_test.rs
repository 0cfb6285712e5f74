// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the dictionary builders.
//!
//! These tests validate that:
//! - Every codeword XORs to its key and uses only support bytes
//! - Shortest-path codewords are minimal (checked by brute force)
//! - Fixed-length codewords have exactly the requested length
//! - Rebuilding gives identical dictionaries

mod common;

use common::{punctuation, xors_of_length};
use xor_literal::dictionary::{reachable_at, xor_reduce, Counters};
use xor_literal::{
    fixed_length_dictionary, shortest_path_dictionary, Dictionary, EncodeError, SupportSet,
};

fn assert_codewords_valid(dict: &Dictionary, support: &SupportSet) {
    for (byte, codeword) in dict.iter() {
        assert_eq!(xor_reduce(codeword.as_slice()), byte, "codeword {} for {}", codeword, byte);
        for &c in codeword.as_slice() {
            assert!(support.contains(c), "{} is not a support byte", c);
        }
    }
}

#[test]
fn test_codeword_correctness_for_several_alphabets() {
    let alphabets = [
        SupportSet::default(),
        punctuation(),
        SupportSet::from_bytes(&[1, 2, 4, 8, 16, 32, 64, 128]),
        SupportSet::from_bytes(&[0x7f, 0x80]),
    ];
    for support in &alphabets {
        assert_codewords_valid(&shortest_path_dictionary(support), support);
        for n in 2..=4 {
            assert_codewords_valid(&fixed_length_dictionary(support, n).unwrap(), support);
        }
    }
}

#[test]
fn test_shortest_path_minimality_by_brute_force() {
    let support = SupportSet::from_bytes(&[3, 5, 9, 17, 96]);
    let dict = shortest_path_dictionary(&support);

    for (byte, codeword) in dict.iter() {
        for shorter in 0..codeword.len() {
            assert!(
                !xors_of_length(&support, shorter).contains(&byte),
                "byte {} reachable in {} steps, dictionary says {}",
                byte,
                shorter,
                codeword.len()
            );
        }
    }
}

#[test]
fn test_shortest_path_minimality_default_alphabet() {
    let support = SupportSet::default();
    let dict = shortest_path_dictionary(&support);
    let one = xors_of_length(&support, 1);
    let two = xors_of_length(&support, 2);

    for (byte, codeword) in dict.iter() {
        match codeword.len() {
            0 => assert_eq!(byte, 0),
            1 => assert!(one.contains(&byte)),
            2 => assert!(!one.contains(&byte) && byte != 0),
            3 => assert!(!one.contains(&byte) && !two.contains(&byte)),
            len => panic!("unexpected codeword length {} for {}", len, byte),
        }
    }
}

#[test]
fn test_shortest_path_covers_the_xor_span() {
    // Powers of two span every byte; each byte needs popcount(byte) steps.
    let support = SupportSet::from_bytes(&[1, 2, 4, 8, 16, 32, 64, 128]);
    let dict = shortest_path_dictionary(&support);
    assert_eq!(dict.len(), 256);
    for (byte, codeword) in dict.iter() {
        assert_eq!(codeword.len(), byte.count_ones() as usize);
    }
}

#[test]
fn test_single_bit_boundary() {
    let support = SupportSet::new([1]).unwrap();
    let dict = shortest_path_dictionary(&support);
    let reachable: Vec<u8> = dict.reachable().iter().collect();
    assert_eq!(reachable, vec![0, 1]);
    assert!(dict.get(0).unwrap().is_empty());
    assert_eq!(dict.get(1).unwrap().as_slice(), &[1]);

    for n in 2..=6 {
        let fixed = fixed_length_dictionary(&support, n).unwrap();
        assert_eq!(fixed.len(), 1);
        assert!(fixed.contains((n % 2) as u8));
    }
}

#[test]
fn test_fixed_length_matches_brute_force_reachability() {
    let support = SupportSet::from_bytes(&[3, 5, 9, 17, 96]);
    for n in 2..=4 {
        let dict = fixed_length_dictionary(&support, n).unwrap();
        let expected = xors_of_length(&support, n);
        let actual: std::collections::BTreeSet<u8> = dict.reachable().iter().collect();
        assert_eq!(actual, expected, "n = {}", n);
        assert_eq!(reachable_at(&support, n), dict.reachable());
    }
}

#[test]
fn test_fixed_length_excludes_other_lengths() {
    // '&' (38) is a support byte, so its shortest codeword has length 1,
    // yet no pair of default support bytes XORs to it.
    let support = SupportSet::default();
    let shortest = shortest_path_dictionary(&support);
    assert_eq!(shortest.get(b'&').unwrap().len(), 1);

    let two = fixed_length_dictionary(&support, 2).unwrap();
    assert!(!two.contains(b'&'));
    let three = fixed_length_dictionary(&support, 3).unwrap();
    assert!(three.contains(b'&'));
}

#[test]
fn test_rebuild_is_deterministic() {
    let support = punctuation();
    assert_eq!(shortest_path_dictionary(&support), shortest_path_dictionary(&support));
    assert_eq!(
        fixed_length_dictionary(&support, 3).unwrap(),
        fixed_length_dictionary(&support, 3).unwrap()
    );

    // Listing the same alphabet in another order changes nothing.
    let mut reversed: Vec<u8> = support.bytes().to_vec();
    reversed.reverse();
    let reordered = SupportSet::from_bytes(&reversed);
    assert_eq!(
        fixed_length_dictionary(&support, 4).unwrap(),
        fixed_length_dictionary(&reordered, 4).unwrap()
    );
}

#[test]
fn test_invalid_length() {
    let support = SupportSet::default();
    assert_eq!(
        fixed_length_dictionary(&support, 1).unwrap_err(),
        EncodeError::InvalidLength { len: 1, min: 2 }
    );
}

#[test]
fn test_build_statistics() {
    let support = SupportSet::default();
    let shortest = shortest_path_dictionary(&support);
    let stats = shortest.statistics();
    assert_eq!(stats.get(Counters::StatesVisited), 128);
    assert_eq!(stats.get(Counters::EdgesExamined), 128 * 21);
    assert_eq!(stats.get(Counters::CodewordsEmitted), 128);

    let fixed = fixed_length_dictionary(&support, 3).unwrap();
    assert_eq!(fixed.statistics().get(Counters::CodewordsEmitted), 118);
}
