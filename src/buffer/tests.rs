// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod str_tests {
    use crate::buffer::Str;
    use proptest::prelude::*;

    #[test]
    fn construct_tests() {
        println!("Testing construction");
        let s = Str::new("hello").unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s, "hello");

        let t = Str::with_length(b"hello", 3).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t, "hel");

        let empty = Str::with_length(b"hello", 0).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.as_bytes(), b"");
        assert_eq!(empty, Str::empty());

        let e = Str::with_length(b"hi", 3).unwrap_err();
        println!("Short content: {e}");
        assert!(e.is_invalid_argument());
    }

    #[test]
    fn non_utf8_tests() {
        println!("Testing non-UTF-8 content");
        let s = Str::new([b'a', 0xff, b'b']).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_string(), "a\u{fffd}b");
        assert_eq!(format!("{s:?}"), "\"a\u{fffd}b\"");
    }

    #[test]
    fn concat_tests() {
        println!("Testing concat");
        let a = Str::new("  ").unwrap();
        let b = Str::new("message").unwrap();
        let c = a.concat(&b).unwrap();
        assert_eq!(c, "  message");
        assert_eq!(c.len(), a.len() + b.len());
        // Inputs are untouched.
        assert_eq!(a, "  ");
        assert_eq!(b, "message");

        let d = Str::empty().concat(&Str::empty()).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn repeat_tests() {
        println!("Testing repeat");
        let tab = Str::new("->").unwrap();
        assert_eq!(tab.repeat(3).unwrap(), "->->->");
        assert!(tab.repeat(0).unwrap().is_empty());
        let e = tab.repeat(usize::MAX).unwrap_err();
        println!("Overflow: {e}");
        assert!(e.is_allocation());
    }

    #[test]
    fn lines_tests() {
        println!("Testing lines");
        let s = Str::new("a\nbc\n").unwrap();
        let lines: Vec<&[u8]> = s.lines().collect();
        assert_eq!(lines, vec![&b"a"[..], &b"bc"[..], &b""[..]]);
        assert_eq!(Str::empty().lines().count(), 1);
    }

    #[test]
    fn release_tests() {
        println!("Testing release");
        let mut s = Str::new("owned").unwrap();
        s.release();
        assert!(s.is_empty());
        s.release();
        assert!(s.is_empty());
        assert_eq!(s, Str::empty());

        let mut t = Str::new("truncate me").unwrap();
        t.truncate(8);
        assert_eq!(t, "truncate");
        t.truncate(100);
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn conversion_tests() {
        println!("Testing conversions");
        let a: Str = "abc".parse().unwrap();
        let b = Str::try_from("abc").unwrap();
        let c = Str::try_from(&b"abc"[..]).unwrap();
        let d = Str::from(b"abc".to_vec());
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(d.into_bytes(), b"abc".to_vec());
    }

    #[test]
    fn serde_tests() {
        println!("Testing serde");
        let s = Str::new("tab").unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"tab\"");
        let back: Str = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);

        let raw = Str::new([0xfe_u8, 0xff]).unwrap();
        let json = serde_json::to_string(&raw).unwrap();
        println!("Non-UTF-8 as json: {json}");
        assert_eq!(json, "[254,255]");
        let back: Str = serde_json::from_str(&json).unwrap();
        assert_eq!(back, raw);
    }

    proptest! {
        #[test]
        fn length_matches_construction(content in proptest::collection::vec(any::<u8>(), 0..256), cut in 0usize..256) {
            let n = cut.min(content.len());
            let s = Str::with_length(&content, n).unwrap();
            prop_assert_eq!(s.len(), n);
            prop_assert_eq!(s.as_bytes(), &content[..n]);
        }

        #[test]
        fn concat_is_additive_and_associative(
            a in proptest::collection::vec(any::<u8>(), 0..64),
            b in proptest::collection::vec(any::<u8>(), 0..64),
            c in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let (a, b, c) = (Str::from(a), Str::from(b), Str::from(c));
            let ab = a.concat(&b).unwrap();
            prop_assert_eq!(ab.len(), a.len() + b.len());
            let mut joined = a.as_bytes().to_vec();
            joined.extend_from_slice(b.as_bytes());
            prop_assert_eq!(ab.as_bytes(), &joined[..]);

            let left = ab.concat(&c).unwrap();
            let right = a.concat(&b.concat(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }
    }
}
