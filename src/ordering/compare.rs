use std::cmp::Ordering;

/// Three-way comparison behind the index order.
///
/// Walks both strings over their shared prefix:
/// - ASCII-folded characters that differ decide the order;
/// - equal folded characters that differ in case put the lowercase one first;
/// - if the prefix is identical the shorter string comes first.
///
/// Equal only for identical strings, so this is a total order.
pub fn case_aware_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (Some(ca), Some(cb)) => {
                let fa = ca.to_ascii_lowercase();
                let fb = cb.to_ascii_lowercase();

                if fa != fb {
                    return fa.cmp(&fb);
                }
                if ca != cb {
                    // Same letter, different case: exactly one side is lowercase.
                    return if ca.is_ascii_lowercase() {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}
