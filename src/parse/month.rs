/// Decodes an upper-case three-letter month name (`JAN`..`DEC`) to its
/// 1-based month number.
///
/// Dispatches on the first byte, then the second and third. Branching this
/// way benchmarked several times faster than comparing against each of the
/// twelve candidate strings in turn, so keep the shape even though a lookup
/// loop would read shorter.
#[inline]
pub fn month_short_name(span: &[u8]) -> Option<u32> {
    if span.len() != 3 {
        return None;
    }
    let (first, second, third) = (span[0], span[1], span[2]);
    match first {
        b'F' => (second == b'E' && third == b'B').then_some(2),
        b'S' => (second == b'E' && third == b'P').then_some(9),
        b'O' => (second == b'C' && third == b'T').then_some(10),
        b'N' => (second == b'O' && third == b'V').then_some(11),
        b'D' => (second == b'E' && third == b'C').then_some(12),
        b'A' => {
            if second == b'P' && third == b'R' {
                Some(4)
            } else if second == b'U' && third == b'G' {
                Some(8)
            } else {
                None
            }
        }
        b'M' => {
            if second == b'A' {
                match third {
                    b'R' => Some(3),
                    b'Y' => Some(5),
                    _ => None,
                }
            } else {
                None
            }
        }
        b'J' => {
            if second == b'A' && third == b'N' {
                Some(1)
            } else if second == b'U' {
                match third {
                    b'N' => Some(6),
                    b'L' => Some(7),
                    _ => None,
                }
            } else {
                None
            }
        }
        _ => None,
    }
}
