pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();
pub const ALPHABET_SIZE: usize = ALPHABET.len();

const NO_INDEX: u8 = u8::MAX;

// symbol -> slot, built once at compile time
const INDEX: [u8; 128] = {
    let mut table = [NO_INDEX; 128];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Slot of `a` in the alphabet, or `None` if `a` is not one of the 26 lowercase letters.
pub fn get_idx(a: char) -> Option<usize> {
    if !a.is_ascii() {
        return None;
    }
    match INDEX[a as usize] {
        NO_INDEX => None,
        idx => Some(idx as usize),
    }
}

pub(crate) fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase().chars().filter(|&x| get_idx(x).is_some()).collect()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, letter, normalize, ALPHABET_SIZE};

    #[test]
    fn indexes_follow_alphabet_order() {
        assert_eq!(get_idx('a'), Some(0));
        assert_eq!(get_idx('z'), Some(25));
        (0..ALPHABET_SIZE).for_each(|i| assert_eq!(get_idx(letter(i)), Some(i)));
    }

    #[test]
    fn rejects_symbols_outside_alphabet() {
        for c in ['A', 'Z', ' ', '-', '0', '{', '`', 'é', 'ß'] {
            assert_eq!(get_idx(c), None, "{:?}", c);
        }
    }

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize("Hello, World!"), "helloworld");
        assert_eq!(normalize("café-42"), "caf");
        assert_eq!(normalize(""), "");
    }
}
