use std::convert::TryFrom;

/// ## Variable names
///
/// Minitran has exactly 26 variables, one per letter.
/// Lowercase letters name the same variable as uppercase.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Ident {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Ident {
    pub const COUNT: usize = 26;

    pub const ALL: [Ident; Ident::COUNT] = {
        use Ident::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ]
    };

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        char::from(b'A' + self as u8)
    }
}

impl TryFrom<char> for Ident {
    type Error = char;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            let index = ch.to_ascii_uppercase() as usize - 'A' as usize;
            Ok(Ident::ALL[index])
        } else {
            Err(ch)
        }
    }
}

impl TryFrom<&str> for Ident {
    type Error = ();
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ident::try_from(ch).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(Ident::try_from('a'), Ok(Ident::A));
        assert_eq!(Ident::try_from('Z'), Ok(Ident::Z));
        assert_eq!(Ident::try_from('q'), Ident::try_from('Q'));
    }

    #[test]
    fn test_not_a_letter() {
        assert_eq!(Ident::try_from('5'), Err('5'));
        assert_eq!(Ident::try_from('é'), Err('é'));
        assert_eq!(Ident::try_from(""), Err(()));
        assert_eq!(Ident::try_from("AB"), Err(()));
    }

    #[test]
    fn test_index_and_letter_agree() {
        for (index, ident) in Ident::ALL.iter().enumerate() {
            assert_eq!(ident.index(), index);
            assert_eq!(Ident::try_from(ident.letter()), Ok(*ident));
        }
    }
}
