use crate::{PointerBuf, Token};
use alloc::{boxed::Box, string::String, vec::Vec};
use quickcheck::{Arbitrary, Gen};

/// Characters which need escaping or read as indices turn up far more often
/// than in uniformly random strings.
const INTERESTING: &[&str] = &["~", "/", "~0", "~1", "-", "0", "01", "7", ""];

fn arbitrary_key(g: &mut Gen) -> String {
    if bool::arbitrary(g) {
        String::arbitrary(g)
    } else {
        let parts = usize::arbitrary(g) % 4;
        (0..parts)
            .filter_map(|_| g.choose(INTERESTING))
            .copied()
            .collect()
    }
}

impl Arbitrary for Token<'static> {
    fn arbitrary(g: &mut Gen) -> Self {
        Token::new(arbitrary_key(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.decoded().into_owned().shrink().map(Token::new))
    }
}

impl Arbitrary for PointerBuf {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % g.size().max(1);
        let tokens: Vec<Token> = (0..len).map(|_| Token::arbitrary(g)).collect();
        PointerBuf::from_tokens(tokens)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // drop one token at a time, starting from the back
        let mut shorter = self.clone();
        Box::new(core::iter::from_fn(move || {
            shorter.pop_back()?;
            Some(shorter.clone())
        }))
    }
}
