use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Keyword modifiers on declarations and class members.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u16 {
        const EXPORT   = 1 << 0;
        const DEFAULT  = 1 << 1;
        const DECLARE  = 1 << 2;
        const ABSTRACT = 1 << 3;
        const STATIC   = 1 << 4;
        const READONLY = 1 << 5;
    }
}

impl ModifierFlags {
    /// Modifier keywords in the order they are written.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        [
            (ModifierFlags::EXPORT, "export"),
            (ModifierFlags::DEFAULT, "default"),
            (ModifierFlags::DECLARE, "declare"),
            (ModifierFlags::STATIC, "static"),
            (ModifierFlags::ABSTRACT, "abstract"),
            (ModifierFlags::READONLY, "readonly"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, keyword)| keyword)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

impl Accessibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
