//! `reg` declarations
//!
//! Accepted form: `[<width>] <name> = <expr>`, optionally ending in `;`.
//! The width is any non-empty text up to the first `]` and is stored as
//! written; the simulator is the one to judge it.

use super::cursor::{is_word_char, Cursor};
use crate::env::Binding;
use crate::errors::CommandError;

/// A parsed `reg` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegDecl<'a> {
    pub width: &'a str,
    pub name: &'a str,
    pub init: &'a str,
}

impl<'a> RegDecl<'a> {
    pub fn parse(arg: &'a str) -> Result<Self, CommandError> {
        let mut cursor = Cursor::new(arg.trim());

        if !cursor.eat('[') {
            return Err(CommandError::Syntax);
        }
        let width = cursor.take_until(']').ok_or(CommandError::Syntax)?;
        if width.trim().is_empty() {
            return Err(CommandError::Syntax);
        }
        cursor.eat(']');
        cursor.skip_whitespace();

        let name = cursor.take_while(is_word_char);
        if name.is_empty() {
            return Err(CommandError::Syntax);
        }
        cursor.skip_whitespace();

        // `==` is a comparison, not an initializer
        if !cursor.eat('=') || cursor.peek() == Some('=') {
            return Err(CommandError::Syntax);
        }
        cursor.skip_whitespace();

        let rest = cursor.rest();
        let init = rest.strip_suffix(';').unwrap_or(rest).trim_end();
        if init.is_empty() {
            return Err(CommandError::Syntax);
        }

        Ok(RegDecl { width, name, init })
    }

    pub fn binding(&self) -> Binding {
        Binding::new(self.width, self.init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_declaration() {
        let decl = RegDecl::parse("[7:0] a = 8'hff").unwrap();
        assert_eq!(
            decl,
            RegDecl {
                width: "7:0",
                name: "a",
                init: "8'hff"
            }
        );
    }

    #[test]
    fn test_trailing_semicolon_stripped_once() {
        assert_eq!(RegDecl::parse("[3:0] b = 4'b1010;").unwrap().init, "4'b1010");
        assert_eq!(RegDecl::parse("[3:0] b = 1;;").unwrap().init, "1;");
    }

    #[test]
    fn test_width_kept_verbatim() {
        let decl = RegDecl::parse("[WIDTH - 1 : 0] data_q = 0").unwrap();
        assert_eq!(decl.width, "WIDTH - 1 : 0");
        assert_eq!(decl.name, "data_q");
        assert_eq!(decl.binding(), Binding::new("WIDTH - 1 : 0", "0"));
    }

    #[test]
    fn test_tight_spacing() {
        let decl = RegDecl::parse("[1:0]x=2'd3").unwrap();
        assert_eq!((decl.width, decl.name, decl.init), ("1:0", "x", "2'd3"));
    }

    #[test]
    fn test_malformed() {
        for arg in [
            "",
            "a = 1",
            "[7:0 a = 1",
            "[] a = 1",
            "[7:0] = 1",
            "[7:0] a 1",
            "[7:0] a == 1",
            "[7:0] a = ",
            "[7:0] a = ;",
            "[7:0] a-b = 1",
        ] {
            assert!(
                matches!(RegDecl::parse(arg), Err(CommandError::Syntax)),
                "{:?} should be rejected",
                arg
            );
        }
    }
}
